//! Persists one environment run's backup snapshot as a JSON file.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use chrono::Utc;
use uilang_core::snapshot::{backup_file_name, BackupDocument, BackupSnapshot};

use crate::error::RunError;

/// Write `snapshot` under `<root>/<environment>/`, returning the path
/// written, or `None` without touching the filesystem when the snapshot
/// is empty.
///
/// The document is serialized whole and written in one operation. An
/// existing file at the same path is silently replaced: repeated runs
/// against the same title keep only the latest backup.
pub fn save(
    root: &Path,
    environment: &str,
    snapshot: BackupSnapshot,
    titles: &[String],
) -> Result<Option<PathBuf>, RunError> {
    if snapshot.is_empty() {
        return Ok(None);
    }

    let dir = root.join(environment);
    let path = dir.join(backup_file_name(environment, titles));
    let entries = snapshot.len();

    let document = BackupDocument::new(environment, Utc::now(), titles, snapshot);
    let json = serde_json::to_string_pretty(&document).map_err(|err| RunError::Backup {
        path: path.clone(),
        source: io::Error::other(err),
    })?;

    fs::create_dir_all(&dir).map_err(|source| RunError::Backup {
        path: dir.clone(),
        source,
    })?;
    fs::write(&path, json).map_err(|source| RunError::Backup {
        path: path.clone(),
        source,
    })?;

    tracing::info!(path = %path.display(), entries, "Backup saved");
    Ok(Some(path))
}
