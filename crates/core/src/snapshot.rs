//! Backup snapshot model: what was written during one environment run,
//! and the JSON document persisted for manual rollback.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::record::UpdateRecord;
use crate::types::Timestamp;

/// File-name placeholder when a run spans several group titles.
pub const MULTI_TITLE_PLACEHOLDER: &str = "MULTI_TITTLE";

/// One backed-up row: the values as last written to the environment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BackupEntry {
    pub code: String,
    pub id: String,
    pub group_title: String,
    pub chinese: String,
    pub english: String,
    pub vietnamese: String,
}

impl From<&UpdateRecord> for BackupEntry {
    fn from(record: &UpdateRecord) -> Self {
        Self {
            code: record.code.clone(),
            id: record.id.clone(),
            group_title: record.group_title.clone(),
            chinese: record.chinese.clone(),
            english: record.english.clone(),
            vietnamese: record.vietnamese.clone(),
        }
    }
}

/// The accumulated set of updated rows for one environment run, keyed by
/// `code|id`. Created fresh per run and never merged with prior backups.
#[derive(Debug, Default)]
pub struct BackupSnapshot {
    entries: BTreeMap<String, BackupEntry>,
}

impl BackupSnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `record` under its `code|id` key. A later record with the
    /// same key replaces the earlier entry (last write wins, matching
    /// update order).
    pub fn insert(&mut self, record: &UpdateRecord) {
        self.entries.insert(record.snapshot_key(), record.into());
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn entries(&self) -> &BTreeMap<String, BackupEntry> {
        &self.entries
    }
}

/// The `groupTitle` document field: a bare string for a single-title run,
/// a list when the run spans several titles.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum TitleSet {
    Single(String),
    Multiple(Vec<String>),
}

impl TitleSet {
    pub fn from_titles(titles: &[String]) -> Self {
        match titles {
            [single] => Self::Single(single.clone()),
            many => Self::Multiple(many.to_vec()),
        }
    }
}

/// The persisted backup document, serialized whole in one write.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BackupDocument {
    pub group_title: TitleSet,
    pub environment: String,
    pub exported_at: Timestamp,
    pub data: BTreeMap<String, BackupEntry>,
}

impl BackupDocument {
    pub fn new(
        environment: &str,
        exported_at: Timestamp,
        titles: &[String],
        snapshot: BackupSnapshot,
    ) -> Self {
        Self {
            group_title: TitleSet::from_titles(titles),
            environment: environment.to_string(),
            exported_at,
            data: snapshot.entries,
        }
    }
}

/// Replace each run of filesystem-unsafe characters with one underscore.
pub fn sanitize_title(title: &str) -> String {
    const UNSAFE: &[char] = &['<', '>', ':', '"', '/', '\\', '|', '?', '*'];
    let mut out = String::with_capacity(title.len());
    let mut in_run = false;
    for c in title.chars() {
        if UNSAFE.contains(&c) {
            if !in_run {
                out.push('_');
            }
            in_run = true;
        } else {
            out.push(c);
            in_run = false;
        }
    }
    out
}

/// Backup file name for one environment run: the sanitized title when the
/// run covers exactly one group, the multi-title placeholder otherwise.
pub fn backup_file_name(environment: &str, titles: &[String]) -> String {
    let stem = match titles {
        [single] => sanitize_title(single),
        _ => MULTI_TITLE_PLACEHOLDER.to_string(),
    };
    format!("{stem}_{environment}.json")
}
