//! The per-environment update loop: decides which rows to write, tracks
//! outcomes, and persists the backup snapshot.

use std::path::Path;

use uilang_core::outcome::{EnvironmentReport, UpdateOutcome};
use uilang_core::record::{distinct_titles, UpdateRecord};
use uilang_core::snapshot::BackupSnapshot;
use uilang_db::repositories::ui_language_repo::UiLanguageRepo;
use uilang_db::DbPool;

use crate::backup;
use crate::error::RunError;

/// Apply `records` to one environment, in input order, one conditional
/// write at a time.
///
/// Records with all three localized fields empty never reach the
/// database. The first database failure aborts the remainder of the run;
/// whatever snapshot accumulated by then is still written before the
/// failure is surfaced. Group titles for the backup come from the full
/// input set, not only the updated subset.
pub async fn run_environment(
    environment: &str,
    pool: &DbPool,
    records: &[UpdateRecord],
    backup_root: &Path,
) -> Result<EnvironmentReport, RunError> {
    tracing::info!(environment, rows = records.len(), "Starting update run");

    let titles = distinct_titles(records);
    let mut report = EnvironmentReport::default();
    let mut snapshot = BackupSnapshot::new();
    let mut failure = None;

    for record in records {
        if !record.has_translations() {
            report.record(UpdateOutcome::SkippedEmpty);
            continue;
        }

        match UiLanguageRepo::update_translations(pool, record).await {
            Ok(affected) if affected > 0 => {
                report.record(UpdateOutcome::Updated);
                snapshot.insert(record);
                tracing::info!(environment, code = %record.code, id = %record.id, "Row updated");
            }
            Ok(_) => {
                report.record(UpdateOutcome::NotFound);
                tracing::warn!(environment, code = %record.code, id = %record.id, "Row not found");
            }
            Err(err) => {
                failure = Some(err);
                break;
            }
        }
    }

    tracing::info!(
        environment,
        updated = report.updated,
        not_found = report.not_found,
        skipped_empty = report.skipped_empty,
        "Update run summary"
    );

    backup::save(backup_root, environment, snapshot, &titles)?;

    if let Some(source) = failure {
        tracing::error!(environment, error = %source, "Update run aborted");
        return Err(RunError::Database {
            environment: environment.to_string(),
            source,
        });
    }

    Ok(report)
}
