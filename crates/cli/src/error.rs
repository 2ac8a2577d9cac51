use std::io;
use std::path::PathBuf;

/// Failures that abort a run. Deliberate early stops (declined gates,
/// empty clipboard) are not errors and are modeled as flow outcomes.
#[derive(Debug, thiserror::Error)]
pub enum RunError {
    #[error("failed to connect to {environment}: {source}")]
    Connect {
        environment: String,
        #[source]
        source: sqlx::Error,
    },

    #[error("database write failed in {environment}: {source}")]
    Database {
        environment: String,
        #[source]
        source: sqlx::Error,
    },

    #[error("failed to write backup file {path}: {source}")]
    Backup {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to read confirmation input: {0}")]
    Prompt(#[source] io::Error),
}
