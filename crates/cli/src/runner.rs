//! The real environment runner: connect, run the update loop, release
//! the session.

use std::path::PathBuf;

use async_trait::async_trait;

use uilang_core::outcome::EnvironmentReport;
use uilang_core::record::UpdateRecord;

use crate::config::EnvironmentConfig;
use crate::error::RunError;
use crate::flow::EnvironmentRunner;
use crate::updater;

/// Opens a fresh connection pool per environment run and closes it
/// whether the run completed or aborted.
pub struct DatabaseRunner {
    backup_root: PathBuf,
}

impl DatabaseRunner {
    pub fn new(backup_root: PathBuf) -> Self {
        Self { backup_root }
    }
}

#[async_trait]
impl EnvironmentRunner for DatabaseRunner {
    async fn run(
        &mut self,
        environment: &EnvironmentConfig,
        records: &[UpdateRecord],
    ) -> Result<EnvironmentReport, RunError> {
        let pool = uilang_db::create_pool(&environment.database_url)
            .await
            .map_err(|source| RunError::Connect {
                environment: environment.name.clone(),
                source,
            })?;
        tracing::info!(environment = %environment.name, "Connected");

        let result =
            updater::run_environment(&environment.name, &pool, records, &self.backup_root).await;

        pool.close().await;

        result
    }
}
