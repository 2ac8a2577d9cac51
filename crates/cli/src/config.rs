use std::path::PathBuf;

/// Environment names the confirmation flow sequences, in run order.
pub const ENVIRONMENT_NAMES: &[&str] = &["TEST", "PROD"];

/// A named target database.
#[derive(Debug, Clone)]
pub struct EnvironmentConfig {
    pub name: String,
    pub database_url: String,
}

/// Tool configuration loaded from environment variables.
///
/// | Env Var             | Meaning                                     |
/// |---------------------|---------------------------------------------|
/// | `TEST_DATABASE_URL` | Connection URL for the TEST environment     |
/// | `PROD_DATABASE_URL` | Connection URL for the PROD environment     |
/// | `UILANG_BACKUP_DIR` | Backup root (default `ui_language_backup`)  |
///
/// An environment whose URL variable is unset is skipped by the flow,
/// not treated as an error.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environments: Vec<EnvironmentConfig>,
    pub backup_root: PathBuf,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let environments = ENVIRONMENT_NAMES
            .iter()
            .filter_map(|name| {
                std::env::var(format!("{name}_DATABASE_URL"))
                    .ok()
                    .filter(|url| !url.trim().is_empty())
                    .map(|database_url| EnvironmentConfig {
                        name: (*name).to_string(),
                        database_url,
                    })
            })
            .collect();

        let backup_root = std::env::var("UILANG_BACKUP_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("ui_language_backup"));

        Self {
            environments,
            backup_root,
        }
    }
}
