use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use uilang_cli::clipboard;
use uilang_cli::config::AppConfig;
use uilang_cli::flow::{ConfirmationFlow, FlowOutcome};
use uilang_cli::gate::InteractiveGate;
use uilang_cli::runner::DatabaseRunner;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "uilang_cli=info,uilang_db=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = AppConfig::from_env();
    if config.environments.is_empty() {
        tracing::warn!(
            "No environments configured; set TEST_DATABASE_URL and/or PROD_DATABASE_URL"
        );
        return Ok(());
    }

    let raw = clipboard::read_text()?;

    let mut gate = InteractiveGate;
    let mut runner = DatabaseRunner::new(config.backup_root.clone());
    let outcome = ConfirmationFlow::new(&mut gate)
        .execute(&raw, &config.environments, &mut runner)
        .await?;

    if outcome == FlowOutcome::Completed {
        tracing::info!("All environment runs finished");
    }

    Ok(())
}
