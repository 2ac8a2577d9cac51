//! The staged confirmation flow: parse, preview, gate, TEST, gate, PROD.
//!
//! The flow is linear with no branching back. It can stop deliberately
//! at either gate (a [`FlowOutcome::Cancelled`], not a failure) and
//! aborts on the first hard error from an environment run.

use async_trait::async_trait;

use uilang_core::outcome::EnvironmentReport;
use uilang_core::parser::{parse_clipboard, ParseOutput};
use uilang_core::record::{distinct_titles, UpdateRecord};

use crate::config::EnvironmentConfig;
use crate::error::RunError;
use crate::gate::ConfirmationGate;
use crate::preview::{print_preview, PREVIEW_LIMIT};

/// Rejection lines reported before the preview.
const MAX_REJECTIONS_SHOWN: usize = 10;

/// Why a run stopped early. Each is a deliberate, successful stop,
/// distinguishable from failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CancelReason {
    EmptyClipboard,
    NoValidRecords,
    DeclinedOverall,
    /// The PROD gate was declined; TEST changes and backup remain.
    DeclinedProd,
}

/// Terminal state of one flow execution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlowOutcome {
    Completed,
    Cancelled(CancelReason),
}

/// Applies one validated record set to a named environment.
#[async_trait]
pub trait EnvironmentRunner {
    async fn run(
        &mut self,
        environment: &EnvironmentConfig,
        records: &[UpdateRecord],
    ) -> Result<EnvironmentReport, RunError>;
}

pub struct ConfirmationFlow<'a, G> {
    gate: &'a mut G,
}

impl<'a, G: ConfirmationGate> ConfirmationFlow<'a, G> {
    pub fn new(gate: &'a mut G) -> Self {
        Self { gate }
    }

    /// Run the full staged flow over `raw` clipboard text.
    ///
    /// TEST runs before PROD with a second gate between them; an
    /// environment absent from `environments` is skipped silently and
    /// the flow proceeds to the next applicable step. Declining the
    /// PROD gate keeps the TEST changes and backup.
    pub async fn execute<R: EnvironmentRunner>(
        &mut self,
        raw: &str,
        environments: &[EnvironmentConfig],
        runner: &mut R,
    ) -> Result<FlowOutcome, RunError> {
        if raw.trim().is_empty() {
            println!("Clipboard is empty. Copy the rows first, then run again.");
            return Ok(FlowOutcome::Cancelled(CancelReason::EmptyClipboard));
        }

        let ParseOutput {
            records,
            rejections,
        } = parse_clipboard(raw);

        println!("Clipboard rows parsed: {}", records.len());
        if !rejections.is_empty() {
            println!("Parse rejections: {}", rejections.len());
            for rejection in rejections.iter().take(MAX_REJECTIONS_SHOWN) {
                println!(
                    "  - line {}: {} | {}",
                    rejection.line,
                    rejection.reason.message(),
                    rejection.raw
                );
            }
        }

        if records.is_empty() {
            println!("No valid rows to update.");
            return Ok(FlowOutcome::Cancelled(CancelReason::NoValidRecords));
        }

        print_preview(&records, PREVIEW_LIMIT);

        let titles = distinct_titles(&records);
        let prompt = format!(
            "Continue update {} rows for groupTitle=[{}]? (y/N): ",
            records.len(),
            titles.join(", ")
        );
        if !self.gate.confirm(&prompt).map_err(RunError::Prompt)? {
            println!("Cancelled.");
            return Ok(FlowOutcome::Cancelled(CancelReason::DeclinedOverall));
        }

        if let Some(test) = environments.iter().find(|e| e.name == "TEST") {
            runner.run(test, &records).await?;
        }

        if let Some(prod) = environments.iter().find(|e| e.name == "PROD") {
            let confirmed = self
                .gate
                .confirm("TEST done. Continue update PROD? (y/N): ")
                .map_err(RunError::Prompt)?;
            if !confirmed {
                println!("Stopped before PROD.");
                return Ok(FlowOutcome::Cancelled(CancelReason::DeclinedProd));
            }
            runner.run(prod, &records).await?;
        }

        println!("All environments updated.");
        Ok(FlowOutcome::Completed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    use crate::gate::ScriptedGate;

    const INPUT: &str = "C1\ta\tb\tc\tG\t1\nC2\ta\tb\tc\tG\t2";

    #[derive(Default)]
    struct RecordingRunner {
        runs: Vec<(String, usize)>,
        fail_on: Option<&'static str>,
    }

    #[async_trait]
    impl EnvironmentRunner for RecordingRunner {
        async fn run(
            &mut self,
            environment: &EnvironmentConfig,
            records: &[UpdateRecord],
        ) -> Result<EnvironmentReport, RunError> {
            self.runs.push((environment.name.clone(), records.len()));
            if self.fail_on == Some(environment.name.as_str()) {
                return Err(RunError::Database {
                    environment: environment.name.clone(),
                    source: sqlx::Error::PoolClosed,
                });
            }
            Ok(EnvironmentReport::default())
        }
    }

    fn env(name: &str) -> EnvironmentConfig {
        EnvironmentConfig {
            name: name.to_string(),
            database_url: format!("postgres://localhost/{}", name.to_lowercase()),
        }
    }

    fn both_envs() -> Vec<EnvironmentConfig> {
        vec![env("TEST"), env("PROD")]
    }

    #[tokio::test]
    async fn empty_clipboard_cancels_before_any_gate() {
        let mut gate = ScriptedGate::new(&[true, true]);
        let mut runner = RecordingRunner::default();
        let outcome = ConfirmationFlow::new(&mut gate)
            .execute("  \n ", &both_envs(), &mut runner)
            .await
            .unwrap();

        assert_matches!(
            outcome,
            FlowOutcome::Cancelled(CancelReason::EmptyClipboard)
        );
        assert!(runner.runs.is_empty());
        assert!(gate.prompts.is_empty());
    }

    #[tokio::test]
    async fn no_valid_records_cancels_before_any_gate() {
        let mut gate = ScriptedGate::new(&[true, true]);
        let mut runner = RecordingRunner::default();
        let outcome = ConfirmationFlow::new(&mut gate)
            .execute("not\ttabular", &both_envs(), &mut runner)
            .await
            .unwrap();

        assert_matches!(
            outcome,
            FlowOutcome::Cancelled(CancelReason::NoValidRecords)
        );
        assert!(runner.runs.is_empty());
        assert!(gate.prompts.is_empty());
    }

    #[tokio::test]
    async fn declining_overall_gate_runs_nothing() {
        let mut gate = ScriptedGate::new(&[false]);
        let mut runner = RecordingRunner::default();
        let outcome = ConfirmationFlow::new(&mut gate)
            .execute(INPUT, &both_envs(), &mut runner)
            .await
            .unwrap();

        assert_matches!(
            outcome,
            FlowOutcome::Cancelled(CancelReason::DeclinedOverall)
        );
        assert!(runner.runs.is_empty());
    }

    #[tokio::test]
    async fn declining_prod_gate_keeps_test_run() {
        let mut gate = ScriptedGate::new(&[true, false]);
        let mut runner = RecordingRunner::default();
        let outcome = ConfirmationFlow::new(&mut gate)
            .execute(INPUT, &both_envs(), &mut runner)
            .await
            .unwrap();

        assert_matches!(outcome, FlowOutcome::Cancelled(CancelReason::DeclinedProd));
        assert_eq!(runner.runs, vec![("TEST".to_string(), 2)]);
    }

    #[tokio::test]
    async fn full_confirmation_runs_test_then_prod() {
        let mut gate = ScriptedGate::new(&[true, true]);
        let mut runner = RecordingRunner::default();
        let outcome = ConfirmationFlow::new(&mut gate)
            .execute(INPUT, &both_envs(), &mut runner)
            .await
            .unwrap();

        assert_matches!(outcome, FlowOutcome::Completed);
        assert_eq!(
            runner.runs,
            vec![("TEST".to_string(), 2), ("PROD".to_string(), 2)]
        );
        assert_eq!(gate.prompts.len(), 2);
    }

    #[tokio::test]
    async fn overall_prompt_names_count_and_titles() {
        let mut gate = ScriptedGate::new(&[false]);
        let mut runner = RecordingRunner::default();
        ConfirmationFlow::new(&mut gate)
            .execute(INPUT, &both_envs(), &mut runner)
            .await
            .unwrap();

        assert_eq!(
            gate.prompts[0],
            "Continue update 2 rows for groupTitle=[G]? (y/N): "
        );
    }

    #[tokio::test]
    async fn missing_prod_completes_after_test_with_one_prompt() {
        let mut gate = ScriptedGate::new(&[true]);
        let mut runner = RecordingRunner::default();
        let outcome = ConfirmationFlow::new(&mut gate)
            .execute(INPUT, &[env("TEST")], &mut runner)
            .await
            .unwrap();

        assert_matches!(outcome, FlowOutcome::Completed);
        assert_eq!(runner.runs, vec![("TEST".to_string(), 2)]);
        assert_eq!(gate.prompts.len(), 1);
    }

    #[tokio::test]
    async fn missing_test_still_gates_prod() {
        let mut gate = ScriptedGate::new(&[true, true]);
        let mut runner = RecordingRunner::default();
        let outcome = ConfirmationFlow::new(&mut gate)
            .execute(INPUT, &[env("PROD")], &mut runner)
            .await
            .unwrap();

        assert_matches!(outcome, FlowOutcome::Completed);
        assert_eq!(runner.runs, vec![("PROD".to_string(), 2)]);
        assert_eq!(gate.prompts.len(), 2);
    }

    #[tokio::test]
    async fn test_failure_stops_before_prod_gate() {
        let mut gate = ScriptedGate::new(&[true, true]);
        let mut runner = RecordingRunner {
            fail_on: Some("TEST"),
            ..Default::default()
        };
        let result = ConfirmationFlow::new(&mut gate)
            .execute(INPUT, &both_envs(), &mut runner)
            .await;

        assert_matches!(result, Err(RunError::Database { .. }));
        assert_eq!(runner.runs, vec![("TEST".to_string(), 2)]);
        // The PROD gate was never reached.
        assert_eq!(gate.prompts.len(), 1);
    }
}
