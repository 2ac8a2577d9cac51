//! Per-record update outcomes and per-environment counters.

/// How a single record fared against one environment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateOutcome {
    /// The conditional update matched at least one row; the record
    /// contributes to the environment's backup snapshot.
    Updated,
    /// The conditional update matched zero rows (the business key does
    /// not exist in that environment). Logged, not fatal.
    NotFound,
    /// All three localized fields were empty; the record was never sent
    /// to the database.
    SkippedEmpty,
}

impl UpdateOutcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Updated => "updated",
            Self::NotFound => "not_found",
            Self::SkippedEmpty => "skipped_empty",
        }
    }
}

impl std::fmt::Display for UpdateOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome counts for one environment run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct EnvironmentReport {
    pub updated: usize,
    pub not_found: usize,
    pub skipped_empty: usize,
}

impl EnvironmentReport {
    pub fn record(&mut self, outcome: UpdateOutcome) {
        match outcome {
            UpdateOutcome::Updated => self.updated += 1,
            UpdateOutcome::NotFound => self.not_found += 1,
            UpdateOutcome::SkippedEmpty => self.skipped_empty += 1,
        }
    }

    pub fn total(&self) -> usize {
        self.updated + self.not_found + self.skipped_empty
    }
}
