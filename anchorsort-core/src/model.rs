use crate::classifier::CategoryTally;
use crate::error::ProcessError;
use serde::{Deserialize, Serialize};

/// One row of the combined table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileResult {
    pub file_name: String,
    pub target_url: String,
    #[serde(flatten)]
    pub tally: CategoryTally,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileFailure {
    pub file_name: String,
    pub error: ProcessError,
}

/// Outcome of a whole batch, in input order.
#[derive(Debug, Clone, Default)]
pub struct BatchSummary {
    pub results: Vec<FileResult>,
    pub failures: Vec<FileFailure>,
    pub total_files: usize,
}

impl BatchSummary {
    pub fn has_results(&self) -> bool {
        !self.results.is_empty()
    }

    pub fn skipped(&self) -> impl Iterator<Item = &FileFailure> {
        self.failures.iter().filter(|f| f.error.is_skip())
    }

    pub fn failed(&self) -> impl Iterator<Item = &FileFailure> {
        self.failures.iter().filter(|f| !f.error.is_skip())
    }

    /// Sum of every file's tally.
    pub fn combined_tally(&self) -> CategoryTally {
        self.results
            .iter()
            .fold(CategoryTally::default(), |mut acc, r| {
                acc.branded += r.tally.branded;
                acc.exact_match += r.tally.exact_match;
                acc.naked_url += r.tally.naked_url;
                acc.other_generic += r.tally.other_generic;
                acc
            })
    }
}
