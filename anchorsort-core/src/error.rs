use std::path::PathBuf;
use thiserror::Error;

/// Why a single input file produced no result. None of these abort a batch.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProcessError {
    #[error("Required columns not found: {}", .missing.join(", "))]
    MissingColumns { missing: Vec<String> },

    #[error("Column '{column}' contains no target URL")]
    NoTargetUrl { column: String },

    #[error("Could not read file: {0}")]
    UnreadableFile(String),

    #[error("Error processing row {row}: {message}")]
    Processing { row: u64, message: String },
}

impl ProcessError {
    /// Skips are files without the data we need; everything else is a
    /// failure to read or process what was there.
    pub fn is_skip(&self) -> bool {
        matches!(
            self,
            ProcessError::MissingColumns { .. } | ProcessError::NoTargetUrl { .. }
        )
    }
}

#[derive(Error, Debug)]
pub enum RulesError {
    #[error("Failed to read keyword file {path}: {source}")]
    KeywordFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("No keywords found in {0}")]
    EmptyKeywordFile(PathBuf),
}

#[derive(Error, Debug)]
pub enum ExportError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Spreadsheet error: {0}")]
    XlsxError(#[from] rust_xlsxwriter::XlsxError),
}
