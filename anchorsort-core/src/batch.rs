// Sequential processing of a batch of backlink exports

use crate::brand::extract_brand_identity;
use crate::classifier::Classifier;
use crate::error::ProcessError;
use crate::input::{ColumnSpec, InputFile, read_anchor_table};
use crate::model::{BatchSummary, FileFailure, FileResult};
use std::io::Read;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Reported once per input file, after it has been handled.
pub struct FileEvent<'a> {
    pub file_name: &'a str,
    pub completed: usize,
    pub total: usize,
    pub outcome: Result<&'a FileResult, &'a ProcessError>,
}

/// Callback for reporting batch progress
pub type BatchProgressCallback = Arc<dyn Fn(&FileEvent<'_>) + Send + Sync>;

/// Options for configuring a batch run
#[derive(Debug, Clone, Default)]
pub struct BatchOptions {
    pub columns: ColumnSpec,
    pub classifier: Classifier,
}

/// Classify one file's anchors against the brand of its target URL.
pub fn process_file<R: Read>(
    file_name: &str,
    reader: R,
    options: &BatchOptions,
) -> Result<FileResult, ProcessError> {
    let table = read_anchor_table(reader, &options.columns)?;
    let brand = extract_brand_identity(&table.target_url);

    if brand.is_empty() {
        warn!(
            "{}: target URL '{}' has no host, no anchor can be branded",
            file_name, table.target_url
        );
    } else {
        debug!(
            "{}: brand variants '{}' / '{}'",
            file_name, brand.full_host, brand.root_label
        );
    }

    let tally = options.classifier.classify(&table.anchors, &brand);

    Ok(FileResult {
        file_name: file_name.to_string(),
        target_url: table.target_url,
        tally,
    })
}

/// Process every file in order. A file that cannot be used is recorded as a
/// failure and the batch moves on.
pub fn run_batch(
    files: &[InputFile],
    options: &BatchOptions,
    progress_callback: Option<BatchProgressCallback>,
) -> BatchSummary {
    let mut summary = BatchSummary {
        total_files: files.len(),
        ..BatchSummary::default()
    };

    for (idx, file) in files.iter().enumerate() {
        let outcome = file
            .open()
            .map_err(|e| ProcessError::UnreadableFile(e.to_string()))
            .and_then(|reader| process_file(&file.name, reader, options));

        match &outcome {
            Ok(result) => info!(
                "Processed {}: {} anchors ({} branded, {} exact match, {} naked URL, {} other)",
                file.name,
                result.tally.total(),
                result.tally.branded,
                result.tally.exact_match,
                result.tally.naked_url,
                result.tally.other_generic
            ),
            Err(e) if e.is_skip() => warn!("Skipping {}: {}", file.name, e),
            Err(e) => warn!("Failed to process {}: {}", file.name, e),
        }

        if let Some(ref callback) = progress_callback {
            callback(&FileEvent {
                file_name: &file.name,
                completed: idx + 1,
                total: files.len(),
                outcome: outcome.as_ref(),
            });
        }

        match outcome {
            Ok(result) => summary.results.push(result),
            Err(error) => summary.failures.push(FileFailure {
                file_name: file.name.clone(),
                error,
            }),
        }
    }

    summary
}
