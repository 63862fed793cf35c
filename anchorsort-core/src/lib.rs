//! Backlink anchor text classification.
//!
//! Each backlink export is reduced to its anchors and its target URL. The
//! target URL yields a [`BrandIdentity`], and every anchor is assigned to one
//! of four [`AnchorCategory`] buckets by a [`Classifier`]. A batch of exports
//! becomes one [`FileResult`] per usable file, which [`report`] renders or
//! exports as a single combined table.

pub mod batch;
pub mod brand;
pub mod classifier;
pub mod error;
pub mod input;
pub mod model;
pub mod report;
pub mod rules;

pub use batch::{BatchOptions, BatchProgressCallback, FileEvent, process_file, run_batch};
pub use brand::{BrandIdentity, extract_brand_identity};
pub use classifier::{AnchorCategory, CategoryTally, Classifier};
pub use error::{ExportError, ProcessError, RulesError};
pub use input::{ColumnSpec, InputFile, InputSource};
pub use model::{BatchSummary, FileFailure, FileResult};
pub use report::ReportFormat;
pub use rules::{ClassifierRules, KeywordSet, NakedUrlRule};
