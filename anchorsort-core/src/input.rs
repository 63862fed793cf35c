// Tabular backlink export parsing

use crate::error::ProcessError;
use std::fs::File;
use std::io::{self, Cursor, Read};
use std::path::{Path, PathBuf};
use tracing::debug;

pub const DEFAULT_ANCHOR_COLUMN: &str = "Anchor";
pub const DEFAULT_TARGET_COLUMN: &str = "Target URL";

/// Which columns hold the anchor text and the target URL, and how fields
/// are separated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnSpec {
    pub anchor: String,
    pub target_url: String,
    pub delimiter: u8,
}

impl Default for ColumnSpec {
    fn default() -> Self {
        Self {
            anchor: DEFAULT_ANCHOR_COLUMN.to_string(),
            target_url: DEFAULT_TARGET_COLUMN.to_string(),
            delimiter: b',',
        }
    }
}

/// A named input document, either on disk or already in memory.
#[derive(Debug, Clone)]
pub struct InputFile {
    pub name: String,
    pub source: InputSource,
}

#[derive(Debug, Clone)]
pub enum InputSource {
    Path(PathBuf),
    Bytes(Vec<u8>),
}

impl InputFile {
    /// Named after the file's final path component.
    pub fn from_path(path: &Path) -> Self {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        Self {
            name,
            source: InputSource::Path(path.to_path_buf()),
        }
    }

    pub fn from_bytes(name: impl Into<String>, bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            name: name.into(),
            source: InputSource::Bytes(bytes.into()),
        }
    }

    pub fn open(&self) -> io::Result<Box<dyn Read + '_>> {
        match &self.source {
            InputSource::Path(path) => Ok(Box::new(File::open(path)?)),
            InputSource::Bytes(bytes) => Ok(Box::new(Cursor::new(bytes.as_slice()))),
        }
    }
}

/// The two things the classifier needs out of one file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnchorTable {
    /// Trimmed, non-empty anchors in row order.
    pub anchors: Vec<String>,
    /// First non-empty value of the target URL column.
    pub target_url: String,
}

pub fn read_anchor_table<R: Read>(
    reader: R,
    columns: &ColumnSpec,
) -> Result<AnchorTable, ProcessError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .delimiter(columns.delimiter)
        .from_reader(reader);

    let headers = reader
        .headers()
        .map_err(|e| ProcessError::UnreadableFile(e.to_string()))?
        .clone();

    if headers.iter().all(|h| h.trim().is_empty()) {
        return Err(ProcessError::UnreadableFile(
            "no header row found".to_string(),
        ));
    }

    let anchor_idx = headers.iter().position(|h| h == columns.anchor);
    let target_idx = headers.iter().position(|h| h == columns.target_url);

    let (anchor_idx, target_idx) = match (anchor_idx, target_idx) {
        (Some(a), Some(t)) => (a, t),
        (a, t) => {
            let mut missing = Vec::new();
            if a.is_none() {
                missing.push(columns.anchor.clone());
            }
            if t.is_none() {
                missing.push(columns.target_url.clone());
            }
            return Err(ProcessError::MissingColumns { missing });
        }
    };
    debug!(
        "Anchor column at {}, target URL column at {}",
        anchor_idx, target_idx
    );

    let mut anchors = Vec::new();
    let mut target_url: Option<String> = None;

    for (idx, record) in reader.records().enumerate() {
        let record = record.map_err(|e| ProcessError::Processing {
            row: e
                .position()
                .map(|p| p.line())
                .unwrap_or(idx as u64 + 2),
            message: e.to_string(),
        })?;

        if let Some(anchor) = non_empty(record.get(anchor_idx)) {
            anchors.push(anchor.to_string());
        }

        if target_url.is_none() {
            target_url = non_empty(record.get(target_idx)).map(str::to_string);
        }
    }

    let target_url = target_url.ok_or_else(|| ProcessError::NoTargetUrl {
        column: columns.target_url.clone(),
    })?;

    Ok(AnchorTable {
        anchors,
        target_url,
    })
}

fn non_empty(field: Option<&str>) -> Option<&str> {
    field.map(str::trim).filter(|s| !s.is_empty())
}
