// Combined table rendering and export

use crate::classifier::AnchorCategory;
use crate::error::ExportError;
use crate::model::FileResult;
use rust_xlsxwriter::{Format, Workbook};
use std::fs::File;
use std::io::Write;
use std::path::Path;
use tracing::{debug, info};

pub const SHEET_NAME: &str = "Anchor Analysis";
pub const DEFAULT_OUTPUT_STEM: &str = "combined_anchor_counts";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportFormat {
    Xlsx,
    Csv,
    Json,
    Markdown,
    Text,
}

impl ReportFormat {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "xlsx" | "excel" => Some(ReportFormat::Xlsx),
            "csv" => Some(ReportFormat::Csv),
            "json" => Some(ReportFormat::Json),
            "markdown" | "md" => Some(ReportFormat::Markdown),
            "text" | "txt" => Some(ReportFormat::Text),
            _ => None,
        }
    }

    pub fn extension(&self) -> &'static str {
        match self {
            ReportFormat::Xlsx => "xlsx",
            ReportFormat::Csv => "csv",
            ReportFormat::Json => "json",
            ReportFormat::Markdown => "md",
            ReportFormat::Text => "txt",
        }
    }

    pub fn default_file_name(&self) -> String {
        format!("{}.{}", DEFAULT_OUTPUT_STEM, self.extension())
    }
}

/// Header row shared by every tabular format.
pub fn column_headers() -> Vec<&'static str> {
    let mut headers = vec!["File Name", "Target URL"];
    headers.extend(AnchorCategory::ALL.iter().map(AnchorCategory::label));
    headers
}

fn row_cells(result: &FileResult) -> Vec<String> {
    let mut cells = vec![result.file_name.clone(), result.target_url.clone()];
    cells.extend(
        AnchorCategory::ALL
            .iter()
            .map(|c| result.tally.get(*c).to_string()),
    );
    cells
}

/// Aligned plain-text table for terminal display.
pub fn generate_text_report(results: &[FileResult]) -> String {
    let headers = column_headers();
    let rows: Vec<Vec<String>> = results.iter().map(row_cells).collect();

    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let format_line = |cells: &[String]| {
        cells
            .iter()
            .zip(&widths)
            .enumerate()
            .map(|(idx, (cell, width))| {
                // Text columns left-aligned, counts right-aligned
                if idx < 2 {
                    format!("{:<width$}", cell, width = *width)
                } else {
                    format!("{:>width$}", cell, width = *width)
                }
            })
            .collect::<Vec<_>>()
            .join("  ")
            .trim_end()
            .to_string()
    };

    let header_cells: Vec<String> = headers.iter().map(|h| h.to_string()).collect();
    let total_width = widths.iter().sum::<usize>() + 2 * widths.len().saturating_sub(1);

    let mut report = String::new();
    report.push_str(&format_line(&header_cells));
    report.push('\n');
    report.push_str(&"─".repeat(total_width));
    report.push('\n');
    for row in &rows {
        report.push_str(&format_line(row));
        report.push('\n');
    }

    report
}

pub fn generate_markdown_report(results: &[FileResult]) -> String {
    let headers = column_headers();
    let escape = |cell: &str| cell.replace('|', "\\|");

    let mut report = String::new();
    report.push_str(&format!("| {} |\n", headers.join(" | ")));
    report.push_str(&format!(
        "|{}\n",
        headers
            .iter()
            .enumerate()
            .map(|(idx, _)| if idx < 2 { " --- |" } else { " ---: |" })
            .collect::<String>()
    ));

    for result in results {
        let cells: Vec<String> = row_cells(result).iter().map(|c| escape(c)).collect();
        report.push_str(&format!("| {} |\n", cells.join(" | ")));
    }

    report
}

pub fn generate_json_report(results: &[FileResult]) -> Result<String, serde_json::Error> {
    let total_anchors: u64 = results.iter().map(|r| r.tally.total()).sum();

    let json_report = serde_json::json!({
        "report": {
            "metadata": {
                "generator": "Anchorsort",
                "version": env!("CARGO_PKG_VERSION"),
                "generated_at": chrono::Utc::now().to_rfc3339(),
                "format": "json"
            },
            "summary": {
                "files": results.len(),
                "total_anchors": total_anchors
            },
            "results": results
        }
    });

    serde_json::to_string_pretty(&json_report)
}

pub fn write_csv<W: Write>(results: &[FileResult], writer: W) -> Result<(), ExportError> {
    let mut wtr = csv::Writer::from_writer(writer);

    wtr.write_record(column_headers())?;
    for result in results {
        wtr.write_record(row_cells(result))?;
    }

    wtr.flush()?;
    Ok(())
}

/// Build a single-sheet workbook: header row plus one row per file.
pub fn build_workbook(results: &[FileResult]) -> Result<Workbook, ExportError> {
    let mut workbook = Workbook::new();
    let header_format = Format::new().set_bold();

    let worksheet = workbook.add_worksheet();
    worksheet.set_name(SHEET_NAME)?;

    for (col, header) in column_headers().iter().enumerate() {
        worksheet.write_string_with_format(0, col as u16, *header, &header_format)?;
    }

    for (idx, result) in results.iter().enumerate() {
        let row = idx as u32 + 1;
        worksheet.write_string(row, 0, &result.file_name)?;
        worksheet.write_string(row, 1, &result.target_url)?;
        for (offset, category) in AnchorCategory::ALL.iter().enumerate() {
            worksheet.write_number(row, 2 + offset as u16, result.tally.get(*category) as f64)?;
        }
    }

    worksheet.autofit();
    Ok(workbook)
}

pub fn generate_xlsx(results: &[FileResult]) -> Result<Vec<u8>, ExportError> {
    let mut workbook = build_workbook(results)?;
    Ok(workbook.save_to_buffer()?)
}

/// Write the combined table to `path` in the requested format.
pub fn export_results(
    results: &[FileResult],
    format: ReportFormat,
    path: &Path,
) -> Result<(), ExportError> {
    debug!(
        "Exporting {} results as {:?} to {}",
        results.len(),
        format,
        path.display()
    );

    match format {
        ReportFormat::Xlsx => {
            let mut workbook = build_workbook(results)?;
            workbook.save(path)?;
        }
        ReportFormat::Csv => write_csv(results, File::create(path)?)?,
        ReportFormat::Json => save_report(&generate_json_report(results)?, path)?,
        ReportFormat::Markdown => save_report(&generate_markdown_report(results), path)?,
        ReportFormat::Text => save_report(&generate_text_report(results), path)?,
    }

    info!("Exported {} results to {}", results.len(), path.display());
    Ok(())
}

pub fn save_report(content: &str, path: &Path) -> std::io::Result<()> {
    let mut file = File::create(path)?;
    file.write_all(content.as_bytes())?;
    Ok(())
}
