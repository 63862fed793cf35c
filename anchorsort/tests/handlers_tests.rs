use anchorsort::handlers::*;
use anchorsort_core::ReportFormat;
use anchorsort_core::classifier::CategoryTally;
use anchorsort_core::error::ProcessError;
use anchorsort_core::model::{BatchSummary, FileFailure, FileResult};
use anchorsort_core::rules::KeywordSet;
use std::io::Write;
use std::path::PathBuf;
use tempfile::{NamedTempFile, tempdir};
use tracing::Level;

fn summary_with_results() -> BatchSummary {
    BatchSummary {
        results: vec![FileResult {
            file_name: "site-a.csv".to_string(),
            target_url: "https://www.example.com/".to_string(),
            tally: CategoryTally {
                branded: 2,
                exact_match: 1,
                naked_url: 1,
                other_generic: 3,
            },
        }],
        failures: vec![FileFailure {
            file_name: "site-b.csv".to_string(),
            error: ProcessError::MissingColumns {
                missing: vec!["Anchor".to_string()],
            },
        }],
        total_files: 2,
    }
}

#[test]
fn test_parse_delimiter_single_char() {
    assert_eq!(parse_delimiter(",").unwrap(), b',');
    assert_eq!(parse_delimiter(";").unwrap(), b';');
}

#[test]
fn test_parse_delimiter_tab() {
    assert_eq!(parse_delimiter("tab").unwrap(), b'\t');
    assert_eq!(parse_delimiter("\\t").unwrap(), b'\t');
}

#[test]
fn test_parse_delimiter_invalid() {
    assert!(parse_delimiter("").is_err());
    assert!(parse_delimiter(";;").is_err());
    assert!(parse_delimiter("§").is_err());
}

#[test]
fn test_load_rules_default() {
    let rules = load_rules(None).unwrap();
    assert_eq!(rules.keywords, KeywordSet::default());
}

#[test]
fn test_load_rules_from_file() -> Result<(), Box<dyn std::error::Error>> {
    let mut temp_file = NamedTempFile::new()?;
    writeln!(temp_file, "cheap flights")?;
    writeln!(temp_file, "last minute holidays")?;

    let path = PathBuf::from(temp_file.path());
    let rules = load_rules(Some(&path))?;

    assert_eq!(rules.keywords.len(), 2);
    assert!(!rules.keywords.contains("online casino"));

    Ok(())
}

#[test]
fn test_load_rules_empty_file() {
    let temp_file = NamedTempFile::new().unwrap();
    let path = PathBuf::from(temp_file.path());

    let result = load_rules(Some(&path));

    assert!(result.is_err());
    assert!(result.unwrap_err().to_string().contains("No keywords found"));
}

#[test]
fn test_resolve_output_path_default() {
    assert_eq!(
        resolve_output_path(None, ReportFormat::Xlsx),
        PathBuf::from("combined_anchor_counts.xlsx")
    );
    assert_eq!(
        resolve_output_path(None, ReportFormat::Csv),
        PathBuf::from("combined_anchor_counts.csv")
    );
}

#[test]
fn test_resolve_output_path_explicit() {
    let output = "reports/out.xlsx".to_string();
    assert_eq!(
        resolve_output_path(Some(&output), ReportFormat::Xlsx),
        PathBuf::from("reports/out.xlsx")
    );
}

#[test]
fn test_load_input_files_uses_file_names() {
    let paths = vec![
        PathBuf::from("exports/site-a.csv"),
        PathBuf::from("/tmp/site-b.csv"),
    ];
    let files = load_input_files(&paths);

    let names: Vec<&str> = files.iter().map(|f| f.name.as_str()).collect();
    assert_eq!(names, vec!["site-a.csv", "site-b.csv"]);
}

#[test]
fn test_render_keyword_file_round_trips() {
    let keywords = KeywordSet::default();
    let content = render_keyword_file(&keywords);

    assert!(content.starts_with('#'));
    assert_eq!(KeywordSet::parse(&content), keywords);
}

#[test]
fn test_verbosity_level_defaults_to_warnings() {
    assert_eq!(verbosity_level(0), Level::WARN);
    assert_eq!(verbosity_level(1), Level::INFO);
    assert_eq!(verbosity_level(2), Level::DEBUG);
    assert_eq!(verbosity_level(3), Level::TRACE);
    assert_eq!(verbosity_level(9), Level::TRACE);
}

// ============================================================================
// Summary and Export Tests
// ============================================================================

#[test]
fn test_report_summary_writes_export() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let output = dir.path().join("anchors.xlsx");

    let code = report_summary(&summary_with_results(), ReportFormat::Xlsx, &output, true);

    assert_eq!(code, 0);
    assert!(output.exists());

    Ok(())
}

#[test]
fn test_report_summary_without_results_writes_nothing() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let output = dir.path().join("anchors.csv");
    let summary = BatchSummary {
        results: Vec::new(),
        failures: vec![FileFailure {
            file_name: "broken.csv".to_string(),
            error: ProcessError::UnreadableFile("empty document".to_string()),
        }],
        total_files: 1,
    };

    let code = report_summary(&summary, ReportFormat::Csv, &output, true);

    assert_eq!(code, EXIT_NO_RESULTS);
    assert!(!output.exists());

    Ok(())
}

#[test]
fn test_report_summary_empty_batch() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let output = dir.path().join("anchors.xlsx");

    let code = report_summary(&BatchSummary::default(), ReportFormat::Xlsx, &output, false);

    assert_eq!(code, EXIT_NO_RESULTS);
    assert!(!output.exists());

    Ok(())
}

#[test]
fn test_report_summary_unwritable_output() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let output = dir.path().join("missing").join("anchors.csv");

    let code = report_summary(&summary_with_results(), ReportFormat::Csv, &output, true);

    assert_eq!(code, EXIT_CONFIG);
    assert!(!output.exists());

    Ok(())
}
