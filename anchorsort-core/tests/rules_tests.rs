// Tests for keyword lists and the naked URL rule

use anchorsort_core::error::RulesError;
use anchorsort_core::rules::{DEFAULT_KEYWORDS, KeywordSet, NakedUrlRule};
use std::io::Write;
use tempfile::{NamedTempFile, tempdir};

#[test]
fn test_keyword_set_normalizes_entries() {
    let keywords = KeywordSet::new(["  Cheap Flights ", "", "cheap flights", "HOTELS"]);

    assert_eq!(keywords.len(), 2);
    assert!(keywords.contains("cheap flights"));
    assert!(keywords.contains("Hotels"));
    assert_eq!(keywords.sorted(), vec!["cheap flights", "hotels"]);
}

#[test]
fn test_keyword_set_parse_skips_comments_and_blanks() {
    let keywords = KeywordSet::parse("# travel vertical\n\ncheap flights\n  # indented comment\nhotels\n");

    assert_eq!(keywords.len(), 2);
    assert!(!keywords.contains("# travel vertical"));
}

#[test]
fn test_default_keyword_set_matches_constant() {
    let keywords = KeywordSet::default();
    assert_eq!(keywords.len(), DEFAULT_KEYWORDS.len());
    for phrase in DEFAULT_KEYWORDS {
        assert!(keywords.contains(phrase));
    }
}

#[test]
fn test_keyword_set_from_file() -> Result<(), Box<dyn std::error::Error>> {
    let mut temp_file = NamedTempFile::new()?;
    writeln!(temp_file, "# money keywords")?;
    writeln!(temp_file, "Payday Loans")?;
    writeln!(temp_file)?;
    writeln!(temp_file, "loans uk")?;

    let keywords = KeywordSet::from_file(temp_file.path())?;

    assert_eq!(keywords.len(), 2);
    assert!(keywords.contains("payday loans"));
    assert!(keywords.contains("LOANS UK"));

    Ok(())
}

#[test]
fn test_keyword_set_from_empty_file() {
    let mut temp_file = NamedTempFile::new().unwrap();
    writeln!(temp_file, "# nothing here").unwrap();
    writeln!(temp_file, "   ").unwrap();

    let result = KeywordSet::from_file(temp_file.path());

    assert!(matches!(result, Err(RulesError::EmptyKeywordFile(_))));
}

#[test]
fn test_keyword_set_from_missing_file() {
    let dir = tempdir().unwrap();
    let result = KeywordSet::from_file(&dir.path().join("keywords.txt"));

    let err = result.unwrap_err();
    assert!(matches!(err, RulesError::KeywordFile { .. }));
    assert!(err.to_string().contains("keywords.txt"));
}

#[test]
fn test_naked_url_markers_anywhere() {
    let rule = NakedUrlRule::default();
    assert!(rule.matches("go-to-www.example-now"));
    assert!(rule.matches("xhttps://"));
    assert!(!rule.matches("wwwexample"));
}

#[test]
fn test_naked_url_requires_no_whitespace() {
    let rule = NakedUrlRule::default();
    assert!(!rule.matches("see example.com"));
    assert!(!rule.matches("https://example.com\u{a0}page"));
}
