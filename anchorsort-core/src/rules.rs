// Immutable rule data consumed by the anchor classifier

use crate::error::RulesError;
use regex::Regex;
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use std::sync::LazyLock;
use tracing::debug;

/// Built-in exact-match vocabulary (UK online casino vertical).
pub const DEFAULT_KEYWORDS: &[&str] = &[
    "online casino uk",
    "uk casino",
    "casino sites",
    "best online casino",
    "casino uk",
    "casino online uk",
    "online casinos uk",
    "online casinos",
    "best online casino uk",
    "casino sites uk",
    "casinos",
    "uk casino sites",
    "best casino sites",
    "uk online casino",
    "casinos online",
    "uk casinos",
    "top 50 online casinos uk",
    "best online casinos",
    "casino uk online",
    "casino games uk",
    "best uk casino",
    "online casinos in uk",
    "best casino",
    "uk online casinos list",
    "best casino online",
    "best casino uk",
    "top 20 online casinos uk",
    "uk casino online",
    "casinos uk",
    "best online casinos uk",
    "best uk online casino",
    "online uk casino",
    "uk online casinos",
    "best casino sites uk",
    "best casinos",
    "top online casinos",
    "top 100 online casinos uk",
    "casino websites",
    "top 10 online casinos",
    "best casino online uk",
    "top casino sites",
    "best uk casino sites",
    "top 10 casino sites",
    "online casino sites",
    "best uk casinos",
    "top casino online",
    "top uk casinos",
    "casinos online uk",
    "top casinos",
    "top 10 casino online uk",
    "online casino",
];

/// Markers that make an anchor look like a web address wherever they appear.
pub const URL_MARKERS: &[&str] = &["http://", "https://", "www."];

/// Suffixes that make an anchor look like a bare domain.
pub const TLD_SUFFIXES: &[&str] = &[".com", ".net", ".org", ".co", ".uk"];

static DEFAULT_NAKED_URL_PATTERN: LazyLock<Option<Regex>> =
    LazyLock::new(|| build_naked_url_pattern(URL_MARKERS, TLD_SUFFIXES));

/// Exact-match keyword phrases, stored lowercased and trimmed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeywordSet {
    phrases: HashSet<String>,
}

impl KeywordSet {
    pub fn new<I, S>(phrases: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let phrases = phrases
            .into_iter()
            .map(|p| p.as_ref().trim().to_lowercase())
            .filter(|p| !p.is_empty())
            .collect();
        Self { phrases }
    }

    /// Load a newline-delimited keyword list. Blank lines and lines starting
    /// with `#` are ignored.
    pub fn from_file(path: &Path) -> Result<Self, RulesError> {
        let content = fs::read_to_string(path).map_err(|source| RulesError::KeywordFile {
            path: path.to_path_buf(),
            source,
        })?;

        let set = Self::parse(&content);
        if set.is_empty() {
            return Err(RulesError::EmptyKeywordFile(path.to_path_buf()));
        }

        debug!("Loaded {} keywords from {}", set.len(), path.display());
        Ok(set)
    }

    pub fn parse(content: &str) -> Self {
        Self::new(
            content
                .lines()
                .map(str::trim)
                .filter(|line| !line.starts_with('#')),
        )
    }

    pub fn contains(&self, anchor: &str) -> bool {
        self.phrases.contains(&anchor.to_lowercase())
    }

    pub fn len(&self) -> usize {
        self.phrases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.phrases.is_empty()
    }

    /// Phrases in alphabetical order, for listing and export.
    pub fn sorted(&self) -> Vec<&str> {
        let mut phrases: Vec<&str> = self.phrases.iter().map(String::as_str).collect();
        phrases.sort_unstable();
        phrases
    }
}

impl Default for KeywordSet {
    fn default() -> Self {
        Self::new(DEFAULT_KEYWORDS)
    }
}

/// Recognizes anchors that are themselves a web address.
#[derive(Debug, Clone)]
pub struct NakedUrlRule {
    pattern: Option<Regex>,
}

impl NakedUrlRule {
    pub fn new(markers: &[&str], suffixes: &[&str]) -> Self {
        Self {
            pattern: build_naked_url_pattern(markers, suffixes),
        }
    }

    /// Whitespace anywhere disqualifies the anchor, whatever the pattern says.
    pub fn matches(&self, anchor: &str) -> bool {
        if anchor.chars().any(char::is_whitespace) {
            return false;
        }
        self.pattern
            .as_ref()
            .is_some_and(|pattern| pattern.is_match(&anchor.to_lowercase()))
    }
}

impl Default for NakedUrlRule {
    fn default() -> Self {
        Self {
            pattern: DEFAULT_NAKED_URL_PATTERN.clone(),
        }
    }
}

/// Everything the classifier needs besides the brand identity.
#[derive(Debug, Clone, Default)]
pub struct ClassifierRules {
    pub keywords: KeywordSet,
    pub naked_url: NakedUrlRule,
}

impl ClassifierRules {
    pub fn with_keywords(mut self, keywords: KeywordSet) -> Self {
        self.keywords = keywords;
        self
    }

    pub fn with_naked_url(mut self, naked_url: NakedUrlRule) -> Self {
        self.naked_url = naked_url;
        self
    }
}

fn build_naked_url_pattern(markers: &[&str], suffixes: &[&str]) -> Option<Regex> {
    let alternation = |parts: &[&str]| {
        parts
            .iter()
            .map(|p| regex::escape(&p.to_lowercase()))
            .collect::<Vec<_>>()
            .join("|")
    };

    let pattern = match (markers.is_empty(), suffixes.is_empty()) {
        (false, false) => format!(
            "(?:{})|(?:{})$",
            alternation(markers),
            alternation(suffixes)
        ),
        (false, true) => format!("(?:{})", alternation(markers)),
        (true, false) => format!("(?:{})$", alternation(suffixes)),
        (true, true) => return None,
    };

    Some(Regex::new(&pattern).expect("escaped literal alternation is a valid regex"))
}
