// Anchor text classification

use crate::brand::BrandIdentity;
use crate::rules::ClassifierRules;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AnchorCategory {
    Branded,
    ExactMatch,
    NakedUrl,
    OtherGeneric,
}

impl AnchorCategory {
    pub const ALL: [AnchorCategory; 4] = [
        AnchorCategory::Branded,
        AnchorCategory::ExactMatch,
        AnchorCategory::NakedUrl,
        AnchorCategory::OtherGeneric,
    ];

    /// Column heading used in every report format.
    pub fn label(&self) -> &'static str {
        match self {
            AnchorCategory::Branded => "Branded",
            AnchorCategory::ExactMatch => "Exact Match",
            AnchorCategory::NakedUrl => "Naked URL",
            AnchorCategory::OtherGeneric => "Other Generic",
        }
    }
}

impl fmt::Display for AnchorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Per-file anchor counts. The four counters always sum to `total()`, the
/// number of non-empty anchors seen.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryTally {
    pub branded: u64,
    pub exact_match: u64,
    pub naked_url: u64,
    pub other_generic: u64,
}

impl CategoryTally {
    pub fn record(&mut self, category: AnchorCategory) {
        match category {
            AnchorCategory::Branded => self.branded += 1,
            AnchorCategory::ExactMatch => self.exact_match += 1,
            AnchorCategory::NakedUrl => self.naked_url += 1,
            AnchorCategory::OtherGeneric => self.other_generic += 1,
        }
    }

    pub fn get(&self, category: AnchorCategory) -> u64 {
        match category {
            AnchorCategory::Branded => self.branded,
            AnchorCategory::ExactMatch => self.exact_match,
            AnchorCategory::NakedUrl => self.naked_url,
            AnchorCategory::OtherGeneric => self.other_generic,
        }
    }

    pub fn total(&self) -> u64 {
        self.branded + self.exact_match + self.naked_url + self.other_generic
    }
}

/// Assigns anchors to exactly one category each.
///
/// Rules are checked in a fixed order and the first hit wins:
/// branded, then exact-match keyword, then naked URL, then other generic.
/// A branded anchor that also looks like a bare domain is therefore branded,
/// never a naked URL.
#[derive(Debug, Clone, Default)]
pub struct Classifier {
    rules: ClassifierRules,
}

impl Classifier {
    pub fn new(rules: ClassifierRules) -> Self {
        Self { rules }
    }

    pub fn rules(&self) -> &ClassifierRules {
        &self.rules
    }

    /// Categorize one anchor. Returns `None` for anchors that are empty once
    /// trimmed; those do not count toward any category.
    pub fn categorize(&self, anchor: &str, brand: &BrandIdentity) -> Option<AnchorCategory> {
        let anchor = anchor.trim().to_lowercase();
        if anchor.is_empty() {
            return None;
        }

        let category = if brand.matches(&anchor) {
            AnchorCategory::Branded
        } else if self.rules.keywords.contains(&anchor) {
            AnchorCategory::ExactMatch
        } else if self.rules.naked_url.matches(&anchor) {
            AnchorCategory::NakedUrl
        } else {
            AnchorCategory::OtherGeneric
        };
        Some(category)
    }

    pub fn classify<I, S>(&self, anchors: I, brand: &BrandIdentity) -> CategoryTally
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut tally = CategoryTally::default();
        for anchor in anchors {
            if let Some(category) = self.categorize(anchor.as_ref(), brand) {
                tally.record(category);
            }
        }
        tally
    }
}
