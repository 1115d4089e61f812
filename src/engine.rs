//! Category suggestion engine.
//!
//! Matching runs in two stages over a [`Lexicon`]:
//!
//! 1. **Exact**: the first keyword, in lexicon order, that occurs as a
//!    substring of the lowercased description wins. No scoring is involved, so
//!    a short keyword listed early can shadow a more specific one listed later.
//! 2. **Fuzzy**: every keyword is scored with
//!    [`partial_ratio`](crate::similarity::partial_ratio); the best score wins
//!    (ties go to the earlier keyword) if it reaches the threshold.

use std::sync::Arc;

use serde::Serialize;

use crate::{
    lexicon::{Lexicon, LexiconEntry},
    similarity::{partial_ratio, MAX_SCORE},
};

/// Minimum fuzzy score accepted when the caller does not supply one.
pub const DEFAULT_THRESHOLD: u8 = 80;

/// How a description was (or was not) matched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "stage", rename_all = "snake_case")]
pub enum SuggestionTrace {
    Exact {
        keyword: String,
        category: String,
    },
    Fuzzy {
        keyword: String,
        category: String,
        score: u8,
    },
    /// Best fuzzy candidate fell short of the threshold.
    Rejected {
        keyword: String,
        score: u8,
        threshold: u8,
    },
    /// Blank description or empty lexicon.
    NoCandidates,
}

impl SuggestionTrace {
    pub fn category(&self) -> Option<&str> {
        match self {
            SuggestionTrace::Exact { category, .. } | SuggestionTrace::Fuzzy { category, .. } => {
                Some(category.as_str())
            }
            SuggestionTrace::Rejected { .. } | SuggestionTrace::NoCandidates => None,
        }
    }
}

/// Pure, shareable category suggester.
///
/// Cloning is cheap; the lexicon is shared behind an [`Arc`] and never mutated.
#[derive(Debug, Clone)]
pub struct CategorySuggester {
    lexicon: Arc<Lexicon>,
}

impl CategorySuggester {
    pub fn new(lexicon: Lexicon) -> Self {
        Self {
            lexicon: Arc::new(lexicon),
        }
    }

    pub fn from_shared(lexicon: Arc<Lexicon>) -> Self {
        Self { lexicon }
    }

    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    /// Suggests a category using [`DEFAULT_THRESHOLD`].
    pub fn suggest(&self, description: &str) -> Option<&str> {
        self.suggest_with_threshold(description, DEFAULT_THRESHOLD)
    }

    /// Suggests a category; thresholds above 100 behave like 100.
    pub fn suggest_with_threshold(&self, description: &str, threshold: u8) -> Option<&str> {
        let normalized = description.to_lowercase();
        if normalized.trim().is_empty() {
            return None;
        }
        if let Some(entry) = self.exact_match(&normalized) {
            return Some(entry.category.as_str());
        }
        match self.best_fuzzy(&normalized) {
            Some((entry, score)) if score >= threshold.min(MAX_SCORE) => {
                Some(entry.category.as_str())
            }
            _ => None,
        }
    }

    /// Same decision as [`suggest_with_threshold`](Self::suggest_with_threshold),
    /// reporting which stage decided it.
    pub fn explain(&self, description: &str, threshold: u8) -> SuggestionTrace {
        let threshold = threshold.min(MAX_SCORE);
        let normalized = description.to_lowercase();
        if normalized.trim().is_empty() {
            return SuggestionTrace::NoCandidates;
        }
        if let Some(entry) = self.exact_match(&normalized) {
            tracing::debug!(keyword = %entry.keyword, "exact keyword match");
            return SuggestionTrace::Exact {
                keyword: entry.keyword.clone(),
                category: entry.category.clone(),
            };
        }
        match self.best_fuzzy(&normalized) {
            Some((entry, score)) if score >= threshold => {
                tracing::debug!(keyword = %entry.keyword, score, "fuzzy keyword match");
                SuggestionTrace::Fuzzy {
                    keyword: entry.keyword.clone(),
                    category: entry.category.clone(),
                    score,
                }
            }
            Some((entry, score)) => SuggestionTrace::Rejected {
                keyword: entry.keyword.clone(),
                score,
                threshold,
            },
            None => SuggestionTrace::NoCandidates,
        }
    }

    fn exact_match(&self, normalized: &str) -> Option<&LexiconEntry> {
        self.lexicon
            .entries()
            .iter()
            .find(|entry| normalized.contains(entry.keyword.as_str()))
    }

    fn best_fuzzy(&self, normalized: &str) -> Option<(&LexiconEntry, u8)> {
        let mut best: Option<(&LexiconEntry, u8)> = None;
        for entry in self.lexicon.entries() {
            let score = partial_ratio(normalized, &entry.keyword);
            match best {
                Some((_, best_score)) if score <= best_score => {}
                _ => best = Some((entry, score)),
            }
        }
        best
    }
}

impl Default for CategorySuggester {
    fn default() -> Self {
        Self::new(Lexicon::default())
    }
}
