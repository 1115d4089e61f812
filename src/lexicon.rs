//! Ordered keyword -> category lexicon used by the suggestion engine.

use std::{collections::HashSet, fs, path::Path};

use serde::{Deserialize, Serialize};

use crate::errors::{CategorizerError, Result};

/// Category labels seeded into a fresh category store.
pub const DEFAULT_CATEGORIES: [&str; 10] = [
    "Food & Drink",
    "Transport",
    "Shopping",
    "Entertainment",
    "Bills & Utilities",
    "Healthcare",
    "Education",
    "Income",
    "Transfer",
    "Other",
];

const DEFAULT_ENTRIES: [(&str, &str); 22] = [
    ("starbucks", "Food & Drink"),
    ("mcdonald", "Food & Drink"),
    ("kfc", "Food & Drink"),
    ("pizza hut", "Food & Drink"),
    ("uber", "Transport"),
    ("lyft", "Transport"),
    ("taxi", "Transport"),
    ("amazon", "Shopping"),
    ("walmart", "Shopping"),
    ("target", "Shopping"),
    ("netflix", "Entertainment"),
    ("spotify", "Entertainment"),
    ("electricity", "Bills & Utilities"),
    ("water", "Bills & Utilities"),
    ("internet", "Bills & Utilities"),
    ("phone", "Bills & Utilities"),
    ("doctor", "Healthcare"),
    ("pharmacy", "Healthcare"),
    ("school", "Education"),
    ("salary", "Income"),
    ("deposit", "Income"),
    ("interest", "Income"),
];

/// A single keyword and the category it implies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LexiconEntry {
    pub keyword: String,
    pub category: String,
}

impl LexiconEntry {
    pub fn new(keyword: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            keyword: keyword.into(),
            category: category.into(),
        }
    }
}

/// Immutable, ordered set of lexicon entries.
///
/// Order is priority: the exact-match stage returns the first keyword found
/// and the fuzzy stage breaks score ties in favour of earlier entries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lexicon {
    entries: Vec<LexiconEntry>,
}

impl Lexicon {
    /// Builds a lexicon, rejecting empty, non-lowercase or duplicate keywords.
    pub fn new(entries: Vec<LexiconEntry>) -> Result<Self> {
        let mut seen = HashSet::new();
        for entry in &entries {
            if entry.keyword.trim().is_empty() {
                return Err(CategorizerError::InvalidLexicon(format!(
                    "empty keyword for category `{}`",
                    entry.category
                )));
            }
            if entry.keyword != entry.keyword.to_lowercase() {
                return Err(CategorizerError::InvalidLexicon(format!(
                    "keyword `{}` must be lowercase",
                    entry.keyword
                )));
            }
            if entry.category.trim().is_empty() {
                return Err(CategorizerError::InvalidLexicon(format!(
                    "keyword `{}` has an empty category",
                    entry.keyword
                )));
            }
            if !seen.insert(entry.keyword.as_str()) {
                return Err(CategorizerError::InvalidLexicon(format!(
                    "duplicate keyword `{}`",
                    entry.keyword
                )));
            }
        }
        Ok(Self { entries })
    }

    pub fn from_pairs<K, C>(pairs: impl IntoIterator<Item = (K, C)>) -> Result<Self>
    where
        K: Into<String>,
        C: Into<String>,
    {
        Self::new(
            pairs
                .into_iter()
                .map(|(keyword, category)| LexiconEntry::new(keyword, category))
                .collect(),
        )
    }

    /// Loads a lexicon from a JSON array of `{ "keyword", "category" }` objects.
    pub fn load(path: &Path) -> Result<Self> {
        let data = fs::read_to_string(path)?;
        let entries: Vec<LexiconEntry> = serde_json::from_str(&data)?;
        let lexicon = Self::new(entries)?;
        tracing::debug!(
            path = %path.display(),
            entries = lexicon.len(),
            "loaded lexicon"
        );
        Ok(lexicon)
    }

    pub fn entries(&self) -> &[LexiconEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Distinct category labels in first-appearance order.
    pub fn categories(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.entries
            .iter()
            .map(|entry| entry.category.as_str())
            .filter(|category| seen.insert(*category))
            .collect()
    }
}

impl Default for Lexicon {
    fn default() -> Self {
        Self {
            entries: DEFAULT_ENTRIES
                .iter()
                .map(|(keyword, category)| LexiconEntry::new(*keyword, *category))
                .collect(),
        }
    }
}
