//! Resolves engine suggestions against a category store.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{
    engine::{CategorySuggester, DEFAULT_THRESHOLD},
    errors::Result,
    store::CategoryStore,
};

/// Response payload for a suggestion request. Both fields are `null` when
/// nothing could be suggested.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategorySuggestion {
    pub suggested_category_id: Option<Uuid>,
    pub suggested_category_name: Option<String>,
}

impl CategorySuggestion {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.suggested_category_id.is_none()
    }
}

pub struct SuggestionService<S: CategoryStore> {
    suggester: CategorySuggester,
    store: S,
    threshold: u8,
}

impl<S: CategoryStore> SuggestionService<S> {
    pub fn new(suggester: CategorySuggester, store: S) -> Self {
        Self {
            suggester,
            store,
            threshold: DEFAULT_THRESHOLD,
        }
    }

    pub fn with_threshold(mut self, threshold: u8) -> Self {
        self.threshold = threshold;
        self
    }

    pub fn suggester(&self) -> &CategorySuggester {
        &self.suggester
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn threshold(&self) -> u8 {
        self.threshold
    }

    /// Never fails: drift and store errors degrade to an empty suggestion.
    pub fn suggest(&self, description: &str) -> CategorySuggestion {
        let Some(label) = self
            .suggester
            .suggest_with_threshold(description, self.threshold)
        else {
            return CategorySuggestion::none();
        };

        match self.store.find_by_name(label) {
            Ok(Some(record)) => CategorySuggestion {
                suggested_category_id: Some(record.id),
                suggested_category_name: Some(record.name),
            },
            Ok(None) => {
                tracing::warn!(category = label, "suggested category missing from store");
                CategorySuggestion::none()
            }
            Err(err) => {
                tracing::error!(category = label, error = %err, "category lookup failed");
                CategorySuggestion::none()
            }
        }
    }

    /// Lexicon categories that the store does not know, in lexicon order.
    pub fn drift(&self) -> Result<Vec<String>> {
        let known: HashSet<String> = self
            .store
            .list()?
            .into_iter()
            .map(|record| record.name)
            .collect();
        Ok(self
            .suggester
            .lexicon()
            .categories()
            .into_iter()
            .filter(|category| !known.contains(*category))
            .map(str::to_string)
            .collect())
    }
}
