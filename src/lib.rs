#![doc(test(attr(deny(warnings))))]

//! Categorizer Core proposes a spending category for a free-text transaction
//! description, using an ordered keyword lexicon with a fuzzy fallback.
//!
//! ```
//! use categorizer_core::CategorySuggester;
//!
//! let suggester = CategorySuggester::default();
//! assert_eq!(suggester.suggest("UBER TRIP 8842"), Some("Transport"));
//! assert_eq!(suggester.suggest("AMZN Mktp US"), None);
//! ```

pub mod cli;
pub mod config;
pub mod engine;
pub mod errors;
pub mod lexicon;
pub mod service;
pub mod similarity;
pub mod store;
pub mod utils;

pub use engine::{CategorySuggester, SuggestionTrace, DEFAULT_THRESHOLD};
pub use errors::{CategorizerError, CliError};
pub use lexicon::{Lexicon, LexiconEntry, DEFAULT_CATEGORIES};
pub use service::{CategorySuggestion, SuggestionService};
pub use store::{CategoryRecord, CategoryStore, InMemoryCategoryStore, JsonCategoryStore};

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Categorizer Core tracing initialized.");
    });
}
