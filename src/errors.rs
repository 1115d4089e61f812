use std::result::Result as StdResult;

use thiserror::Error;

/// Error type covering lexicon loading, category storage and configuration.
///
/// The suggestion engine itself never fails; these errors only come from the
/// layers around it.
#[derive(Debug, Error)]
pub enum CategorizerError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("Invalid lexicon: {0}")]
    InvalidLexicon(String),
    #[error("Category already exists: {0}")]
    DuplicateCategory(String),
    #[error("Configuration error: {0}")]
    Config(String),
}

pub type Result<T> = StdResult<T, CategorizerError>;

/// User-facing CLI error wrapper.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Core(#[from] CategorizerError),
    #[error("Usage: {0}")]
    Usage(String),
}
