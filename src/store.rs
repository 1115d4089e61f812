//! Category storage collaborators.
//!
//! The suggestion engine only produces labels; a [`CategoryStore`] resolves
//! them to stable identifiers.

use std::{
    fs,
    path::{Path, PathBuf},
    sync::RwLock,
};

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{
    errors::{CategorizerError, Result},
    lexicon::DEFAULT_CATEGORIES,
    utils::persistence::write_atomic,
};

/// Persisted category row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryRecord {
    pub id: Uuid,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl CategoryRecord {
    pub fn new(name: impl Into<String>, description: Option<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            description,
        }
    }
}

/// Abstraction over category persistence.
pub trait CategoryStore: Send + Sync {
    /// Looks a category up by its exact name.
    fn find_by_name(&self, name: &str) -> Result<Option<CategoryRecord>>;
    fn list(&self) -> Result<Vec<CategoryRecord>>;
    /// Adds a category; names must be unique.
    fn insert(&self, name: &str, description: Option<String>) -> Result<CategoryRecord>;
}

/// Inserts every default category not yet present. Returns how many were added.
pub fn seed_defaults(store: &dyn CategoryStore) -> Result<usize> {
    let mut inserted = 0;
    for name in DEFAULT_CATEGORIES {
        if store.find_by_name(name)?.is_none() {
            store.insert(name, None)?;
            inserted += 1;
        }
    }
    if inserted > 0 {
        tracing::info!(inserted, "seeded default categories");
    }
    Ok(inserted)
}

fn insert_unique(
    records: &mut Vec<CategoryRecord>,
    name: &str,
    description: Option<String>,
) -> Result<CategoryRecord> {
    if records.iter().any(|record| record.name == name) {
        return Err(CategorizerError::DuplicateCategory(name.to_string()));
    }
    let record = CategoryRecord::new(name, description);
    records.push(record.clone());
    Ok(record)
}

fn poisoned() -> CategorizerError {
    CategorizerError::Io(std::io::Error::new(
        std::io::ErrorKind::Other,
        "category store lock poisoned",
    ))
}

/// Process-local store, mainly for tests and embedding.
#[derive(Debug, Default)]
pub struct InMemoryCategoryStore {
    records: RwLock<Vec<CategoryRecord>>,
}

impl InMemoryCategoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-populated with [`DEFAULT_CATEGORIES`].
    pub fn with_defaults() -> Self {
        Self {
            records: RwLock::new(
                DEFAULT_CATEGORIES
                    .iter()
                    .map(|name| CategoryRecord::new(*name, None))
                    .collect(),
            ),
        }
    }
}

impl CategoryStore for InMemoryCategoryStore {
    fn find_by_name(&self, name: &str) -> Result<Option<CategoryRecord>> {
        let records = self.records.read().map_err(|_| poisoned())?;
        Ok(records.iter().find(|record| record.name == name).cloned())
    }

    fn list(&self) -> Result<Vec<CategoryRecord>> {
        Ok(self.records.read().map_err(|_| poisoned())?.clone())
    }

    fn insert(&self, name: &str, description: Option<String>) -> Result<CategoryRecord> {
        let mut records = self.records.write().map_err(|_| poisoned())?;
        insert_unique(&mut records, name, description)
    }
}

/// Category store persisted as a pretty-printed JSON array.
///
/// A missing file reads as an empty store; writes go through a temporary file
/// and a rename.
#[derive(Debug)]
pub struct JsonCategoryStore {
    path: PathBuf,
    guard: RwLock<()>,
}

impl JsonCategoryStore {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            guard: RwLock::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_records(&self) -> Result<Vec<CategoryRecord>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        let data = fs::read_to_string(&self.path)?;
        Ok(serde_json::from_str(&data)?)
    }
}

impl CategoryStore for JsonCategoryStore {
    fn find_by_name(&self, name: &str) -> Result<Option<CategoryRecord>> {
        let _lock = self.guard.read().map_err(|_| poisoned())?;
        Ok(self
            .read_records()?
            .into_iter()
            .find(|record| record.name == name))
    }

    fn list(&self) -> Result<Vec<CategoryRecord>> {
        let _lock = self.guard.read().map_err(|_| poisoned())?;
        self.read_records()
    }

    fn insert(&self, name: &str, description: Option<String>) -> Result<CategoryRecord> {
        let _lock = self.guard.write().map_err(|_| poisoned())?;
        let mut records = self.read_records()?;
        let record = insert_unique(&mut records, name, description)?;
        let json = serde_json::to_string_pretty(&records)?;
        write_atomic(&self.path, &json)?;
        Ok(record)
    }
}
