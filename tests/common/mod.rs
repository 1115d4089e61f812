#![allow(dead_code)]

use std::{fs, path::Path};

use categorizer_core::LexiconEntry;
use tempfile::TempDir;

/// Creates an isolated directory that stands in for `$CATEGORIZER_HOME`.
pub fn temp_home() -> TempDir {
    TempDir::new().expect("create temp dir")
}

/// Writes a lexicon file in priority order.
pub fn write_lexicon(path: &Path, pairs: &[(&str, &str)]) {
    let entries: Vec<LexiconEntry> = pairs
        .iter()
        .map(|(keyword, category)| LexiconEntry::new(*keyword, *category))
        .collect();
    let json = serde_json::to_string_pretty(&entries).expect("serialize lexicon");
    fs::write(path, json).expect("write lexicon");
}
