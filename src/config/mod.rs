use serde::{Deserialize, Serialize};
use std::{
    env, fs,
    path::{Path, PathBuf},
};

use crate::{
    engine::DEFAULT_THRESHOLD,
    errors::{CategorizerError, Result},
    lexicon::Lexicon,
    similarity::MAX_SCORE,
    store::JsonCategoryStore,
    utils::persistence::write_atomic,
};

const DEFAULT_DIR_NAME: &str = ".categorizer";
const HOME_ENV: &str = "CATEGORIZER_HOME";
const CONFIG_FILE: &str = "config.json";
const STORE_FILE: &str = "categories.json";

/// Runtime settings for the categorizer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "Config::default_threshold")]
    pub threshold: u8,
    /// Lexicon JSON file; the built-in lexicon is used when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lexicon_path: Option<PathBuf>,
    /// Category store JSON file; defaults to `categories.json` in the base dir.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub store_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            threshold: Self::default_threshold(),
            lexicon_path: None,
            store_path: None,
        }
    }
}

impl Config {
    pub fn default_threshold() -> u8 {
        DEFAULT_THRESHOLD
    }

    pub fn validate(&self) -> Result<()> {
        if self.threshold > MAX_SCORE {
            return Err(CategorizerError::Config(format!(
                "threshold must be between 0 and {}, got {}",
                MAX_SCORE, self.threshold
            )));
        }
        Ok(())
    }

    pub fn load_lexicon(&self) -> Result<Lexicon> {
        match &self.lexicon_path {
            Some(path) => Lexicon::load(path),
            None => Ok(Lexicon::default()),
        }
    }

    pub fn resolve_store_path(&self, base: &Path) -> PathBuf {
        self.store_path
            .clone()
            .unwrap_or_else(|| base.join(STORE_FILE))
    }
}

/// Loads and saves [`Config`] as JSON.
#[derive(Debug, Clone)]
pub struct ConfigManager {
    base_dir: PathBuf,
    path: PathBuf,
}

impl ConfigManager {
    /// Uses `$CATEGORIZER_HOME`, falling back to `~/.categorizer`.
    pub fn new() -> Self {
        Self::with_base_dir(base_dir())
    }

    pub fn with_base_dir(base: PathBuf) -> Self {
        let path = base.join(CONFIG_FILE);
        Self {
            base_dir: base,
            path,
        }
    }

    /// Reads an explicit config file; relative paths inside it stay as written.
    pub fn with_config_file(path: PathBuf) -> Self {
        let base_dir = path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from("."));
        Self { base_dir, path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    pub fn load(&self) -> Result<Config> {
        let config = if self.path.exists() {
            let data = fs::read_to_string(&self.path)?;
            serde_json::from_str(&data).map_err(|err| {
                CategorizerError::Config(format!("{}: {}", self.path.display(), err))
            })?
        } else {
            tracing::debug!(path = %self.path.display(), "config not found, using defaults");
            Config::default()
        };
        config.validate()?;
        Ok(config)
    }

    pub fn save(&self, config: &Config) -> Result<()> {
        config.validate()?;
        let json = serde_json::to_string_pretty(config)?;
        write_atomic(&self.path, &json)?;
        Ok(())
    }

    pub fn open_store(&self, config: &Config) -> JsonCategoryStore {
        JsonCategoryStore::new(config.resolve_store_path(&self.base_dir))
    }
}

impl Default for ConfigManager {
    fn default() -> Self {
        Self::new()
    }
}

fn base_dir() -> PathBuf {
    if let Some(custom) = env::var_os(HOME_ENV) {
        return PathBuf::from(custom);
    }
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(DEFAULT_DIR_NAME)
}
