use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_STORE_FILENAME: &str = "snippets.txt";

/// Configuration for snipz, stored as `config.json` in the data directory.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct SnipzConfig {
    /// Overrides the backing file location; relative paths resolve against
    /// the data directory.
    #[serde(default)]
    pub store_file: Option<PathBuf>,

    /// Editor command to prefer over $EDITOR/$VISUAL.
    #[serde(default)]
    pub editor: Option<String>,
}

impl SnipzConfig {
    /// Load config from the given directory, or return defaults if not found.
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);
        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path)?;
        Ok(serde_json::from_str(&content)?)
    }

    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();
        if !config_dir.exists() {
            fs::create_dir_all(config_dir)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        fs::write(config_dir.join(CONFIG_FILENAME), content)?;
        Ok(())
    }

    /// Resolves the backing store file for a given data directory.
    pub fn store_path(&self, data_dir: &Path) -> PathBuf {
        match &self.store_file {
            Some(path) if path.is_absolute() => path.clone(),
            Some(path) => data_dir.join(path),
            None => data_dir.join(DEFAULT_STORE_FILENAME),
        }
    }
}
