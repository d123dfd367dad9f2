use crate::error::{RecipeBoxError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.json";

/// Configuration for recipebox, stored as `config.json` in the data
/// directory. Missing file or missing keys fall back to defaults.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RecipeBoxConfig {
    /// Ask before deleting recipes (skipped with `--yes`).
    #[serde(default = "default_confirm_delete")]
    pub confirm_delete: bool,
}

fn default_confirm_delete() -> bool {
    true
}

impl Default for RecipeBoxConfig {
    fn default() -> Self {
        Self {
            confirm_delete: true,
        }
    }
}

impl RecipeBoxConfig {
    /// Load config from the given directory, or return defaults if not
    /// found.
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(RecipeBoxError::Io)?;
        let config: RecipeBoxConfig =
            serde_json::from_str(&content).map_err(RecipeBoxError::Serialization)?;
        Ok(config)
    }

    /// Save config to the given directory.
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(RecipeBoxError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(RecipeBoxError::Serialization)?;
        fs::write(config_path, content).map_err(RecipeBoxError::Io)?;
        Ok(())
    }
}
