//! # Configuration
//!
//! Cheeto keeps a small JSON file at `<config dir>/config.json`, where the config
//! dir is `$XDG_CONFIG_HOME/cheeto` when set, else the OS default.
//!
//! | Key                 | Default     | Description                              |
//! |---------------------|-------------|------------------------------------------|
//! | `data-path`         | XDG data dir| Root directory searched for sheets       |
//! | `markdown-renderer` | `term`      | Renderer used by `show-sheet`            |
//! | `discovery`         | `recursive` | `recursive` (marker files) or `flat`     |
//!
//! The data path is resolved with the precedence: `--data-path` flag, then the
//! `CHEETO_DATA_PATH` environment variable, then this file, then the default.

use crate::error::{CheetoError, Result};
use crate::markdown;
use crate::sheets::DiscoveryMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.json";

pub const KEY_DATA_PATH: &str = "data-path";
pub const KEY_MARKDOWN_RENDERER: &str = "markdown-renderer";
pub const KEY_DISCOVERY: &str = "discovery";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CheetoConfig {
    /// Root directory for sheets; `~` is allowed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_path: Option<String>,

    /// Name of the markdown renderer used when showing sheets.
    #[serde(default = "default_renderer")]
    pub markdown_renderer: String,

    #[serde(default)]
    pub discovery: DiscoveryMode,
}

fn default_renderer() -> String {
    markdown::DEFAULT_RENDERER.to_string()
}

impl Default for CheetoConfig {
    fn default() -> Self {
        Self {
            data_path: None,
            markdown_renderer: default_renderer(),
            discovery: DiscoveryMode::default(),
        }
    }
}

impl CheetoConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path)?;
        let config: CheetoConfig = serde_json::from_str(&content)?;
        Ok(config)
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

    pub fn keys() -> &'static [&'static str] {
        &[KEY_DATA_PATH, KEY_MARKDOWN_RENDERER, KEY_DISCOVERY]
    }

    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            KEY_DATA_PATH => self.data_path.clone(),
            KEY_MARKDOWN_RENDERER => Some(self.markdown_renderer.clone()),
            KEY_DISCOVERY => Some(self.discovery.as_str().to_string()),
            _ => None,
        }
    }

    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            KEY_DATA_PATH => {
                self.data_path = if value.is_empty() {
                    None
                } else {
                    Some(value.to_string())
                };
            }
            KEY_MARKDOWN_RENDERER => {
                if !markdown::is_registered(value) {
                    return Err(CheetoError::Config(format!(
                        "Unknown markdown renderer '{}' (expected one of: {})",
                        value,
                        markdown::renderer_names().join(", ")
                    )));
                }
                self.markdown_renderer = value.to_string();
            }
            KEY_DISCOVERY => self.discovery = value.parse()?,
            other => {
                return Err(CheetoError::Config(format!(
                    "Unknown config key: {}",
                    other
                )))
            }
        }
        Ok(())
    }

    /// All keys with their current value; unset values show as an empty string.
    pub fn list_all(&self) -> Vec<(String, String)> {
        Self::keys()
            .iter()
            .map(|key| (key.to_string(), self.get(key).unwrap_or_default()))
            .collect()
    }
}
