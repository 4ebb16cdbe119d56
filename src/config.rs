//! Configuration for the selector
//!
//! Holds the caller-side defaults: which provider/model to preselect and the
//! texts shown for the loading and empty-provider states. None of this feeds
//! into reconciliation itself.

use crate::paths;
use crate::selection::Selection;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Environment variable that overrides the config file location
pub const CONFIG_PATH_ENV: &str = "MODEL_SELECTOR_CONFIG";

/// Selector configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Config {
    /// Provider preselected before the first reconciliation
    #[serde(default = "default_provider")]
    pub default_provider: Option<String>,

    /// Model preselected before the first reconciliation
    #[serde(default = "default_model")]
    pub default_model: Option<String>,

    /// Placeholder option shown while models load
    #[serde(default = "default_loading_label")]
    pub loading_label: String,

    /// Message shown when no provider is enabled
    #[serde(default = "default_no_providers_message")]
    pub no_providers_message: String,
}

fn default_provider() -> Option<String> {
    Some("openrouter".to_string())
}

fn default_model() -> Option<String> {
    Some("anthropic.claude-3-sonnet-20240229-v1:0".to_string())
}

fn default_loading_label() -> String {
    "Loading...".to_string()
}

fn default_no_providers_message() -> String {
    "No providers are currently enabled. Please enable at least one provider in the settings \
     to start using the chat."
        .to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_provider: default_provider(),
            default_model: default_model(),
            loading_label: default_loading_label(),
            no_providers_message: default_no_providers_message(),
        }
    }
}

impl Config {
    /// Load configuration from the default location
    ///
    /// A missing file yields the defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if reading or parsing the config file fails
    pub fn load() -> Result<Self> {
        let path = Self::default_path();
        if path.exists() {
            Self::load_from(&path)
        } else {
            debug!(?path, "Config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Load configuration, falling back to defaults on any error
    #[must_use]
    pub fn load_or_default() -> Self {
        Self::load().unwrap_or_else(|e| {
            warn!("Failed to load config: {e:#}");
            Self::default()
        })
    }

    /// Load configuration from a specific path
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {}", path.display()))?;
        let config = serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse config from {}", path.display()))?;
        debug!(?path, "Loaded config");
        Ok(config)
    }

    /// Save configuration to the default location
    ///
    /// # Errors
    ///
    /// Returns an error if the config directory cannot be created or the file cannot be written
    pub fn save(&self) -> Result<()> {
        let path = Self::default_path();
        self.save_to(&path)
    }

    /// Save configuration to a specific path
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory {}", parent.display())
            })?;
        }
        let contents = serde_json::to_string_pretty(self).context("Failed to serialize config")?;
        fs::write(path, contents)
            .with_context(|| format!("Failed to write config to {}", path.display()))?;
        Ok(())
    }

    /// Get the configuration file path
    ///
    /// Honors `MODEL_SELECTOR_CONFIG` when set.
    #[must_use]
    pub fn default_path() -> PathBuf {
        if let Some(path) = std::env::var_os(CONFIG_PATH_ENV).filter(|p| !p.is_empty()) {
            return PathBuf::from(path);
        }
        paths::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("model-selector")
            .join("config.json")
    }

    /// The selection a caller starts from before the first reconciliation
    #[must_use]
    pub fn initial_selection(&self) -> Selection {
        Selection::new(self.default_provider.clone(), self.default_model.clone())
    }
}
