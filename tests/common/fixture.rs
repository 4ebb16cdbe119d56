//! Temporary catalog, script and config files

use std::fs;
use std::path::PathBuf;

use model_selector::{Catalog, Config, Event, Model, Provider};
use tempfile::TempDir;

/// Catalog used across integration tests
///
/// Two providers, with a model list that is deliberately not grouped by
/// provider so order-preservation is visible.
pub fn sample_catalog() -> Catalog {
    Catalog::new(
        vec![Provider::new("openrouter"), Provider::new("anthropic")],
        vec![
            Model::new("claude-3-haiku", "Claude 3 Haiku", "anthropic"),
            Model::new("openrouter/auto", "Auto", "openrouter"),
            Model::new("claude-3-opus", "Claude 3 Opus", "anthropic"),
            Model::new("meta-llama/llama-3-8b", "Llama 3 8B", "openrouter"),
        ],
    )
}

/// Temporary directory holding input files for the binary
#[derive(Debug)]
pub struct TestFixture {
    temp_dir: TempDir,
}

impl TestFixture {
    pub fn new() -> Result<Self, Box<dyn std::error::Error>> {
        Ok(Self {
            temp_dir: TempDir::new()?,
        })
    }

    pub fn path(&self, name: &str) -> PathBuf {
        self.temp_dir.path().join(name)
    }

    /// Write `catalog` as JSON and return its path
    pub fn write_catalog(
        &self,
        name: &str,
        catalog: &Catalog,
    ) -> Result<PathBuf, Box<dyn std::error::Error>> {
        let path = self.path(name);
        fs::write(&path, serde_json::to_string_pretty(catalog)?)?;
        Ok(path)
    }

    /// Write `events` as a JSON-lines script and return its path
    pub fn write_script(
        &self,
        name: &str,
        events: &[Event],
    ) -> Result<PathBuf, Box<dyn std::error::Error>> {
        let mut contents = String::new();
        for event in events {
            contents.push_str(&serde_json::to_string(event)?);
            contents.push('\n');
        }
        let path = self.path(name);
        fs::write(&path, contents)?;
        Ok(path)
    }

    /// Write `config` and return its path
    pub fn write_config(&self, config: &Config) -> Result<PathBuf, Box<dyn std::error::Error>> {
        let path = self.path("config.json");
        config.save_to(&path)?;
        Ok(path)
    }
}
