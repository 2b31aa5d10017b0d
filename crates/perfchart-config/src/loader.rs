//! Configuration loading from YAML files.

use crate::defaults::DEFAULT_CONFIG_FILE;
use crate::schema::Config;
use perfchart_common::{PerfChartError, Result};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Configuration loader bound to one file path.
pub struct ConfigLoader {
    path: PathBuf,
}

impl ConfigLoader {
    /// Creates a new configuration loader.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The file this loader reads.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads and validates configuration from the file.
    pub fn load(&self) -> Result<Config> {
        let content = std::fs::read_to_string(&self.path).map_err(|e| {
            PerfChartError::config_with_source(
                format!("failed to read '{}'", self.path.display()),
                e,
            )
        })?;

        let config = Self::parse(&content)?;
        info!("Loaded configuration from {}", self.path.display());
        Ok(config)
    }

    /// Loads the file when it exists, otherwise validated defaults.
    pub fn load_or_default(&self) -> Result<Config> {
        if self.path.exists() {
            self.load()
        } else {
            debug!(
                "No configuration file at {}, using defaults",
                self.path.display()
            );
            let config = Config::default();
            config.validate()?;
            Ok(config)
        }
    }

    /// Parses and validates configuration from YAML text.
    pub fn parse(content: &str) -> Result<Config> {
        // An empty document deserializes to unit, not to an all-defaults map.
        let config: Config = if content.trim().is_empty() {
            Config::default()
        } else {
            serde_yaml::from_str(content)?
        };

        config.validate()?;
        Ok(config)
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new(DEFAULT_CONFIG_FILE)
    }
}
