//! Configuration for multitrail
//!
//! Configuration is a small TOML document with a `[loader]` and a
//! `[logging]` section. Every field has a default, so an empty file is valid.

pub mod types;

use std::fs;
use std::path::Path;

use crate::error::{Result, TrailError};

pub use types::{LoaderConfig, LoggingConfig, TrailConfig};

impl TrailConfig {
    /// Parse configuration from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config = Self::from_toml_str(&content)?;
        tracing::debug!(path = %path.display(), fan_out = config.loader.fan_out, "loaded config");
        Ok(config)
    }

    /// Save configuration to a file
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| TrailError::Other(format!("failed to serialize config: {}", e)))?;
        fs::write(path, content)?;
        Ok(())
    }
}
