//! # Configuration
//!
//! Optional JSON file (`emptyleg.json`). Every field has a default, so an
//! empty object or a missing file yields a working server.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::info;

use crate::generator::GeneratorConfig;
use crate::http_server::HttpServerConfig;

/// Default configuration file name
pub const DEFAULT_CONFIG_FILE: &str = "emptyleg.json";

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid generator config: {0}")]
    Generator(String),
}

/// Top-level configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub http: HttpServerConfig,

    #[serde(default)]
    pub generator: GeneratorConfig,
}

impl AppConfig {
    /// Load configuration from file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let config = Self::from_json(&content)?;
        info!(path = %path.display(), "loaded configuration");
        Ok(config)
    }

    /// Load from `path` if it exists, defaults otherwise
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            info!(path = %path.display(), "no config file, using defaults");
            Ok(Self::default())
        }
    }

    /// Parse and validate a JSON document
    pub fn from_json(content: &str) -> Result<Self, ConfigError> {
        let config: AppConfig = serde_json::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject settings the generator cannot run with
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.generator.validate().map_err(ConfigError::Generator)
    }
}
