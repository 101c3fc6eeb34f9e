use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::config::types::Config;

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{path}': {source}")]
    ParseError {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Config validation failed: {message}")]
    ValidationError { message: String },
}

impl Config {
    /// Returns the path to the configuration file.
    ///
    /// Uses `~/.config/product-page/config.toml` on Unix,
    /// or the equivalent via `dirs::config_dir()` elsewhere.
    pub fn config_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("product-page").join("config.toml")
    }

    /// Loads configuration from `path`.
    ///
    /// - If the file doesn't exist, returns `Config::default()`.
    /// - Otherwise parses it as TOML and validates.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Config::default());
        }

        let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            source: e,
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Validates the configuration.
    ///
    /// Checks:
    /// - The product has at least one variant
    /// - Variant ids are unique
    /// - The shipping fee label is not empty
    /// - Every initial cart entry names a known variant
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.product.variants.is_empty() {
            return Err(ConfigError::ValidationError {
                message: "At least one product variant must be configured".to_string(),
            });
        }

        if let Some(id) = self.product.duplicate_id() {
            return Err(ConfigError::ValidationError {
                message: format!("Variant id {} is configured more than once", id),
            });
        }

        if self.store.shipping_fee.trim().is_empty() {
            return Err(ConfigError::ValidationError {
                message: "Shipping fee must not be empty".to_string(),
            });
        }

        if let Some(id) = self
            .store
            .initial_cart
            .iter()
            .find(|id| !self.product.contains(**id))
        {
            return Err(ConfigError::ValidationError {
                message: format!("Initial cart refers to unknown variant {}", id),
            });
        }

        Ok(())
    }
}
