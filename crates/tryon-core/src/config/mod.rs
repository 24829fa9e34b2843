//! Configuration management.
//!
//! Configuration is loaded from the platform config directory
//! (`~/.config/tryon/config.toml` on Linux) with defaults for every field, so
//! an empty or missing file yields a working setup once API keys are exported.

mod types;
mod validate;

pub use types::*;

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Root configuration structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// HTTP server settings
    pub server: ServerConfig,

    /// Size resolution settings
    pub sizing: SizingConfig,

    /// Garment inventory layout
    pub inventory: InventoryConfig,

    /// Resource limits
    pub limits: LimitsConfig,

    /// Provider retry settings
    pub retry: RetryConfig,

    /// Gemini image generation
    pub gemini: GeminiConfig,

    /// OpenAI vision
    pub openai: OpenAiConfig,

    /// Product description settings
    pub describe: DescribeConfig,

    /// Logging settings
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from the default location.
    ///
    /// Returns default configuration if the file doesn't exist.
    pub fn load() -> Result<Self, ConfigError> {
        let path = Self::default_path();
        if path.exists() {
            Self::load_from(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Load configuration from a specific file path.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Parse and validate configuration from a TOML string.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Config = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Get the default config file path.
    ///
    /// - macOS: ~/Library/Application Support/com.tryon.tryon/config.toml
    /// - Linux: ~/.config/tryon/config.toml
    /// - Windows: C:\Users\<User>\AppData\Roaming\tryon\config\config.toml
    ///
    /// Falls back to ~/.tryon/config.toml if directory detection fails.
    pub fn default_path() -> PathBuf {
        directories::ProjectDirs::from("com", "tryon", "tryon")
            .map(|dirs| dirs.config_dir().to_path_buf().join("config.toml"))
            .unwrap_or_else(|| {
                let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
                PathBuf::from(home).join(".tryon").join("config.toml")
            })
    }

    /// Inventory root with `~` expanded.
    pub fn inventory_root(&self) -> PathBuf {
        expand(&self.inventory.root)
    }

    /// Default model directory with `~` expanded.
    pub fn default_models_dir(&self) -> PathBuf {
        expand(&self.inventory.default_models_dir)
    }

    /// Serialize the config to a pretty TOML string.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ValidationError(e.to_string()))
    }
}

fn expand(path: &Path) -> PathBuf {
    let path_str = path.to_string_lossy();
    let expanded = shellexpand::tilde(&path_str);
    PathBuf::from(expanded.into_owned())
}
