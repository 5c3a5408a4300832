//! Configuration management for FileDiff
//!
//! This module provides configuration structures and defaults for the
//! display and file loading behavior, loadable from a TOML file with
//! environment variable overrides.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::FileDiffError;

/// Global configuration for FileDiff
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileDiffConfig {
    /// Display configuration
    pub display: DisplayConfig,
    /// File loading configuration
    pub loader: LoaderConfig,
}

/// Configuration for terminal output
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Total width for the side-by-side view
    pub width: usize,
}

/// Configuration for file loading
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoaderConfig {
    /// Input size in bytes above which a cost warning is logged (0 disables)
    pub size_warn_bytes: u64,
}

impl Default for FileDiffConfig {
    fn default() -> Self {
        Self {
            display: DisplayConfig::default(),
            loader: LoaderConfig::default(),
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self { width: 120 }
    }
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            size_warn_bytes: 10 * 1024 * 1024, // 10 MiB
        }
    }
}

/// Configuration loading and management
impl FileDiffConfig {
    /// Load from an explicit file, or fall back to env-adjusted defaults.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, FileDiffError> {
        match path {
            Some(path) => Self::load_from_path(path),
            None => Ok(Self::from_env()),
        }
    }

    /// Load configuration from a TOML file.
    pub fn load_from_path(path: &Path) -> Result<Self, FileDiffError> {
        let text = fs::read_to_string(path).map_err(|err| {
            FileDiffError::InvalidConfig(format!("could not read {}: {}", path.display(), err))
        })?;

        toml::from_str(&text)
            .map_err(|err| FileDiffError::InvalidConfig(format!("{}: {}", path.display(), err)))
    }

    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(val) = std::env::var("FILEDIFF_WIDTH") {
            if let Ok(width) = val.parse::<usize>() {
                config.display.width = width;
            }
        }

        if let Ok(val) = std::env::var("FILEDIFF_SIZE_WARN_BYTES") {
            if let Ok(bytes) = val.parse::<u64>() {
                config.loader.size_warn_bytes = bytes;
            }
        }

        config
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<(), FileDiffError> {
        if self.display.width == 0 {
            return Err(FileDiffError::InvalidConfig(
                "display.width must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }
}
