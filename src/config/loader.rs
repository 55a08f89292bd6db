use std::collections::HashSet;
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
    /// Uses `~/.config/admin-grid/config.toml` on Unix/macOS, or the
    /// equivalent from `dirs::config_dir()`. Falls back to the current
    /// directory when no config dir is known.
    pub fn config_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("admin-grid").join("config.toml")
    }

    /// Loads configuration from the default config file.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_path())
    }

    /// Loads configuration from `path`.
    ///
    /// - A missing file yields `Config::default()`.
    /// - Otherwise the file is parsed as TOML and validated.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Config::default());
        }

        let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        let mut config: Config = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            source: e,
        })?;

        config.validate()?;
        config.normalize();
        Ok(config)
    }

    /// Validates the configuration.
    ///
    /// Checks:
    /// - Page size is positive
    /// - Minimum search width does not exceed the default
    /// - Identity field is set
    /// - Column keys are unique
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.grid.page_size == 0 {
            return Err(ConfigError::ValidationError {
                message: "grid.page_size must be greater than zero".to_string(),
            });
        }

        if self.grid.page_size_options.contains(&0) {
            return Err(ConfigError::ValidationError {
                message: "grid.page_size_options must not contain zero".to_string(),
            });
        }

        if self.layout.min_search_width > self.layout.default_search_width {
            return Err(ConfigError::ValidationError {
                message: format!(
                    "layout.min_search_width ({}) exceeds layout.default_search_width ({})",
                    self.layout.min_search_width, self.layout.default_search_width
                ),
            });
        }

        if self.screen.id_field.trim().is_empty() {
            return Err(ConfigError::ValidationError {
                message: "screen.id_field must not be empty".to_string(),
            });
        }

        let mut seen = HashSet::new();
        for column in &self.screen.columns {
            if !seen.insert(column.key.as_str()) {
                return Err(ConfigError::ValidationError {
                    message: format!("Duplicate column key '{}'", column.key),
                });
            }
        }

        Ok(())
    }

    /// Make sure the configured page size is one of the selectable options,
    /// kept in ascending order.
    pub fn normalize(&mut self) {
        let options = &mut self.grid.page_size_options;
        if !options.contains(&self.grid.page_size) {
            options.push(self.grid.page_size);
        }
        options.sort_unstable();
        options.dedup();
    }
}
