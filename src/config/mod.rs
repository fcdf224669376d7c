// Copyright 2025 Eric Jingryd (tidynest@proton.me)
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Configuration file management
//!
//! Loads and saves the calculator's TOML config:
//!
//! ```toml
//! [theme]
//! background = "#2C3E50"
//!
//! [window]
//! width = 400
//! height = 600
//!
//! [calculator]
//! max_expression_length = 20
//! ```
//!
//! A missing file is not an error: every setting falls back to its default.
//! Writes go through `atomic-write-file` so a crash never leaves a
//! half-written config behind.
//!
//! # Example
//!
//! ```no_run
//! use deskcalc::config::ConfigManager;
//!
//! let manager = ConfigManager::new("~/.config/deskcalc/config.toml".into())?;
//! let config = manager.load()?;
//! println!("Window: {}x{}", config.window.width, config.window.height);
//! # Ok::<(), deskcalc::config::ConfigError>(())
//! ```

pub mod error;
pub mod types;
pub mod validator;

pub use error::ConfigError;
pub use types::{AppConfig, CalculatorConfig, ThemeConfig, WindowConfig};

use atomic_write_file::AtomicWriteFile;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

use crate::config::validator::ConfigValidator;

/// Default config location, tilde-expanded at runtime
pub const DEFAULT_CONFIG_PATH: &str = "~/.config/deskcalc/config.toml";

/// Expands a leading `~` in a config path to the home directory
///
/// # Errors
///
/// Returns `ConfigError::InvalidPath` if the path is not valid UTF-8.
pub fn expand_path(path: &Path) -> Result<PathBuf, ConfigError> {
    let raw = path
        .to_str()
        .ok_or_else(|| ConfigError::InvalidPath("path is not valid UTF-8".to_string()))?;

    let expanded = shellexpand::tilde(raw);
    Ok(PathBuf::from(expanded.as_ref()))
}

/// Manages the calculator config file.
#[derive(Clone, Debug)]
pub struct ConfigManager {
    /// Path to the config file, already expanded.
    config_path: PathBuf,
}

impl ConfigManager {
    /// Creates a new ConfigManager for the given path.
    ///
    /// The file does not have to exist yet.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidPath` if the path cannot be expanded.
    pub fn new(config_path: PathBuf) -> Result<Self, ConfigError> {
        Ok(Self {
            config_path: expand_path(&config_path)?,
        })
    }

    /// Returns the expanded config file path.
    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    /// Returns true if the config file exists on disk.
    pub fn exists(&self) -> bool {
        self.config_path.exists()
    }

    /// Loads and validates the config.
    ///
    /// Missing file → defaults. Warnings are logged, errors are returned.
    ///
    /// # Errors
    ///
    /// - `ConfigError::Io` if the file exists but cannot be read
    /// - `ConfigError::Parse` for malformed TOML or unknown keys
    /// - `ConfigError::ValidationFailed` for invalid values
    pub fn load(&self) -> Result<AppConfig, ConfigError> {
        if !self.exists() {
            info!(path = %self.config_path.display(), "No config file, using defaults");
            return Ok(AppConfig::default());
        }

        let content = fs::read_to_string(&self.config_path)?;
        let config = Self::parse(&content)?;

        info!(path = %self.config_path.display(), "Loaded config");
        Ok(config)
    }

    /// Parses and validates config file content.
    pub fn parse(content: &str) -> Result<AppConfig, ConfigError> {
        let config: AppConfig = toml::from_str(content)?;
        Self::validate(&config)?;
        Ok(config)
    }

    /// Writes the config atomically, creating parent directories.
    ///
    /// Invalid configs are never written.
    pub fn save(&self, config: &AppConfig) -> Result<(), ConfigError> {
        Self::validate(config)?;

        let content = toml::to_string_pretty(config)?;

        if let Some(parent) = self.config_path.parent() {
            fs::create_dir_all(parent)?;
        }

        // Open file for atomic writing
        let mut file = AtomicWriteFile::options()
            .open(&self.config_path)
            .map_err(|e| ConfigError::WriteFailed(format!("Failed to open for atomic write: {}", e)))?;

        file.write_all(content.as_bytes())
            .map_err(|e| ConfigError::WriteFailed(format!("Failed to write content: {}", e)))?;

        // Commit atomically
        file.commit()
            .map_err(|e| ConfigError::WriteFailed(format!("Failed to commit atomic write: {}", e)))?;

        info!(path = %self.config_path.display(), "Saved config");
        Ok(())
    }

    /// Writes the default config.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::AlreadyExists` if the file exists and
    /// `overwrite` is false.
    pub fn init(&self, overwrite: bool) -> Result<AppConfig, ConfigError> {
        if self.exists() && !overwrite {
            return Err(ConfigError::AlreadyExists(self.config_path.clone()));
        }

        let config = AppConfig::default();
        self.save(&config)?;
        Ok(config)
    }

    fn validate(config: &AppConfig) -> Result<(), ConfigError> {
        let report = ConfigValidator::new().validate_config(config);

        for issue in report.warnings() {
            warn!("Config warning: {}", issue);
        }

        if report.has_errors() {
            return Err(ConfigError::ValidationFailed(report.error_summary()));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
