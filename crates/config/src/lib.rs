//! Bookdeck configuration system
//!
//! Each feature defines its config as a type implementing the
//! `ConfigSection` trait.
//!
//! - **Trait-based**: sections validate and merge themselves
//! - **Graceful degradation**: invalid configs fall back to defaults
//!   with warnings
//! - **Atomic writes**: config files are never left half-written
//! - **Zero panics**: all errors are handled via Result types

mod error;
mod manager;
mod persistence;
mod validation;

// Config sections
mod app_config;
mod browse_config;

pub use error::{ConfigError, ConfigResult, ValidationError};
pub use manager::ConfigManager;
pub use validation::{ConfigSection, Validator};

pub use app_config::{AppConfig, ColorScheme, LogLevel};
pub use browse_config::BrowseConfig;

use serde::{Deserialize, Serialize};

/// Current config file format version
pub const CONFIG_VERSION: u32 = 1;

/// Root configuration structure
///
/// Contains all config sections. New sections added here are
/// automatically included in load/save operations.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Config file format version
    pub version: u32,

    /// Application-level settings
    pub app: AppConfig,

    /// Browse view settings
    pub browse: BrowseConfig,
}

impl Config {
    /// Creates a new config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Validates the entire configuration
    ///
    /// Returns all validation errors found across all sections.
    pub fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        if let Err(mut e) = self.app.validate() {
            errors.append(&mut e);
        }

        if let Err(mut e) = self.browse.validate() {
            errors.append(&mut e);
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    /// Merges this config with another, preferring values from `other`
    pub fn merge(&mut self, other: Config) {
        self.app.merge(other.app);
        self.browse.merge(other.browse);
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: CONFIG_VERSION,
            app: AppConfig::default(),
            browse: BrowseConfig::default(),
        }
    }
}
