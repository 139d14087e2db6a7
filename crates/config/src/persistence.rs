//! File system persistence for configuration
//!
//! Reads and writes the config file with atomic writes (no partial
//! files), directory creation, and graceful error handling. All
//! errors are surfaced via Result types.

use crate::{Config, ConfigError, ConfigResult};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// Handles configuration file persistence
pub struct ConfigPersistence {
    config_path: PathBuf,
}

impl ConfigPersistence {
    /// Creates a new persistence handler for the given config file path
    pub fn new(config_path: PathBuf) -> Self {
        Self { config_path }
    }

    /// Loads configuration from file
    ///
    /// If the file doesn't exist, returns the default config.
    /// If the file is empty or corrupted, returns an error.
    pub fn load(&self) -> ConfigResult<Config> {
        if !self.config_path.exists() {
            log::info!(
                "Config file not found at {}, using defaults",
                self.config_path.display()
            );
            return Ok(Config::default());
        }

        let contents =
            fs::read_to_string(&self.config_path).map_err(|e| ConfigError::ReadError {
                path: self.config_path.clone(),
                source: e,
            })?;

        // An empty file is treated as corrupted, not as valid defaults.
        if contents.trim().is_empty() {
            return Err(ConfigError::ReadError {
                path: self.config_path.clone(),
                source: std::io::Error::new(
                    std::io::ErrorKind::InvalidData,
                    "Config file is empty or contains only whitespace",
                ),
            });
        }

        let config: Config = toml::from_str(&contents).map_err(|e| ConfigError::ParseError {
            path: self.config_path.clone(),
            source: e,
        })?;

        // Warn on invalid values but keep the loaded config, so users
        // can fix mistakes without losing the rest of the file.
        if let Err(errors) = config.validate() {
            let error_msg = errors
                .iter()
                .map(|e| e.to_string())
                .collect::<Vec<_>>()
                .join("; ");
            log::warn!("Config validation warnings: {}", error_msg);
        }

        Ok(config)
    }

    /// Saves configuration to file atomically
    ///
    /// Writes to a temporary file in the same directory and renames it
    /// into place, so the config file is never left half-written.
    pub fn save(&self, config: &Config) -> ConfigResult<()> {
        if let Err(errors) = config.validate() {
            let error_msg = errors
                .iter()
                .map(|e| e.to_string())
                .collect::<Vec<_>>()
                .join("; ");
            return Err(ConfigError::ValidationError(error_msg));
        }

        if let Some(parent) = self.config_path.parent() {
            self.ensure_directory_exists(parent)?;
        }

        let toml_string = toml::to_string_pretty(config).map_err(ConfigError::SerializeError)?;
        self.write_atomic(&toml_string)?;

        log::info!("Config saved to {}", self.config_path.display());
        Ok(())
    }

    /// Ensures a directory exists, creating it if necessary
    fn ensure_directory_exists(&self, path: &Path) -> ConfigResult<()> {
        if path.exists() {
            return Ok(());
        }
        fs::create_dir_all(path).map_err(|e| ConfigError::DirectoryCreationError {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Writes contents to the config path via a temporary file
    fn write_atomic(&self, contents: &str) -> ConfigResult<()> {
        let dir = self
            .config_path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from("."));

        let mut temp_file = NamedTempFile::new_in(&dir).map_err(|e| ConfigError::WriteError {
            path: self.config_path.clone(),
            source: e,
        })?;

        temp_file
            .write_all(contents.as_bytes())
            .map_err(|e| ConfigError::WriteError {
                path: self.config_path.clone(),
                source: e,
            })?;

        temp_file
            .persist(&self.config_path)
            .map_err(|e| ConfigError::WriteError {
                path: self.config_path.clone(),
                source: e.error,
            })?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{AppConfig, BrowseConfig, ColorScheme};
    use tempfile::TempDir;

    fn persistence_in(dir: &TempDir) -> ConfigPersistence {
        ConfigPersistence::new(dir.path().join("config.toml"))
    }

    #[test]
    fn test_load_missing_file_returns_defaults() {
        let dir = TempDir::new().unwrap();
        let persistence = persistence_in(&dir);
        let config = persistence.load().unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let dir = TempDir::new().unwrap();
        let persistence = persistence_in(&dir);

        let config = Config {
            app: AppConfig {
                color_scheme: ColorScheme::Night,
                ..AppConfig::default()
            },
            browse: BrowseConfig {
                page_size: 12,
                show_covers: false,
            },
            ..Config::default()
        };

        persistence.save(&config).unwrap();
        let loaded = persistence.load().unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_load_empty_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "   \n").unwrap();

        let persistence = ConfigPersistence::new(path);
        assert!(matches!(
            persistence.load(),
            Err(ConfigError::ReadError { .. })
        ));
    }

    #[test]
    fn test_load_malformed_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "this is not toml [").unwrap();

        let persistence = ConfigPersistence::new(path);
        assert!(matches!(
            persistence.load(),
            Err(ConfigError::ParseError { .. })
        ));
    }

    #[test]
    fn test_save_invalid_config_is_refused() {
        let dir = TempDir::new().unwrap();
        let persistence = persistence_in(&dir);

        let config = Config {
            browse: BrowseConfig {
                page_size: 0,
                ..BrowseConfig::default()
            },
            ..Config::default()
        };

        assert!(matches!(
            persistence.save(&config),
            Err(ConfigError::ValidationError(_))
        ));
    }

    #[test]
    fn test_save_creates_missing_directories() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("config.toml");
        let persistence = ConfigPersistence::new(path.clone());

        persistence.save(&Config::default()).unwrap();
        assert!(path.exists());
    }
}
