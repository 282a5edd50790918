//! Configuration management for imgconv.
//!
//! Configuration is optional. It is read from the platform config directory
//! (or an explicit path) and falls back to defaults for anything missing.
//! Conversion parameters are fixed and deliberately absent here.

mod types;
mod validate;

pub use types::*;

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Root configuration structure for imgconv.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Resource limits
    pub limits: LimitsConfig,

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
    /// Uses platform-appropriate directories:
    /// - macOS: ~/Library/Application Support/com.imgconv.imgconv/config.toml
    /// - Linux: ~/.config/imgconv/config.toml
    /// - Windows: C:\Users\<User>\AppData\Roaming\imgconv\config\config.toml
    ///
    /// Falls back to ~/.imgconv/config.toml if directory detection fails.
    pub fn default_path() -> PathBuf {
        directories::ProjectDirs::from("com", "imgconv", "imgconv")
            .map(|dirs| dirs.config_dir().to_path_buf().join("config.toml"))
            .unwrap_or_else(|| {
                let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
                PathBuf::from(home).join(".imgconv").join("config.toml")
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.limits.max_file_size_mb, 100);
        assert_eq!(config.limits.max_image_dimension, 20000);
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_empty_toml_uses_defaults() {
        let config = Config::from_toml("").unwrap();
        assert_eq!(config.limits.decode_timeout_ms, 30000);
        assert_eq!(config.logging.format, "pretty");
    }

    #[test]
    fn test_partial_toml_overrides_only_given_keys() {
        let config = Config::from_toml(
            r#"
            [limits]
            max_file_size_mb = 5

            [logging]
            format = "json"
            "#,
        )
        .unwrap();
        assert_eq!(config.limits.max_file_size_mb, 5);
        assert_eq!(config.limits.max_image_dimension, 20000);
        assert_eq!(config.logging.format, "json");
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_malformed_toml_is_parse_error() {
        let err = Config::from_toml("[limits\nmax_file_size_mb = ").unwrap_err();
        assert!(matches!(err, ConfigError::ParseError(_)));
    }

    #[test]
    fn test_load_from_missing_file_is_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = Config::load_from(&dir.path().join("nope.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::ReadError(_)));
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[limits]\ndecode_timeout_ms = 250\n").unwrap();
        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.limits.decode_timeout_ms, 250);
    }

    #[test]
    fn test_default_path_ends_with_config_toml() {
        assert!(Config::default_path().ends_with("config.toml"));
    }
}
