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
    /// Uses `~/.config/pitchdeck/config.toml` on Unix/macOS, or the
    /// platform equivalent via `dirs::config_dir()`. Falls back to the
    /// current directory if no config dir is available.
    pub fn config_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("pitchdeck").join("config.toml")
    }

    /// Loads configuration from the default config file.
    ///
    /// A missing file yields `Config::default()`; read, parse and
    /// validation failures are errors.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_path())
    }

    /// Loads configuration from an explicit path (`--config`).
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
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
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.ui.tick_rate_ms == 0 {
            return Err(ConfigError::ValidationError {
                message: "ui.tick_rate_ms must be at least 1".to_string(),
            });
        }
        if self.ui.start_slide == 0 {
            return Err(ConfigError::ValidationError {
                message: "ui.start_slide is 1-based and must be at least 1".to_string(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_config(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn missing_file_yields_defaults() {
        let config = Config::load_from(Path::new("/nonexistent/pitchdeck.toml")).unwrap();
        assert_eq!(config.ui.tick_rate_ms, 250);
        assert!(config.ui.mouse);
        assert_eq!(config.ui.start_slide, 1);
    }

    #[test]
    fn valid_file_overrides_defaults() {
        let file = write_config("[ui]\ntick_rate_ms = 100\nmouse = false\nstart_slide = 3\n");
        let config = Config::load_from(file.path()).unwrap();
        assert_eq!(config.ui.tick_rate_ms, 100);
        assert!(!config.ui.mouse);
        assert_eq!(config.ui.start_slide, 3);
    }

    #[test]
    fn partial_file_keeps_remaining_defaults() {
        let file = write_config("[ui]\nmouse = false\n");
        let config = Config::load_from(file.path()).unwrap();
        assert!(!config.ui.mouse);
        assert_eq!(config.ui.tick_rate_ms, 250);
    }

    #[test]
    fn malformed_toml_is_a_parse_error() {
        let file = write_config("[ui\nmouse = maybe");
        let err = Config::load_from(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::ParseError { .. }));
    }

    #[test]
    fn zero_tick_rate_fails_validation() {
        let file = write_config("[ui]\ntick_rate_ms = 0\n");
        let err = Config::load_from(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::ValidationError { .. }));
    }

    #[test]
    fn zero_start_slide_fails_validation() {
        let file = write_config("[ui]\nstart_slide = 0\n");
        let err = Config::load_from(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::ValidationError { .. }));
    }
}
