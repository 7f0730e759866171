//! Configuration file support for beadcraft.
//!
//! Settings are stored as versioned JSON. Every field has a default, so an
//! older or partial file still loads.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::constants::{API_BASE_URL_ENV, DEFAULT_API_BASE_URL, MAX_BEAD_COUNT};

/// Log level setting for the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Show only errors
    Error,
    /// Show errors and warnings
    #[default]
    Warn,
    /// Show errors, warnings, and info messages
    Info,
    /// Show debug-level logging
    Debug,
    /// Show all log messages including trace
    Trace,
}

impl LogLevel {
    /// Get the display name for this log level.
    pub fn name(&self) -> &'static str {
        match self {
            LogLevel::Error => "Error",
            LogLevel::Warn => "Warn",
            LogLevel::Info => "Info",
            LogLevel::Debug => "Debug",
            LogLevel::Trace => "Trace",
        }
    }

    /// Convert to log crate's LevelFilter.
    pub fn to_level_filter(&self) -> log::LevelFilter {
        match self {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Current configuration file format version.
/// Increment this when making breaking changes to the config format.
pub const CONFIG_VERSION: u32 = 1;

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Version of the configuration file format
    #[serde(default = "default_version")]
    pub version: u32,

    /// Base URL shared by the bead counting and suggestion services
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,

    /// Upper bound for a single color on the inventory form
    #[serde(default = "default_max_bead_count")]
    pub max_bead_count: u32,

    /// Log verbosity level
    #[serde(default)]
    pub log_level: LogLevel,
}

fn default_version() -> u32 {
    CONFIG_VERSION
}

fn default_api_base_url() -> String {
    DEFAULT_API_BASE_URL.to_string()
}

fn default_max_bead_count() -> u32 {
    MAX_BEAD_COUNT
}

impl AppConfig {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self {
            version: CONFIG_VERSION,
            api_base_url: default_api_base_url(),
            max_bead_count: default_max_bead_count(),
            log_level: LogLevel::default(),
        }
    }

    /// Serialize the configuration to JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Deserialize configuration from JSON.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;

        // Validate version compatibility
        if config.version > CONFIG_VERSION {
            return Err(ConfigError::VersionTooNew {
                file_version: config.version,
                supported_version: CONFIG_VERSION,
            });
        }

        Ok(config)
    }

    /// Replace the base URL when an override is present and non-blank.
    pub fn with_base_url_override(mut self, url: Option<String>) -> Self {
        if let Some(url) = url.filter(|u| !u.trim().is_empty()) {
            log::debug!("API base URL overridden to {}", url);
            self.api_base_url = url.trim().to_string();
        }
        self
    }

    /// Apply overrides from the process environment.
    pub fn with_env_overrides(self) -> Self {
        let url = std::env::var(API_BASE_URL_ENV).ok();
        self.with_base_url_override(url)
    }

    /// Get the default filename for the config file.
    pub fn default_filename() -> &'static str {
        "beadcraft-config.json"
    }

    /// Get the default config file path.
    /// Returns None on WASM (no filesystem access).
    #[cfg(not(target_arch = "wasm32"))]
    pub fn default_path() -> Option<PathBuf> {
        // Try to use XDG config directory, fall back to home directory
        if let Some(config_dir) = dirs::config_dir() {
            Some(config_dir.join("beadcraft").join(Self::default_filename()))
        } else {
            dirs::home_dir().map(|home_dir| {
                home_dir
                    .join(".config")
                    .join("beadcraft")
                    .join(Self::default_filename())
            })
        }
    }

    /// Load configuration from a file.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Save configuration to a file, creating parent directories.
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let json = self.to_json()?;
        std::fs::write(path, json)?;
        log::info!("Saved configuration to {:?}", path);
        Ok(())
    }

    /// Load configuration from a file that may not exist yet.
    /// Returns `Ok(None)` when there is no file at `path`.
    pub fn load_optional(path: &Path) -> Result<Option<Self>, ConfigError> {
        if !path.exists() {
            log::debug!("No config file found at {:?}", path);
            return Ok(None);
        }

        let config = Self::load_from(path)?;
        log::info!("Loaded configuration from {:?}", path);
        Ok(Some(config))
    }

    /// Load configuration from the default path, if there is one.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load_from_default_path() -> Result<Option<Self>, ConfigError> {
        match Self::default_path() {
            Some(path) => Self::load_optional(&path),
            None => Ok(None),
        }
    }

    /// Save configuration to the default path.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn save_to_default_path(&self) -> Result<PathBuf, ConfigError> {
        let path = Self::default_path().ok_or_else(|| {
            ConfigError::IoError(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                "Could not determine config directory",
            ))
        })?;

        self.save_to(&path)?;
        Ok(path)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// JSON parsing error
    #[error("Failed to parse configuration: {0}")]
    ParseError(#[from] serde_json::Error),

    /// Configuration version is newer than supported
    #[error(
        "Configuration file version {file_version} is newer than supported version {supported_version}"
    )]
    VersionTooNew {
        file_version: u32,
        supported_version: u32,
    },

    /// I/O error when reading/writing config
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.version, CONFIG_VERSION);
        assert_eq!(config.api_base_url, "http://localhost:8001");
        assert_eq!(config.max_bead_count, 256);
        assert_eq!(config.log_level, LogLevel::Warn);
    }

    #[test]
    fn test_json_roundtrip() {
        let mut config = AppConfig::new();
        config.api_base_url = "https://beads.example".to_string();
        config.log_level = LogLevel::Debug;

        let json = config.to_json().unwrap();
        assert!(json.contains("\"log_level\": \"debug\""));
        assert_eq!(AppConfig::from_json(&json).unwrap(), config);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let config = AppConfig::from_json(r#"{ "max_bead_count": 500 }"#).unwrap();
        assert_eq!(config.max_bead_count, 500);
        assert_eq!(config.api_base_url, DEFAULT_API_BASE_URL);
        assert_eq!(config.version, CONFIG_VERSION);
    }

    #[test]
    fn test_newer_version_rejected() {
        let json = format!(r#"{{ "version": {} }}"#, CONFIG_VERSION + 1);
        assert!(matches!(
            AppConfig::from_json(&json),
            Err(ConfigError::VersionTooNew { .. })
        ));
    }

    #[test]
    fn test_base_url_override() {
        let config = AppConfig::new().with_base_url_override(Some(" http://10.0.0.2:8001 ".into()));
        assert_eq!(config.api_base_url, "http://10.0.0.2:8001");

        let config = AppConfig::new().with_base_url_override(Some("   ".into()));
        assert_eq!(config.api_base_url, DEFAULT_API_BASE_URL);

        let config = AppConfig::new().with_base_url_override(None);
        assert_eq!(config.api_base_url, DEFAULT_API_BASE_URL);
    }

    #[test]
    fn test_save_and_load_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join(AppConfig::default_filename());

        let mut config = AppConfig::new();
        config.max_bead_count = 64;
        config.save_to(&path).unwrap();

        assert_eq!(AppConfig::load_from(&path).unwrap(), config);
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = AppConfig::load_from(&dir.path().join("absent.json"));
        assert!(matches!(result, Err(ConfigError::IoError(_))));
    }

    #[test]
    fn test_load_optional() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(AppConfig::default_filename());
        assert!(AppConfig::load_optional(&path).unwrap().is_none());

        std::fs::write(&path, "{ not json").unwrap();
        assert!(matches!(
            AppConfig::load_optional(&path),
            Err(ConfigError::ParseError(_))
        ));

        AppConfig::new().save_to(&path).unwrap();
        assert_eq!(AppConfig::load_optional(&path).unwrap(), Some(AppConfig::new()));
    }

    #[test]
    fn test_log_level_filter() {
        assert_eq!(LogLevel::Warn.to_level_filter(), log::LevelFilter::Warn);
        assert_eq!(LogLevel::Trace.name(), "Trace");
    }
}
