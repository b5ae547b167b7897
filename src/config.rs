//! Configuration file handling for halfblock-art.
//!
//! Loads configuration from `<config dir>/halfblock-art/config.toml` or a custom path.
//! Every setting is optional; unset values fall back to CLI flags or built-in defaults.

use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Configuration file structure.
#[derive(Debug, Deserialize, Default, Clone, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub terminal: TerminalConfig,
    #[serde(default)]
    pub render: RenderConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Deserialize, Default, Clone, PartialEq)]
pub struct TerminalConfig {
    pub cols: Option<u16>,
    pub rows: Option<u16>,
    pub reserved_rows: Option<u16>,
}

#[derive(Debug, Deserialize, Default, Clone, PartialEq)]
pub struct RenderConfig {
    /// "truncated" or "exact"
    pub filter: Option<String>,
    pub gamma: Option<f32>,
    pub upscale: Option<bool>,
}

#[derive(Debug, Deserialize, Default, Clone, PartialEq)]
pub struct OutputConfig {
    pub banner: Option<bool>,
}

impl Config {
    /// Load configuration from a file path, or the default path when `None`.
    /// Returns default config if the file doesn't exist.
    /// Returns an error if the file exists but cannot be parsed.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let path = path.map(PathBuf::from).unwrap_or_else(default_path);

        if path.exists() {
            Self::read(&path)
        } else {
            log::debug!("No config file at {}, using defaults", path.display());
            Ok(Config::default())
        }
    }

    /// Load a file the user asked for explicitly. A missing file is an error.
    pub fn load_from_explicit(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Err(ConfigError::NotFound {
                path: path.to_path_buf(),
            });
        }
        Self::read(path)
    }

    /// Parse configuration from TOML text. `path` is only used in error messages.
    pub fn from_toml_str(content: &str, path: &Path) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            source: e,
        })
    }

    fn read(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::IoError {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config = Self::from_toml_str(&content, path)?;
        log::debug!("Loaded config from {}", path.display());
        Ok(config)
    }
}

/// Errors that can occur when loading configuration.
#[derive(Debug)]
pub enum ConfigError {
    IoError {
        path: PathBuf,
        source: std::io::Error,
    },
    ParseError {
        path: PathBuf,
        source: toml::de::Error,
    },
    NotFound {
        path: PathBuf,
    },
    InvalidValue {
        key: &'static str,
        value: String,
    },
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::IoError { path, source } => {
                write!(
                    f,
                    "Failed to read config file '{}': {}",
                    path.display(),
                    source
                )
            }
            ConfigError::ParseError { path, source } => {
                write!(
                    f,
                    "Failed to parse config file '{}': {}",
                    path.display(),
                    source
                )
            }
            ConfigError::NotFound { path } => {
                write!(f, "Config file not found: {}", path.display())
            }
            ConfigError::InvalidValue { key, value } => {
                write!(f, "Invalid value '{}' for config key '{}'", value, key)
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::IoError { source, .. } => Some(source),
            ConfigError::ParseError { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Get the default config file path.
pub fn default_path() -> PathBuf {
    dirs::config_dir()
        .map(|d| d.join("halfblock-art").join("config.toml"))
        .unwrap_or_else(|| {
            let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".config/halfblock-art/config.toml")
        })
}
