//! mysc configuration system
//!
//! # Configuration hierarchy
//!
//! ```text
//! Priority (high → low):
//! 1. CLI arguments
//! 2. User-level (~/.config/mysc/config.toml)
//! 3. Default values
//! ```
//!
//! # Usage
//!
//! ```rust
//! use mysc::util::config::{load_user_config, UserConfig};
//!
//! let config = load_user_config().unwrap_or_default();
//! assert!(!config.output.extension.is_empty());
//! ```

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use thiserror::Error;

use crate::util::logger::LogLevel;

/// User-level configuration for mysc
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct UserConfig {
    /// Logging settings
    #[serde(default)]
    pub log: LogConfig,
    /// Generated file settings
    #[serde(default)]
    pub output: OutputConfig,
    /// Diagnostic presentation
    #[serde(default)]
    pub diagnostics: DiagnosticsConfig,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct LogConfig {
    /// Minimum level printed to stderr
    #[serde(default)]
    pub level: LogLevel,
}

/// Output configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OutputConfig {
    /// Extension of generated files
    #[serde(default = "default_extension")]
    pub extension: String,
    /// Directory for generated files; next to the input when unset
    #[serde(default)]
    pub directory: Option<PathBuf>,
}

fn default_extension() -> String {
    "cpp".to_string()
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            extension: default_extension(),
            directory: None,
        }
    }
}

impl OutputConfig {
    /// Where the translation of `input` is written
    pub fn output_path_for(
        &self,
        input: &Path,
    ) -> PathBuf {
        let file_name = input.with_extension(&self.extension);
        match (&self.directory, file_name.file_name()) {
            (Some(dir), Some(name)) => dir.join(name),
            _ => file_name,
        }
    }
}

/// Diagnostic output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for MessageFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "text" => Ok(MessageFormat::Text),
            "json" => Ok(MessageFormat::Json),
            other => Err(format!("unknown message format '{}'", other)),
        }
    }
}

/// Diagnostics configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct DiagnosticsConfig {
    /// Format of reported errors
    #[serde(default)]
    pub format: MessageFormat,
}

/// Get the user config directory
pub fn get_config_dir() -> Option<PathBuf> {
    if let Ok(xdg_config) = std::env::var("XDG_CONFIG_HOME") {
        return Some(PathBuf::from(xdg_config).join("mysc"));
    }

    if let Ok(home) = std::env::var("HOME") {
        return Some(PathBuf::from(home).join(".config").join("mysc"));
    }

    // On Windows, try %APPDATA%
    if let Ok(appdata) = std::env::var("APPDATA") {
        return Some(PathBuf::from(appdata).join("mysc"));
    }

    None
}

/// Get the user config file path (~/.config/mysc/config.toml)
pub fn get_config_path() -> Option<PathBuf> {
    get_config_dir().map(|dir| dir.join("config.toml"))
}

/// Load user-level configuration
/// Returns default config if file doesn't exist
pub fn load_user_config() -> Result<UserConfig, ConfigError> {
    match get_config_path() {
        Some(path) if path.exists() => load_config_from(&path),
        _ => Ok(UserConfig::default()),
    }
}

/// Load configuration from an explicit file
pub fn load_config_from(path: &Path) -> Result<UserConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content)?)
}

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Config parse error: {0}")]
    ParseError(#[from] toml::de::Error),
}
