use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;
use userdeck_types::{ThemeMode, DEFAULT_ENDPOINT, DEFAULT_USER_COUNT};

use crate::paths::get_config_path;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),
    #[error("TOML serialize error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
    #[error("Invalid config: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceConfig {
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    #[serde(default = "default_count")]
    pub count: u32,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            count: default_count(),
        }
    }
}

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}

fn default_count() -> u32 {
    DEFAULT_USER_COUNT
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UiConfig {
    /// Starting theme. When unset, the terminal's `COLORFGBG` is consulted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub theme: Option<ThemeMode>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub source: SourceConfig,
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub log: LogConfig,
}

impl Config {
    /// Loads the user config, falling back to defaults when no file exists.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&get_config_path())
    }

    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Config::default());
        }
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.source.count == 0 {
            return Err(ConfigError::Invalid(
                "source.count must be a positive integer".to_string(),
            ));
        }
        if self.source.endpoint.trim().is_empty() {
            return Err(ConfigError::Invalid(
                "source.endpoint must not be empty".to_string(),
            ));
        }
        Ok(())
    }

    pub fn initial_theme(&self) -> ThemeMode {
        resolve_theme(self.ui.theme, std::env::var("COLORFGBG").ok().as_deref())
    }

    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }
}

fn resolve_theme(configured: Option<ThemeMode>, colorfgbg: Option<&str>) -> ThemeMode {
    configured
        .or_else(|| colorfgbg.and_then(ThemeMode::from_colorfgbg))
        .unwrap_or_default()
}
