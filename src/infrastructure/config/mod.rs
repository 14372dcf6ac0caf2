//! Configuration management

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use crate::application::errors::ConfigError;

pub const DEFAULT_BANNER: &str = "ADVANCED SINGLE command";
pub const DEFAULT_SEPARATOR: &str = "--------------------";

/// Application configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct Config {
    #[serde(default)]
    pub layout: LayoutConfig,
}

/// Output layout: the lines printed ahead of the messages
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct LayoutConfig {
    #[serde(default = "default_banner")]
    pub banner: String,
    #[serde(default = "default_separator")]
    pub separator: String,
}

fn default_banner() -> String {
    DEFAULT_BANNER.to_string()
}

fn default_separator() -> String {
    DEFAULT_SEPARATOR.to_string()
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            banner: default_banner(),
            separator: default_separator(),
        }
    }
}

impl Config {
    pub fn load(path: impl Into<PathBuf>) -> Result<Self, ConfigError> {
        let path = path.into();
        let content = std::fs::read_to_string(&path)
            .map_err(|e| ConfigError::Read(format!("Failed to read {}: {}", path.display(), e)))?;

        Self::from_yaml(&content)
    }

    pub fn from_yaml(content: &str) -> Result<Self, ConfigError> {
        let config: Config = serde_yaml::from_str(content)
            .map_err(|e| ConfigError::Parse(format!("Failed to parse config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Banner and separator must each be one non-empty line; the separator is dashes only
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (field, value) in [("banner", &self.layout.banner), ("separator", &self.layout.separator)] {
            if value.is_empty() {
                return Err(ConfigError::InvalidValue(format!("{} must not be empty", field)));
            }
            if value.contains('\n') || value.contains('\r') {
                return Err(ConfigError::InvalidValue(format!("{} must be a single line", field)));
            }
        }
        if !self.layout.separator.chars().all(|c| c == '-') {
            return Err(ConfigError::InvalidValue("separator must consist of '-' characters".to_string()));
        }
        Ok(())
    }

    pub fn to_yaml(&self) -> Result<String, ConfigError> {
        serde_yaml::to_string(self)
            .map_err(|e| ConfigError::Parse(format!("Failed to render config: {}", e)))
    }
}
