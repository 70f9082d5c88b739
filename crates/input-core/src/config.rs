use crate::error::ConfigError;
use crate::icon::{IconRef, DEFAULT_ICON};
use crate::state::DEFAULT_PLACEHOLDER;
use crate::style::StyleVars;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Host-side defaults for widgets, read from a TOML file.
///
/// Every field is optional in the file; anything missing keeps the widget's
/// built-in default.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InputConfig {
    pub placeholder: String,
    pub icon: IconRef,
    pub style: StyleVars,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            placeholder: DEFAULT_PLACEHOLDER.to_string(),
            icon: IconRef::parse(DEFAULT_ICON),
            style: StyleVars::default(),
        }
    }
}

/// Top-level layout of the config file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub input: InputConfig,
}

impl AppConfig {
    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        toml::from_str(contents).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    pub fn read(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml(&contents)
    }
}
