use serde::{Deserialize, Serialize};
use std::fmt;

/// Why an icon-set bundle could not be loaded.
///
/// Never surfaces to the host: the resolver logs it and leaves the glyph
/// blank.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum IconLoadError {
    /// No bundle is registered for the namespace.
    UnknownNamespace { namespace: String },
    /// The bundle exists but could not be fetched or decoded.
    BundleUnavailable { namespace: String, reason: String },
}

impl IconLoadError {
    pub fn unknown_namespace(namespace: impl Into<String>) -> Self {
        Self::UnknownNamespace {
            namespace: namespace.into(),
        }
    }

    pub fn bundle_unavailable(namespace: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::BundleUnavailable {
            namespace: namespace.into(),
            reason: reason.into(),
        }
    }

    pub fn namespace(&self) -> &str {
        match self {
            IconLoadError::UnknownNamespace { namespace }
            | IconLoadError::BundleUnavailable { namespace, .. } => namespace,
        }
    }
}

impl fmt::Display for IconLoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IconLoadError::UnknownNamespace { namespace } => {
                write!(f, "no icon set registered for namespace '{namespace}'")
            }
            IconLoadError::BundleUnavailable { namespace, reason } => {
                write!(f, "icon set '{namespace}' unavailable: {reason}")
            }
        }
    }
}

impl std::error::Error for IconLoadError {}

/// Failure reading the widget configuration file.
#[derive(Debug)]
pub enum ConfigError {
    Read(std::io::Error),
    Parse(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Read(e) => write!(f, "failed to read config: {e}"),
            ConfigError::Parse(msg) => write!(f, "failed to parse config: {msg}"),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Read(e) => Some(e),
            ConfigError::Parse(_) => None,
        }
    }
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::Read(e)
    }
}
