use serde::{Deserialize, Serialize};
use std::fmt;

/// Namespace whose glyphs are always available without a lazy load.
pub const DEFAULT_NAMESPACE: &str = "icons";

/// Icon shown by a freshly constructed widget.
pub const DEFAULT_ICON: &str = "icons:search";

/// A namespaced glyph identifier of the form `"<namespace>:<glyph>"`.
///
/// Identifiers without a `:` belong to [`DEFAULT_NAMESPACE`]. Only the first
/// `:` separates the namespace, so glyph names may themselves contain colons.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct IconRef {
    namespace: String,
    glyph: String,
}

impl IconRef {
    pub fn new(namespace: impl Into<String>, glyph: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
            glyph: glyph.into(),
        }
    }

    /// Parse an identifier. Never fails: malformed input still yields a
    /// reference, which simply won't resolve to a glyph.
    pub fn parse(id: &str) -> Self {
        match id.split_once(':') {
            Some((namespace, glyph)) => Self::new(namespace, glyph),
            None => Self::new(DEFAULT_NAMESPACE, id),
        }
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    pub fn glyph(&self) -> &str {
        &self.glyph
    }

    /// Whether this icon lives in the always-loaded namespace.
    pub fn is_default_namespace(&self) -> bool {
        self.namespace == DEFAULT_NAMESPACE
    }
}

impl Default for IconRef {
    fn default() -> Self {
        Self::parse(DEFAULT_ICON)
    }
}

impl fmt::Display for IconRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.namespace, self.glyph)
    }
}

impl From<&str> for IconRef {
    fn from(id: &str) -> Self {
        Self::parse(id)
    }
}

impl From<String> for IconRef {
    fn from(id: String) -> Self {
        Self::parse(&id)
    }
}

impl From<IconRef> for String {
    fn from(icon: IconRef) -> Self {
        icon.to_string()
    }
}
