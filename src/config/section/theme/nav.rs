//! Top-level navigation entries.
//!
//! # Example
//!
//! ```toml
//! [[theme.nav]]
//! text = "Guide"
//! link = "/guide/intro"
//! active_match = "/guide/"
//! ```

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A top-level navigation link.
///
/// `active_match`, if present, decides when the item is shown as active;
/// without it the item is active for any path starting with `link`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NavItem {
    /// Display label.
    pub text: String,

    /// Target link (site-root-relative, e.g. `/guide/intro`).
    pub link: String,

    /// Pattern deciding "active for path P" (regex over the decoded path).
    #[serde(default, alias = "activeMatch", skip_serializing_if = "Option::is_none")]
    pub active_match: Option<ActiveMatch>,
}

impl NavItem {
    /// Create a nav item with plain prefix matching on `link`.
    pub fn new(text: impl Into<String>, link: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            link: link.into(),
            active_match: None,
        }
    }

    /// Attach an `active_match` pattern. Fails on an invalid regex.
    pub fn with_active_match(mut self, pattern: &str) -> Result<Self, regex::Error> {
        self.active_match = Some(ActiveMatch::new(pattern)?);
        Ok(self)
    }
}

/// An `active_match` pattern, compiled once at configuration-load time.
///
/// Serializes as the raw pattern string; deserializing an invalid regex is
/// a parse error, so every pattern reachable at resolution time is valid.
#[derive(Clone)]
pub struct ActiveMatch {
    pattern: String,
    regex: Regex,
}

impl ActiveMatch {
    /// Compile a pattern. Fails on an invalid regex.
    pub fn new(pattern: impl Into<String>) -> Result<Self, regex::Error> {
        let pattern = pattern.into();
        let regex = Regex::new(&pattern)?;
        Ok(Self { pattern, regex })
    }

    /// Check whether the pattern matches anywhere in `path`.
    #[inline]
    pub fn is_match(&self, path: &str) -> bool {
        self.regex.is_match(path)
    }

    /// Get the raw pattern string.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.pattern
    }
}

impl fmt::Debug for ActiveMatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ActiveMatch").field(&self.pattern).finish()
    }
}

// Equality over the pattern: the compiled regex is derived state.
impl PartialEq for ActiveMatch {
    fn eq(&self, other: &Self) -> bool {
        self.pattern == other.pattern
    }
}

impl Eq for ActiveMatch {}

impl Serialize for ActiveMatch {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.pattern.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for ActiveMatch {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let pattern = String::deserialize(deserializer)?;
        Self::new(pattern).map_err(serde::de::Error::custom)
    }
}
