//! Site configuration payload and loading.
//!
//! # Module Structure
//!
//! ```text
//! config/
//! ├── section/       # Configuration section definitions
//! │   ├── locale     # [locales.*]
//! │   └── theme/     # [theme] and per-locale overrides
//! ├── types/         # Utility types
//! │   ├── error      # ConfigError + diagnostics
//! │   └── field      # FieldPath
//! └── mod.rs         # SiteConfig (this file)
//! ```
//!
//! A [`SiteConfig`] is the raw declarative payload: site metadata, the root
//! theme defaults, and one section per locale. It is parsed once (from TOML
//! or JSON, or constructed in code), validated once, and then owned
//! immutably by [`Site`](crate::site::Site) for the process lifetime.

pub mod section;
pub mod types;

// Re-export from section/
pub use section::{
    ActiveMatch, FooterConfig, LocaleSection, NavItem, SearchConfig, SidebarGroup, SidebarItem,
    SidebarMap, SocialLink, ThemeOverrides,
};

// Re-export from types/
pub use types::{ConfigDiagnostic, ConfigDiagnostics, ConfigError, FieldPath};

use crate::log;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::{
    collections::BTreeMap,
    fs,
    path::{Path, PathBuf},
};

// ============================================================================
// root configuration
// ============================================================================

/// Root configuration structure for a multi-locale documentation site.
///
/// Everything outside `locales` and `theme` is static pass-through data for
/// the consuming site generator; the core neither interprets nor validates
/// it beyond type shape.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Site title (pass-through; locales may carry their own).
    pub title: Option<String>,

    /// Site description (pass-through).
    pub description: Option<String>,

    /// Content source directory (pass-through).
    #[serde(alias = "srcDir")]
    pub src_dir: Option<PathBuf>,

    /// Static assets directory (pass-through).
    #[serde(alias = "assetsDir")]
    pub assets_dir: Option<PathBuf>,

    /// Head tag descriptors, kept as raw values (pass-through).
    pub head: Vec<serde_json::Value>,

    /// Configured locales, keyed by identifier. Exactly one must be `root`.
    pub locales: BTreeMap<String, LocaleSection>,

    /// Root theme defaults every locale merges against.
    #[serde(alias = "themeConfig")]
    pub theme: ThemeOverrides,

    /// Custom fields the core passes through untouched.
    pub extra: FxHashMap<String, serde_json::Value>,
}

impl SiteConfig {
    /// Parse configuration from a TOML string.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        Ok(config)
    }

    /// Parse configuration from a JSON string (the direct serialization of
    /// a JS-object site config).
    pub fn from_json_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(content)?;
        Ok(config)
    }

    /// Load configuration from a file path, dispatching on extension
    /// (`.toml` or `.json`), with unknown-field detection.
    ///
    /// Unknown fields are not fatal; each is reported as a warning.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;

        let (config, ignored) = match path.extension().and_then(|ext| ext.to_str()) {
            Some("toml") => Self::parse_toml_with_ignored(&content)?,
            Some("json") => Self::parse_json_with_ignored(&content)?,
            _ => {
                return Err(ConfigError::Validation(format!(
                    "unsupported config format: {}",
                    path.display()
                )));
            }
        };

        if !ignored.is_empty() {
            Self::warn_unknown_fields(&ignored, path);
        }

        Ok(config)
    }

    /// Parse TOML content, collecting any unknown fields.
    pub fn parse_toml_with_ignored(content: &str) -> Result<(Self, Vec<String>), ConfigError> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let config = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })?;
        Ok((config, ignored))
    }

    /// Parse JSON content, collecting any unknown fields.
    pub fn parse_json_with_ignored(content: &str) -> Result<(Self, Vec<String>), ConfigError> {
        let mut ignored = Vec::new();
        let mut deserializer = serde_json::Deserializer::from_str(content);
        let config =
            serde_ignored::deserialize(&mut deserializer, |path: serde_ignored::Path| {
                ignored.push(path.to_string());
            })?;
        deserializer.end()?;
        Ok((config, ignored))
    }

    /// Warn about unknown fields.
    fn warn_unknown_fields(fields: &[String], path: &Path) {
        let display_path = path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_else(|| path.to_string_lossy());
        log!("warning"; "unknown fields in {}, ignoring:", display_path);
        for field in fields {
            log!("warning"; "- {}", field);
        }
    }

    /// Validate the payload, collecting all errors and returning them at
    /// once.
    ///
    /// Covers locale structure (a `root` locale exists, URL prefixes are
    /// unique, sidebar scopes fall under their locale's prefix) and the
    /// mandatory merged fields (`footer`, `nav`, `sidebar` must be defined
    /// by the root theme or the locale, for every locale).
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut diag = ConfigDiagnostics::new();

        crate::locale::validate_locales(self, &mut diag);
        crate::theme::validate_mandatory(self, &mut diag);

        diag.into_result().map_err(ConfigError::Diagnostics)
    }
}

// ============================================================================
// Test Helpers (available to all modules via `use crate::config::test_*`)
// ============================================================================

/// Parse config with the minimal required `[locales.root]` section plus the
/// mandatory root theme fields. Panics if there are unknown fields (to
/// catch config typos in tests).
#[cfg(test)]
pub fn test_parse_config(extra: &str) -> SiteConfig {
    let config = format!(
        r#"
[locales.root]
label = "English"
lang = "en"
dir = "src/en"

[theme.footer]
message = "Released under the MIT License"

[[theme.nav]]
text = "Guide"
link = "/guide/intro"

[[theme.sidebar."/guide/"]]
text = "Getting Started"
items = [{{ text = "Introduction", link = "/guide/intro" }}]

{extra}"#
    );
    let (parsed, ignored) = SiteConfig::parse_toml_with_ignored(&config).unwrap();
    assert!(
        ignored.is_empty(),
        "test config has unknown fields: {:?}",
        ignored
    );
    parsed
}

// ============================================================================
// tests
// ============================================================================
