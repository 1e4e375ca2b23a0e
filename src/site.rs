//! Unified site configuration resolution.
//!
//! [`Site`] is the composition point: it validates a [`SiteConfig`] once,
//! then owns the [`LocaleRegistry`] and [`ConfigMerger`] for the process
//! lifetime. It is the immutable replacement for the "one global mutable
//! config object" shape this payload traditionally comes from.
//!
//! # Thread Safety
//!
//! `Site` is `Send + Sync` and all queries are pure: concurrent page-build
//! workers can share one `Site` (typically behind an `Arc`) without
//! synchronization. Resolved themes are shared as `Arc<ThemeConfig>`.
//!
//! # Example
//!
//! ```ignore
//! use polydoc::{Site, UrlPath};
//!
//! let site = Site::load("site.toml")?;
//! let page = site.resolve(&UrlPath::from_browser("/en/guide/intro"));
//! println!("{} -> locale {}", page.locale.prefix, page.locale.id);
//! ```

use crate::config::{ConfigError, SiteConfig};
use crate::core::UrlPath;
use crate::locale::{Locale, LocaleRegistry};
use crate::nav::{active_nav, active_sidebar};
use crate::theme::{ConfigMerger, ThemeConfig};
use crate::{config::NavItem, config::SidebarGroup, debug};
use std::path::Path;
use std::sync::Arc;

/// Everything the rendering pipeline needs for one path.
#[derive(Debug, Clone)]
pub struct PathResolution<'a> {
    /// The locale owning the path.
    pub locale: &'a Locale,

    /// The locale's fully-merged theme.
    pub theme: Arc<ThemeConfig>,

    /// The active top-level nav item, if any.
    pub nav: Option<NavItem>,

    /// The active sidebar groups (empty when no scope matches).
    pub sidebar: Vec<SidebarGroup>,
}

/// A validated, immutable multi-locale site configuration.
#[derive(Debug)]
pub struct Site {
    config: SiteConfig,
    registry: LocaleRegistry,
    merger: ConfigMerger,
}

impl Site {
    /// Build a site from a payload, running the full load-time validation.
    ///
    /// All structural violations (missing `root` locale, duplicate
    /// prefixes, missing mandatory merged fields, out-of-scope sidebar
    /// keys) are collected and reported in one [`ConfigError`]; after
    /// construction succeeds, no resolution call can fail.
    pub fn new(config: SiteConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        let registry = LocaleRegistry::new(&config)?;
        let merger = ConfigMerger::new(config.theme.clone());
        debug!("site"; "configured {} locales", registry.len());

        Ok(Self {
            config,
            registry,
            merger,
        })
    }

    /// Load and validate a site from a config file (`.toml` or `.json`).
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        Self::new(SiteConfig::load(path)?)
    }

    /// The raw payload (pass-through fields included).
    pub fn config(&self) -> &SiteConfig {
        &self.config
    }

    /// The locale registry.
    pub fn locales(&self) -> &LocaleRegistry {
        &self.registry
    }

    /// The locale owning `path` (root locale when none claims it).
    pub fn locale_for(&self, path: &UrlPath) -> &Locale {
        self.registry.resolve_locale(path)
    }

    /// The fully-merged theme for `locale` (computed at most once).
    pub fn theme_for(&self, locale: &Locale) -> Arc<ThemeConfig> {
        self.merger.resolve(locale)
    }

    /// One-shot resolution for a path: owning locale, merged theme, active
    /// nav item, active sidebar groups.
    pub fn resolve(&self, path: &UrlPath) -> PathResolution<'_> {
        let locale = self.registry.resolve_locale(path);
        let theme = self.merger.resolve(locale);
        let nav = active_nav(&theme, path).cloned();
        let sidebar = active_sidebar(&theme, path).to_vec();

        PathResolution {
            locale,
            theme,
            nav,
            sidebar,
        }
    }
}

// ============================================================================
// tests
// ============================================================================
