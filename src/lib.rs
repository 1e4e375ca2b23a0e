//! Polydoc - configuration resolution for multi-locale documentation sites.
//!
//! Given a declarative description of locales, navigation entries, sidebar
//! trees and theme options, polydoc answers three questions for any URL
//! path: which locale owns it, what that locale's fully-merged theme looks
//! like, and which nav item / sidebar tree is active. Rendering, asset
//! pipelines and search are the consuming site generator's business; this
//! crate only resolves configuration.
//!
//! ```ignore
//! use polydoc::{Site, SiteConfig, UrlPath};
//!
//! let site = Site::new(SiteConfig::from_toml_str(payload)?)?;
//! let page = site.resolve(&UrlPath::from_browser("/en/guide/intro"));
//! ```

pub mod config;
pub mod core;
pub mod locale;
pub mod logger;
pub mod nav;
pub mod site;
pub mod theme;

pub use config::{
    ActiveMatch, ConfigDiagnostic, ConfigDiagnostics, ConfigError, FieldPath, FooterConfig,
    LocaleSection, NavItem, SearchConfig, SidebarGroup, SidebarItem, SidebarMap, SiteConfig,
    SocialLink, ThemeOverrides,
};
pub use core::UrlPath;
pub use locale::{Locale, LocaleRegistry, ROOT_LOCALE};
pub use nav::{active_nav, active_sidebar};
pub use site::{PathResolution, Site};
pub use theme::{ConfigMerger, ThemeConfig};
