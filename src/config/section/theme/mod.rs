//! `[theme]` section configuration.
//!
//! The theme section appears twice in a site payload: once at the top level
//! (root defaults) and once per locale (partial overrides). Both parse into
//! [`ThemeOverrides`], where every field is optional; merging against the
//! root produces the resolved [`ThemeConfig`](crate::theme::ThemeConfig).
//!
//! # Example
//!
//! ```toml
//! [theme]
//! logo = "/logo.svg"
//! social_links = [{ icon = "github", link = "https://github.com/acme/docs" }]
//!
//! [theme.footer]
//! message = "Released under the MIT License"
//! copyright = "Copyright © 2026 Acme"
//!
//! [[theme.nav]]
//! text = "Guide"
//! link = "/guide/intro"
//! active_match = "/guide/"
//! ```

mod nav;
mod sidebar;

pub use nav::{ActiveMatch, NavItem};
pub use sidebar::{SidebarGroup, SidebarItem, SidebarMap};

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// Partial theme configuration (root defaults or a locale override).
///
/// Every field is optional; absent fields fall back to the root theme when
/// the locale's configuration is resolved.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeOverrides {
    /// Site logo path.
    pub logo: Option<String>,

    /// Social links, in display order. Replaces the root list wholesale.
    #[serde(alias = "socialLinks")]
    pub social_links: Option<Vec<SocialLink>>,

    /// Search provider descriptor. Replaces the root descriptor wholesale.
    pub search: Option<SearchConfig>,

    /// Footer lines; `message` and `copyright` fall back field-by-field.
    pub footer: Option<FooterConfig>,

    /// Top-level navigation, in declaration order. Replaces the root nav
    /// wholesale; nav is locale-specific branding, never merged item-wise.
    pub nav: Option<Vec<NavItem>>,

    /// Sidebar trees keyed by path scope. Overlays the root map key-by-key.
    pub sidebar: Option<SidebarMap>,
}

/// A social link entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialLink {
    /// Icon name (opaque to the core, e.g. `github`).
    pub icon: String,

    /// Target URL.
    pub link: String,
}

/// Search provider descriptor.
///
/// `options` carries provider credentials and settings (app id, API key,
/// index name, placeholder text); the core passes them through untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Provider identifier (e.g. `algolia`, `local`).
    pub provider: String,

    /// Opaque provider options.
    pub options: FxHashMap<String, serde_json::Value>,
}

/// Footer configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FooterConfig {
    /// Footer message line (may contain markup; opaque to the core).
    pub message: Option<String>,

    /// Copyright line.
    pub copyright: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_overrides_all_fields_optional() {
        let theme: ThemeOverrides = toml::from_str("").unwrap();
        assert_eq!(theme, ThemeOverrides::default());
    }

    #[test]
    fn test_theme_overrides_deserialize_toml() {
        let theme: ThemeOverrides = toml::from_str(
            r#"
logo = "/logo.svg"
social_links = [{ icon = "github", link = "https://github.com/acme/docs" }]

[search]
provider = "algolia"
options = { appId = "ACME", indexName = "docs" }

[footer]
message = "Released under the MIT License"

[[nav]]
text = "Guide"
link = "/guide/intro"
active_match = "/guide/"
"#,
        )
        .unwrap();

        assert_eq!(theme.logo.as_deref(), Some("/logo.svg"));
        assert_eq!(theme.social_links.as_ref().unwrap()[0].icon, "github");
        let search = theme.search.unwrap();
        assert_eq!(search.provider, "algolia");
        assert_eq!(search.options["appId"], serde_json::json!("ACME"));
        assert_eq!(
            theme.footer.unwrap().message.as_deref(),
            Some("Released under the MIT License")
        );
        assert_eq!(theme.nav.unwrap().len(), 1);
        assert!(theme.sidebar.is_none());
    }

    #[test]
    fn test_theme_overrides_camel_case_alias() {
        let theme: ThemeOverrides = serde_json::from_str(
            r#"{"socialLinks": [{"icon": "github", "link": "https://github.com/acme/docs"}]}"#,
        )
        .unwrap();
        assert_eq!(theme.social_links.unwrap().len(), 1);
    }
}
