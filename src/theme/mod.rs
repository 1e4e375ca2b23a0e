//! Resolved theme configuration and merging.
//!
//! A [`ThemeConfig`] is the fully-resolved view one locale sees after its
//! partial overrides are overlaid on the root defaults. Resolution happens
//! at most once per locale (see [`ConfigMerger`]); the result is shared
//! immutably for the process lifetime.

mod merge;

pub use merge::ConfigMerger;

use crate::config::{
    ConfigDiagnostics, FieldPath, FooterConfig, NavItem, SearchConfig, SidebarMap, SiteConfig,
    SocialLink,
};
use serde::Serialize;

/// Fully-resolved theme configuration for one locale.
///
/// Mandatory fields (`footer`, `nav`, `sidebar`) are guaranteed populated:
/// their absence from both the root theme and the locale is rejected at
/// load time. Optional fields are populated whenever either side defines
/// them.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ThemeConfig {
    /// Site logo path.
    pub logo: Option<String>,

    /// Social links, in display order.
    pub social_links: Vec<SocialLink>,

    /// Search provider descriptor.
    pub search: Option<SearchConfig>,

    /// Footer lines.
    pub footer: FooterConfig,

    /// Top-level navigation, in declaration order.
    pub nav: Vec<NavItem>,

    /// Sidebar trees keyed by path scope.
    pub sidebar: SidebarMap,
}

/// Check that every locale ends up with the mandatory theme fields after
/// merging with the root theme.
///
/// Runs at load time so [`ConfigMerger::resolve`] never fails. Invoked from
/// [`SiteConfig::validate`] for batch reporting.
pub(crate) fn validate_mandatory(config: &SiteConfig, diag: &mut ConfigDiagnostics) {
    for (id, section) in &config.locales {
        let missing = [
            ("footer", section.theme.footer.is_none() && config.theme.footer.is_none()),
            ("nav", section.theme.nav.is_none() && config.theme.nav.is_none()),
            ("sidebar", section.theme.sidebar.is_none() && config.theme.sidebar.is_none()),
        ];

        for (field, absent) in missing {
            if absent {
                diag.error_with_hint(
                    FieldPath::owned(format!("locales.{id}.theme.{field}")),
                    format!("locale `{id}` has no `{field}` after merging with the root theme"),
                    format!("define `theme.{field}` at the top level or for this locale"),
                );
            }
        }
    }
}
