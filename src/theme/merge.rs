//! Root-as-base theme merging, memoized per locale.

use super::ThemeConfig;
use crate::config::{FooterConfig, ThemeOverrides};
use crate::locale::Locale;
use dashmap::DashMap;
use std::sync::Arc;

/// Overlays a locale's partial theme on the root defaults.
///
/// Merging is non-destructive (sources are never mutated) and deterministic;
/// each locale's resolved theme is computed at most once and cached for the
/// merger's lifetime. Safe for concurrent callers: the cache is a
/// [`DashMap`], read-mostly, written only on first resolution of a locale.
#[derive(Debug)]
pub struct ConfigMerger {
    defaults: ThemeOverrides,
    cache: DashMap<String, Arc<ThemeConfig>>,
}

impl ConfigMerger {
    /// Create a merger over the root theme defaults.
    pub fn new(defaults: ThemeOverrides) -> Self {
        Self {
            defaults,
            cache: DashMap::new(),
        }
    }

    /// The fully-resolved theme for `locale`.
    ///
    /// Infallible: mandatory-field presence is validated at load time,
    /// before any resolution call executes.
    pub fn resolve(&self, locale: &Locale) -> Arc<ThemeConfig> {
        if let Some(resolved) = self.cache.get(&locale.id) {
            return Arc::clone(resolved.value());
        }

        let resolved = Arc::new(merge_theme(&self.defaults, &locale.overrides));
        // First writer wins if two callers race the same locale; the merge
        // is deterministic, so the discarded value is identical.
        Arc::clone(
            self.cache
                .entry(locale.id.clone())
                .or_insert(resolved)
                .value(),
        )
    }
}

/// Field-by-field overlay of `overlay` on `base`.
///
/// - Scalars (logo, search, footer lines): overlay wins if present.
/// - Lists (social links, nav): full replacement, never item-wise merging.
/// - Sidebar map: merged by key; overlay keys win, base-only keys are
///   retained, group contents under a shared key are not deep-merged.
pub(crate) fn merge_theme(base: &ThemeOverrides, overlay: &ThemeOverrides) -> ThemeConfig {
    let mut sidebar = base.sidebar.clone().unwrap_or_default();
    if let Some(scopes) = &overlay.sidebar {
        for (scope, groups) in scopes {
            sidebar.insert(scope.clone(), groups.clone());
        }
    }

    ThemeConfig {
        logo: overlay.logo.clone().or_else(|| base.logo.clone()),
        social_links: overlay
            .social_links
            .clone()
            .or_else(|| base.social_links.clone())
            .unwrap_or_default(),
        search: overlay.search.clone().or_else(|| base.search.clone()),
        footer: merge_footer(base.footer.as_ref(), overlay.footer.as_ref()),
        nav: overlay
            .nav
            .clone()
            .or_else(|| base.nav.clone())
            .unwrap_or_default(),
        sidebar,
    }
}

/// Footer lines fall back field-by-field, not as a block.
fn merge_footer(base: Option<&FooterConfig>, overlay: Option<&FooterConfig>) -> FooterConfig {
    match (base, overlay) {
        (Some(base), Some(overlay)) => FooterConfig {
            message: overlay.message.clone().or_else(|| base.message.clone()),
            copyright: overlay
                .copyright
                .clone()
                .or_else(|| base.copyright.clone()),
        },
        (None, Some(footer)) | (Some(footer), None) => footer.clone(),
        (None, None) => FooterConfig::default(),
    }
}

// ============================================================================
// tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{NavItem, SidebarGroup, SidebarMap};

    fn locale(id: &str, overrides: ThemeOverrides) -> Locale {
        Locale {
            id: id.to_string(),
            label: id.to_string(),
            lang: id.to_string(),
            dir: std::path::PathBuf::new(),
            prefix: crate::core::UrlPath::from_page(&format!("/{id}/")),
            title: None,
            description: None,
            overrides,
            extra: rustc_hash::FxHashMap::default(),
        }
    }

    fn root_theme() -> ThemeOverrides {
        ThemeOverrides {
            logo: Some("/logo.svg".to_string()),
            social_links: Some(vec![crate::config::SocialLink {
                icon: "github".to_string(),
                link: "https://github.com/acme/docs".to_string(),
            }]),
            search: None,
            footer: Some(FooterConfig {
                message: Some("MIT".to_string()),
                copyright: Some("© 2026 Acme".to_string()),
            }),
            nav: Some(vec![NavItem::new("Guide", "/guide/intro")]),
            sidebar: Some(SidebarMap::from([(
                "/guide/".to_string(),
                vec![SidebarGroup::new("G1")],
            )])),
        }
    }

    #[test]
    fn test_empty_overlay_yields_root_values() {
        let theme = merge_theme(&root_theme(), &ThemeOverrides::default());

        assert_eq!(theme.logo.as_deref(), Some("/logo.svg"));
        assert_eq!(theme.social_links.len(), 1);
        assert_eq!(theme.footer.message.as_deref(), Some("MIT"));
        assert_eq!(theme.nav.len(), 1);
        assert_eq!(theme.sidebar.len(), 1);
    }

    #[test]
    fn test_nav_is_replaced_wholesale_not_concatenated() {
        let overlay = ThemeOverrides {
            nav: Some(vec![
                NavItem::new("Guide", "/en/guide/intro"),
                NavItem::new("FAQ", "/en/faq/"),
            ]),
            ..Default::default()
        };

        let theme = merge_theme(&root_theme(), &overlay);
        assert_eq!(theme.nav, overlay.nav.unwrap());
    }

    #[test]
    fn test_social_links_are_replaced_wholesale() {
        let overlay = ThemeOverrides {
            social_links: Some(vec![]),
            ..Default::default()
        };

        // An explicitly empty list still replaces the root list
        let theme = merge_theme(&root_theme(), &overlay);
        assert!(theme.social_links.is_empty());
    }

    #[test]
    fn test_sidebar_merged_by_key_root_keys_retained() {
        let overlay = ThemeOverrides {
            sidebar: Some(SidebarMap::from([(
                "/en/guide/".to_string(),
                vec![SidebarGroup::new("G2")],
            )])),
            ..Default::default()
        };

        let theme = merge_theme(&root_theme(), &overlay);
        assert_eq!(theme.sidebar.len(), 2);
        assert_eq!(theme.sidebar["/guide/"][0].text, "G1");
        assert_eq!(theme.sidebar["/en/guide/"][0].text, "G2");
    }

    #[test]
    fn test_sidebar_shared_key_is_last_writer_wins() {
        let overlay = ThemeOverrides {
            sidebar: Some(SidebarMap::from([(
                "/guide/".to_string(),
                vec![SidebarGroup::new("Replacement")],
            )])),
            ..Default::default()
        };

        let theme = merge_theme(&root_theme(), &overlay);
        // No blending of the group list under the shared key
        assert_eq!(theme.sidebar["/guide/"].len(), 1);
        assert_eq!(theme.sidebar["/guide/"][0].text, "Replacement");
    }

    #[test]
    fn test_footer_falls_back_field_by_field() {
        let overlay = ThemeOverrides {
            footer: Some(FooterConfig {
                message: Some("Apache-2.0".to_string()),
                copyright: None,
            }),
            ..Default::default()
        };

        let theme = merge_theme(&root_theme(), &overlay);
        assert_eq!(theme.footer.message.as_deref(), Some("Apache-2.0"));
        assert_eq!(theme.footer.copyright.as_deref(), Some("© 2026 Acme"));
    }

    #[test]
    fn test_merge_is_non_destructive() {
        let base = root_theme();
        let overlay = ThemeOverrides {
            nav: Some(vec![NavItem::new("FAQ", "/en/faq/")]),
            ..Default::default()
        };
        let base_before = base.clone();
        let overlay_before = overlay.clone();

        let _ = merge_theme(&base, &overlay);

        assert_eq!(base, base_before);
        assert_eq!(overlay, overlay_before);
    }

    #[test]
    fn test_resolve_is_memoized_per_locale() {
        let merger = ConfigMerger::new(root_theme());
        let en = locale("en", ThemeOverrides::default());

        let first = merger.resolve(&en);
        let second = merger.resolve(&en);

        // Value-equal and the same shared allocation
        assert_eq!(*first, *second);
        assert!(Arc::ptr_eq(&first, &second));
    }

    #[test]
    fn test_resolve_distinguishes_locales() {
        let merger = ConfigMerger::new(root_theme());
        let en = locale(
            "en",
            ThemeOverrides {
                logo: Some("/en-logo.svg".to_string()),
                ..Default::default()
            },
        );
        let fr = locale("fr", ThemeOverrides::default());

        assert_eq!(merger.resolve(&en).logo.as_deref(), Some("/en-logo.svg"));
        assert_eq!(merger.resolve(&fr).logo.as_deref(), Some("/logo.svg"));
    }
}
