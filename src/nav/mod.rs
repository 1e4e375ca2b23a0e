//! Active nav/sidebar resolution for a path.
//!
//! Two distinct algorithms, kept separate on purpose:
//!
//! - [`active_nav`] walks nav items in declaration order and returns the
//!   first match. Nav items are user-ordered priorities; overlapping
//!   patterns (`/guide/` vs `/guide/developers/`) are tie-broken by
//!   position, not specificity.
//! - [`active_sidebar`] picks the longest sidebar scope matching the path.
//!   Scopes are structural, so longest-prefix is the order-independent
//!   choice.
//!
//! Both are pure queries over an immutable [`ThemeConfig`]; an unmatched
//! path is a valid state (a landing page has neither), never an error.

use crate::config::{NavItem, SidebarGroup};
use crate::core::UrlPath;
use crate::theme::ThemeConfig;

/// The nav item active for `path`, if any.
///
/// An item matches if its `active_match` pattern matches the path, or,
/// absent a pattern, if the path starts with the item's `link`. First match
/// in declaration order wins.
pub fn active_nav<'a>(config: &'a ThemeConfig, path: &UrlPath) -> Option<&'a NavItem> {
    config.nav.iter().find(|item| nav_item_matches(item, path))
}

fn nav_item_matches(item: &NavItem, path: &UrlPath) -> bool {
    match &item.active_match {
        Some(pattern) => pattern.is_match(path.as_str()),
        None => path.starts_with(&item.link),
    }
}

/// The sidebar groups active for `path`: the value under the longest
/// sidebar scope the path falls under, or an empty slice (no sidebar
/// rendered) when no scope matches.
pub fn active_sidebar<'a>(config: &'a ThemeConfig, path: &UrlPath) -> &'a [SidebarGroup] {
    config
        .sidebar
        .iter()
        .filter(|(scope, _)| path.starts_with(scope))
        .max_by_key(|(scope, _)| scope.len())
        .map(|(_, groups)| groups.as_slice())
        .unwrap_or(&[])
}

// ============================================================================
// tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{FooterConfig, SidebarGroup, SidebarMap};

    fn theme(nav: Vec<NavItem>, sidebar: SidebarMap) -> ThemeConfig {
        ThemeConfig {
            logo: None,
            social_links: Vec::new(),
            search: None,
            footer: FooterConfig::default(),
            nav,
            sidebar,
        }
    }

    #[test]
    fn test_declaration_order_beats_specificity() {
        let config = theme(
            vec![
                NavItem::new("Guide", "/guide/intro")
                    .with_active_match("/guide/")
                    .unwrap(),
                NavItem::new("Developers", "/guide/developers/plan")
                    .with_active_match("/guide/developers/")
                    .unwrap(),
            ],
            SidebarMap::new(),
        );

        // Both patterns match; the first declared item wins even though the
        // second is more specific.
        let active = active_nav(&config, &UrlPath::from_page("/guide/developers/plan")).unwrap();
        assert_eq!(active.link, "/guide/intro");
    }

    #[test]
    fn test_nav_without_pattern_uses_link_prefix() {
        let config = theme(
            vec![NavItem::new("Donate", "/other/donate")],
            SidebarMap::new(),
        );

        assert!(active_nav(&config, &UrlPath::from_page("/other/donate")).is_some());
        assert!(active_nav(&config, &UrlPath::from_page("/other/donate/history")).is_some());
        assert!(active_nav(&config, &UrlPath::from_page("/other/")).is_none());
    }

    #[test]
    fn test_nav_pattern_overrides_link_prefix() {
        let config = theme(
            vec![
                NavItem::new("FAQ", "/faq/")
                    .with_active_match("/zh/faq/")
                    .unwrap(),
            ],
            SidebarMap::new(),
        );

        // The pattern decides, not the link
        assert!(active_nav(&config, &UrlPath::from_page("/zh/faq/")).is_some());
        assert!(active_nav(&config, &UrlPath::from_page("/faq/")).is_none());
    }

    #[test]
    fn test_unmatched_path_yields_none() {
        let config = theme(
            vec![NavItem::new("Guide", "/guide/intro")],
            SidebarMap::new(),
        );

        assert!(active_nav(&config, &UrlPath::from_page("/")).is_none());
        assert!(active_nav(&config, &UrlPath::from_page("/blog/")).is_none());
    }

    #[test]
    fn test_sidebar_longest_prefix_wins() {
        let config = theme(
            Vec::new(),
            SidebarMap::from([
                ("/guide/".to_string(), vec![SidebarGroup::new("G1")]),
                (
                    "/guide/developers/".to_string(),
                    vec![SidebarGroup::new("G2")],
                ),
            ]),
        );

        // Unlike nav, sidebar scopes select by specificity
        let groups = active_sidebar(&config, &UrlPath::from_page("/guide/developers/plan"));
        assert_eq!(groups[0].text, "G2");

        let groups = active_sidebar(&config, &UrlPath::from_page("/guide/intro"));
        assert_eq!(groups[0].text, "G1");
    }

    #[test]
    fn test_sidebar_unmatched_path_yields_empty() {
        let config = theme(
            Vec::new(),
            SidebarMap::from([("/guide/".to_string(), vec![SidebarGroup::new("G1")])]),
        );

        assert!(active_sidebar(&config, &UrlPath::from_page("/")).is_empty());
        assert!(active_sidebar(&config, &UrlPath::from_page("/faq/")).is_empty());
    }

    #[test]
    fn test_merged_locale_sidebar_falls_through_to_root_scope() {
        // Merged `en` config retains root's scope alongside its own
        let config = theme(
            Vec::new(),
            SidebarMap::from([
                ("/guide/".to_string(), vec![SidebarGroup::new("G1")]),
                ("/en/guide/".to_string(), vec![SidebarGroup::new("G2")]),
            ]),
        );

        let groups = active_sidebar(&config, &UrlPath::from_page("/en/guide/intro"));
        assert_eq!(groups[0].text, "G2");
        let groups = active_sidebar(&config, &UrlPath::from_page("/guide/intro"));
        assert_eq!(groups[0].text, "G1");
    }
}
