//! Locale registry - resolves URL paths to their owning locale.
//!
//! Locales are declared in the `[locales.*]` sections of the site payload.
//! Each non-root locale claims a URL prefix (explicit, or `/<id>/` by
//! default); the `root` locale claims nothing and is the fallback for every
//! path no other locale owns.

use crate::config::{
    ConfigDiagnostics, ConfigError, FieldPath, LocaleSection, SiteConfig, ThemeOverrides,
};
use crate::core::UrlPath;
use rustc_hash::FxHashMap;
use std::path::PathBuf;

/// Identifier of the fallback locale.
pub const ROOT_LOCALE: &str = "root";

/// A configured locale, immutable after load.
#[derive(Debug, Clone, PartialEq)]
pub struct Locale {
    /// Locale identifier (`root`, `en`, ...).
    pub id: String,

    /// Human label shown in the language picker.
    pub label: String,

    /// Language tag (e.g. `en`, `zh-Hans`).
    pub lang: String,

    /// Content root directory (pass-through metadata).
    pub dir: PathBuf,

    /// URL prefix this locale claims (`/` for the root locale).
    pub prefix: UrlPath,

    /// Per-locale site title (pass-through).
    pub title: Option<String>,

    /// Per-locale site description (pass-through).
    pub description: Option<String>,

    /// Partial theme override, merged against the root theme on demand.
    pub overrides: ThemeOverrides,

    /// Custom fields the core passes through untouched.
    pub extra: FxHashMap<String, serde_json::Value>,
}

impl Locale {
    fn from_section(id: &str, section: &LocaleSection) -> Self {
        Self {
            id: id.to_string(),
            label: section.label.clone(),
            lang: section.lang.clone(),
            dir: section.dir.clone(),
            prefix: locale_prefix(id, section),
            title: section.title.clone(),
            description: section.description.clone(),
            overrides: section.theme.clone(),
            extra: section.extra.clone(),
        }
    }

    /// Whether this is the fallback locale.
    #[inline]
    pub fn is_root(&self) -> bool {
        self.id == ROOT_LOCALE
    }
}

/// The URL prefix a locale claims: explicit `prefix` if set, else `/<id>/`;
/// the root locale always sits at `/`.
pub(crate) fn locale_prefix(id: &str, section: &LocaleSection) -> UrlPath {
    if id == ROOT_LOCALE {
        return UrlPath::from_page("/");
    }
    match &section.prefix {
        Some(prefix) => UrlPath::from_page(prefix),
        None => UrlPath::from_page(&format!("/{id}/")),
    }
}

/// Structural validation of the `locales` table.
///
/// Collected here (next to the registry that relies on the invariants) and
/// invoked from [`SiteConfig::validate`] for batch reporting.
pub(crate) fn validate_locales(config: &SiteConfig, diag: &mut ConfigDiagnostics) {
    if !config.locales.contains_key(ROOT_LOCALE) {
        diag.error_with_hint(
            FieldPath::new("locales"),
            "no `root` locale defined",
            "add a [locales.root] section; it is the fallback for unmatched paths",
        );
    }

    let mut claimed: Vec<(&str, UrlPath)> = Vec::new();
    for (id, section) in &config.locales {
        if id == ROOT_LOCALE {
            if section.prefix.is_some() {
                diag.error_with_hint(
                    FieldPath::new("locales.root.prefix"),
                    "the root locale is the fallback and cannot claim a URL prefix",
                    "remove `prefix` or move this section to a named locale",
                );
            }
            continue;
        }

        let prefix = locale_prefix(id, section);
        let duplicate = claimed
            .iter()
            .find(|(_, p)| *p == prefix)
            .map(|(other, _)| *other);
        match duplicate {
            Some(other) => {
                diag.error_with_hint(
                    FieldPath::owned(format!("locales.{id}.prefix")),
                    format!("URL prefix `{prefix}` is already claimed by locale `{other}`"),
                    "prefixes must be unique so path resolution is unambiguous",
                );
            }
            None => claimed.push((id, prefix.clone())),
        }

        // Sidebar scopes must be reachable under this locale's prefix.
        if let Some(sidebar) = &section.theme.sidebar {
            for key in sidebar.keys() {
                if !UrlPath::from_page(key).starts_with(prefix.as_str()) {
                    diag.error_with_hint(
                        FieldPath::owned(format!("locales.{id}.theme.sidebar.{key}")),
                        format!(
                            "sidebar scope `{key}` is outside this locale's URL prefix `{prefix}`"
                        ),
                        "sidebar keys must start with the locale prefix so their pages are reachable",
                    );
                }
            }
        }
    }
}

// ============================================================================
// LocaleRegistry
// ============================================================================

/// Owns the configured locales and resolves paths to them.
///
/// Pure and immutable after construction; `resolve_locale` may be called
/// concurrently without synchronization.
#[derive(Debug)]
pub struct LocaleRegistry {
    locales: Vec<Locale>,
    root: usize,
}

impl LocaleRegistry {
    /// Build the registry from a site payload.
    ///
    /// Fails with [`ConfigError::Diagnostics`] if no `root` locale exists,
    /// two locales claim the same URL prefix, or a locale's sidebar scopes
    /// fall outside its prefix.
    pub fn new(config: &SiteConfig) -> Result<Self, ConfigError> {
        let mut diag = ConfigDiagnostics::new();
        validate_locales(config, &mut diag);
        diag.into_result().map_err(ConfigError::Diagnostics)?;

        let locales: Vec<Locale> = config
            .locales
            .iter()
            .map(|(id, section)| Locale::from_section(id, section))
            .collect();
        let root = locales
            .iter()
            .position(Locale::is_root)
            .ok_or_else(|| ConfigError::Validation("no `root` locale defined".into()))?;

        Ok(Self { locales, root })
    }

    /// Resolve a path to its owning locale.
    ///
    /// Picks the non-root locale with the longest prefix matching `path`
    /// (a path equal to a prefix matches it); falls back to the root
    /// locale. Equal-length prefixes cannot occur: duplicates are rejected
    /// at load time.
    pub fn resolve_locale(&self, path: &UrlPath) -> &Locale {
        self.locales
            .iter()
            .filter(|locale| !locale.is_root() && path.starts_with(locale.prefix.as_str()))
            .max_by_key(|locale| locale.prefix.as_str().len())
            .unwrap_or(&self.locales[self.root])
    }

    /// The fallback locale.
    #[inline]
    pub fn root(&self) -> &Locale {
        &self.locales[self.root]
    }

    /// Look up a locale by identifier.
    pub fn get(&self, id: &str) -> Option<&Locale> {
        self.locales.iter().find(|locale| locale.id == id)
    }

    /// Iterate all locales in identifier order.
    pub fn iter(&self) -> impl Iterator<Item = &Locale> {
        self.locales.iter()
    }

    pub fn len(&self) -> usize {
        self.locales.len()
    }

    pub fn is_empty(&self) -> bool {
        self.locales.is_empty()
    }
}

// ============================================================================
// tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;

    fn registry(extra: &str) -> LocaleRegistry {
        LocaleRegistry::new(&test_parse_config(extra)).unwrap()
    }

    #[test]
    fn test_paths_under_a_locale_resolve_to_it() {
        let registry = registry(
            r#"
[locales.en]
label = "English"
lang = "en"
dir = "src/en"
"#,
        );

        let locale = registry.resolve_locale(&UrlPath::from_page("/en/guide/intro"));
        assert_eq!(locale.id, "en");
    }

    #[test]
    fn test_unclaimed_paths_fall_back_to_root() {
        let registry = registry(
            r#"
[locales.en]
label = "English"
lang = "en"
dir = "src/en"
"#,
        );

        assert!(registry.resolve_locale(&UrlPath::from_page("/guide/intro")).is_root());
        assert!(registry.resolve_locale(&UrlPath::from_page("/")).is_root());
    }

    #[test]
    fn test_path_equal_to_prefix_is_inclusive() {
        let registry = registry(
            r#"
[locales.en]
label = "English"
lang = "en"
dir = "src/en"
"#,
        );

        // Both spellings of the locale landing page
        assert_eq!(registry.resolve_locale(&UrlPath::from_page("/en/")).id, "en");
        assert_eq!(registry.resolve_locale(&UrlPath::from_page("/en")).id, "en");
    }

    #[test]
    fn test_longest_prefix_wins() {
        let registry = registry(
            r#"
[locales.en]
label = "English"
lang = "en"
dir = "src/en"

[locales.en-dev]
label = "English (developers)"
lang = "en"
dir = "src/en-dev"
prefix = "/en/developers/"
"#,
        );

        let locale = registry.resolve_locale(&UrlPath::from_page("/en/developers/plan"));
        assert_eq!(locale.id, "en-dev");
        let locale = registry.resolve_locale(&UrlPath::from_page("/en/guide/intro"));
        assert_eq!(locale.id, "en");
    }

    #[test]
    fn test_default_prefix_is_derived_from_id() {
        let registry = registry(
            r#"
[locales.fr]
label = "Français"
lang = "fr"
dir = "src/fr"
"#,
        );

        assert_eq!(registry.get("fr").unwrap().prefix, "/fr/");
        assert_eq!(registry.root().prefix, "/");
    }

    #[test]
    fn test_missing_root_locale_is_rejected() {
        let config = crate::config::SiteConfig::from_toml_str(
            r#"
[locales.en]
label = "English"
lang = "en"
"#,
        )
        .unwrap();

        let err = LocaleRegistry::new(&config).unwrap_err();
        assert!(format!("{err}").contains("no `root` locale defined"));
    }

    #[test]
    fn test_duplicate_prefixes_are_rejected() {
        let config = test_parse_config(
            r#"
[locales.en]
label = "English"
lang = "en"

[locales.en-gb]
label = "English (UK)"
lang = "en-GB"
prefix = "/en/"
"#,
        );

        let err = LocaleRegistry::new(&config).unwrap_err();
        assert!(format!("{err}").contains("already claimed"));
    }

    #[test]
    fn test_root_prefix_is_rejected() {
        let mut config = test_parse_config("");
        config.locales.get_mut("root").unwrap().prefix = Some("/zh/".to_string());

        let err = LocaleRegistry::new(&config).unwrap_err();
        assert!(format!("{err}").contains("cannot claim a URL prefix"));
    }

    #[test]
    fn test_sidebar_scope_outside_prefix_is_rejected() {
        let config = test_parse_config(
            r#"
[locales.en]
label = "English"
lang = "en"

[[locales.en.theme.sidebar."/guide/"]]
text = "Getting Started"
"#,
        );

        let err = LocaleRegistry::new(&config).unwrap_err();
        assert!(format!("{err}").contains("outside this locale's URL prefix"));
    }

    #[test]
    fn test_sidebar_scope_under_prefix_is_accepted() {
        let registry = registry(
            r#"
[locales.en]
label = "English"
lang = "en"

[[locales.en.theme.sidebar."/en/guide/"]]
text = "Getting Started"
"#,
        );

        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn test_registry_lookup_and_iteration() {
        let registry = registry(
            r#"
[locales.en]
label = "English"
lang = "en"
"#,
        );

        assert!(!registry.is_empty());
        assert_eq!(registry.len(), 2);
        assert!(registry.get("en").is_some());
        assert!(registry.get("de").is_none());
        // BTreeMap-backed payload iterates in identifier order
        let ids: Vec<_> = registry.iter().map(|l| l.id.as_str()).collect();
        assert_eq!(ids, vec!["en", "root"]);
    }
}
