//! `[locales.*]` section configuration.
//!
//! One section per locale, keyed by identifier. The `root` locale is the
//! fallback for paths no other locale claims.
//!
//! # Example
//!
//! ```toml
//! [locales.root]
//! label = "简体中文"
//! lang = "zh"
//! dir = "src/zh"
//!
//! [locales.en]
//! label = "English"
//! lang = "en"
//! dir = "src/en"
//!
//! [[locales.en.theme.nav]]
//! text = "Guide"
//! link = "/en/guide/intro"
//! active_match = "/en/guide/"
//! ```

use super::theme::ThemeOverrides;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Raw per-locale payload.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LocaleSection {
    /// Human label shown in the language picker.
    pub label: String,

    /// Language tag (e.g. `en`, `zh-Hans`).
    pub lang: String,

    /// Content root directory for this locale (pass-through metadata).
    pub dir: PathBuf,

    /// URL prefix the locale claims. Defaults to `/<id>/` for non-root
    /// locales; the root locale is the fallback and may not declare one.
    pub prefix: Option<String>,

    /// Per-locale site title (pass-through).
    pub title: Option<String>,

    /// Per-locale site description (pass-through).
    pub description: Option<String>,

    /// Partial theme override for this locale.
    #[serde(alias = "themeConfig")]
    pub theme: ThemeOverrides,

    /// Custom fields the core passes through untouched.
    pub extra: FxHashMap<String, serde_json::Value>,
}
