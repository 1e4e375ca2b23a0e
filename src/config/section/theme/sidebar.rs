//! Sidebar trees, keyed by path scope.
//!
//! # Example
//!
//! ```toml
//! [[theme.sidebar."/guide/"]]
//! text = "Getting Started"
//! items = [
//!     { text = "Introduction", link = "/guide/intro" },
//!     { text = "Quick Start", link = "/guide/quick-start" },
//! ]
//! ```

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Sidebar mapping: path-prefix scope -> groups shown under that scope.
///
/// Keys are structural path scopes, not priorities; a path selects its
/// groups by longest matching prefix. `BTreeMap` keeps merged output and
/// prefix scans deterministic regardless of declaration order.
pub type SidebarMap = BTreeMap<String, Vec<SidebarGroup>>;

/// A labeled, ordered list of links shown for a given path scope.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SidebarGroup {
    /// Group heading.
    pub text: String,

    /// Links in display order.
    #[serde(default)]
    pub items: Vec<SidebarItem>,
}

/// A single sidebar link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SidebarItem {
    /// Display label.
    pub text: String,

    /// Target link (site-root-relative).
    pub link: String,
}

impl SidebarGroup {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            items: Vec::new(),
        }
    }

    pub fn with_item(mut self, text: impl Into<String>, link: impl Into<String>) -> Self {
        self.items.push(SidebarItem {
            text: text.into(),
            link: link.into(),
        });
        self
    }
}
