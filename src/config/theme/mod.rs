//! Theme section of the site record: navigation bar and sidebar.
//!
//! # Example
//!
//! ```toml
//! [[themeConfig.nav]]
//! text = "Guide"
//! link = "/guide/"
//!
//! [[themeConfig.sidebar."/guide/"]]
//! title = "Basics"
//! collapsable = false
//! children = ["setup", "usage"]
//! ```

mod nav;
mod sidebar;

pub use nav::NavItem;
pub use sidebar::SidebarGroup;

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Theme configuration: everything the theme renders around page content.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    /// Navigation bar entries, rendered left to right in sequence order.
    pub nav: Vec<NavItem>,

    /// Sidebar groups keyed by route prefix.
    ///
    /// A page whose route starts with a key gets that key's groups as its
    /// sidebar. Keys stay sorted so serialized output is deterministic.
    pub sidebar: BTreeMap<String, Vec<SidebarGroup>>,
}

impl ThemeConfig {
    /// Sidebar groups registered for a route prefix, in authored order.
    pub fn sidebar_for(&self, route_prefix: &str) -> Option<&[SidebarGroup]> {
        self.sidebar.get(route_prefix).map(Vec::as_slice)
    }
}
