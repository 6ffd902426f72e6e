//! Bundled starter site record.
//!
//! A small but complete record for a fresh documentation site: a guide
//! section with ten pages and two groups reserved for content to come.
//! It doubles as the fallback record when nothing was installed.

use crate::config::{NavItem, SidebarGroup, SiteConfig, ThemeConfig};
use std::collections::BTreeMap;
use std::sync::LazyLock;

/// Route prefix of the starter guide section.
pub const GUIDE_PREFIX: &str = "/guide/";

static STARTER: LazyLock<SiteConfig> = LazyLock::new(build);

/// The bundled starter record.
pub fn starter() -> &'static SiteConfig {
    &STARTER
}

fn build() -> SiteConfig {
    let nav = vec![
        NavItem {
            text: "Typescript".to_string(),
            link: "/guide/a/".to_string(),
        },
        NavItem {
            text: "Node".to_string(),
            link: "/guide/a/".to_string(),
        },
        NavItem {
            text: "配置".to_string(),
            link: "https://www.vuepress.cn/config/".to_string(),
        },
    ];

    let guide = vec![
        SidebarGroup {
            title: "基础".to_string(),
            collapsable: false,
            children: pages(&["a", "b", "c", "d", "e", "f", "g", "h", "i", "j"]),
        },
        // Reserved groups: defined but empty until their pages land.
        SidebarGroup {
            title: "进阶".to_string(),
            collapsable: false,
            children: Vec::new(),
        },
        SidebarGroup {
            title: "工程".to_string(),
            collapsable: false,
            children: Vec::new(),
        },
    ];

    let mut sidebar = BTreeMap::new();
    sidebar.insert(GUIDE_PREFIX.to_string(), guide);

    SiteConfig {
        title: "Hello VuePress".to_string(),
        description: "Just playing around".to_string(),
        theme: ThemeConfig { nav, sidebar },
    }
}

fn pages(ids: &[&str]) -> Vec<String> {
    ids.iter().map(|id| id.to_string()).collect()
}
