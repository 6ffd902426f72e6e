//! Sidebar group definitions.

use serde::{Deserialize, Serialize};

/// A titled group of pages inside a sidebar.
///
/// Children are page identifiers relative to the group's route prefix,
/// rendered in sequence order. A group with no children is still a real
/// group: it renders as a bare heading and survives serialization with an
/// empty `children` array.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SidebarGroup {
    /// Group heading shown in the sidebar.
    pub title: String,

    /// Whether the group can be collapsed. Defaults to true, matching
    /// upstream theme behavior when the key is omitted.
    #[serde(default = "collapsable_default")]
    pub collapsable: bool,

    /// Page identifiers under the group, relative to the route prefix.
    #[serde(default)]
    pub children: Vec<String>,
}

fn collapsable_default() -> bool {
    true
}

impl Default for SidebarGroup {
    fn default() -> Self {
        Self {
            title: String::new(),
            collapsable: true,
            children: Vec::new(),
        }
    }
}

impl SidebarGroup {
    /// Full routes of the group's pages under a route prefix.
    pub fn routes_under(&self, route_prefix: &str) -> Vec<String> {
        self.children
            .iter()
            .map(|child| join_route(route_prefix, child))
            .collect()
    }
}

/// Join a route prefix and a page identifier into a full route.
fn join_route(route_prefix: &str, child: &str) -> String {
    if route_prefix.ends_with('/') {
        format!("{route_prefix}{child}")
    } else {
        format!("{route_prefix}/{child}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;

    #[test]
    fn test_collapsable_defaults_true() {
        let config = test_parse_config(
            r#"
[[themeConfig.sidebar."/guide/"]]
title = "Basics"
"#,
        );

        let groups = config.theme.sidebar_for("/guide/").unwrap();
        assert!(groups[0].collapsable);
        assert!(groups[0].children.is_empty());
    }

    #[test]
    fn test_collapsable_explicit_false() {
        let config = test_parse_config(
            r#"
[[themeConfig.sidebar."/guide/"]]
title = "Basics"
collapsable = false
"#,
        );

        let groups = config.theme.sidebar_for("/guide/").unwrap();
        assert!(!groups[0].collapsable);
    }

    #[test]
    fn test_group_default() {
        let group = SidebarGroup::default();
        assert_eq!(group.title, "");
        assert!(group.collapsable);
        assert!(group.children.is_empty());
    }

    #[test]
    fn test_empty_children_serialized() {
        let group = SidebarGroup {
            title: "Reserved".to_string(),
            collapsable: false,
            children: Vec::new(),
        };

        let json = serde_json::to_string(&group).unwrap();
        assert!(json.contains("\"children\":[]"));
    }

    #[test]
    fn test_routes_under_trailing_slash() {
        let group = SidebarGroup {
            title: "Basics".to_string(),
            collapsable: false,
            children: vec!["a".to_string(), "b".to_string()],
        };

        assert_eq!(group.routes_under("/guide/"), ["/guide/a", "/guide/b"]);
    }

    #[test]
    fn test_routes_under_bare_prefix() {
        let group = SidebarGroup {
            title: "Basics".to_string(),
            collapsable: false,
            children: vec!["a".to_string()],
        };

        assert_eq!(group.routes_under("/guide"), ["/guide/a"]);
    }

    #[test]
    fn test_group_order_preserved() {
        let config = test_parse_config(
            r#"
[[themeConfig.sidebar."/guide/"]]
title = "One"

[[themeConfig.sidebar."/guide/"]]
title = "Two"

[[themeConfig.sidebar."/guide/"]]
title = "Three"
"#,
        );

        let groups = config.theme.sidebar_for("/guide/").unwrap();
        let titles: Vec<&str> = groups.iter().map(|g| g.title.as_str()).collect();
        assert_eq!(titles, ["One", "Two", "Three"]);
    }
}
