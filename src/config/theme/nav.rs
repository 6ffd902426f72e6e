//! Navigation bar entry.

use serde::{Deserialize, Serialize};

/// A single entry in the top navigation bar.
///
/// Both fields are required: an entry without a label or without a target
/// is rejected at parse time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavItem {
    /// Visible label.
    pub text: String,

    /// Target of the entry, either a site-internal route like `/guide/`
    /// or a full external URL.
    pub link: String,
}

impl NavItem {
    /// Whether the entry points outside the site.
    ///
    /// Internal routes are rooted paths and fail absolute-URL parsing, so
    /// anything that parses as a URL leaves the site.
    pub fn is_external(&self) -> bool {
        url::Url::parse(&self.link).is_ok()
    }
}

#[cfg(test)]
mod tests {
    use crate::config::{SiteConfig, test_parse_config};

    #[test]
    fn test_internal_route_is_not_external() {
        let config = test_parse_config(
            r#"
[[themeConfig.nav]]
text = "Guide"
link = "/guide/a/"
"#,
        );
        assert!(!config.theme.nav[0].is_external());
    }

    #[test]
    fn test_full_url_is_external() {
        let config = test_parse_config(
            r#"
[[themeConfig.nav]]
text = "配置"
link = "https://www.vuepress.cn/config/"
"#,
        );
        assert!(config.theme.nav[0].is_external());
    }

    #[test]
    fn test_missing_link_rejected() {
        let result = SiteConfig::from_str(
            r#"
title = "Test"
description = "Test"

[[themeConfig.nav]]
text = "Guide"
"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_missing_text_rejected() {
        let result = SiteConfig::from_str(
            r#"
title = "Test"
description = "Test"

[[themeConfig.nav]]
link = "/guide/"
"#,
        );
        assert!(result.is_err());
    }
}
