//! Presskit - typed site configuration for VuePress-style documentation sites.
//!
//! A documentation site is described by one [`SiteConfig`] record: the site
//! title and description plus a `themeConfig` section holding the top
//! navigation bar and the per-route sidebar groups. The record is plain
//! data - rendering, routing and content resolution belong to the generator
//! consuming it.
//!
//! Authoring happens in TOML, the generator consumes JSON, and both forms
//! round-trip losslessly through the same record.
//!
//! # Example
//!
//! ```
//! use presskit::SiteConfig;
//!
//! let config = SiteConfig::from_str(r#"
//! title = "Hello VuePress"
//! description = "Just playing around"
//!
//! [[themeConfig.nav]]
//! text = "Typescript"
//! link = "/guide/a/"
//! "#)
//! .unwrap();
//!
//! assert_eq!(config.theme.nav[0].text, "Typescript");
//! assert!(!config.theme.nav[0].is_external());
//! ```

pub mod config;
pub mod starter;

#[doc(hidden)]
pub mod logger;

pub use config::{ConfigError, NavItem, SidebarGroup, SiteConfig, ThemeConfig, init_site, site};
pub use starter::starter;
