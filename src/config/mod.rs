//! Site configuration record for VuePress-style documentation sites.
//!
//! # Module Structure
//!
//! ```text
//! config/
//! ├── theme/         # themeConfig section definitions
//! │   ├── nav        # Top navigation bar entries
//! │   └── sidebar    # Per-route sidebar groups
//! ├── types/         # Utility types
//! │   ├── error      # ConfigError
//! │   └── handle     # Global site record handle
//! └── mod.rs         # SiteConfig (this file)
//! ```
//!
//! The record is authored as a TOML document and handed to the generator as
//! a JSON document; both forms map onto the same [`SiteConfig`] and
//! round-trip without loss:
//!
//! ```toml
//! title = "My Docs"
//! description = "Project documentation"
//!
//! [[themeConfig.nav]]
//! text = "Guide"
//! link = "/guide/"
//!
//! [[themeConfig.sidebar."/guide/"]]
//! title = "Basics"
//! collapsable = false
//! children = ["setup", "usage"]
//! ```

pub mod theme;
pub mod types;

// Re-export from theme/
pub use theme::{NavItem, SidebarGroup, ThemeConfig};

// Re-export from types/
pub use types::{ConfigError, init_site, site};

use crate::log;
use serde::{Deserialize, Serialize};
use std::{fs, path::Path};

// ============================================================================
// root configuration
// ============================================================================

/// Root configuration record for a documentation site.
///
/// The record is plain data: constructing it performs no I/O and no
/// validation. Whether a sidebar child names an existing page or a nav
/// entry is duplicated is for the consuming generator to decide.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Site title, shown in the navbar and the browser tab.
    pub title: String,

    /// Site description, used as subtitle and meta description.
    pub description: String,

    /// Theme section: navigation bar and sidebar structure.
    #[serde(rename = "themeConfig")]
    pub theme: ThemeConfig,
}

impl SiteConfig {
    /// Parse a configuration record from a TOML string.
    pub fn from_str(content: &str) -> Result<Self, ConfigError> {
        let config = toml::from_str(content)?;
        Ok(config)
    }

    /// Parse TOML content, collecting any unknown fields.
    ///
    /// Unknown fields never fail the parse: the record tolerates keys it
    /// does not model so documents written for a newer schema keep loading.
    /// Callers decide what to do with the returned paths.
    pub fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>), ConfigError> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let config = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })?;
        Ok((config, ignored))
    }

    /// Load a configuration record from a TOML file.
    ///
    /// Unknown fields are reported with a warning and otherwise skipped.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;

        let (config, ignored) = Self::parse_with_ignored(&content)?;

        if !ignored.is_empty() {
            Self::print_unknown_fields_warning(&ignored, path);
        }

        Ok(config)
    }

    /// Print warning about unknown fields.
    fn print_unknown_fields_warning(fields: &[String], path: &Path) {
        // Show only the filename since the record sits at the docs root
        let display_path = path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_else(|| path.to_string_lossy());
        log!("warning"; "unknown fields in {}, ignoring:", display_path);
        for field in fields {
            eprintln!("- {field}");
        }
    }

    // ========================================================================
    // generator-facing document
    // ========================================================================

    /// Parse a configuration record from its JSON document form.
    pub fn from_json(content: &str) -> Result<Self, ConfigError> {
        let config = serde_json::from_str(content)?;
        Ok(config)
    }

    /// Serialize the record to the JSON document handed to the generator.
    ///
    /// Fields appear in declaration order and the sidebar map in key order,
    /// so the output is stable across runs and parses back into an
    /// identical record.
    pub fn to_json(&self) -> Result<String, ConfigError> {
        let json = serde_json::to_string_pretty(self)?;
        Ok(json)
    }

    /// Serialize the record back to its TOML authoring form.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        let toml = toml::to_string(self)?;
        Ok(toml)
    }

    /// Write the generator-facing JSON document to disk.
    pub fn write_json(&self, path: &Path) -> Result<(), ConfigError> {
        let json = self.to_json()?;
        fs::write(path, json).map_err(|err| ConfigError::Io(path.to_path_buf(), err))
    }
}

// ============================================================================
// Test Helpers (available to all modules via `use crate::config::test_*`)
// ============================================================================

/// Parse config with the minimal required top-level fields.
/// Panics if there are unknown fields (to catch config typos in tests).
#[cfg(test)]
pub fn test_parse_config(extra: &str) -> SiteConfig {
    let config = format!("title = \"Test\"\ndescription = \"Test\"\n{extra}");
    let (parsed, ignored) = SiteConfig::parse_with_ignored(&config).unwrap();
    assert!(
        ignored.is_empty(),
        "test config has unknown fields: {:?}",
        ignored
    );
    parsed
}

// ============================================================================
// tests
// ============================================================================
