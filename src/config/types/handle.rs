//! Process-wide handle to the installed site record.
//!
//! The record is installed once at startup and read-only afterwards.
//! There is no reload path: a documentation build reads one record for
//! its whole lifetime, so the handle is a plain [`OnceLock`].

use crate::config::SiteConfig;
use crate::starter::starter;
use std::sync::OnceLock;

static SITE: OnceLock<SiteConfig> = OnceLock::new();

/// Install the site record for the rest of the process.
///
/// The first call wins; later calls leave the installed record untouched
/// and return it.
pub fn init_site(config: SiteConfig) -> &'static SiteConfig {
    SITE.get_or_init(|| config)
}

/// The installed site record, or the bundled starter when none was
/// installed. Reading does not install anything.
#[inline]
pub fn site() -> &'static SiteConfig {
    SITE.get().unwrap_or_else(|| starter())
}
