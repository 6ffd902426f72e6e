//! Utility types for the configuration record.
//!
//! | Module   | Purpose                                  |
//! |----------|------------------------------------------|
//! | `error`  | [`ConfigError`] for load and serialize   |
//! | `handle` | Process-wide handle to the installed record |

mod error;
pub mod handle;

pub use error::ConfigError;
pub use handle::{init_site, site};
