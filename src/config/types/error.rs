//! Configuration error type.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur when loading or serializing the site record.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error when reading or writing `{0}`")]
    Io(PathBuf, #[source] std::io::Error),

    #[error("config file parsing error")]
    Toml(#[from] toml::de::Error),

    #[error("config serialization error")]
    TomlSer(#[from] toml::ser::Error),

    #[error("JSON document error")]
    Json(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::Io(
            PathBuf::from("site.toml"),
            io::Error::new(io::ErrorKind::NotFound, "missing"),
        );
        assert_eq!(err.to_string(), "IO error when reading or writing `site.toml`");

        let toml_err = toml::from_str::<crate::config::SiteConfig>("title = 3").unwrap_err();
        let err = ConfigError::from(toml_err);
        assert_eq!(err.to_string(), "config file parsing error");
    }
}
