//! Configuration errors.

use std::path::PathBuf;

/// Errors that can occur while loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error reading config {path}: {source}")]
    ReadFailed {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid TOML: {source}")]
    InvalidToml {
        #[from]
        source: toml::de::Error,
    },
}
