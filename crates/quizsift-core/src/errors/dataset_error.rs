//! Dataset I/O errors.

use std::path::PathBuf;

/// Errors that can occur while loading the dataset or writing subsets.
#[derive(Debug, thiserror::Error)]
pub enum DatasetError {
    #[error("IO error reading {path}: {source}")]
    ReadFailed {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("malformed JSON in {path}: {source}")]
    MalformedJson {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("IO error writing {path}: {source}")]
    WriteFailed {
        path: PathBuf,
        source: std::io::Error,
    },
}
