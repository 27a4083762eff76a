//! Error types for every quizsift subsystem.

mod config_error;
mod dataset_error;

pub use config_error::ConfigError;
pub use dataset_error::DatasetError;

/// Top-level error wrapping all subsystem errors.
#[derive(Debug, thiserror::Error)]
pub enum SiftError {
    #[error(transparent)]
    Dataset(#[from] DatasetError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Convenience alias used throughout the workspace.
pub type SiftResult<T> = Result<T, SiftError>;
