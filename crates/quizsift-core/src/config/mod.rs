//! Configuration loaded from an optional `quizsift.toml`.
//!
//! Every field has a default, so an empty (or absent) file yields a fully
//! working configuration. CLI flags override file values at the surface.

pub mod defaults;

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::errors::ConfigError;

/// Dataset location configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DatasetConfig {
    /// Path to the source JSON array of records.
    pub data_path: PathBuf,
    /// Directory that subset files are written into.
    pub output_dir: PathBuf,
}

impl Default for DatasetConfig {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from(defaults::DEFAULT_DATA_PATH),
            output_dir: PathBuf::from(defaults::DEFAULT_OUTPUT_DIR),
        }
    }
}

/// Filtering configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterConfig {
    /// Maximum records collected into one subset file.
    pub subset_cap: usize,
    /// Entities occurring at most this many times are rare.
    pub rare_threshold: u32,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            subset_cap: defaults::DEFAULT_SUBSET_CAP,
            rare_threshold: defaults::DEFAULT_RARE_THRESHOLD,
        }
    }
}

/// Root configuration for all quizsift operations.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SiftConfig {
    pub dataset: DatasetConfig,
    pub filter: FilterConfig,
}

impl SiftConfig {
    /// Parse configuration from a TOML string. Missing sections and fields
    /// fall back to defaults.
    pub fn from_toml(input: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(input)?)
    }

    /// Load configuration from a file on disk.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let raw = fs::read_to_string(path).map_err(|source| ConfigError::ReadFailed {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&raw)
    }
}
