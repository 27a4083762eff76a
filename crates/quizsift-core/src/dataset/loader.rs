//! Dataset loading.

use std::fs;
use std::path::Path;

use tracing::info;

use super::record::Record;
use crate::errors::DatasetError;

/// Load the full dataset from a JSON array file.
///
/// The whole file is read into memory; a missing file or malformed JSON is
/// fatal before any processing starts.
pub fn load_records(path: &Path) -> Result<Vec<Record>, DatasetError> {
    let raw = fs::read_to_string(path).map_err(|source| DatasetError::ReadFailed {
        path: path.to_path_buf(),
        source,
    })?;

    let records: Vec<Record> =
        serde_json::from_str(&raw).map_err(|source| DatasetError::MalformedJson {
            path: path.to_path_buf(),
            source,
        })?;

    info!(records = records.len(), path = %path.display(), "dataset loaded");
    Ok(records)
}
