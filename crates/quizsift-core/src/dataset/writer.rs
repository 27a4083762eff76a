//! Subset output as newline-delimited JSON.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use tracing::info;

use super::record::Record;
use crate::errors::DatasetError;

/// Write records to `path` as JSONL, one compact object per line.
///
/// The parent directory is created if absent. Each line round-trips to the
/// corresponding input record, passthrough fields included. Returns the
/// number of records written.
pub fn write_subset(path: &Path, records: &[&Record]) -> Result<usize, DatasetError> {
    let io_err = |source: std::io::Error| DatasetError::WriteFailed {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(io_err)?;
        }
    }

    let file = File::create(path).map_err(io_err)?;
    let mut out = BufWriter::new(file);
    for record in records {
        let line = serde_json::to_string(record).map_err(|source| DatasetError::WriteFailed {
            path: path.to_path_buf(),
            source: source.into(),
        })?;
        writeln!(out, "{line}").map_err(io_err)?;
    }
    out.flush().map_err(io_err)?;

    info!(records = records.len(), path = %path.display(), "subset written");
    Ok(records.len())
}
