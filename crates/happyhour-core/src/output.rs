//! JSON file output for normalized search results.

use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use thiserror::Error;

const OUTPUT_PREFIX: &str = "happy_hour_businesses";

#[derive(Debug, Error)]
pub enum OutputError {
    #[error("failed to serialize records: {0}")]
    Serialize(#[source] serde_json::Error),

    #[error("failed to write {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Builds the timestamped filename used when the caller does not pick one,
/// e.g. `happy_hour_businesses_20240131_180405.json`.
#[must_use]
pub fn default_output_filename(now: DateTime<Local>) -> PathBuf {
    PathBuf::from(format!(
        "{OUTPUT_PREFIX}_{}.json",
        now.format("%Y%m%d_%H%M%S")
    ))
}

/// Writes `records` as a JSON array indented with four spaces, replacing any
/// existing file, and returns the path written.
///
/// When `path` is `None` the name comes from [`default_output_filename`] using
/// the current local time.
///
/// # Errors
///
/// Returns [`OutputError::Io`] if the file cannot be written and
/// [`OutputError::Serialize`] if a record cannot be represented as JSON.
pub fn write_json_records<T: Serialize>(
    records: &[T],
    path: Option<&Path>,
) -> Result<PathBuf, OutputError> {
    let path = path.map_or_else(|| default_output_filename(Local::now()), Path::to_path_buf);

    let mut buf = Vec::new();
    let mut serializer =
        serde_json::Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(b"    "));
    records
        .serialize(&mut serializer)
        .map_err(OutputError::Serialize)?;

    std::fs::write(&path, &buf).map_err(|source| OutputError::Io {
        path: path.clone(),
        source,
    })?;

    Ok(path)
}
