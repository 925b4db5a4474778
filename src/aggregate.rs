//! Commit timeline output
//!
//! Serializes every record, in walk order, as a JavaScript assignment the
//! viewer loads with a plain `<script>` tag:
//!
//! ```text
//! var commits = [
//!     {
//!         "hash": "1b3b2b9",
//!         "date": 1354725373000,
//!         "title": "Initial rough commit",
//!         "body": []
//!     }
//! ];
//! ```

use std::fs;
use std::path::Path;

use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};

use crate::error::AggregateError;
use crate::models::CommitRecord;

/// Indentation used for the JSON array
const INDENT: &[u8] = b"    ";

/// Render `records` as `var <variable> = <json>;`.
///
/// # Errors
///
/// Returns an error if the records cannot be encoded as JSON.
pub fn render_commits(
    variable: &str,
    records: &[CommitRecord],
) -> Result<String, AggregateError> {
    let mut json = Vec::new();
    let mut serializer =
        Serializer::with_formatter(&mut json, PrettyFormatter::with_indent(INDENT));
    records.serialize(&mut serializer)?;

    Ok(format!("var {variable} = {};", String::from_utf8_lossy(&json)))
}

/// Write the rendered timeline to `path`, replacing any previous file.
///
/// Missing parent directories are created.
///
/// # Errors
///
/// Returns an error if encoding fails or the file cannot be written.
pub fn write_commits(
    path: &Path,
    variable: &str,
    records: &[CommitRecord],
) -> Result<(), AggregateError> {
    let contents = render_commits(variable, records)?;
    let write_err = |source| AggregateError::Write {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).map_err(write_err)?;
    }
    fs::write(path, contents).map_err(write_err)
}
