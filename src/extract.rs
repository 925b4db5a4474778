//! Commit metadata extraction
//!
//! Reads timestamp, subject and body of one commit in a single `git log`
//! query and parses them into a [`CommitRecord`].

use crate::error::ExtractError;
use crate::git::Git;
use crate::models::CommitRecord;
use crate::parser::{parse_body, parse_title};

/// Field separator in the metadata query (`%x00` in git's format language)
const FIELD_SEPARATOR: char = '\0';

/// Committer time, subject and body separated by NUL bytes
const METADATA_FORMAT: &str = "%ct%x00%s%x00%b";

/// Build the record for a single commit.
///
/// # Errors
///
/// Returns [`ExtractError::InvalidTimestamp`] if git reports no usable commit
/// time, or the underlying git error if the query fails.
pub fn extract_commit(git: &Git, hash: &str) -> Result<CommitRecord, ExtractError> {
    let raw = git.format_commit(hash, METADATA_FORMAT)?;
    parse_metadata(hash, &raw)
}

/// Parse the raw output of the metadata query.
///
/// # Errors
///
/// Returns [`ExtractError::InvalidTimestamp`] if the first field is not an
/// integer number of seconds.
pub fn parse_metadata(hash: &str, raw: &str) -> Result<CommitRecord, ExtractError> {
    let mut fields = raw.splitn(3, FIELD_SEPARATOR);
    let seconds = fields.next().unwrap_or_default().trim();
    let subject = fields.next().unwrap_or_default();
    let body = fields.next().unwrap_or_default();

    let date = seconds
        .parse::<i64>()
        .ok()
        .and_then(|s| s.checked_mul(1000))
        .ok_or_else(|| ExtractError::InvalidTimestamp {
            hash: hash.to_string(),
            value: seconds.to_string(),
        })?;

    Ok(CommitRecord::new(
        hash.to_string(),
        date,
        parse_title(subject),
        parse_body(body.trim_end()),
    ))
}
