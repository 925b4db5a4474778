//! Commit record model
//!
//! A commit record is what the viewer sees of one commit. Records are built
//! once per commit during a run and never mutated afterwards.

use serde::{Deserialize, Serialize};

/// One element of a parsed commit body
///
/// Serialized untagged, so a paragraph is a JSON string and a bullet group is
/// a JSON array of strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum BodyEntry {
    /// A plain, non-bullet line
    Paragraph(String),
    /// A contiguous run of `*` bullet lines, prefixes stripped
    List(Vec<String>),
}

impl BodyEntry {
    /// Returns true for a bullet group
    #[must_use]
    pub const fn is_list(&self) -> bool {
        matches!(self, Self::List(_))
    }
}

impl From<&str> for BodyEntry {
    fn from(s: &str) -> Self {
        Self::Paragraph(s.to_string())
    }
}

impl From<Vec<&str>> for BodyEntry {
    fn from(items: Vec<&str>) -> Self {
        Self::List(items.into_iter().map(str::to_string).collect())
    }
}

/// Metadata for one archived commit
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommitRecord {
    /// Abbreviated commit hash, also the archive directory name
    pub hash: String,

    /// Commit time in milliseconds since the Unix epoch
    pub date: i64,

    /// First line of the commit subject
    pub title: String,

    /// Parsed commit body
    pub body: Vec<BodyEntry>,
}

impl CommitRecord {
    /// Create a new commit record
    #[must_use]
    pub const fn new(hash: String, date: i64, title: String, body: Vec<BodyEntry>) -> Self {
        Self {
            hash,
            date,
            title,
            body,
        }
    }

    /// Commit time as a UTC datetime, if the millisecond value is in range
    #[must_use]
    pub fn datetime(&self) -> Option<chrono::DateTime<chrono::Utc>> {
        chrono::DateTime::from_timestamp_millis(self.date)
    }
}
