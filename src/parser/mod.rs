//! Commit message parsing
//!
//! Turns the free-form text of a commit message into the structure the
//! viewer renders:
//! - the title is the first line of the subject
//! - the body becomes paragraphs interleaved with bullet groups
//!
//! ```text
//! Fix bug                 ->  "Fix bug"
//!
//! * item one              ->  ["item one",
//! * item two                   "item two"]
//!
//! Trailing note           ->  "Trailing note"
//! ```

use crate::models::BodyEntry;

/// Character that marks a bullet line
pub const BULLET: char = '*';

/// First line of a subject, or an empty string for an empty subject.
#[must_use]
pub fn parse_title(subject: &str) -> String {
    subject.lines().next().unwrap_or_default().to_string()
}

/// Parse a commit body into paragraphs and bullet groups.
///
/// Lines are trimmed. Blank lines are dropped without ending a bullet group,
/// so bullets separated only by blank lines stay in one group. A line
/// starting with `*` is a bullet item with the `*` and following whitespace
/// removed; a bare `*` is an empty item.
#[must_use]
pub fn parse_body(text: &str) -> Vec<BodyEntry> {
    let mut entries = Vec::new();
    let mut bullets: Vec<String> = Vec::new();

    for line in text.lines().map(str::trim) {
        if line.is_empty() {
            continue;
        }

        if let Some(item) = line.strip_prefix(BULLET) {
            bullets.push(item.trim_start().to_string());
        } else {
            if !bullets.is_empty() {
                entries.push(BodyEntry::List(std::mem::take(&mut bullets)));
            }
            entries.push(BodyEntry::Paragraph(line.to_string()));
        }
    }

    if !bullets.is_empty() {
        entries.push(BodyEntry::List(bullets));
    }

    entries
}

/// Flatten parsed entries back into commit body text.
///
/// Each paragraph is one line and each bullet item is written as `* item`.
/// Feeding the result to [`parse_body`] yields the same entries.
#[must_use]
pub fn render_body(entries: &[BodyEntry]) -> String {
    let mut lines = Vec::new();
    for entry in entries {
        match entry {
            BodyEntry::Paragraph(text) => lines.push(text.clone()),
            BodyEntry::List(items) => {
                lines.extend(items.iter().map(|item| format!("{BULLET} {item}")));
            }
        }
    }
    lines.join("\n")
}
