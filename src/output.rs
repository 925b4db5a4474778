//! Output formatting for human and JSON modes
//!
//! A run produces a [`BuildSummary`] that is rendered either as a short
//! human-readable report or as machine-parseable JSON.

use std::path::PathBuf;

use serde::Serialize;

/// Output mode for the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output (machine-readable)
    Json,
}

/// Result of a build run
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BuildSummary {
    /// Number of commits archived and written to the timeline
    pub commits: usize,
    /// Number of hooks that were started
    pub hooks_run: usize,
    /// Number of hooks that failed (only non-zero under the ignore policy)
    pub hooks_failed: usize,
    /// Archive root that was written
    pub archive_dir: PathBuf,
    /// Timeline file that was written
    pub output: PathBuf,
    /// Time of the oldest commit (RFC 3339)
    pub first_commit: Option<String>,
    /// Time of the newest commit (RFC 3339)
    pub last_commit: Option<String>,
}

impl BuildSummary {
    /// Render the summary based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => self.render_json(),
        }
    }

    fn render_human(&self) {
        if self.commits == 0 {
            println!("No commits found.");
        } else {
            match (&self.first_commit, &self.last_commit) {
                (Some(first), Some(last)) => {
                    println!("Archived {} commit(s) from {first} to {last}", self.commits);
                }
                _ => println!("Archived {} commit(s)", self.commits),
            }
        }

        if self.hooks_run > 0 {
            println!("Ran {} build hook(s), {} failed", self.hooks_run, self.hooks_failed);
        }
        println!("Archive: {}", self.archive_dir.display());
        println!("Wrote {}", self.output.display());
    }

    fn render_json(&self) {
        println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
    }
}
