//! Build the making-of archive for a repository

use std::path::Path;

use anyhow::Context;

use making_of::CommitRecord;
use making_of::config::ConfigOverrides;
use making_of::hook::HookOutcome;
use making_of::output::OutputMode;
use making_of::runner::{Observer, Runner, Silent};

/// Prints one line per commit, like `git log --oneline`
#[derive(Debug, Default)]
struct Progress;

impl Observer for Progress {
    fn on_commit(&mut self, record: &CommitRecord, hook: &HookOutcome) {
        match hook {
            HookOutcome::Failed { reason } => {
                println!("{} {}  (hook failed: {reason})", record.hash, record.title);
            }
            HookOutcome::Succeeded => println!("{} {}  (built)", record.hash, record.title),
            HookOutcome::Skipped | HookOutcome::Absent => {
                println!("{} {}", record.hash, record.title);
            }
        }
    }
}

/// Archive every commit of the repository at `repo` and write the timeline
pub fn build(repo: &Path, overrides: ConfigOverrides, mode: OutputMode) -> anyhow::Result<()> {
    let runner = Runner::open(repo, overrides)
        .with_context(|| format!("cannot open repository at {}", repo.display()))?;

    let summary = match mode {
        OutputMode::Human => runner.run(&mut Progress),
        OutputMode::Json => runner.run(&mut Silent),
    }
    .context("build failed")?;

    summary.render(mode);
    Ok(())
}
