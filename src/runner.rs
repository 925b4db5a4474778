//! Build run orchestration
//!
//! Walks the history oldest-first and, for each commit, archives the tree,
//! runs its hook and extracts its metadata. The timeline file is written only
//! after every commit succeeded, so a fatal error leaves no new timeline
//! behind (already archived trees stay on disk).

use std::path::Path;

use log::{info, warn};

use crate::aggregate::write_commits;
use crate::archive::Archiver;
use crate::config::{BuildConfig, ConfigOverrides};
use crate::error::BuildError;
use crate::extract::extract_commit;
use crate::git::Git;
use crate::hook::{HookOutcome, run_hook};
use crate::models::{CommitRecord, HookPolicy};
use crate::output::BuildSummary;

/// Receives progress as commits are processed
pub trait Observer {
    /// Called once a commit has been archived and its record built
    fn on_commit(&mut self, record: &CommitRecord, hook: &HookOutcome);
}

/// Observer that ignores all progress
#[derive(Debug, Clone, Copy, Default)]
pub struct Silent;

impl Observer for Silent {
    fn on_commit(&mut self, _record: &CommitRecord, _hook: &HookOutcome) {}
}

/// A single build run over one repository
#[derive(Debug, Clone)]
pub struct Runner {
    git: Git,
    config: BuildConfig,
}

impl Runner {
    /// Create a runner for an opened repository
    #[must_use]
    pub const fn new(git: Git, config: BuildConfig) -> Self {
        Self { git, config }
    }

    /// Discover the repository at `path` and load its config.
    ///
    /// `overrides` is applied on top of `.making-of.toml`.
    ///
    /// # Errors
    ///
    /// Returns an error if `path` is not in a git work tree or the config
    /// file is invalid.
    pub fn open(path: &Path, overrides: ConfigOverrides) -> Result<Self, BuildError> {
        let git = Git::open(path)?;
        let config = BuildConfig::load(git.workdir(), overrides)?;
        Ok(Self::new(git, config))
    }

    /// The resolved config
    #[must_use]
    pub const fn config(&self) -> &BuildConfig {
        &self.config
    }

    /// Run the whole build.
    ///
    /// # Errors
    ///
    /// Any git, archive, metadata or write failure aborts the run, as does a
    /// failing hook under [`HookPolicy::Fail`].
    pub fn run(&self, observer: &mut dyn Observer) -> Result<BuildSummary, BuildError> {
        let root = self.git.workdir();
        let archiver = Archiver::new(self.git.clone(), self.config.archive_root(root));
        let output = self.config.output_path(root);

        info!(
            "building making-of for {} (hooks: {})",
            root.display(),
            self.config.hooks
        );
        archiver.reset()?;

        let hashes = self.git.history()?;
        if hashes.is_empty() {
            warn!("repository has no commits");
        }

        let mut records = Vec::with_capacity(hashes.len());
        let mut hooks_run = 0;
        let mut hooks_failed = 0;

        for hash in &hashes {
            let tree = archiver.extract(hash)?;

            let hook = run_hook(&tree, &self.config.hook_script, self.config.hooks);
            if hook.ran() {
                hooks_run += 1;
            }
            if let HookOutcome::Failed { reason } = &hook {
                if self.config.hooks == HookPolicy::Fail {
                    return Err(BuildError::HookFailed {
                        hash: hash.clone(),
                        reason: reason.clone(),
                    });
                }
                hooks_failed += 1;
            }

            let record = extract_commit(&self.git, hash)?;
            observer.on_commit(&record, &hook);
            records.push(record);
        }

        write_commits(&output, &self.config.variable, &records)?;
        info!("wrote {} commit(s) to {}", records.len(), output.display());

        let rfc3339 = |r: &CommitRecord| r.datetime().map(|d| d.to_rfc3339());
        Ok(BuildSummary {
            commits: records.len(),
            hooks_run,
            hooks_failed,
            archive_dir: archiver.root().to_path_buf(),
            output,
            first_commit: records.first().and_then(rfc3339),
            last_commit: records.last().and_then(rfc3339),
        })
    }
}
