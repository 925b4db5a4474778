//! Git integration
//!
//! Every git operation runs against an explicit work-tree root:
//! - Repository discovery (via git2)
//! - History walk, oldest commit first
//! - Per-commit metadata queries
//! - Base commands for archive streaming
//!
//! Commands are built from argument lists and never go through a shell.

use std::path::{Path, PathBuf};
use std::process::Command;

use log::debug;

use crate::error::GitError;

/// Name of the git executable
pub const GIT_COMMAND: &str = "git";

/// A git work tree that commands run in
#[derive(Debug, Clone)]
pub struct Git {
    /// Work-tree root, absolute
    workdir: PathBuf,
    /// The repository's `.git` directory
    git_dir: PathBuf,
}

impl Git {
    /// Discover the repository containing `path`.
    ///
    /// # Errors
    ///
    /// Returns [`GitError::NotARepository`] when `path` is not inside a git
    /// repository and [`GitError::BareRepository`] when the repository has no
    /// work tree.
    pub fn open(path: &Path) -> Result<Self, GitError> {
        let repo = git2::Repository::discover(path).map_err(|e| {
            if e.code() == git2::ErrorCode::NotFound {
                GitError::NotARepository(path.to_path_buf())
            } else {
                GitError::Discover(e)
            }
        })?;

        let workdir = repo
            .workdir()
            .ok_or_else(|| GitError::BareRepository(repo.path().to_path_buf()))?
            .to_path_buf();

        debug!("opened repository at {}", workdir.display());
        Ok(Self {
            workdir,
            git_dir: repo.path().to_path_buf(),
        })
    }

    /// Work-tree root of the repository
    #[must_use]
    pub fn workdir(&self) -> &Path {
        &self.workdir
    }

    /// The repository's `.git` directory
    #[must_use]
    pub fn git_dir(&self) -> &Path {
        &self.git_dir
    }

    /// A `git` command with its working directory set to the work tree
    #[must_use]
    pub fn command(&self) -> Command {
        let mut cmd = Command::new(GIT_COMMAND);
        cmd.current_dir(&self.workdir);
        cmd
    }

    /// Run git with the given arguments and return its stdout.
    ///
    /// # Errors
    ///
    /// Returns [`GitError::GitNotFound`] if git is not installed and
    /// [`GitError::CommandFailed`] with git's stderr on a non-zero exit.
    pub fn run(&self, args: &[&str]) -> Result<String, GitError> {
        debug!("git {}", args.join(" "));

        let output = self.command().args(args).output().map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                GitError::GitNotFound
            } else {
                GitError::Io(e)
            }
        })?;

        if output.status.success() {
            Ok(String::from_utf8_lossy(&output.stdout).into_owned())
        } else {
            Err(GitError::CommandFailed {
                command: format!("{GIT_COMMAND} {}", args.join(" ")),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
                exit_code: output.status.code(),
            })
        }
    }

    /// Whether HEAD points at a branch with no commits yet
    ///
    /// # Errors
    ///
    /// Returns an error if the repository can no longer be opened.
    pub fn is_unborn(&self) -> Result<bool, GitError> {
        let repo = git2::Repository::open(&self.workdir)?;
        match repo.head() {
            Ok(_) => Ok(false),
            Err(e) if e.code() == git2::ErrorCode::UnbornBranch => Ok(true),
            Err(e) => Err(GitError::Discover(e)),
        }
    }

    /// Abbreviated hashes of every commit reachable from HEAD, oldest first.
    ///
    /// An unborn HEAD yields an empty list.
    ///
    /// # Errors
    ///
    /// Returns an error if `git log` fails.
    pub fn history(&self) -> Result<Vec<String>, GitError> {
        if self.is_unborn()? {
            return Ok(Vec::new());
        }

        let output = self.run(&["log", "--reverse", "--format=%h"])?;
        Ok(output
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .map(str::to_string)
            .collect())
    }

    /// Format a single commit with a `git log` pretty format string.
    ///
    /// # Errors
    ///
    /// Returns an error if the revision does not resolve or git fails.
    pub fn format_commit(&self, rev: &str, format: &str) -> Result<String, GitError> {
        let format_arg = format!("--format={format}");
        self.run(&["log", "-1", &format_arg, rev, "--"])
    }
}
