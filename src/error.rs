//! Error types for the making-of build
//!
//! Each stage of the build has its own error enum. [`BuildError`] wraps them
//! all so the runner can propagate with `?`.

use std::path::PathBuf;

use thiserror::Error;

/// Errors from invoking git or discovering the repository
#[derive(Debug, Error)]
pub enum GitError {
    /// The `git` executable is not on PATH
    #[error("git executable not found on PATH")]
    GitNotFound,

    /// The given path is not inside a git work tree
    #[error("not a git repository: {0}")]
    NotARepository(PathBuf),

    /// Repository has no work tree (bare repository)
    #[error("repository has no work tree: {0}")]
    BareRepository(PathBuf),

    /// A git command exited non-zero
    #[error("`{command}` failed (exit code {exit_code:?}): {stderr}")]
    CommandFailed {
        /// The command line that was run
        command: String,
        /// Captured stderr, trimmed
        stderr: String,
        /// Exit code, if the process was not killed by a signal
        exit_code: Option<i32>,
    },

    /// Repository discovery failed for a reason other than "not a repository"
    #[error("repository discovery failed: {0}")]
    Discover(#[from] git2::Error),

    /// IO error while spawning or talking to git
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors while materializing a commit's tree on disk
#[derive(Debug, Error)]
pub enum ArchiveError {
    /// `git archive` or `tar` exited non-zero
    #[error("archiving {hash} failed: `{command}` (exit code {exit_code:?}): {stderr}")]
    Command {
        /// Commit being archived
        hash: String,
        /// The command line that failed
        command: String,
        /// Captured stderr, trimmed
        stderr: String,
        /// Exit code, if any
        exit_code: Option<i32>,
    },

    /// Could not reset the archive root
    #[error("cannot prepare archive root {path}: {source}")]
    Root {
        /// The archive root
        path: PathBuf,
        /// Underlying IO error
        source: std::io::Error,
    },

    /// Razing the archive root would destroy the work tree or repository
    #[error("refusing to use {path} as archive root: {reason}")]
    UnsafeRoot {
        /// The archive root, resolved
        path: PathBuf,
        /// What the root overlaps
        reason: &'static str,
    },

    /// IO error while spawning git or tar
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors while reading one commit's metadata
#[derive(Debug, Error)]
pub enum ExtractError {
    /// The commit time was empty or not an integer
    #[error("invalid commit timestamp for {hash}: {value:?}")]
    InvalidTimestamp {
        /// Commit being read
        hash: String,
        /// The raw value git returned
        value: String,
    },

    /// The metadata query itself failed
    #[error(transparent)]
    Git(#[from] GitError),
}

/// Errors while writing the aggregate metadata file
#[derive(Debug, Error)]
pub enum AggregateError {
    /// The records could not be encoded as JSON
    #[error("cannot encode commits as json: {0}")]
    Json(#[from] serde_json::Error),

    /// The output file could not be written
    #[error("cannot write {path}: {source}")]
    Write {
        /// Output path
        path: PathBuf,
        /// Underlying IO error
        source: std::io::Error,
    },
}

/// Errors while loading `.making-of.toml`
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The file exists but could not be read
    #[error("cannot read {path}: {source}")]
    Read {
        /// Config path
        path: PathBuf,
        /// Underlying IO error
        source: std::io::Error,
    },

    /// The file is not valid TOML for the config schema
    #[error("invalid config {path}: {source}")]
    Parse {
        /// Config path
        path: PathBuf,
        /// Underlying TOML error
        source: toml::de::Error,
    },
}

/// Any error that aborts a build run
#[derive(Debug, Error)]
pub enum BuildError {
    /// Git invocation or repository discovery failed
    #[error(transparent)]
    Git(#[from] GitError),

    /// A commit could not be archived
    #[error(transparent)]
    Archive(#[from] ArchiveError),

    /// A commit's metadata could not be read
    #[error(transparent)]
    Extract(#[from] ExtractError),

    /// The aggregate file could not be written
    #[error(transparent)]
    Aggregate(#[from] AggregateError),

    /// Config could not be loaded
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// A build hook failed under the `fail` hook policy
    #[error("build hook for {hash} failed: {reason}")]
    HookFailed {
        /// Commit whose hook failed
        hash: String,
        /// Exit status or spawn error
        reason: String,
    },
}
