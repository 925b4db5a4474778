//! Commit tree archiving
//!
//! Materializes each commit's full tree under `<archive-root>/<hash>/` by
//! streaming `git archive` straight into `tar -x`.

use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::process::{Child, Command, Stdio};
use std::thread;

use log::debug;

use crate::error::ArchiveError;
use crate::git::{GIT_COMMAND, Git};
use crate::paths;

/// Name of the tar executable used for extraction
pub const TAR_COMMAND: &str = "tar";

/// Writes commit snapshots into one archive root
#[derive(Debug, Clone)]
pub struct Archiver {
    git: Git,
    root: PathBuf,
}

impl Archiver {
    /// Create an archiver writing into `root`
    #[must_use]
    pub fn new(git: Git, root: PathBuf) -> Self {
        Self {
            git,
            root: paths::normalize(&root),
        }
    }

    /// The archive root
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Directory a given commit is extracted to
    #[must_use]
    pub fn commit_dir(&self, hash: &str) -> PathBuf {
        paths::commit_dir(&self.root, hash)
    }

    /// Remove everything under the archive root and recreate it empty.
    ///
    /// # Errors
    ///
    /// Returns [`ArchiveError::UnsafeRoot`] if the resolved root is the work
    /// tree, one of its ancestors, or overlaps the `.git` directory, and
    /// [`ArchiveError::Root`] if the directory cannot be removed or created.
    pub fn reset(&self) -> Result<(), ArchiveError> {
        let root = self.checked_root()?;
        let root_err = |source| ArchiveError::Root {
            path: root.clone(),
            source,
        };

        if root.exists() {
            debug!("removing {}", root.display());
            fs::remove_dir_all(&root).map_err(root_err)?;
        }
        fs::create_dir_all(&root).map_err(root_err)
    }

    /// Resolve the root through symlinks and `..` and make sure razing it
    /// leaves the repository intact.
    fn checked_root(&self) -> Result<PathBuf, ArchiveError> {
        let root = paths::canonicalize_lenient(&self.root);
        let workdir = paths::canonicalize_lenient(self.git.workdir());
        let git_dir = paths::canonicalize_lenient(self.git.git_dir());

        let reason = if workdir.starts_with(&root) {
            "it contains the work tree"
        } else if root.starts_with(&git_dir) || git_dir.starts_with(&root) {
            "it overlaps the git directory"
        } else {
            return Ok(root);
        };
        Err(ArchiveError::UnsafeRoot { path: root, reason })
    }

    /// Extract the tree of `hash` into `<root>/<hash>/`.
    ///
    /// # Errors
    ///
    /// Returns [`ArchiveError::Command`] if either `git archive` or `tar`
    /// fails. A `git archive` error of its own is reported first, then a
    /// `tar` error.
    pub fn extract(&self, hash: &str) -> Result<PathBuf, ArchiveError> {
        let prefix = format!("--prefix={hash}/");
        let archive_args = ["archive", "--format=tar", prefix.as_str(), hash];
        let archive_command = format!("{GIT_COMMAND} {}", archive_args.join(" "));
        let tar_command = format!("{TAR_COMMAND} -x -C {}", self.root.display());
        debug!("{archive_command} | {tar_command}");

        let mut archive = self
            .git
            .command()
            .args(archive_args)
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()?;

        // Drained alongside tar so git never blocks on a full stderr pipe.
        let archive_stderr = archive.stderr.take().map(|mut stderr| {
            thread::spawn(move || {
                let mut buf = Vec::new();
                stderr.read_to_end(&mut buf).map(|_| buf)
            })
        });

        let tar = archive
            .stdout
            .take()
            .ok_or_else(|| io::Error::other("git archive stdout was not captured"))
            .and_then(|stdout| {
                Command::new(TAR_COMMAND)
                    .args(["-x", "-C"])
                    .arg(&self.root)
                    .stdin(stdout)
                    .stdout(Stdio::null())
                    .stderr(Stdio::piped())
                    .spawn()
            });
        let tar = match tar {
            Ok(tar) => tar,
            Err(e) => {
                reap(&mut archive);
                return Err(e.into());
            }
        };

        let tar_output = tar.wait_with_output();
        let archive_status = archive.wait()?;
        let tar_output = tar_output?;
        let archive_stderr = archive_stderr
            .and_then(|handle| handle.join().ok())
            .and_then(Result::ok)
            .unwrap_or_default();

        let failure = |command: &str, stderr: String, exit_code| ArchiveError::Command {
            hash: hash.to_string(),
            command: command.to_string(),
            stderr,
            exit_code,
        };
        let lossy = |bytes: &[u8]| String::from_utf8_lossy(bytes).trim().to_string();

        // An exit code means git failed on its own. Without one it was most
        // likely killed by SIGPIPE after tar quit, and tar has the real error.
        if archive_status.code().is_some_and(|code| code != 0) {
            let stderr = lossy(&archive_stderr);
            return Err(failure(&archive_command, stderr, archive_status.code()));
        }
        if !tar_output.status.success() {
            let mut stderr = lossy(&tar_output.stderr);
            if !archive_status.success() {
                stderr.push_str(" (git archive stopped when tar closed the pipe)");
            }
            return Err(failure(&tar_command, stderr, tar_output.status.code()));
        }
        if !archive_status.success() {
            return Err(failure(&archive_command, lossy(&archive_stderr), None));
        }

        // An empty tree still gets its directory.
        let dir = self.commit_dir(hash);
        fs::create_dir_all(&dir)?;
        Ok(dir)
    }
}

/// Kill a child whose consumer never started and wait for it to exit.
fn reap(child: &mut Child) {
    if let Err(e) = child.kill().and_then(|()| child.wait()) {
        debug!("could not reap child process: {e}");
    }
}
