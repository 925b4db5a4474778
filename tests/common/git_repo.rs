//! Temporary git repository helper for tests

use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::TempDir;

/// A temporary git repository for testing
pub struct TempGitRepo {
    temp_dir: TempDir,
    path: PathBuf,
}

impl TempGitRepo {
    /// Create a new, empty temporary git repository.
    ///
    /// The work tree is a `repo/` subdirectory so tests can place files
    /// beside it.
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let path = temp_dir.path().join("repo");
        std::fs::create_dir(&path).expect("Failed to create repo directory");

        let repo = Self { temp_dir, path };
        repo.git_ok(&["init", "-q"]);
        repo.git_ok(&["config", "user.name", "Test User"]);
        repo.git_ok(&["config", "user.email", "test@example.com"]);
        repo.git_ok(&["config", "commit.gpgsign", "false"]);
        repo
    }

    /// Get the path to the repository
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Directory containing the work tree
    pub fn sandbox(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Write a file to the repository
    pub fn write_file(&self, name: &str, content: &str) {
        let file_path = self.path.join(name);
        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directories");
        }
        std::fs::write(file_path, content).expect("Failed to write file");
    }

    /// Write an executable shell script to the repository
    #[cfg(unix)]
    pub fn write_script(&self, name: &str, body: &str) {
        use std::os::unix::fs::PermissionsExt;

        self.write_file(name, &format!("#!/bin/sh\n{body}\n"));
        std::fs::set_permissions(self.path.join(name), std::fs::Permissions::from_mode(0o755))
            .expect("Failed to make script executable");
    }

    /// Stage every change and commit it with a fixed timestamp (seconds since epoch)
    pub fn commit_at(&self, message: &str, timestamp: i64) {
        let date = format!("@{timestamp} +0000");
        self.git_ok(&["add", "-A"]);
        let output = Command::new("git")
            .args(["commit", "-q", "--allow-empty", "-m", message])
            .env("GIT_AUTHOR_DATE", &date)
            .env("GIT_COMMITTER_DATE", &date)
            .current_dir(&self.path)
            .output()
            .expect("Failed to commit");
        assert!(
            output.status.success(),
            "commit failed: {}",
            String::from_utf8_lossy(&output.stderr)
        );
    }

    /// Abbreviated hashes of all commits, oldest first
    pub fn short_hashes(&self) -> Vec<String> {
        let output = self.git(&["log", "--reverse", "--format=%h"]);
        String::from_utf8_lossy(&output.stdout)
            .lines()
            .map(str::to_string)
            .collect()
    }

    /// Run a git command and return output
    pub fn git(&self, args: &[&str]) -> std::process::Output {
        Command::new("git")
            .args(args)
            .current_dir(&self.path)
            .output()
            .expect("Failed to run git command")
    }

    /// Run a git command and panic unless it succeeds
    pub fn git_ok(&self, args: &[&str]) {
        let output = self.git(args);
        assert!(
            output.status.success(),
            "git {} failed: {}",
            args.join(" "),
            String::from_utf8_lossy(&output.stderr)
        );
    }
}

impl Default for TempGitRepo {
    fn default() -> Self {
        Self::new()
    }
}
