//! Centralized path definitions for making-of
//!
//! Every path the build touches is resolved here against an explicit
//! repository root, never against the process working directory.
//!
//! ## Layout
//!
//! ```text
//! repo/
//! ├── .making-of.toml                # Optional config
//! └── making-of/
//!     ├── commits/                   # Archive root, razed on every run
//!     │   ├── 1b3b2b9/               # Full tree at commit 1b3b2b9
//!     │   └── 341d8b0/
//!     └── source/
//!         └── commits.js             # var commits = [...];
//! ```

use std::path::{Component, Path, PathBuf};

/// Default archive root, relative to the repository root
pub const ARCHIVE_DIR: &str = "making-of/commits";

/// Default metadata output file, relative to the repository root
pub const OUTPUT_FILE: &str = "making-of/source/commits.js";

/// Default JavaScript variable the commit array is assigned to
pub const VARIABLE: &str = "commits";

/// Default per-commit build hook, looked up at the root of each archived tree
pub const HOOK_SCRIPT: &str = "build.sh";

/// Optional config file at the repository root
pub const CONFIG_FILE: &str = ".making-of.toml";

/// Resolve `path` against `root` unless it is already absolute.
#[must_use]
pub fn resolve(root: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        root.join(path)
    }
}

/// Collapse `.` and `..` components without touching the filesystem.
///
/// A `..` at the filesystem root stays at the root.
#[must_use]
pub fn normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match out.components().next_back() {
                Some(Component::Normal(_)) => {
                    out.pop();
                }
                Some(Component::RootDir | Component::Prefix(_)) => {}
                _ => out.push(".."),
            },
            other => out.push(other.as_os_str()),
        }
    }
    out
}

/// Resolve `path` to an absolute, symlink-free form even if its tail does
/// not exist yet.
///
/// The longest existing prefix is canonicalized and the missing components
/// are appended back. Falls back to the normalized path when nothing along it
/// exists.
#[must_use]
pub fn canonicalize_lenient(path: &Path) -> PathBuf {
    let normalized = normalize(path);
    let mut existing = normalized.as_path();
    let mut missing = Vec::new();
    loop {
        if let Ok(canonical) = existing.canonicalize() {
            return missing.iter().rev().fold(canonical, |acc, name| acc.join(name));
        }
        match (existing.parent(), existing.file_name()) {
            (Some(parent), Some(name)) => {
                missing.push(name.to_os_string());
                existing = parent;
            }
            _ => return normalized,
        }
    }
}

/// Path to the config file for a repository root.
#[must_use]
pub fn config_file(root: &Path) -> PathBuf {
    root.join(CONFIG_FILE)
}

/// Directory a single commit is archived into.
#[must_use]
pub fn commit_dir(archive_root: &Path, hash: &str) -> PathBuf {
    archive_root.join(hash)
}
