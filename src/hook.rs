//! Per-commit build hooks
//!
//! An archived commit may carry a script (by default `build.sh`) at its root.
//! It runs with the archived tree as its working directory and no arguments.
//! Its output is captured and only logged; the caller decides what a failure
//! means through [`HookPolicy`].

use std::path::Path;
use std::process::Command;

use log::{debug, warn};

use crate::models::HookPolicy;

/// What happened when a commit's hook was considered
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HookOutcome {
    /// The policy says not to run hooks
    Skipped,
    /// The tree has no hook script
    Absent,
    /// The hook ran and exited zero
    Succeeded,
    /// The hook exited non-zero or could not be started
    Failed {
        /// Exit status or spawn error, for diagnostics
        reason: String,
    },
}

impl HookOutcome {
    /// Whether a hook process was started (or attempted)
    #[must_use]
    pub const fn ran(&self) -> bool {
        matches!(self, Self::Succeeded | Self::Failed { .. })
    }

    /// Whether the hook failed
    #[must_use]
    pub const fn failed(&self) -> bool {
        matches!(self, Self::Failed { .. })
    }
}

/// Run `script` inside `tree` if it exists and the policy allows hooks.
///
/// Blocks until the hook exits. There is no timeout.
#[must_use]
pub fn run_hook(tree: &Path, script: &str, policy: HookPolicy) -> HookOutcome {
    if !policy.runs_hooks() {
        return HookOutcome::Skipped;
    }

    let path = tree.join(script);
    if !path.is_file() {
        return HookOutcome::Absent;
    }

    debug!("running hook {}", path.display());
    let output = match Command::new(&path).current_dir(tree).output() {
        Ok(output) => output,
        Err(e) => {
            let reason = format!("cannot start {script}: {e}");
            warn!("{}: {reason}", tree.display());
            return HookOutcome::Failed { reason };
        }
    };

    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);
    if !stdout.trim().is_empty() {
        debug!("{script} stdout:\n{}", stdout.trim_end());
    }
    if !stderr.trim().is_empty() {
        debug!("{script} stderr:\n{}", stderr.trim_end());
    }

    if output.status.success() {
        HookOutcome::Succeeded
    } else {
        let reason = output.status.code().map_or_else(
            || format!("{script} killed by signal"),
            |c| format!("{script} exited with {c}"),
        );
        warn!("{}: {reason}", tree.display());
        HookOutcome::Failed { reason }
    }
}
