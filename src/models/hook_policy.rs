//! Hook failure policy
//!
//! Decides what happens when a commit's `build.sh` exits non-zero or cannot
//! be started. The historical behavior is to ignore it and keep going.

use serde::{Deserialize, Serialize};

/// What to do with per-commit build hooks
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HookPolicy {
    /// Run hooks, log failures and continue with the next commit
    #[default]
    Ignore,
    /// Run hooks and abort the whole run on the first failure
    Fail,
    /// Never run hooks
    Skip,
}

impl HookPolicy {
    /// Whether hooks are executed at all under this policy
    #[must_use]
    pub const fn runs_hooks(self) -> bool {
        !matches!(self, Self::Skip)
    }
}

impl std::fmt::Display for HookPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Ignore => write!(f, "ignore"),
            Self::Fail => write!(f, "fail"),
            Self::Skip => write!(f, "skip"),
        }
    }
}

impl std::str::FromStr for HookPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "ignore" => Ok(Self::Ignore),
            "fail" => Ok(Self::Fail),
            "skip" => Ok(Self::Skip),
            _ => Err(format!("Invalid hook policy: {s}. Use: ignore, fail, skip")),
        }
    }
}
