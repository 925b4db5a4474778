//! Build configuration
//!
//! Settings come from three layers, later ones winning:
//! 1. Built-in defaults (the historical `making-of/` layout)
//! 2. `.making-of.toml` at the repository root, if present
//! 3. Command-line overrides
//!
//! ```toml
//! archive_dir = "making-of/commits"
//! output = "making-of/source/commits.js"
//! variable = "commits"
//! hook_script = "build.sh"
//! hooks = "ignore"
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::models::HookPolicy;
use crate::paths;

/// Fully resolved settings for one build run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildConfig {
    /// Archive root, relative to the repository root unless absolute
    pub archive_dir: PathBuf,
    /// Timeline output file, relative to the repository root unless absolute
    pub output: PathBuf,
    /// JavaScript variable the commit array is assigned to
    pub variable: String,
    /// Hook script looked up at the root of each archived tree
    pub hook_script: String,
    /// What failing hooks do to the run
    pub hooks: HookPolicy,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            archive_dir: PathBuf::from(paths::ARCHIVE_DIR),
            output: PathBuf::from(paths::OUTPUT_FILE),
            variable: paths::VARIABLE.to_string(),
            hook_script: paths::HOOK_SCRIPT.to_string(),
            hooks: HookPolicy::default(),
        }
    }
}

/// A partial config, as read from the file or the command line
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigOverrides {
    /// Archive root override
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub archive_dir: Option<PathBuf>,
    /// Output file override
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output: Option<PathBuf>,
    /// Variable name override
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub variable: Option<String>,
    /// Hook script name override
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hook_script: Option<String>,
    /// Hook policy override
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hooks: Option<HookPolicy>,
}

impl ConfigOverrides {
    /// Parse overrides from TOML text
    ///
    /// # Errors
    ///
    /// Returns an error for invalid TOML or unknown keys.
    pub fn from_toml(content: &str, path: &Path) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Load overrides from `path`, or nothing if the file does not exist
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&content, path)
    }
}

impl BuildConfig {
    /// Apply overrides on top of this config
    #[must_use]
    pub fn merge(mut self, overrides: ConfigOverrides) -> Self {
        if let Some(archive_dir) = overrides.archive_dir {
            self.archive_dir = archive_dir;
        }
        if let Some(output) = overrides.output {
            self.output = output;
        }
        if let Some(variable) = overrides.variable {
            self.variable = variable;
        }
        if let Some(hook_script) = overrides.hook_script {
            self.hook_script = hook_script;
        }
        if let Some(hooks) = overrides.hooks {
            self.hooks = hooks;
        }
        self
    }

    /// Defaults, then `.making-of.toml` under `root`, then `cli`
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but is invalid.
    pub fn load(root: &Path, cli: ConfigOverrides) -> Result<Self, ConfigError> {
        let file = ConfigOverrides::load(&paths::config_file(root))?;
        Ok(Self::default().merge(file).merge(cli))
    }

    /// Archive root resolved against the repository root
    #[must_use]
    pub fn archive_root(&self, root: &Path) -> PathBuf {
        paths::resolve(root, &self.archive_dir)
    }

    /// Output file resolved against the repository root
    #[must_use]
    pub fn output_path(&self, root: &Path) -> PathBuf {
        paths::resolve(root, &self.output)
    }
}
