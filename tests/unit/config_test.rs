//! Tests for build configuration loading

use std::fs;
use std::path::{Path, PathBuf};

use making_of::HookPolicy;
use making_of::config::{BuildConfig, ConfigOverrides};
use making_of::error::ConfigError;
use tempfile::TempDir;

// =============================================================================
// DEFAULTS
// =============================================================================

#[test]
fn test_config_default() {
    let config = BuildConfig::default();
    assert_eq!(config.archive_dir, PathBuf::from("making-of/commits"));
    assert_eq!(config.output, PathBuf::from("making-of/source/commits.js"));
    assert_eq!(config.variable, "commits");
    assert_eq!(config.hook_script, "build.sh");
    assert_eq!(config.hooks, HookPolicy::Ignore);
}

#[test]
fn test_missing_file_uses_defaults() {
    let temp = TempDir::new().unwrap();
    let config = BuildConfig::load(temp.path(), ConfigOverrides::default()).unwrap();
    assert_eq!(config, BuildConfig::default());
}

#[test]
fn test_resolved_paths() {
    let config = BuildConfig::default();
    let root = Path::new("/repo");
    assert_eq!(config.archive_root(root), PathBuf::from("/repo/making-of/commits"));
    assert_eq!(config.output_path(root), PathBuf::from("/repo/making-of/source/commits.js"));
}

// =============================================================================
// LAYERING
// =============================================================================

#[test]
fn test_file_overrides_defaults() {
    let temp = TempDir::new().unwrap();
    fs::write(
        temp.path().join(".making-of.toml"),
        r#"
output = "site/timeline.js"
hooks = "skip"
"#,
    )
    .unwrap();

    let config = BuildConfig::load(temp.path(), ConfigOverrides::default()).unwrap();
    assert_eq!(config.output, PathBuf::from("site/timeline.js"));
    assert_eq!(config.hooks, HookPolicy::Skip);
    assert_eq!(config.archive_dir, PathBuf::from("making-of/commits"));
}

#[test]
fn test_cli_overrides_file() {
    let temp = TempDir::new().unwrap();
    fs::write(
        temp.path().join(".making-of.toml"),
        "variable = \"history\"\nhooks = \"skip\"\nhook_script = \"make.sh\"\n",
    )
    .unwrap();

    let cli = ConfigOverrides {
        hooks: Some(HookPolicy::Fail),
        ..ConfigOverrides::default()
    };
    let config = BuildConfig::load(temp.path(), cli).unwrap();
    assert_eq!(config.hooks, HookPolicy::Fail);
    assert_eq!(config.variable, "history");
    assert_eq!(config.hook_script, "make.sh");
}

// =============================================================================
// ERRORS
// =============================================================================

#[test]
fn test_invalid_toml_is_an_error() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join(".making-of.toml"), "output = [").unwrap();
    let err = BuildConfig::load(temp.path(), ConfigOverrides::default()).unwrap_err();
    assert!(matches!(err, ConfigError::Parse { .. }));
}

#[test]
fn test_unknown_key_is_an_error() {
    let result = ConfigOverrides::from_toml("archive = \"x\"", Path::new(".making-of.toml"));
    assert!(result.is_err());
}

#[test]
fn test_unknown_hook_policy_is_an_error() {
    let result = ConfigOverrides::from_toml("hooks = \"sometimes\"", Path::new(".making-of.toml"));
    assert!(result.is_err());
}
