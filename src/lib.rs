//! making-of - Archive every commit of a git history for a "making of" viewer
//!
//! Walks the history oldest-first, extracts each commit's tree into its own
//! directory, runs an optional per-commit build hook and writes the commit
//! timeline (hash, date, title, parsed body) as a JavaScript file.

// Deny all clippy warnings in this crate
#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    missing_debug_implementations,
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unused_import_braces,
    unused_qualifications
)]
// Allow some pedantic lints that are too noisy or not applicable
#![allow(
    clippy::module_name_repetitions,
    clippy::missing_errors_doc,
    clippy::cargo_common_metadata
)]

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod aggregate;
pub mod archive;
pub mod config;
pub mod error;
pub mod extract;
pub mod git;
pub mod hook;
pub mod models;
pub mod output;
pub mod parser;
pub mod paths;
pub mod runner;

pub use error::BuildError;
pub use models::{BodyEntry, CommitRecord, HookPolicy};
pub use runner::Runner;
