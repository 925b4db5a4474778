//! Data models for making-of
//!
//! Core abstractions:
//! - CommitRecord: one commit's hash, date, title and parsed body
//! - BodyEntry: a paragraph or a bullet group inside a commit body
//! - HookPolicy: what a failing per-commit build hook does to the run

pub mod commit;
pub mod hook_policy;

pub use commit::{BodyEntry, CommitRecord};
pub use hook_policy::HookPolicy;
