//! Command implementations

mod build;

pub use build::build;
