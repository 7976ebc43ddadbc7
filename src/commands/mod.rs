//! Command implementations for Astrical CLI

pub mod clean;
pub mod completions;
pub mod module;
pub mod version;
