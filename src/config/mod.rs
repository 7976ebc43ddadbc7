//! Configuration file handling for Astrical
//!
//! This module contains data structures for:
//! - `module.yaml` / `module.yml` - Module manifest
//! - `astrical.yml` / `astrical.yaml` - Project configuration

pub mod manifest;
pub mod project;

// Re-export commonly used types
pub use manifest::{ModuleManifest, read_manifest};
pub use project::{ProjectConfig, find_project_root};
