//! Error types and handling for Astrical
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.
//!
//! This module is organized into sub-modules by error domain:
//! - [`source`]: Module reference parsing errors
//! - [`vcs`]: Version-control errors
//! - [`manifest`]: Module manifest errors
//! - [`deps`]: Dependency errors
//! - [`project`]: Project discovery and configuration errors
//! - [`fs`]: File system errors

pub mod deps;
pub mod fs;
pub mod manifest;
pub mod project;
pub mod source;
pub mod vcs;

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for Astrical operations
#[derive(Error, Diagnostic, Debug)]
pub enum AstricalError {
    // Source errors
    #[error("Invalid module reference '{reference}': {reason}")]
    #[diagnostic(
        code(astrical::source::invalid_reference),
        help("Valid formats: gh@owner/repo, gh@owner/repo//path, https://host/repo.git, ./local/path")
    )]
    InvalidReference { reference: String, reason: String },

    // Version-control errors
    #[error("Git {operation} failed: {message}")]
    #[diagnostic(
        code(astrical::vcs::operation_failed),
        help("Check that the repository URL is correct and that you have access to it")
    )]
    VcsOperationFailed { operation: String, message: String },

    // Manifest errors
    #[error("No module.yaml found in {location}")]
    #[diagnostic(
        code(astrical::manifest::not_found),
        help("A module repository must contain module.yaml (or module.yml) at its root or subpath")
    )]
    ManifestNotFound { location: String },

    #[error("Invalid module manifest at {location}: {reason}")]
    #[diagnostic(code(astrical::manifest::invalid))]
    ManifestInvalid { location: String, reason: String },

    // Dependency errors
    #[error(
        "Dependency conflict: module '{name}' exists but remote '{existing}' does not match '{requested}'"
    )]
    #[diagnostic(
        code(astrical::deps::conflict),
        help("Remove the existing module with 'astrical module remove' or point the dependency at the same repository")
    )]
    DependencyConflict {
        name: String,
        existing: String,
        requested: String,
    },

    #[error("Module '{name}' not found")]
    #[diagnostic(
        code(astrical::deps::module_not_found),
        help("Run 'astrical module list' to see installed modules")
    )]
    ModuleNotFound { name: String },

    // Project errors
    #[error("No Astrical project found from {path}")]
    #[diagnostic(
        code(astrical::project::not_found),
        help("Run this command inside a directory containing astrical.yml (or astrical.yaml)")
    )]
    ProjectNotFound { path: String },

    #[error("Not in a git repository")]
    #[diagnostic(
        code(astrical::project::not_in_repo),
        help("Modules are installed as git submodules. Run 'git init' in the project root first.")
    )]
    NotInGitRepository,

    #[error("Failed to parse configuration file: {path}: {reason}")]
    #[diagnostic(code(astrical::project::config_parse_failed))]
    ConfigParseFailed { path: String, reason: String },

    #[error("Workspace sync '{command}' failed: {message}")]
    #[diagnostic(
        code(astrical::project::sync_failed),
        help("Set sync_command in astrical.yml or ASTRICAL_SYNC_COMMAND to change the install command")
    )]
    SyncFailed { command: String, message: String },

    // File system errors
    #[error("Directory {path} is not empty")]
    #[diagnostic(code(astrical::fs::target_not_empty))]
    TargetNotEmpty { path: String },

    #[error("IO error: {message}")]
    #[diagnostic(code(astrical::fs::io_error))]
    IoError { message: String },

    #[error("Unknown shell: {shell}")]
    #[diagnostic(
        code(astrical::cli::unknown_shell),
        help("Supported shells: bash, elvish, fish, powershell, zsh")
    )]
    UnknownShell { shell: String },

    #[error("Operation cancelled")]
    #[diagnostic(code(astrical::cancelled))]
    Cancelled,
}

impl From<std::io::Error> for AstricalError {
    fn from(err: std::io::Error) -> Self {
        AstricalError::IoError {
            message: err.to_string(),
        }
    }
}

impl From<serde_yaml::Error> for AstricalError {
    fn from(err: serde_yaml::Error) -> Self {
        AstricalError::ConfigParseFailed {
            path: "unknown".to_string(),
            reason: err.to_string(),
        }
    }
}

impl From<inquire::InquireError> for AstricalError {
    fn from(err: inquire::InquireError) -> Self {
        match err {
            inquire::InquireError::OperationCanceled
            | inquire::InquireError::OperationInterrupted => AstricalError::Cancelled,
            other => AstricalError::IoError {
                message: other.to_string(),
            },
        }
    }
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, AstricalError>;
