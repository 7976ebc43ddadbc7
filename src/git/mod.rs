//! Version-control operations for module management
//!
//! This module handles:
//! - Shallow and recursive clones for staging and module scaffolding
//! - Reading remote origins of installed modules
//! - Registering, removing, and updating submodules
//! - Branch and commit plumbing used when initializing new modules
//!
//! Every operation goes through the [`VersionControl`] trait so the installer
//! can be exercised without a network. [`GitCli`] is the real implementation
//! and shells out to the `git` binary; authentication is whatever the user's
//! git is configured with (SSH agent, credential helpers, ...).

pub mod command;
pub mod url;

use std::path::Path;

use crate::error::Result;

pub use command::GitCli;

/// Default remote consulted for a module's recorded origin
pub const DEFAULT_REMOTE: &str = "origin";

/// Options for cloning a repository
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CloneOptions {
    /// Also fetch nested submodule content
    pub recursive: bool,

    /// Truncate history to this many commits
    pub depth: Option<u32>,
}

impl CloneOptions {
    /// Options for an inspection-only clone (`--depth 1`)
    pub fn shallow() -> Self {
        Self {
            recursive: false,
            depth: Some(1),
        }
    }

    /// Options for a full clone including submodules
    pub fn recursive() -> Self {
        Self {
            recursive: true,
            depth: None,
        }
    }
}

/// Options for updating submodules
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpdateOptions {
    /// Fetch the remote tracking branch and merge it (`--remote --merge`)
    pub remote: bool,

    /// Restrict the update to one submodule path
    pub name: Option<String>,
}

/// Primitive version-control operations against a working directory
///
/// Failing operations return `VcsOperationFailed` carrying git's diagnostic
/// output, except where noted.
pub trait VersionControl {
    /// Materialize a working copy of `url` at `destination`
    fn clone_repo(&self, url: &str, destination: &Path, options: CloneOptions) -> Result<()>;

    /// URL configured for `remote` in `working_dir`, or an empty string when it
    /// cannot be read. Never fails.
    fn remote_url(&self, working_dir: &Path, remote: &str) -> String;

    /// Register `url` as a submodule at `relative_path` inside `working_dir`
    fn add_submodule(&self, url: &str, relative_path: &str, working_dir: &Path) -> Result<()>;

    /// Deregister and delete the submodule at `relative_path`
    fn remove_submodule(&self, relative_path: &str, working_dir: &Path) -> Result<()>;

    /// Update one or all submodules
    fn update_submodules(&self, working_dir: &Path, options: &UpdateOptions) -> Result<()>;

    /// Stage every change in the working tree
    fn add_all(&self, working_dir: &Path) -> Result<()>;

    /// Commit staged changes
    fn commit(&self, message: &str, working_dir: &Path) -> Result<()>;

    /// Switch to a new branch with no history
    fn checkout_orphan_branch(&self, branch: &str, working_dir: &Path) -> Result<()>;

    /// Force-delete a local branch
    fn delete_branch(&self, branch: &str, working_dir: &Path) -> Result<()>;

    /// Rename the current branch
    fn rename_branch(&self, branch: &str, working_dir: &Path) -> Result<()>;

    /// Remove a configured remote
    fn remove_remote(&self, remote: &str, working_dir: &Path) -> Result<()>;

    /// Whether a local branch exists; false when git cannot tell
    fn branch_exists(&self, branch: &str, working_dir: &Path) -> bool;
}
