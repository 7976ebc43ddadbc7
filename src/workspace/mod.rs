//! Project workspace
//!
//! This module handles:
//! - Locating the project root from the current or `--project` directory
//! - Verifying the project lives inside a git repository
//! - Paths of installed modules and the staging cache
//!
//! ## Project Structure
//!
//! ```text
//! <root>/
//! ├── astrical.yml          # Project config (marks the root)
//! ├── .astrical/cache/      # Staging clones, removed after inspection
//! └── src/modules/<name>/   # Installed modules (git submodules)
//! ```

pub mod sync;

use std::path::{Path, PathBuf};

use normpath::PathExt;

use crate::config::{ProjectConfig, find_project_root};
use crate::error::{AstricalError, Result};

pub use sync::{CommandSync, WorkspaceSync};

/// Installed modules directory, relative to the project root
pub const MODULES_DIR: &str = "src/modules";

/// Staging cache directory, relative to the project root
pub const CACHE_DIR: &str = ".astrical/cache";

/// Relative path of a module inside the project, as registered with git
pub fn module_path(name: &str) -> String {
    format!("{MODULES_DIR}/{name}")
}

/// A discovered Astrical project
#[derive(Debug, Clone)]
pub struct Project {
    /// Directory holding `astrical.yml`
    pub root: PathBuf,

    /// Parsed project configuration
    pub config: ProjectConfig,
}

impl Project {
    /// Open the project enclosing `start`
    pub fn discover(start: &Path) -> Result<Self> {
        let root = find_project_root(start)?;
        // Resolve symlinks such as /var -> /private/var so git paths line up
        let root = root
            .normalize()
            .map(|np| np.into_path_buf())
            .unwrap_or(root);
        let config = ProjectConfig::load(&root)?;

        Ok(Self { root, config })
    }

    /// Open the project enclosing `start` and require it to be under git
    pub fn discover_in_repository(start: &Path) -> Result<Self> {
        let project = Self::discover(start)?;
        require_git_repository(&project.root)?;
        Ok(project)
    }

    /// Directory containing installed modules
    pub fn modules_dir(&self) -> PathBuf {
        self.root.join(MODULES_DIR)
    }

    /// Install directory of the named module
    pub fn module_dir(&self, name: &str) -> PathBuf {
        self.root.join(module_path(name))
    }

    /// Directory for staging clones
    pub fn cache_dir(&self) -> PathBuf {
        self.root.join(CACHE_DIR)
    }
}

/// Directory commands start searching from: `--project` or the current dir
pub fn start_dir(project: Option<PathBuf>) -> Result<PathBuf> {
    match project {
        Some(path) => Ok(path),
        None => Ok(std::env::current_dir()?),
    }
}

/// Fail with `NotInGitRepository` unless `path` is inside a git work tree
pub fn require_git_repository(path: &Path) -> Result<()> {
    if git2::Repository::discover(path).is_err() {
        return Err(AstricalError::NotInGitRepository);
    }
    Ok(())
}
