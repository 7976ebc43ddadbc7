//! Test fixtures and utilities for reducing test setup duplication.
//!
//! This module provides helper functions to create common test environments
//! (temp directories, git repos, projects, module repositories) with a single
//! function call, plus in-memory stand-ins for git and the workspace sync.
//!
//! # Usage
//!
//! ```ignore
//! use crate::test_fixtures::{create_project, create_module_repo, FakeVcs};
//!
//! #[test]
//! fn my_test() {
//!     // Project root with astrical.yml inside a git repository
//!     let (temp, root) = create_project();
//!
//!     // Committed module repository next to it
//!     let blog = create_module_repo(temp.path(), "blog", &[("module.yaml", "name: blog\n")]);
//!
//!     // Git without a network
//!     let vcs = FakeVcs::default().with_module("https://github.com/acme/blog.git", "name: blog\n");
//! }
//! ```

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

use crate::error::{Result, project::sync_failed, vcs::operation_failed};
use crate::git::{CloneOptions, UpdateOptions, VersionControl};
use crate::ui::Reporter;
use crate::workspace::WorkspaceSync;

/// Identity used for commits made by fixtures
pub const TEST_AUTHOR: (&str, &str) = ("Astrical Test", "test@example.com");

/// Create a temp directory in the system temp location.
///
/// Never created under the current working directory, even when `TMPDIR`
/// is relative.
///
/// # Panics
///
/// Panics if the temp directory cannot be created.
#[must_use]
pub fn create_temp_dir() -> TempDir {
    let base = std::env::temp_dir();
    let base = if base.is_absolute() {
        base
    } else {
        PathBuf::from("/tmp")
    };
    TempDir::new_in(base).expect("Failed to create temp directory")
}

/// Initialize a repository at `path` with a local commit identity
fn init_repo(path: &Path) -> git2::Repository {
    let repo = git2::Repository::init(path).expect("Failed to init git repository");
    {
        let mut config = repo.config().expect("Failed to open repository config");
        config
            .set_str("user.name", TEST_AUTHOR.0)
            .expect("Failed to set user.name");
        config
            .set_str("user.email", TEST_AUTHOR.1)
            .expect("Failed to set user.email");
    }
    repo
}

/// Create a temp directory with a git repository initialized.
///
/// Returns the `TempDir` (which cleans up on drop) and the path to the repo.
///
/// # Panics
///
/// Panics if the temp directory or git repository cannot be created.
#[must_use]
pub fn create_git_repo() -> (TempDir, PathBuf) {
    let temp = create_temp_dir();
    let path = temp.path().to_path_buf();
    init_repo(&path);
    (temp, path)
}

/// Create a git repository with an `astrical.yml` at its root.
///
/// # Panics
///
/// Panics if any step fails.
#[must_use]
pub fn create_project() -> (TempDir, PathBuf) {
    let (temp, path) = create_git_repo();
    std::fs::write(path.join("astrical.yml"), "name: test-site\n")
        .expect("Failed to write astrical.yml");
    (temp, path)
}

/// Create a nested directory structure inside a temp directory.
///
/// # Panics
///
/// Panics if the directory cannot be created.
#[must_use]
pub fn create_nested_dir(temp: &TempDir, path: &str) -> PathBuf {
    let nested = temp.path().join(path);
    std::fs::create_dir_all(&nested).expect("Failed to create nested directory");
    nested
}

/// Create files under `base` from (relative path, content) pairs.
///
/// # Panics
///
/// Panics if any file cannot be created.
pub fn create_test_files(base: &Path, files: &[(&str, &str)]) {
    for (path, content) in files {
        let full_path = base.join(path);
        if let Some(parent) = full_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(&full_path, content).expect("Failed to write test file");
    }
}

/// Create a repository at `parent/dir_name` holding `files` in one commit.
///
/// # Panics
///
/// Panics if any step fails.
pub fn create_module_repo(parent: &Path, dir_name: &str, files: &[(&str, &str)]) -> PathBuf {
    let path = parent.join(dir_name);
    std::fs::create_dir_all(&path).expect("Failed to create module directory");
    let repo = init_repo(&path);
    create_test_files(&path, files);

    let mut index = repo.index().expect("Failed to open index");
    index
        .add_all(["*"].iter(), git2::IndexAddOption::DEFAULT, None)
        .expect("Failed to stage files");
    index.write().expect("Failed to write index");
    let tree_id = index.write_tree().expect("Failed to write tree");
    let tree = repo.find_tree(tree_id).expect("Failed to find tree");
    let signature =
        git2::Signature::now(TEST_AUTHOR.0, TEST_AUTHOR.1).expect("Failed to create signature");
    repo.commit(
        Some("HEAD"),
        &signature,
        &signature,
        "Initial commit",
        &tree,
        &[],
    )
    .expect("Failed to commit");

    path
}

/// In-memory version control keyed by canonical repository URL
///
/// Clones write the registered files, submodule registration creates the
/// target directory and records its origin, everything else is logged.
#[derive(Default)]
pub struct FakeVcs {
    repos: HashMap<String, Vec<(String, String)>>,
    branches: Vec<String>,
    origins: RefCell<HashMap<PathBuf, String>>,
    clones: RefCell<Vec<String>>,
    submodules: RefCell<Vec<(String, String)>>,
    operations: RefCell<Vec<String>>,
}

impl FakeVcs {
    /// Serve `files` when `url` is cloned
    #[must_use]
    pub fn with_repo(mut self, url: &str, files: &[(&str, &str)]) -> Self {
        self.repos.insert(
            url.to_string(),
            files
                .iter()
                .map(|(path, content)| (path.to_string(), content.to_string()))
                .collect(),
        );
        self
    }

    /// Serve a repository containing only `module.yaml`
    #[must_use]
    pub fn with_module(self, url: &str, manifest: &str) -> Self {
        self.with_repo(url, &[("module.yaml", manifest)])
    }

    /// Report `branch` as existing in every working directory
    #[must_use]
    pub fn with_branch(mut self, branch: &str) -> Self {
        self.branches.push(branch.to_string());
        self
    }

    /// Record `url` as the origin of the working copy at `path`
    pub fn set_origin(&self, path: &Path, url: &str) {
        self.origins
            .borrow_mut()
            .insert(path.to_path_buf(), url.to_string());
    }

    /// URLs cloned so far, in order
    pub fn clones(&self) -> Vec<String> {
        self.clones.borrow().clone()
    }

    /// (url, relative path) of every registered submodule, in order
    pub fn submodules(&self) -> Vec<(String, String)> {
        self.submodules.borrow().clone()
    }

    /// Relative paths of every registered submodule, in order
    pub fn submodule_paths(&self) -> Vec<String> {
        self.submodules
            .borrow()
            .iter()
            .map(|(_, path)| path.clone())
            .collect()
    }

    /// Every other operation performed, e.g. `"commit Initial commit"`
    pub fn operations(&self) -> Vec<String> {
        self.operations.borrow().clone()
    }

    fn log(&self, operation: String) {
        self.operations.borrow_mut().push(operation);
    }
}

impl VersionControl for FakeVcs {
    fn clone_repo(&self, url: &str, destination: &Path, options: CloneOptions) -> Result<()> {
        self.clones.borrow_mut().push(url.to_string());
        let Some(files) = self.repos.get(url) else {
            return Err(operation_failed("clone", "repository not found"));
        };
        if options.recursive {
            self.log(format!("clone --recursive {url}"));
        }
        create_test_files(
            destination,
            &files
                .iter()
                .map(|(path, content)| (path.as_str(), content.as_str()))
                .collect::<Vec<_>>(),
        );
        self.set_origin(destination, url);
        Ok(())
    }

    fn remote_url(&self, working_dir: &Path, _remote: &str) -> String {
        self.origins
            .borrow()
            .get(working_dir)
            .cloned()
            .unwrap_or_default()
    }

    fn add_submodule(&self, url: &str, relative_path: &str, working_dir: &Path) -> Result<()> {
        let target = working_dir.join(relative_path);
        std::fs::create_dir_all(&target).expect("Failed to create submodule directory");
        self.set_origin(&target, url);
        self.submodules
            .borrow_mut()
            .push((url.to_string(), relative_path.to_string()));
        Ok(())
    }

    fn remove_submodule(&self, relative_path: &str, working_dir: &Path) -> Result<()> {
        let target = working_dir.join(relative_path);
        if target.exists() {
            std::fs::remove_dir_all(&target).expect("Failed to remove submodule directory");
        }
        self.log(format!("remove {relative_path}"));
        Ok(())
    }

    fn update_submodules(&self, _working_dir: &Path, options: &UpdateOptions) -> Result<()> {
        self.log(format!(
            "update remote={} {}",
            options.remote,
            options.name.as_deref().unwrap_or("*")
        ));
        Ok(())
    }

    fn add_all(&self, _working_dir: &Path) -> Result<()> {
        self.log("add -A".to_string());
        Ok(())
    }

    fn commit(&self, message: &str, _working_dir: &Path) -> Result<()> {
        self.log(format!("commit {message}"));
        Ok(())
    }

    fn checkout_orphan_branch(&self, branch: &str, _working_dir: &Path) -> Result<()> {
        self.log(format!("checkout --orphan {branch}"));
        Ok(())
    }

    fn delete_branch(&self, branch: &str, _working_dir: &Path) -> Result<()> {
        self.log(format!("branch -D {branch}"));
        Ok(())
    }

    fn rename_branch(&self, branch: &str, _working_dir: &Path) -> Result<()> {
        self.log(format!("branch -m {branch}"));
        Ok(())
    }

    fn remove_remote(&self, remote: &str, working_dir: &Path) -> Result<()> {
        self.origins.borrow_mut().remove(working_dir);
        self.log(format!("remote remove {remote}"));
        Ok(())
    }

    fn branch_exists(&self, branch: &str, _working_dir: &Path) -> bool {
        self.branches.iter().any(|b| b == branch)
    }
}

/// Workspace sync that counts its runs
#[derive(Default)]
pub struct RecordingSync {
    runs: Cell<usize>,
    fail: bool,
}

impl RecordingSync {
    /// A sync that always fails
    #[must_use]
    pub fn failing() -> Self {
        Self {
            runs: Cell::new(0),
            fail: true,
        }
    }

    /// Number of times `sync` was called
    pub fn runs(&self) -> usize {
        self.runs.get()
    }
}

impl WorkspaceSync for RecordingSync {
    fn sync(&self, _project_root: &Path) -> Result<()> {
        self.runs.set(self.runs.get() + 1);
        if self.fail {
            return Err(sync_failed("recording sync", "exit status: 1"));
        }
        Ok(())
    }

    fn describe(&self) -> String {
        "recording sync".to_string()
    }
}

/// Reporter that keeps warnings and drops everything else
#[derive(Default)]
pub struct RecordingReporter {
    warnings: RefCell<Vec<String>>,
}

impl RecordingReporter {
    /// Warnings reported so far, in order
    pub fn warnings(&self) -> Vec<String> {
        self.warnings.borrow().clone()
    }
}

impl Reporter for RecordingReporter {
    fn info(&self, _message: &str) {}

    fn success(&self, _message: &str) {}

    fn warn(&self, message: &str) {
        self.warnings.borrow_mut().push(message.to_string());
    }

    fn debug(&self, _message: &str) {}

    fn start_activity(&self, _message: &str) {}

    fn finish_activity(&self) {}
}

#[cfg(test)]
#[allow(clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn test_create_temp_dir() {
        let temp = create_temp_dir();
        assert!(temp.path().exists());
        assert!(temp.path().is_absolute());
    }

    #[test]
    fn test_create_git_repo() {
        let (temp, path) = create_git_repo();
        assert!(path.join(".git").exists());
        assert!(temp.path().exists());
    }

    #[test]
    fn test_create_project() {
        let (_temp, path) = create_project();
        assert!(path.join("astrical.yml").exists());
        assert!(path.join(".git").exists());
    }

    #[test]
    fn test_create_nested_dir() {
        let temp = create_temp_dir();
        let nested = create_nested_dir(&temp, "deep/nested/path");
        assert!(nested.is_dir());
    }

    #[test]
    fn test_create_module_repo_commits_files() {
        let temp = create_temp_dir();
        let path = create_module_repo(
            temp.path(),
            "blog",
            &[("module.yaml", "name: blog\n"), ("pages/index.md", "# Blog")],
        );

        let repo = git2::Repository::open(&path).expect("Failed to open repo");
        let commit = repo
            .head()
            .expect("Failed to read HEAD")
            .peel_to_commit()
            .expect("Failed to peel commit");
        let tree = commit.tree().expect("Failed to read tree");
        assert!(tree.get_path(Path::new("module.yaml")).is_ok());
        assert!(tree.get_path(Path::new("pages/index.md")).is_ok());
    }

    #[test]
    fn test_fake_vcs_clone_serves_files() {
        let temp = create_temp_dir();
        let vcs = FakeVcs::default().with_module("https://example.com/a.git", "name: a\n");

        vcs.clone_repo(
            "https://example.com/a.git",
            temp.path(),
            CloneOptions::shallow(),
        )
        .expect("clone failed");

        assert!(temp.path().join("module.yaml").exists());
        assert_eq!(vcs.clones(), vec!["https://example.com/a.git"]);
        assert!(
            vcs.clone_repo("https://example.com/b.git", temp.path(), CloneOptions::shallow())
                .is_err()
        );
    }

    #[test]
    fn test_recording_sync_counts_runs() {
        let temp = create_temp_dir();
        let sync = RecordingSync::default();
        sync.sync(temp.path()).expect("sync failed");
        sync.sync(temp.path()).expect("sync failed");
        assert_eq!(sync.runs(), 2);

        let failing = RecordingSync::failing();
        assert!(failing.sync(temp.path()).is_err());
        assert_eq!(failing.runs(), 1);
    }
}
