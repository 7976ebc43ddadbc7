//! Common test utilities for Astrical integration tests

#![allow(dead_code)]

use std::path::{Path, PathBuf};

use assert_cmd::Command;
use tempfile::TempDir;

const AUTHOR_NAME: &str = "Astrical Test";
const AUTHOR_EMAIL: &str = "test@example.com";

/// A project plus a directory of module repositories, in one temp dir
pub struct TestProject {
    /// Keeps everything alive until the test ends
    pub temp: TempDir,
    /// Project root (contains astrical.yml, is a git repository)
    pub path: PathBuf,
    /// Directory holding module repositories created by the test
    pub repos: PathBuf,
}

impl TestProject {
    /// Create a git-backed project with an `astrical.yml`
    pub fn new() -> Self {
        let project = Self::without_git();
        init_repo(&project.path);
        project
    }

    /// Create a project that is not inside a git repository
    pub fn without_git() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let path = temp.path().join("site");
        let repos = temp.path().join("repos");
        std::fs::create_dir_all(&path).expect("Failed to create project directory");
        std::fs::create_dir_all(&repos).expect("Failed to create repos directory");
        std::fs::write(path.join("astrical.yml"), "name: test-site\n")
            .expect("Failed to write astrical.yml");
        Self { temp, path, repos }
    }

    /// Create a committed repository under `repos/`; returns its absolute path
    pub fn create_repo(&self, dir_name: &str, files: &[(&str, &str)]) -> String {
        let path = self.repos.join(dir_name);
        std::fs::create_dir_all(&path).expect("Failed to create repository directory");
        let repo = init_repo(&path);
        write_files(&path, files);
        commit_all(&repo, "Initial commit");
        path.to_str().expect("Non UTF-8 temp path").to_string()
    }

    /// Create a module repository whose manifest declares `dependencies`
    pub fn create_module(&self, dir_name: &str, name: &str, dependencies: &[&str]) -> String {
        let mut manifest = format!("name: {name}\n");
        if !dependencies.is_empty() {
            manifest.push_str("dependencies:\n");
            for dependency in dependencies {
                manifest.push_str(&format!("  - \"{dependency}\"\n"));
            }
        }
        self.create_repo(dir_name, &[("module.yaml", &manifest)])
    }

    /// Absolute path a module repository will have once created
    pub fn repo_path(&self, dir_name: &str) -> String {
        self.repos
            .join(dir_name)
            .to_str()
            .expect("Non UTF-8 temp path")
            .to_string()
    }

    /// Write a file in the project
    pub fn write_file(&self, path: &str, content: &str) {
        write_files(&self.path, &[(path, content)]);
    }

    /// Read a file from the project
    pub fn read_file(&self, path: &str) -> String {
        std::fs::read_to_string(self.path.join(path)).expect("Failed to read file")
    }

    /// Check if a path exists in the project
    pub fn file_exists(&self, path: &str) -> bool {
        self.path.join(path).exists()
    }

    /// Number of entries left in the staging cache
    pub fn staging_entries(&self) -> usize {
        let cache = self.path.join(".astrical/cache");
        if !cache.exists() {
            return 0;
        }
        std::fs::read_dir(cache)
            .expect("Failed to read cache directory")
            .count()
    }

    /// The astrical binary, run from the project root with sync disabled
    pub fn cmd(&self) -> Command {
        let mut cmd = astrical_cmd();
        cmd.current_dir(&self.path)
            .env("ASTRICAL_SYNC_COMMAND", "")
            .env_remove("ASTRICAL_PROJECT")
            .env("GIT_AUTHOR_NAME", AUTHOR_NAME)
            .env("GIT_AUTHOR_EMAIL", AUTHOR_EMAIL)
            .env("GIT_COMMITTER_NAME", AUTHOR_NAME)
            .env("GIT_COMMITTER_EMAIL", AUTHOR_EMAIL);
        cmd
    }
}

/// The astrical binary with no working directory set
// Temporary fix for deprecated cargo_bin - will be updated when build-dir issues are resolved
#[allow(deprecated)]
pub fn astrical_cmd() -> Command {
    Command::cargo_bin("astrical").expect("astrical binary not built")
}

fn init_repo(path: &Path) -> git2::Repository {
    let repo = git2::Repository::init(path).expect("Failed to init git repository");
    {
        let mut config = repo.config().expect("Failed to open repository config");
        config
            .set_str("user.name", AUTHOR_NAME)
            .expect("Failed to set user.name");
        config
            .set_str("user.email", AUTHOR_EMAIL)
            .expect("Failed to set user.email");
    }
    repo
}

fn write_files(base: &Path, files: &[(&str, &str)]) {
    for (path, content) in files {
        let full_path = base.join(path);
        if let Some(parent) = full_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(&full_path, content).expect("Failed to write file");
    }
}

fn commit_all(repo: &git2::Repository, message: &str) {
    let mut index = repo.index().expect("Failed to open index");
    index
        .add_all(["*"].iter(), git2::IndexAddOption::DEFAULT, None)
        .expect("Failed to stage files");
    index.write().expect("Failed to write index");
    let tree_id = index.write_tree().expect("Failed to write tree");
    let tree = repo.find_tree(tree_id).expect("Failed to find tree");
    let signature = git2::Signature::now(AUTHOR_NAME, AUTHOR_EMAIL).expect("Failed to sign");
    repo.commit(Some("HEAD"), &signature, &signature, message, &tree, &[])
        .expect("Failed to commit");
}
