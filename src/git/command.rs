//! `git` binary adapter
//!
//! This module handles:
//! - Spawning `git` with captured output
//! - Mapping non-zero exits to `VcsOperationFailed` with git's own diagnostics

use std::ffi::OsStr;
use std::fs;
use std::path::Path;
use std::process::Command;

use super::url::{expand_home, needs_file_protocol};
use super::{CloneOptions, UpdateOptions, VersionControl};
use crate::error::{Result, vcs::operation_failed};

/// Version control through the system `git` binary
#[derive(Debug, Default, Clone, Copy)]
pub struct GitCli;

impl GitCli {
    /// Create a new adapter
    pub fn new() -> Self {
        Self
    }

    /// Run git and return trimmed stdout, or the failure diagnostics.
    fn run<I, S>(&self, operation: &str, args: I, working_dir: Option<&Path>) -> Result<String>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<OsStr>,
    {
        let mut cmd = Command::new("git");
        cmd.args(args);
        if let Some(dir) = working_dir {
            cmd.current_dir(dir);
        }

        let output = cmd
            .output()
            .map_err(|e| operation_failed(operation, format!("failed to run git: {e}")))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            let message = if stderr.trim().is_empty() {
                String::from_utf8_lossy(&output.stdout).trim().to_string()
            } else {
                stderr.trim().to_string()
            };
            return Err(operation_failed(operation, message));
        }

        Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
    }
}

impl VersionControl for GitCli {
    fn clone_repo(&self, url: &str, destination: &Path, options: CloneOptions) -> Result<()> {
        let url = expand_home(url);
        let mut args: Vec<&OsStr> = vec![OsStr::new("clone")];
        if options.recursive {
            args.push(OsStr::new("--recursive"));
        }
        let depth = options.depth.map(|d| d.to_string());
        if let Some(ref depth) = depth {
            args.push(OsStr::new("--depth"));
            args.push(OsStr::new(depth));
        }
        args.push(OsStr::new(&*url));
        args.push(destination.as_os_str());

        self.run("clone", args, None).map(|_| ())
    }

    fn remote_url(&self, working_dir: &Path, remote: &str) -> String {
        self.run("remote get-url", ["remote", "get-url", remote], Some(working_dir))
            .unwrap_or_default()
    }

    fn add_submodule(&self, url: &str, relative_path: &str, working_dir: &Path) -> Result<()> {
        let url = expand_home(url);
        let mut args: Vec<&str> = Vec::new();
        if needs_file_protocol(&url) {
            args.extend(["-c", "protocol.file.allow=always"]);
        }
        args.extend(["submodule", "add", &*url, relative_path]);

        self.run("submodule add", args, Some(working_dir))
            .map(|_| ())
    }

    fn remove_submodule(&self, relative_path: &str, working_dir: &Path) -> Result<()> {
        self.run(
            "submodule deinit",
            ["submodule", "deinit", "-f", relative_path],
            Some(working_dir),
        )?;
        self.run("rm", ["rm", "-f", relative_path], Some(working_dir))?;

        let module_git_dir = working_dir.join(".git").join("modules").join(relative_path);
        if module_git_dir.exists() {
            fs::remove_dir_all(&module_git_dir).map_err(|e| {
                operation_failed(
                    "submodule remove",
                    format!("failed to remove {}: {e}", module_git_dir.display()),
                )
            })?;
        }

        Ok(())
    }

    fn update_submodules(&self, working_dir: &Path, options: &UpdateOptions) -> Result<()> {
        let mut args = vec!["submodule", "update"];
        if options.remote {
            args.extend(["--remote", "--merge"]);
        }
        if let Some(ref name) = options.name {
            args.push(name);
        }

        self.run("submodule update", args, Some(working_dir))
            .map(|_| ())
    }

    fn add_all(&self, working_dir: &Path) -> Result<()> {
        self.run("add", ["add", "-A"], Some(working_dir)).map(|_| ())
    }

    fn commit(&self, message: &str, working_dir: &Path) -> Result<()> {
        self.run("commit", ["commit", "-m", message], Some(working_dir))
            .map(|_| ())
    }

    fn checkout_orphan_branch(&self, branch: &str, working_dir: &Path) -> Result<()> {
        self.run(
            "checkout",
            ["checkout", "--orphan", branch],
            Some(working_dir),
        )
        .map(|_| ())
    }

    fn delete_branch(&self, branch: &str, working_dir: &Path) -> Result<()> {
        self.run("branch delete", ["branch", "-D", branch], Some(working_dir))
            .map(|_| ())
    }

    fn rename_branch(&self, branch: &str, working_dir: &Path) -> Result<()> {
        self.run("branch rename", ["branch", "-m", branch], Some(working_dir))
            .map(|_| ())
    }

    fn remove_remote(&self, remote: &str, working_dir: &Path) -> Result<()> {
        self.run("remote remove", ["remote", "remove", remote], Some(working_dir))
            .map(|_| ())
    }

    fn branch_exists(&self, branch: &str, working_dir: &Path) -> bool {
        let refname = format!("refs/heads/{branch}");
        self.run(
            "show-ref",
            ["show-ref", "--verify", "--quiet", refname.as_str()],
            Some(working_dir),
        )
        .is_ok()
    }
}
