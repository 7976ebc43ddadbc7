//! `module init` command
//!
//! Scaffolds `src/modules/<name>` from a starter repository: the starter is
//! cloned with its submodules, `{module_name}` placeholders are filled in,
//! and the history is replaced by a single fresh commit on `main` with no
//! remote configured.

use std::fs;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use super::Context;
use crate::cli::InitArgs;
use crate::error::{Result, fs::io_error, fs::target_not_empty};
use crate::git::{CloneOptions, DEFAULT_REMOTE};
use crate::source;
use crate::ui::Reporter;

/// Placeholder replaced with the new module's name
pub const NAME_TOKEN: &str = "{module_name}";

/// Temporary branch holding the fresh history
const INIT_BRANCH: &str = "astrical-init";

/// Branch the new module ends up on
const MAIN_BRANCH: &str = "main";

/// Starter branches dropped after the fresh commit
const STARTER_BRANCHES: [&str; 2] = ["main", "master"];

/// Directories never rewritten
const SKIPPED_DIRS: [&str; 2] = [".git", "node_modules"];

/// Removes a partially scaffolded module unless disarmed
struct TargetGuard<'a> {
    path: PathBuf,
    armed: bool,
    reporter: &'a dyn Reporter,
}

impl<'a> TargetGuard<'a> {
    fn new(path: &Path, reporter: &'a dyn Reporter) -> Self {
        Self {
            path: path.to_path_buf(),
            armed: true,
            reporter,
        }
    }

    fn disarm(mut self) {
        self.armed = false;
    }
}

impl Drop for TargetGuard<'_> {
    fn drop(&mut self) {
        if !self.armed || !self.path.exists() {
            return;
        }
        if let Err(e) = fs::remove_dir_all(&self.path) {
            self.reporter.warn(&format!(
                "Failed to remove partially created module {}: {e}",
                self.path.display()
            ));
        }
    }
}

/// Run init command
pub fn run(ctx: &Context<'_>, args: &InitArgs) -> Result<()> {
    let target = ctx.project.module_dir(&args.name);
    if target.exists() && !is_empty_dir(&target)? {
        return Err(target_not_empty(target.display().to_string()));
    }

    let starter = source::resolve(&args.repo)?;
    ctx.reporter
        .info(&format!("Using starter: {}", source::resolve_url(&args.repo)?));

    let guard = TargetGuard::new(&target, ctx.reporter);
    if let Some(parent) = target.parent() {
        fs::create_dir_all(parent)?;
    }

    ctx.reporter
        .start_activity(&format!("Cloning {}", starter.repo_url));
    let cloned = ctx
        .vcs
        .clone_repo(&starter.repo_url, &target, CloneOptions::recursive());
    ctx.reporter.finish_activity();
    cloned?;

    let replaced = replace_tokens(&target, &args.name)?;
    ctx.reporter
        .debug(&format!("Replaced {NAME_TOKEN} in {replaced} file(s)"));

    reset_history(ctx, &target)?;
    guard.disarm();

    ctx.reporter.success(&format!(
        "Created module '{}' in {}",
        args.name,
        target.display()
    ));
    Ok(())
}

/// Replace the starter's history with one commit on `main`
fn reset_history(ctx: &Context<'_>, dir: &Path) -> Result<()> {
    ctx.vcs.checkout_orphan_branch(INIT_BRANCH, dir)?;
    ctx.vcs.add_all(dir)?;
    ctx.vcs.commit("Initial commit", dir)?;

    for branch in STARTER_BRANCHES {
        if ctx.vcs.branch_exists(branch, dir) {
            ctx.vcs.delete_branch(branch, dir)?;
        }
    }
    ctx.vcs.rename_branch(MAIN_BRANCH, dir)?;
    ctx.vcs.remove_remote(DEFAULT_REMOTE, dir)
}

fn is_empty_dir(path: &Path) -> Result<bool> {
    Ok(fs::read_dir(path)?.next().is_none())
}

/// Replace `{module_name}` in every UTF-8 text file below `root`
///
/// Files that cannot be read as UTF-8 are left alone. Returns the number of
/// files rewritten.
pub fn replace_tokens(root: &Path, name: &str) -> Result<usize> {
    let mut replaced = 0;

    let walker = WalkDir::new(root).into_iter().filter_entry(|entry| {
        !(entry.file_type().is_dir()
            && SKIPPED_DIRS
                .iter()
                .any(|skipped| entry.file_name() == *skipped))
    });

    for entry in walker.filter_map(std::result::Result::ok) {
        if !entry.file_type().is_file() {
            continue;
        }

        let Ok(content) = fs::read_to_string(entry.path()) else {
            continue;
        };
        if !content.contains(NAME_TOKEN) {
            continue;
        }

        fs::write(entry.path(), content.replace(NAME_TOKEN, name)).map_err(|e| {
            io_error(format!("Failed to write {}: {e}", entry.path().display()))
        })?;
        replaced += 1;
    }

    Ok(replaced)
}
