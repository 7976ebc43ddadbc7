//! Module installation
//!
//! This module handles:
//! - Fetching a module into a staging area and reading its manifest
//! - Detecting conflicts with modules already installed under the same name
//! - Registering new modules as git submodules under `src/modules/`
//! - Walking transitive dependencies, each repository at most once per run
//!
//! Dependencies are processed depth-first in declaration order. The walk
//! uses an explicit worklist so deep or cyclic dependency graphs cannot
//! exhaust the stack; the visited set is keyed by canonical repository URL.

pub mod staging;

use std::collections::HashSet;
use std::path::Path;

use crate::config::{ModuleManifest, read_manifest};
use crate::error::{AstricalError, Result, deps, manifest};
use crate::git::{CloneOptions, DEFAULT_REMOTE, VersionControl};
use crate::source::{self, ResolvedRepository};
use crate::ui::Reporter;
use crate::workspace::{CACHE_DIR, module_path};

use staging::StagingArea;

/// Outcome of one install run, module names in processing order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InstallSummary {
    /// Modules registered by this run
    pub installed: Vec<String>,

    /// Modules that were already present with a matching origin
    pub already_present: Vec<String>,
}

/// Installs a module and its dependencies into a project
pub struct ModuleInstaller<'a> {
    project_root: &'a Path,
    vcs: &'a dyn VersionControl,
    reporter: &'a dyn Reporter,
}

impl<'a> ModuleInstaller<'a> {
    pub fn new(
        project_root: &'a Path,
        vcs: &'a dyn VersionControl,
        reporter: &'a dyn Reporter,
    ) -> Self {
        Self {
            project_root,
            vcs,
            reporter,
        }
    }

    /// Install `reference` and everything it depends on
    ///
    /// The first error aborts the run. Modules placed before the failure
    /// stay in place.
    pub fn install(&self, reference: &str) -> Result<InstallSummary> {
        let mut summary = InstallSummary::default();
        let mut visited: HashSet<String> = HashSet::new();
        let mut pending = vec![reference.to_string()];

        while let Some(reference) = pending.pop() {
            let resolved = source::resolve(&reference)?;

            if !visited.insert(resolved.repo_url.clone()) {
                self.reporter
                    .debug(&format!("Skipping {}: already processed", resolved.repo_url));
                continue;
            }

            let manifest = self.inspect(&resolved)?;
            self.reporter.debug(&format!(
                "Module '{}' {} {}",
                manifest.name,
                manifest.version.as_deref().unwrap_or("(no version)"),
                manifest.description.as_deref().unwrap_or_default()
            ));
            self.place(&manifest.name, &resolved, &mut summary)?;

            pending.extend(manifest.dependencies.into_iter().rev());
        }

        Ok(summary)
    }

    /// Clone into staging and read the manifest; staging is gone on return
    fn inspect(&self, resolved: &ResolvedRepository) -> Result<ModuleManifest> {
        let staging = StagingArea::create(&self.project_root.join(CACHE_DIR), self.reporter)?;
        self.reporter
            .debug(&format!("Staging {} in {}", resolved, staging.path().display()));

        self.reporter
            .start_activity(&format!("Fetching {}", resolved.repo_url));
        let cloned = self
            .vcs
            .clone_repo(&resolved.repo_url, staging.path(), CloneOptions::shallow());
        self.reporter.finish_activity();
        cloned?;

        let manifest_dir = staging.manifest_dir(resolved.sub_path.as_deref());
        read_manifest(&manifest_dir).map_err(|e| match e {
            AstricalError::ManifestNotFound { .. } => manifest::not_found(resolved.location()),
            AstricalError::ManifestInvalid { reason, .. } => {
                manifest::invalid(resolved.location(), reason)
            }
            other => other,
        })
    }

    /// Register the module unless an install with the same origin exists
    fn place(
        &self,
        name: &str,
        resolved: &ResolvedRepository,
        summary: &mut InstallSummary,
    ) -> Result<()> {
        let relative_path = module_path(name);
        let target = self.project_root.join(&relative_path);

        if target.exists() {
            let existing = self.vcs.remote_url(&target, DEFAULT_REMOTE);
            if !existing.is_empty()
                && source::without_suffix(&existing) != source::without_suffix(&resolved.repo_url)
            {
                return Err(deps::conflict(name, existing, &resolved.repo_url));
            }

            self.reporter
                .info(&format!("Module '{name}' is already installed"));
            summary.already_present.push(name.to_string());
            return Ok(());
        }

        self.reporter
            .start_activity(&format!("Adding module '{name}'"));
        let added = self
            .vcs
            .add_submodule(&resolved.repo_url, &relative_path, self.project_root);
        self.reporter.finish_activity();
        added?;

        if resolved.is_local {
            self.reporter.warn(&format!(
                "Module '{name}' was added from a local path; other checkouts of this project cannot fetch it"
            ));
        }
        self.reporter
            .success(&format!("Installed module '{name}' from {}", resolved.repo_url));
        summary.installed.push(name.to_string());
        Ok(())
    }
}
