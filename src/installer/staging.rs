//! Staging area for inspection-only clones
//!
//! Each candidate module is cloned into a fresh directory under the
//! project's `.astrical/cache` so its manifest can be read before anything
//! is registered. The directory is removed when the [`StagingArea`] is
//! dropped, whichever way the inspection ends.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use tempfile::TempDir;

use crate::error::{Result, fs::io_error};
use crate::ui::Reporter;

/// Prefix of staging directory names
pub const STAGING_PREFIX: &str = "staging";

/// Scoped staging directory
pub struct StagingArea<'a> {
    dir: Option<TempDir>,
    reporter: &'a dyn Reporter,
}

impl<'a> StagingArea<'a> {
    /// Create `staging-<unix-millis>-<random>` inside `cache_dir`
    pub fn create(cache_dir: &Path, reporter: &'a dyn Reporter) -> Result<Self> {
        fs::create_dir_all(cache_dir).map_err(|e| {
            io_error(format!(
                "Failed to create cache directory {}: {e}",
                cache_dir.display()
            ))
        })?;

        let millis = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis())
            .unwrap_or_default();

        let dir = tempfile::Builder::new()
            .prefix(&format!("{STAGING_PREFIX}-{millis}-"))
            .tempdir_in(cache_dir)
            .map_err(|e| io_error(format!("Failed to create staging directory: {e}")))?;

        Ok(Self {
            dir: Some(dir),
            reporter,
        })
    }

    /// Root of the staged checkout
    pub fn path(&self) -> &Path {
        match &self.dir {
            Some(dir) => dir.path(),
            None => Path::new(""),
        }
    }

    /// Directory expected to hold the manifest
    pub fn manifest_dir(&self, sub_path: Option<&str>) -> PathBuf {
        match sub_path {
            Some(sub_path) => self.path().join(sub_path),
            None => self.path().to_path_buf(),
        }
    }
}

impl Drop for StagingArea<'_> {
    fn drop(&mut self) {
        if let Some(dir) = self.dir.take() {
            let path = dir.path().to_path_buf();
            if let Err(e) = dir.close() {
                self.reporter.warn(&format!(
                    "Failed to remove staging directory {}: {e}",
                    path.display()
                ));
            }
        }
    }
}
