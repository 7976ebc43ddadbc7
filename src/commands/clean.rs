//! Clean command implementation
//!
//! Removes build output and installed packages so the next sync and build
//! start from scratch. Installed modules under `src/modules` are kept.

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::find_project_root;
use crate::error::{Result, fs::io_error};
use crate::workspace::{self, CACHE_DIR};

/// Paths removed by `clean`, relative to the project root
pub const CLEAN_PATHS: [&str; 9] = [
    "src/core/modules",
    "src/core/src/themes",
    "src/core/content",
    "src/core/public",
    "src/core/node_modules",
    "src/core/dist",
    "node_modules",
    "_site",
    CACHE_DIR,
];

/// Run clean command
pub fn run(project: Option<PathBuf>) -> Result<()> {
    let start = workspace::start_dir(project)?;
    // Outside a project, clean relative to where we were started
    let root = find_project_root(&start).unwrap_or(start);

    let removed = clean(&root)?;
    if removed.is_empty() {
        println!("Nothing to clean.");
    } else {
        for path in &removed {
            println!("Removed {path}");
        }
    }

    Ok(())
}

/// Remove every existing clean path below `root`, returning the ones removed
pub fn clean(root: &Path) -> Result<Vec<&'static str>> {
    let mut removed = Vec::new();

    for relative in CLEAN_PATHS {
        let path = root.join(relative);
        let result = if path.is_dir() {
            fs::remove_dir_all(&path)
        } else if path.exists() {
            fs::remove_file(&path)
        } else {
            continue;
        };

        result.map_err(|e| io_error(format!("Failed to remove {}: {e}", path.display())))?;
        removed.push(relative);
    }

    Ok(removed)
}
