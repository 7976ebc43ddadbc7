//! Workspace sync
//!
//! After modules are added, removed, or updated the project's own
//! dependency-install command is run once so module packages are linked in.

use std::path::Path;
use std::process::Command;

use crate::config::ProjectConfig;
use crate::error::{Result, project::sync_failed};

/// Environment variable overriding the configured sync command
pub const SYNC_COMMAND_ENV: &str = "ASTRICAL_SYNC_COMMAND";

/// Brings the project's installed packages in line with its modules
pub trait WorkspaceSync {
    /// Run the sync in `project_root`
    fn sync(&self, project_root: &Path) -> Result<()>;

    /// Whether `sync` does anything at all
    fn enabled(&self) -> bool {
        true
    }

    /// Human-readable description for status output
    fn describe(&self) -> String;
}

/// Runs a shell-free command line, split on whitespace
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandSync {
    command: String,
}

impl CommandSync {
    /// Sync with an explicit command line
    pub fn new(command: impl Into<String>) -> Self {
        Self {
            command: command.into(),
        }
    }

    /// Command from `ASTRICAL_SYNC_COMMAND`, else the project config
    pub fn from_config(config: &ProjectConfig) -> Self {
        match std::env::var(SYNC_COMMAND_ENV) {
            Ok(command) => Self::new(command),
            Err(_) => Self::new(config.sync_command()),
        }
    }
}

impl WorkspaceSync for CommandSync {
    fn sync(&self, project_root: &Path) -> Result<()> {
        let mut parts = self.command.split_whitespace();
        let Some(program) = parts.next() else {
            return Ok(());
        };

        let output = Command::new(program)
            .args(parts)
            .current_dir(project_root)
            .output()
            .map_err(|e| sync_failed(&self.command, e.to_string()))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            let message = if stderr.trim().is_empty() {
                output.status.to_string()
            } else {
                stderr.trim().to_string()
            };
            return Err(sync_failed(&self.command, message));
        }

        Ok(())
    }

    fn enabled(&self) -> bool {
        !self.command.trim().is_empty()
    }

    fn describe(&self) -> String {
        self.command.trim().to_string()
    }
}
