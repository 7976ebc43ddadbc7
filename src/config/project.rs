//! Project configuration (astrical.yml)
//!
//! The presence of this file marks the project root. Unknown keys are
//! ignored so the file can be shared with the site engine.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{Result, project};

/// Project config filenames in lookup order
pub const PROJECT_CONFIG_FILES: [&str; 2] = ["astrical.yml", "astrical.yaml"];

/// Command run after module changes when none is configured
pub const DEFAULT_SYNC_COMMAND: &str = "npm install";

/// Parsed project configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ProjectConfig {
    /// Project name
    #[serde(default)]
    pub name: Option<String>,

    /// Dependency-install command; an empty string disables it
    #[serde(default)]
    pub sync_command: Option<String>,
}

impl ProjectConfig {
    /// Parse project config from YAML; an empty document yields defaults
    pub fn from_yaml(yaml: &str, location: &str) -> Result<Self> {
        let value: serde_yaml::Value = serde_yaml::from_str(yaml)
            .map_err(|e| project::config_parse_failed(location, e.to_string()))?;

        if value.is_null() {
            return Ok(Self::default());
        }

        serde_yaml::from_value(value).map_err(|e| project::config_parse_failed(location, e.to_string()))
    }

    /// Load the config file found in `root`
    pub fn load(root: &Path) -> Result<Self> {
        let Some(path) = find_config_file(root) else {
            return Err(project::not_found(root.display().to_string()));
        };
        let location = path.display().to_string();

        let content = fs::read_to_string(&path)
            .map_err(|e| project::config_parse_failed(&location, e.to_string()))?;
        Self::from_yaml(&content, &location)
    }

    /// Configured sync command, falling back to `npm install`
    pub fn sync_command(&self) -> &str {
        self.sync_command.as_deref().unwrap_or(DEFAULT_SYNC_COMMAND)
    }
}

/// Config file in `dir`, preferring `astrical.yml`
pub fn find_config_file(dir: &Path) -> Option<PathBuf> {
    PROJECT_CONFIG_FILES
        .iter()
        .map(|file| dir.join(file))
        .find(|path| path.is_file())
}

/// Find the project root by searching `start` and its ancestors
pub fn find_project_root(start: &Path) -> Result<PathBuf> {
    start
        .ancestors()
        .find(|dir| find_config_file(dir).is_some())
        .map(Path::to_path_buf)
        .ok_or_else(|| project::not_found(start.display().to_string()))
}
