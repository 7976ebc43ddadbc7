//! Module manifest (module.yaml)
//!
//! A manifest names a module and lists the references of the modules it
//! depends on. Dependencies may be written either as a list:
//!
//! ```yaml
//! name: blog
//! dependencies:
//!   - gh@acme/media
//!   - gh@acme/seo
//! ```
//!
//! or as a mapping whose keys are references (values are ignored):
//!
//! ```yaml
//! name: blog
//! dependencies:
//!   gh@acme/media: main
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{Result, manifest};

/// Primary manifest filename
pub const MANIFEST_FILE: &str = "module.yaml";

/// Alternate manifest filename, used when the primary one is absent
pub const MANIFEST_FILE_ALT: &str = "module.yml";

/// Module identity and dependency references read from a manifest
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ModuleManifest {
    /// Canonical module name, also the install directory name
    pub name: String,

    /// Dependency references in declaration order
    pub dependencies: Vec<String>,

    /// Module description
    pub description: Option<String>,

    /// Module version (informational only)
    pub version: Option<String>,
}

/// Raw manifest shape as written on disk
#[derive(Debug, Default, Deserialize)]
struct RawManifest {
    #[serde(default)]
    name: Option<String>,

    #[serde(default)]
    description: Option<String>,

    #[serde(default)]
    version: Option<String>,

    #[serde(default)]
    dependencies: Option<RawDependencies>,
}

/// Dependencies as declared: a list of references or a mapping keyed by them
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawDependencies {
    Sequence(Vec<String>),
    Mapping(serde_yaml::Mapping),
}

impl RawDependencies {
    fn into_references(self, location: &str) -> Result<Vec<String>> {
        match self {
            RawDependencies::Sequence(references) => Ok(references),
            RawDependencies::Mapping(mapping) => mapping
                .into_iter()
                .map(|(key, _)| match key {
                    serde_yaml::Value::String(reference) => Ok(reference),
                    other => Err(manifest::invalid(
                        location,
                        format!("dependency keys must be strings, found {other:?}"),
                    )),
                })
                .collect(),
        }
    }
}

impl ModuleManifest {
    /// Parse a manifest from YAML
    ///
    /// `location` is only used to label errors.
    pub fn from_yaml(yaml: &str, location: &str) -> Result<Self> {
        let value: serde_yaml::Value = serde_yaml::from_str(yaml)
            .map_err(|e| manifest::invalid(location, e.to_string()))?;

        let raw: RawManifest = if value.is_null() {
            RawManifest::default()
        } else {
            serde_yaml::from_value(value).map_err(|e| manifest::invalid(location, e.to_string()))?
        };

        let name = raw
            .name
            .map(|n| n.trim().to_string())
            .filter(|n| !n.is_empty())
            .ok_or_else(|| manifest::invalid(location, "missing 'name'"))?;
        if !is_valid_name(&name) {
            return Err(manifest::invalid(
                location,
                format!("'{name}' is not a valid module name; names must be a single path segment"),
            ));
        }

        let dependencies = match raw.dependencies {
            Some(deps) => deps.into_references(location)?,
            None => Vec::new(),
        };

        Ok(Self {
            name,
            dependencies,
            description: raw.description,
            version: raw.version,
        })
    }
}

/// Module names become a directory under `src/modules`, so one plain segment
fn is_valid_name(name: &str) -> bool {
    !matches!(name, "." | "..") && !name.contains(['/', '\\'])
}

/// Locate the manifest file in a directory, preferring `module.yaml`
pub fn find_manifest(dir: &Path) -> Option<PathBuf> {
    [MANIFEST_FILE, MANIFEST_FILE_ALT]
        .iter()
        .map(|file| dir.join(file))
        .find(|path| path.is_file())
}

/// Read the manifest of the module rooted at `dir`
///
/// Fails with `ManifestNotFound` when neither manifest file exists and with
/// `ManifestInvalid` when the file cannot be parsed or has no name.
pub fn read_manifest(dir: &Path) -> Result<ModuleManifest> {
    let path = find_manifest(dir).ok_or_else(|| manifest::not_found(dir.display().to_string()))?;
    let location = path.display().to_string();

    let content = fs::read_to_string(&path).map_err(|e| manifest::invalid(&location, e.to_string()))?;
    ModuleManifest::from_yaml(&content, &location)
}
