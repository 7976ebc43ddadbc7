//! Resolved repository model
//!
//! A `ResolvedRepository` is the canonical form of a module reference: the
//! repository URL used for cloning and cycle detection, plus an optional
//! subpath where the module manifest lives.

use std::fmt;
use std::path::{Component, Path};

use super::{GITHUB_BASE_URL, GITHUB_SHORTHAND, REPO_SUFFIX, SUBPATH_SEPARATOR};
use crate::error::{Result, source::invalid_reference};

/// Prefixes that mark a reference as a local path
const LOCAL_PREFIXES: [&str; 5] = ["/", "./", "../", "file:", "~"];

/// A module reference resolved into repository URL and subpath
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ResolvedRepository {
    /// Canonical repository URL (suffixed with `.git` when remote)
    pub repo_url: String,

    /// Path inside the repository where the manifest lives
    pub sub_path: Option<String>,

    /// Whether the repository lives on the local filesystem
    pub is_local: bool,
}

impl ResolvedRepository {
    /// Parse a module reference
    ///
    /// Supported formats:
    /// - `gh@owner/repo` and `gh@owner/repo//sub/path`
    /// - `<scheme>://host/path[.git][//sub/path]`
    /// - `/abs`, `./rel`, `../rel`, `file:...`, `~...`
    pub fn parse(reference: &str) -> Result<Self> {
        if reference.is_empty() {
            return Err(invalid_reference(reference, "reference cannot be empty"));
        }

        let expanded = match reference.strip_prefix(GITHUB_SHORTHAND) {
            Some(rest) => format!("{GITHUB_BASE_URL}{rest}"),
            None => reference.to_string(),
        };

        let (repo_part, sub_path) = split_subpath(&expanded);
        if repo_part.is_empty() {
            return Err(invalid_reference(reference, "repository URL is missing"));
        }
        if sub_path.is_some_and(escapes_repository) {
            return Err(invalid_reference(
                reference,
                "subpath must be relative and stay inside the repository",
            ));
        }

        let is_local = is_local_url(repo_part);
        let repo_url = if is_local || repo_part.ends_with(REPO_SUFFIX) {
            repo_part.to_string()
        } else {
            format!("{repo_part}{REPO_SUFFIX}")
        };

        Ok(Self {
            repo_url,
            sub_path: sub_path.map(str::to_string),
            is_local,
        })
    }

    /// Human-readable location of the manifest, used in error messages
    pub fn location(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for ResolvedRepository {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.sub_path {
            Some(sub_path) => write!(f, "{}{SUBPATH_SEPARATOR}{sub_path}", self.repo_url),
            None => f.write_str(&self.repo_url),
        }
    }
}

/// Length of a leading `<scheme>://` token, if the input starts with one
fn protocol_len(input: &str) -> Option<usize> {
    let idx = input.find("://")?;
    let scheme = &input[..idx];
    if !scheme.is_empty() && scheme.chars().all(|c| c.is_ascii_alphanumeric()) {
        Some(idx + 3)
    } else {
        None
    }
}

/// Split at the first `//` that is not part of the protocol
///
/// An empty subpath (`repo//`) is treated as no subpath.
fn split_subpath(input: &str) -> (&str, Option<&str>) {
    let search_from = protocol_len(input).unwrap_or(0);
    match input[search_from..].find(SUBPATH_SEPARATOR) {
        Some(offset) => {
            let split = search_from + offset;
            let sub_path = &input[split + SUBPATH_SEPARATOR.len()..];
            (&input[..split], (!sub_path.is_empty()).then_some(sub_path))
        }
        None => (input, None),
    }
}

/// Whether a subpath is absolute or climbs out of the repository root
fn escapes_repository(sub_path: &str) -> bool {
    sub_path.contains('\\')
        || Path::new(sub_path)
            .components()
            .any(|c| !matches!(c, Component::Normal(_) | Component::CurDir))
}

/// Whether a repository URL points at the local filesystem
pub fn is_local_url(url: &str) -> bool {
    LOCAL_PREFIXES.iter().any(|prefix| url.starts_with(prefix))
}
