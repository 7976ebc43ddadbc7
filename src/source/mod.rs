//! Module reference handling
//!
//! This module turns user- and manifest-supplied module references into
//! canonical repository URLs:
//! - GitHub shorthand: `gh@owner/repo` -> `https://github.com/owner/repo.git`
//! - Explicit URLs: `https://host/owner/repo` -> `https://host/owner/repo.git`
//! - Embedded subpaths: `gh@owner/repo//packages/core`
//! - Local paths: `/abs/path`, `./rel`, `../rel`, `file:...`, `~/path` (never suffixed)
//!
//! ## Module Organization
//!
//! - `repository.rs`: `ResolvedRepository` and the parsing rules

pub mod repository;

pub use repository::ResolvedRepository;

use crate::error::Result;

/// Shorthand prefix for GitHub-hosted repositories
pub const GITHUB_SHORTHAND: &str = "gh@";

/// Base URL the shorthand expands to
pub const GITHUB_BASE_URL: &str = "https://github.com/";

/// Conventional suffix of remote repository URLs
pub const REPO_SUFFIX: &str = ".git";

/// Separator between a repository URL and a subpath inside it
pub const SUBPATH_SEPARATOR: &str = "//";

/// Resolve a module reference into its structured form
pub fn resolve(reference: &str) -> Result<ResolvedRepository> {
    ResolvedRepository::parse(reference)
}

/// Resolve a module reference into its canonical string form
///
/// Returns `repo_url` or `repo_url//sub_path`. Resolving the result again
/// yields the same string.
pub fn resolve_url(reference: &str) -> Result<String> {
    Ok(resolve(reference)?.to_string())
}

/// Strip one trailing repository suffix so origins can be compared
///
/// `https://host/foo.git` and `https://host/foo` compare equal after this.
pub fn without_suffix(url: &str) -> &str {
    url.strip_suffix(REPO_SUFFIX).unwrap_or(url)
}
