//! URL normalization for git invocations
//!
//! This module handles:
//! - Expanding `~` in local repository paths (git does not do this itself)
//! - Deciding whether a URL needs the file protocol enabled for submodules

use std::borrow::Cow;

use crate::source::repository::is_local_url;

/// Expand a leading `~` or `~/` to the user's home directory.
///
/// URLs without a leading `~`, or when the home directory is unknown, are
/// returned unchanged.
pub fn expand_home(url: &str) -> Cow<'_, str> {
    let Some(rest) = url.strip_prefix('~') else {
        return Cow::Borrowed(url);
    };
    if !(rest.is_empty() || rest.starts_with('/')) {
        return Cow::Borrowed(url);
    }
    match dirs::home_dir() {
        Some(home) => Cow::Owned(format!("{}{rest}", home.display())),
        None => Cow::Borrowed(url),
    }
}

/// Whether `git submodule add` needs `protocol.file.allow=always` for this URL.
///
/// Recent git versions refuse file-transport submodules by default.
pub fn needs_file_protocol(url: &str) -> bool {
    is_local_url(url)
}
