//! `~` expansion for paths taken from the config file or the command line.

use std::path::{MAIN_SEPARATOR, PathBuf};

/// Expand a leading `~` (alone, or followed by `/` or the platform separator).
/// `~user` forms and paths without a home directory are returned unchanged.
pub fn expand_tilde(path: &str) -> PathBuf {
    let Some(rest) = path.strip_prefix('~') else {
        return PathBuf::from(path);
    };

    let rest = match rest.chars().next() {
        None => "",
        Some(c) if c == '/' || c == MAIN_SEPARATOR => &rest[c.len_utf8()..],
        Some(_) => return PathBuf::from(path),
    };

    match dirs::home_dir() {
        Some(home) if rest.is_empty() => home,
        Some(home) => home.join(rest),
        None => PathBuf::from(path),
    }
}
