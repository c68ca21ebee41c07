//! Path utilities.

use std::path::PathBuf;

/// Expand a leading `~` (alone or as `~/...`) to the home directory.
pub fn expand_tilde(path: &str) -> PathBuf {
    match path {
        "~" => dirs::home_dir().unwrap_or_else(|| PathBuf::from(path)),
        p if p.starts_with("~/") => match dirs::home_dir() {
            Some(h) => h.join(&p[2..]),
            None => PathBuf::from(p),
        },
        p => PathBuf::from(p),
    }
}
