//! Path utilities: expand ~, check input extensions.

use std::path::{Path, PathBuf};

/// Spreadsheet extensions accepted as input.
pub const ALLOWED_EXTENSIONS: [&str; 3] = ["xlsx", "xls", "xlsm"];

pub fn expand_tilde(path: &str) -> PathBuf {
    if path.starts_with("~/")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(path.trim_start_matches("~/"));
    }
    PathBuf::from(path)
}

pub fn has_allowed_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| {
            ALLOWED_EXTENSIONS
                .iter()
                .any(|allowed| e.eq_ignore_ascii_case(allowed))
        })
        .unwrap_or(false)
}
