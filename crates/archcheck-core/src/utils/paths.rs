//! Path utilities for scope decisions.
//!
//! Scope checks work on `/`-separated strings so that the same configuration
//! behaves identically on every platform.

use std::path::Path;

/// Converts a path to a `/`-separated string.
///
/// # Example
///
/// ```ignore
/// assert_eq!(normalize_path(Path::new(r"apps\frontend\src\App.tsx")), "apps/frontend/src/App.tsx");
/// ```
#[must_use]
pub fn normalize_path(path: &Path) -> String {
    path.to_string_lossy().replace('\\', "/")
}

/// Trims a configured directory down to its `/`-separated form without a trailing slash.
#[must_use]
pub fn normalize_dir(dir: &str) -> String {
    dir.replace('\\', "/").trim_end_matches('/').to_string()
}

/// Returns true when the file's extension is one of `extensions` (given without dots).
#[must_use]
pub fn has_extension(path: &Path, extensions: &[String]) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|ext| extensions.iter().any(|allowed| allowed == ext))
}
