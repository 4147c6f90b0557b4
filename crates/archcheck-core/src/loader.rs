//! Source loading: path list in, `(path, text)` pairs out.

use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::debug;

use crate::context::SourceFile;

/// Errors that can occur while loading sources.
#[derive(Debug, Error)]
pub enum LoadError {
    /// A path could not be read as UTF-8 text.
    #[error("Failed to read {path}: {source}")]
    Read {
        /// Path that failed to read.
        path: PathBuf,
        /// Underlying IO error.
        source: std::io::Error,
    },
}

/// Reads every path, preserving input order.
///
/// Any unreadable path aborts the whole load; a missing input is an
/// environment problem, not something to skip.
///
/// # Errors
///
/// Returns [`LoadError::Read`] for the first path that cannot be read.
pub fn load_sources<P: AsRef<Path>>(paths: &[P]) -> Result<Vec<SourceFile>, LoadError> {
    paths
        .iter()
        .map(|p| {
            let path = p.as_ref();
            debug!("Loading: {}", path.display());
            let text = std::fs::read_to_string(path).map_err(|e| LoadError::Read {
                path: path.to_path_buf(),
                source: e,
            })?;
            Ok(SourceFile::new(path, text))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input() {
        let paths: Vec<PathBuf> = Vec::new();
        let sources = load_sources(&paths).expect("empty list loads");
        assert!(sources.is_empty());
    }

    #[test]
    fn test_preserves_order() {
        let dir = tempfile::tempdir().expect("tempdir");
        let b = dir.path().join("b.ts");
        let a = dir.path().join("a.ts");
        std::fs::write(&b, "b").expect("write");
        std::fs::write(&a, "a").expect("write");

        let sources = load_sources(&[&b, &a]).expect("loads");
        assert_eq!(sources[0].path, b);
        assert_eq!(sources[0].text, "b");
        assert_eq!(sources[1].path, a);
    }

    #[test]
    fn test_missing_file_is_fatal() {
        let dir = tempfile::tempdir().expect("tempdir");
        let ok = dir.path().join("ok.ts");
        std::fs::write(&ok, "").expect("write");
        let missing = dir.path().join("missing.ts");

        let err = load_sources(&[&ok, &missing]).unwrap_err();
        let LoadError::Read { path, .. } = err;
        assert_eq!(path, missing);
    }
}
