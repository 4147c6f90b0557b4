//! Context types for rule execution.

use std::path::{Path, PathBuf};

use crate::config::CompositionConfig;
use crate::types::{Location, Position};
use crate::utils::allowance::RuleAllowance;
use crate::utils::paths::normalize_path;

/// One input file: its path, an immutable text snapshot, and its suppressions.
#[derive(Debug, Clone)]
pub struct SourceFile {
    /// Path exactly as supplied by the caller.
    pub path: PathBuf,
    /// File contents.
    pub text: String,
    /// Rule ids suppressed by `ui-check: allow` directives in `text`.
    pub allowance: RuleAllowance,
}

impl SourceFile {
    /// Creates a source file, extracting its suppression directives.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>, text: impl Into<String>) -> Self {
        let text = text.into();
        let allowance = RuleAllowance::parse(&text);
        Self {
            path: path.into(),
            text,
            allowance,
        }
    }

    /// Returns the path with `/` separators.
    #[must_use]
    pub fn normalized_path(&self) -> String {
        normalize_path(&self.path)
    }
}

/// Context provided to composition rules.
///
/// Contains metadata about the file being analyzed that rules use to make
/// scope decisions (e.g., screen-only rules).
#[derive(Debug, Clone)]
pub struct FileContext<'a> {
    /// Path exactly as supplied by the caller.
    pub path: &'a Path,
    /// File contents as a string.
    pub content: &'a str,
    /// Path with `/` separators.
    pub normalized_path: String,
    /// Suppressed rule ids for this file.
    pub allowance: &'a RuleAllowance,
    /// Whether this file lies in the screens directory.
    pub is_screen: bool,
    /// Maximum number of `Card` elements allowed in a screen.
    pub max_cards: usize,
}

impl<'a> FileContext<'a> {
    /// Creates a new file context.
    #[must_use]
    pub fn new(source: &'a SourceFile, composition: &CompositionConfig) -> Self {
        Self {
            path: &source.path,
            content: &source.text,
            normalized_path: source.normalized_path(),
            allowance: &source.allowance,
            is_screen: composition.is_screen(&source.path),
            max_cards: composition.max_cards,
        }
    }

    /// Returns true if `rule` is suppressed in this file.
    #[must_use]
    pub fn allows(&self, rule: &str) -> bool {
        self.allowance.allows(rule)
    }

    /// Returns true if the normalized path ends with `suffix`.
    #[must_use]
    pub fn path_ends_with(&self, suffix: &str) -> bool {
        self.normalized_path.ends_with(suffix)
    }

    /// Builds a location in this file.
    #[must_use]
    pub fn location(&self, position: Position) -> Location {
        Location::at(self.path, position)
    }

    /// Location used by file-level findings.
    #[must_use]
    pub fn file_location(&self) -> Location {
        self.location(Position::FILE_START)
    }
}
