//! Core types for violations and run reports.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Which rule family produced a violation.
///
/// The tag strings are scraped by CI and must not change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Subsystem {
    /// AST-based composition rules.
    Composition,
    /// Textual module-boundary scanner.
    Boundary,
}

impl Subsystem {
    /// Returns the bracketed tag printed in front of each violation line.
    #[must_use]
    pub fn tag(self) -> &'static str {
        match self {
            Self::Composition => "UI CHECK",
            Self::Boundary => "ARCH VIOLATION",
        }
    }
}

impl std::fmt::Display for Subsystem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.tag())
    }
}

/// A 1-indexed position inside a source file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Position {
    /// Line number (1-indexed).
    pub line: usize,
    /// Column number (1-indexed, UTF-16 code units).
    pub column: usize,
}

impl Position {
    /// The start of a file, used by file-level findings.
    pub const FILE_START: Self = Self { line: 1, column: 1 };

    /// Creates a new position.
    #[must_use]
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

/// Source code location.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Location {
    /// File path exactly as it was supplied by the caller.
    pub file: PathBuf,
    /// Line number (1-indexed).
    pub line: usize,
    /// Column number (1-indexed).
    pub column: usize,
}

impl Location {
    /// Creates a new location with explicit values.
    #[must_use]
    pub fn new(file: impl Into<PathBuf>, line: usize, column: usize) -> Self {
        Self {
            file: file.into(),
            line,
            column,
        }
    }

    /// Creates a location from a [`Position`].
    #[must_use]
    pub fn at(file: impl Into<PathBuf>, position: Position) -> Self {
        Self::new(file, position.line, position.column)
    }
}

/// A finding produced by either rule family.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Violation {
    /// Rule code (e.g., "UI001").
    pub code: String,
    /// Rule id, also the suppression token (e.g., "table-size").
    pub rule: String,
    /// Rule family that produced this violation.
    pub subsystem: Subsystem,
    /// Primary location of the violation.
    pub location: Location,
    /// Human-readable message.
    pub message: String,
}

impl Violation {
    /// Creates a new violation.
    #[must_use]
    pub fn new(
        code: impl Into<String>,
        rule: impl Into<String>,
        subsystem: Subsystem,
        location: Location,
        message: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            rule: rule.into(),
            subsystem,
            location,
            message: message.into(),
        }
    }
}

impl std::fmt::Display for Violation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "[{}] {}:{}:{} {}",
            self.subsystem.tag(),
            self.location.file.display(),
            self.location.line,
            self.location.column,
            self.message
        )
    }
}

/// Result of one checker run.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Report {
    /// All violations, in discovery order.
    pub violations: Vec<Violation>,
    /// Number of files checked.
    pub files_checked: usize,
}

impl Report {
    /// Creates a new empty report.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if any violation was found.
    #[must_use]
    pub fn has_violations(&self) -> bool {
        !self.violations.is_empty()
    }

    /// Process exit status for this report.
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        i32::from(self.has_violations())
    }

    /// Counts violations per rule family as `(composition, boundary)`.
    #[must_use]
    pub fn count_by_subsystem(&self) -> (usize, usize) {
        let composition = self
            .violations
            .iter()
            .filter(|v| v.subsystem == Subsystem::Composition)
            .count();
        (composition, self.violations.len() - composition)
    }

    /// Reorders violations by file, then line, then column.
    ///
    /// The sort is stable, so violations sharing a position keep discovery order.
    pub fn sort(&mut self) {
        self.violations.sort_by(|a, b| {
            a.location
                .file
                .cmp(&b.location.file)
                .then(a.location.line.cmp(&b.location.line))
                .then(a.location.column.cmp(&b.location.column))
        });
    }

    /// Formats every violation as one line, in report order.
    #[must_use]
    pub fn format_lines(&self) -> String {
        use std::fmt::Write;
        let mut output = String::new();
        for violation in &self.violations {
            let _ = writeln!(output, "{violation}");
        }
        output
    }

    /// Adds violations from another report.
    pub fn extend(&mut self, other: Self) {
        self.violations.extend(other.violations);
        self.files_checked += other.files_checked;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_violation(subsystem: Subsystem, file: &str, line: usize, column: usize) -> Violation {
        Violation::new(
            "UI001",
            "table-size",
            subsystem,
            Location::new(file, line, column),
            "Table must declare size=\"small\".",
        )
    }

    #[test]
    fn display_uses_subsystem_tag() {
        let v = make_violation(Subsystem::Composition, "apps/frontend/src/A.tsx", 4, 7);
        assert_eq!(
            v.to_string(),
            "[UI CHECK] apps/frontend/src/A.tsx:4:7 Table must declare size=\"small\"."
        );
    }

    #[test]
    fn boundary_tag_is_stable() {
        assert_eq!(Subsystem::Boundary.tag(), "ARCH VIOLATION");
        assert_eq!(Subsystem::Composition.tag(), "UI CHECK");
    }

    #[test]
    fn empty_report_exits_zero() {
        let report = Report::new();
        assert!(!report.has_violations());
        assert_eq!(report.exit_code(), 0);
        assert_eq!(report.format_lines(), "");
    }

    #[test]
    fn any_violation_exits_non_zero() {
        let mut report = Report::new();
        report
            .violations
            .push(make_violation(Subsystem::Boundary, "a.ts", 1, 1));
        assert_eq!(report.exit_code(), 1);
        assert_eq!(report.count_by_subsystem(), (0, 1));
    }

    #[test]
    fn sort_orders_by_file_line_column() {
        let mut report = Report::new();
        report
            .violations
            .push(make_violation(Subsystem::Composition, "b.tsx", 1, 1));
        report
            .violations
            .push(make_violation(Subsystem::Composition, "a.tsx", 9, 2));
        report
            .violations
            .push(make_violation(Subsystem::Composition, "a.tsx", 9, 1));
        report.sort();

        let order: Vec<(String, usize, usize)> = report
            .violations
            .iter()
            .map(|v| {
                (
                    v.location.file.display().to_string(),
                    v.location.line,
                    v.location.column,
                )
            })
            .collect();
        assert_eq!(
            order,
            vec![
                ("a.tsx".to_string(), 9, 1),
                ("a.tsx".to_string(), 9, 2),
                ("b.tsx".to_string(), 1, 1),
            ]
        );
    }

    #[test]
    fn format_lines_snapshot() {
        let mut report = Report::new();
        report.violations.push(make_violation(
            Subsystem::Composition,
            "apps/frontend/src/screens/Overview.tsx",
            12,
            5,
        ));
        report.violations.push(Violation::new(
            "AB001",
            "forbidden-token",
            Subsystem::Boundary,
            Location::new("apps/frontend/src/api.ts", 3, 20),
            "imports forbidden module: apps/backend",
        ));

        insta::assert_snapshot!(report.format_lines().trim_end(), @r#"
        [UI CHECK] apps/frontend/src/screens/Overview.tsx:12:5 Table must declare size="small".
        [ARCH VIOLATION] apps/frontend/src/api.ts:3:20 imports forbidden module: apps/backend
        "#);
    }

    #[test]
    fn extend_accumulates() {
        let mut a = Report::new();
        a.files_checked = 2;
        let mut b = Report::new();
        b.files_checked = 3;
        b.violations
            .push(make_violation(Subsystem::Composition, "x.tsx", 1, 1));
        a.extend(b);
        assert_eq!(a.files_checked, 5);
        assert_eq!(a.violations.len(), 1);
    }
}
