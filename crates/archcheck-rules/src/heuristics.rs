//! Filename heuristics.
//!
//! These are raw-text regex checks keyed on a filename suffix, not structural
//! analysis. They encode a few screen-specific conventions that the element
//! tree cannot express and will occasionally misfire. Each entry reports at
//! (1, 1).

use archcheck_core::{FileContext, Violation};
use archcheck_tsx::{FileRule, FileRuleBox, SyntaxTree};
use regex::Regex;

/// One row of the heuristic table.
#[derive(Debug, Clone, Copy)]
pub struct Heuristic {
    /// Suppression id.
    pub name: &'static str,
    /// Rule code.
    pub code: &'static str,
    /// Short description for `list-rules`.
    pub description: &'static str,
    /// Normalized path suffix the heuristic applies to.
    pub suffix: &'static str,
    /// Pattern that must match the raw text.
    pub pattern: &'static str,
    /// Substring whose presence cancels the finding.
    pub unless: Option<&'static str>,
    /// Reported message.
    pub message: &'static str,
}

/// The built-in heuristics, in reporting order.
pub const HEURISTICS: &[Heuristic] = &[
    Heuristic {
        name: "activation-scope",
        code: "UI201",
        description: "SimulatorTable activation errors must be scoped per row",
        suffix: "SimulatorTable.tsx",
        pattern: r"(?s)selectSimulator.*setError\s*\(",
        unless: None,
        message: "Activation errors must be scoped per row, not global setError.",
    },
    Heuristic {
        name: "no-actions-alert",
        code: "UI202",
        description: "SimulatorActions must not render Alerts",
        suffix: "SimulatorActions.tsx",
        pattern: r"<Alert\b",
        unless: None,
        message: "SimulatorActions must not render Alerts (use operation-scoped alerts in the screen).",
    },
    Heuristic {
        name: "error-dominance",
        code: "UI203",
        description: "SimulatorManagement operation errors must suppress action errors",
        suffix: "SimulatorManagement.tsx",
        pattern: r"suppressActionErrors=\{[^}]*systemError[^}]*\}",
        unless: Some("operationError"),
        message: "Operation errors must suppress action errors (include operationError in suppressActionErrors).",
    },
];

/// A compiled [`Heuristic`].
#[derive(Debug, Clone)]
pub struct FilenameHeuristic {
    heuristic: Heuristic,
    pattern: Regex,
}

impl FilenameHeuristic {
    /// Compiles a table row.
    ///
    /// # Errors
    ///
    /// Returns an error if the pattern is not a valid regex.
    pub fn new(heuristic: Heuristic) -> Result<Self, regex::Error> {
        Ok(Self {
            pattern: Regex::new(heuristic.pattern)?,
            heuristic,
        })
    }

    /// Whether the raw text triggers this heuristic.
    #[must_use]
    pub fn matches(&self, text: &str) -> bool {
        self.pattern.is_match(text)
            && !self
                .heuristic
                .unless
                .is_some_and(|needle| text.contains(needle))
    }
}

impl FileRule for FilenameHeuristic {
    fn name(&self) -> &'static str {
        self.heuristic.name
    }

    fn code(&self) -> &'static str {
        self.heuristic.code
    }

    fn description(&self) -> &'static str {
        self.heuristic.description
    }

    fn applies_to(&self, ctx: &FileContext<'_>) -> bool {
        ctx.path_ends_with(self.heuristic.suffix)
    }

    fn check_file(&self, ctx: &FileContext<'_>, _tree: &SyntaxTree) -> Vec<Violation> {
        if !self.matches(ctx.content) {
            return Vec::new();
        }
        vec![self.violation(ctx.file_location(), self.heuristic.message.to_string())]
    }
}

/// Compiles every built-in heuristic, in table order.
#[must_use]
#[allow(clippy::expect_used)]
pub fn heuristic_rules() -> Vec<FileRuleBox> {
    HEURISTICS
        .iter()
        .map(|h| {
            let rule = FilenameHeuristic::new(*h).expect("built-in heuristic patterns are valid");
            Box::new(rule) as FileRuleBox
        })
        .collect()
}
