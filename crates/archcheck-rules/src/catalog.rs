//! The rule table, in reporting order.

use std::fmt;

use archcheck_tsx::{ElementRuleBox, FileRuleBox};
use tracing::warn;

use crate::heuristics::heuristic_rules;
use crate::{
    CardCount, DangerPopconfirm, DangerPrimary, RawElement, ScreenDivStyle, ScreenLayoutRequired,
    TableActionsAlign, TableSize,
};

/// Returns every per-element rule, in the order findings are reported for
/// one element.
#[must_use]
pub fn all_element_rules() -> Vec<ElementRuleBox> {
    vec![
        Box::new(TableSize::new()),
        Box::new(TableActionsAlign::new()),
        Box::new(DangerPopconfirm::new()),
        Box::new(DangerPrimary::new()),
        Box::new(RawElement::button()),
        Box::new(RawElement::table()),
        Box::new(ScreenDivStyle::new()),
    ]
}

/// Returns every file-level rule: structural rules first, then heuristics.
#[must_use]
pub fn all_file_rules() -> Vec<FileRuleBox> {
    let mut rules: Vec<FileRuleBox> =
        vec![Box::new(ScreenLayoutRequired::new()), Box::new(CardCount::new())];
    rules.extend(heuristic_rules());
    rules
}

/// Whether a rule runs per element or per file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleKind {
    /// Evaluated for every element during the walk.
    Element,
    /// Evaluated once per file.
    File,
}

impl fmt::Display for RuleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Element => f.pad("element"),
            Self::File => f.pad("file"),
        }
    }
}

/// Static description of a rule, for listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuleInfo {
    /// Suppression id.
    pub name: &'static str,
    /// Rule code.
    pub code: &'static str,
    /// Short description.
    pub description: &'static str,
    /// Element or file rule.
    pub kind: RuleKind,
}

/// An ordered selection of element and file rules.
pub struct RuleSet {
    /// Per-element rules.
    pub element: Vec<ElementRuleBox>,
    /// File-level rules.
    pub file: Vec<FileRuleBox>,
}

impl RuleSet {
    /// The full catalog.
    #[must_use]
    pub fn all() -> Self {
        Self {
            element: all_element_rules(),
            file: all_file_rules(),
        }
    }

    /// Keeps only the rules whose id or code is listed, preserving catalog
    /// order. Unknown entries are logged and ignored.
    #[must_use]
    pub fn only(names: &[&str]) -> Self {
        let mut set = Self::all();
        set.element
            .retain(|r| names.iter().any(|n| *n == r.name() || *n == r.code()));
        set.file
            .retain(|r| names.iter().any(|n| *n == r.name() || *n == r.code()));

        let known = Self::all().describe();
        for name in names {
            if !known.iter().any(|r| r.name == *name || r.code == *name) {
                warn!("Unknown rule: {}", name);
            }
        }
        set
    }

    /// Number of rules in the set.
    #[must_use]
    pub fn len(&self) -> usize {
        self.element.len() + self.file.len()
    }

    /// True if no rule is selected.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Describes the rules, element rules first.
    #[must_use]
    pub fn describe(&self) -> Vec<RuleInfo> {
        let element = self.element.iter().map(|r| RuleInfo {
            name: r.name(),
            code: r.code(),
            description: r.description(),
            kind: RuleKind::Element,
        });
        let file = self.file.iter().map(|r| RuleInfo {
            name: r.name(),
            code: r.code(),
            description: r.description(),
            kind: RuleKind::File,
        });
        element.chain(file).collect()
    }
}

impl Default for RuleSet {
    fn default() -> Self {
        Self::all()
    }
}
