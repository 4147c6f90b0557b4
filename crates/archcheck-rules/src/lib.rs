//! # archcheck-rules
//!
//! Built-in UI composition rules for archcheck.
//!
//! ## Available Rules
//!
//! | Code | Name | Description |
//! |------|------|-------------|
//! | UI001 | `table-size` | Tables must declare `size="small"` |
//! | UI002 | `table-actions-align` | Actions columns must be right-aligned |
//! | UI003 | `danger-popconfirm` | Danger buttons must sit inside `Popconfirm` |
//! | UI004 | `danger-primary` | Danger buttons must not be primary |
//! | UI005 | `raw-button`, `raw-table` | Use Ant components instead of raw tags (`raw-table` covers `<alert>`) |
//! | UI006 | `raw-div` | Screens must not lay out with raw `div` styling |
//! | UI101 | `screen-layout` | Screens must use `<ScreenLayout>` |
//! | UI102 | `card-count` | Screens must not exceed the `Card` limit |
//! | UI201 | `activation-scope` | Filename heuristic for `SimulatorTable.tsx` |
//! | UI202 | `no-actions-alert` | Filename heuristic for `SimulatorActions.tsx` |
//! | UI203 | `error-dominance` | Filename heuristic for `SimulatorManagement.tsx` |
//!
//! ## Usage
//!
//! ```ignore
//! use archcheck_rules::RuleSet;
//! use archcheck_tsx::CompositionEngine;
//!
//! let rules = RuleSet::all();
//! let engine = CompositionEngine::builder()
//!     .element_rules(rules.element)
//!     .file_rules(rules.file)
//!     .build();
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod card_count;
mod catalog;
mod danger_popconfirm;
mod danger_primary;
mod heuristics;
mod raw_element;
mod screen_div_style;
mod screen_layout;
mod table_actions_align;
mod table_size;

pub use card_count::CardCount;
pub use catalog::{all_element_rules, all_file_rules, RuleInfo, RuleKind, RuleSet};
pub use danger_popconfirm::DangerPopconfirm;
pub use danger_primary::DangerPrimary;
pub use heuristics::{heuristic_rules, FilenameHeuristic, Heuristic, HEURISTICS};
pub use raw_element::RawElement;
pub use screen_div_style::ScreenDivStyle;
pub use screen_layout::ScreenLayoutRequired;
pub use table_actions_align::TableActionsAlign;
pub use table_size::TableSize;

/// Re-export core types for convenience.
pub use archcheck_core::Violation;
pub use archcheck_tsx::{ElementRule, FileRule};

#[cfg(test)]
pub(crate) mod test_support {
    use archcheck_core::{SourceFile, Violation};
    use archcheck_tsx::{CompositionEngine, ElementRule, FileRule};

    pub const SCREEN: &str = "apps/frontend/src/screens/Home.tsx";
    pub const COMPONENT: &str = "apps/frontend/src/components/Panel.tsx";

    pub fn run_element<R: ElementRule + 'static>(rule: R, path: &str, text: &str) -> Vec<Violation> {
        CompositionEngine::builder()
            .element_rule(rule)
            .build()
            .check(&SourceFile::new(path, text))
            .expect("fixture parses")
    }

    pub fn run_file<R: FileRule + 'static>(rule: R, path: &str, text: &str) -> Vec<Violation> {
        CompositionEngine::builder()
            .file_rule(rule)
            .build()
            .check(&SourceFile::new(path, text))
            .expect("fixture parses")
    }

    pub fn messages(violations: &[Violation]) -> Vec<&str> {
        violations.iter().map(|v| v.message.as_str()).collect()
    }

    pub fn positions(violations: &[Violation]) -> Vec<(usize, usize)> {
        violations
            .iter()
            .map(|v| (v.location.line, v.location.column))
            .collect()
    }
}
