//! Rules forbidding raw HTML elements that have Ant Design counterparts.
//!
//! Matching is on the exact lower-case tag, so `<Button>` and `<Table>` are
//! unaffected. `raw-table` also covers `<alert>`, so one suppression id
//! allows both.

use archcheck_core::{FileContext, Violation};
use archcheck_tsx::{Ancestors, Element, ElementRule};

/// Rule code shared by the raw-element rules.
pub const CODE: &str = "UI005";

/// Forbids a group of raw HTML tags under one suppression id.
#[derive(Debug, Clone)]
pub struct RawElement {
    tags: &'static [&'static str],
    name: &'static str,
}

impl RawElement {
    /// `raw-button`: forbids `<button>`.
    #[must_use]
    pub fn button() -> Self {
        Self {
            tags: &["button"],
            name: "raw-button",
        }
    }

    /// `raw-table`: forbids `<table>` and `<alert>`.
    #[must_use]
    pub fn table() -> Self {
        Self {
            tags: &["table", "alert"],
            name: "raw-table",
        }
    }
}

impl ElementRule for RawElement {
    fn name(&self) -> &'static str {
        self.name
    }

    fn code(&self) -> &'static str {
        CODE
    }

    fn description(&self) -> &'static str {
        "Use Ant components instead of raw HTML elements"
    }

    fn applies_to(&self, _ctx: &FileContext<'_>, element: &Element) -> bool {
        self.tags.iter().any(|tag| element.is(tag))
    }

    fn check(
        &self,
        ctx: &FileContext<'_>,
        element: &Element,
        _ancestors: &Ancestors<'_>,
    ) -> Vec<Violation> {
        vec![self.violation(
            ctx.location(element.position),
            format!("Use Ant component instead of raw <{}>.", element.tag),
        )]
    }
}
