//! Rule requiring compact tables.
//!
//! Every `<Table>` must carry `size="small"` (or `size={"small"}`). A missing
//! attribute, a different literal or a non-literal expression all count.
//!
//! # Suppression
//!
//! `// ui-check: allow table-size`

use archcheck_core::{FileContext, Violation};
use archcheck_tsx::{Ancestors, Element, ElementRule};

/// Rule code for table-size.
pub const CODE: &str = "UI001";

/// Rule name for table-size.
pub const NAME: &str = "table-size";

/// Requires `size="small"` on every `Table`.
#[derive(Debug, Clone, Default)]
pub struct TableSize;

impl TableSize {
    /// Creates the rule.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl ElementRule for TableSize {
    fn name(&self) -> &'static str {
        NAME
    }

    fn code(&self) -> &'static str {
        CODE
    }

    fn description(&self) -> &'static str {
        "Tables must declare size=\"small\""
    }

    fn applies_to(&self, _ctx: &FileContext<'_>, element: &Element) -> bool {
        element.is("Table")
    }

    fn check(
        &self,
        ctx: &FileContext<'_>,
        element: &Element,
        _ancestors: &Ancestors<'_>,
    ) -> Vec<Violation> {
        if element.string_attribute("size") == Some("small") {
            return Vec::new();
        }
        vec![self.violation(
            ctx.location(element.position),
            "Table must declare size=\"small\".".to_string(),
        )]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{messages, positions, run_element, COMPONENT};

    #[test]
    fn test_missing_size() {
        let v = run_element(TableSize::new(), COMPONENT, "const t = <Table dataSource={rows} />;");
        assert_eq!(messages(&v), vec!["Table must declare size=\"small\"."]);
        assert_eq!(positions(&v), vec![(1, 11)]);
        assert_eq!(v[0].code, CODE);
    }

    #[test]
    fn test_small_size_passes() {
        let v = run_element(TableSize::new(), COMPONENT, "const t = <Table size=\"small\" />;");
        assert!(v.is_empty());
        let v = run_element(TableSize::new(), COMPONENT, "const t = <Table size={\"small\"} />;");
        assert!(v.is_empty());
    }

    #[test]
    fn test_other_sizes_fail() {
        let v = run_element(TableSize::new(), COMPONENT, "const t = <Table size=\"large\" />;");
        assert_eq!(v.len(), 1);
        let v = run_element(TableSize::new(), COMPONENT, "const t = <Table size={size} />;");
        assert_eq!(v.len(), 1);
    }

    #[test]
    fn test_suppressed() {
        let text = "// ui-check: allow table-size\nconst t = <Table />;";
        assert!(run_element(TableSize::new(), COMPONENT, text).is_empty());
    }
}
