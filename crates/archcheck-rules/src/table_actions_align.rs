//! Rule requiring right-aligned action columns.
//!
//! Inspects the `columns={[...]}` array literal of each `<Table>`. An object
//! literal whose `title` is the string `"Actions"` must also have
//! `align: "right"`. Columns built from variables or calls are not inspected.

use archcheck_core::{FileContext, Violation};
use archcheck_tsx::{Ancestors, Element, ElementRule, Expr};

/// Rule code for table-actions-align.
pub const CODE: &str = "UI002";

/// Rule name for table-actions-align.
pub const NAME: &str = "table-actions-align";

/// Requires `align: "right"` on the Actions column of a table.
#[derive(Debug, Clone, Default)]
pub struct TableActionsAlign;

impl TableActionsAlign {
    /// Creates the rule.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl ElementRule for TableActionsAlign {
    fn name(&self) -> &'static str {
        NAME
    }

    fn code(&self) -> &'static str {
        CODE
    }

    fn description(&self) -> &'static str {
        "Actions columns must set align: \"right\""
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
        let Some(columns) = element
            .attribute("columns")
            .and_then(|a| a.value.as_ref())
            .and_then(Expr::as_array)
        else {
            return Vec::new();
        };

        columns
            .iter()
            .filter(|column| {
                column.property_is("title", "Actions") && !column.property_is("align", "right")
            })
            .map(|column| {
                self.violation(
                    ctx.location(column.position()),
                    "Actions column must set align: \"right\".".to_string(),
                )
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{messages, positions, run_element, COMPONENT};

    const TABLE: &str = r#"const t = (
  <Table
    size="small"
    columns={[
      { title: "Name", dataIndex: "name" },
      { title: "Actions", key: "actions" },
      { title: "Actions", align: "right" },
    ]}
  />
);
"#;

    #[test]
    fn test_unaligned_actions_column() {
        let v = run_element(TableActionsAlign::new(), COMPONENT, TABLE);
        assert_eq!(messages(&v), vec!["Actions column must set align: \"right\"."]);
        assert_eq!(positions(&v), vec![(6, 7)]);
    }

    #[test]
    fn test_non_literal_columns_are_ignored() {
        let text = "const t = <Table size=\"small\" columns={columns} />;";
        assert!(run_element(TableActionsAlign::new(), COMPONENT, text).is_empty());
    }

    #[test]
    fn test_align_must_be_right() {
        let text = "const t = <Table columns={[{ title: 'Actions', align: 'left' }]} />;";
        assert_eq!(run_element(TableActionsAlign::new(), COMPONENT, text).len(), 1);
    }
}
