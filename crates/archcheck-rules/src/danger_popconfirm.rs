//! Rule requiring confirmation around destructive buttons.
//!
//! A `<Button danger>` must have a `Popconfirm` somewhere among its enclosing
//! elements. Buttons rendered from attribute callbacks (for example a
//! `render` function in a `columns` array) are not part of the element tree
//! and are not checked.

use archcheck_core::{FileContext, Violation};
use archcheck_tsx::{Ancestors, Element, ElementRule};

/// Rule code for danger-popconfirm.
pub const CODE: &str = "UI003";

/// Rule name for danger-popconfirm.
pub const NAME: &str = "danger-popconfirm";

/// Requires danger buttons to be wrapped in `Popconfirm`.
#[derive(Debug, Clone, Default)]
pub struct DangerPopconfirm;

impl DangerPopconfirm {
    /// Creates the rule.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl ElementRule for DangerPopconfirm {
    fn name(&self) -> &'static str {
        NAME
    }

    fn code(&self) -> &'static str {
        CODE
    }

    fn description(&self) -> &'static str {
        "Danger buttons must be wrapped in Popconfirm"
    }

    fn applies_to(&self, _ctx: &FileContext<'_>, element: &Element) -> bool {
        element.is("Button") && element.has_attribute("danger")
    }

    fn check(
        &self,
        ctx: &FileContext<'_>,
        element: &Element,
        ancestors: &Ancestors<'_>,
    ) -> Vec<Violation> {
        if ancestors.contains("Popconfirm") {
            return Vec::new();
        }
        vec![self.violation(
            ctx.location(element.position),
            "Danger buttons must be wrapped in Popconfirm.".to_string(),
        )]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{messages, positions, run_element, COMPONENT};

    #[test]
    fn test_wrapped_button_passes() {
        let text = r#"const b = (
  <Popconfirm title="Delete?">
    <Space>
      <Button danger>Delete</Button>
    </Space>
  </Popconfirm>
);"#;
        assert!(run_element(DangerPopconfirm::new(), COMPONENT, text).is_empty());
    }

    #[test]
    fn test_unwrapped_button_reported_once() {
        let text = "const b = (\n  <Space>\n    <Button danger onClick={remove}>Delete</Button>\n  </Space>\n);";
        let v = run_element(DangerPopconfirm::new(), COMPONENT, text);
        assert_eq!(messages(&v), vec!["Danger buttons must be wrapped in Popconfirm."]);
        assert_eq!(positions(&v), vec![(3, 5)]);
    }

    #[test]
    fn test_sibling_popconfirm_does_not_leak() {
        let text = "const b = <div><Popconfirm><Button danger /></Popconfirm><Button danger /></div>;";
        let v = run_element(DangerPopconfirm::new(), COMPONENT, text);
        assert_eq!(positions(&v), vec![(1, 58)]);
    }

    #[test]
    fn test_button_in_column_render_is_not_checked() {
        let text = "const t = <Table size=\"small\" columns={[{ title: \"Actions\", align: \"right\", render: () => <Button danger onClick={drop} /> }]} />;";
        assert!(run_element(DangerPopconfirm::new(), COMPONENT, text).is_empty());
    }

    #[test]
    fn test_plain_button_ignored() {
        let text = "const b = <Button type=\"primary\">Save</Button>;";
        assert!(run_element(DangerPopconfirm::new(), COMPONENT, text).is_empty());
    }
}
