//! Rule forbidding primary styling on destructive buttons.

use archcheck_core::{FileContext, Violation};
use archcheck_tsx::{Ancestors, Element, ElementRule};

/// Rule code for danger-primary.
pub const CODE: &str = "UI004";

/// Rule name for danger-primary.
pub const NAME: &str = "danger-primary";

/// Forbids `type="primary"` on `<Button danger>`.
#[derive(Debug, Clone, Default)]
pub struct DangerPrimary;

impl DangerPrimary {
    /// Creates the rule.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl ElementRule for DangerPrimary {
    fn name(&self) -> &'static str {
        NAME
    }

    fn code(&self) -> &'static str {
        CODE
    }

    fn description(&self) -> &'static str {
        "Danger buttons must not use type=\"primary\""
    }

    fn applies_to(&self, _ctx: &FileContext<'_>, element: &Element) -> bool {
        element.is("Button") && element.has_attribute("danger")
    }

    fn check(
        &self,
        ctx: &FileContext<'_>,
        element: &Element,
        _ancestors: &Ancestors<'_>,
    ) -> Vec<Violation> {
        if element.string_attribute("type") != Some("primary") {
            return Vec::new();
        }
        vec![self.violation(
            ctx.location(element.position),
            "Danger buttons must not use type=\"primary\".".to_string(),
        )]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{messages, run_element, COMPONENT};

    #[test]
    fn test_primary_danger_button() {
        let text = "const b = <Popconfirm><Button danger type=\"primary\" /></Popconfirm>;";
        let v = run_element(DangerPrimary::new(), COMPONENT, text);
        assert_eq!(messages(&v), vec!["Danger buttons must not use type=\"primary\"."]);
    }

    #[test]
    fn test_non_danger_primary_passes() {
        let text = "const b = <Button type=\"primary\" />;";
        assert!(run_element(DangerPrimary::new(), COMPONENT, text).is_empty());
    }

    #[test]
    fn test_default_type_passes() {
        let text = "const b = <Button danger type={kind} />;";
        assert!(run_element(DangerPrimary::new(), COMPONENT, text).is_empty());
    }
}
