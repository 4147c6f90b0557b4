//! Rule forbidding ad-hoc `div` layout in screens.
//!
//! Screens compose layout from `ScreenLayout` and Ant components. A `<div>`
//! in a screen file is reported when:
//!
//! - its `className` string literal contains `page`
//! - its `style={{ ... }}` object literal sets `display` to `"flex"` or `"grid"`
//! - its style object has any `padding*` or `margin*` property (one finding
//!   per property)
//!
//! Findings for style properties follow their source order.

use archcheck_core::{FileContext, Violation};
use archcheck_tsx::{Ancestors, Element, ElementRule, Expr};

/// Rule code for raw-div.
pub const CODE: &str = "UI006";

/// Rule name for raw-div.
pub const NAME: &str = "raw-div";

/// Forbids layout styling on raw `div`s in screen files.
#[derive(Debug, Clone, Default)]
pub struct ScreenDivStyle;

impl ScreenDivStyle {
    /// Creates the rule.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl ElementRule for ScreenDivStyle {
    fn name(&self) -> &'static str {
        NAME
    }

    fn code(&self) -> &'static str {
        CODE
    }

    fn description(&self) -> &'static str {
        "Screens must not lay out with raw div classes or styles"
    }

    fn applies_to(&self, ctx: &FileContext<'_>, element: &Element) -> bool {
        ctx.is_screen && element.is("div")
    }

    fn check(
        &self,
        ctx: &FileContext<'_>,
        element: &Element,
        _ancestors: &Ancestors<'_>,
    ) -> Vec<Violation> {
        let location = ctx.location(element.position);
        let mut messages = Vec::new();

        if element
            .string_attribute("className")
            .is_some_and(|class| class.contains("page"))
        {
            messages.push("Screen layout must not use div className \"page\".");
        }

        let style = element
            .attribute("style")
            .and_then(|a| a.value.as_ref())
            .and_then(Expr::as_object)
            .unwrap_or_default();

        for property in style {
            if property.name == "display"
                && matches!(property.value.as_str(), Some("flex" | "grid"))
            {
                messages.push("Screen layout must not use div display flex/grid.");
            }
            if property.name.starts_with("padding") || property.name.starts_with("margin") {
                messages.push("Screen layout must not use div padding/margin styles.");
            }
        }

        messages
            .into_iter()
            .map(|message| self.violation(location.clone(), message.to_string()))
            .collect()
    }
}
