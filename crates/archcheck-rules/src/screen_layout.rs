//! Rule requiring screens to render through `ScreenLayout`.

use archcheck_core::{FileContext, Violation};
use archcheck_tsx::{FileRule, SyntaxTree};

/// Rule code for screen-layout.
pub const CODE: &str = "UI101";

/// Rule name for screen-layout.
pub const NAME: &str = "screen-layout";

/// Requires at least one `<ScreenLayout>` element in every screen file.
#[derive(Debug, Clone, Default)]
pub struct ScreenLayoutRequired;

impl ScreenLayoutRequired {
    /// Creates the rule.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl FileRule for ScreenLayoutRequired {
    fn name(&self) -> &'static str {
        NAME
    }

    fn code(&self) -> &'static str {
        CODE
    }

    fn description(&self) -> &'static str {
        "Screens must use <ScreenLayout>"
    }

    fn applies_to(&self, ctx: &FileContext<'_>) -> bool {
        ctx.is_screen
    }

    fn check_file(&self, ctx: &FileContext<'_>, tree: &SyntaxTree) -> Vec<Violation> {
        if tree.contains_tag("ScreenLayout") {
            return Vec::new();
        }
        vec![self.violation(
            ctx.file_location(),
            "Screens must use <ScreenLayout>.".to_string(),
        )]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{messages, positions, run_file, COMPONENT, SCREEN};

    #[test]
    fn test_missing_layout() {
        let v = run_file(ScreenLayoutRequired::new(), SCREEN, "export const S = () => <Card />;");
        assert_eq!(messages(&v), vec!["Screens must use <ScreenLayout>."]);
        assert_eq!(positions(&v), vec![(1, 1)]);
    }

    #[test]
    fn test_nested_layout_counts() {
        let text = "export const S = () => <ErrorBoundary><ScreenLayout title=\"x\" /></ErrorBoundary>;";
        assert!(run_file(ScreenLayoutRequired::new(), SCREEN, text).is_empty());
    }

    #[test]
    fn test_only_screens() {
        assert!(run_file(ScreenLayoutRequired::new(), COMPONENT, "export const x = 1;").is_empty());
    }
}
