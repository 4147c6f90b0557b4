//! Rule limiting the number of `Card`s per screen.
//!
//! The limit comes from `composition.max_cards` (default 2).

use archcheck_core::{FileContext, Violation};
use archcheck_tsx::{FileRule, SyntaxTree};
use tracing::debug;

/// Rule code for card-count.
pub const CODE: &str = "UI102";

/// Rule name for card-count.
pub const NAME: &str = "card-count";

/// Caps `<Card>` elements per screen file.
#[derive(Debug, Clone, Default)]
pub struct CardCount;

impl CardCount {
    /// Creates the rule.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl FileRule for CardCount {
    fn name(&self) -> &'static str {
        NAME
    }

    fn code(&self) -> &'static str {
        CODE
    }

    fn description(&self) -> &'static str {
        "Screens must not use more Cards than the configured maximum"
    }

    fn applies_to(&self, ctx: &FileContext<'_>) -> bool {
        ctx.is_screen
    }

    fn check_file(&self, ctx: &FileContext<'_>, tree: &SyntaxTree) -> Vec<Violation> {
        let count = tree.count_tag("Card");
        debug!("{}: {count} Cards", ctx.path.display());
        if count <= ctx.max_cards {
            return Vec::new();
        }
        vec![self.violation(
            ctx.file_location(),
            format!("Screen uses {count} Cards (max {}).", ctx.max_cards),
        )]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{messages, positions, run_file, COMPONENT, SCREEN};
    use archcheck_core::{Config, SourceFile};
    use archcheck_tsx::CompositionEngine;

    const THREE_CARDS: &str =
        "export const S = () => <ScreenLayout><Card /><Card><Card /></Card></ScreenLayout>;";

    #[test]
    fn test_three_cards() {
        let v = run_file(CardCount::new(), SCREEN, THREE_CARDS);
        assert_eq!(messages(&v), vec!["Screen uses 3 Cards (max 2)."]);
        assert_eq!(positions(&v), vec![(1, 1)]);
    }

    #[test]
    fn test_two_cards_pass() {
        let text = "export const S = () => <><Card /><Card /></>;";
        assert!(run_file(CardCount::new(), SCREEN, text).is_empty());
    }

    #[test]
    fn test_suppressed() {
        let text = format!("// ui-check: allow card-count\n{THREE_CARDS}");
        assert!(run_file(CardCount::new(), SCREEN, &text).is_empty());
    }

    #[test]
    fn test_components_unlimited() {
        assert!(run_file(CardCount::new(), COMPONENT, THREE_CARDS).is_empty());
    }

    #[test]
    fn test_configured_maximum() {
        let mut config = Config::default();
        config.composition.max_cards = 3;
        let engine = CompositionEngine::builder()
            .file_rule(CardCount::new())
            .config(config)
            .build();
        let v = engine
            .check(&SourceFile::new(SCREEN, THREE_CARDS))
            .expect("fixture parses");
        assert!(v.is_empty());
    }
}
