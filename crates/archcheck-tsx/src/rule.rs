//! Rule traits for composition rules.

use archcheck_core::{FileContext, Location, Subsystem, Violation};

use crate::syntax::{Element, SyntaxTree};
use crate::walker::Ancestors;

/// A rule evaluated once per element during the walk.
///
/// # Example
///
/// ```ignore
/// use archcheck_tsx::{Ancestors, Element, ElementRule};
/// use archcheck_core::{FileContext, Violation};
///
/// pub struct NoMarquee;
///
/// impl ElementRule for NoMarquee {
///     fn name(&self) -> &'static str { "no-marquee" }
///     fn code(&self) -> &'static str { "UI900" }
///
///     fn applies_to(&self, _ctx: &FileContext<'_>, element: &Element) -> bool {
///         element.is("marquee")
///     }
///
///     fn check(&self, ctx: &FileContext<'_>, element: &Element, _: &Ancestors<'_>) -> Vec<Violation> {
///         vec![self.violation(ctx.location(element.position), "No marquee.".into())]
///     }
/// }
/// ```
pub trait ElementRule: Send + Sync {
    /// Returns the suppression id of this rule (e.g., "table-size").
    fn name(&self) -> &'static str;

    /// Returns the rule code (e.g., "UI001").
    fn code(&self) -> &'static str;

    /// Returns a brief description of what this rule checks.
    fn description(&self) -> &'static str {
        ""
    }

    /// Whether [`ElementRule::check`] should run for `element`.
    fn applies_to(&self, ctx: &FileContext<'_>, element: &Element) -> bool;

    /// Evaluates one element. `ancestors` ends with `element` itself.
    fn check(
        &self,
        ctx: &FileContext<'_>,
        element: &Element,
        ancestors: &Ancestors<'_>,
    ) -> Vec<Violation>;

    /// Builds a composition violation attributed to this rule.
    fn violation(&self, location: Location, message: String) -> Violation {
        Violation::new(
            self.code(),
            self.name(),
            Subsystem::Composition,
            location,
            message,
        )
    }
}

/// Type alias for boxed [`ElementRule`] trait objects.
pub type ElementRuleBox = Box<dyn ElementRule>;

/// A rule evaluated once per file, after the walk.
pub trait FileRule: Send + Sync {
    /// Returns the suppression id of this rule.
    fn name(&self) -> &'static str;

    /// Returns the rule code (e.g., "UI101").
    fn code(&self) -> &'static str;

    /// Returns a brief description of what this rule checks.
    fn description(&self) -> &'static str {
        ""
    }

    /// Whether this rule runs for the file at all.
    fn applies_to(&self, _ctx: &FileContext<'_>) -> bool {
        true
    }

    /// Checks the whole file.
    fn check_file(&self, ctx: &FileContext<'_>, tree: &SyntaxTree) -> Vec<Violation>;

    /// Builds a composition violation attributed to this rule.
    fn violation(&self, location: Location, message: String) -> Violation {
        Violation::new(
            self.code(),
            self.name(),
            Subsystem::Composition,
            location,
            message,
        )
    }
}

/// Type alias for boxed [`FileRule`] trait objects.
pub type FileRuleBox = Box<dyn FileRule>;
