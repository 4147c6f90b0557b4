//! Composition engine: runs a rule table over one file.

use archcheck_core::{Config, FileContext, SourceFile, Violation};
use tracing::debug;

use crate::parser::{ParseError, TsxParser};
use crate::rule::{ElementRule, ElementRuleBox, FileRule, FileRuleBox};
use crate::syntax::{Element, SyntaxTree};
use crate::walker::{walk, Ancestors, ElementVisitor};

/// Builder for configuring a [`CompositionEngine`].
#[derive(Default)]
pub struct CompositionEngineBuilder {
    element_rules: Vec<ElementRuleBox>,
    file_rules: Vec<FileRuleBox>,
    config: Option<Config>,
}

impl CompositionEngineBuilder {
    /// Creates a new builder with no rules.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a per-element rule.
    #[must_use]
    pub fn element_rule<R: ElementRule + 'static>(mut self, rule: R) -> Self {
        self.element_rules.push(Box::new(rule));
        self
    }

    /// Adds boxed per-element rules, keeping their order.
    #[must_use]
    pub fn element_rules(mut self, rules: impl IntoIterator<Item = ElementRuleBox>) -> Self {
        self.element_rules.extend(rules);
        self
    }

    /// Adds a file-level rule.
    #[must_use]
    pub fn file_rule<R: FileRule + 'static>(mut self, rule: R) -> Self {
        self.file_rules.push(Box::new(rule));
        self
    }

    /// Adds boxed file-level rules, keeping their order.
    #[must_use]
    pub fn file_rules(mut self, rules: impl IntoIterator<Item = FileRuleBox>) -> Self {
        self.file_rules.extend(rules);
        self
    }

    /// Sets the configuration.
    #[must_use]
    pub fn config(mut self, config: Config) -> Self {
        self.config = Some(config);
        self
    }

    /// Builds the engine.
    #[must_use]
    pub fn build(self) -> CompositionEngine {
        CompositionEngine {
            parser: TsxParser::new(),
            element_rules: self.element_rules,
            file_rules: self.file_rules,
            config: self.config.unwrap_or_default(),
        }
    }
}

/// Runs composition rules over individual files.
///
/// The engine holds no per-file state, so `check` may be called from several
/// threads at once.
pub struct CompositionEngine {
    parser: TsxParser,
    element_rules: Vec<ElementRuleBox>,
    file_rules: Vec<FileRuleBox>,
    config: Config,
}

impl CompositionEngine {
    /// Creates a new builder.
    #[must_use]
    pub fn builder() -> CompositionEngineBuilder {
        CompositionEngineBuilder::new()
    }

    /// Returns the number of registered rules.
    #[must_use]
    pub fn rule_count(&self) -> usize {
        self.element_rules.len() + self.file_rules.len()
    }

    /// Whether `source` is subject to composition rules at all.
    #[must_use]
    pub fn in_scope(&self, source: &SourceFile) -> bool {
        self.config.composition.in_scope(&source.path)
    }

    /// Checks one file.
    ///
    /// Files outside the composition scope are neither parsed nor checked.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError`] if an in-scope file does not parse.
    pub fn check(&self, source: &SourceFile) -> Result<Vec<Violation>, ParseError> {
        if !self.in_scope(source) {
            debug!("Outside composition scope: {}", source.path.display());
            return Ok(Vec::new());
        }
        let tree = self.parser.parse(source)?;
        Ok(self.check_tree(source, &tree))
    }

    /// Runs the rule table over an already-parsed tree.
    ///
    /// Element findings come first in walk order, then file-level findings in
    /// rule order.
    #[must_use]
    pub fn check_tree(&self, source: &SourceFile, tree: &SyntaxTree) -> Vec<Violation> {
        debug!("Checking composition: {}", source.path.display());
        let ctx = FileContext::new(source, &self.config.composition);

        let element_rules: Vec<&dyn ElementRule> = self
            .element_rules
            .iter()
            .map(|rule| &**rule)
            .filter(|rule| self.is_active(&ctx, rule.name()))
            .collect();

        let mut visitor = RuleVisitor {
            ctx: &ctx,
            rules: &element_rules,
            violations: Vec::new(),
        };
        walk(tree, &mut visitor);
        let mut violations = visitor.violations;

        for rule in &self.file_rules {
            if !self.is_active(&ctx, rule.name()) || !rule.applies_to(&ctx) {
                continue;
            }
            violations.extend(rule.check_file(&ctx, tree));
        }

        violations
    }

    fn is_active(&self, ctx: &FileContext<'_>, name: &str) -> bool {
        if !self.config.is_rule_enabled(name) {
            debug!("Skipping disabled rule: {name}");
            return false;
        }
        if ctx.allows(name) {
            debug!("Rule {name} allowed in {}", ctx.path.display());
            return false;
        }
        true
    }
}

struct RuleVisitor<'r, 'c> {
    ctx: &'r FileContext<'c>,
    rules: &'r [&'r dyn ElementRule],
    violations: Vec<Violation>,
}

impl ElementVisitor for RuleVisitor<'_, '_> {
    fn visit_element(&mut self, element: &Element, ancestors: Ancestors<'_>) {
        for rule in self.rules {
            if rule.applies_to(self.ctx, element) {
                self.violations
                    .extend(rule.check(self.ctx, element, &ancestors));
            }
        }
    }
}
