//! Comment-based allowance directives.
//!
//! Supports directives like:
//! ```text
//! // ui-check: allow card-count, raw-div
//! {/* ui-check: allow table-size */}
//! ```
//!
//! A directive suppresses the listed rules for the whole file, regardless of
//! the line it appears on.

use regex::Regex;
use std::collections::BTreeSet;
use std::sync::LazyLock;

/// Marker keyword, the literal word `allow`, then the token list.
#[allow(clippy::expect_used)]
static ALLOW_DIRECTIVE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)ui-check:\s*allow\s+(.+)").expect("allow directive pattern is valid")
});

/// Set of rule ids suppressed for one file.
///
/// Unknown ids are kept; they simply never match a rule.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RuleAllowance {
    rules: BTreeSet<String>,
}

impl RuleAllowance {
    /// Creates an empty allowance.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Collects every `ui-check: allow` directive in `content`.
    ///
    /// Tokens are separated by commas and/or whitespace. Matching lines are
    /// unioned, so repeating a token is harmless.
    #[must_use]
    pub fn parse(content: &str) -> Self {
        let mut rules = BTreeSet::new();

        for line in content.lines() {
            let Some(caps) = ALLOW_DIRECTIVE.captures(line) else {
                continue;
            };
            let Some(list) = caps.get(1) else {
                continue;
            };
            rules.extend(
                list.as_str()
                    .split(|c: char| c == ',' || c.is_whitespace())
                    .filter(|token| !token.is_empty())
                    .map(String::from),
            );
        }

        Self { rules }
    }

    /// Returns true if `rule` is suppressed.
    #[must_use]
    pub fn allows(&self, rule: &str) -> bool {
        self.rules.contains(rule)
    }

    /// Returns true if no directive was found.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Iterates over the suppressed ids in sorted order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.rules.iter().map(String::as_str)
    }
}

impl<S: Into<String>> FromIterator<S> for RuleAllowance {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            rules: iter.into_iter().map(Into::into).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_single_rule() {
        let allowance = RuleAllowance::parse("// ui-check: allow card-count\n");
        assert!(allowance.allows("card-count"));
        assert!(!allowance.allows("raw-div"));
    }

    #[test]
    fn test_parse_comma_and_space_separated() {
        let allowance = RuleAllowance::parse("// ui-check: allow raw-div, table-size   raw-button");
        assert!(allowance.allows("raw-div"));
        assert!(allowance.allows("table-size"));
        assert!(allowance.allows("raw-button"));
    }

    #[test]
    fn test_union_across_lines() {
        let content = r#"import { Card } from "antd";
// ui-check: allow card-count
export default function X() {
  return <div>{/* ui-check: allow raw-div */}</div>;
}
// ui-check: allow card-count"#;

        let allowance = RuleAllowance::parse(content);
        assert!(allowance.allows("card-count"));
        assert!(allowance.allows("raw-div"));
        assert_eq!(allowance.iter().filter(|r| *r == "card-count").count(), 1);
    }

    #[test]
    fn test_case_insensitive_marker() {
        let allowance = RuleAllowance::parse("// UI-Check: Allow danger-primary");
        assert!(allowance.allows("danger-primary"));
    }

    #[test]
    fn test_marker_without_allow_is_ignored() {
        assert!(RuleAllowance::parse("// ui-check: deny card-count").is_empty());
        assert!(RuleAllowance::parse("// ui-check: allowed card-count").is_empty());
        assert!(RuleAllowance::parse("// ui-check: allow").is_empty());
    }

    #[test]
    fn test_unknown_tokens_are_retained() {
        let allowance = RuleAllowance::parse("// ui-check: allow not-a-rule");
        assert!(allowance.allows("not-a-rule"));
        assert!(!allowance.is_empty());
    }

    #[test]
    fn test_directive_outside_comment() {
        let allowance = RuleAllowance::parse(r#"const note = "ui-check: allow table-size raw-div";"#);
        assert!(allowance.allows("table-size"));
        // Trailing punctuation sticks to the last token.
        assert!(!allowance.allows("raw-div"));
        assert!(allowance.allows(r#"raw-div";"#));
    }

    #[test]
    fn test_from_iterator() {
        let allowance: RuleAllowance = ["a", "b"].into_iter().collect();
        assert!(allowance.allows("a"));
        assert!(allowance.allows("b"));
    }
}
