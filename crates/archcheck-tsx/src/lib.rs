//! # archcheck-tsx
//!
//! Tree-sitter based element trees for the composition rules.
//!
//! This crate turns TSX source into a small, owned element tree and runs
//! composition rules over it. It reuses `archcheck-core` types (`Violation`,
//! `FileContext`, `SourceFile`) and adds:
//!
//! - [`TsxParser`] for building a [`SyntaxTree`] with literal introspection
//! - [`walk`] for depth-first traversal with an explicit ancestor stack
//! - [`ElementRule`] and [`FileRule`] traits for rule descriptors
//! - [`CompositionEngine`] for running a rule table over one file

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod engine;
pub mod parser;
pub mod rule;
pub mod syntax;
pub mod walker;

pub use engine::{CompositionEngine, CompositionEngineBuilder};
pub use parser::{ParseError, TsxParser};
pub use rule::{ElementRule, ElementRuleBox, FileRule, FileRuleBox};
pub use syntax::{Attribute, Element, Expr, Property, SyntaxTree};
pub use walker::{walk, Ancestors, ElementVisitor};
