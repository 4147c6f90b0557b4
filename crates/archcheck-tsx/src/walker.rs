//! Depth-first element traversal with an explicit ancestor stack.
//!
//! The stack lives on the call frame of [`walk`], never on the visitor, so
//! concurrent walks over different trees cannot observe each other.

use crate::syntax::{Element, SyntaxTree};

/// Read-only view of the tag names from the root to the current element.
///
/// The current element is the last entry.
#[derive(Debug, Clone, Copy)]
pub struct Ancestors<'a> {
    tags: &'a [&'a str],
}

impl<'a> Ancestors<'a> {
    /// Wraps a stack slice.
    #[must_use]
    pub fn new(tags: &'a [&'a str]) -> Self {
        Self { tags }
    }

    /// Whether `tag` is the current element or encloses it.
    #[must_use]
    pub fn contains(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| *t == tag)
    }

    /// Number of entries, including the current element.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.tags.len()
    }

    /// Tag of the enclosing element, if any.
    #[must_use]
    pub fn parent(&self) -> Option<&'a str> {
        let len = self.tags.len();
        len.checked_sub(2).map(|i| self.tags[i])
    }

    /// Tags from root to current.
    pub fn iter(&self) -> impl Iterator<Item = &'a str> + '_ {
        self.tags.iter().copied()
    }
}

/// Callback invoked once per element during [`walk`].
pub trait ElementVisitor {
    /// Called on entry, after the element's tag has been pushed.
    fn visit_element(&mut self, element: &Element, ancestors: Ancestors<'_>);
}

impl<F> ElementVisitor for F
where
    F: FnMut(&Element, Ancestors<'_>),
{
    fn visit_element(&mut self, element: &Element, ancestors: Ancestors<'_>) {
        self(element, ancestors);
    }
}

/// Visits every element of `tree` in depth-first pre-order.
pub fn walk<V: ElementVisitor + ?Sized>(tree: &SyntaxTree, visitor: &mut V) {
    let mut stack: Vec<&str> = Vec::new();
    for element in &tree.elements {
        walk_element(element, &mut stack, visitor);
    }
    debug_assert!(stack.is_empty(), "ancestor stack must be balanced");
}

fn walk_element<'t, V: ElementVisitor + ?Sized>(
    element: &'t Element,
    stack: &mut Vec<&'t str>,
    visitor: &mut V,
) {
    stack.push(&element.tag);
    visitor.visit_element(element, Ancestors::new(stack.as_slice()));
    for child in &element.children {
        walk_element(child, stack, visitor);
    }
    stack.pop();
}
