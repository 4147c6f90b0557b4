//! Owned element tree surfaced from TSX sources.
//!
//! Only markup elements, their attributes and literal attribute values are
//! kept. Everything else in the source is either walked through (to find
//! nested elements) or collapsed into [`Expr::Other`]. Attribute values are
//! never searched for elements.

use archcheck_core::Position;

/// A parsed file: its top-level elements in source order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SyntaxTree {
    /// Elements not nested inside another element.
    pub elements: Vec<Element>,
}

impl SyntaxTree {
    /// Iterates every element in depth-first pre-order.
    pub fn iter(&self) -> Preorder<'_> {
        Preorder::new(&self.elements)
    }

    /// Number of elements with exactly this tag.
    #[must_use]
    pub fn count_tag(&self, tag: &str) -> usize {
        self.iter().filter(|e| e.is(tag)).count()
    }

    /// Whether any element has exactly this tag.
    #[must_use]
    pub fn contains_tag(&self, tag: &str) -> bool {
        self.iter().any(|e| e.is(tag))
    }

    /// True if the file contains no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }
}

/// Depth-first pre-order iterator over elements.
pub struct Preorder<'a> {
    stack: Vec<&'a Element>,
}

impl<'a> Preorder<'a> {
    fn new(roots: &'a [Element]) -> Self {
        Self {
            stack: roots.iter().rev().collect(),
        }
    }
}

impl<'a> Iterator for Preorder<'a> {
    type Item = &'a Element;

    fn next(&mut self) -> Option<Self::Item> {
        let element = self.stack.pop()?;
        self.stack.extend(element.children.iter().rev());
        Some(element)
    }
}

/// A markup element (`<Tag ...>` or `<Tag ... />`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    /// Source text of the element name, e.g. `Table` or `Typography.Text`.
    pub tag: String,
    /// Position of the opening `<`.
    pub position: Position,
    /// Attributes in source order.
    pub attributes: Vec<Attribute>,
    /// Child elements of the body in source order. Elements inside
    /// attribute values are not part of the tree.
    pub children: Vec<Element>,
}

impl Element {
    /// Whether the tag is exactly `tag`.
    #[must_use]
    pub fn is(&self, tag: &str) -> bool {
        self.tag == tag
    }

    /// First attribute named `name`.
    #[must_use]
    pub fn attribute(&self, name: &str) -> Option<&Attribute> {
        self.attributes.iter().find(|a| a.name == name)
    }

    /// Whether an attribute named `name` is present, with or without value.
    #[must_use]
    pub fn has_attribute(&self, name: &str) -> bool {
        self.attribute(name).is_some()
    }

    /// The string literal value of attribute `name`.
    ///
    /// Accepts both `name="x"` and `name={"x"}`.
    #[must_use]
    pub fn string_attribute(&self, name: &str) -> Option<&str> {
        self.attribute(name)?.value.as_ref()?.as_str()
    }
}

/// One attribute on an element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribute {
    /// Attribute name as written.
    pub name: String,
    /// Value, `None` for a bare flag such as `danger`.
    pub value: Option<Expr>,
    /// Position of the attribute name.
    pub position: Position,
}

/// Literal introspection of an expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    /// A string literal with escapes decoded.
    String {
        /// Decoded contents without quotes.
        value: String,
        /// Position of the opening quote.
        position: Position,
    },
    /// An array literal.
    Array {
        /// Element expressions in source order.
        elements: Vec<Expr>,
        /// Position of `[`.
        position: Position,
    },
    /// An object literal.
    Object {
        /// `key: value` properties in source order.
        properties: Vec<Property>,
        /// Position of `{`.
        position: Position,
    },
    /// Any other expression.
    Other {
        /// Start of the expression.
        position: Position,
    },
}

impl Expr {
    /// Start position of the expression.
    #[must_use]
    pub fn position(&self) -> Position {
        match self {
            Self::String { position, .. }
            | Self::Array { position, .. }
            | Self::Object { position, .. }
            | Self::Other { position } => *position,
        }
    }

    /// The decoded value if this is a string literal.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String { value, .. } => Some(value),
            _ => None,
        }
    }

    /// The elements if this is an array literal.
    #[must_use]
    pub fn as_array(&self) -> Option<&[Expr]> {
        match self {
            Self::Array { elements, .. } => Some(elements),
            _ => None,
        }
    }

    /// The properties if this is an object literal.
    #[must_use]
    pub fn as_object(&self) -> Option<&[Property]> {
        match self {
            Self::Object { properties, .. } => Some(properties),
            _ => None,
        }
    }

    /// First property named `name` of an object literal.
    #[must_use]
    pub fn property(&self, name: &str) -> Option<&Expr> {
        self.as_object()?
            .iter()
            .find(|p| p.name == name)
            .map(|p| &p.value)
    }

    /// Whether this is an object literal with some property `name` equal to
    /// the string `value`. Repeated keys are all considered.
    #[must_use]
    pub fn property_is(&self, name: &str, value: &str) -> bool {
        self.as_object().is_some_and(|properties| {
            properties
                .iter()
                .any(|p| p.name == name && p.value.as_str() == Some(value))
        })
    }
}

/// A `key: value` pair of an object literal.
///
/// Only identifier and string-literal keys are kept; computed keys,
/// shorthand properties, spreads and methods are dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Property {
    /// Key text (string keys are decoded).
    pub name: String,
    /// Value expression.
    pub value: Expr,
}
