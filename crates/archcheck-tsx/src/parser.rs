//! Tree-sitter based builder for [`SyntaxTree`].

use std::path::{Path, PathBuf};

use archcheck_core::utils::utf16_column;
use archcheck_core::{Position, SourceFile};
use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;
use tracing::debug;
use tree_sitter::{Language, Node, Parser};

use crate::syntax::{Attribute, Element, Expr, Property, SyntaxTree};

/// A file that tree-sitter could not parse cleanly.
///
/// Carries the source text so the CLI can render a labelled snippet.
#[derive(Debug, Error, Diagnostic)]
#[error("failed to parse {}:{line}:{column}: {message}", .path.display())]
#[diagnostic(
    code(archcheck::parse),
    help("fix the syntax error; files with syntax errors are never skipped")
)]
pub struct ParseError {
    /// Path of the offending file.
    pub path: PathBuf,
    /// 1-indexed line of the first error.
    pub line: usize,
    /// 1-indexed column (UTF-16 units) of the first error.
    pub column: usize,
    /// Short description of the error node.
    pub message: String,
    #[source_code]
    src: NamedSource<String>,
    #[label("{message}")]
    span: SourceSpan,
}

impl ParseError {
    fn new(path: &Path, text: &str, position: Position, span: SourceSpan, message: String) -> Self {
        Self {
            path: path.to_path_buf(),
            line: position.line,
            column: position.column,
            message,
            src: NamedSource::new(path.display().to_string(), text.to_string()),
            span,
        }
    }

    fn at_start(path: &Path, text: &str, message: String) -> Self {
        Self::new(path, text, Position::FILE_START, (0, 0).into(), message)
    }
}

/// Parses TS/TSX sources into element trees.
///
/// `.ts`, `.mts` and `.cts` files use the TypeScript grammar; everything
/// else uses the TSX grammar. A fresh `tree_sitter::Parser` is created per
/// file, so one `TsxParser` can be shared across threads.
pub struct TsxParser {
    tsx: Language,
    typescript: Language,
}

impl TsxParser {
    /// Creates a parser with both grammars loaded.
    #[must_use]
    pub fn new() -> Self {
        Self {
            tsx: tree_sitter_typescript::LANGUAGE_TSX.into(),
            typescript: tree_sitter_typescript::LANGUAGE_TYPESCRIPT.into(),
        }
    }

    fn language_for(&self, path: &Path) -> &Language {
        match path.extension().and_then(|e| e.to_str()) {
            Some("ts" | "mts" | "cts") => &self.typescript,
            _ => &self.tsx,
        }
    }

    /// Parses a loaded source file.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError`] if the tree contains any ERROR or MISSING node.
    pub fn parse(&self, source: &SourceFile) -> Result<SyntaxTree, ParseError> {
        self.parse_str(&source.path, &source.text)
    }

    /// Parses `text` as the contents of `path`.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError`] if the tree contains any ERROR or MISSING node.
    pub fn parse_str(&self, path: &Path, text: &str) -> Result<SyntaxTree, ParseError> {
        let mut parser = Parser::new();
        parser
            .set_language(self.language_for(path))
            .map_err(|e| ParseError::at_start(path, text, format!("incompatible grammar: {e}")))?;

        let tree = parser
            .parse(text, None)
            .ok_or_else(|| ParseError::at_start(path, text, "parser produced no tree".into()))?;

        let root = tree.root_node();
        if root.has_error() {
            if let Some(node) = first_error(root) {
                let message = if node.is_missing() {
                    format!("missing `{}`", node.kind())
                } else {
                    "unexpected syntax".to_string()
                };
                let span = (node.start_byte(), node.end_byte() - node.start_byte()).into();
                return Err(ParseError::new(
                    path,
                    text,
                    position_of(node, text),
                    span,
                    message,
                ));
            }
        }

        let builder = Builder { src: text };
        let mut elements = Vec::new();
        builder.collect(root, &mut elements);

        debug!(
            "Parsed {}: {} top-level elements",
            path.display(),
            elements.len()
        );
        Ok(SyntaxTree { elements })
    }
}

impl Default for TsxParser {
    fn default() -> Self {
        Self::new()
    }
}

/// First ERROR or MISSING node in pre-order.
fn first_error(root: Node<'_>) -> Option<Node<'_>> {
    let mut cursor = root.walk();
    loop {
        let node = cursor.node();
        if node.is_error() || node.is_missing() {
            return Some(node);
        }
        if node.has_error() && cursor.goto_first_child() {
            continue;
        }
        loop {
            if cursor.goto_next_sibling() {
                break;
            }
            if !cursor.goto_parent() {
                return None;
            }
        }
    }
}

fn position_of(node: Node<'_>, src: &str) -> Position {
    let start = node.start_byte();
    let point = node.start_position();
    let prefix = src.get(start.saturating_sub(point.column)..start).unwrap_or("");
    Position::new(point.row + 1, utf16_column(prefix))
}

fn named_children<'t>(node: Node<'t>) -> Vec<Node<'t>> {
    let mut cursor = node.walk();
    node.named_children(&mut cursor)
        .filter(|child| child.kind() != "comment")
        .collect()
}

struct Builder<'s> {
    src: &'s str,
}

impl<'s> Builder<'s> {
    fn text(&self, node: Node<'_>) -> &'s str {
        self.src
            .get(node.start_byte()..node.end_byte())
            .unwrap_or("")
    }

    /// Collects the elements at or below `node` into `out`.
    fn collect(&self, node: Node<'_>, out: &mut Vec<Element>) {
        match node.kind() {
            "jsx_element" => self.element(node, out),
            "jsx_self_closing_element" => out.push(self.open(node)),
            _ => {
                for child in named_children(node) {
                    self.collect(child, out);
                }
            }
        }
    }

    fn element(&self, node: Node<'_>, out: &mut Vec<Element>) {
        let body: Vec<Node<'_>> = named_children(node)
            .into_iter()
            .filter(|c| !matches!(c.kind(), "jsx_opening_element" | "jsx_closing_element"))
            .collect();

        let open_tag = node
            .child_by_field_name("open_tag")
            .filter(|open| open.child_by_field_name("name").is_some());

        // Fragments are transparent.
        let Some(open_tag) = open_tag else {
            for child in body {
                self.collect(child, out);
            }
            return;
        };

        let mut element = self.open(open_tag);
        for child in body {
            self.collect(child, &mut element.children);
        }
        out.push(element);
    }

    /// Tag, position and attributes of an opening or self-closing tag.
    fn open(&self, tag: Node<'_>) -> Element {
        let name = tag
            .child_by_field_name("name")
            .map(|n| self.text(n).to_string())
            .unwrap_or_default();

        let attributes = named_children(tag)
            .into_iter()
            .filter(|c| c.kind() == "jsx_attribute")
            .filter_map(|c| self.attribute(c))
            .collect();

        Element {
            tag: name,
            position: position_of(tag, self.src),
            attributes,
            children: Vec::new(),
        }
    }

    fn attribute(&self, node: Node<'_>) -> Option<Attribute> {
        let mut parts = named_children(node).into_iter();
        let name = parts.next()?;
        let value = parts.next().map(|v| self.attribute_value(v));
        Some(Attribute {
            name: self.text(name).to_string(),
            value,
            position: position_of(node, self.src),
        })
    }

    fn attribute_value(&self, node: Node<'_>) -> Expr {
        match node.kind() {
            "string" => Expr::String {
                value: strip_quotes(self.text(node)).to_string(),
                position: position_of(node, self.src),
            },
            "jsx_expression" => match named_children(node).into_iter().next() {
                Some(inner) => self.expr(inner),
                None => Expr::Other {
                    position: position_of(node, self.src),
                },
            },
            _ => Expr::Other {
                position: position_of(node, self.src),
            },
        }
    }

    fn expr(&self, node: Node<'_>) -> Expr {
        let position = position_of(node, self.src);
        match node.kind() {
            "string" => Expr::String {
                value: decode_string(self.text(node)),
                position,
            },
            "array" => Expr::Array {
                elements: named_children(node)
                    .into_iter()
                    .map(|c| self.expr(c))
                    .collect(),
                position,
            },
            "object" => Expr::Object {
                properties: named_children(node)
                    .into_iter()
                    .filter(|c| c.kind() == "pair")
                    .filter_map(|c| self.property(c))
                    .collect(),
                position,
            },
            _ => Expr::Other { position },
        }
    }

    fn property(&self, pair: Node<'_>) -> Option<Property> {
        let key = pair.child_by_field_name("key")?;
        let value = pair.child_by_field_name("value")?;
        let name = match key.kind() {
            "property_identifier" => self.text(key).to_string(),
            "string" => decode_string(self.text(key)),
            _ => return None,
        };
        Some(Property {
            name,
            value: self.expr(value),
        })
    }
}

fn strip_quotes(raw: &str) -> &str {
    let mut chars = raw.chars();
    match (chars.next(), chars.next_back()) {
        (Some(open @ ('"' | '\'')), Some(close)) if open == close => chars.as_str(),
        _ => raw,
    }
}

/// Decodes a quoted JS string literal.
fn decode_string(raw: &str) -> String {
    let inner = strip_quotes(raw);
    let mut out = String::with_capacity(inner.len());
    let mut chars = inner.chars();

    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('n') => out.push('\n'),
            Some('t') => out.push('\t'),
            Some('r') => out.push('\r'),
            Some('b') => out.push('\u{8}'),
            Some('f') => out.push('\u{c}'),
            Some('v') => out.push('\u{b}'),
            Some('0') => out.push('\0'),
            Some('x') => out.push(hex_char(&chars.by_ref().take(2).collect::<String>())),
            Some('u') => {
                let digits: String = if chars.clone().next() == Some('{') {
                    chars.next();
                    chars.by_ref().take_while(|&d| d != '}').collect()
                } else {
                    chars.by_ref().take(4).collect()
                };
                out.push(hex_char(&digits));
            }
            // Line continuation.
            Some('\n' | '\r' | '\u{2028}' | '\u{2029}') => {}
            Some(other) => out.push(other),
            None => out.push('\\'),
        }
    }
    out
}

fn hex_char(digits: &str) -> char {
    u32::from_str_radix(digits, 16)
        .ok()
        .and_then(char::from_u32)
        .unwrap_or(char::REPLACEMENT_CHARACTER)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(text: &str) -> SyntaxTree {
        TsxParser::new()
            .parse_str(Path::new("apps/frontend/src/A.tsx"), text)
            .expect("valid tsx")
    }

    fn tags(tree: &SyntaxTree) -> Vec<&str> {
        tree.iter().map(|e| e.tag.as_str()).collect()
    }

    #[test]
    fn test_elements_and_positions() {
        let tree = parse("const a = (\n  <Card>\n    <Table size=\"small\" />\n  </Card>\n);\n");
        assert_eq!(tags(&tree), vec!["Card", "Table"]);
        let card = &tree.elements[0];
        assert_eq!(card.position, Position::new(2, 3));
        assert_eq!(card.children[0].position, Position::new(3, 5));
        assert_eq!(card.children[0].string_attribute("size"), Some("small"));
    }

    #[test]
    fn test_member_tag_name() {
        let tree = parse("const a = <Typography.Text strong>x</Typography.Text>;");
        assert_eq!(tags(&tree), vec!["Typography.Text"]);
        let attr = tree.elements[0].attribute("strong").expect("flag attribute");
        assert!(attr.value.is_none());
    }

    #[test]
    fn test_fragment_is_transparent() {
        let tree = parse("const a = <><Card /><Card /></>;");
        assert_eq!(tree.elements.len(), 2);
        assert_eq!(tags(&tree), vec!["Card", "Card"]);
    }

    #[test]
    fn test_string_attribute_in_braces() {
        let tree = parse("const a = <Button type={'primary'} danger />;");
        let button = &tree.elements[0];
        assert_eq!(button.string_attribute("type"), Some("primary"));
        assert!(button.has_attribute("danger"));
    }

    #[test]
    fn test_non_literal_attribute_is_other() {
        let tree = parse("const a = <Table size={size} />;");
        let value = tree.elements[0]
            .attribute("size")
            .and_then(|a| a.value.as_ref())
            .expect("value");
        assert!(matches!(value, Expr::Other { .. }));
    }

    #[test]
    fn test_columns_array_literal() {
        let text = "const a = <Table columns={[{ title: \"Name\" }, { 'title': \"Actions\", align: \"right\" }]} />;";
        let tree = parse(text);
        let columns = tree.elements[0]
            .attribute("columns")
            .and_then(|a| a.value.as_ref())
            .and_then(Expr::as_array)
            .expect("array literal");
        assert_eq!(columns.len(), 2);
        assert!(columns[1].property_is("title", "Actions"));
        assert!(columns[1].property_is("align", "right"));
        assert_eq!(columns[1].position(), Position::new(1, 47));
    }

    #[test]
    fn test_elements_inside_attributes_are_not_children() {
        let text = "const a = <Table columns={[{ render: () => <Button danger /> }]}><Card /></Table>;";
        let tree = parse(text);
        assert_eq!(tags(&tree), vec!["Table", "Card"]);

        let text = "const t = <Tabs items={[{ children: <Card /> }, { children: <Card /> }]} />;";
        let tree = parse(text);
        assert_eq!(tags(&tree), vec!["Tabs"]);
        assert!(tree.elements[0].children.is_empty());
    }

    #[test]
    fn test_elements_in_body_expressions_are_children() {
        let text = "const a = <Space>{open && <Card />}{items.map(i => <Tag key={i} />)}</Space>;";
        let tree = parse(text);
        let children: Vec<&str> = tree.elements[0].children.iter().map(|c| c.tag.as_str()).collect();
        assert_eq!(children, vec!["Card", "Tag"]);
    }

    #[test]
    fn test_elements_in_functions_are_top_level() {
        let text = "export function A() {\n  if (x) { return <Card />; }\n  return <ScreenLayout><Card /></ScreenLayout>;\n}\n";
        let tree = parse(text);
        assert_eq!(tree.elements.len(), 2);
        assert_eq!(tags(&tree), vec!["Card", "ScreenLayout", "Card"]);
    }

    #[test]
    fn test_utf16_columns() {
        let tree = parse("const s = \"😀\"; const a = <Card />;");
        assert_eq!(tree.elements[0].position, Position::new(1, 27));
    }

    #[test]
    fn test_typescript_file_without_markup() {
        let tree = TsxParser::new()
            .parse_str(Path::new("src/api.ts"), "const x = <number>y;\nexport default x;\n")
            .expect("type assertion is valid TypeScript");
        assert!(tree.is_empty());
    }

    #[test]
    fn test_jsx_extension_uses_tsx_grammar() {
        let tree = TsxParser::new()
            .parse_str(Path::new("apps/frontend/src/Old.jsx"), "export const A = () => <Card />;\n")
            .expect("jsx parses");
        assert_eq!(tags(&tree), vec!["Card"]);
    }

    #[test]
    fn test_parse_error_is_reported() {
        let err = TsxParser::new()
            .parse_str(Path::new("apps/frontend/src/Bad.tsx"), "const a = <Card>;\n")
            .expect_err("unclosed element");
        assert_eq!(err.path, PathBuf::from("apps/frontend/src/Bad.tsx"));
        assert!(err.line >= 1);
        assert!(err.to_string().starts_with("failed to parse apps/frontend/src/Bad.tsx:"));
    }

    #[test]
    fn test_decode_string_escapes() {
        assert_eq!(decode_string(r#""a\"b""#), "a\"b");
        assert_eq!(decode_string(r"'tab\there'"), "tab\there");
        assert_eq!(decode_string(r"'\x41B\u{43}'"), "ABC");
        assert_eq!(decode_string("'plain'"), "plain");
    }
}
