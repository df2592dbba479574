//! Projection of Tree-sitter nodes into the expression algebra.
//!
//! The projection is the structural vocabulary patterns are written in:
//!
//! ```text
//! (node_type [ (field_name child) | child ] …)
//! ```
//!
//! The node's type becomes the head symbol. A child with a field name is
//! wrapped in a two-element `(field_name child)` list; other children
//! appear directly. Leaf nodes carry their source text as a string atom
//! when it is non-empty, so `fn main() {}` projects its name to
//! `(name (identifier main))`.

use grove_pattern::Expression;

use crate::parser::SourceTree;

/// Projects a parsed source file into an expression.
///
/// Anonymous (unnamed) children — punctuation and keywords — are included
/// only when `include_anonymous` is set.
#[must_use]
pub fn tree_to_expression(tree: &SourceTree, include_anonymous: bool) -> Expression {
    node_to_expression(tree.root_node(), tree.source(), include_anonymous)
}

/// Projects a single node (and its subtree) into an expression.
///
/// The projection is pure with respect to `(node, source)` and never
/// mutates the tree.
#[must_use]
pub fn node_to_expression(
    node: tree_sitter::Node<'_>,
    source: &str,
    include_anonymous: bool,
) -> Expression {
    let mut elements = vec![Expression::symbol(node.kind())];

    if node.child_count() == 0 {
        let text = node.utf8_text(source.as_bytes()).unwrap_or_default();
        if !text.is_empty() {
            elements.push(Expression::text(text));
        }
    }

    for index in 0..node.child_count() {
        let Some(child) = node.child(index) else {
            continue;
        };
        if !include_anonymous && !child.is_named() {
            continue;
        }

        let child_expr = node_to_expression(child, source, include_anonymous);
        let field_name = u32::try_from(index)
            .ok()
            .and_then(|i| node.field_name_for_child(i));
        match field_name {
            Some(field) => elements.push(Expression::list([
                Expression::symbol(field),
                child_expr,
            ])),
            None => elements.push(child_expr),
        }
    }

    Expression::list(elements)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::language::SupportedLanguage;
    use crate::parser::Parser;

    fn convert(language: SupportedLanguage, source: &str, include_anonymous: bool) -> String {
        let mut parser = Parser::new(language).expect("parser init");
        let tree = parser.parse(source).expect("parse");
        tree_to_expression(&tree, include_anonymous).to_string()
    }

    #[test]
    fn rust_function_projects_named_fields_as_pairs() {
        let rendered = convert(SupportedLanguage::Rust, "fn main() {}", false);

        assert!(rendered.starts_with("(source_file"));
        assert!(
            rendered.contains("(name (identifier main))"),
            "missing name field pair in: {rendered}"
        );
        assert!(rendered.contains("(body (block"));
    }

    #[test]
    fn leaf_text_becomes_a_string_atom() {
        let rendered = convert(SupportedLanguage::Rust, "fn main() { 42; }", false);
        assert!(
            rendered.contains("(integer_literal 42)"),
            "missing literal leaf in: {rendered}"
        );
    }

    #[test]
    fn anonymous_children_are_skipped_by_default() {
        let rendered = convert(SupportedLanguage::Rust, "fn main() {}", false);
        assert!(!rendered.contains("(fn fn)"));
    }

    #[test]
    fn anonymous_children_appear_on_request() {
        let rendered = convert(SupportedLanguage::Rust, "fn main() {}", true);
        assert!(
            rendered.contains("(fn fn)"),
            "missing keyword token in: {rendered}"
        );
    }

    #[test]
    fn python_function_projects_its_name() {
        let rendered = convert(SupportedLanguage::Python, "def hello():\n    pass\n", false);
        assert!(
            rendered.contains("(name (identifier hello))"),
            "missing name field pair in: {rendered}"
        );
    }

    #[test]
    fn projection_is_matchable() {
        let mut parser = Parser::new(SupportedLanguage::Rust).expect("parser init");
        let tree = parser.parse("fn main() {}").expect("parse");
        let expr = tree_to_expression(&tree, false);

        let pattern = grove_pattern::parse("(name ?n)").expect("pattern");
        let matches = grove_pattern::find_matches(&pattern, &expr);
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].to_string(), "{?n: (identifier main)}");
    }
}
