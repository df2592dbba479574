//! End-to-end scenarios: parse source, project it, and run patterns
//! against the projection.

use grove_pattern::{find_matches, parse, Expression};
use grove_syntax::{tree_to_expression, Parser, SupportedLanguage};

fn project(language: SupportedLanguage, source: &str) -> Expression {
    let mut parser = Parser::new(language).expect("parser init");
    let tree = parser.parse(source).expect("parse");
    assert!(!tree.has_errors(), "fixture source should be well-formed");
    tree_to_expression(&tree, false)
}

#[test]
fn finds_one_match_per_name_field_in_pre_order() {
    let expr = project(
        SupportedLanguage::Rust,
        "fn alpha() {}\nfn beta() {}\nfn gamma() {}\n",
    );

    let pattern = parse("(name ?n)").expect("pattern");
    let matches = find_matches(&pattern, &expr);

    let rendered: Vec<String> = matches.iter().map(ToString::to_string).collect();
    assert_eq!(
        rendered,
        vec![
            "{?n: (identifier alpha)}",
            "{?n: (identifier beta)}",
            "{?n: (identifier gamma)}",
        ]
    );
}

#[test]
fn captures_a_function_body_with_a_segment_pattern() {
    let expr = project(SupportedLanguage::Rust, "fn alpha() {}\n");

    let pattern = parse("(function_item (?* ?parts))").expect("pattern");
    let matches = find_matches(&pattern, &expr);

    assert_eq!(matches.len(), 1);
    let parts = matches[0].lookup("?parts").expect("?parts bound");
    let rendered = parts.to_string();
    assert!(
        rendered.contains("(name (identifier alpha))"),
        "unexpected segment binding: {rendered}"
    );
}

#[test]
fn field_pairs_compose_into_larger_patterns() {
    let expr = project(SupportedLanguage::Rust, "fn alpha() {}\n");

    let pattern =
        parse("(function_item (name ?n) (parameters ?p) (body ?b))").expect("pattern");
    let matches = find_matches(&pattern, &expr);

    assert_eq!(matches.len(), 1);
    assert_eq!(
        matches[0].lookup("?n"),
        Some(&parse("(identifier alpha)").expect("expected binding"))
    );
}

#[test]
fn python_functions_match_the_same_pattern_vocabulary() {
    let expr = project(
        SupportedLanguage::Python,
        "def first():\n    pass\n\ndef second():\n    pass\n",
    );

    let pattern = parse("(name ?n)").expect("pattern");
    let matches = find_matches(&pattern, &expr);
    assert_eq!(matches.len(), 2);
    assert_eq!(matches[0].to_string(), "{?n: (identifier first)}");
}

#[test]
fn unmatched_pattern_reports_no_bindings() {
    let expr = project(SupportedLanguage::Rust, "fn alpha() {}\n");
    let pattern = parse("(struct_item (?* ?rest))").expect("pattern");
    assert!(find_matches(&pattern, &expr).is_empty());
}

#[test]
fn matching_starts_from_empty_bindings_at_every_node() {
    let expr = project(SupportedLanguage::Rust, "fn alpha() {}\nfn beta() {}\n");

    let pattern = parse("(name ?n)").expect("pattern");
    for bindings in find_matches(&pattern, &expr) {
        assert!(!bindings.is_fail());
        assert_eq!(bindings.len(), 1, "each match binds exactly ?n");
    }

    // The driver holds no state: a second run over the same projection is
    // identical.
    let first = find_matches(&pattern, &expr);
    let second = find_matches(&pattern, &expr);
    assert_eq!(first, second);
}
