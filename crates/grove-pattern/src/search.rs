//! Search driver: tries a pattern at every sub-expression of a host tree.

use crate::bindings::Bindings;
use crate::expression::Expression;
use crate::matcher::match_pattern;

/// Matches `pattern` against `expr` and every sub-expression of it,
/// collecting the bindings of each successful match.
///
/// Visits follow [`visit`]'s pre-order traversal, so results arrive in a
/// deterministic outermost-first, left-to-right order. Each attempt starts
/// from empty bindings.
#[must_use]
pub fn find_matches(pattern: &Expression, expr: &Expression) -> Vec<Bindings> {
    let mut matches = Vec::new();
    visit(expr, &mut |node| {
        let result = match_pattern(pattern, node, &Bindings::new());
        if !result.is_fail() {
            matches.push(result);
        }
    });
    matches
}

/// Calls `f` on `expr` and every sub-expression reachable through cars and
/// cdrs, in pre-order. Empty expressions are not visited.
pub fn visit<'a>(expr: &'a Expression, f: &mut impl FnMut(&'a Expression)) {
    if expr.is_nil() {
        return;
    }
    f(expr);
    if let Expression::Cons(cell) = expr {
        visit(&cell.car, f);
        visit(&cell.cdr, f);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse;

    #[test]
    fn visits_in_pre_order() {
        let expr = parse("(a (b c))").expect("parse");
        let mut seen = Vec::new();
        visit(&expr, &mut |node| seen.push(node.to_string()));
        assert_eq!(
            seen,
            vec!["(a (b c))", "a", "((b c))", "(b c)", "b", "(c)", "c"]
        );
    }

    #[test]
    fn finds_every_matching_subexpression() {
        let pattern = parse("(b ?x)").expect("parse");
        let expr = parse("((b 1) (a (b 2)))").expect("parse");

        let matches = find_matches(&pattern, &expr);
        let rendered: Vec<String> = matches.iter().map(ToString::to_string).collect();
        assert_eq!(rendered, vec!["{?x: 1}", "{?x: 2}"]);
    }

    #[test]
    fn no_matches_yields_an_empty_collection() {
        let pattern = parse("(z ?x)").expect("parse");
        let expr = parse("(a (b c))").expect("parse");
        assert!(find_matches(&pattern, &expr).is_empty());
    }

    #[test]
    fn matches_atoms_as_well_as_lists() {
        let pattern = parse("(?is ?n oddp)").expect("parse");
        let expr = parse("(1 (2 3) 4 5)").expect("parse");

        let matches = find_matches(&pattern, &expr);
        let rendered: Vec<String> = matches.iter().map(ToString::to_string).collect();
        assert_eq!(rendered, vec!["{?n: 1}", "{?n: 3}", "{?n: 5}"]);
    }
}
