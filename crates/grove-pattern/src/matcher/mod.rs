//! The PAIP-style pattern matcher.
//!
//! [`match_pattern`] is a pure function from `(pattern, input, bindings)` to
//! bindings. Dispatch follows the pattern's shape: FAIL propagation, then
//! variables, structural equality, segment forms, operator forms, and
//! finally element-wise list matching. List matching is segment-aware — a
//! segment form at the head of a pattern list takes responsibility for both
//! the run it consumes and the continuation of that list level — so segment
//! patterns compose with surrounding elements.
//!
//! The matcher is total: malformed operator forms and unknown predicates
//! yield FAIL rather than an error.

mod ops;
mod predicate;
mod segment;
mod single;

use crate::bindings::Bindings;
use crate::expression::{Cons, Expression};

pub use ops::{SegmentOp, SingleOp};

/// Matches `pattern` against `input` under `bindings`.
///
/// Returns the (possibly extended) bindings on success and the FAIL
/// bindings otherwise. Matching FAIL bindings always yields FAIL.
///
/// # Examples
///
/// ```
/// use grove_pattern::{match_pattern, parse, Bindings};
///
/// let pattern = parse("(?x ?y ?x)")?;
/// let input = parse("(a b a)")?;
/// let result = match_pattern(&pattern, &input, &Bindings::new());
/// assert_eq!(result.to_string(), "{?x: a, ?y: b}");
/// # Ok::<(), grove_pattern::ParseError>(())
/// ```
#[must_use]
pub fn match_pattern(pattern: &Expression, input: &Expression, bindings: &Bindings) -> Bindings {
    if bindings.is_fail() {
        return Bindings::fail();
    }
    if ops::is_variable(pattern) {
        return match_variable(pattern, input, bindings);
    }
    if pattern == input {
        return bindings.clone();
    }
    if let Some((op, form)) = ops::segment_form(pattern) {
        // The segment is the whole pattern at this level, so its
        // continuation is the empty list: it must account for all of
        // `input`.
        return segment::match_segment(op, form, &Expression::Nil, input, bindings);
    }
    if let Some((op, args)) = ops::single_form(pattern) {
        return single::match_single(op, args, input, bindings);
    }
    if let Expression::Cons(pattern) = pattern {
        return match_list(pattern, input, bindings);
    }
    Bindings::fail()
}

/// A bound variable must see a structurally equal input; an unbound one
/// binds to the input.
fn match_variable(pattern: &Expression, input: &Expression, bindings: &Bindings) -> Bindings {
    match pattern.as_symbol() {
        Some(variable) => bindings.bind(variable, input),
        None => Bindings::fail(),
    }
}

/// Matches a pattern list element by element.
///
/// A segment form at the head consumes a run of the input and continues
/// this level's remaining pattern on the suffix. An ordinary head matches
/// the input's car, then the cdrs match under the extended bindings; a
/// pattern list and input list of different lengths fail when one side
/// runs out first.
fn match_list(pattern: &Cons, input: &Expression, bindings: &Bindings) -> Bindings {
    if let Some((op, form)) = ops::segment_form(&pattern.car) {
        return segment::match_segment(op, form, &pattern.cdr, input, bindings);
    }
    let Expression::Cons(input) = input else {
        return Bindings::fail();
    };
    let first = match_pattern(&pattern.car, &input.car, bindings);
    if first.is_fail() {
        return first;
    }
    match_pattern(&pattern.cdr, &input.cdr, &first)
}

/// Returns whether `expr` is a pattern variable (`?x`).
#[must_use]
pub fn is_variable(expr: &Expression) -> bool {
    ops::is_variable(expr)
}

/// Returns whether `expr` is a segment form (`(?* ?x)`, `(?+ ?x)`,
/// `(?? ?x)`).
#[must_use]
pub fn is_segment_pattern(expr: &Expression) -> bool {
    ops::segment_form(expr).is_some()
}

/// Returns whether `expr` is an operator form (`?is`, `?and`, `?or`,
/// `?not`, `?if`).
#[must_use]
pub fn is_operator_pattern(expr: &Expression) -> bool {
    ops::single_form(expr).is_some()
}
