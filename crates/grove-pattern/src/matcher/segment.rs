//! Segment matching: pattern elements that bind a run of the input list.
//!
//! A segment form consumes a prefix of the input at its list level and the
//! enclosing pattern's remaining elements continue against the suffix.
//! Candidate lengths are tried from the minimum upward and the first one
//! whose continuation succeeds wins, so the orderings observable through
//! bindings are deterministic.

use super::match_pattern;
use super::ops::{self, SegmentOp};
use crate::bindings::Bindings;
use crate::expression::{Cons, Expression};

/// Matches a segment form against `input`, then continues with `rest` (the
/// enclosing pattern after the segment) on whatever was not consumed.
pub(super) fn match_segment(
    op: SegmentOp,
    form: &Cons,
    rest: &Expression,
    input: &Expression,
    bindings: &Bindings,
) -> Bindings {
    let Some(variable) = ops::segment_variable(form) else {
        return Bindings::fail();
    };
    match op {
        SegmentOp::Optional => match_zero_or_one(variable, rest, input, bindings),
        SegmentOp::ZeroOrMore | SegmentOp::OneOrMore => {
            match_run(variable, op.minimum_len(), rest, input, bindings)
        }
    }
}

fn match_run(
    variable: &str,
    minimum: usize,
    rest: &Expression,
    input: &Expression,
    bindings: &Bindings,
) -> Bindings {
    let elements: Vec<&Expression> = input.elements().collect();

    for take in minimum..=elements.len() {
        let segment = Expression::list(elements[..take].iter().map(|&e| e.clone()));
        let bound = bindings.bind(variable, &segment);
        if bound.is_fail() {
            continue;
        }
        let result = match_pattern(rest, suffix_after(input, take), &bound);
        if !result.is_fail() {
            return result;
        }
    }

    Bindings::fail()
}

/// `??` consumes zero elements (binding the empty list) or one (binding
/// the input's car); zero is tried first.
fn match_zero_or_one(
    variable: &str,
    rest: &Expression,
    input: &Expression,
    bindings: &Bindings,
) -> Bindings {
    let empty = bindings.bind(variable, &Expression::Nil);
    if !empty.is_fail() {
        let result = match_pattern(rest, input, &empty);
        if !result.is_fail() {
            return result;
        }
    }

    if let Expression::Cons(cell) = input {
        let one = bindings.bind(variable, &cell.car);
        if !one.is_fail() {
            let result = match_pattern(rest, &cell.cdr, &one);
            if !result.is_fail() {
                return result;
            }
        }
    }

    Bindings::fail()
}

/// The sub-expression `take` cdrs into the input chain.
fn suffix_after(input: &Expression, take: usize) -> &Expression {
    let mut current = input;
    for _ in 0..take {
        match current {
            Expression::Cons(cell) => current = &cell.cdr,
            other => return other,
        }
    }
    current
}
