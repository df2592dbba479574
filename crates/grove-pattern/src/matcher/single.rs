//! Operator forms: `?is`, `?and`, `?or`, `?not`, `?if`.
//!
//! Each operator matches against the input as a whole under the current
//! bindings. Malformed forms fail the match rather than erroring.

use super::ops::SingleOp;
use super::{match_pattern, predicate};
use crate::bindings::Bindings;
use crate::expression::Expression;

pub(super) fn match_single(
    op: SingleOp,
    args: &Expression,
    input: &Expression,
    bindings: &Bindings,
) -> Bindings {
    match op {
        SingleOp::Is => match_is(args, input, bindings),
        SingleOp::And => match_and(args, input, bindings),
        SingleOp::Or => match_or(args, input, bindings),
        SingleOp::Not => match_not(args, input, bindings),
        SingleOp::If => match_if(args, bindings),
    }
}

/// `(?is ?v pred)` succeeds when `pred` holds on the input, binding `?v`
/// to it.
fn match_is(args: &Expression, input: &Expression, bindings: &Bindings) -> Bindings {
    let args: Vec<&Expression> = args.elements().collect();
    let [variable, predicate] = args[..] else {
        return Bindings::fail();
    };
    let (Some(variable), Some(predicate)) = (variable.as_symbol(), predicate.as_symbol()) else {
        return Bindings::fail();
    };

    if predicate::test(predicate, input) {
        bindings.bind(variable, input)
    } else {
        Bindings::fail()
    }
}

/// `(?and p…)` threads the input through every pattern; each may add
/// bindings.
fn match_and(patterns: &Expression, input: &Expression, bindings: &Bindings) -> Bindings {
    let mut current = bindings.clone();
    for pattern in patterns.elements() {
        current = match_pattern(pattern, input, &current);
        if current.is_fail() {
            return current;
        }
    }
    current
}

/// `(?or p…)` returns the bindings of the first pattern that matches.
fn match_or(patterns: &Expression, input: &Expression, bindings: &Bindings) -> Bindings {
    for pattern in patterns.elements() {
        let result = match_pattern(pattern, input, bindings);
        if !result.is_fail() {
            return result;
        }
    }
    Bindings::fail()
}

/// `(?not p…)` succeeds, with the incoming bindings unchanged, when no
/// pattern matches.
fn match_not(patterns: &Expression, input: &Expression, bindings: &Bindings) -> Bindings {
    for pattern in patterns.elements() {
        if !match_pattern(pattern, input, bindings).is_fail() {
            return Bindings::fail();
        }
    }
    bindings.clone()
}

/// `(?if cond)` succeeds, unchanged, when the condition holds under the
/// current bindings.
fn match_if(args: &Expression, bindings: &Bindings) -> Bindings {
    let args: Vec<&Expression> = args.elements().collect();
    let [condition] = args[..] else {
        return Bindings::fail();
    };

    if predicate::eval_condition(condition, bindings) {
        bindings.clone()
    } else {
        Bindings::fail()
    }
}
