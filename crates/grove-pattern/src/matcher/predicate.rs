//! Built-in predicates for `?is` and condition evaluation for `?if`.

use super::ops;
use crate::bindings::Bindings;
use crate::expression::{Expression, Value};

/// Tests a named predicate on a value.
///
/// Unknown predicate names hold for nothing, so a misspelt predicate
/// fails the match instead of raising an error.
pub(super) fn test(name: &str, value: &Expression) -> bool {
    match name {
        "numberp" => matches!(value, Expression::Atom(Value::Int(_) | Value::Float(_))),
        "symbolp" => matches!(value, Expression::Symbol(_)),
        "atomp" => matches!(value, Expression::Atom(_)),
        // oddp and evenp apply to integer atoms only; floats are neither.
        "oddp" => matches!(value, Expression::Atom(Value::Int(n)) if n % 2 != 0),
        "evenp" => matches!(value, Expression::Atom(Value::Int(n)) if n % 2 == 0),
        _ => false,
    }
}

/// Evaluates a `?if` condition under the current bindings.
///
/// The only supported shape is a binary numeric comparison,
/// `(> lhs rhs)`, `(< lhs rhs)` or `(= lhs rhs)`, whose arguments resolve
/// through the bindings. Integers widen to floats for the comparison.
/// Every other shape evaluates to false.
pub(super) fn eval_condition(condition: &Expression, bindings: &Bindings) -> bool {
    let Some(form) = condition.as_cons() else {
        return false;
    };
    let Some(operator) = form.car.as_symbol() else {
        return false;
    };
    let args: Vec<&Expression> = form.cdr.elements().collect();
    let [lhs, rhs] = args[..] else {
        return false;
    };
    let (Some(lhs), Some(rhs)) = (
        numeric(resolve(lhs, bindings)),
        numeric(resolve(rhs, bindings)),
    ) else {
        return false;
    };

    match operator {
        ">" => lhs > rhs,
        "<" => lhs < rhs,
        "=" => lhs == rhs,
        _ => false,
    }
}

/// A variable argument resolves to its bound value; anything else stands
/// for itself.
fn resolve<'a>(expr: &'a Expression, bindings: &'a Bindings) -> &'a Expression {
    if ops::is_variable(expr) {
        if let Some(value) = expr.as_symbol().and_then(|name| bindings.lookup(name)) {
            return value;
        }
    }
    expr
}

#[allow(clippy::cast_precision_loss)] // comparisons deliberately widen to floats
fn numeric(expr: &Expression) -> Option<f64> {
    match expr {
        Expression::Atom(Value::Int(n)) => Some(*n as f64),
        Expression::Atom(Value::Float(f)) => Some(*f),
        Expression::Nil | Expression::Symbol(_) | Expression::Atom(Value::Text(_)) => None,
        Expression::Cons(_) => None,
    }
}
