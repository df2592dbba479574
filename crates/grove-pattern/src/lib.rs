//! Lisp-style expressions and PAIP pattern matching for the Grove toolchain.
//!
//! This crate provides the symbolic substrate for structural code search:
//!
//! - **Expression algebra** via [`Expression`] — symbols, atomic literals,
//!   and cons pairs encoding proper and dotted lists
//! - **Textual reading** via [`parse`] and [`parse_all`] — one surface
//!   syntax for patterns and data
//! - **Pattern matching** via [`match_pattern`] — the recursive matcher
//!   described in chapter 6 of Norvig's *Paradigms of AI Programming*,
//!   with variables, segment patterns, and logical operators
//! - **Tree search** via [`find_matches`] — tries a pattern at every
//!   sub-expression of a host tree
//!
//! # Pattern language
//!
//! - `?x` — matches anything and captures it; repeated occurrences must
//!   match structurally equal values
//! - `(?* ?x)` / `(?+ ?x)` / `(?? ?x)` — segment patterns consuming zero
//!   or more, one or more, or zero or one elements of the enclosing list
//! - `(?is ?v pred)` — predicate test (`numberp`, `symbolp`, `atomp`,
//!   `oddp`, `evenp`) with capture
//! - `(?and p…)`, `(?or p…)`, `(?not p…)` — logical combinators
//! - `(?if cond)` — numeric comparison (`>`, `<`, `=`) over the bindings
//!   collected so far
//!
//! # Example
//!
//! ```
//! use grove_pattern::{find_matches, match_pattern, parse, Bindings};
//!
//! // Match a relational expression and capture its operands.
//! let pattern = parse("(?x (?or < = >) ?y)")?;
//! let input = parse("(3 < 4)")?;
//! let bindings = match_pattern(&pattern, &input, &Bindings::new());
//! assert_eq!(bindings.to_string(), "{?x: 3, ?y: 4}");
//!
//! // Search a whole tree for odd numbers.
//! let odd = parse("(?is ?n oddp)")?;
//! let tree = parse("(1 (2 3))")?;
//! assert_eq!(find_matches(&odd, &tree).len(), 2);
//! # Ok::<(), grove_pattern::ParseError>(())
//! ```

mod bindings;
mod error;
mod expression;
mod matcher;
mod parser;
mod search;

pub use bindings::Bindings;
pub use error::ParseError;
pub use expression::{Cons, Elements, Expression, Value};
pub use matcher::{
    is_operator_pattern, is_segment_pattern, is_variable, match_pattern, SegmentOp, SingleOp,
};
pub use parser::{parse, parse_all};
pub use search::{find_matches, visit};
