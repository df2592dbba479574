//! Variable bindings threaded through a match.
//!
//! Bindings are immutable: every extension produces a fresh value and the
//! matcher never mutates one it was handed. Failure is in-band — a match
//! that cannot succeed returns the FAIL bindings, and extending FAIL
//! yields FAIL, so failure propagates through the rest of the match
//! without special-casing at every call site.

use std::collections::BTreeMap;
use std::fmt;

use crate::expression::Expression;

/// A mapping from variable names to the expressions they matched.
///
/// The map is ordered by variable name, which makes the display output
/// deterministic for tests.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Bindings {
    entries: BTreeMap<String, Expression>,
    failed: bool,
}

impl Bindings {
    /// Creates the empty bindings a match starts from.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates the FAIL sentinel.
    #[must_use]
    pub fn fail() -> Self {
        Self {
            entries: BTreeMap::new(),
            failed: true,
        }
    }

    /// Returns whether these bindings represent a failed match.
    #[must_use]
    pub const fn is_fail(&self) -> bool {
        self.failed
    }

    /// Looks up the value bound to `variable`, if any.
    #[must_use]
    pub fn lookup(&self, variable: &str) -> Option<&Expression> {
        self.entries.get(variable)
    }

    /// Returns whether `variable` is bound.
    #[must_use]
    pub fn contains(&self, variable: &str) -> bool {
        self.entries.contains_key(variable)
    }

    /// Returns the number of bound variables.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns whether no variables are bound.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns a copy of these bindings with `variable` bound to `value`.
    ///
    /// An existing binding for `variable` is shadowed unconditionally; use
    /// [`bind`](Self::bind) where the matcher's consistency rule applies.
    /// Extending FAIL yields FAIL.
    #[must_use]
    pub fn extend(&self, variable: &str, value: Expression) -> Self {
        if self.failed {
            return Self::fail();
        }
        let mut extended = self.clone();
        extended.entries.insert(variable.to_owned(), value);
        extended
    }

    /// Binds `variable` to `value`, enforcing consistency.
    ///
    /// Once a variable is bound, any later attempt to bind it must carry a
    /// structurally equal value; otherwise the whole match fails.
    #[must_use]
    pub fn bind(&self, variable: &str, value: &Expression) -> Self {
        if self.failed {
            return Self::fail();
        }
        match self.lookup(variable) {
            Some(existing) if existing == value => self.clone(),
            Some(_) => Self::fail(),
            None => self.extend(variable, value.clone()),
        }
    }
}

impl fmt::Display for Bindings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.failed {
            return f.write_str("FAIL");
        }
        f.write_str("{")?;
        let mut first = true;
        for (variable, value) in &self.entries {
            if !first {
                f.write_str(", ")?;
            }
            first = false;
            write!(f, "{variable}: {value}")?;
        }
        f.write_str("}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_bindings_are_empty_and_not_failed() {
        let bindings = Bindings::new();
        assert!(!bindings.is_fail());
        assert!(bindings.is_empty());
        assert_eq!(bindings.to_string(), "{}");
    }

    #[test]
    fn extend_leaves_the_original_untouched() {
        let original = Bindings::new();
        let extended = original.extend("?x", Expression::symbol("a"));

        assert!(original.lookup("?x").is_none());
        assert_eq!(extended.lookup("?x"), Some(&Expression::symbol("a")));
    }

    #[test]
    fn extending_fail_is_fail() {
        let extended = Bindings::fail().extend("?x", Expression::symbol("a"));
        assert!(extended.is_fail());
        assert!(!extended.contains("?x"));
    }

    #[test]
    fn bind_accepts_a_structurally_equal_rebind() {
        let bindings = Bindings::new().bind("?x", &Expression::symbol("a"));
        let again = bindings.bind("?x", &Expression::symbol("a"));
        assert!(!again.is_fail());
        assert_eq!(again, bindings);
    }

    #[test]
    fn bind_fails_on_a_conflicting_rebind() {
        let bindings = Bindings::new().bind("?x", &Expression::symbol("a"));
        let conflict = bindings.bind("?x", &Expression::symbol("b"));
        assert!(conflict.is_fail());
    }

    #[test]
    fn display_orders_entries_by_variable_name() {
        let bindings = Bindings::new()
            .extend("?y", Expression::symbol("b"))
            .extend("?x", Expression::symbol("a"));
        assert_eq!(bindings.to_string(), "{?x: a, ?y: b}");
    }

    #[test]
    fn display_of_fail_is_fail() {
        assert_eq!(Bindings::fail().to_string(), "FAIL");
    }
}
