//! Error types for reading textual S-expressions.

use thiserror::Error;

/// Errors raised while tokenising or reading an S-expression.
///
/// These are the only hard errors the crate produces: the matcher itself is
/// total and reports negative results through the FAIL bindings instead.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ParseError {
    /// A string literal was opened with `"` but never closed.
    #[error("unterminated string")]
    UnterminatedString,

    /// The input ended where an expression was expected.
    #[error("unexpected end of input")]
    UnexpectedEof,

    /// A list was expected but the input does not start with `(`.
    #[error("expected '('")]
    ExpectedOpen,

    /// A list was opened but the input ended before the closing `)`.
    #[error("expected ')'")]
    ExpectedClose,

    /// A token that fits no grammar production, such as a stray `)`.
    #[error("unexpected token: {token}")]
    UnexpectedToken {
        /// The offending token text.
        token: String,
    },

    /// A token was classified as numeric but failed numeric conversion.
    #[error("invalid number: {token}")]
    InvalidNumber {
        /// The offending token text.
        token: String,
    },
}
