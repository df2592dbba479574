//! Tree-sitter powered syntax analysis for the Grove toolchain.
//!
//! This crate turns source code into the S-expression vocabulary the
//! pattern matcher consumes:
//!
//! - **Language selection** via [`SupportedLanguage`]
//! - **Parsing** via [`Parser`] and [`SourceTree`]
//! - **Projection** via [`tree_to_expression`] / [`node_to_expression`],
//!   which render a syntax tree in the `(node_type (field child) …)`
//!   convention
//!
//! # Supported languages
//!
//! Rust (`.rs`), Go (`.go`), Python (`.py`, `.pyi`), JavaScript (`.js`,
//! `.jsx`) and TypeScript (`.ts`, `.tsx`).
//!
//! # Example
//!
//! ```
//! use grove_syntax::{tree_to_expression, Parser, SupportedLanguage};
//!
//! let mut parser = Parser::new(SupportedLanguage::Rust)?;
//! let tree = parser.parse("fn main() {}")?;
//! let expr = tree_to_expression(&tree, false);
//!
//! // Find every node carrying a `name` field.
//! let pattern = grove_pattern::parse("(name ?n)").expect("pattern");
//! let matches = grove_pattern::find_matches(&pattern, &expr);
//! assert_eq!(matches.len(), 1);
//! # Ok::<(), grove_syntax::SyntaxError>(())
//! ```

mod convert;
mod error;
mod language;
mod parser;

pub use convert::{node_to_expression, tree_to_expression};
pub use error::SyntaxError;
pub use language::{LanguageParseError, SupportedLanguage};
pub use parser::{Parser, SourceTree};
