//! Error types for syntax-tree operations.

use std::path::PathBuf;

use thiserror::Error;

use crate::language::SupportedLanguage;

/// Errors from parsing source code with Tree-sitter.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SyntaxError {
    /// Failed to initialise the Tree-sitter parser for a language.
    #[error("failed to initialise parser for {language}: {message}")]
    ParserInitError {
        /// The language that failed to initialise.
        language: SupportedLanguage,
        /// Description of the failure.
        message: String,
    },

    /// Failed to determine the language from a file path.
    #[error("could not determine language for path: {}", path.display())]
    UnknownLanguage {
        /// The path that could not be mapped to a language.
        path: PathBuf,
    },

    /// The parser failed to produce a syntax tree.
    #[error("failed to parse {language}: {message}")]
    ParseError {
        /// The language that failed to parse.
        language: SupportedLanguage,
        /// Description of the failure.
        message: String,
    },
}

impl SyntaxError {
    /// Creates a parser initialisation error.
    #[must_use]
    pub fn parser_init(language: SupportedLanguage, message: impl Into<String>) -> Self {
        Self::ParserInitError {
            language,
            message: message.into(),
        }
    }

    /// Creates an unknown language error.
    #[must_use]
    pub const fn unknown_language(path: PathBuf) -> Self {
        Self::UnknownLanguage { path }
    }

    /// Creates a parse error.
    #[must_use]
    pub fn parse(language: SupportedLanguage, message: impl Into<String>) -> Self {
        Self::ParseError {
            language,
            message: message.into(),
        }
    }
}
