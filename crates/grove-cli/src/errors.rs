//! Error type aggregating the failures a command can hit.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors surfaced to the user by the grove binary.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AppError {
    /// Neither `--pattern` nor `--pattern-file` was supplied.
    #[error("either --pattern or --pattern-file is required")]
    MissingPattern,

    /// A source or pattern file could not be read.
    #[error("failed to read {}: {source}", path.display())]
    ReadFile {
        /// The path that could not be read.
        path: PathBuf,
        /// The underlying IO failure.
        #[source]
        source: io::Error,
    },

    /// The pattern text is not a well-formed S-expression.
    #[error("invalid pattern: {0}")]
    Pattern(#[from] grove_pattern::ParseError),

    /// Parsing a source file failed.
    #[error(transparent)]
    Syntax(#[from] grove_syntax::SyntaxError),

    /// Writing command output failed.
    #[error("failed to write output: {0}")]
    Output(#[from] io::Error),
}

impl AppError {
    /// Creates a read error carrying the offending path.
    pub(crate) fn read_file(path: &std::path::Path, source: io::Error) -> Self {
        Self::ReadFile {
            path: path.to_owned(),
            source,
        }
    }
}
