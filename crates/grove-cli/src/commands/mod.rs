//! Command implementations for the grove binary.

pub(crate) mod ast;
pub(crate) mod pattern;

use std::path::Path;
use std::process::ExitCode;

use grove_syntax::{SupportedLanguage, SyntaxError};

use crate::errors::AppError;

/// Outcome of a successfully executed command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Outcome {
    /// The command completed and produced its output.
    Success,
    /// A pattern search completed without finding a match in any input.
    NoMatches,
}

impl Outcome {
    pub(crate) fn exit_code(self) -> ExitCode {
        match self {
            Self::Success => ExitCode::SUCCESS,
            Self::NoMatches => ExitCode::FAILURE,
        }
    }
}

/// Resolves the language for one source file.
///
/// An explicit `--language` flag wins; otherwise the file's extension
/// decides, and a path no grammar claims is an error.
pub(crate) fn resolve_language(
    flag: Option<SupportedLanguage>,
    path: &Path,
) -> Result<SupportedLanguage, AppError> {
    match flag {
        Some(language) => Ok(language),
        None => SupportedLanguage::from_path(path)
            .ok_or_else(|| AppError::from(SyntaxError::unknown_language(path.to_owned()))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_language_wins_over_the_extension() {
        let resolved =
            resolve_language(Some(SupportedLanguage::Go), Path::new("x.rs")).expect("resolve");
        assert_eq!(resolved, SupportedLanguage::Go);
    }

    #[test]
    fn extension_decides_when_no_flag_is_given() {
        let resolved = resolve_language(None, Path::new("script.py")).expect("resolve");
        assert_eq!(resolved, SupportedLanguage::Python);
    }

    #[test]
    fn unknown_extension_is_an_error() {
        let error = resolve_language(None, Path::new("notes.txt")).expect_err("should fail");
        assert!(matches!(
            error,
            AppError::Syntax(SyntaxError::UnknownLanguage { .. })
        ));
    }
}
