//! Language detection and Tree-sitter grammar selection.

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use thiserror::Error;

/// Languages supported for structural search.
///
/// Each variant maps to the Tree-sitter grammar that parses source code
/// for that language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SupportedLanguage {
    /// Rust source files (`.rs`).
    Rust,
    /// Go source files (`.go`).
    Go,
    /// Python source files (`.py`, `.pyi`).
    Python,
    /// JavaScript source files (`.js`, `.jsx`).
    JavaScript,
    /// TypeScript source files (`.ts`, `.tsx`).
    TypeScript,
}

impl SupportedLanguage {
    /// Detects the language from a file extension.
    ///
    /// Returns `None` if the extension is not recognised.
    ///
    /// # Examples
    ///
    /// ```
    /// use grove_syntax::SupportedLanguage;
    ///
    /// assert_eq!(
    ///     SupportedLanguage::from_extension("go"),
    ///     Some(SupportedLanguage::Go)
    /// );
    /// assert_eq!(SupportedLanguage::from_extension("toml"), None);
    /// ```
    #[must_use]
    pub fn from_extension(ext: &str) -> Option<Self> {
        let normalised = ext.to_ascii_lowercase();
        match normalised.as_str() {
            "rs" => Some(Self::Rust),
            "go" => Some(Self::Go),
            "py" | "pyi" => Some(Self::Python),
            "js" | "mjs" | "cjs" | "jsx" => Some(Self::JavaScript),
            "ts" | "tsx" | "mts" | "cts" => Some(Self::TypeScript),
            _ => None,
        }
    }

    /// Detects the language from a file path by examining its extension.
    #[must_use]
    pub fn from_path(path: &Path) -> Option<Self> {
        path.extension()
            .and_then(|ext| ext.to_str())
            .and_then(Self::from_extension)
    }

    /// Returns the Tree-sitter grammar for this language.
    #[must_use]
    pub fn grammar(self) -> tree_sitter::Language {
        match self {
            Self::Rust => tree_sitter_rust::LANGUAGE.into(),
            Self::Go => tree_sitter_go::LANGUAGE.into(),
            Self::Python => tree_sitter_python::LANGUAGE.into(),
            Self::JavaScript => tree_sitter_javascript::LANGUAGE.into(),
            // The TSX grammar is a superset, so `.ts` parses correctly too.
            Self::TypeScript => tree_sitter_typescript::LANGUAGE_TSX.into(),
        }
    }

    /// Returns the lower-case identifier for this language.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Rust => "rust",
            Self::Go => "go",
            Self::Python => "python",
            Self::JavaScript => "javascript",
            Self::TypeScript => "typescript",
        }
    }

    /// Returns all supported languages.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[
            Self::Rust,
            Self::Go,
            Self::Python,
            Self::JavaScript,
            Self::TypeScript,
        ]
    }
}

impl fmt::Display for SupportedLanguage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error raised when parsing a language identifier fails.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unsupported language: '{0}'")]
pub struct LanguageParseError(String);

impl LanguageParseError {
    /// Returns the input that failed to parse.
    #[must_use]
    pub fn input(&self) -> &str {
        &self.0
    }
}

impl FromStr for SupportedLanguage {
    type Err = LanguageParseError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let normalised = input.trim().to_ascii_lowercase();
        match normalised.as_str() {
            "rust" | "rs" => Ok(Self::Rust),
            "go" | "golang" => Ok(Self::Go),
            "python" | "py" => Ok(Self::Python),
            "javascript" | "js" => Ok(Self::JavaScript),
            "typescript" | "ts" => Ok(Self::TypeScript),
            other => Err(LanguageParseError(other.to_owned())),
        }
    }
}
