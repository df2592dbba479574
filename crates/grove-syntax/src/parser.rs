//! Tree-sitter parsing wrapper.
//!
//! Wraps the raw Tree-sitter parser behind a per-language [`Parser`] and
//! bundles the parse output with its source text in a [`SourceTree`].
//! Tree-sitter is error-tolerant: a tree is produced even for ill-formed
//! source, with ERROR and missing nodes marking the damage.

use crate::error::SyntaxError;
use crate::language::SupportedLanguage;

/// A parsed source file: the syntax tree together with the text it was
/// parsed from.
#[derive(Debug)]
pub struct SourceTree {
    tree: tree_sitter::Tree,
    source: String,
    language: SupportedLanguage,
}

impl SourceTree {
    /// Returns the root node of the syntax tree.
    #[must_use]
    pub fn root_node(&self) -> tree_sitter::Node<'_> {
        self.tree.root_node()
    }

    /// Returns the source code that was parsed.
    #[must_use]
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Returns the language of the parsed code.
    #[must_use]
    pub const fn language(&self) -> SupportedLanguage {
        self.language
    }

    /// Returns whether the tree contains any ERROR or missing nodes.
    #[must_use]
    pub fn has_errors(&self) -> bool {
        has_error_nodes(self.tree.root_node())
    }
}

/// Tree-sitter parser configured for a single language.
pub struct Parser {
    inner: tree_sitter::Parser,
    language: SupportedLanguage,
}

impl Parser {
    /// Creates a new parser for the given language.
    ///
    /// # Errors
    ///
    /// Returns an error if the Tree-sitter parser cannot be initialised
    /// with the language grammar.
    pub fn new(language: SupportedLanguage) -> Result<Self, SyntaxError> {
        let mut inner = tree_sitter::Parser::new();
        inner
            .set_language(&language.grammar())
            .map_err(|e| SyntaxError::parser_init(language, e.to_string()))?;

        Ok(Self { inner, language })
    }

    /// Returns the language this parser is configured for.
    #[must_use]
    pub const fn language(&self) -> SupportedLanguage {
        self.language
    }

    /// Parses source code into a [`SourceTree`].
    ///
    /// Ill-formed source still yields a tree; check
    /// [`SourceTree::has_errors`] when that matters.
    ///
    /// # Errors
    ///
    /// Returns an error if the parser fails to produce a tree at all,
    /// which indicates a parser configuration issue rather than bad input.
    pub fn parse(&mut self, source: &str) -> Result<SourceTree, SyntaxError> {
        let tree = self
            .inner
            .parse(source, None)
            .ok_or_else(|| SyntaxError::parse(self.language, "parsing failed"))?;

        Ok(SourceTree {
            tree,
            source: source.to_owned(),
            language: self.language,
        })
    }
}

fn has_error_nodes(node: tree_sitter::Node<'_>) -> bool {
    if node.is_error() || node.is_missing() {
        return true;
    }

    let mut cursor = node.walk();
    for child in node.children(&mut cursor) {
        if has_error_nodes(child) {
            return true;
        }
    }

    false
}
