//! CLI argument definitions for the grove binary.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use grove_syntax::{LanguageParseError, SupportedLanguage};

/// Command-line interface for Grove structural code search.
#[derive(Parser, Debug)]
#[command(name = "grove", version, about = "Structural search over syntax trees")]
pub struct Cli {
    /// Tracing filter directive (for example `grove=debug`).
    #[arg(long, global = true, default_value = "warn")]
    pub log_filter: String,
    /// The command to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Commands understood by the grove binary.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Runs a pattern against source files, reporting bindings for every
    /// match found anywhere in the syntax tree.
    Pattern(PatternArgs),
    /// Prints the S-expression projection of source files.
    Ast(AstArgs),
}

/// Arguments for the `pattern` command.
#[derive(Args, Debug)]
pub struct PatternArgs {
    /// Language of the source files; detected from each file's extension
    /// when omitted.
    #[arg(long, short, value_parser = parse_language)]
    pub language: Option<SupportedLanguage>,
    /// Pattern to run, inline.
    #[arg(long, conflicts_with = "pattern_file")]
    pub pattern: Option<String>,
    /// Read the pattern from a file instead.
    #[arg(long, value_name = "PATH")]
    pub pattern_file: Option<PathBuf>,
    /// Include anonymous nodes (punctuation, keywords) in the projection.
    #[arg(long)]
    pub include_anonymous: bool,
    /// Source files to search.
    #[arg(value_name = "FILE", required = true)]
    pub files: Vec<PathBuf>,
}

/// Arguments for the `ast` command.
#[derive(Args, Debug)]
pub struct AstArgs {
    /// Language of the source files; detected from each file's extension
    /// when omitted.
    #[arg(long, short, value_parser = parse_language)]
    pub language: Option<SupportedLanguage>,
    /// Include anonymous nodes (punctuation, keywords) in the projection.
    #[arg(long)]
    pub include_anonymous: bool,
    /// Source files to print.
    #[arg(value_name = "FILE", required = true)]
    pub files: Vec<PathBuf>,
}

fn parse_language(input: &str) -> Result<SupportedLanguage, LanguageParseError> {
    input.parse()
}
