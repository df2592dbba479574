//! The `ast` command: print the S-expression projection of source files.

use std::fs;
use std::io::Write;

use grove_syntax::{tree_to_expression, Parser};
use tracing::warn;

use super::{resolve_language, Outcome};
use crate::cli::AstArgs;
use crate::errors::AppError;

pub(crate) fn run(args: &AstArgs, stdout: &mut impl Write) -> Result<Outcome, AppError> {
    for path in &args.files {
        let language = resolve_language(args.language, path)?;
        let source =
            fs::read_to_string(path).map_err(|error| AppError::read_file(path, error))?;
        let mut parser = Parser::new(language)?;
        let tree = parser.parse(&source)?;
        if tree.has_errors() {
            warn!(
                path = %path.display(),
                "source contains syntax errors; printing the recovered tree"
            );
        }

        let expr = tree_to_expression(&tree, args.include_anonymous);
        writeln!(stdout, "=== {} ===", path.display())?;
        writeln!(stdout, "{expr}")?;
    }

    Ok(Outcome::Success)
}

#[cfg(test)]
mod tests {
    use super::*;
    use grove_syntax::SupportedLanguage;
    use tempfile::TempDir;

    #[test]
    fn prints_the_projection_of_each_file() {
        let dir = TempDir::new().expect("tempdir");
        let path = dir.path().join("sample.rs");
        fs::write(&path, "fn alpha() {}\n").expect("write fixture");

        let args = AstArgs {
            language: Some(SupportedLanguage::Rust),
            include_anonymous: false,
            files: vec![path.clone()],
        };
        let mut stdout = Vec::new();
        let outcome = run(&args, &mut stdout).expect("run");

        assert_eq!(outcome, Outcome::Success);
        let output = String::from_utf8(stdout).expect("utf8");
        assert!(output.contains(&format!("=== {} ===", path.display())));
        assert!(output.contains("(name (identifier alpha))"));
    }

    #[test]
    fn detects_the_language_from_the_file_extension() {
        let dir = TempDir::new().expect("tempdir");
        let path = dir.path().join("sample.py");
        fs::write(&path, "def hello():\n    pass\n").expect("write fixture");

        let args = AstArgs {
            language: None,
            include_anonymous: false,
            files: vec![path],
        };
        let mut stdout = Vec::new();
        let outcome = run(&args, &mut stdout).expect("run");

        assert_eq!(outcome, Outcome::Success);
        let output = String::from_utf8(stdout).expect("utf8");
        assert!(output.contains("(name (identifier hello))"));
    }
}
