//! The `pattern` command: run a pattern against source files and report
//! the bindings of every match.

use std::fs;
use std::io::Write;

use grove_pattern::find_matches;
use grove_syntax::{tree_to_expression, Parser};
use tracing::{debug, warn};

use super::{resolve_language, Outcome};
use crate::cli::PatternArgs;
use crate::errors::AppError;

pub(crate) fn run(args: &PatternArgs, stdout: &mut impl Write) -> Result<Outcome, AppError> {
    let pattern_text = load_pattern(args)?;
    let pattern = grove_pattern::parse(pattern_text.trim())?;
    debug!(%pattern, "compiled pattern");

    let mut total_matches = 0usize;

    for path in &args.files {
        let language = resolve_language(args.language, path)?;
        let source =
            fs::read_to_string(path).map_err(|error| AppError::read_file(path, error))?;
        let mut parser = Parser::new(language)?;
        let tree = parser.parse(&source)?;
        if tree.has_errors() {
            warn!(
                path = %path.display(),
                "source contains syntax errors; matching the recovered tree"
            );
        }

        let expr = tree_to_expression(&tree, args.include_anonymous);
        let matches = find_matches(&pattern, &expr);
        debug!(path = %path.display(), matches = matches.len(), "searched file");
        if matches.is_empty() {
            continue;
        }

        writeln!(stdout, "=== {} (matches: {}) ===", path.display(), matches.len())?;
        for (index, bindings) in matches.iter().enumerate() {
            writeln!(stdout, "{}) {bindings}", index + 1)?;
        }
        total_matches += matches.len();
    }

    if total_matches == 0 {
        return Ok(Outcome::NoMatches);
    }
    Ok(Outcome::Success)
}

fn load_pattern(args: &PatternArgs) -> Result<String, AppError> {
    match (&args.pattern, &args.pattern_file) {
        (Some(inline), _) => Ok(inline.clone()),
        (None, Some(path)) => {
            fs::read_to_string(path).map_err(|error| AppError::read_file(path, error))
        }
        (None, None) => Err(AppError::MissingPattern),
    }
}
