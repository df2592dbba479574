//! Command-line runtime for the Grove structural search tool.
//!
//! The crate owns argument parsing, telemetry bootstrap, and command
//! dispatch. [`run`] takes the argument iterator and the output streams so
//! tests can drive the full CLI without touching the process environment.

use std::ffi::OsString;
use std::io::Write;
use std::process::ExitCode;

use clap::error::ErrorKind;
use clap::Parser as ClapParser;

mod cli;
mod commands;
mod errors;
mod telemetry;

use cli::{Cli, Command};
pub use errors::AppError;

/// Runs the CLI using the provided arguments and IO streams.
#[must_use]
pub fn run<I, W, E>(args: I, stdout: &mut W, stderr: &mut E) -> ExitCode
where
    I: IntoIterator<Item = OsString>,
    W: Write,
    E: Write,
{
    let cli = match Cli::try_parse_from(args) {
        Ok(cli) => cli,
        Err(error) => {
            let rendered = error.render();
            return match error.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
                    let _ = write!(stdout, "{rendered}");
                    ExitCode::SUCCESS
                }
                _ => {
                    let _ = write!(stderr, "{rendered}");
                    ExitCode::from(2)
                }
            };
        }
    };

    if let Err(error) = telemetry::init(&cli.log_filter) {
        // A broken filter should not stop the command from running.
        let _ = writeln!(stderr, "{error}");
    }

    let result = match &cli.command {
        Command::Pattern(args) => commands::pattern::run(args, stdout),
        Command::Ast(args) => commands::ast::run(args, stdout),
    };

    match result {
        Ok(outcome) => outcome.exit_code(),
        Err(error) => {
            let _ = writeln!(stderr, "{error}");
            ExitCode::FAILURE
        }
    }
}
