//! CLI entrypoint for the Grove structural search tool.
//!
//! The binary delegates to [`grove_cli::run`], which parses arguments,
//! bootstraps telemetry, and executes the requested command against the
//! provided IO streams.

use std::io;
use std::process::ExitCode;

fn main() -> ExitCode {
    let mut stdout = io::stdout().lock();
    let mut stderr = io::stderr().lock();
    grove_cli::run(std::env::args_os(), &mut stdout, &mut stderr)
}
