//! CLI entrypoint for the quickweave build step.
//!
//! The binary delegates to [`quickweave_cli::run`], which loads configuration,
//! parses the subcommand, and runs it against the process's standard streams.

use std::io::{self, StderrLock, StdoutLock};
use std::process::ExitCode;

fn main() -> ExitCode {
    let mut stdout: StdoutLock<'_> = io::stdout().lock();
    let mut stderr: StderrLock<'_> = io::stderr().lock();
    quickweave_cli::run(std::env::args_os(), &mut stdout, &mut stderr)
}
