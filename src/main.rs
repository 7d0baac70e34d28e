//! sorting-tool - sort and tabulate numbers, lines or words
//!
//! sorting-tool provides:
//! - Classification of text input into integers, lines or words
//! - Natural ordering reports
//! - Frequency reports ordered by count, ties broken by value
//! - Text or JSON output to stdout or a file

use clap::Parser;
use std::process::ExitCode;

mod cli;
mod core;
mod error;
mod logging;

fn main() -> ExitCode {
    let raw = std::env::args_os().map(|arg| arg.to_string_lossy().into_owned());
    let args = match cli::normalize_args(raw, |warning| eprintln!("{}", warning)) {
        Ok(args) => args,
        Err(err) => {
            eprintln!("{}", err);
            return ExitCode::FAILURE;
        }
    };

    let cli = cli::Cli::parse_from(args);
    logging::init(cli.verbose);

    match cli::run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{:#}", err);
            ExitCode::FAILURE
        }
    }
}
