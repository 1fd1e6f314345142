//! matchline - line-oriented regex CLI
//!
//! Substitute, extract, and filter lines from files or stdin.

mod cli;
mod core;

use std::io;
use std::process::ExitCode;

fn main() -> ExitCode {
    use cli::{parse, Commands};

    let args = parse();

    let result = match args.command {
        Commands::ReplaceMatch {
            pattern,
            replacement,
            input,
        } => cli::handle_replace_match(&pattern, &replacement, &input),

        Commands::PrintMatch {
            pattern,
            input,
            group,
        } => cli::handle_print_match(&pattern, &input, group),

        Commands::PrintLine { pattern, input } => cli::handle_print_line(&pattern, &input),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        // A closed pipe on stdout is how downstream tools say "enough".
        Err(crate::core::Error::Io(e)) if e.kind() == io::ErrorKind::BrokenPipe => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("matchline: {}", e);
            ExitCode::FAILURE
        }
    }
}
