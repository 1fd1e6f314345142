//! CLI interface using clap
//!
//! Defines all command-line arguments and subcommands, plus one handler
//! function per subcommand.

use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};

use crate::core::{
    extract_lines, filter_lines, open_input, substitute_lines, CompiledRegex, Error, GroupSelect,
};

#[derive(Parser)]
#[command(name = "matchline")]
#[command(author, version, about = "Line-oriented regex CLI — substitute, extract, filter.", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Replace the first match on each line, passing unmatched lines through
    ReplaceMatch {
        /// The regex to search for
        pattern: String,

        /// Replacement text (supports $1/${name} and sed-style \1 backreferences)
        replacement: String,

        /// Input file, or `-` for standard input
        #[arg(default_value = "-")]
        input: PathBuf,
    },

    /// Print the matched text (or a capture group) for each matching line
    PrintMatch {
        /// The regex to search for
        pattern: String,

        /// Input file, or `-` for standard input
        #[arg(default_value = "-")]
        input: PathBuf,

        /// Capture group to print: a negative value picks group 1 when the
        /// pattern captures anything (else the whole match), 0 the whole
        /// match, a positive value that group by 1-based index
        #[arg(long, short = 'g', default_value = "-1", allow_negative_numbers = true)]
        group: i64,
    },

    /// Print whole lines that contain a match, verbatim
    PrintLine {
        /// The regex to search for
        pattern: String,

        /// Input file, or `-` for standard input
        #[arg(default_value = "-")]
        input: PathBuf,
    },
}

/// Parse CLI arguments
pub fn parse() -> Cli {
    Cli::parse()
}

/// Handle the replace-match command
pub fn handle_replace_match(pattern: &str, replacement: &str, input: &Path) -> Result<(), Error> {
    let re = CompiledRegex::new(pattern)?;
    let reader = open_input(input)?;
    let mut out = BufWriter::new(io::stdout().lock());
    substitute_lines(&re, replacement, reader, &mut out)?;
    out.flush()?;
    Ok(())
}

/// Handle the print-match command
pub fn handle_print_match(pattern: &str, input: &Path, group: i64) -> Result<(), Error> {
    let re = CompiledRegex::new(pattern)?;
    let select = GroupSelect::from_flag(group);
    let reader = open_input(input)?;
    let mut out = BufWriter::new(io::stdout().lock());
    extract_lines(&re, select, reader, &mut out)?;
    out.flush()?;
    Ok(())
}

/// Handle the print-line command
pub fn handle_print_line(pattern: &str, input: &Path) -> Result<(), Error> {
    let re = CompiledRegex::new(pattern)?;
    let reader = open_input(input)?;
    let mut out = BufWriter::new(io::stdout().lock());
    filter_lines(&re, reader, &mut out)?;
    out.flush()?;
    Ok(())
}
