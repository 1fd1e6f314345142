//! Implementation of `matchline print-line`
//!
//! Grep-style line filter: lines with a match anywhere are emitted
//! verbatim, lines without one are dropped.

use std::io::{BufRead, Write};

use super::engine::CompiledRegex;
use super::error::Error;

pub fn filter_lines<R: BufRead, W: Write>(
    re: &CompiledRegex,
    reader: R,
    out: &mut W,
) -> Result<(), Error> {
    for line in reader.lines() {
        let line = line?;
        if re.is_match(&line)? {
            writeln!(out, "{}", line)?;
        }
    }

    Ok(())
}
