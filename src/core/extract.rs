//! Implementation of `matchline print-match`
//!
//! Searches each line for the first match and prints the selected part of
//! it. Lines without a match contribute no output line at all.

use std::io::{BufRead, Write};

use super::engine::CompiledRegex;
use super::error::Error;

/// Which part of a match to print.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroupSelect {
    /// Group 1 when the pattern captures anything, otherwise the whole match
    Default,
    /// The whole match (group 0), ignoring capture groups
    WholeMatch,
    /// A specific capture group by 1-based index
    Explicit(usize),
}

impl GroupSelect {
    /// Map the CLI's numeric convention: negative means default, zero the
    /// whole match, positive an explicit group.
    pub fn from_flag(group: i64) -> Self {
        match group {
            g if g < 0 => GroupSelect::Default,
            0 => GroupSelect::WholeMatch,
            g => GroupSelect::Explicit(g as usize),
        }
    }

    /// Resolve to a concrete group index for a compiled pattern.
    ///
    /// Group existence is static in this dialect, so an out-of-range
    /// explicit index is rejected here, before any input line is read.
    pub fn resolve(self, re: &CompiledRegex) -> Result<usize, Error> {
        let available = re.group_count() - 1; // capture groups, excluding group 0
        match self {
            GroupSelect::Default => Ok(if available > 0 { 1 } else { 0 }),
            GroupSelect::WholeMatch => Ok(0),
            GroupSelect::Explicit(n) if n <= available => Ok(n),
            GroupSelect::Explicit(n) => Err(Error::GroupIndex {
                requested: n,
                available,
            }),
        }
    }
}

/// Run the extract loop: one output line per matching input line, in input
/// order. A group that sat out a particular match prints as an empty line.
pub fn extract_lines<R: BufRead, W: Write>(
    re: &CompiledRegex,
    select: GroupSelect,
    reader: R,
    out: &mut W,
) -> Result<(), Error> {
    let group = select.resolve(re)?;

    for line in reader.lines() {
        let line = line?;
        if let Some(caps) = re.captures(&line)? {
            writeln!(out, "{}", caps.get(group).unwrap_or(""))?;
        }
    }

    Ok(())
}
