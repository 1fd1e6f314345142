//! Pattern compilation and engine selection
//!
//! Automatically chooses between `regex` (fast, linear time) and
//! `fancy-regex` (backtracking, lookaround and backreferences) based on
//! what the pattern uses. The compiled matcher is built once per
//! invocation and reused for every line.

use std::sync::LazyLock;

use thiserror::Error;

use super::error::Error;

static BACKREFERENCE_RE: LazyLock<regex::Regex> = LazyLock::new(|| {
    regex::Regex::new(r"\\[1-9]").expect("BUG: backreference detection pattern is invalid")
});

/// Errors produced by the underlying regex engines, at compile time or
/// (for fancy-regex) while searching.
#[derive(Error, Debug)]
pub enum EngineError {
    #[error("{0}")]
    Regex(#[from] regex::Error),

    #[error("{0}")]
    FancyRegex(#[from] fancy_regex::Error),
}

/// Returns true if the pattern uses features only fancy-regex supports:
/// lookahead, lookbehind, atomic groups, or backreferences in the pattern.
fn needs_fancy(pattern: &str) -> bool {
    pattern.contains("(?=")
        || pattern.contains("(?!")
        || pattern.contains("(?<=")
        || pattern.contains("(?<!")
        || pattern.contains("(?>")
        || BACKREFERENCE_RE.is_match(pattern)
}

/// Capture groups of a single match, from either engine.
///
/// `get(0)` is the whole match; groups that exist in the pattern but did
/// not participate in this match return `None`.
pub enum Captures<'t> {
    Regex(regex::Captures<'t>),
    FancyRegex(fancy_regex::Captures<'t>),
}

impl<'t> Captures<'t> {
    pub fn get(&self, group: usize) -> Option<&'t str> {
        match self {
            Captures::Regex(caps) => caps.get(group).map(|m| m.as_str()),
            Captures::FancyRegex(caps) => caps.get(group).map(|m| m.as_str()),
        }
    }

    /// Byte span of a group within the searched text
    pub fn span(&self, group: usize) -> Option<(usize, usize)> {
        match self {
            Captures::Regex(caps) => caps.get(group).map(|m| (m.start(), m.end())),
            Captures::FancyRegex(caps) => caps.get(group).map(|m| (m.start(), m.end())),
        }
    }

    /// Text of a named group, if it participated in the match
    pub fn named(&self, name: &str) -> Option<&'t str> {
        match self {
            Captures::Regex(caps) => caps.name(name).map(|m| m.as_str()),
            Captures::FancyRegex(caps) => caps.name(name).map(|m| m.as_str()),
        }
    }
}

/// A compiled regex that can use either engine
#[derive(Debug)]
pub enum CompiledRegex {
    Regex(regex::Regex),
    FancyRegex(fancy_regex::Regex),
}

impl CompiledRegex {
    /// Compile a pattern with automatic engine selection.
    ///
    /// Fails fast with [`Error::Pattern`] before any input is read.
    pub fn new(pattern: &str) -> Result<Self, Error> {
        Self::compile(pattern).map_err(|source| Error::Pattern {
            pattern: pattern.to_string(),
            source,
        })
    }

    fn compile(pattern: &str) -> Result<Self, EngineError> {
        if needs_fancy(pattern) {
            let re = fancy_regex::Regex::new(pattern)?;
            return Ok(CompiledRegex::FancyRegex(re));
        }
        match regex::Regex::new(pattern) {
            Ok(re) => Ok(CompiledRegex::Regex(re)),
            Err(_) => {
                // Fall back to fancy-regex if the standard engine refuses
                let re = fancy_regex::Regex::new(pattern)?;
                Ok(CompiledRegex::FancyRegex(re))
            }
        }
    }

    /// Number of capture groups in the pattern, including the implicit
    /// group 0.
    pub fn group_count(&self) -> usize {
        match self {
            CompiledRegex::Regex(re) => re.captures_len(),
            CompiledRegex::FancyRegex(re) => re.capture_names().count(),
        }
    }

    /// Check if the pattern matches anywhere in the text
    pub fn is_match(&self, text: &str) -> Result<bool, Error> {
        match self {
            CompiledRegex::Regex(re) => Ok(re.is_match(text)),
            CompiledRegex::FancyRegex(re) => re.is_match(text).map_err(|e| Error::Search(e.into())),
        }
    }

    /// Capture groups of the first match, if any
    pub fn captures<'t>(&self, text: &'t str) -> Result<Option<Captures<'t>>, Error> {
        match self {
            CompiledRegex::Regex(re) => Ok(re.captures(text).map(Captures::Regex)),
            CompiledRegex::FancyRegex(re) => re
                .captures(text)
                .map(|opt| opt.map(Captures::FancyRegex))
                .map_err(|e| Error::Search(e.into())),
        }
    }
}
