//! Error taxonomy for command execution
//!
//! Every variant is fatal: main reports it on stderr and exits non-zero.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use super::engine::EngineError;

#[derive(Error, Debug)]
pub enum Error {
    /// Match or replacement pattern failed to compile
    #[error("invalid pattern `{pattern}`: {source}")]
    Pattern {
        pattern: String,
        #[source]
        source: EngineError,
    },

    /// Named input file cannot be opened
    #[error("cannot open `{}`: {source}", path.display())]
    FileAccess {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Requested capture group index does not exist in the pattern
    #[error("no capture group {requested}: pattern defines {available} capture group(s)")]
    GroupIndex { requested: usize, available: usize },

    /// The engine gave up mid-search (fancy-regex backtrack limit)
    #[error("search failed: {0}")]
    Search(#[from] EngineError),

    /// Read or write failure while streaming lines
    #[error(transparent)]
    Io(#[from] io::Error),
}
