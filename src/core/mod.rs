//! Core matching and per-line command loops
//!
//! This module contains all the business logic for matchline commands.

pub mod engine;
pub mod error;
pub mod extract;
pub mod filter;
pub mod input;
pub mod substitute;

// Re-export commonly used types
pub use engine::CompiledRegex;
pub use error::Error;
pub use extract::{extract_lines, GroupSelect};
pub use filter::filter_lines;
pub use input::open_input;
pub use substitute::substitute_lines;
