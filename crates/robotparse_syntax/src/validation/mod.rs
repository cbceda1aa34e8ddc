//! Validation beyond what the lexer reports.
//!
//! - `statements` - checks on a single statement, run when it is built
//! - `blocks` - structural and context checks, run once over a parsed file

pub mod blocks;
pub mod statements;

pub use blocks::{validate_block, validate_model};
