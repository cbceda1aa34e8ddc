//! Provide shared, pure helpers and canonical vocabulary for parsing Robot Framework test data.
//!
//! This crate is intentionally small and dependency-free. It contains deterministic helpers that both:
//! - the syntax front end uses for lexing and statement validation decisions, and
//! - downstream tooling (linters, formatters, editors) can use to agree on the same spellings and messages.
//!
//! ## Notes
//!
//! - This is a “semantic core” crate: **no IO**, no global state, and no AST types.
//! - Current scope: section/setting/control-word registries, whitespace normalization, message formatting,
//!   variable-syntax matching, and the shared user-facing error messages.

pub mod errors;
pub mod lang;
pub mod strings;
pub mod variables;

pub use lang::registry::FileKind;
