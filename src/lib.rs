#![forbid(unsafe_code)]
//! Robot Framework data parsing
//!
//! `robotparse` reads test case, resource and suite initialization files into a model that keeps every token, so the
//! model can be inspected, rewritten and saved back without losing formatting. The work is split across the
//! workspace: `robotparse_core` holds the vocabulary, `robotparse_syntax` the lexer, parser and model, and this crate
//! the file-level entry points and the `robotparse` CLI.
//!
//! ## Panic Policy
//!
//! - **Production code**: Use `Result` or `Option` with `?` / `ok_or` / `map_err`. The `cli` module enforces
//!   `#![deny(clippy::unwrap_used)]`.
//! - **Malformed data** is never a panic or an `Err`: it is recorded as errors on the model nodes.
//! - **Test code**: `.unwrap()` and `.expect()` are acceptable in tests.

pub mod cli;
pub mod model;
pub mod source;

pub use model::{
    ModelError, get_init_model, get_init_tokens, get_model, get_resource_model, get_resource_tokens, get_tokens, save,
};
pub use source::Source;

pub use robotparse_core::FileKind;
pub use robotparse_syntax::ast::{self, Block, BlockKind, File, Node, Statement, StatementKind};
pub use robotparse_syntax::config::ParseConfig;
pub use robotparse_syntax::diagnostics::{self, ModelDiagnostic, Severity};
pub use robotparse_syntax::lexer::{self, Token, TokenKind};
pub use robotparse_syntax::visitor::{self, Transformer, Visitor};
pub use robotparse_syntax::{parser, validation, writer};
