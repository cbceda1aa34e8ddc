//! Syntax front end for Robot Framework data: lexer, statement and block model, parser, traversal, writer.
//!
//! The crate has no file IO. Callers hand it text and get back a [`ast::File`] tree that keeps every token, so the
//! tree can be inspected, rewritten with a [`visitor::Transformer`] and written back with [`writer`].
//!
//! ## Notes
//! - Parsing never fails. Problems are recorded as errors on tokens, statements and blocks; see
//!   [`diagnostics::collect_diagnostics`] for a located view of them.
//! - Vocabulary (sections, settings, control words, messages) comes from the `robotparse_core` registries.
//!
//! ## Examples
//! ```rust
//! use robotparse_syntax::config::ParseConfig;
//! use robotparse_syntax::{parser, writer};
//!
//! let source = "*** Test Cases ***\nExample\n    Log    Hello\n";
//! let file = parser::parse(source, &ParseConfig::default(), None);
//! assert_eq!(file.sections().count(), 1);
//! assert_eq!(writer::to_text(&file), source);
//! ```

pub mod ast;
pub mod config;
pub mod diagnostics;
pub mod lexer;
pub mod parser;
pub mod token_helpers;
pub mod validation;
pub mod visitor;
pub mod writer;

pub use ast::{Block, BlockKind, File, Node, Statement, StatementKind};
pub use config::ParseConfig;
pub use lexer::{Token, TokenKind};
pub use visitor::{Transformer, Visitor};
