//! Parser for Robot Framework data.
//!
//! Turns lexed statements into a [`File`]: sections, test cases, keywords and nested control structures. The parser
//! keeps a stack of open blocks; each statement is offered to the innermost block and blocks that cannot take it are
//! closed until one can.
//!
//! ## Notes
//! - Parsing never fails. Malformed data produces error tokens and block errors, never a `Result::Err`.
//! - Branches (`ELSE IF`, `ELSE`, `EXCEPT`, `FINALLY`) are written one after another but nest in the tree: each
//!   branch is the `branch` of the one before it.
//! - After the tree is built, [`crate::validation::validate_model`] adds the structural errors.
//!
//! ## Examples
//!
//! ```rust
//! use robotparse_syntax::ast::BlockKind;
//! use robotparse_syntax::config::ParseConfig;
//! use robotparse_syntax::parser;
//!
//! let source = "*** Test Cases ***\nExample\n    FOR    ${i}    IN    a    b\n        Log    ${i}\n    END\n";
//! let file = parser::parse(source, &ParseConfig::default(), None);
//! let test = file.section(0).and_then(|section| section.body[0].as_block()).unwrap();
//! assert_eq!(test.body[0].as_block().map(|block| block.kind), Some(BlockKind::For));
//! assert!(file.collect_errors().is_empty());
//! ```

use std::path::PathBuf;

use robotparse_core::FileKind;
use robotparse_core::lang::sections::{self, SectionId};

use crate::ast::{Block, BlockKind, File, Node, Statement, StatementKind};
use crate::config::ParseConfig;
use crate::lexer::{self, Token, TokenKind};
use crate::validation;

// NOTE: This module is split across multiple files using `include!` to keep the frame rules and the driver in the same
// Rust module (sharing private types) while keeping each file focused.

include!("parser/core.rs");
include!("parser/frames.rs");
include!("parser/api.rs");
include!("parser/tests.rs");
