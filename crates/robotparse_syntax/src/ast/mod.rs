//! Syntax tree for Robot Framework data.
//!
//! The tree is lossless: every token the lexer produced, separators and line ends included, lives in exactly one
//! [`Statement`]. [`Block`]s only group statements, so writing the tokens back out in tree order reproduces the
//! source.
//!
//! ## Module Structure
//!
//! - `statement` - Leaf nodes, their kinds, accessors and builders
//! - `block` - Files, sections, test cases, keywords and control structures

mod block;
mod statement;

pub use block::{Block, BlockKind, File, Node};
pub use statement::{Layout, Statement, StatementKind};
