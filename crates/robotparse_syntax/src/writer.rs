//! Turn a tree back into text.
//!
//! Writing concatenates the value of every token in document order. Trees parsed without `data_only` keep every
//! separator and line ending, so writing them reproduces the source byte for byte.
//!
//! [`dump`] renders the tree structure instead, one node per line, for debugging and snapshot tests.

use std::fmt;

use crate::ast::{Block, File, Node, Statement};
use crate::visitor::Visitor;

/// Visitor that writes token values into a [`fmt::Write`] sink.
pub struct ModelWriter<W> {
    out: W,
    result: fmt::Result,
}

impl<W: fmt::Write> ModelWriter<W> {
    pub fn new(out: W) -> Self {
        Self { out, result: Ok(()) }
    }

    /// Return the sink, or the first write error.
    pub fn finish(self) -> Result<W, fmt::Error> {
        self.result.map(|()| self.out)
    }
}

impl<W: fmt::Write> Visitor for ModelWriter<W> {
    fn visit_statement(&mut self, statement: &Statement) {
        if self.result.is_err() {
            return;
        }
        self.result = statement
            .tokens()
            .iter()
            .try_for_each(|token| self.out.write_str(&token.value));
    }
}

/// Write `file` into `out`.
pub fn write_model<W: fmt::Write>(file: &File, out: W) -> Result<W, fmt::Error> {
    let mut writer = ModelWriter::new(out);
    writer.visit_model(file);
    writer.finish()
}

/// The text of `file`.
pub fn to_text(file: &File) -> String {
    let mut writer = ModelWriter::new(String::new());
    writer.visit_model(file);
    // Writing into a `String` cannot fail.
    writer.out
}

impl fmt::Display for File {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_model(self, f).map(|_| ())
    }
}

impl fmt::Display for Block {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut writer = ModelWriter::new(f);
        writer.dispatch_block(self);
        writer.finish().map(|_| ())
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Node::Block(block) => fmt::Display::fmt(block, f),
            Node::Statement(statement) => fmt::Display::fmt(statement, f),
        }
    }
}

// ============================================================================
// TREE DUMP
// ============================================================================

/// Render the structure of `file`: node kinds, data tokens with positions, and errors.
///
/// ## Examples
/// ```rust
/// use robotparse_syntax::config::ParseConfig;
/// use robotparse_syntax::{parser, writer};
///
/// let file = parser::parse("*** Keywords ***\nK\n    Log    x\n", &ParseConfig::default(), None);
/// let dump = writer::dump(&file);
/// assert!(dump.contains("KeywordCall [KEYWORD 'Log' 3:4, ARGUMENT 'x' 3:11]"));
/// ```
pub fn dump(file: &File) -> String {
    let mut out = String::new();
    dump_block(&file.root, 0, None, &mut out);
    out
}

fn dump_block(block: &Block, depth: usize, label: Option<&str>, out: &mut String) {
    let indent = "  ".repeat(depth);
    let label = label.map(|label| format!("{label}: ")).unwrap_or_default();
    out.push_str(&format!("{indent}{label}{}\n", block.type_name()));
    for error in &block.errors {
        out.push_str(&format!("{indent}  ! {error}\n"));
    }
    if let Some(header) = &block.header {
        dump_statement(header, depth + 1, Some("header"), out);
    }
    for node in &block.body {
        match node {
            Node::Block(child) => dump_block(child, depth + 1, None, out),
            Node::Statement(statement) => dump_statement(statement, depth + 1, None, out),
        }
    }
    if let Some(branch) = &block.branch {
        let label = if block.orelse().is_some() { "orelse" } else { "next" };
        dump_block(branch, depth + 1, Some(label), out);
    }
    if let Some(end) = &block.end {
        dump_statement(end, depth + 1, Some("end"), out);
    }
}

fn dump_statement(statement: &Statement, depth: usize, label: Option<&str>, out: &mut String) {
    let indent = "  ".repeat(depth);
    let label = label.map(|label| format!("{label}: ")).unwrap_or_default();
    let tokens: Vec<String> = statement
        .data_tokens()
        .map(|token| format!("{} '{}' {}:{}", token.kind, token.value, token.line, token.column))
        .collect();
    out.push_str(&format!("{indent}{label}{} [{}]\n", statement.kind().name(), tokens.join(", ")));
    for error in statement.errors() {
        out.push_str(&format!("{indent}  ! {error}\n"));
    }
}
