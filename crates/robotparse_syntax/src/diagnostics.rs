//! Turn node errors into located diagnostics.
//!
//! Errors live on tokens, statements and blocks as plain strings. [`collect_diagnostics`] walks a parsed [`File`] and
//! pairs every message with the place it belongs to, so tools can render them with `miette`.
//!
//! ## Notes
//! - Token errors point at the token, statement errors at the statement's data, block errors at the block header.
//! - Spans are byte ranges into the source text the file was parsed from. Nodes built in code (line 0) get an empty
//!   span at offset 0.

use std::fmt;
use std::iter;

use miette::{LabeledSpan, SourceSpan};

use crate::ast::{Block, File, Statement};
use crate::lexer::{Token, TokenKind};
use crate::visitor::Visitor;

/// How bad a diagnostic is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Severity {
    /// Reported, the rest of the file is still understood.
    Error,
    /// The rest of the file is no longer structured.
    Fatal,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Fatal => write!(f, "fatal error"),
        }
    }
}

/// One error message with its location.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct ModelDiagnostic {
    pub message: String,
    pub severity: Severity,
    /// 1-based line, 0 for nodes not read from source.
    pub line: usize,
    /// 0-based column in characters.
    pub column: usize,
    pub span: SourceSpan,
}

impl miette::Diagnostic for ModelDiagnostic {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let code = match self.severity {
            Severity::Error => "robotparse::error",
            Severity::Fatal => "robotparse::fatal",
        };
        Some(Box::new(code))
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        let label = LabeledSpan::new_with_span(Some(self.severity.to_string()), self.span);
        Some(Box::new(iter::once(label)))
    }
}

/// Every error in `file`, located in `source`.
///
/// ## Parameters
/// - `file`: the parsed tree.
/// - `source`: the text `file` was parsed from, used to turn line/column positions into byte offsets.
pub fn collect_diagnostics(file: &File, source: &str) -> Vec<ModelDiagnostic> {
    let mut collector = Collector {
        lines: LineIndex::new(source),
        diagnostics: Vec::new(),
    };
    collector.visit_model(file);
    collector.diagnostics
}

struct Collector<'a> {
    lines: LineIndex<'a>,
    diagnostics: Vec<ModelDiagnostic>,
}

impl Collector<'_> {
    fn push(&mut self, message: &str, severity: Severity, first: Option<&Token>, last: Option<&Token>) {
        let (line, column, span) = match (first, last) {
            (Some(first), Some(last)) => {
                let start = self.lines.offset(first.line, first.column);
                let end = self.lines.offset(last.line, last.column) + last.value.len();
                (first.line, first.column, SourceSpan::from(start..end.max(start)))
            }
            _ => (0, 0, SourceSpan::from(0..0)),
        };
        self.diagnostics.push(ModelDiagnostic {
            message: message.to_string(),
            severity,
            line,
            column,
            span,
        });
    }

    fn push_statement_errors(&mut self, statement: &Statement) {
        let mut token_errors = 0;
        for token in statement.tokens() {
            if let Some(error) = &token.error {
                let severity = if token.kind == TokenKind::FatalError {
                    Severity::Fatal
                } else {
                    Severity::Error
                };
                self.push(error, severity, Some(token), Some(token));
                token_errors += 1;
            }
        }
        let first = statement.data_tokens().next();
        let last = statement.data_tokens().last();
        for error in statement.errors().iter().skip(token_errors) {
            self.push(error, Severity::Error, first, last);
        }
    }
}

impl Visitor for Collector<'_> {
    fn visit_block(&mut self, block: &Block) {
        if let Some(header) = &block.header {
            self.push_statement_errors(header);
        }
        let first = block.header.as_ref().and_then(|header| header.data_tokens().next());
        let last = block.header.as_ref().and_then(|header| header.data_tokens().last());
        for error in &block.errors {
            self.push(error, Severity::Error, first, last);
        }
        for node in &block.body {
            self.visit(node);
        }
        if let Some(branch) = &block.branch {
            self.dispatch_block(branch);
        }
        if let Some(end) = &block.end {
            self.dispatch_statement(end);
        }
    }

    fn visit_statement(&mut self, statement: &Statement) {
        self.push_statement_errors(statement);
    }
}

/// Byte offsets of line starts, using the same line endings as the tokenizer.
struct LineIndex<'a> {
    source: &'a str,
    starts: Vec<usize>,
}

impl<'a> LineIndex<'a> {
    fn new(source: &'a str) -> Self {
        let bytes = source.as_bytes();
        let mut starts = vec![0];
        let mut i = 0;
        while i < bytes.len() {
            match bytes[i] {
                b'\r' if bytes.get(i + 1) == Some(&b'\n') => {
                    i += 2;
                    starts.push(i);
                }
                b'\r' | b'\n' => {
                    i += 1;
                    starts.push(i);
                }
                _ => i += 1,
            }
        }
        Self { source, starts }
    }

    /// Byte offset of a (1-based line, character column) position, clamped to the source.
    fn offset(&self, line: usize, column: usize) -> usize {
        let Some(&start) = line.checked_sub(1).and_then(|index| self.starts.get(index)) else {
            return 0;
        };
        let rest = &self.source[start..];
        let within = rest.char_indices().nth(column).map_or(rest.len(), |(offset, _)| offset);
        start + within
    }
}
