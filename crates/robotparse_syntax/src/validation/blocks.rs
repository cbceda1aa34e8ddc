//! Structural checks on parsed blocks and context checks on `RETURN`, `BREAK` and `CONTINUE`.
//!
//! Statement checks only see one line. Whether a loop is empty, an `IF` has two `ELSE` branches or a `BREAK` sits
//! inside a loop needs the tree, so these run as one [`Transformer`] pass after parsing.
//!
//! ## Notes
//! - Block errors are appended in a fixed order: empty body, then branch structure, then missing `END`.
//! - The pass appends errors. Running it twice on the same tree reports everything twice.

use std::iter;

use robotparse_core::errors;

use crate::ast::{Block, BlockKind, File, Node, Statement, StatementKind};
use crate::visitor::Transformer;

/// Run the block and context checks over a parsed file.
#[tracing::instrument(skip_all)]
pub fn validate_model(file: File) -> File {
    ModelValidator::default().visit_model(file)
}

/// Structural errors of one block, not including its descendants.
pub fn validate_block(block: &Block) -> Vec<String> {
    match block.kind {
        BlockKind::For => validate_loop(block, errors::FOR_EMPTY_BODY, errors::FOR_NO_END),
        BlockKind::While => validate_loop(block, errors::WHILE_EMPTY_BODY, errors::WHILE_NO_END),
        BlockKind::If => validate_if(block),
        BlockKind::Try => validate_try(block),
        _ => Vec::new(),
    }
}

/// A body is empty when nothing in it would run: comments, empty lines and errors do not count.
pub fn body_is_empty(body: &[Node]) -> bool {
    !body.iter().any(|node| match node {
        Node::Block(_) => true,
        Node::Statement(statement) => statement.kind().is_executable(),
    })
}

fn validate_loop(block: &Block, empty: &str, no_end: &str) -> Vec<String> {
    let mut found = Vec::new();
    if body_is_empty(&block.body) {
        found.push(empty.to_string());
    }
    if block.end.is_none() {
        found.push(no_end.to_string());
    }
    found
}

// ============================================================================
// IF
// ============================================================================

fn validate_if(block: &Block) -> Vec<String> {
    let mut found = Vec::new();
    let header = block.header_kind();
    if body_is_empty(&block.body) {
        let marker = match header {
            Some(StatementKind::ElseIfHeader) => "ELSE IF",
            Some(StatementKind::ElseHeader) => "ELSE",
            _ => "IF",
        };
        found.push(errors::empty_branch(marker));
    }
    if matches!(header, Some(StatementKind::ElseIfHeader | StatementKind::ElseHeader)) {
        return found;
    }
    found.extend(if_structure(block));
    if block.is_inline_if() {
        found.extend(inline_if_content(block));
    } else if block.end.is_none() {
        found.push(errors::IF_NO_END.to_string());
    }
    found
}

fn if_structure(root: &Block) -> Vec<String> {
    let mut else_seen = false;
    let mut multiple_else = false;
    let mut else_if_after_else = false;
    for branch in root.branches() {
        match branch.header_kind() {
            Some(StatementKind::ElseHeader) => {
                multiple_else |= else_seen;
                else_seen = true;
            }
            Some(StatementKind::ElseIfHeader) => else_if_after_else |= else_seen,
            _ => {}
        }
    }
    let mut found = Vec::new();
    if multiple_else {
        found.push(errors::MULTIPLE_ELSE.to_string());
    }
    if else_if_after_else {
        found.push(errors::ELSE_IF_AFTER_ELSE.to_string());
    }
    found
}

/// Checks on what the branches of an inline `IF` contain.
fn inline_if_content(root: &Block) -> Vec<String> {
    let assigns = !root.assign().is_empty();
    let mut nested = false;
    let mut non_call = false;
    let mut branch_assign = false;
    for branch in iter::once(root).chain(root.branches()) {
        for node in &branch.body {
            match node {
                Node::Block(inner) => {
                    nested |= inner.is_inline_if();
                    non_call = true;
                }
                Node::Statement(statement) => match statement.kind() {
                    StatementKind::KeywordCall => branch_assign |= !statement.assign().is_empty(),
                    kind => non_call |= kind.is_executable(),
                },
            }
        }
    }
    let mut found = Vec::new();
    if nested {
        found.push(errors::INLINE_IF_NESTED.to_string());
    }
    if assigns && non_call {
        found.push(errors::INLINE_IF_ASSIGN_ONLY_CALLS.to_string());
    }
    if branch_assign {
        found.push(errors::INLINE_IF_BRANCH_ASSIGN.to_string());
    }
    found
}

// ============================================================================
// TRY
// ============================================================================

fn validate_try(block: &Block) -> Vec<String> {
    let mut found = Vec::new();
    let header = block.header_kind();
    if body_is_empty(&block.body) {
        let marker = match header {
            Some(StatementKind::ExceptHeader) => "EXCEPT",
            Some(StatementKind::ElseHeader) => "ELSE",
            Some(StatementKind::FinallyHeader) => "FINALLY",
            _ => "TRY",
        };
        found.push(errors::empty_branch(marker));
    }
    if header.is_some_and(|kind| kind != StatementKind::TryHeader) {
        return found;
    }
    found.extend(try_structure(block));
    if block.end.is_none() {
        found.push(errors::TRY_NO_END.to_string());
    }
    found
}

fn try_structure(root: &Block) -> Vec<String> {
    let mut found: Vec<&str> = Vec::new();
    let mut push = |error: &'static str| {
        if !found.contains(&error) {
            found.push(error);
        }
    };
    let (mut except_seen, mut empty_except_seen, mut else_seen, mut finally_seen) = (false, false, false, false);
    for branch in root.branches() {
        match branch.header_kind() {
            Some(StatementKind::ExceptHeader) => {
                if else_seen {
                    push(errors::EXCEPT_AFTER_ELSE);
                }
                if finally_seen {
                    push(errors::EXCEPT_AFTER_FINALLY);
                }
                let has_patterns = branch.header.as_ref().is_some_and(|header| !header.patterns().is_empty());
                if empty_except_seen {
                    push(if has_patterns {
                        errors::EMPTY_EXCEPT_NOT_LAST
                    } else {
                        errors::MULTIPLE_EMPTY_EXCEPT
                    });
                }
                empty_except_seen |= !has_patterns;
                except_seen = true;
            }
            Some(StatementKind::ElseHeader) => {
                if finally_seen {
                    push(errors::ELSE_AFTER_FINALLY);
                }
                if else_seen {
                    push(errors::MULTIPLE_TRY_ELSE);
                }
                else_seen = true;
            }
            Some(StatementKind::FinallyHeader) => {
                if finally_seen {
                    push(errors::MULTIPLE_FINALLY);
                }
                finally_seen = true;
            }
            _ => {}
        }
    }
    if !except_seen && !finally_seen {
        push(errors::TRY_WITHOUT_HANDLER);
    }
    found.into_iter().map(str::to_string).collect()
}

// ============================================================================
// CONTEXT
// ============================================================================

/// The part of an enclosing block the context checks look at.
#[derive(Debug, Clone, Copy)]
struct Enclosing {
    kind: BlockKind,
    header: Option<StatementKind>,
}

impl Enclosing {
    fn is_loop(self) -> bool {
        matches!(self.kind, BlockKind::For | BlockKind::While)
    }

    fn is_finally(self) -> bool {
        self.kind == BlockKind::Try && self.header == Some(StatementKind::FinallyHeader)
    }
}

#[derive(Debug, Default)]
struct ModelValidator {
    enclosing: Vec<Enclosing>,
}

impl ModelValidator {
    fn return_error(&self) -> Option<String> {
        let Some(keyword) = self.enclosing.iter().rposition(|block| block.kind == BlockKind::Keyword) else {
            return Some(errors::RETURN_OUTSIDE_KEYWORD.to_string());
        };
        self.enclosing[keyword..]
            .iter()
            .any(|block| block.is_finally())
            .then(|| errors::RETURN_IN_FINALLY.to_string())
    }

    fn loop_control_error(&self, marker: &str) -> Option<String> {
        let Some(innermost_loop) = self.enclosing.iter().rposition(|block| block.is_loop()) else {
            return Some(errors::loop_control_outside_loop(marker));
        };
        self.enclosing[innermost_loop..]
            .iter()
            .any(|block| block.is_finally())
            .then(|| errors::loop_control_in_finally(marker))
    }

    fn with_error(mut statement: Statement, error: Option<String>) -> Option<Node> {
        if let Some(error) = error {
            statement.add_error(error);
        }
        Some(Node::Statement(statement))
    }
}

impl Transformer for ModelValidator {
    fn visit_block(&mut self, block: Block) -> Option<Node> {
        self.enclosing.push(Enclosing {
            kind: block.kind,
            header: block.header_kind(),
        });
        let mut block = self.generic_visit(block);
        self.enclosing.pop();
        let found = validate_block(&block);
        block.errors.extend(found);
        Some(Node::Block(block))
    }

    fn visit_return_statement(&mut self, statement: Statement) -> Option<Node> {
        let error = self.return_error();
        Self::with_error(statement, error)
    }

    fn visit_break(&mut self, statement: Statement) -> Option<Node> {
        let error = self.loop_control_error("BREAK");
        Self::with_error(statement, error)
    }

    fn visit_continue(&mut self, statement: Statement) -> Option<Node> {
        let error = self.loop_control_error("CONTINUE");
        Self::with_error(statement, error)
    }
}
