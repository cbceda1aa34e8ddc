//! Container nodes: files, sections, test cases, keywords and control structures.

use std::fmt;
use std::path::PathBuf;

use robotparse_core::FileKind;

use super::statement::{Statement, StatementKind};
use crate::lexer::Token;

/// Every kind of block the parser produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlockKind {
    File,
    CommentSection,
    SettingSection,
    VariableSection,
    TestCaseSection,
    KeywordSection,
    TestCase,
    Keyword,
    For,
    If,
    Try,
    While,
}

impl BlockKind {
    /// Node name used in tree dumps.
    pub fn name(self) -> &'static str {
        match self {
            BlockKind::File => "File",
            BlockKind::CommentSection => "CommentSection",
            BlockKind::SettingSection => "SettingSection",
            BlockKind::VariableSection => "VariableSection",
            BlockKind::TestCaseSection => "TestCaseSection",
            BlockKind::KeywordSection => "KeywordSection",
            BlockKind::TestCase => "TestCase",
            BlockKind::Keyword => "Keyword",
            BlockKind::For => "For",
            BlockKind::If => "If",
            BlockKind::Try => "Try",
            BlockKind::While => "While",
        }
    }

    pub fn is_section(self) -> bool {
        matches!(
            self,
            BlockKind::CommentSection
                | BlockKind::SettingSection
                | BlockKind::VariableSection
                | BlockKind::TestCaseSection
                | BlockKind::KeywordSection
        )
    }

    /// `FOR`, `IF`, `TRY` and `WHILE`: blocks closed with `END`.
    pub fn is_control(self) -> bool {
        matches!(self, BlockKind::For | BlockKind::If | BlockKind::Try | BlockKind::While)
    }
}

impl fmt::Display for BlockKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A child of a block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Block(Block),
    Statement(Statement),
}

impl Node {
    pub fn as_block(&self) -> Option<&Block> {
        match self {
            Node::Block(block) => Some(block),
            Node::Statement(_) => None,
        }
    }

    pub fn as_statement(&self) -> Option<&Statement> {
        match self {
            Node::Statement(statement) => Some(statement),
            Node::Block(_) => None,
        }
    }

    pub fn as_block_mut(&mut self) -> Option<&mut Block> {
        match self {
            Node::Block(block) => Some(block),
            Node::Statement(_) => None,
        }
    }

    pub fn as_statement_mut(&mut self) -> Option<&mut Statement> {
        match self {
            Node::Statement(statement) => Some(statement),
            Node::Block(_) => None,
        }
    }

    pub fn into_block(self) -> Option<Block> {
        match self {
            Node::Block(block) => Some(block),
            Node::Statement(_) => None,
        }
    }

    pub fn into_statement(self) -> Option<Statement> {
        match self {
            Node::Statement(statement) => Some(statement),
            Node::Block(_) => None,
        }
    }

    /// `"KeywordCall"`, `"For"`, ...
    pub fn type_name(&self) -> &'static str {
        match self {
            Node::Block(block) => block.kind.name(),
            Node::Statement(statement) => statement.kind().name(),
        }
    }

    /// Tokens in source order.
    pub fn tokens(&self) -> Vec<&Token> {
        match self {
            Node::Block(block) => block.tokens(),
            Node::Statement(statement) => statement.tokens().iter().collect(),
        }
    }

    /// Errors of the node and everything below it, in document order.
    pub fn collect_errors(&self) -> Vec<String> {
        match self {
            Node::Block(block) => block.collect_errors(),
            Node::Statement(statement) => statement.errors(),
        }
    }
}

impl From<Block> for Node {
    fn from(block: Block) -> Self {
        Node::Block(block)
    }
}

impl From<Statement> for Node {
    fn from(statement: Statement) -> Self {
        Node::Statement(statement)
    }
}

/// A block: optional header, body, optional branch (`ELSE IF`/`ELSE`/`EXCEPT`/`FINALLY`) and optional `END`.
///
/// ## Notes
/// - Branches chain through `branch`: the `ELSE` of an `IF ... ELSE IF ... ELSE` hangs off the `ELSE IF` block.
/// - `errors` holds structural problems found by model validation; statement errors stay on the statements.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block {
    pub kind: BlockKind,
    pub header: Option<Statement>,
    pub body: Vec<Node>,
    pub branch: Option<Box<Block>>,
    pub end: Option<Statement>,
    pub errors: Vec<String>,
}

impl Block {
    pub fn new(kind: BlockKind, header: Option<Statement>) -> Self {
        Self {
            kind,
            header,
            body: Vec::new(),
            branch: None,
            end: None,
            errors: Vec::new(),
        }
    }

    /// Set the body.
    pub fn with_body(mut self, body: Vec<Node>) -> Self {
        self.body = body;
        self
    }

    /// Set the next branch.
    pub fn with_branch(mut self, branch: Block) -> Self {
        self.branch = Some(Box::new(branch));
        self
    }

    /// Set the closing `END`.
    pub fn with_end(mut self, end: Statement) -> Self {
        self.end = Some(end);
        self
    }

    /// Set the structural errors.
    pub fn with_errors(mut self, errors: Vec<String>) -> Self {
        self.errors = errors;
        self
    }

    pub fn type_name(&self) -> &'static str {
        self.kind.name()
    }

    pub fn header_kind(&self) -> Option<StatementKind> {
        self.header.as_ref().map(Statement::kind)
    }

    /// Test case, keyword or section name.
    pub fn name(&self) -> Option<&str> {
        self.header.as_ref().and_then(Statement::name)
    }

    /// `ELSE IF`/`ELSE` branch of an `IF` block.
    pub fn orelse(&self) -> Option<&Block> {
        match self.kind {
            BlockKind::If => self.branch.as_deref(),
            _ => None,
        }
    }

    /// `EXCEPT`/`ELSE`/`FINALLY` branch of a `TRY` block.
    pub fn next(&self) -> Option<&Block> {
        match self.kind {
            BlockKind::Try => self.branch.as_deref(),
            _ => None,
        }
    }

    /// Branches following this one, in order.
    pub fn branches(&self) -> impl Iterator<Item = &Block> {
        std::iter::successors(self.branch.as_deref(), |branch| branch.branch.as_deref())
    }

    pub fn condition(&self) -> Option<String> {
        self.header.as_ref().and_then(Statement::condition)
    }

    pub fn assign(&self) -> Vec<&str> {
        self.header.as_ref().map(Statement::assign).unwrap_or_default()
    }

    pub fn is_inline_if(&self) -> bool {
        self.header_kind() == Some(StatementKind::InlineIfHeader)
    }

    /// Tokens of the header, body, branches and `END`, in source order.
    pub fn tokens(&self) -> Vec<&Token> {
        let mut tokens = Vec::new();
        self.push_tokens(&mut tokens);
        tokens
    }

    fn push_tokens<'a>(&'a self, out: &mut Vec<&'a Token>) {
        if let Some(header) = &self.header {
            out.extend(header.tokens());
        }
        for node in &self.body {
            match node {
                Node::Block(block) => block.push_tokens(out),
                Node::Statement(statement) => out.extend(statement.tokens()),
            }
        }
        if let Some(branch) = &self.branch {
            branch.push_tokens(out);
        }
        if let Some(end) = &self.end {
            out.extend(end.tokens());
        }
    }

    // ---- positions ----------------------------------------------------------

    pub fn lineno(&self) -> usize {
        self.tokens().first().map_or(0, |token| token.line)
    }

    pub fn col_offset(&self) -> usize {
        self.tokens().first().map_or(0, |token| token.column)
    }

    pub fn end_lineno(&self) -> usize {
        self.tokens().last().map_or(0, |token| token.line)
    }

    pub fn end_col_offset(&self) -> usize {
        self.tokens().last().map_or(0, |token| token.end_column())
    }

    /// Errors of the block and everything below it, in document order.
    ///
    /// Header errors come first, then the block's structural errors, the body, the branches and the `END`.
    pub fn collect_errors(&self) -> Vec<String> {
        let mut errors = Vec::new();
        if let Some(header) = &self.header {
            errors.extend(header.errors());
        }
        errors.extend(self.errors.iter().cloned());
        for node in &self.body {
            errors.extend(node.collect_errors());
        }
        if let Some(branch) = &self.branch {
            errors.extend(branch.collect_errors());
        }
        if let Some(end) = &self.end {
            errors.extend(end.errors());
        }
        errors
    }
}

/// A parsed document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct File {
    /// Path the data was read from, if any; used as the default save target.
    pub source: Option<PathBuf>,
    pub kind: FileKind,
    /// Block of kind [`BlockKind::File`] whose body holds the sections.
    pub root: Block,
}

impl File {
    pub fn new(source: Option<PathBuf>, kind: FileKind, sections: Vec<Node>) -> Self {
        Self {
            source,
            kind,
            root: Block::new(BlockKind::File, None).with_body(sections),
        }
    }

    /// Section blocks in order.
    pub fn sections(&self) -> impl Iterator<Item = &Block> {
        self.root.body.iter().filter_map(Node::as_block)
    }

    pub fn section(&self, index: usize) -> Option<&Block> {
        self.sections().nth(index)
    }

    pub fn collect_errors(&self) -> Vec<String> {
        self.root.collect_errors()
    }

    pub fn tokens(&self) -> Vec<&Token> {
        self.root.tokens()
    }
}
