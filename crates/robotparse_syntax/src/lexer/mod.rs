//! Lexer for Robot Framework data.
//!
//! Lexing happens in two stages:
//! - `tokenizer` splits lines into cells and groups physical lines into logical statements
//!   (continuation rows and trailing comment/empty lines are attached to the statement before them).
//! - `context` classifies every data cell depending on the section, open blocks and settings seen so far.
//!
//! The result is emitted as finished [`Token`]s, one `Vec` per statement. [`lex`] flattens that into a single stream
//! where `EOS` tokens mark statement boundaries.
//!
//! ## Module Structure
//!
//! - `tokens` - Token types (TokenKind, Token)
//! - `tokenizer` - Cell splitting, comments, continuation
//! - `context` - Section/setting/control-structure aware classification
//!
//! ## Examples
//! ```rust
//! use robotparse_syntax::config::ParseConfig;
//! use robotparse_syntax::lexer::{self, TokenKind};
//!
//! let statements = lexer::lex_statements("*** Test Cases ***\nExample\n    Log    Hello\n", &ParseConfig::default());
//! let kinds: Vec<TokenKind> = statements[2].iter().map(|t| t.kind).collect();
//! assert_eq!(
//!     kinds,
//!     vec![TokenKind::Separator, TokenKind::Keyword, TokenKind::Separator, TokenKind::Argument, TokenKind::Eol]
//! );
//! ```

mod context;
mod tokenizer;
pub mod tokens;

pub use tokens::{Token, TokenKind};

use crate::config::ParseConfig;
use context::FileLexer;
use tokenizer::LexToken;

/// Lex `source` into statements.
///
/// ## Parameters
/// - `source`: the whole document.
/// - `config`: grammar, data-only mode and `${CURDIR}` replacement.
///
/// ## Returns
/// - One token list per statement. With `data_only` unset, concatenating every token value reproduces `source`.
#[tracing::instrument(skip_all, fields(len = source.len(), kind = ?config.kind, data_only = config.data_only))]
pub fn lex_statements(source: &str, config: &ParseConfig) -> Vec<Vec<Token>> {
    let mut lexer = FileLexer::new(config);
    let mut statements = Vec::new();
    for mut statement in tokenizer::tokenize(source, config.data_only) {
        let inline_if = lexer.lex_statement(&mut statement);
        if config.data_only {
            emit(statement, inline_if, true, &mut statements);
            continue;
        }
        let mut parts = split_trailing_commented_and_empty_lines(statement).into_iter();
        if let Some(main) = parts.next() {
            emit(main, inline_if, false, &mut statements);
        }
        for part in parts {
            emit(part, false, false, &mut statements);
        }
    }
    tracing::debug!(statements = statements.len(), "lexed");
    statements
}

/// Lex `source` into one flat token stream where an `EOS` token ends every statement.
#[tracing::instrument(skip_all, fields(len = source.len()))]
pub fn lex(source: &str, config: &ParseConfig) -> Vec<Token> {
    let mut tokens = Vec::new();
    for statement in lex_statements(source, config) {
        let (line, column) = statement
            .last()
            .map_or((0, 0), |last| (last.line, last.end_column()));
        tokens.extend(statement);
        tokens.push(Token::new(TokenKind::Eos, "", line, column));
    }
    tokens
}

/// Trailing comment-only and empty lines become statements of their own.
fn split_trailing_commented_and_empty_lines(statement: Vec<LexToken>) -> Vec<Vec<LexToken>> {
    let mut lines: Vec<Vec<LexToken>> = Vec::new();
    let mut current = Vec::new();
    for token in statement {
        let is_eol = token.kind == Some(TokenKind::Eol);
        current.push(token);
        if is_eol {
            lines.push(std::mem::take(&mut current));
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }
    let trailing = lines
        .iter()
        .rev()
        .take_while(|line| is_commented_or_empty(line))
        .count();
    let rest = lines.split_off(lines.len() - trailing);
    let mut parts = vec![lines.into_iter().flatten().collect()];
    parts.extend(rest);
    parts
}

fn is_commented_or_empty(line: &[LexToken]) -> bool {
    line.iter()
        .find(|token| !matches!(token.kind, None | Some(TokenKind::Separator)))
        .is_some_and(|token| matches!(token.kind, Some(TokenKind::Comment | TokenKind::Eol)))
}

/// Turn one classified statement into finished token groups.
///
/// Groups break where the context lexer asked for it (inline `IF`) and after a test/keyword name that has data on the
/// same row. A group holding only separators is carried over to the next group instead of becoming a statement.
fn emit(statement: Vec<LexToken>, inline_if: bool, data_only: bool, out: &mut Vec<Vec<Token>>) {
    let mut group: Vec<Token> = Vec::new();
    let mut held: Vec<Token> = Vec::new();
    let mut name_seen = false;
    let mut last_end = None;
    for lex_token in statement {
        let (eos_before, eos_after) = (lex_token.eos_before, lex_token.eos_after);
        let Some(token) = lex_token.into_token() else {
            continue;
        };
        if data_only && matches!(token.kind, TokenKind::Comment | TokenKind::CommentHeader) {
            continue;
        }
        last_end = Some((token.line, token.end_column()));
        if name_seen {
            if token.kind == TokenKind::Separator {
                held.push(token);
                continue;
            }
            if token.kind != TokenKind::Eol {
                close(&mut group, out);
            }
            group.append(&mut held);
            name_seen = false;
        }
        if eos_before {
            split(&mut group, out);
        }
        let is_name = matches!(token.kind, TokenKind::TestCaseName | TokenKind::KeywordName);
        group.push(token);
        if eos_after {
            split(&mut group, out);
        }
        name_seen = is_name;
    }
    group.append(&mut held);
    close(&mut group, out);
    if let (true, Some((line, column))) = (inline_if, last_end) {
        out.push(vec![Token::new(TokenKind::End, "", line, column)]);
    }
}

fn split(group: &mut Vec<Token>, out: &mut Vec<Vec<Token>>) {
    if group.iter().any(|token| token.kind != TokenKind::Separator) {
        out.push(std::mem::take(group));
    }
}

fn close(group: &mut Vec<Token>, out: &mut Vec<Vec<Token>>) {
    if !group.is_empty() {
        out.push(std::mem::take(group));
    }
}
