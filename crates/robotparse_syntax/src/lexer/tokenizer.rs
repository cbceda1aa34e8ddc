//! Split raw text into cells and group physical lines into logical statements.
//!
//! This stage knows nothing about sections or settings. It produces [`LexToken`]s whose `kind` is either a layout kind
//! (`SEPARATOR`, `EOL`, `COMMENT`, `CONTINUATION`) or still unknown (`None`, a data cell the context lexer classifies).
//!
//! ## Notes
//! - Space-separated lines split on runs of two or more whitespace characters or a single tab.
//! - Lines starting with `|` split on pipes surrounded by whitespace or line edges. A line that starts with `|` but has
//!   no such separator at its start falls back to space splitting.
//! - Lines with no data (blank, comment-only, or `...` only) never start a new statement.

use super::tokens::{Token, TokenKind};

/// A token while it is being lexed: the kind may still be unknown, and the context lexer can request statement
/// boundaries around it (used by inline `IF`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct LexToken {
    pub kind: Option<TokenKind>,
    pub value: String,
    pub line: usize,
    pub column: usize,
    pub error: Option<String>,
    pub eos_before: bool,
    pub eos_after: bool,
}

impl LexToken {
    fn new(kind: Option<TokenKind>, value: &str, line: usize, column: usize) -> Self {
        Self {
            kind,
            value: value.to_string(),
            line,
            column,
            error: None,
            eos_before: false,
            eos_after: false,
        }
    }

    pub fn set_error(&mut self, message: String, fatal: bool) {
        self.kind = Some(if fatal {
            TokenKind::FatalError
        } else {
            TokenKind::Error
        });
        self.error = Some(message);
    }

    pub fn end_column(&self) -> usize {
        self.column + self.value.chars().count()
    }

    /// Finished token, or `None` for cells nobody classified (ignored indentation).
    pub fn into_token(self) -> Option<Token> {
        let kind = self.kind?;
        Some(Token {
            kind,
            value: self.value,
            line: self.line,
            column: self.column,
            error: self.error,
        })
    }
}

/// Tokenize `source` into logical statements.
///
/// ## Parameters
/// - `source`: the whole document.
/// - `data_only`: drop separators, line ends, comments and continuation markers.
pub(crate) fn tokenize(source: &str, data_only: bool) -> Vec<Vec<LexToken>> {
    let mut statements = Vec::new();
    let mut current: Vec<LexToken> = Vec::new();
    for (index, line) in split_lines(source).into_iter().enumerate() {
        let mut tokens = tokenize_line(line, index + 1, !data_only);
        if cleanup(&mut tokens, data_only) {
            if !current.is_empty() {
                statements.push(std::mem::take(&mut current));
            }
            current = tokens;
        } else {
            current.extend(tokens);
        }
    }
    if !current.is_empty() {
        statements.push(current);
    }
    statements
}

/// Split into physical lines, keeping `\n`, `\r\n` or `\r` terminators.
fn split_lines(source: &str) -> Vec<&str> {
    let bytes = source.as_bytes();
    let mut lines = Vec::new();
    let mut start = 0;
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'\n' => {
                i += 1;
                lines.push(&source[start..i]);
                start = i;
            }
            b'\r' => {
                i += if bytes.get(i + 1) == Some(&b'\n') { 2 } else { 1 };
                lines.push(&source[start..i]);
                start = i;
            }
            _ => i += 1,
        }
    }
    if start < bytes.len() {
        lines.push(&source[start..]);
    }
    lines
}

fn tokenize_line(line: &str, lineno: usize, include_separators: bool) -> Vec<LexToken> {
    let content = line.trim_end();
    let mut tokens = Vec::new();
    let mut column = 0;
    for (value, is_data) in split_cells(content) {
        if is_data {
            tokens.push(LexToken::new(None, value, lineno, column));
        } else if include_separators {
            tokens.push(LexToken::new(Some(TokenKind::Separator), value, lineno, column));
        }
        column += value.chars().count();
    }
    if include_separators {
        tokens.push(LexToken::new(Some(TokenKind::Eol), &line[content.len()..], lineno, column));
    }
    tokens
}

/// Alternating `(cell, is_data)` pairs, starting and ending with data.
fn split_cells(line: &str) -> Vec<(&str, bool)> {
    if line.starts_with('|') {
        if let Some(cells) = split_from_pipes(line) {
            return cells;
        }
    }
    split_from_spaces(line)
}

fn split_from_spaces(line: &str) -> Vec<(&str, bool)> {
    let mut cells = Vec::new();
    let mut start = 0;
    let mut chars = line.char_indices().peekable();
    while let Some((i, ch)) = chars.next() {
        if !ch.is_whitespace() {
            continue;
        }
        let run = chars.peek().is_some_and(|(_, next)| next.is_whitespace());
        if !run && ch != '\t' {
            continue;
        }
        let mut end = i + ch.len_utf8();
        while let Some(&(j, next)) = chars.peek() {
            if !run || !next.is_whitespace() {
                break;
            }
            end = j + next.len_utf8();
            chars.next();
        }
        cells.push((&line[start..i], true));
        cells.push((&line[i..end], false));
        start = end;
    }
    cells.push((&line[start..], true));
    cells
}

fn split_from_pipes(line: &str) -> Option<Vec<(&str, bool)>> {
    let (start, end) = find_pipe_separator(line)?;
    if start != 0 {
        return None;
    }
    let mut cells = vec![(&line[..end], false)];
    let mut rest = &line[end..];
    while let Some((start, end)) = find_pipe_separator(rest) {
        cells.push((&rest[..start], true));
        cells.push((&rest[start..end], false));
        rest = &rest[end..];
    }
    cells.push((rest, true));
    Some(cells)
}

/// First `|` preceded by whitespace (or the start) and followed by whitespace (or the end).
///
/// ## Returns
/// - Byte range covering the pipe and the whitespace around it.
fn find_pipe_separator(value: &str) -> Option<(usize, usize)> {
    for (pipe, ch) in value.char_indices() {
        if ch != '|' {
            continue;
        }
        let before = value[..pipe].trim_end().len();
        if pipe != 0 && before == pipe {
            continue;
        }
        let after = &value[pipe + 1..];
        let trailing = after.len() - after.trim_start().len();
        if !after.is_empty() && trailing == 0 {
            continue;
        }
        return Some((before, pipe + 1 + trailing));
    }
    None
}

/// Mark comments and continuation markers and drop empty cells that only pad the line.
///
/// ## Returns
/// - `true` if the line starts a new statement.
fn cleanup(tokens: &mut Vec<LexToken>, data_only: bool) -> bool {
    let (has_data, continues) = mark_comments_and_continuation(tokens);
    remove_trailing_empty(tokens);
    if continues {
        remove_leading_empty(tokens);
        if !has_data {
            ensure_data_after_continuation(tokens);
        }
    }
    if data_only {
        tokens.retain(|token| token.kind.is_none());
    }
    has_data && !continues
}

fn mark_comments_and_continuation(tokens: &mut [LexToken]) -> (bool, bool) {
    let mut has_data = false;
    let mut commented = false;
    let mut continues = false;
    for token in tokens.iter_mut().filter(|token| token.kind.is_none()) {
        let value = token.value.trim_start();
        if commented {
            token.kind = Some(TokenKind::Comment);
        } else if value.starts_with('#') {
            token.kind = Some(TokenKind::Comment);
            commented = true;
        } else if !value.is_empty() && !has_data {
            if value == "..." && !continues {
                token.kind = Some(TokenKind::Continuation);
                continues = true;
            } else {
                has_data = true;
            }
        }
    }
    (has_data, continues)
}

fn remove_trailing_empty(tokens: &mut Vec<LexToken>) {
    let mut index = tokens.len();
    while index > 0 {
        index -= 1;
        let token = &tokens[index];
        if token.value.is_empty() && token.kind != Some(TokenKind::Eol) {
            tokens.remove(index);
        } else if token.kind.is_none() {
            break;
        }
    }
}

fn remove_leading_empty(tokens: &mut Vec<LexToken>) {
    let mut index = 0;
    while index < tokens.len() {
        let token = &tokens[index];
        if token.value.is_empty() {
            tokens.remove(index);
        } else if matches!(token.kind, None | Some(TokenKind::Continuation)) {
            break;
        } else {
            index += 1;
        }
    }
}

fn ensure_data_after_continuation(tokens: &mut Vec<LexToken>) {
    let Some(index) = tokens
        .iter()
        .position(|token| token.kind == Some(TokenKind::Continuation))
    else {
        return;
    };
    let marker = &tokens[index];
    let empty = LexToken::new(None, "", marker.line, marker.end_column());
    tokens.insert(index + 1, empty);
}
