//! Small helper APIs for working with `Token` / `TokenKind`.
//!
//! These helpers exist to reduce repetitive `matches!(...)` at call sites in the lexer, parser and validators.

use crate::lexer::{Token, TokenKind};

impl TokenKind {
    /// Return `true` for section header kinds.
    pub fn is_header(self) -> bool {
        matches!(
            self,
            TokenKind::SettingHeader
                | TokenKind::VariableHeader
                | TokenKind::TestCaseHeader
                | TokenKind::TaskHeader
                | TokenKind::KeywordHeader
                | TokenKind::CommentHeader
        )
    }

    /// Return `true` for kinds that only carry layout or commentary.
    pub fn is_non_data(self) -> bool {
        matches!(
            self,
            TokenKind::Separator | TokenKind::Comment | TokenKind::Continuation | TokenKind::Eol | TokenKind::Eos
        )
    }

    /// Return `true` for `ERROR` and `FATAL ERROR`.
    pub fn is_error(self) -> bool {
        matches!(self, TokenKind::Error | TokenKind::FatalError)
    }
}

impl Token {
    /// Convenience wrapper for `!self.kind.is_non_data()`.
    pub fn is_data(&self) -> bool {
        !self.kind.is_non_data()
    }
}
