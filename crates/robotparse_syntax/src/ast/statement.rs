//! Leaf nodes: one logical line of data.
//!
//! A [`Statement`] owns its tokens (layout included) and the errors found when it was built. Its
//! [`StatementKind`] is chosen from the first token that identifies a statement type, so the same
//! constructor serves the parser and callers building statements by hand.

use std::fmt;

use robotparse_core::lang::sections::{self, SectionId};
use robotparse_core::strings::{normalize_whitespace, strip_chars};

use crate::lexer::{Token, TokenKind};
use crate::validation;

// ============================================================================
// STATEMENT KINDS
// ============================================================================

/// Every kind of statement the parser produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatementKind {
    // ========== Structure ==========
    SectionHeader,
    TestCaseName,
    KeywordName,

    // ========== Settings ==========
    Documentation,
    Metadata,
    SuiteSetup,
    SuiteTeardown,
    TestSetup,
    TestTeardown,
    TestTemplate,
    TestTimeout,
    ForceTags,
    DefaultTags,
    LibraryImport,
    ResourceImport,
    VariablesImport,
    Setup,
    Teardown,
    Template,
    Timeout,
    Tags,
    Arguments,
    Return,

    // ========== Data ==========
    Variable,
    KeywordCall,
    TemplateArguments,

    // ========== Control structures ==========
    ForHeader,
    IfHeader,
    InlineIfHeader,
    ElseIfHeader,
    ElseHeader,
    TryHeader,
    ExceptHeader,
    FinallyHeader,
    WhileHeader,
    End,
    ReturnStatement,
    Break,
    Continue,

    // ========== Other ==========
    Comment,
    Error,
    EmptyLine,
}

impl StatementKind {
    /// Statement kind a token kind identifies, if any.
    ///
    /// ## Notes
    /// - `EOL` is deliberately absent: a line ending only identifies an [`StatementKind::EmptyLine`] when nothing else
    ///   in the statement does (see [`Statement::from_tokens`]).
    pub fn for_token(kind: TokenKind) -> Option<Self> {
        let statement = match kind {
            TokenKind::SettingHeader
            | TokenKind::VariableHeader
            | TokenKind::TestCaseHeader
            | TokenKind::TaskHeader
            | TokenKind::KeywordHeader
            | TokenKind::CommentHeader => StatementKind::SectionHeader,
            TokenKind::TestCaseName => StatementKind::TestCaseName,
            TokenKind::KeywordName => StatementKind::KeywordName,
            TokenKind::Documentation => StatementKind::Documentation,
            TokenKind::Metadata => StatementKind::Metadata,
            TokenKind::SuiteSetup => StatementKind::SuiteSetup,
            TokenKind::SuiteTeardown => StatementKind::SuiteTeardown,
            TokenKind::TestSetup => StatementKind::TestSetup,
            TokenKind::TestTeardown => StatementKind::TestTeardown,
            TokenKind::TestTemplate => StatementKind::TestTemplate,
            TokenKind::TestTimeout => StatementKind::TestTimeout,
            TokenKind::ForceTags => StatementKind::ForceTags,
            TokenKind::DefaultTags => StatementKind::DefaultTags,
            TokenKind::Library => StatementKind::LibraryImport,
            TokenKind::Resource => StatementKind::ResourceImport,
            TokenKind::Variables => StatementKind::VariablesImport,
            TokenKind::Setup => StatementKind::Setup,
            TokenKind::Teardown => StatementKind::Teardown,
            TokenKind::Template => StatementKind::Template,
            TokenKind::Timeout => StatementKind::Timeout,
            TokenKind::Tags => StatementKind::Tags,
            TokenKind::Arguments => StatementKind::Arguments,
            TokenKind::Return => StatementKind::Return,
            TokenKind::Variable => StatementKind::Variable,
            TokenKind::Keyword => StatementKind::KeywordCall,
            TokenKind::Argument => StatementKind::TemplateArguments,
            TokenKind::For => StatementKind::ForHeader,
            TokenKind::If => StatementKind::IfHeader,
            TokenKind::InlineIf => StatementKind::InlineIfHeader,
            TokenKind::ElseIf => StatementKind::ElseIfHeader,
            TokenKind::Else => StatementKind::ElseHeader,
            TokenKind::Try => StatementKind::TryHeader,
            TokenKind::Except => StatementKind::ExceptHeader,
            TokenKind::Finally => StatementKind::FinallyHeader,
            TokenKind::While => StatementKind::WhileHeader,
            TokenKind::End => StatementKind::End,
            TokenKind::ReturnStatement => StatementKind::ReturnStatement,
            TokenKind::Break => StatementKind::Break,
            TokenKind::Continue => StatementKind::Continue,
            TokenKind::Comment => StatementKind::Comment,
            TokenKind::Error | TokenKind::FatalError => StatementKind::Error,
            TokenKind::Name
            | TokenKind::Assign
            | TokenKind::WithName
            | TokenKind::Option
            | TokenKind::ForSeparator
            | TokenKind::As
            | TokenKind::Separator
            | TokenKind::Continuation
            | TokenKind::Eol
            | TokenKind::Eos => return None,
        };
        Some(statement)
    }

    /// The token kind that identifies this statement kind.
    ///
    /// ## Notes
    /// - Section headers report `SETTING HEADER`; use [`Statement::type_name`] for the actual header kind.
    pub fn token_kind(self) -> TokenKind {
        match self {
            StatementKind::SectionHeader => TokenKind::SettingHeader,
            StatementKind::TestCaseName => TokenKind::TestCaseName,
            StatementKind::KeywordName => TokenKind::KeywordName,
            StatementKind::Documentation => TokenKind::Documentation,
            StatementKind::Metadata => TokenKind::Metadata,
            StatementKind::SuiteSetup => TokenKind::SuiteSetup,
            StatementKind::SuiteTeardown => TokenKind::SuiteTeardown,
            StatementKind::TestSetup => TokenKind::TestSetup,
            StatementKind::TestTeardown => TokenKind::TestTeardown,
            StatementKind::TestTemplate => TokenKind::TestTemplate,
            StatementKind::TestTimeout => TokenKind::TestTimeout,
            StatementKind::ForceTags => TokenKind::ForceTags,
            StatementKind::DefaultTags => TokenKind::DefaultTags,
            StatementKind::LibraryImport => TokenKind::Library,
            StatementKind::ResourceImport => TokenKind::Resource,
            StatementKind::VariablesImport => TokenKind::Variables,
            StatementKind::Setup => TokenKind::Setup,
            StatementKind::Teardown => TokenKind::Teardown,
            StatementKind::Template => TokenKind::Template,
            StatementKind::Timeout => TokenKind::Timeout,
            StatementKind::Tags => TokenKind::Tags,
            StatementKind::Arguments => TokenKind::Arguments,
            StatementKind::Return => TokenKind::Return,
            StatementKind::Variable => TokenKind::Variable,
            StatementKind::KeywordCall => TokenKind::Keyword,
            StatementKind::TemplateArguments => TokenKind::Argument,
            StatementKind::ForHeader => TokenKind::For,
            StatementKind::IfHeader => TokenKind::If,
            StatementKind::InlineIfHeader => TokenKind::InlineIf,
            StatementKind::ElseIfHeader => TokenKind::ElseIf,
            StatementKind::ElseHeader => TokenKind::Else,
            StatementKind::TryHeader => TokenKind::Try,
            StatementKind::ExceptHeader => TokenKind::Except,
            StatementKind::FinallyHeader => TokenKind::Finally,
            StatementKind::WhileHeader => TokenKind::While,
            StatementKind::End => TokenKind::End,
            StatementKind::ReturnStatement => TokenKind::ReturnStatement,
            StatementKind::Break => TokenKind::Break,
            StatementKind::Continue => TokenKind::Continue,
            StatementKind::Comment => TokenKind::Comment,
            StatementKind::Error => TokenKind::Error,
            StatementKind::EmptyLine => TokenKind::Eol,
        }
    }

    /// Node name used in tree dumps (`"KeywordCall"`, `"ForHeader"`, ...).
    pub fn name(self) -> &'static str {
        match self {
            StatementKind::SectionHeader => "SectionHeader",
            StatementKind::TestCaseName => "TestCaseName",
            StatementKind::KeywordName => "KeywordName",
            StatementKind::Documentation => "Documentation",
            StatementKind::Metadata => "Metadata",
            StatementKind::SuiteSetup => "SuiteSetup",
            StatementKind::SuiteTeardown => "SuiteTeardown",
            StatementKind::TestSetup => "TestSetup",
            StatementKind::TestTeardown => "TestTeardown",
            StatementKind::TestTemplate => "TestTemplate",
            StatementKind::TestTimeout => "TestTimeout",
            StatementKind::ForceTags => "ForceTags",
            StatementKind::DefaultTags => "DefaultTags",
            StatementKind::LibraryImport => "LibraryImport",
            StatementKind::ResourceImport => "ResourceImport",
            StatementKind::VariablesImport => "VariablesImport",
            StatementKind::Setup => "Setup",
            StatementKind::Teardown => "Teardown",
            StatementKind::Template => "Template",
            StatementKind::Timeout => "Timeout",
            StatementKind::Tags => "Tags",
            StatementKind::Arguments => "Arguments",
            StatementKind::Return => "Return",
            StatementKind::Variable => "Variable",
            StatementKind::KeywordCall => "KeywordCall",
            StatementKind::TemplateArguments => "TemplateArguments",
            StatementKind::ForHeader => "ForHeader",
            StatementKind::IfHeader => "IfHeader",
            StatementKind::InlineIfHeader => "InlineIfHeader",
            StatementKind::ElseIfHeader => "ElseIfHeader",
            StatementKind::ElseHeader => "ElseHeader",
            StatementKind::TryHeader => "TryHeader",
            StatementKind::ExceptHeader => "ExceptHeader",
            StatementKind::FinallyHeader => "FinallyHeader",
            StatementKind::WhileHeader => "WhileHeader",
            StatementKind::End => "End",
            StatementKind::ReturnStatement => "ReturnStatement",
            StatementKind::Break => "Break",
            StatementKind::Continue => "Continue",
            StatementKind::Comment => "Comment",
            StatementKind::Error => "Error",
            StatementKind::EmptyLine => "EmptyLine",
        }
    }

    /// Return `true` for statements that count as content of a control block body.
    pub fn is_executable(self) -> bool {
        matches!(
            self,
            StatementKind::KeywordCall
                | StatementKind::TemplateArguments
                | StatementKind::ReturnStatement
                | StatementKind::Break
                | StatementKind::Continue
        )
    }
}

impl fmt::Display for StatementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ============================================================================
// STATEMENT
// ============================================================================

/// One logical line: its tokens plus the errors found in them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Statement {
    kind: StatementKind,
    tokens: Vec<Token>,
    /// Found by the statement validators.
    errors: Vec<String>,
    /// Added from outside, e.g. by the model validation pass. Survives [`Statement::revalidate`].
    added: Vec<String>,
}

impl Statement {
    /// Build a statement, choosing its kind from the tokens.
    ///
    /// ## Notes
    /// - The first token whose kind identifies a statement decides; a statement with only assignments is a keyword
    ///   call (missing keyword), anything else without an identifying token is an empty line.
    pub fn from_tokens(tokens: Vec<Token>) -> Self {
        let kind = tokens
            .iter()
            .find_map(|token| StatementKind::for_token(token.kind))
            .unwrap_or_else(|| {
                if tokens.iter().any(|token| token.kind == TokenKind::Assign) {
                    StatementKind::KeywordCall
                } else {
                    StatementKind::EmptyLine
                }
            });
        Self::with_kind(kind, tokens)
    }

    /// Build a statement of a known kind and validate it.
    pub fn with_kind(kind: StatementKind, tokens: Vec<Token>) -> Self {
        let mut statement = Self {
            kind,
            tokens,
            errors: Vec::new(),
            added: Vec::new(),
        };
        statement.revalidate();
        statement
    }

    pub fn kind(&self) -> StatementKind {
        self.kind
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// Mutable access to the tokens. Call [`Statement::revalidate`] after structural edits.
    pub fn tokens_mut(&mut self) -> &mut Vec<Token> {
        &mut self.tokens
    }

    pub fn into_tokens(self) -> Vec<Token> {
        self.tokens
    }

    /// Recompute the validation errors from the current tokens.
    ///
    /// Errors given to [`Statement::add_error`], such as a `RETURN` outside a keyword, are kept.
    pub fn revalidate(&mut self) {
        self.errors = validation::statements::validate(self);
    }

    /// Token kind name of the statement (`"KEYWORD"`, `"TESTCASE HEADER"`, `"EOL"`, ...).
    pub fn type_name(&self) -> &'static str {
        match self.kind {
            StatementKind::SectionHeader => self
                .tokens
                .iter()
                .find(|token| token.kind.is_header())
                .map_or(TokenKind::SettingHeader, |token| token.kind)
                .as_str(),
            kind => kind.token_kind().as_str(),
        }
    }

    // ---- errors -------------------------------------------------------------

    /// Messages of the error tokens, then validation errors, then added errors.
    pub fn errors(&self) -> Vec<String> {
        self.tokens
            .iter()
            .filter_map(|token| token.error.clone())
            .chain(self.errors.iter().cloned())
            .chain(self.added.iter().cloned())
            .collect()
    }

    /// Replace every non-token error.
    pub fn set_errors(&mut self, errors: Vec<String>) {
        self.errors = errors;
        self.added.clear();
    }

    pub fn add_error(&mut self, error: impl Into<String>) {
        self.added.push(error.into());
    }

    // ---- token access -------------------------------------------------------

    /// Tokens without separators, line ends, continuation markers and comments.
    pub fn data_tokens(&self) -> impl Iterator<Item = &Token> {
        self.tokens.iter().filter(|token| token.is_data())
    }

    /// First token of any of the given kinds.
    pub fn get_token(&self, kinds: &[TokenKind]) -> Option<&Token> {
        self.tokens.iter().find(|token| kinds.contains(&token.kind))
    }

    pub fn get_token_mut(&mut self, kinds: &[TokenKind]) -> Option<&mut Token> {
        self.tokens.iter_mut().find(|token| kinds.contains(&token.kind))
    }

    /// All tokens of any of the given kinds.
    pub fn get_tokens(&self, kinds: &[TokenKind]) -> Vec<&Token> {
        self.tokens
            .iter()
            .filter(|token| kinds.contains(&token.kind))
            .collect()
    }

    /// Value of the first token of the given kind.
    pub fn get_value(&self, kind: TokenKind) -> Option<&str> {
        self.get_token(&[kind]).map(|token| token.value.as_str())
    }

    /// Values of all tokens of any of the given kinds.
    pub fn get_values(&self, kinds: &[TokenKind]) -> Vec<&str> {
        self.tokens
            .iter()
            .filter(|token| kinds.contains(&token.kind))
            .map(|token| token.value.as_str())
            .collect()
    }

    /// Tokens grouped by physical line; each line ends with its `EOL` when there is one.
    pub fn lines(&self) -> Vec<&[Token]> {
        let mut lines = Vec::new();
        let mut start = 0;
        for (index, token) in self.tokens.iter().enumerate() {
            if token.kind == TokenKind::Eol {
                lines.push(&self.tokens[start..=index]);
                start = index + 1;
            }
        }
        if start < self.tokens.len() {
            lines.push(&self.tokens[start..]);
        }
        lines
    }

    // ---- positions ----------------------------------------------------------

    pub fn lineno(&self) -> usize {
        self.tokens.first().map_or(0, |token| token.line)
    }

    pub fn col_offset(&self) -> usize {
        self.tokens.first().map_or(0, |token| token.column)
    }

    pub fn end_lineno(&self) -> usize {
        self.tokens.last().map_or(0, |token| token.line)
    }

    pub fn end_col_offset(&self) -> usize {
        self.tokens.last().map_or(0, Token::end_column)
    }

    // ---- kind specific values -------------------------------------------------

    /// Name of a test case, keyword, section, import, fixture or variable.
    pub fn name(&self) -> Option<&str> {
        match self.kind {
            StatementKind::TestCaseName => self.get_value(TokenKind::TestCaseName),
            StatementKind::KeywordName => self.get_value(TokenKind::KeywordName),
            StatementKind::SectionHeader => self
                .tokens
                .iter()
                .find(|token| token.kind.is_header())
                .map(|token| strip_chars(&token.value, &['*', ' '])),
            StatementKind::Variable => self.get_value(TokenKind::Variable).map(|name| match name.strip_suffix('=') {
                Some(stripped) => stripped.trim_end(),
                None => name,
            }),
            _ => self.get_value(TokenKind::Name),
        }
    }

    /// Section a header statement opens.
    pub fn section(&self) -> Option<SectionId> {
        if self.kind != StatementKind::SectionHeader {
            return None;
        }
        self.tokens
            .iter()
            .find(|token| token.kind.is_header())
            .and_then(|token| sections::from_header(&token.value))
    }

    /// Called keyword.
    pub fn keyword(&self) -> Option<&str> {
        self.get_value(TokenKind::Keyword)
    }

    /// `ARGUMENT` values.
    pub fn args(&self) -> Vec<&str> {
        self.get_values(&[TokenKind::Argument])
    }

    /// `ASSIGN` values.
    pub fn assign(&self) -> Vec<&str> {
        self.get_values(&[TokenKind::Assign])
    }

    /// Condition of an `IF`, `ELSE IF` or `WHILE` header.
    ///
    /// ## Returns
    /// - `None` without arguments; several arguments are joined with `", "`.
    pub fn condition(&self) -> Option<String> {
        let values = self.args();
        if values.is_empty() {
            None
        } else {
            Some(values.join(", "))
        }
    }

    /// `FOR` loop variables.
    pub fn variables(&self) -> Vec<&str> {
        self.get_values(&[TokenKind::Variable])
    }

    /// Values of a loop, a variable or a list-like setting.
    pub fn values(&self) -> Vec<&str> {
        self.args()
    }

    /// `FOR` separator, whitespace-normalized (`"IN RANGE"`).
    pub fn flavor(&self) -> Option<String> {
        self.get_value(TokenKind::ForSeparator).map(normalize_whitespace)
    }

    /// `EXCEPT` patterns.
    pub fn patterns(&self) -> Vec<&str> {
        self.args()
    }

    /// Value of an `EXCEPT` `type=` option.
    pub fn pattern_type(&self) -> Option<&str> {
        self.option_value("type=")
    }

    /// Variable after `EXCEPT ... AS`.
    pub fn variable(&self) -> Option<&str> {
        self.get_value(TokenKind::Variable)
    }

    /// Value of a `WHILE` `limit=` option.
    pub fn limit(&self) -> Option<&str> {
        self.option_value("limit=")
    }

    /// Library alias given with `WITH NAME`.
    pub fn alias(&self) -> Option<&str> {
        let marker = self
            .tokens
            .iter()
            .position(|token| token.kind == TokenKind::WithName)?;
        self.tokens[marker + 1..]
            .iter()
            .find(|token| token.kind == TokenKind::Name)
            .map(|token| token.value.as_str())
    }

    /// Documentation or metadata text.
    ///
    /// Values on one row are joined with spaces, rows with newlines unless a row already ends with an escaped
    /// newline (`\n`) or an odd number of backslashes.
    pub fn value(&self) -> Option<String> {
        let tokens = self.get_tokens(&[TokenKind::Argument]);
        if tokens.is_empty() {
            return None;
        }
        let mut rows: Vec<Vec<&str>> = Vec::new();
        let mut line = None;
        for token in tokens {
            if line != Some(token.line) {
                rows.push(Vec::new());
                line = Some(token.line);
            }
            if let Some(row) = rows.last_mut() {
                row.push(&token.value);
            }
        }
        let rows: Vec<String> = rows.into_iter().map(|row| row.join(" ")).collect();
        let mut value = String::new();
        for (index, row) in rows.iter().enumerate() {
            value.push_str(row);
            if index + 1 < rows.len() && !ends_with_escape(row) {
                value.push('\n');
            }
        }
        Some(value)
    }

    fn option_value(&self, prefix: &str) -> Option<&str> {
        self.get_values(&[TokenKind::Option])
            .into_iter()
            .find_map(|value| value.strip_prefix(prefix))
    }
}

/// Row ends with `\n` or with an odd number of backslashes.
fn ends_with_escape(row: &str) -> bool {
    let body = row.strip_suffix('n').unwrap_or(row);
    let backslashes = body.chars().rev().take_while(|&c| c == '\\').count();
    backslashes % 2 == 1
}

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for token in &self.tokens {
            f.write_str(&token.value)?;
        }
        Ok(())
    }
}

// ============================================================================
// BUILDERS
// ============================================================================

/// Layout used when building statements in code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    pub indent: String,
    pub separator: String,
    pub eol: String,
}

impl Default for Layout {
    fn default() -> Self {
        Self {
            indent: "    ".to_string(),
            separator: "    ".to_string(),
            eol: "\n".to_string(),
        }
    }
}

impl Layout {
    fn separator(&self) -> Token {
        Token::detached(TokenKind::Separator, self.separator.as_str())
    }

    fn eol(&self) -> Token {
        Token::detached(TokenKind::Eol, self.eol.as_str())
    }

    fn indented(&self, mut tokens: Vec<Token>) -> Vec<Token> {
        if !self.indent.is_empty() {
            tokens.insert(0, Token::detached(TokenKind::Separator, self.indent.as_str()));
        }
        tokens.push(self.eol());
        tokens
    }
}

impl Statement {
    /// `    ${x} =    Keyword    arg` style row.
    pub fn keyword_call(keyword: &str, args: &[&str], assign: &[&str], layout: &Layout) -> Self {
        let mut tokens = Vec::new();
        for target in assign {
            tokens.push(Token::detached(TokenKind::Assign, *target));
            tokens.push(layout.separator());
        }
        tokens.push(Token::detached(TokenKind::Keyword, keyword));
        for arg in args {
            tokens.push(layout.separator());
            tokens.push(Token::detached(TokenKind::Argument, *arg));
        }
        Self::with_kind(StatementKind::KeywordCall, layout.indented(tokens))
    }

    pub fn test_case_name(name: &str, layout: &Layout) -> Self {
        let tokens = vec![Token::detached(TokenKind::TestCaseName, name), layout.eol()];
        Self::with_kind(StatementKind::TestCaseName, tokens)
    }

    pub fn keyword_name(name: &str, layout: &Layout) -> Self {
        let tokens = vec![Token::detached(TokenKind::KeywordName, name), layout.eol()];
        Self::with_kind(StatementKind::KeywordName, tokens)
    }

    /// `*** Name ***` header; `name` defaults to the section's canonical spelling.
    pub fn section_header(section: SectionId, name: Option<&str>, layout: &Layout) -> Self {
        let name = name.unwrap_or_else(|| sections::as_str(section));
        let tokens = vec![
            Token::detached(TokenKind::for_section(section), format!("*** {name} ***")),
            layout.eol(),
        ];
        Self::with_kind(StatementKind::SectionHeader, tokens)
    }

    pub fn comment(text: &str, layout: &Layout) -> Self {
        let tokens = layout.indented(vec![Token::detached(TokenKind::Comment, text)]);
        Self::with_kind(StatementKind::Comment, tokens)
    }

    pub fn empty_line(layout: &Layout) -> Self {
        Self::with_kind(StatementKind::EmptyLine, vec![layout.eol()])
    }

    /// Closing `END` row.
    pub fn end(layout: &Layout) -> Self {
        let tokens = layout.indented(vec![Token::detached(TokenKind::End, "END")]);
        Self::with_kind(StatementKind::End, tokens)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn token(kind: TokenKind, value: &str) -> Token {
        Token::detached(kind, value)
    }

    #[test]
    fn test_kind_is_chosen_from_first_identifying_token() {
        let statement = Statement::from_tokens(vec![
            token(TokenKind::Separator, "    "),
            token(TokenKind::Assign, "${x}="),
            token(TokenKind::Separator, "    "),
            token(TokenKind::Keyword, "Get"),
            token(TokenKind::Eol, "\n"),
        ]);
        assert_eq!(statement.kind(), StatementKind::KeywordCall);
        assert_eq!(statement.type_name(), "KEYWORD");
        assert_eq!(statement.assign(), vec!["${x}="]);
        assert_eq!(statement.keyword(), Some("Get"));
    }

    #[test]
    fn test_assign_only_is_keyword_call_and_eol_only_is_empty_line() {
        let assign_only = Statement::from_tokens(vec![token(TokenKind::Assign, "${x}"), token(TokenKind::Eol, "\n")]);
        assert_eq!(assign_only.kind(), StatementKind::KeywordCall);
        let empty = Statement::from_tokens(vec![token(TokenKind::Eol, "\n")]);
        assert_eq!(empty.kind(), StatementKind::EmptyLine);
        assert_eq!(empty.type_name(), "EOL");
    }

    #[test]
    fn test_section_header_type_and_name() {
        let header = Statement::section_header(SectionId::Tasks, None, &Layout::default());
        assert_eq!(header.to_string(), "*** Tasks ***\n");
        assert_eq!(header.type_name(), "TASK HEADER");
        assert_eq!(header.name(), Some("Tasks"));
        assert_eq!(header.section(), Some(SectionId::Tasks));
    }

    #[test]
    fn test_builders_render_layout() {
        let layout = Layout::default();
        let call = Statement::keyword_call("Log", &["a", "b"], &["${x} ="], &layout);
        assert_eq!(call.to_string(), "    ${x} =    Log    a    b\n");
        assert_eq!(call.args(), vec!["a", "b"]);
        assert_eq!(Statement::end(&layout).to_string(), "    END\n");
        assert_eq!(Statement::comment("# c", &layout).to_string(), "    # c\n");
        assert_eq!(Statement::test_case_name("T", &layout).to_string(), "T\n");
        assert!(Statement::end(&layout).errors().is_empty());
    }

    #[test]
    fn test_errors_combine_tokens_and_explicit_values() {
        let mut statement = Statement::from_tokens(vec![
            token(TokenKind::Error, "Bad").with_error("token error"),
            token(TokenKind::Eol, "\n"),
        ]);
        assert_eq!(statement.kind(), StatementKind::Error);
        assert_eq!(statement.errors(), vec!["token error"]);
        statement.set_errors(vec!["explicit".to_string()]);
        assert_eq!(statement.errors(), vec!["token error", "explicit"]);
    }

    #[test]
    fn test_revalidate_keeps_added_errors() {
        let mut statement = Statement::from_tokens(vec![
            token(TokenKind::ReturnStatement, "RETURN"),
            token(TokenKind::Argument, "x"),
        ]);
        statement.add_error("RETURN can only be used inside a user keyword.");
        statement.tokens_mut().push(token(TokenKind::Argument, "y"));
        statement.revalidate();
        assert_eq!(statement.errors(), vec!["RETURN can only be used inside a user keyword."]);
        statement.set_errors(Vec::new());
        assert!(statement.errors().is_empty());
    }

    #[test]
    fn test_documentation_value_joins_rows() {
        let statement = Statement::from_tokens(vec![
            Token::new(TokenKind::Documentation, "Documentation", 1, 0),
            Token::new(TokenKind::Argument, "First", 1, 17),
            Token::new(TokenKind::Argument, "row", 1, 26),
            Token::new(TokenKind::Argument, "Second\\n", 2, 7),
            Token::new(TokenKind::Argument, "Third", 3, 7),
        ]);
        assert_eq!(statement.value().as_deref(), Some("First row\nSecond\\nThird"));
    }

    #[test]
    fn test_lines_split_after_eol() {
        let statement = Statement::from_tokens(vec![
            token(TokenKind::Variable, "${x}"),
            token(TokenKind::Eol, "\n"),
            token(TokenKind::Continuation, "..."),
            token(TokenKind::Separator, "    "),
            token(TokenKind::Argument, "1"),
        ]);
        let lines = statement.lines();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[1].len(), 3);
        assert_eq!(statement.name(), Some("${x}"));
        assert_eq!(statement.data_tokens().count(), 2);
    }

    #[test]
    fn test_option_values() {
        let statement = Statement::from_tokens(vec![
            token(TokenKind::While, "WHILE"),
            token(TokenKind::Argument, "True"),
            token(TokenKind::Option, "limit=10"),
        ]);
        assert_eq!(statement.limit(), Some("10"));
        assert_eq!(statement.condition().as_deref(), Some("True"));
    }
}
