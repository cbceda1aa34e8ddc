//! Token types for the data lexer.
//!
//! Every piece of source text ends up in exactly one [`Token`], separators and line endings included, so that
//! concatenating token values in order reproduces the input.
//!
//! ## Notes
//! - `line` is 1-based; a token built in code rather than read from source has line `0`.
//! - `column` is 0-based and counted in characters, not bytes.
//! - Use `crate::token_helpers` for classification (`is_header`, `is_data`, ...).

use std::fmt;

use robotparse_core::lang::sections::SectionId;
use robotparse_core::lang::settings::SettingId;

// ============================================================================
// TOKEN KINDS
// ============================================================================

/// Kind of token produced by the lexer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    // ========== Section headers ==========
    SettingHeader,
    VariableHeader,
    TestCaseHeader,
    TaskHeader,
    KeywordHeader,
    CommentHeader,

    // ========== Names ==========
    TestCaseName,
    KeywordName,

    // ========== Settings ==========
    Documentation,
    SuiteSetup,
    SuiteTeardown,
    Metadata,
    TestSetup,
    TestTeardown,
    TestTemplate,
    TestTimeout,
    ForceTags,
    DefaultTags,
    Library,
    Resource,
    Variables,
    Setup,
    Teardown,
    Template,
    Timeout,
    Tags,
    Arguments,
    Return,

    // ========== Data ==========
    Name,
    Variable,
    Argument,
    Assign,
    Keyword,
    WithName,
    Option,

    // ========== Control structures ==========
    For,
    ForSeparator,
    End,
    If,
    InlineIf,
    ElseIf,
    Else,
    Try,
    Except,
    Finally,
    As,
    While,
    ReturnStatement,
    Continue,
    Break,

    // ========== Structure ==========
    Separator,
    Comment,
    Continuation,
    Eol,
    Eos,

    // ========== Errors ==========
    Error,
    FatalError,
}

impl TokenKind {
    /// Display name of the kind (`"TESTCASE NAME"`, `"FOR SEPARATOR"`, ...).
    pub fn as_str(self) -> &'static str {
        match self {
            TokenKind::SettingHeader => "SETTING HEADER",
            TokenKind::VariableHeader => "VARIABLE HEADER",
            TokenKind::TestCaseHeader => "TESTCASE HEADER",
            TokenKind::TaskHeader => "TASK HEADER",
            TokenKind::KeywordHeader => "KEYWORD HEADER",
            TokenKind::CommentHeader => "COMMENT HEADER",
            TokenKind::TestCaseName => "TESTCASE NAME",
            TokenKind::KeywordName => "KEYWORD NAME",
            TokenKind::Documentation => "DOCUMENTATION",
            TokenKind::SuiteSetup => "SUITE SETUP",
            TokenKind::SuiteTeardown => "SUITE TEARDOWN",
            TokenKind::Metadata => "METADATA",
            TokenKind::TestSetup => "TEST SETUP",
            TokenKind::TestTeardown => "TEST TEARDOWN",
            TokenKind::TestTemplate => "TEST TEMPLATE",
            TokenKind::TestTimeout => "TEST TIMEOUT",
            TokenKind::ForceTags => "FORCE TAGS",
            TokenKind::DefaultTags => "DEFAULT TAGS",
            TokenKind::Library => "LIBRARY",
            TokenKind::Resource => "RESOURCE",
            TokenKind::Variables => "VARIABLES",
            TokenKind::Setup => "SETUP",
            TokenKind::Teardown => "TEARDOWN",
            TokenKind::Template => "TEMPLATE",
            TokenKind::Timeout => "TIMEOUT",
            TokenKind::Tags => "TAGS",
            TokenKind::Arguments => "ARGUMENTS",
            TokenKind::Return => "RETURN",
            TokenKind::Name => "NAME",
            TokenKind::Variable => "VARIABLE",
            TokenKind::Argument => "ARGUMENT",
            TokenKind::Assign => "ASSIGN",
            TokenKind::Keyword => "KEYWORD",
            TokenKind::WithName => "WITH NAME",
            TokenKind::Option => "OPTION",
            TokenKind::For => "FOR",
            TokenKind::ForSeparator => "FOR SEPARATOR",
            TokenKind::End => "END",
            TokenKind::If => "IF",
            TokenKind::InlineIf => "INLINE IF",
            TokenKind::ElseIf => "ELSE IF",
            TokenKind::Else => "ELSE",
            TokenKind::Try => "TRY",
            TokenKind::Except => "EXCEPT",
            TokenKind::Finally => "FINALLY",
            TokenKind::As => "AS",
            TokenKind::While => "WHILE",
            TokenKind::ReturnStatement => "RETURN STATEMENT",
            TokenKind::Continue => "CONTINUE",
            TokenKind::Break => "BREAK",
            TokenKind::Separator => "SEPARATOR",
            TokenKind::Comment => "COMMENT",
            TokenKind::Continuation => "CONTINUATION",
            TokenKind::Eol => "EOL",
            TokenKind::Eos => "EOS",
            TokenKind::Error => "ERROR",
            TokenKind::FatalError => "FATAL ERROR",
        }
    }

    /// Header token kind for a section.
    pub fn for_section(id: SectionId) -> Self {
        match id {
            SectionId::Settings => TokenKind::SettingHeader,
            SectionId::Variables => TokenKind::VariableHeader,
            SectionId::TestCases => TokenKind::TestCaseHeader,
            SectionId::Tasks => TokenKind::TaskHeader,
            SectionId::Keywords => TokenKind::KeywordHeader,
            SectionId::Comments => TokenKind::CommentHeader,
        }
    }

    /// Token kind for a setting name cell.
    pub fn for_setting(id: SettingId) -> Self {
        match id {
            SettingId::Documentation => TokenKind::Documentation,
            SettingId::Metadata => TokenKind::Metadata,
            SettingId::SuiteSetup => TokenKind::SuiteSetup,
            SettingId::SuiteTeardown => TokenKind::SuiteTeardown,
            SettingId::TestSetup => TokenKind::TestSetup,
            SettingId::TestTeardown => TokenKind::TestTeardown,
            SettingId::TestTemplate => TokenKind::TestTemplate,
            SettingId::TestTimeout => TokenKind::TestTimeout,
            SettingId::ForceTags => TokenKind::ForceTags,
            SettingId::DefaultTags => TokenKind::DefaultTags,
            SettingId::Library => TokenKind::Library,
            SettingId::Resource => TokenKind::Resource,
            SettingId::Variables => TokenKind::Variables,
            SettingId::Tags => TokenKind::Tags,
            SettingId::Setup => TokenKind::Setup,
            SettingId::Teardown => TokenKind::Teardown,
            SettingId::Template => TokenKind::Template,
            SettingId::Timeout => TokenKind::Timeout,
            SettingId::Arguments => TokenKind::Arguments,
            SettingId::Return => TokenKind::Return,
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// TOKEN
// ============================================================================

/// A typed piece of source text with its position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub value: String,
    pub line: usize,
    pub column: usize,
    /// Message attached to `ERROR` / `FATAL ERROR` tokens.
    pub error: Option<String>,
}

impl Token {
    /// Construct a token read from source.
    pub fn new(kind: TokenKind, value: impl Into<String>, line: usize, column: usize) -> Self {
        Self {
            kind,
            value: value.into(),
            line,
            column,
            error: None,
        }
    }

    /// Construct a token that has no source position (line `0`).
    pub fn detached(kind: TokenKind, value: impl Into<String>) -> Self {
        Self::new(kind, value, 0, 0)
    }

    /// Same token with an error message attached.
    pub fn with_error(mut self, message: impl Into<String>) -> Self {
        self.error = Some(message.into());
        self
    }

    /// Turn this token into an error token, keeping its value.
    pub fn set_error(&mut self, message: impl Into<String>, fatal: bool) {
        self.kind = if fatal {
            TokenKind::FatalError
        } else {
            TokenKind::Error
        };
        self.error = Some(message.into());
    }

    /// Column just past the last character of the value.
    pub fn end_column(&self) -> usize {
        self.column + self.value.chars().count()
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}
