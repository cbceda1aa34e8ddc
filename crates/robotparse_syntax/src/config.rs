//! Parsing configuration.

use robotparse_core::FileKind;

/// Options shared by the lexer and the parser.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParseConfig {
    /// Grammar to read the data with
    pub kind: FileKind,
    /// Drop separators, line ends, continuation markers and comments
    pub data_only: bool,
    /// Replacement for `${CURDIR}` in data cells
    pub curdir: Option<String>,
}

impl ParseConfig {
    /// Create a new config with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the file grammar
    pub fn with_kind(mut self, kind: FileKind) -> Self {
        self.kind = kind;
        self
    }

    /// Keep only data tokens
    pub fn with_data_only(mut self, data_only: bool) -> Self {
        self.data_only = data_only;
        self
    }

    /// Replace `${CURDIR}` with the given directory
    pub fn with_curdir(mut self, curdir: impl Into<String>) -> Self {
        self.curdir = Some(curdir.into());
        self
    }
}
