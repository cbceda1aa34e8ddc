//! Define the control-structure vocabulary (`FOR`, `IF`, `ELSE IF`, `END`, `TRY`, ...).
//!
//! Control words are plain data cells that change meaning by position; the lexer decides whether a cell
//! is used as a marker, this registry decides whether the spelling matches at all.
//!
//! ## Notes
//! - Matching is **case-sensitive** (`For` is a keyword call, `FOR` starts a loop) but whitespace inside
//!   the cell is normalized, so `ELSE\u{a0}IF` matches [`ControlId::ElseIf`].
//! - The accepted `FOR` separators live in one place: [`FOR_SEPARATORS`].

use super::registry::{Since, Stability};
use crate::strings::normalize_whitespace;

/// Stable identifier for every control word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ControlId {
    // Loops
    For,
    In,
    InRange,
    InEnumerate,
    InZip,
    While,

    // Conditionals
    If,
    ElseIf,
    Else,

    // Exceptions
    Try,
    Except,
    Finally,
    As,

    // Shared
    End,

    // Statements
    Return,
    Break,
    Continue,

    // Library import alias marker
    WithName,
}

/// Role of a control word inside a body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ControlCategory {
    /// Opens a block that needs `END`.
    Opener,
    /// Starts another branch of an open block.
    Branch,
    /// Closes the innermost open block.
    Closer,
    /// Separates loop variables from loop values.
    ForSeparator,
    /// A standalone statement.
    Statement,
    /// A marker used inside another statement (`AS`, `WITH NAME`).
    Marker,
}

/// Metadata for a control word.
#[derive(Debug, Clone, Copy)]
pub struct ControlInfo {
    pub id: ControlId,
    pub canonical: &'static str,
    pub category: ControlCategory,
    pub since: Since,
    pub stability: Stability,
}

/// Registry of all control words.
pub const CONTROL_WORDS: &[ControlInfo] = &[
    info(ControlId::For, "FOR", ControlCategory::Opener, Since(3, 1)),
    info(ControlId::In, "IN", ControlCategory::ForSeparator, Since(3, 1)),
    info(ControlId::InRange, "IN RANGE", ControlCategory::ForSeparator, Since(3, 1)),
    info(ControlId::InEnumerate, "IN ENUMERATE", ControlCategory::ForSeparator, Since(3, 1)),
    info(ControlId::InZip, "IN ZIP", ControlCategory::ForSeparator, Since(3, 1)),
    info(ControlId::While, "WHILE", ControlCategory::Opener, Since(5, 0)),
    info(ControlId::If, "IF", ControlCategory::Opener, Since(4, 0)),
    info(ControlId::ElseIf, "ELSE IF", ControlCategory::Branch, Since(4, 0)),
    info(ControlId::Else, "ELSE", ControlCategory::Branch, Since(4, 0)),
    info(ControlId::Try, "TRY", ControlCategory::Opener, Since(5, 0)),
    info(ControlId::Except, "EXCEPT", ControlCategory::Branch, Since(5, 0)),
    info(ControlId::Finally, "FINALLY", ControlCategory::Branch, Since(5, 0)),
    info(ControlId::As, "AS", ControlCategory::Marker, Since(5, 0)),
    info(ControlId::End, "END", ControlCategory::Closer, Since(3, 2)),
    info(ControlId::Return, "RETURN", ControlCategory::Statement, Since(5, 0)),
    info(ControlId::Break, "BREAK", ControlCategory::Statement, Since(5, 0)),
    info(ControlId::Continue, "CONTINUE", ControlCategory::Statement, Since(5, 0)),
    info(ControlId::WithName, "WITH NAME", ControlCategory::Marker, Since(2, 0)),
];

/// Separators accepted between `FOR` loop variables and values.
pub const FOR_SEPARATORS: &[ControlId] = &[
    ControlId::In,
    ControlId::InRange,
    ControlId::InEnumerate,
    ControlId::InZip,
];

/// Lookup by spelling, after whitespace normalization.
pub fn from_str(value: &str) -> Option<ControlId> {
    let normalized = normalize_whitespace(value);
    CONTROL_WORDS
        .iter()
        .find(|c| c.canonical == normalized)
        .map(|c| c.id)
}

/// Return `true` if a cell spells the given control word.
pub fn is(value: &str, id: ControlId) -> bool {
    from_str(value) == Some(id)
}

/// Return `true` if a cell spells one of the [`FOR_SEPARATORS`].
pub fn is_for_separator(value: &str) -> bool {
    from_str(value).is_some_and(|id| FOR_SEPARATORS.contains(&id))
}

/// Canonical spelling.
pub fn as_str(id: ControlId) -> &'static str {
    info_for(id).canonical
}

/// Metadata lookup.
pub fn info_for(id: ControlId) -> &'static ControlInfo {
    CONTROL_WORDS
        .iter()
        .find(|c| c.id == id)
        .expect("control word info missing")
}

// --- helpers -----------------------------------------------------------------

const fn info(id: ControlId, canonical: &'static str, category: ControlCategory, since: Since) -> ControlInfo {
    ControlInfo {
        id,
        canonical,
        category,
        since,
        stability: Stability::Stable,
    }
}
