//! Define the section header vocabulary (`*** Settings ***`, `*** Test Cases ***`, ...).
//!
//! This module is the single source of truth for section names: a stable identifier ([`SectionId`]) plus a
//! const metadata table ([`SECTIONS`]) that records canonical spellings, singular aliases and provenance.
//!
//! ## Notes
//! - Header cells are matched **case-insensitively** after stripping the `*` decoration and collapsing
//!   whitespace (see [`normalize_header`]).
//! - Which sections a file may contain depends on its [`FileKind`]; see [`allowed_in`].
//!
//! ## Examples
//! ```rust
//! use robotparse_core::lang::sections::{self, SectionId};
//!
//! assert_eq!(sections::from_header("*** test case ***"), Some(SectionId::TestCases));
//! assert_eq!(sections::as_str(SectionId::TestCases), "Test Cases");
//! ```

use super::registry::{FileKind, Since, Stability};
use crate::strings::{normalize_whitespace, strip_chars, title_case};

/// Stable identifier for every section kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectionId {
    Settings,
    Variables,
    TestCases,
    Tasks,
    Keywords,
    Comments,
}

/// Metadata for a section kind.
#[derive(Debug, Clone, Copy)]
pub struct SectionInfo {
    pub id: SectionId,
    pub canonical: &'static str,
    pub aliases: &'static [&'static str],
    pub description: &'static str,
    pub since: Since,
    pub stability: Stability,
}

/// Registry of all sections, in the order they are listed in diagnostics.
pub const SECTIONS: &[SectionInfo] = &[
    info(SectionId::Settings, "Settings", &["Setting"], "Imports and suite-level settings.", Since(2, 0)),
    info(SectionId::Variables, "Variables", &["Variable"], "Suite-level variable table.", Since(2, 0)),
    info(SectionId::TestCases, "Test Cases", &["Test Case"], "Test case definitions.", Since(2, 0)),
    info(SectionId::Tasks, "Tasks", &["Task"], "Task definitions (RPA mode).", Since(3, 1)),
    info(SectionId::Keywords, "Keywords", &["Keyword"], "User keyword definitions.", Since(2, 0)),
    info(SectionId::Comments, "Comments", &["Comment"], "Free-form content ignored by execution.", Since(2, 0)),
];

/// Return `true` if a first cell looks like a section header (starts with `*`).
pub fn is_header_marker(value: &str) -> bool {
    value.starts_with('*')
}

/// Normalize a header cell for lookup: strip `*`/space decoration, collapse whitespace, title-case.
///
/// ## Examples
/// ```rust
/// use robotparse_core::lang::sections::normalize_header;
///
/// assert_eq!(normalize_header("***  TEST   cases ***"), "Test Cases");
/// ```
pub fn normalize_header(value: &str) -> String {
    let normalized = normalize_whitespace(value);
    title_case(strip_chars(&normalized, &['*', ' ']))
}

/// Lookup by already-normalized name (canonical or alias).
pub fn from_str(name: &str) -> Option<SectionId> {
    SECTIONS
        .iter()
        .find(|s| s.canonical == name || s.aliases.contains(&name))
        .map(|s| s.id)
}

/// Lookup by a raw header cell such as `*** Keywords ***`.
pub fn from_header(value: &str) -> Option<SectionId> {
    from_str(&normalize_header(value))
}

/// Canonical spelling.
pub fn as_str(id: SectionId) -> &'static str {
    info_for(id).canonical
}

/// Metadata lookup.
pub fn info_for(id: SectionId) -> &'static SectionInfo {
    SECTIONS.iter().find(|s| s.id == id).expect("section info missing")
}

/// Return `true` if a section may appear in a file read with the given grammar.
pub fn allowed_in(id: SectionId, kind: FileKind) -> bool {
    match kind {
        FileKind::Suite => true,
        FileKind::Resource | FileKind::Init => !is_test_section(id),
    }
}

/// Return `true` for the sections holding executable test/task definitions.
pub fn is_test_section(id: SectionId) -> bool {
    matches!(id, SectionId::TestCases | SectionId::Tasks)
}

/// Canonical names of the sections allowed by a grammar, in registry order.
pub fn valid_names(kind: FileKind) -> Vec<&'static str> {
    SECTIONS
        .iter()
        .filter(|s| allowed_in(s.id, kind))
        .map(|s| s.canonical)
        .collect()
}

// --- helpers -----------------------------------------------------------------

const fn info(
    id: SectionId,
    canonical: &'static str,
    aliases: &'static [&'static str],
    description: &'static str,
    since: Since,
) -> SectionInfo {
    SectionInfo {
        id,
        canonical,
        aliases,
        description,
        since,
        stability: Stability::Stable,
    }
}
