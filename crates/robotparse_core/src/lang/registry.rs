//! Shareable metadata for `robotparse_core::lang` registries.
//!
//! The `robotparse_core::lang` module is a set of **registry-first** vocabularies: section headers,
//! settings and control words. This submodule provides the small, dependency-free metadata types
//! that are reused across all registries.
//!
//! ## Notes
//! - These types are intentionally lightweight and `Copy`-friendly so registries can live in
//!   `const` tables.
//! - Metadata is meant for tooling/docs/diagnostics; enforcement of context rules still lives
//!   in the lexer.
//!
//! ## See also
//! - [`crate::lang::sections`]
//! - [`crate::lang::settings`]
//! - [`crate::lang::control`]

/// Identify the Robot Framework release a vocabulary item is available since.
///
/// ## Notes
/// - Stored as `(major, minor)`; patch releases never introduce syntax.
///
/// ## Examples
/// ```rust
/// use robotparse_core::lang::registry::Since;
///
/// let since = Since(5, 0);
/// assert!(since >= Since(4, 0));
/// assert_eq!(since.to_string(), "5.0");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Since(pub u16, pub u16);

impl std::fmt::Display for Since {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{}", self.0, self.1)
    }
}

/// Describe the lifecycle status of a vocabulary item.
///
/// ## Notes
/// - This is intended for docs/tooling (e.g. to warn on deprecated spellings), not for
///   feature-gating by itself.
///
/// ## Examples
/// ```rust
/// use robotparse_core::lang::registry::Stability;
///
/// let s = Stability::Stable;
/// assert_eq!(format!("{s:?}"), "Stable");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stability {
    Stable,
    Deprecated,
}

/// The grammar a data file is read with.
///
/// The grammar decides which sections and settings are legal:
/// - `Suite`: a test case file; every section is allowed.
/// - `Resource`: a resource file; `Test Cases`/`Tasks` sections are a fatal error.
/// - `Init`: a suite initialization file (`__init__.robot`); no test sections, a reduced setting set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FileKind {
    #[default]
    Suite,
    Resource,
    Init,
}

impl FileKind {
    /// Human-readable file description used in diagnostics (`"resource file"`, ...).
    pub fn description(self) -> &'static str {
        match self {
            FileKind::Suite => "suite file",
            FileKind::Resource => "resource file",
            FileKind::Init => "suite initialization file",
        }
    }
}
