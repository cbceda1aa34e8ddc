//! Define the setting vocabulary for the setting section and for `[Setting]` cells in test cases and keywords.
//!
//! Each setting records where it may appear ([`SettingScope`]), whether it may be repeated, whether it takes a single
//! value, and how its value cells are shaped ([`ValueShape`]).
//!
//! ## Notes
//! - Lookup via [`from_str`] expects an already-normalized, title-cased name (see [`normalize_name`]).
//! - `Task …` spellings are aliases of the `Test …` settings and only exist at file level.
//!
//! ## Examples
//! ```rust
//! use robotparse_core::lang::settings::{self, SettingId, SettingScope};
//!
//! assert_eq!(settings::from_str(&settings::normalize_name("task  setup")), Some(SettingId::TestSetup));
//! assert!(settings::allowed_in(SettingId::Arguments, SettingScope::Keyword));
//! assert!(!settings::allowed_in(SettingId::Arguments, SettingScope::TestCase));
//! ```

use super::registry::{FileKind, Since, Stability};
use crate::strings::{normalize_whitespace, title_case};

/// Stable identifier for every setting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SettingId {
    // File level
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
    Library,
    Resource,
    Variables,

    // Test case / keyword level
    Tags,
    Setup,
    Teardown,
    Template,
    Timeout,
    Arguments,
    Return,
}

/// Where a setting is read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SettingScope {
    SuiteFile,
    InitFile,
    ResourceFile,
    TestCase,
    Keyword,
}

impl SettingScope {
    /// File-level scope for a grammar.
    pub fn for_file(kind: FileKind) -> Self {
        match kind {
            FileKind::Suite => SettingScope::SuiteFile,
            FileKind::Resource => SettingScope::ResourceFile,
            FileKind::Init => SettingScope::InitFile,
        }
    }

    /// Return `true` for the setting-section scopes.
    pub fn is_file_level(self) -> bool {
        matches!(self, SettingScope::SuiteFile | SettingScope::InitFile | SettingScope::ResourceFile)
    }
}

/// How the value cells after the setting name are classified.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueShape {
    /// Every cell is an argument.
    Arguments,
    /// First cell is a name, the rest are arguments (`Suite Setup    Keyword    arg`).
    NameAndArguments,
    /// Like `NameAndArguments`, plus an optional trailing `WITH NAME    alias` pair.
    NameArgumentsAndAlias,
}

/// Metadata for a setting.
#[derive(Debug, Clone, Copy)]
pub struct SettingInfo {
    pub id: SettingId,
    pub canonical: &'static str,
    pub aliases: &'static [&'static str],
    pub scopes: &'static [SettingScope],
    /// May appear more than once in the same scope.
    pub multi_use: bool,
    /// Accepts at most one value cell.
    pub single_value: bool,
    pub shape: ValueShape,
    pub since: Since,
    pub stability: Stability,
}

use SettingScope::{InitFile, Keyword, ResourceFile, SuiteFile, TestCase};

const FILE_ANY: &[SettingScope] = &[SuiteFile, InitFile, ResourceFile];
const SUITE_AND_INIT: &[SettingScope] = &[SuiteFile, InitFile];
const SUITE_ONLY: &[SettingScope] = &[SuiteFile];

/// Registry of all settings.
///
/// ## Notes
/// - The ordering is not semantically meaningful, but is grouped by scope for readability.
pub const SETTINGS: &[SettingInfo] = &[
    // File level
    info(
        SettingId::Documentation,
        "Documentation",
        &[],
        &[SuiteFile, InitFile, ResourceFile, TestCase, Keyword],
        ValueShape::Arguments,
    ),
    info(SettingId::Metadata, "Metadata", &[], SUITE_AND_INIT, ValueShape::NameAndArguments).multi(),
    info(SettingId::SuiteSetup, "Suite Setup", &[], SUITE_AND_INIT, ValueShape::NameAndArguments),
    info(SettingId::SuiteTeardown, "Suite Teardown", &[], SUITE_AND_INIT, ValueShape::NameAndArguments),
    info(
        SettingId::TestSetup,
        "Test Setup",
        &["Task Setup"],
        SUITE_AND_INIT,
        ValueShape::NameAndArguments,
    ),
    info(
        SettingId::TestTeardown,
        "Test Teardown",
        &["Task Teardown"],
        SUITE_AND_INIT,
        ValueShape::NameAndArguments,
    ),
    info(
        SettingId::TestTemplate,
        "Test Template",
        &["Task Template"],
        SUITE_ONLY,
        ValueShape::NameAndArguments,
    )
    .single(),
    info(
        SettingId::TestTimeout,
        "Test Timeout",
        &["Task Timeout"],
        SUITE_AND_INIT,
        ValueShape::Arguments,
    )
    .single(),
    info(SettingId::ForceTags, "Force Tags", &[], SUITE_AND_INIT, ValueShape::Arguments),
    info(SettingId::DefaultTags, "Default Tags", &[], SUITE_ONLY, ValueShape::Arguments),
    info(SettingId::Library, "Library", &[], FILE_ANY, ValueShape::NameArgumentsAndAlias).multi(),
    info(SettingId::Resource, "Resource", &[], FILE_ANY, ValueShape::NameAndArguments)
        .multi()
        .single(),
    info(SettingId::Variables, "Variables", &[], FILE_ANY, ValueShape::NameAndArguments).multi(),
    // Test case / keyword level
    info(SettingId::Tags, "Tags", &[], &[TestCase, Keyword], ValueShape::Arguments),
    info(SettingId::Setup, "Setup", &[], &[TestCase], ValueShape::NameAndArguments),
    info(SettingId::Teardown, "Teardown", &[], &[TestCase, Keyword], ValueShape::NameAndArguments),
    info(SettingId::Template, "Template", &[], &[TestCase], ValueShape::NameAndArguments).single(),
    info(SettingId::Timeout, "Timeout", &[], &[TestCase, Keyword], ValueShape::Arguments).single(),
    info(SettingId::Arguments, "Arguments", &[], &[Keyword], ValueShape::Arguments),
    info(SettingId::Return, "Return", &[], &[Keyword], ValueShape::Arguments),
];

/// Normalize a raw setting cell: collapse whitespace and title-case (`"suite  SETUP"` → `"Suite Setup"`).
pub fn normalize_name(raw: &str) -> String {
    title_case(&normalize_whitespace(raw))
}

/// Strip the `[...]` decoration of a test/keyword setting cell.
///
/// ## Returns
/// - `Some(inner)` for `[Name]` cells (inner text trimmed), `None` when the cell is not bracketed.
pub fn bracketed_name(cell: &str) -> Option<&str> {
    cell.strip_prefix('[')
        .and_then(|rest| rest.strip_suffix(']'))
        .map(str::trim)
}

/// Return `true` for the value that switches an inherited setting off (`NONE`, any case).
pub fn is_disabling_value(value: &str) -> bool {
    value.eq_ignore_ascii_case("NONE")
}

/// Lookup by normalized spelling (canonical or alias).
pub fn from_str(name: &str) -> Option<SettingId> {
    SETTINGS
        .iter()
        .find(|s| s.canonical == name || s.aliases.contains(&name))
        .map(|s| s.id)
}

/// Canonical spelling.
pub fn as_str(id: SettingId) -> &'static str {
    info_for(id).canonical
}

/// Metadata lookup.
pub fn info_for(id: SettingId) -> &'static SettingInfo {
    SETTINGS.iter().find(|s| s.id == id).expect("setting info missing")
}

/// Return `true` if the setting may appear in the given scope.
pub fn allowed_in(id: SettingId, scope: SettingScope) -> bool {
    info_for(id).scopes.contains(&scope)
}

/// Canonical names of the settings available in a scope, in registry order.
pub fn names_in(scope: SettingScope) -> Vec<&'static str> {
    SETTINGS
        .iter()
        .filter(|s| s.scopes.contains(&scope))
        .map(|s| s.canonical)
        .collect()
}

// --- helpers -----------------------------------------------------------------

const fn info(
    id: SettingId,
    canonical: &'static str,
    aliases: &'static [&'static str],
    scopes: &'static [SettingScope],
    shape: ValueShape,
) -> SettingInfo {
    SettingInfo {
        id,
        canonical,
        aliases,
        scopes,
        multi_use: false,
        single_value: false,
        shape,
        since: Since(2, 0),
        stability: Stability::Stable,
    }
}

impl SettingInfo {
    const fn multi(mut self) -> Self {
        self.multi_use = true;
        self
    }

    const fn single(mut self) -> Self {
        self.single_value = true;
        self
    }
}
