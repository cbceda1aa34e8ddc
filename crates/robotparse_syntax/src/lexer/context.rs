//! Classify data cells by where they appear.
//!
//! The same spelling means different things in different places: `Library` is a setting in the setting section and a
//! keyword call inside a test, `END` closes a block only when one is open. [`FileLexer`] carries the state needed to
//! decide that (current section, settings seen so far, open control blocks) across the statements of one file.
//!
//! ## Notes
//! - Classification never fails. Problems become `ERROR` / `FATAL ERROR` tokens carrying a message.
//! - After a fatal error every remaining data cell is a comment.

use std::collections::HashMap;

use robotparse_core::FileKind;
use robotparse_core::errors;
use robotparse_core::lang::control::{self, ControlId};
use robotparse_core::lang::sections::{self, SectionId};
use robotparse_core::lang::settings::{self, SettingId, SettingScope, ValueShape};
use robotparse_core::variables;

use super::tokenizer::LexToken;
use super::tokens::TokenKind;
use crate::config::ParseConfig;

const CURDIR: &str = "${CURDIR}";

/// What kind of section the lexer is in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    /// Content before the first header.
    Implicit,
    Comment,
    Setting,
    Variable,
    TestCase,
    Keyword,
    /// After an unrecognized or disallowed header.
    Invalid,
}

/// Values of the settings seen in one scope.
#[derive(Debug, Default)]
struct SettingsSeen {
    values: HashMap<SettingId, Vec<String>>,
}

impl SettingsSeen {
    fn contains(&self, id: SettingId) -> bool {
        self.values.contains_key(&id)
    }

    fn get(&self, id: SettingId) -> Option<&[String]> {
        self.values.get(&id).map(Vec::as_slice)
    }

    fn record(&mut self, id: SettingId, values: Vec<String>) {
        self.values.entry(id).or_insert(values);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum OpenBlock {
    For,
    If,
    Try,
    While,
}

/// State of the test case or keyword being lexed.
#[derive(Debug, Default)]
struct BodyState {
    started: bool,
    settings: SettingsSeen,
    blocks: Vec<OpenBlock>,
}

/// Context-aware classifier for the statements of one file.
pub(crate) struct FileLexer<'a> {
    config: &'a ParseConfig,
    section: Section,
    fatal: bool,
    file_settings: SettingsSeen,
    body: BodyState,
}

impl<'a> FileLexer<'a> {
    pub fn new(config: &'a ParseConfig) -> Self {
        Self {
            config,
            section: Section::Implicit,
            fatal: false,
            file_settings: SettingsSeen::default(),
            body: BodyState::default(),
        }
    }

    /// Classify the unknown cells of one statement in place.
    ///
    /// ## Returns
    /// - `true` if the statement is an inline `IF` and needs a closing virtual `END`.
    pub fn lex_statement(&mut self, tokens: &mut [LexToken]) -> bool {
        let data: Vec<usize> = tokens
            .iter()
            .enumerate()
            .filter(|(_, token)| token.kind.is_none())
            .map(|(index, _)| index)
            .collect();
        let Some(&first) = data.first() else {
            return false;
        };
        if let Some(curdir) = &self.config.curdir {
            for &index in &data {
                if tokens[index].value.contains(CURDIR) {
                    tokens[index].value = tokens[index].value.replace(CURDIR, curdir);
                }
            }
        }
        if self.fatal {
            set_comments(tokens, &data);
            return false;
        }
        if sections::is_header_marker(&tokens[first].value) {
            self.lex_header(tokens, &data);
            return false;
        }
        match self.section {
            Section::Implicit | Section::Comment | Section::Invalid => set_comments(tokens, &data),
            Section::Setting => {
                let scope = SettingScope::for_file(self.config.kind);
                lex_setting(tokens, &data, scope, self.config.kind, &mut self.file_settings);
            }
            Section::Variable => {
                tokens[first].kind = Some(TokenKind::Variable);
                set_all(tokens, &data[1..], TokenKind::Argument);
            }
            Section::TestCase | Section::Keyword => return self.lex_body(tokens, &data),
        }
        false
    }

    fn enter(&mut self, section: Section) {
        tracing::debug!(?section, "entering section");
        self.section = section;
        self.body = BodyState::default();
    }

    fn lex_header(&mut self, tokens: &mut [LexToken], data: &[usize]) {
        let (&first, rest) = match data.split_first() {
            Some(split) => split,
            None => return,
        };
        let value = tokens[first].value.clone();
        let kind = self.config.kind;
        match sections::from_header(&value) {
            Some(id) if sections::allowed_in(id, kind) => {
                tokens[first].kind = Some(TokenKind::for_section(id));
                set_all(tokens, rest, TokenKind::Name);
                self.enter(match id {
                    SectionId::Settings => Section::Setting,
                    SectionId::Variables => Section::Variable,
                    SectionId::TestCases | SectionId::Tasks => Section::TestCase,
                    SectionId::Keywords => Section::Keyword,
                    SectionId::Comments => Section::Comment,
                });
                return;
            }
            Some(_) if kind == FileKind::Resource => {
                let name = sections::normalize_header(&value);
                tokens[first].set_error(errors::test_section_in_resource(&name), true);
                tracing::debug!(header = %value, "fatal section header, remaining data is commentary");
                self.fatal = true;
            }
            Some(_) => {
                let name = sections::normalize_header(&value);
                tokens[first].set_error(errors::test_section_in_init(&name), false);
                self.enter(Section::Invalid);
            }
            None => {
                tokens[first].set_error(errors::unrecognized_section(&value, kind), false);
                self.enter(Section::Invalid);
            }
        }
        set_all(tokens, rest, TokenKind::Comment);
    }

    fn lex_body(&mut self, tokens: &mut [LexToken], data: &[usize]) -> bool {
        let mut data = data;
        if !self.body.started || !tokens[data[0]].value.is_empty() {
            tokens[data[0]].kind = Some(if self.section == Section::Keyword {
                TokenKind::KeywordName
            } else {
                TokenKind::TestCaseName
            });
            self.body = BodyState {
                started: true,
                ..BodyState::default()
            };
            data = &data[1..];
        } else {
            // Indentation cells stay unclassified and are dropped on emission.
            while let Some((&first, rest)) = data.split_first() {
                if !tokens[first].value.is_empty() {
                    break;
                }
                data = rest;
            }
        }
        if data.is_empty() {
            return false;
        }
        self.lex_body_statement(tokens, data)
    }

    fn lex_body_statement(&mut self, tokens: &mut [LexToken], data: &[usize]) -> bool {
        let top = self.body.blocks.last().copied();
        let first = data[0];
        if top.is_none() && settings::bracketed_name(&tokens[first].value).is_some() {
            let scope = if self.section == Section::Keyword {
                SettingScope::Keyword
            } else {
                SettingScope::TestCase
            };
            lex_setting(tokens, data, scope, self.config.kind, &mut self.body.settings);
            return false;
        }
        if data.len() > 2 && starts_inline_if(tokens, data) {
            self.lex_inline_if(tokens, data);
            return true;
        }
        let rest = &data[1..];
        let marker = match control::from_str(&tokens[first].value) {
            Some(ControlId::For) => {
                lex_for_header(tokens, data);
                self.push(OpenBlock::For);
                return false;
            }
            Some(ControlId::While) => {
                lex_while_header(tokens, data);
                self.push(OpenBlock::While);
                return false;
            }
            Some(ControlId::Except) if top == Some(OpenBlock::Try) => {
                lex_except_header(tokens, data);
                return false;
            }
            Some(ControlId::If) => {
                self.push(OpenBlock::If);
                TokenKind::If
            }
            Some(ControlId::Try) => {
                self.push(OpenBlock::Try);
                TokenKind::Try
            }
            Some(ControlId::ElseIf) if top == Some(OpenBlock::If) => TokenKind::ElseIf,
            Some(ControlId::Else) if matches!(top, Some(OpenBlock::If | OpenBlock::Try)) => TokenKind::Else,
            Some(ControlId::Finally) if top == Some(OpenBlock::Try) => TokenKind::Finally,
            Some(ControlId::End) if top.is_some() => {
                self.pop();
                TokenKind::End
            }
            Some(ControlId::Return) => TokenKind::ReturnStatement,
            Some(ControlId::Break) => TokenKind::Break,
            Some(ControlId::Continue) => TokenKind::Continue,
            _ => {
                self.lex_keyword_call(tokens, data);
                return false;
            }
        };
        tokens[first].kind = Some(marker);
        set_all(tokens, rest, TokenKind::Argument);
        false
    }

    fn push(&mut self, block: OpenBlock) {
        tracing::trace!(?block, depth = self.body.blocks.len() + 1, "open block");
        self.body.blocks.push(block);
    }

    fn pop(&mut self) {
        let block = self.body.blocks.pop();
        tracing::trace!(?block, depth = self.body.blocks.len(), "close block");
    }

    fn lex_keyword_call(&self, tokens: &mut [LexToken], data: &[usize]) {
        if self.section == Section::TestCase && self.template_set() {
            set_all(tokens, data, TokenKind::Argument);
            return;
        }
        let mut keyword_seen = false;
        for &index in data {
            let kind = if keyword_seen {
                TokenKind::Argument
            } else if variables::is_assign(&tokens[index].value, true) {
                TokenKind::Assign
            } else {
                keyword_seen = true;
                TokenKind::Keyword
            };
            tokens[index].kind = Some(kind);
        }
    }

    /// A test's own `[Template]` wins; `NONE` or an empty `[Template]` switches the suite's `Test Template` off.
    fn template_set(&self) -> bool {
        match self.body.settings.get(SettingId::Template) {
            Some([]) => false,
            Some([first, ..]) if settings::is_disabling_value(first) => false,
            Some([first, ..]) if !first.is_empty() => true,
            _ => self.file_settings.contains(SettingId::TestTemplate),
        }
    }

    /// Split an inline `IF` row into its header, branch markers and branch bodies.
    fn lex_inline_if(&mut self, tokens: &mut [LexToken], data: &[usize]) {
        let last = data[data.len() - 1];
        let mut parts: Vec<Vec<usize>> = Vec::new();
        let mut current = Vec::new();
        let mut expect_condition = false;
        for &index in data {
            let word = control::from_str(&tokens[index].value);
            if expect_condition {
                tokens[index].eos_after = index != last;
                current.push(index);
                parts.push(std::mem::take(&mut current));
                expect_condition = false;
            } else if word == Some(ControlId::If) {
                current.push(index);
                expect_condition = true;
            } else if word == Some(ControlId::ElseIf) {
                tokens[index].eos_before = true;
                parts.push(std::mem::replace(&mut current, vec![index]));
                expect_condition = true;
            } else if word == Some(ControlId::Else) {
                tokens[index].eos_before = true;
                tokens[index].eos_after = index != last;
                parts.push(std::mem::take(&mut current));
                parts.push(vec![index]);
            } else {
                current.push(index);
            }
        }
        parts.push(current);
        for part in parts.iter().filter(|part| !part.is_empty()) {
            self.lex_inline_part(tokens, part);
        }
    }

    fn lex_inline_part(&mut self, tokens: &mut [LexToken], part: &[usize]) {
        if starts_inline_if(tokens, part) {
            let mut if_seen = false;
            for &index in part {
                let kind = if if_seen {
                    TokenKind::Argument
                } else if control::is(&tokens[index].value, ControlId::If) {
                    if_seen = true;
                    TokenKind::InlineIf
                } else {
                    TokenKind::Assign
                };
                tokens[index].kind = Some(kind);
            }
            return;
        }
        let marker = match control::from_str(&tokens[part[0]].value) {
            Some(ControlId::ElseIf) => TokenKind::ElseIf,
            Some(ControlId::Else) => TokenKind::Else,
            Some(ControlId::Return) => TokenKind::ReturnStatement,
            Some(ControlId::Break) => TokenKind::Break,
            Some(ControlId::Continue) => TokenKind::Continue,
            _ => {
                self.lex_keyword_call(tokens, part);
                return;
            }
        };
        tokens[part[0]].kind = Some(marker);
        set_all(tokens, &part[1..], TokenKind::Argument);
    }
}

// --- helpers -----------------------------------------------------------------

fn set_all(tokens: &mut [LexToken], indices: &[usize], kind: TokenKind) {
    for &index in indices {
        tokens[index].kind = Some(kind);
    }
}

/// Mark data as comments. Empty cells (indentation) stay unclassified and are dropped.
fn set_comments(tokens: &mut [LexToken], indices: &[usize]) {
    for &index in indices {
        if !tokens[index].value.is_empty() {
            tokens[index].kind = Some(TokenKind::Comment);
        }
    }
}

/// `IF` preceded only by assignment targets.
fn starts_inline_if(tokens: &[LexToken], data: &[usize]) -> bool {
    for &index in data {
        let value = &tokens[index].value;
        if control::is(value, ControlId::If) {
            return true;
        }
        if !variables::is_assign(value, true) {
            return false;
        }
    }
    false
}

fn lex_setting(
    tokens: &mut [LexToken],
    data: &[usize],
    scope: SettingScope,
    file_kind: FileKind,
    seen: &mut SettingsSeen,
) {
    let (&head, values) = match data.split_first() {
        Some(split) => split,
        None => return,
    };
    let cell = tokens[head].value.as_str();
    let name = if scope.is_file_level() {
        cell
    } else {
        settings::bracketed_name(cell).unwrap_or(cell)
    }
    .to_string();
    match resolve_setting(&name, values.len(), scope, file_kind, seen) {
        Ok(id) => {
            tokens[head].kind = Some(TokenKind::for_setting(id));
            seen.record(id, values.iter().map(|&index| tokens[index].value.clone()).collect());
            shape_values(tokens, values, settings::info_for(id).shape);
        }
        Err(message) => {
            tokens[head].set_error(message, false);
            set_all(tokens, values, TokenKind::Comment);
        }
    }
}

fn resolve_setting(
    name: &str,
    value_count: usize,
    scope: SettingScope,
    file_kind: FileKind,
    seen: &SettingsSeen,
) -> Result<SettingId, String> {
    let id = match settings::from_str(&settings::normalize_name(name)) {
        Some(id) if settings::allowed_in(id, scope) => id,
        Some(id)
            if matches!(scope, SettingScope::ResourceFile | SettingScope::InitFile)
                && settings::allowed_in(id, SettingScope::SuiteFile) =>
        {
            return Err(errors::setting_not_allowed(name, file_kind));
        }
        _ => return Err(errors::non_existing_setting(name)),
    };
    let info = settings::info_for(id);
    if seen.contains(id) && !info.multi_use {
        return Err(errors::duplicate_setting(name));
    }
    if info.single_value && value_count > 1 {
        return Err(errors::setting_single_value(name, value_count));
    }
    Ok(id)
}

fn shape_values(tokens: &mut [LexToken], values: &[usize], shape: ValueShape) {
    if shape == ValueShape::Arguments {
        set_all(tokens, values, TokenKind::Argument);
        return;
    }
    let Some((&name, arguments)) = values.split_first() else {
        return;
    };
    tokens[name].kind = Some(TokenKind::Name);
    set_all(tokens, arguments, TokenKind::Argument);
    if shape == ValueShape::NameArgumentsAndAlias && values.len() > 1 {
        let marker = values[values.len() - 2];
        if control::is(&tokens[marker].value, ControlId::WithName) {
            tokens[marker].kind = Some(TokenKind::WithName);
            tokens[values[values.len() - 1]].kind = Some(TokenKind::Name);
        }
    }
}

fn lex_for_header(tokens: &mut [LexToken], data: &[usize]) {
    tokens[data[0]].kind = Some(TokenKind::For);
    let mut separator_seen = false;
    for &index in &data[1..] {
        let kind = if separator_seen {
            TokenKind::Argument
        } else if control::is_for_separator(&tokens[index].value) {
            separator_seen = true;
            TokenKind::ForSeparator
        } else {
            TokenKind::Variable
        };
        tokens[index].kind = Some(kind);
    }
}

fn lex_while_header(tokens: &mut [LexToken], data: &[usize]) {
    tokens[data[0]].kind = Some(TokenKind::While);
    set_all(tokens, &data[1..], TokenKind::Argument);
    if let Some(&last) = data[1..].last() {
        if tokens[last].value.starts_with("limit=") {
            tokens[last].kind = Some(TokenKind::Option);
        }
    }
}

fn lex_except_header(tokens: &mut [LexToken], data: &[usize]) {
    tokens[data[0]].kind = Some(TokenKind::Except);
    let mut as_seen = false;
    let mut last_pattern = None;
    for &index in &data[1..] {
        let kind = if control::is(&tokens[index].value, ControlId::As) {
            as_seen = true;
            TokenKind::As
        } else if as_seen {
            TokenKind::Variable
        } else {
            last_pattern = Some(index);
            TokenKind::Argument
        };
        tokens[index].kind = Some(kind);
    }
    if let Some(index) = last_pattern {
        if tokens[index].value.starts_with("type=") {
            tokens[index].kind = Some(TokenKind::Option);
        }
    }
}
