//! Match Robot Framework variable syntax (`${scalar}`, `@{list}`, `&{dict}`, `%{env}`).
//!
//! These helpers answer the purely syntactic questions the lexer and validators need:
//! is a cell an assignment target, is it a dictionary variable, where does `name=value` split.
//! Nothing here resolves or evaluates variables.
//!
//! ## Notes
//! - A backslash escapes the next character, so `\${x}` is not a variable.
//! - Braces nest: `${outer${inner}}` is one variable whose base contains another variable.
//! - Unclosed variables (`${not`) are treated as "no variable" rather than an error.
//!
//! ## Examples
//! ```rust
//! use robotparse_core::variables::{is_assign, split_from_equals};
//!
//! assert!(is_assign("${x} =", true));
//! assert!(!is_assign("${x}==", true));
//! assert_eq!(split_from_equals("${a=b}=value"), ("${a=b}", Some("value")));
//! ```

const IDENTIFIERS: &[u8] = b"$@&%";
const ASSIGN_IDENTIFIERS: &[char] = &['$', '@', '&'];

/// First variable found in a string.
///
/// Offsets are byte offsets into the searched string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariableMatch<'a> {
    pub string: &'a str,
    pub identifier: char,
    pub base: &'a str,
    pub items: Vec<&'a str>,
    pub start: usize,
    pub end: usize,
}

impl VariableMatch<'_> {
    /// The match spans the whole string and has a non-empty base.
    pub fn is_variable(&self) -> bool {
        !self.base.is_empty() && self.start == 0 && self.end == self.string.len()
    }

    /// The whole string is a variable that can be assigned to: `$`, `@` or `&`, no items,
    /// and no variable inside the base.
    pub fn is_assign(&self) -> bool {
        self.is_variable()
            && ASSIGN_IDENTIFIERS.contains(&self.identifier)
            && self.items.is_empty()
            && search_variable(self.base).is_none()
    }
}

/// Find the first unescaped, properly closed variable in `value`.
pub fn search_variable(value: &str) -> Option<VariableMatch<'_>> {
    let bytes = value.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'\\' => i += 2,
            b if IDENTIFIERS.contains(&b) && bytes.get(i + 1) == Some(&b'{') => {
                return match_at(value, i);
            }
            _ => i += 1,
        }
    }
    None
}

/// Return `true` if `value` is an assignment target (`${x}`, `@{x}`, `&{x}`).
///
/// ## Parameters
/// - `value`: the cell text.
/// - `allow_assign_mark`: accept a trailing `=` (optionally preceded by spaces) as in `${x} =`.
pub fn is_assign(value: &str, allow_assign_mark: bool) -> bool {
    assign_match(value, allow_assign_mark).is_some()
}

/// Assignment target using the `$` identifier.
pub fn is_scalar_assign(value: &str, allow_assign_mark: bool) -> bool {
    assign_match(value, allow_assign_mark).is_some_and(|m| m.identifier == '$')
}

/// Assignment target using the `@` identifier.
pub fn is_list_assign(value: &str, allow_assign_mark: bool) -> bool {
    assign_match(value, allow_assign_mark).is_some_and(|m| m.identifier == '@')
}

/// Assignment target using the `&` identifier.
pub fn is_dict_assign(value: &str, allow_assign_mark: bool) -> bool {
    assign_match(value, allow_assign_mark).is_some_and(|m| m.identifier == '&')
}

/// Return `true` if the whole of `value` is a dictionary variable such as `&{dict}`.
pub fn is_dict_variable(value: &str) -> bool {
    search_variable(value).is_some_and(|m| m.is_variable() && m.identifier == '&' && m.items.is_empty())
}

/// Split `name=value` at the first `=` that is neither escaped nor inside a variable.
///
/// ## Returns
/// - `(name, Some(value))` when a separating `=` exists, otherwise `(value, None)`.
pub fn split_from_equals(value: &str) -> (&str, Option<&str>) {
    let bytes = value.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'\\' => i += 2,
            b'=' => return (&value[..i], Some(&value[i + 1..])),
            b if IDENTIFIERS.contains(&b) && bytes.get(i + 1) == Some(&b'{') => {
                i = match_at(value, i).map_or(i + 1, |m| m.end);
            }
            _ => i += 1,
        }
    }
    (value, None)
}

// --- helpers -----------------------------------------------------------------

fn assign_match(value: &str, allow_assign_mark: bool) -> Option<VariableMatch<'_>> {
    let target = match value.strip_suffix('=') {
        Some(stripped) if allow_assign_mark => stripped.trim_end(),
        _ => value,
    };
    search_variable(target).filter(VariableMatch::is_assign)
}

fn match_at(value: &str, start: usize) -> Option<VariableMatch<'_>> {
    let bytes = value.as_bytes();
    let base_start = start + 2;
    let mut depth = 1usize;
    let mut i = base_start;
    while i < bytes.len() {
        match bytes[i] {
            b'\\' => {
                i += 2;
                continue;
            }
            b'{' => depth += 1,
            b'}' => {
                depth -= 1;
                if depth == 0 {
                    break;
                }
            }
            _ => {}
        }
        i += 1;
    }
    if depth != 0 || i >= bytes.len() {
        return None;
    }
    let identifier = char::from(bytes[start]);
    let base = &value[base_start..i];
    let mut end = i + 1;
    let mut items = Vec::new();
    if ASSIGN_IDENTIFIERS.contains(&identifier) {
        while bytes.get(end) == Some(&b'[') {
            let Some(close) = item_end(bytes, end) else { break };
            items.push(&value[end + 1..close]);
            end = close + 1;
        }
    }
    Some(VariableMatch {
        string: value,
        identifier,
        base,
        items,
        start,
        end,
    })
}

fn item_end(bytes: &[u8], open: usize) -> Option<usize> {
    let mut depth = 0usize;
    let mut i = open;
    while i < bytes.len() {
        match bytes[i] {
            b'\\' => {
                i += 2;
                continue;
            }
            b'[' => depth += 1,
            b']' => {
                depth -= 1;
                if depth == 0 {
                    return Some(i);
                }
            }
            _ => {}
        }
        i += 1;
    }
    None
}
