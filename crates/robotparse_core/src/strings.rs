//! Define shared string helpers used when matching vocabulary and formatting messages.
//!
//! This module holds **pure/deterministic** helpers used by the lexer (normalizing cell values before
//! registry lookups) and by validators (quoting offending values inside messages).
//!
//! ## Notes
//! - Whitespace is anything `char::is_whitespace` accepts, which covers the non-breaking and other
//!   Unicode spaces that can sneak into data cells.

/// Collapse every run of whitespace into one space and trim both ends.
///
/// ## Examples
/// ```rust
/// use robotparse_core::strings::normalize_whitespace;
///
/// assert_eq!(normalize_whitespace("  IN \u{a0} RANGE "), "IN RANGE");
/// ```
pub fn normalize_whitespace(value: &str) -> String {
    value.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Upper-case the first letter of each word and lower-case the rest.
///
/// Words are runs of alphabetic characters, so `"test-CASES"` becomes `"Test-Cases"`.
pub fn title_case(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut in_word = false;
    for ch in value.chars() {
        if ch.is_alphabetic() {
            if in_word {
                out.extend(ch.to_lowercase());
            } else {
                out.extend(ch.to_uppercase());
            }
            in_word = true;
        } else {
            out.push(ch);
            in_word = false;
        }
    }
    out
}

/// Trim any of `chars` from both ends of `value`.
pub fn strip_chars<'a>(value: &'a str, chars: &[char]) -> &'a str {
    value.trim_matches(|c| chars.contains(&c))
}

/// Format a sequence for a message: `'a'`, `'a' and 'b'`, `'a', 'b' and 'c'`.
///
/// ## Parameters
/// - `items`: values to quote, in order.
///
/// ## Returns
/// - (`String`): the quoted, human-readable list; empty input gives an empty string.
///
/// ## Examples
/// ```rust
/// use robotparse_core::strings::seq2str;
///
/// assert_eq!(seq2str(&["x"]), "'x'");
/// assert_eq!(seq2str(&["x", "y", "z"]), "'x', 'y' and 'z'");
/// ```
pub fn seq2str<S: AsRef<str>>(items: &[S]) -> String {
    let quoted: Vec<String> = items.iter().map(|s| format!("'{}'", s.as_ref())).collect();
    match quoted.split_last() {
        None => String::new(),
        Some((last, [])) => last.clone(),
        Some((last, rest)) => format!("{} and {}", rest.join(", "), last),
    }
}
