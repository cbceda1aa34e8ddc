//! Per-statement checks, run whenever a [`Statement`] is built.
//!
//! Each check is a pure function of the statement's tokens. Errors coming from `ERROR` tokens are not repeated here;
//! [`Statement::errors`] already reports them.

use std::collections::HashSet;

use robotparse_core::errors;
use robotparse_core::variables;

use crate::ast::{Statement, StatementKind};
use crate::lexer::TokenKind;

/// Validation errors for `statement`, in the order they are reported.
pub fn validate(statement: &Statement) -> Vec<String> {
    match statement.kind() {
        StatementKind::ForHeader => validate_for(statement),
        StatementKind::IfHeader | StatementKind::InlineIfHeader => validate_condition("IF", statement),
        StatementKind::ElseIfHeader => validate_condition("ELSE IF", statement),
        StatementKind::WhileHeader => validate_condition("WHILE", statement),
        StatementKind::ElseHeader => validate_no_arguments("ELSE", statement),
        StatementKind::End => validate_no_arguments("END", statement),
        StatementKind::TryHeader => validate_no_arguments("TRY", statement),
        StatementKind::FinallyHeader => validate_no_arguments("FINALLY", statement),
        StatementKind::Break => validate_no_arguments("BREAK", statement),
        StatementKind::Continue => validate_no_arguments("CONTINUE", statement),
        StatementKind::ExceptHeader => validate_except(statement),
        StatementKind::Variable => validate_variable(statement),
        StatementKind::Arguments => validate_arguments(&statement.values()),
        _ => Vec::new(),
    }
}

fn validate_for(statement: &Statement) -> Vec<String> {
    let mut found = Vec::new();
    let loop_variables = statement.variables();
    if loop_variables.is_empty() {
        found.push(errors::FOR_NO_VARIABLES.to_string());
    }
    if statement.flavor().is_none() {
        found.push(errors::FOR_NO_SEPARATOR.to_string());
        return found;
    }
    for variable in loop_variables {
        if !variables::is_scalar_assign(variable, false) {
            found.push(errors::invalid_loop_variable(variable));
        }
    }
    if statement.values().is_empty() {
        found.push(errors::FOR_NO_VALUES.to_string());
    }
    found
}

fn validate_condition(marker: &str, statement: &Statement) -> Vec<String> {
    match statement.args().len() {
        0 => vec![errors::missing_condition(marker)],
        1 => Vec::new(),
        _ => vec![errors::multiple_conditions(marker)],
    }
}

fn validate_no_arguments(marker: &str, statement: &Statement) -> Vec<String> {
    let args = statement.args();
    if args.is_empty() {
        Vec::new()
    } else {
        vec![errors::no_arguments_accepted(marker, &args)]
    }
}

fn validate_except(statement: &Statement) -> Vec<String> {
    if statement.get_token(&[TokenKind::As]).is_none() {
        return Vec::new();
    }
    match statement.get_values(&[TokenKind::Variable]).as_slice() {
        [] => vec![errors::EXCEPT_AS_NEEDS_VARIABLE.to_string()],
        [variable] if !variables::is_scalar_assign(variable, false) => vec![errors::invalid_except_variable(variable)],
        [_] => Vec::new(),
        _ => vec![errors::EXCEPT_AS_ONE_VARIABLE.to_string()],
    }
}

fn validate_variable(statement: &Statement) -> Vec<String> {
    let name = statement
        .get_value(TokenKind::Variable)
        .unwrap_or_default();
    if !variables::is_assign(name, true) {
        return vec![errors::invalid_variable_name(name)];
    }
    if !variables::is_dict_assign(name, true) {
        return Vec::new();
    }
    statement
        .values()
        .into_iter()
        .filter(|item| variables::split_from_equals(item).1.is_none() && !variables::is_dict_variable(item))
        .map(errors::invalid_dict_item)
        .collect()
}

/// Check a user keyword argument specification.
///
/// ## Notes
/// - Arguments with invalid syntax are reported and otherwise ignored.
/// - Messages about single arguments come first, in argument order. The ordering rules follow, each once and always
///   in the same order: non-default after default, multiple varargs, kwargs not last.
pub fn validate_arguments(args: &[&str]) -> Vec<String> {
    let mut found: Vec<String> = Vec::new();
    let mut names = HashSet::new();
    let mut defaults_seen = false;
    let mut varargs_seen = false;
    let mut kwargs_seen = false;
    let mut rules = OrderingRules::default();
    for &arg in args {
        rules.kwargs_not_last |= kwargs_seen;
        if arg == "@{}" {
            rules.multiple_varargs |= varargs_seen;
            varargs_seen = true;
            continue;
        }
        let (name, default) = variables::split_from_equals(arg);
        if !variables::is_assign(name, false) {
            note(&mut found, errors::invalid_argument_syntax(arg));
            continue;
        }
        if default.is_some() && !name.starts_with('$') {
            note(&mut found, errors::default_on_collection_argument(arg));
            continue;
        }
        if !names.insert(name) {
            note(&mut found, errors::duplicate_argument(name));
        }
        match name.chars().next() {
            Some('@') => {
                rules.multiple_varargs |= varargs_seen;
                varargs_seen = true;
            }
            Some('&') => kwargs_seen = true,
            _ if default.is_some() => defaults_seen = true,
            _ => rules.non_default_after_default |= defaults_seen && !varargs_seen,
        }
    }
    found.extend(rules.messages());
    found
}

fn note(found: &mut Vec<String>, error: String) {
    if !found.contains(&error) {
        found.push(error);
    }
}

/// Ordering rules broken somewhere in an argument specification.
#[derive(Debug, Default)]
struct OrderingRules {
    non_default_after_default: bool,
    multiple_varargs: bool,
    kwargs_not_last: bool,
}

impl OrderingRules {
    fn messages(&self) -> impl Iterator<Item = String> {
        [
            (self.non_default_after_default, errors::NON_DEFAULT_AFTER_DEFAULT),
            (self.multiple_varargs, errors::MULTIPLE_VARARGS),
            (self.kwargs_not_last, errors::KWARGS_NOT_LAST),
        ]
        .into_iter()
        .filter(|(broken, _)| *broken)
        .map(|(_, message)| message.to_string())
    }
}
