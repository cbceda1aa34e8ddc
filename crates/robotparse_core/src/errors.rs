//! Shared user-facing error messages attached to model nodes.
//!
//! Validators in the syntax crate build their messages through these helpers so that tooling
//! (linters, editors, tests) can match on one canonical wording.

use crate::lang::registry::FileKind;
use crate::lang::sections;
use crate::strings::seq2str;

pub const FOR_NO_VARIABLES: &str = "FOR loop has no loop variables.";
pub const FOR_NO_SEPARATOR: &str = "FOR loop has no 'IN' or other valid separator.";
pub const FOR_NO_VALUES: &str = "FOR loop has no loop values.";
pub const FOR_EMPTY_BODY: &str = "FOR loop has empty body.";
pub const FOR_NO_END: &str = "FOR loop has no closing END.";
pub const WHILE_EMPTY_BODY: &str = "WHILE loop has empty body.";
pub const WHILE_NO_END: &str = "WHILE loop has no closing END.";
pub const IF_NO_END: &str = "IF has no closing END.";
pub const TRY_NO_END: &str = "TRY has no closing END.";
pub const MULTIPLE_ELSE: &str = "Multiple ELSE branches.";
pub const ELSE_IF_AFTER_ELSE: &str = "ELSE IF after ELSE.";
pub const INLINE_IF_NESTED: &str = "Inline IF cannot be nested.";
pub const INLINE_IF_ASSIGN_ONLY_CALLS: &str = "Inline IF with assignment can only contain keyword calls.";
pub const INLINE_IF_BRANCH_ASSIGN: &str = "Inline IF branches cannot contain assignments.";
pub const EXCEPT_AFTER_ELSE: &str = "EXCEPT not allowed after ELSE.";
pub const EXCEPT_AFTER_FINALLY: &str = "EXCEPT not allowed after FINALLY.";
pub const ELSE_AFTER_FINALLY: &str = "ELSE not allowed after FINALLY.";
pub const EMPTY_EXCEPT_NOT_LAST: &str = "EXCEPT without patterns must be last.";
pub const MULTIPLE_FINALLY: &str = "Only one FINALLY allowed.";
pub const MULTIPLE_TRY_ELSE: &str = "Only one ELSE allowed.";
pub const MULTIPLE_EMPTY_EXCEPT: &str = "Only one EXCEPT without patterns allowed.";
pub const TRY_WITHOUT_HANDLER: &str = "TRY structure must have EXCEPT or FINALLY branch.";
pub const EXCEPT_AS_NEEDS_VARIABLE: &str = "EXCEPT's AS requires variable.";
pub const EXCEPT_AS_ONE_VARIABLE: &str = "EXCEPT's AS accepts only one variable.";
pub const RETURN_OUTSIDE_KEYWORD: &str = "RETURN can only be used inside a user keyword.";
pub const RETURN_IN_FINALLY: &str = "RETURN cannot be used in FINALLY branch.";
pub const NON_DEFAULT_AFTER_DEFAULT: &str = "Non-default argument after default arguments.";
pub const MULTIPLE_VARARGS: &str = "Cannot have multiple varargs.";
pub const KWARGS_NOT_LAST: &str = "Only last argument can be kwargs.";

/// `"<MARKER> must have a condition."`
pub fn missing_condition(marker: &str) -> String {
    format!("{marker} must have a condition.")
}

/// `"<MARKER> cannot have more than one condition."`
pub fn multiple_conditions(marker: &str) -> String {
    format!("{marker} cannot have more than one condition.")
}

/// `"<MARKER> does not accept arguments, got 'a' and 'b'."`
pub fn no_arguments_accepted<S: AsRef<str>>(marker: &str, values: &[S]) -> String {
    format!("{marker} does not accept arguments, got {}.", seq2str(values))
}

/// `"<BRANCH> branch cannot be empty."`
pub fn empty_branch(branch: &str) -> String {
    format!("{branch} branch cannot be empty.")
}

/// `"FOR loop has invalid loop variable '<var>'."`
pub fn invalid_loop_variable(variable: &str) -> String {
    format!("FOR loop has invalid loop variable '{variable}'.")
}

/// `"EXCEPT's AS variable '<var>' is invalid."`
pub fn invalid_except_variable(variable: &str) -> String {
    format!("EXCEPT's AS variable '{variable}' is invalid.")
}

/// `"<BREAK|CONTINUE> can only be used inside a loop."`
pub fn loop_control_outside_loop(marker: &str) -> String {
    format!("{marker} can only be used inside a loop.")
}

/// `"<BREAK|CONTINUE> cannot be used in FINALLY branch."`
pub fn loop_control_in_finally(marker: &str) -> String {
    format!("{marker} cannot be used in FINALLY branch.")
}

/// `"Invalid variable name '<name>'."`
pub fn invalid_variable_name(name: &str) -> String {
    format!("Invalid variable name '{name}'.")
}

/// Dictionary variable item that is neither `name=value` nor a dictionary variable.
pub fn invalid_dict_item(item: &str) -> String {
    format!(
        "Invalid dictionary variable item '{item}'. \
         Items must use 'name=value' syntax or be dictionary variables themselves."
    )
}

/// `"Invalid argument syntax '<arg>'."`
pub fn invalid_argument_syntax(arg: &str) -> String {
    format!("Invalid argument syntax '{arg}'.")
}

/// A default value given to a list or dictionary argument.
pub fn default_on_collection_argument(arg: &str) -> String {
    let kind = if arg.starts_with('@') { "list" } else { "dictionary" };
    format!("Only normal arguments accept default values, {kind} arguments like '{arg}' do not.")
}

/// `"Multiple arguments with name '<name>'."`
pub fn duplicate_argument(name: &str) -> String {
    format!("Multiple arguments with name '{name}'.")
}

/// `"Non-existing setting '<name>'."`
pub fn non_existing_setting(name: &str) -> String {
    format!("Non-existing setting '{name}'.")
}

/// `"Setting '<name>' is not allowed in resource file."` and the init-file variant.
pub fn setting_not_allowed(name: &str, kind: FileKind) -> String {
    format!("Setting '{name}' is not allowed in {}.", kind.description())
}

/// `"Setting '<name>' is allowed only once. Only the first value is used."`
pub fn duplicate_setting(name: &str) -> String {
    format!("Setting '{name}' is allowed only once. Only the first value is used.")
}

/// `"Setting '<name>' accepts only one value, got <count>."`
pub fn setting_single_value(name: &str, count: usize) -> String {
    format!("Setting '{name}' accepts only one value, got {count}.")
}

/// Unrecognized section header, listing the sections the grammar accepts.
pub fn unrecognized_section(header: &str, kind: FileKind) -> String {
    format!(
        "Unrecognized section header '{header}'. Valid sections: {}.",
        seq2str(&sections::valid_names(kind))
    )
}

/// `"Resource file with '<name>' section is invalid."`
pub fn test_section_in_resource(name: &str) -> String {
    format!("Resource file with '{name}' section is invalid.")
}

/// `"'<name>' section is not allowed in suite initialization file."`
pub fn test_section_in_init(name: &str) -> String {
    format!("'{name}' section is not allowed in suite initialization file.")
}
