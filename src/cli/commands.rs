//! CLI command implementations
//!
//! All command functions return `CliResult<ExitCode>` instead of calling
//! `process::exit`. Error handling and exits happen in the top-level `run()`.

use std::path::Path;

use miette::NamedSource;
use robotparse_core::FileKind;
use robotparse_syntax::ast::File;
use robotparse_syntax::diagnostics::{self, ModelDiagnostic};
use robotparse_syntax::lexer::{Token, TokenKind};
use robotparse_syntax::writer;

use super::{CliResult, ExitCode};
use crate::model;

// ============================================================================
// check
// ============================================================================

/// Parse every file and report the errors found in them.
///
/// Errors are rendered with miette on stderr, or printed as one JSON array on stdout with `json`.
/// Returns failure if any file has errors.
pub fn check_files(paths: &[impl AsRef<Path>], kind: FileKind, json: bool) -> CliResult<ExitCode> {
    let mut reports = Vec::new();
    let mut error_count = 0;
    for path in paths {
        let path = path.as_ref();
        let file = load_model(path, kind)?;
        // Models read without `data_only` write back to the text they were read from, BOM aside.
        let text = writer::to_text(&file);
        let found = diagnostics::collect_diagnostics(&file, &text);
        tracing::debug!(path = %path.display(), errors = found.len(), "checked");
        error_count += found.len();
        reports.push((path, text, found));
    }

    if json {
        println!("{}", json_report(&reports));
    } else {
        for (path, text, found) in &reports {
            for diagnostic in found {
                let source = NamedSource::new(path.display().to_string(), text.clone());
                let report = miette::Report::new(diagnostic.clone()).with_source_code(source);
                eprintln!("{report:?}");
            }
        }
        if error_count > 0 {
            eprintln!("{error_count} error(s) in {} file(s)", reports.len());
        }
    }

    Ok(if error_count > 0 {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    })
}

fn json_report(reports: &[(&Path, String, Vec<ModelDiagnostic>)]) -> String {
    let entries: Vec<serde_json::Value> = reports
        .iter()
        .flat_map(|(path, _, found)| {
            found.iter().map(move |diagnostic| {
                serde_json::json!({
                    "path": path.display().to_string(),
                    "line": diagnostic.line,
                    "column": diagnostic.column,
                    "severity": diagnostic.severity.to_string(),
                    "message": diagnostic.message,
                })
            })
        })
        .collect();
    serde_json::Value::Array(entries).to_string()
}

// ============================================================================
// tokens / tree
// ============================================================================

/// Print the token stream of a file, one token per line.
pub fn print_tokens(path: &Path, kind: FileKind, data_only: bool) -> CliResult<ExitCode> {
    let tokens = match kind {
        FileKind::Suite => model::get_tokens(path, data_only)?,
        FileKind::Resource => model::get_resource_tokens(path, data_only)?,
        FileKind::Init => model::get_init_tokens(path, data_only)?,
    };
    print!("{}", format_tokens(&tokens));
    Ok(ExitCode::SUCCESS)
}

/// Print the model structure of a file.
pub fn print_tree(path: &Path, kind: FileKind) -> CliResult<ExitCode> {
    let file = load_model(path, kind)?;
    print!("{}", writer::dump(&file));
    Ok(ExitCode::SUCCESS)
}

/// Tab separated `line:column`, kind and quoted value rows. `EOS` markers get their own line, errors follow the token.
pub fn format_tokens(tokens: &[Token]) -> String {
    let mut out = String::new();
    for token in tokens {
        if token.kind == TokenKind::Eos {
            out.push_str("EOS\n");
            continue;
        }
        out.push_str(&format!("{}:{}\t{}\t{:?}", token.line, token.column, token.kind, token.value));
        if let Some(error) = &token.error {
            out.push_str(&format!("\t! {error}"));
        }
        out.push('\n');
    }
    out
}

// --- helpers ---

fn load_model(path: &Path, kind: FileKind) -> CliResult<File> {
    let file = match kind {
        FileKind::Suite => model::get_model(path, false, None)?,
        FileKind::Resource => model::get_resource_model(path, false, None)?,
        FileKind::Init => model::get_init_model(path, false, None)?,
    };
    Ok(file)
}
