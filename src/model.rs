//! Model and token entry points over text, paths and readers, and saving models back to disk.
//!
//! ## Examples
//! ```rust
//! use robotparse::model;
//!
//! let file = model::get_model("*** Keywords ***\nGreet\n    Log    Hello\n", false, None).unwrap();
//! assert_eq!(file.section(0).and_then(|section| section.body[0].as_block()).and_then(|k| k.name()), Some("Greet"));
//! assert!(model::save(&file, None).is_err());
//! ```

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use miette::Diagnostic;
use robotparse_core::FileKind;
use robotparse_syntax::ast::File;
use robotparse_syntax::config::ParseConfig;
use robotparse_syntax::lexer::{self, Token};
use robotparse_syntax::{parser, writer};
use thiserror::Error;

use crate::source::Source;

/// Errors from reading sources and saving models.
///
/// Malformed data is never an error here; it is reported on the nodes of the parsed model.
#[derive(Debug, Error, Diagnostic)]
pub enum ModelError {
    #[error("Saving model requires explicit output when original source is not path.")]
    #[diagnostic(code(robotparse::save_target), help("pass an output path to `save`"))]
    SaveTargetRequired,

    #[error("Reading '{}' failed: {source}", path.display())]
    #[diagnostic(code(robotparse::read))]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Writing '{}' failed: {source}", path.display())]
    #[diagnostic(code(robotparse::write))]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Reading input stream failed: {0}")]
    #[diagnostic(code(robotparse::read_stream))]
    ReadStream(#[source] io::Error),
}

// ============================================================================
// Models
// ============================================================================

/// Parse suite file data into a model.
///
/// ## Parameters
/// - `source`: text, a path or a reader. Paths are recorded on the model as its save target.
/// - `data_only`: drop separators, line ends and comments. Such models no longer write back to their source text.
/// - `curdir`: replacement for `${CURDIR}` in data cells.
pub fn get_model<'a>(source: impl Into<Source<'a>>, data_only: bool, curdir: Option<&str>) -> Result<File, ModelError> {
    build_model(source.into(), FileKind::Suite, data_only, curdir)
}

/// Parse resource file data into a model. A test case section is a fatal error in resource files.
pub fn get_resource_model<'a>(
    source: impl Into<Source<'a>>,
    data_only: bool,
    curdir: Option<&str>,
) -> Result<File, ModelError> {
    build_model(source.into(), FileKind::Resource, data_only, curdir)
}

/// Parse suite initialization file data into a model.
pub fn get_init_model<'a>(
    source: impl Into<Source<'a>>,
    data_only: bool,
    curdir: Option<&str>,
) -> Result<File, ModelError> {
    build_model(source.into(), FileKind::Init, data_only, curdir)
}

#[tracing::instrument(skip_all, fields(kind = ?kind, data_only))]
fn build_model(source: Source<'_>, kind: FileKind, data_only: bool, curdir: Option<&str>) -> Result<File, ModelError> {
    let (text, path) = source.load()?;
    Ok(parser::parse(&text, &config(kind, data_only, curdir), path))
}

// ============================================================================
// Tokens
// ============================================================================

/// Lex suite file data into a flat token stream where `EOS` tokens end statements.
pub fn get_tokens<'a>(source: impl Into<Source<'a>>, data_only: bool) -> Result<Vec<Token>, ModelError> {
    build_tokens(source.into(), FileKind::Suite, data_only)
}

/// Lex resource file data into a flat token stream.
pub fn get_resource_tokens<'a>(source: impl Into<Source<'a>>, data_only: bool) -> Result<Vec<Token>, ModelError> {
    build_tokens(source.into(), FileKind::Resource, data_only)
}

/// Lex suite initialization file data into a flat token stream.
pub fn get_init_tokens<'a>(source: impl Into<Source<'a>>, data_only: bool) -> Result<Vec<Token>, ModelError> {
    build_tokens(source.into(), FileKind::Init, data_only)
}

#[tracing::instrument(skip_all, fields(kind = ?kind, data_only))]
fn build_tokens(source: Source<'_>, kind: FileKind, data_only: bool) -> Result<Vec<Token>, ModelError> {
    let (text, _) = source.load()?;
    Ok(lexer::lex(&text, &config(kind, data_only, None)))
}

// ============================================================================
// Saving
// ============================================================================

/// Write the text of `file` to `output`, or to the path it was read from.
///
/// ## Returns
/// - The path written to.
///
/// ## Errors
/// - [`ModelError::SaveTargetRequired`] when no `output` is given and the model was not read from a path.
/// - [`ModelError::Write`] when writing fails.
pub fn save(file: &File, output: Option<&Path>) -> Result<PathBuf, ModelError> {
    let target = output
        .map(Path::to_path_buf)
        .or_else(|| file.source.clone())
        .ok_or(ModelError::SaveTargetRequired)?;
    tracing::debug!(target = %target.display(), "save model");
    fs::write(&target, writer::to_text(file)).map_err(|source| ModelError::Write {
        path: target.clone(),
        source,
    })?;
    Ok(target)
}

// --- helpers ---

fn config(kind: FileKind, data_only: bool, curdir: Option<&str>) -> ParseConfig {
    let config = ParseConfig::new().with_kind(kind).with_data_only(data_only);
    match curdir {
        Some(curdir) => config.with_curdir(curdir),
        None => config,
    }
}
