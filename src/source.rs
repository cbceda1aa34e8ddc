//! Where model text comes from.

use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

use crate::model::ModelError;

/// Input for the model and token functions.
///
/// ## Notes
/// - Only [`Source::Path`] records a source path on the parsed file, so only path-backed models can be saved without
///   an explicit target.
/// - A leading UTF-8 byte order mark is dropped from paths and readers.
pub enum Source<'a> {
    /// Literal data.
    Text(&'a str),
    /// A file to read.
    Path(&'a Path),
    /// An open stream, read to the end.
    Reader(&'a mut dyn Read),
}

impl Source<'_> {
    /// Read the text and, for paths, the path to record.
    pub(crate) fn load(self) -> Result<(String, Option<PathBuf>), ModelError> {
        match self {
            Source::Text(text) => Ok((text.to_string(), None)),
            Source::Path(path) => {
                let text = fs::read_to_string(path).map_err(|source| ModelError::Read {
                    path: path.to_path_buf(),
                    source,
                })?;
                Ok((strip_bom(text), Some(path.to_path_buf())))
            }
            Source::Reader(reader) => {
                let mut text = String::new();
                reader.read_to_string(&mut text).map_err(ModelError::ReadStream)?;
                Ok((strip_bom(text), None))
            }
        }
    }
}

impl<'a> From<&'a str> for Source<'a> {
    fn from(text: &'a str) -> Self {
        Source::Text(text)
    }
}

impl<'a> From<&'a String> for Source<'a> {
    fn from(text: &'a String) -> Self {
        Source::Text(text)
    }
}

impl<'a> From<&'a Path> for Source<'a> {
    fn from(path: &'a Path) -> Self {
        Source::Path(path)
    }
}

impl<'a> From<&'a PathBuf> for Source<'a> {
    fn from(path: &'a PathBuf) -> Self {
        Source::Path(path)
    }
}

fn strip_bom(text: String) -> String {
    match text.strip_prefix('\u{feff}') {
        Some(rest) => rest.to_string(),
        None => text,
    }
}
