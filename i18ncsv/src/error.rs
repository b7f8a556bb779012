//! All error types for the i18ncsv crate.
//!
//! These are returned from all fallible operations (reading, parsing, conversion, writing).

use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("CSV parse error: {0}")]
    CsvParse(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{}: {source}", path.display())]
    File {
        path: PathBuf,
        #[source]
        source: Box<Error>,
    },

    #[error("CSV has no header row")]
    MissingHeader,

    #[error("invalid translation tree: {0}")]
    InvalidTree(String),

    #[error("unsupported language `{0}`")]
    InvalidLanguage(String),

    #[error("no valid target language")]
    EmptyLanguageSet,

    #[error("key `{key}` has {depth} segments, at most 3 fit in Category/Section/Item")]
    KeyTooDeep { key: String, depth: usize },

    #[error("key `{0}` has an empty segment")]
    EmptySegment(String),

    #[error("structural conflict at `{path}`: {reason}")]
    StructuralConflict { path: String, reason: String },
}

impl Error {
    /// Attaches the offending file path to an error.
    pub fn in_file(path: impl Into<PathBuf>, source: Error) -> Self {
        Error::File {
            path: path.into(),
            source: Box::new(source),
        }
    }

    pub fn invalid_language(code: impl Into<String>) -> Self {
        Error::InvalidLanguage(code.into())
    }

    pub(crate) fn conflict(path: impl Into<String>, reason: impl Into<String>) -> Self {
        Error::StructuralConflict {
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Returns the innermost error, looking through [`Error::File`] wrappers.
    pub fn root(&self) -> &Error {
        match self {
            Error::File { source, .. } => source.root(),
            other => other,
        }
    }
}
