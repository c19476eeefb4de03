// ============================================================
// Library Error Type
// ============================================================
// Every fallible operation in the library returns PrepError.
// The application and CLI layers wrap these in anyhow with
// extra context, so the variants here stay small and typed.
//
// Unknown words are deliberately absent from this list:
// a token missing from the vocabulary maps to <UNK>.

use std::path::PathBuf;

/// Errors produced while loading corpora, building vocabularies
/// and encoding sequences.
#[derive(Debug, thiserror::Error)]
pub enum PrepError {
    /// The vocabulary file does not exist and there is no corpus to build it from.
    #[error("source corpus '{}' is required when no vocabulary exists", path.display())]
    MissingCorpus { path: PathBuf },

    /// The corpus exists but lacks the `Q`/`A` columns or has an unreadable row.
    #[error("malformed corpus '{}': {message}", path.display())]
    MalformedCorpus { path: PathBuf, message: String },

    /// The vocabulary file has duplicate lines or lacks a reserved marker.
    #[error("malformed vocabulary '{}': {message}", path.display())]
    MalformedVocabulary { path: PathBuf, message: String },

    /// Sequence settings are out of range.
    #[error("invalid config: {0}")]
    InvalidConfig(String),

    /// The external morphological analyzer failed.
    #[error("morphological analyzer: {0}")]
    Analyzer(String),

    /// Reading or writing a file failed.
    #[error("I/O error on '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A settings file is not valid JSON for the expected type.
    #[error("invalid JSON in '{}': {source}", path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Writing an encoded array failed.
    #[error("npy error: {0}")]
    Npy(String),
}

impl PrepError {
    /// Attach a path to an `std::io::Error`.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        PrepError::Io { path: path.into(), source }
    }
}

pub type Result<T> = std::result::Result<T, PrepError>;
