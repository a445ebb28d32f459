//! Error types for the entire application.
//!
//! We use `thiserror` for library-style errors with custom types,
//! and `anyhow` for application-level error propagation in main.rs and commands.

use thiserror::Error;

/// Errors that can occur while decoding simulation logs
///
/// Any of these aborts the whole run; corrupt records are never skipped,
/// so derived statistics always describe the complete log or nothing.
#[derive(Error, Debug)]
pub enum DataFormatError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("{path}: top-level value is not a JSON array")]
    NotAnArray { path: String },

    #[error("{path}: record {index} failed to decode: {source}")]
    Record {
        path: String,
        index: usize,
        #[source]
        source: serde_json::Error,
    },

    #[error("{path}: document ended before the array was closed")]
    UnexpectedEof { path: String },

    #[error("{path}: expected ',' or ']' after record {index}, found {found:?}")]
    BadDelimiter {
        path: String,
        index: usize,
        found: char,
    },

    #[error("{path}: JSON deserialization failed: {source}")]
    Json {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("frame {frame}: animal {id} ({species}): static record has no trait values")]
    MissingTraits {
        frame: usize,
        id: u64,
        species: String,
    },
}

/// Errors that can occur during file output
#[derive(Error, Debug)]
pub enum OutputError {
    #[error("Failed to write file: {0}")]
    WriteFailed(#[from] std::io::Error),

    #[error("Failed to serialize JSON: {0}")]
    SerializationFailed(#[from] serde_json::Error),

    #[error("Invalid output path: {0}")]
    InvalidPath(String),
}
