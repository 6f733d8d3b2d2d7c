//! Error types for the ClauseRAG domain.
//!
//! Uses `thiserror` for ergonomic error definitions.
//! Corpus validation has its own error type so loaders can report it
//! without dragging in the rest of the taxonomy.

use std::path::PathBuf;
use thiserror::Error;

/// The top-level error type for all ClauseRAG operations.
#[derive(Debug, Error)]
pub enum Error {
    // --- Corpus validation ---
    #[error("Corpus validation failed: {0}")]
    Validation(#[from] ValidationError),

    // --- Caller input ---
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    // --- Corpus I/O ---
    #[error("Failed to read corpus at {path}: {reason}")]
    Io { path: PathBuf, reason: String },

    // --- Serialization ---
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type alias using our Error.
pub type Result<T> = std::result::Result<T, Error>;

/// A corpus record failed validation at load time.
///
/// `index` is the zero-based position of the offending record in the
/// source sequence.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("record {index} is missing required field `{field}`")]
    MissingField { index: usize, field: &'static str },

    #[error("duplicate passage id `{id}` (first seen at record {first}, again at record {index})")]
    DuplicateId {
        id: String,
        first: usize,
        index: usize,
    },

    #[error("record {index} is malformed: {reason}")]
    Malformed { index: usize, reason: String },
}
