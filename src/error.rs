//! Error types for iconpack

use thiserror::Error;

/// Result type alias for iconpack operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in iconpack operations
#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("ambiguous root: expected \"{expected}\", found \"{found}\"")]
    AmbiguousRoot { expected: String, found: String },

    #[error("empty label in path expression \"{0}\"")]
    EmptyLabel(String),
}
