//! Unified error types for the Loquat library.
//!
//! Every parsing tier reports through this single error type so the
//! dispatcher can treat any failure as a signal to try the next tier.
use thiserror::Error;

/// Main error type for Loquat operations.
#[derive(Error, Debug)]
pub enum Error {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// No supported text encoding matched the input bytes
    #[error("No supported text encoding matched the input")]
    InputDecoding,

    /// Syntax failure reported by the underlying markup or JSON engine
    #[error("Malformed document: {0}")]
    MalformedMarkup(String),

    /// Structurally successful parse that yielded zero rows or cells
    #[error("Document contains no rows or cells")]
    EmptyDocument,

    /// JSON root is neither an object nor an array
    #[error("Unsupported root value: expected object or array, got {0}")]
    UnsupportedRoot(String),
}

/// Result type for Loquat operations.
pub type Result<T> = std::result::Result<T, Error>;
