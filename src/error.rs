use std::path::PathBuf;

use thiserror::Error;

/// Convenience result type for the demonstration pipeline.
pub type DemoResult<T> = Result<T, DemoError>;

/// Error type returned while loading a roster or configuring the demonstration pipeline.
///
/// The sequence operations in [`crate::processing`] never produce this type; their only failure
/// source is the caller's callback, whose error is returned untouched.
#[derive(Debug, Error)]
pub enum DemoError {
    /// Underlying I/O error (e.g. file not found, permission denied).
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV roster could not be read or a row did not match the record shape.
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON roster could not be parsed.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    /// The roster file extension is not one of the supported formats.
    #[error("unsupported roster format: {}", path.display())]
    UnsupportedFormat { path: PathBuf },

    /// [`crate::demo::DemoOptions`] failed validation.
    #[error("invalid options: {message}")]
    InvalidOptions { message: String },
}
