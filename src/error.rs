// src/error.rs
use folio_source::SourceError;
use folio_traits::PrintError;
use thiserror::Error;

/// A comprehensive error type for render, load and print operations.
#[derive(Error, Debug)]
pub enum RenderError {
    #[error("Problem {} has no \"problem\" body", .index + 1)]
    MissingProblemBody { index: usize },

    #[error("Loading tasks failed: {0}")]
    Source(#[from] SourceError),

    #[error("Printing failed: {0}")]
    Print(#[from] PrintError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

// Lets callers `?` raw JSON errors, as the CLI does.
impl From<serde_json::Error> for RenderError {
    fn from(e: serde_json::Error) -> Self {
        RenderError::Source(SourceError::Json(e))
    }
}
