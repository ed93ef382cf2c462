//! Fatal errors of a deck assembly run.

use crate::ooxml::OoxmlError;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that abort a run before or while the output deck is written.
///
/// Problems with a single slide are never fatal; they are reported as a
/// [`SkipReason`](crate::assembler::SkipReason) instead.
#[derive(Error, Debug)]
pub enum DeckError {
    /// The request was empty or only whitespace
    #[error("No JSON input provided")]
    EmptyInput,

    /// The request is not valid JSON
    #[error("invalid JSON input: {0}")]
    Json(#[from] serde_json::Error),

    /// The request has no `slides` field
    #[error("JSON must contain 'slides' array")]
    MissingSlides,

    /// The `slides` field is not an array
    #[error("'slides' must be an array, got {0}")]
    SlidesNotArray(&'static str),

    /// The output file or its directory could not be written
    #[error("failed to write {}: {source}", .path.display())]
    Output {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The deck could not be serialized
    #[error("failed to build presentation: {0}")]
    Package(#[from] OoxmlError),
}

/// Result type for deck assembly.
pub type Result<T> = std::result::Result<T, DeckError>;
