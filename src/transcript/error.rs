//! Transcript loading errors.

use std::path::PathBuf;

/// Errors that can occur while loading a transcript.
#[derive(Debug, thiserror::Error)]
pub enum TranscriptError {
    #[error("Transcript not found: {path}")]
    NotFound { path: PathBuf },

    #[error("Failed to read transcript {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid transcript JSON: {0}")]
    Parse(#[from] serde_json::Error),
}
