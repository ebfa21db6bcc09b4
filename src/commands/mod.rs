//! Subcommand handlers

pub mod completions;
pub mod config;
pub mod play;
pub mod segments;
pub mod simulate;

use std::path::Path;

use anyhow::{Context, Result};

use readalong::transcript::Transcript;
use readalong::Config;

/// Load the config file, with context for the error message.
pub fn load_config() -> Result<Config> {
    Config::load().context("Failed to load configuration")
}

/// Load a transcript, reading start times from `time_attribute`.
pub fn load_transcript(path: &Path, time_attribute: &str) -> Result<Transcript> {
    let transcript = Transcript::load(path, time_attribute)
        .with_context(|| format!("Failed to load transcript {}", path.display()))?;
    tracing::debug!(
        path = %path.display(),
        segments = transcript.len(),
        duration = ?transcript.duration(),
        "transcript loaded"
    );
    Ok(transcript)
}
