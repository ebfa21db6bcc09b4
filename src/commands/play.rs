//! Play command handler

use std::time::Duration;

use anyhow::Result;

use readalong::cli::PlayArgs;
use readalong::player::{play_transcript, resolve_duration, PlayerSettings};
use readalong::theme::current_theme;

use super::{load_config, load_transcript};

/// Open the terminal player for a transcript.
#[cfg(not(tarpaulin_include))]
pub fn handle(args: PlayArgs) -> Result<()> {
    let config = load_config()?;
    let options = args.sync.apply(config.sync);
    let transcript = load_transcript(&args.file, &options.time_attribute)?;
    if transcript.is_empty() {
        tracing::warn!(path = %args.file.display(), "transcript has no segments");
    }

    let settings = PlayerSettings {
        duration: resolve_duration(args.duration, &transcript),
        scheduler: args.scheduler.unwrap_or(config.scheduler.kind),
        interval: Duration::from_millis(args.interval_ms.unwrap_or(config.scheduler.interval_ms)),
    };

    let final_state = play_transcript(transcript, options, settings)?;

    if let Some(state) = final_state {
        let theme = current_theme();
        println!(
            "{}",
            theme.secondary_text(&format!("Left off at {}s ({:?})", state.current, state.play_state))
        );
    }
    Ok(())
}
