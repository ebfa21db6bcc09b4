//! Terminal read-along player
//!
//! Plays a transcript against a [`ClockSource`] and shows the synchronizer's
//! highlight live. Playback time is polled by the configured
//! [`Scheduler`](crate::scheduler::Scheduler); each tick advances the clock
//! and the resulting media events are pumped through the synchronizer.
//!
//! - `state`: selection, help overlay and status message
//! - `input`: key bindings and their effect on the synchronizer
//! - `render/`: transcript, progress bar, status line and help overlay

pub mod input;
pub mod render;
pub mod state;

pub use state::{InputResult, PlayerState};

use std::sync::mpsc::{self, Receiver};
use std::time::Duration;

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyEventKind};
use ratatui::DefaultTerminal;

use crate::scheduler::{self, Scheduler, SchedulerKind};
use crate::source::ClockSource;
use crate::sync::{PlaybackState, SyncOptions, Synchronizer};
use crate::theme::current_theme;
use crate::transcript::Transcript;

/// How long to wait for input between frames.
const FRAME_TIME: Duration = Duration::from_millis(16);

/// Extra time after the last segment start when the duration is unknown.
pub const TRAILING_SECS: f64 = 2.0;

/// Player settings not covered by [`SyncOptions`].
#[derive(Debug, Clone)]
pub struct PlayerSettings {
    /// Length of the simulated media in seconds
    pub duration: f64,
    pub scheduler: SchedulerKind,
    pub interval: Duration,
}

/// Media duration for a transcript: the given value, else the file's, else
/// the last segment start plus [`TRAILING_SECS`].
pub fn resolve_duration(explicit: Option<f64>, transcript: &Transcript) -> f64 {
    explicit
        .or_else(|| transcript.duration())
        .or_else(|| transcript.last_start().map(|s| s + TRAILING_SECS))
        .unwrap_or(0.0)
}

type PlayerSync = Synchronizer<ClockSource, Transcript>;

/// Run the player until the user quits. Returns the final playback state.
#[cfg(not(tarpaulin_include))]
pub fn play_transcript(
    transcript: Transcript,
    options: SyncOptions,
    settings: PlayerSettings,
) -> Result<Option<PlaybackState>> {
    let source = ClockSource::new(Some(settings.duration));
    let mut sync = Synchronizer::new(source, transcript, options);

    let (tick_tx, tick_rx) = mpsc::channel();
    let mut scheduler = scheduler::build(
        settings.scheduler,
        settings.interval,
        Box::new(move || {
            // Receiver gone means the player is shutting down
            let _ = tick_tx.send(());
        }),
    );
    scheduler.start();
    tracing::debug!(kind = %settings.scheduler, interval = ?settings.interval, "player started");

    let mut terminal = ratatui::try_init().context("Failed to initialize terminal")?;
    let result = run_loop(
        &mut terminal,
        &mut sync,
        scheduler.as_mut(),
        &tick_rx,
        settings.duration,
    );
    ratatui::restore();
    scheduler.stop();

    result.map(|()| sync.state().copied())
}

#[cfg(not(tarpaulin_include))]
fn run_loop(
    terminal: &mut DefaultTerminal,
    sync: &mut PlayerSync,
    scheduler: &mut dyn Scheduler,
    ticks: &Receiver<()>,
    duration: f64,
) -> Result<()> {
    let theme = current_theme();
    let mut player = PlayerState::new();

    loop {
        terminal.draw(|frame| render::draw(frame, sync, &player, duration, &theme))?;
        scheduler.on_frame();

        if event::poll(FRAME_TIME)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press
                    && input::handle_key(key, sync, &mut player) == InputResult::Quit
                {
                    break;
                }
            }
        }

        while ticks.try_recv().is_ok() {
            if let Some(source) = sync.source_mut() {
                source.advance();
            }
        }
        sync.pump();
    }
    Ok(())
}
