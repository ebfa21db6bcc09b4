//! Playback sources the synchronizer drives and observes.
//!
//! A source is the media element side of the pair: it owns the actual
//! position, rate and play/pause state, and queues [`MediaEvent`]s that the
//! synchronizer drains with `pump`.
//!
//! - [`ClockSource`]: plays a silent timeline against the wall clock
//! - [`ScriptedSource`]: reports positions it is told to, for replaying a
//!   position sequence and for tests

mod clock;
mod scripted;

pub use clock::ClockSource;
pub use scripted::{ScriptedSource, SourceCommand};

use serde::Serialize;

/// Notification queued by a playback source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MediaEvent {
    /// Position changed (periodically while playing, or after a seek)
    TimeUpdate,
    /// Playback started
    Play,
    /// Playback paused
    Pause,
    /// Playback reached the end of the media
    Ended,
    /// Media duration became known or changed
    DurationChange,
}

/// The media side of a synchronizer.
pub trait PlaybackSource {
    /// Current position in seconds.
    fn current_time(&self) -> f64;

    /// Move the position. Sources queue a `TimeUpdate` in response.
    fn set_current_time(&mut self, secs: f64);

    fn playback_rate(&self) -> f64;

    fn set_playback_rate(&mut self, rate: f64);

    /// Start playback.
    fn play(&mut self);

    /// Pause playback.
    fn pause(&mut self);

    fn is_paused(&self) -> bool;

    /// Media duration in seconds, if known yet.
    fn duration(&self) -> Option<f64>;

    /// Take all queued notifications, oldest first.
    fn drain_events(&mut self) -> Vec<MediaEvent>;
}
