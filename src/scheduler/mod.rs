//! Periodic polling for playback sources that do not report time on their
//! own.
//!
//! Two implementations behind one trait, picked at construction:
//! - [`FrameScheduler`]: paced by the host's render loop
//! - [`IntervalScheduler`]: paced by a timer thread

mod frame;
mod interval;
mod pacer;

pub use frame::FrameScheduler;
pub use interval::{IntervalScheduler, RESOLUTION};
pub use pacer::Pacer;

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Default polling interval, four updates per second.
pub const DEFAULT_INTERVAL_MS: u64 = 250;

/// Callback fired once per elapsed interval.
pub type TickCallback = Box<dyn FnMut() + Send>;

/// A periodic callback driver.
pub trait Scheduler {
    /// Begin firing. Starting a running scheduler does nothing.
    fn start(&mut self);

    /// Stop firing and release any resources held while running.
    fn stop(&mut self);

    fn is_running(&self) -> bool;

    /// Tell the scheduler a frame was drawn. Returns true if the callback
    /// fired.
    fn on_frame(&mut self) -> bool;
}

/// Which scheduler implementation to build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum SchedulerKind {
    /// Paced by rendered frames
    #[default]
    Frame,
    /// Paced by a background timer
    Interval,
}

impl std::fmt::Display for SchedulerKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Frame => write!(f, "frame"),
            Self::Interval => write!(f, "interval"),
        }
    }
}

/// Build a stopped scheduler of the given kind.
pub fn build(kind: SchedulerKind, interval: Duration, callback: TickCallback) -> Box<dyn Scheduler> {
    let pacer = Pacer::new(interval);
    match kind {
        SchedulerKind::Frame => Box::new(FrameScheduler::new(pacer, callback)),
        SchedulerKind::Interval => Box::new(IntervalScheduler::new(pacer, callback)),
    }
}
