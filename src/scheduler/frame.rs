//! Host-driven scheduler.

use std::time::Instant;

use super::{Pacer, Scheduler, TickCallback};

/// Fires the callback from the host's render loop.
///
/// The host calls [`Scheduler::on_frame`] once per drawn frame; the pacer
/// turns that into at most one callback per interval.
pub struct FrameScheduler {
    pacer: Pacer,
    callback: TickCallback,
    running: bool,
}

impl FrameScheduler {
    pub fn new(pacer: Pacer, callback: TickCallback) -> Self {
        Self {
            pacer,
            callback,
            running: false,
        }
    }

    /// Frame notification at an explicit instant.
    pub fn on_frame_at(&mut self, now: Instant) -> bool {
        if !self.running || !self.pacer.tick(now) {
            return false;
        }
        (self.callback)();
        true
    }

    pub(crate) fn start_at(&mut self, now: Instant) {
        if self.running {
            return;
        }
        self.running = true;
        self.pacer.start_at(now);
    }
}

impl Scheduler for FrameScheduler {
    fn start(&mut self) {
        self.start_at(Instant::now());
    }

    fn stop(&mut self) {
        self.running = false;
        self.pacer.reset();
    }

    fn is_running(&self) -> bool {
        self.running
    }

    fn on_frame(&mut self) -> bool {
        self.on_frame_at(Instant::now())
    }
}

impl std::fmt::Debug for FrameScheduler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FrameScheduler")
            .field("pacer", &self.pacer)
            .field("running", &self.running)
            .finish()
    }
}
