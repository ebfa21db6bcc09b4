//! Interval pacing shared by the schedulers.

use std::time::{Duration, Instant};

/// Decides when a periodic callback is due.
///
/// Fed with the current instant at whatever resolution the driver has
/// (one call per frame, or one per timer wakeup), it reports due at most
/// once per interval. The reference instant advances in whole intervals so
/// jitter does not accumulate; after a stall the missed intervals are
/// skipped rather than fired back to back.
#[derive(Debug, Clone)]
pub struct Pacer {
    interval: Duration,
    previous: Option<Instant>,
}

impl Pacer {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            previous: None,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Start measuring from `now`.
    pub fn start_at(&mut self, now: Instant) {
        self.previous = Some(now);
    }

    /// Forget the reference; the next `tick` restarts measuring.
    pub fn reset(&mut self) {
        self.previous = None;
    }

    /// Returns true when at least one interval has passed since the last
    /// time the pacer was due.
    pub fn tick(&mut self, now: Instant) -> bool {
        let Some(previous) = self.previous else {
            self.previous = Some(now);
            return false;
        };

        let elapsed = now.saturating_duration_since(previous);
        if elapsed < self.interval {
            return false;
        }

        let interval_nanos = self.interval.as_nanos();
        let remainder = if interval_nanos == 0 {
            Duration::ZERO
        } else {
            Duration::from_nanos((elapsed.as_nanos() % interval_nanos) as u64)
        };
        self.previous = Some(now - remainder);
        true
    }
}
