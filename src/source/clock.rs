//! Wall-clock playback source.
//!
//! Plays a silent timeline of known (or unbounded) length. The position
//! only moves when the host calls `advance`, which is how a scheduler's
//! periodic tick becomes a `TimeUpdate`.

use std::time::Instant;

use super::{MediaEvent, PlaybackSource};

#[derive(Debug, Clone)]
pub struct ClockSource {
    position: f64,
    rate: f64,
    duration: Option<f64>,
    /// Instant `position` was last sampled at; `Some` while playing
    anchor: Option<Instant>,
    events: Vec<MediaEvent>,
}

impl ClockSource {
    /// Create a paused source at position zero.
    pub fn new(duration: Option<f64>) -> Self {
        let duration = duration.filter(|d| d.is_finite() && *d >= 0.0);
        let mut events = Vec::new();
        if duration.is_some() {
            events.push(MediaEvent::DurationChange);
        }
        Self {
            position: 0.0,
            rate: 1.0,
            duration,
            anchor: None,
            events,
        }
    }

    /// Advance the position to now and queue a `TimeUpdate`.
    pub fn advance(&mut self) {
        self.advance_to(Instant::now());
    }

    /// Advance the position to `now` and queue a `TimeUpdate`.
    ///
    /// Reaching the duration pauses the source and queues `Pause` and
    /// `Ended`. Does nothing while paused.
    pub fn advance_to(&mut self, now: Instant) {
        if self.anchor.is_none() {
            return;
        }
        self.sample(now);
        self.events.push(MediaEvent::TimeUpdate);

        if let Some(duration) = self.duration {
            if self.position >= duration {
                self.position = duration;
                self.anchor = None;
                self.events.push(MediaEvent::Pause);
                self.events.push(MediaEvent::Ended);
            }
        }
    }

    pub fn play_at(&mut self, now: Instant) {
        if self.anchor.is_some() {
            return;
        }
        if self.duration.is_some_and(|d| self.position >= d) {
            // Restart from the top once ended
            self.position = 0.0;
        }
        self.anchor = Some(now);
        self.events.push(MediaEvent::Play);
    }

    pub fn pause_at(&mut self, now: Instant) {
        if self.anchor.is_none() {
            return;
        }
        self.sample(now);
        self.anchor = None;
        self.events.push(MediaEvent::Pause);
    }

    pub fn set_playback_rate_at(&mut self, rate: f64, now: Instant) {
        if self.anchor.is_some() {
            // Time elapsed so far was played at the old rate
            self.sample(now);
        }
        self.rate = rate;
    }

    pub fn set_current_time_at(&mut self, secs: f64, now: Instant) {
        let mut secs = secs.max(0.0);
        if let Some(duration) = self.duration {
            secs = secs.min(duration);
        }
        self.position = secs;
        if self.anchor.is_some() {
            self.anchor = Some(now);
        }
        self.events.push(MediaEvent::TimeUpdate);
    }

    /// Fold elapsed time since the anchor into the position.
    fn sample(&mut self, now: Instant) {
        if let Some(anchor) = self.anchor {
            let elapsed = now.saturating_duration_since(anchor).as_secs_f64();
            self.position = (self.position + elapsed * self.rate).max(0.0);
            self.anchor = Some(now);
        }
        if let Some(duration) = self.duration {
            self.position = self.position.min(duration);
        }
    }
}

impl PlaybackSource for ClockSource {
    fn current_time(&self) -> f64 {
        self.position
    }

    fn set_current_time(&mut self, secs: f64) {
        self.set_current_time_at(secs, Instant::now());
    }

    fn playback_rate(&self) -> f64 {
        self.rate
    }

    fn set_playback_rate(&mut self, rate: f64) {
        self.set_playback_rate_at(rate, Instant::now());
    }

    fn play(&mut self) {
        self.play_at(Instant::now());
    }

    fn pause(&mut self) {
        self.pause_at(Instant::now());
    }

    fn is_paused(&self) -> bool {
        self.anchor.is_none()
    }

    fn duration(&self) -> Option<f64> {
        self.duration
    }

    fn drain_events(&mut self) -> Vec<MediaEvent> {
        std::mem::take(&mut self.events)
    }
}
