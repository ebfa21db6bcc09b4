//! The playhead synchronizer.
//!
//! Owns the segment index and the playback state for one transcript/source
//! pair. Media events drained from the source go through the observer;
//! transport commands go through `transport` and are forwarded to the
//! source. Marker changes are written to the transcript view and every
//! highlight or play state change is delivered to subscribers.

use super::events::{Listeners, SubscriptionId, SyncEvent};
use super::index::SegmentIndex;
use super::input::{InputError, NumericInput};
use super::observer::{observe, HighlightChange};
use super::options::SyncOptions;
use super::quantize::QuantizedTime;
use super::state::{PlayState, PlaybackState};
use super::transport;
use crate::source::{MediaEvent, PlaybackSource};
use crate::transcript::{SegmentId, TranscriptView};

/// Upper bound on drain rounds in one `pump`, in case a source keeps
/// queueing events in response to commands.
const MAX_PUMP_ROUNDS: usize = 64;

/// Keeps a transcript view highlighted in step with a playback source.
///
/// A synchronizer attached without a source or without a transcript is
/// disabled: every operation is a no-op and no notification is ever sent.
pub struct Synchronizer<S, V> {
    attached: Option<Attached<S, V>>,
    listeners: Listeners,
}

struct Attached<S, V> {
    source: S,
    view: V,
    index: SegmentIndex,
    state: PlaybackState,
    options: SyncOptions,
}

impl<S: PlaybackSource, V: TranscriptView> Attached<S, V> {
    fn apply_highlight(&mut self, change: HighlightChange) {
        let marker = &self.options.highlight_marker;
        self.view.clear_marker(marker);
        self.view.set_marker(change.current, marker, true);

        if self.options.touch_to_seek {
            if let Some(previous) = change.previous {
                self.view.set_pressed(previous, false);
            }
            self.view.set_pressed(change.current, true);
        }
    }

    fn clear_highlight(&mut self) {
        self.view.clear_marker(&self.options.highlight_marker);
        if self.options.touch_to_seek {
            self.view.clear_pressed();
        }
    }
}

impl<S: PlaybackSource, V: TranscriptView> Synchronizer<S, V> {
    /// Attach to a source and transcript view.
    ///
    /// If either is missing the synchronizer is disabled rather than
    /// failing. Otherwise the segment index is built from the view's
    /// current segments and the view's markers are reset.
    pub fn attach(source: Option<S>, view: Option<V>, options: SyncOptions) -> Self {
        let (source, mut view) = match (source, view) {
            (Some(source), Some(view)) => (source, view),
            (source, view) => {
                tracing::info!(
                    has_source = source.is_some(),
                    has_transcript = view.is_some(),
                    "synchronizer disabled: missing playback source or transcript"
                );
                return Self::disabled();
            }
        };

        let options = options.normalized();
        let index = SegmentIndex::from_segments(view.segments());
        let mut state = PlaybackState::new(&options);
        if let Some(duration) = source.duration() {
            state.resolve_clip_end(duration);
        }

        view.clear_marker(&options.highlight_marker);
        if options.touch_to_seek {
            view.clear_pressed();
        }

        tracing::debug!(
            segments = view.segments().len(),
            slots = index.len(),
            shadowed = index.shadowed().len(),
            "synchronizer attached"
        );

        Self {
            attached: Some(Attached {
                source,
                view,
                index,
                state,
                options,
            }),
            listeners: Listeners::default(),
        }
    }

    /// Attach to a source and transcript view that are both present.
    pub fn new(source: S, view: V, options: SyncOptions) -> Self {
        Self::attach(Some(source), Some(view), options)
    }

    /// A synchronizer with nothing attached.
    pub fn disabled() -> Self {
        Self {
            attached: None,
            listeners: Listeners::default(),
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.attached.is_some()
    }

    pub fn state(&self) -> Option<&PlaybackState> {
        self.attached.as_ref().map(|a| &a.state)
    }

    pub fn play_state(&self) -> PlayState {
        self.state().map(|s| s.play_state).unwrap_or_default()
    }

    pub fn highlighted(&self) -> Option<SegmentId> {
        self.state().and_then(|s| s.highlighted)
    }

    pub fn index(&self) -> Option<&SegmentIndex> {
        self.attached.as_ref().map(|a| &a.index)
    }

    pub fn options(&self) -> Option<&SyncOptions> {
        self.attached.as_ref().map(|a| &a.options)
    }

    pub fn source(&self) -> Option<&S> {
        self.attached.as_ref().map(|a| &a.source)
    }

    /// Mutable access to the source, e.g. to advance a clock source.
    ///
    /// Commands issued through it bypass the synchronizer's state.
    pub fn source_mut(&mut self) -> Option<&mut S> {
        self.attached.as_mut().map(|a| &mut a.source)
    }

    pub fn view(&self) -> Option<&V> {
        self.attached.as_ref().map(|a| &a.view)
    }

    /// Register a notification callback. Callbacks run in registration
    /// order.
    pub fn subscribe(&mut self, listener: impl FnMut(&SyncEvent) + 'static) -> SubscriptionId {
        self.listeners.subscribe(Box::new(listener))
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.listeners.unsubscribe(id)
    }

    /// Drain and handle the source's queued events in order, including
    /// events queued while handling them. Returns the number handled.
    pub fn pump(&mut self) -> usize {
        let mut handled = 0;
        for _ in 0..MAX_PUMP_ROUNDS {
            let events = match self.attached.as_mut() {
                Some(attached) => attached.source.drain_events(),
                None => return handled,
            };
            if events.is_empty() {
                return handled;
            }
            for event in events {
                self.handle_media_event(event);
                handled += 1;
            }
        }
        tracing::warn!(
            rounds = MAX_PUMP_ROUNDS,
            "playback source kept queueing events, deferring the rest"
        );
        handled
    }

    /// Handle one notification from the playback source.
    pub fn handle_media_event(&mut self, event: MediaEvent) {
        match event {
            MediaEvent::TimeUpdate => self.on_time_update(),
            // Play and pause notifications may be stale by the time they are
            // drained, so they only count if the source still agrees.
            MediaEvent::Play => {
                if self.source().is_some_and(|s| !s.is_paused()) {
                    self.transition(PlayState::Playing);
                }
            }
            MediaEvent::Pause => {
                let paused = self.source().is_some_and(|s| s.is_paused());
                if paused && self.play_state() == PlayState::Playing {
                    self.transition(PlayState::Paused);
                }
            }
            MediaEvent::Ended => self.stop(),
            MediaEvent::DurationChange => self.on_duration_change(),
        }
    }

    /// Read the source position and update the highlight.
    pub fn on_time_update(&mut self) {
        let Some(attached) = self.attached.as_mut() else {
            return;
        };
        let position = attached.source.current_time();
        let observation = observe(&mut attached.state, &attached.index, position);

        if let Some(change) = observation.highlight {
            attached.apply_highlight(change);
            let event = SyncEvent::HighlightChanged(attached.state);
            self.listeners.emit(&event);
        }

        if let Some(reason) = observation.stop {
            tracing::debug!(?reason, position, "stopping playback");
            self.stop();
        }
    }

    fn on_duration_change(&mut self) {
        let Some(attached) = self.attached.as_mut() else {
            return;
        };
        if let Some(duration) = attached.source.duration() {
            if attached.state.resolve_clip_end(duration) {
                tracing::debug!(clip_end = ?attached.state.clip_end, "clip end resolved");
            }
        }
    }

    fn transition(&mut self, next: PlayState) {
        let Some(attached) = self.attached.as_mut() else {
            return;
        };
        if transport::set_play_state(&mut attached.state, next) {
            let event = SyncEvent::PlayStateChanged(attached.state);
            self.listeners.emit(&event);
        }
    }

    /// Start playback from the current position at the current rate.
    pub fn play(&mut self) {
        let Some(attached) = self.attached.as_mut() else {
            return;
        };
        attached
            .source
            .set_current_time(attached.state.current.as_secs());
        attached
            .source
            .set_playback_rate(attached.state.playback_rate);
        attached.source.play();
        self.transition(PlayState::Playing);
    }

    pub fn pause(&mut self) {
        let Some(attached) = self.attached.as_mut() else {
            return;
        };
        attached.source.pause();
        if attached.state.play_state == PlayState::Playing {
            self.transition(PlayState::Paused);
        }
    }

    /// Pause, clear all highlighting and rewind to clip begin.
    ///
    /// Calling it again leaves the state unchanged.
    pub fn stop(&mut self) {
        let Some(attached) = self.attached.as_mut() else {
            return;
        };
        attached.source.pause();
        attached.clear_highlight();
        attached.source.set_current_time(attached.state.clip_begin);
        if transport::stop(&mut attached.state) {
            let event = SyncEvent::PlayStateChanged(attached.state);
            self.listeners.emit(&event);
        }
    }

    /// Move the playhead to the quantized `time` and play from there.
    ///
    /// In stop-after-current mode playback will halt at the following
    /// segment's start, or at clip end after the last segment.
    pub fn seek_to_segment(&mut self, time: f64) {
        let Some(attached) = self.attached.as_mut() else {
            return;
        };
        let Some(target) = QuantizedTime::from_secs(time) else {
            return;
        };
        transport::seek(&mut attached.state, &attached.index, target);
        tracing::debug!(%target, stop_at = ?attached.state.stop_at, "seek");
        self.play();
    }

    /// Seek from loosely typed input. Non-numeric input is ignored.
    pub fn request_seek<T: NumericInput + ?Sized>(&mut self, raw: &T) {
        match raw.to_number() {
            Ok(time) => self.seek_to_segment(time),
            Err(err) => tracing::debug!(%err, "ignoring seek request"),
        }
    }

    /// Seek to an activated (clicked, touched, keyboard-activated) segment.
    ///
    /// Does nothing when touch-to-seek is disabled or the segment has no
    /// start time.
    pub fn activate_segment(&mut self, id: SegmentId) {
        let Some(attached) = self.attached.as_ref() else {
            return;
        };
        if !attached.options.touch_to_seek {
            tracing::debug!(segment = %id, "touch-to-seek disabled, ignoring activation");
            return;
        }
        let Some(start) = attached.view.segment(id).and_then(|s| s.start) else {
            return;
        };
        self.seek_to_segment(start);
    }

    /// Change the playback rate, logging and ignoring non-numeric input.
    ///
    /// Any finite number is passed to the source as is, zero and negative
    /// rates included.
    pub fn set_playback_rate<T: NumericInput + ?Sized>(&mut self, raw: &T) {
        if let Err(err) = self.try_set_playback_rate(raw) {
            tracing::warn!(%err, "playback rate unchanged");
        }
    }

    /// Change the playback rate, returning invalid input to the caller.
    pub fn try_set_playback_rate<T: NumericInput + ?Sized>(
        &mut self,
        raw: &T,
    ) -> Result<(), InputError> {
        let rate = raw.to_number()?;
        if let Some(attached) = self.attached.as_mut() {
            attached.state.playback_rate = rate;
            attached.source.set_playback_rate(rate);
        }
        Ok(())
    }

    /// Turn stop-after-current mode on or off.
    pub fn set_stop_after_current(&mut self, enabled: bool) {
        if let Some(attached) = self.attached.as_mut() {
            transport::set_stop_after_current(&mut attached.state, enabled);
        }
    }
}

impl<S, V> std::fmt::Debug for Synchronizer<S, V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Synchronizer")
            .field("enabled", &self.attached.is_some())
            .field("state", &self.attached.as_ref().map(|a| a.state))
            .field("listeners", &self.listeners)
            .finish()
    }
}
