//! Playback state record.
//!
//! One `PlaybackState` is owned by each synchronizer. The observer and
//! transport functions take it by `&mut` and every notification carries a
//! copy of it.

use serde::Serialize;

use super::options::SyncOptions;
use super::quantize::QuantizedTime;
use crate::transcript::SegmentId;

/// Transport state of the synchronizer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PlayState {
    #[default]
    Stopped,
    Playing,
    Paused,
}

/// Central playback state.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PlaybackState {
    /// Last quantized playback position
    pub current: QuantizedTime,
    /// Segment carrying the highlight marker
    pub highlighted: Option<SegmentId>,
    /// Segment highlighted before the current one
    pub previous: Option<SegmentId>,
    pub play_state: PlayState,
    /// Start of the playable window in seconds
    pub clip_begin: f64,
    /// End of the playable window in seconds
    pub clip_end: Option<f64>,
    pub playback_rate: f64,
    pub stop_after_current: bool,
    /// Position at which stop-after-current mode halts playback
    pub stop_at: Option<QuantizedTime>,
}

impl PlaybackState {
    /// Initial state for the given (normalized) options.
    pub fn new(options: &SyncOptions) -> Self {
        Self {
            current: QuantizedTime::from_secs(options.clip_begin).unwrap_or_default(),
            highlighted: None,
            previous: None,
            play_state: PlayState::Stopped,
            clip_begin: options.clip_begin,
            clip_end: options.clip_end,
            playback_rate: options.playback_rate,
            stop_after_current: options.stop_after_current,
            stop_at: None,
        }
    }

    pub fn is_playing(&self) -> bool {
        self.play_state == PlayState::Playing
    }

    /// Quantized start of the playable window.
    pub fn clip_begin_quantized(&self) -> QuantizedTime {
        QuantizedTime::from_secs(self.clip_begin).unwrap_or_default()
    }

    /// Quantized end of the playable window, if resolved.
    pub fn clip_end_quantized(&self) -> Option<QuantizedTime> {
        self.clip_end.and_then(QuantizedTime::from_secs)
    }

    /// Resolve clip end against the media duration.
    ///
    /// An unset clip end, or one past the end of the media, becomes the
    /// duration. The result never falls below clip begin. Returns true if
    /// clip end changed.
    pub fn resolve_clip_end(&mut self, duration: f64) -> bool {
        if !duration.is_finite() || duration < 0.0 {
            return false;
        }
        let resolved = match self.clip_end {
            Some(end) if end <= duration => end,
            _ => duration,
        }
        .max(self.clip_begin);

        if self.clip_end == Some(resolved) {
            return false;
        }
        self.clip_end = Some(resolved);
        true
    }
}
