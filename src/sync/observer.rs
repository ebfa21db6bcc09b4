//! Playback observer: position reports to highlight and stop outcomes.
//!
//! `observe` is a pure update over the state record. The synchronizer
//! turns the returned [`Observation`] into marker changes, notifications
//! and source commands.

use super::index::SegmentIndex;
use super::quantize::QuantizedTime;
use super::state::{PlayState, PlaybackState};
use crate::transcript::SegmentId;

/// Why playback should stop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    /// Stop-after-current boundary reached
    SegmentEnd,
    /// Clip end reached
    ClipEnd,
}

/// A change of highlighted segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HighlightChange {
    pub previous: Option<SegmentId>,
    pub current: SegmentId,
}

/// Outcome of one position report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Observation {
    pub highlight: Option<HighlightChange>,
    pub stop: Option<StopReason>,
}

impl Observation {
    pub fn is_empty(&self) -> bool {
        self.highlight.is_none() && self.stop.is_none()
    }
}

/// Apply one reported playback position to the state.
///
/// Positions reported while stopped only update `current`: a stop resets
/// the source to clip begin and that report must not re-highlight.
pub fn observe(state: &mut PlaybackState, index: &SegmentIndex, position: f64) -> Observation {
    let Some(t) = QuantizedTime::from_secs(position) else {
        return Observation::default();
    };
    state.current = t;

    if state.play_state == PlayState::Stopped {
        return Observation::default();
    }

    if state.stop_after_current {
        if let Some(stop_at) = state.stop_at {
            if t >= stop_at {
                state.stop_at = None;
                return Observation {
                    highlight: None,
                    stop: Some(StopReason::SegmentEnd),
                };
            }
        }
    }

    let mut observation = Observation::default();

    if let Some(segment) = index.get(t) {
        if state.highlighted != Some(segment) {
            observation.highlight = Some(HighlightChange {
                previous: state.highlighted,
                current: segment,
            });
            state.previous = state.highlighted;
            state.highlighted = Some(segment);
        }
    }

    if let Some(end) = state.clip_end_quantized() {
        if t >= end {
            observation.stop = Some(StopReason::ClipEnd);
        }
    }

    observation
}
