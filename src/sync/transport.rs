//! Transport state transitions.
//!
//! Pure updates over the state record. Source commands, marker changes and
//! notifications are applied by the synchronizer around these.

use super::index::SegmentIndex;
use super::quantize::QuantizedTime;
use super::state::{PlayState, PlaybackState};

/// Move to `next`, returning true if the transport state changed.
pub fn set_play_state(state: &mut PlaybackState, next: PlayState) -> bool {
    if state.play_state == next {
        return false;
    }
    tracing::debug!(from = ?state.play_state, to = ?next, "play state change");
    state.play_state = next;
    true
}

/// Reset to clip begin with nothing highlighted.
///
/// Idempotent. Returns true if the transport state changed.
pub fn stop(state: &mut PlaybackState) -> bool {
    state.current = state.clip_begin_quantized();
    state.highlighted = None;
    state.stop_at = None;
    set_play_state(state, PlayState::Stopped)
}

/// Position at which stop-after-current halts when playback starts at
/// `target`: the next segment's slot, or clip end after the last segment.
pub fn stop_at_for(
    state: &PlaybackState,
    index: &SegmentIndex,
    target: QuantizedTime,
) -> Option<QuantizedTime> {
    index
        .next_after(target)
        .map(|(slot, _)| slot)
        .or_else(|| state.clip_end_quantized())
}

/// Move the playhead to `target` ahead of a play command.
pub fn seek(state: &mut PlaybackState, index: &SegmentIndex, target: QuantizedTime) {
    if state.stop_after_current {
        state.stop_at = stop_at_for(state, index, target);
    }
    state.current = target;
}

/// Switch stop-after-current mode. Leaving the mode drops any pending
/// stop position.
pub fn set_stop_after_current(state: &mut PlaybackState, enabled: bool) {
    state.stop_after_current = enabled;
    if !enabled {
        state.stop_at = None;
    }
}
