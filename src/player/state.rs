//! Player UI state
//!
//! Everything the terminal player tracks on top of the synchronizer:
//! the selection cursor, the help overlay and a transient status message.

use crate::transcript::SegmentId;

/// Result of processing an input event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputResult {
    /// Keep running
    Continue,
    /// Exit the player
    Quit,
}

/// UI state of the terminal player.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlayerState {
    /// Segment under the selection cursor
    pub selected: Option<SegmentId>,
    /// Whether the help overlay is visible
    pub show_help: bool,
    /// One-line feedback for the last action
    pub message: Option<String>,
}

impl PlayerState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Move the cursor one segment down, starting from `anchor` (usually the
    /// highlighted segment) when nothing is selected yet.
    pub fn select_next(&mut self, anchor: Option<SegmentId>, count: usize) {
        if count == 0 {
            return;
        }
        let next = match self.selected.or(anchor) {
            Some(id) if self.selected.is_some() => (id.index() + 1).min(count - 1),
            Some(id) => id.index().min(count - 1),
            None => 0,
        };
        self.selected = Some(SegmentId(next));
    }

    /// Move the cursor one segment up. See [`select_next`](Self::select_next).
    pub fn select_previous(&mut self, anchor: Option<SegmentId>, count: usize) {
        if count == 0 {
            return;
        }
        let previous = match self.selected.or(anchor) {
            Some(id) if self.selected.is_some() => id.index().saturating_sub(1),
            Some(id) => id.index().min(count - 1),
            None => 0,
        };
        self.selected = Some(SegmentId(previous));
    }

    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
    }

    pub fn set_message(&mut self, message: impl Into<String>) {
        self.message = Some(message.into());
    }
}
