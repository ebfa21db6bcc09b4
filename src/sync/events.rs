//! Notifications emitted by the synchronizer and their subscribers.

use serde::Serialize;

use super::state::PlaybackState;

/// A notification carrying the full playback state after the change.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "event", content = "state", rename_all = "snake_case")]
pub enum SyncEvent {
    /// A different segment is now highlighted
    HighlightChanged(PlaybackState),
    /// Playing, paused or stopped changed
    PlayStateChanged(PlaybackState),
}

impl SyncEvent {
    /// State snapshot carried by the notification.
    pub fn state(&self) -> &PlaybackState {
        match self {
            Self::HighlightChanged(state) | Self::PlayStateChanged(state) => state,
        }
    }

    /// Short name for logs and display.
    pub fn name(&self) -> &'static str {
        match self {
            Self::HighlightChanged(_) => "highlight_changed",
            Self::PlayStateChanged(_) => "play_state_changed",
        }
    }
}

/// Handle returned by `subscribe`, used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Listener = Box<dyn FnMut(&SyncEvent)>;

/// Subscriber list, notified in registration order.
#[derive(Default)]
pub(crate) struct Listeners {
    next_id: u64,
    entries: Vec<(SubscriptionId, Listener)>,
}

impl Listeners {
    pub(crate) fn subscribe(&mut self, listener: Listener) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.entries.push((id, listener));
        id
    }

    pub(crate) fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|(entry_id, _)| *entry_id != id);
        self.entries.len() != before
    }

    pub(crate) fn emit(&mut self, event: &SyncEvent) {
        tracing::trace!(event = event.name(), "notify");
        for (_, listener) in &mut self.entries {
            listener(event);
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }
}

impl std::fmt::Debug for Listeners {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Listeners")
            .field("count", &self.entries.len())
            .finish()
    }
}
