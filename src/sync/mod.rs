//! Playhead synchronization between a playback source and a transcript.
//!
//! Times are compared on a half-second grid ([`QuantizedTime`]); each
//! segment start claims one slot of the [`SegmentIndex`]. The
//! [`Synchronizer`] ties the index, the [`PlaybackState`] record and the
//! two collaborators together.

pub mod events;
pub mod index;
pub mod input;
pub mod observer;
pub mod options;
pub mod quantize;
pub mod state;
mod synchronizer;
pub mod transport;

pub use events::{SubscriptionId, SyncEvent};
pub use index::SegmentIndex;
pub use input::{parse_rate, InputError, NumericInput};
pub use observer::{observe, HighlightChange, Observation, StopReason};
pub use options::SyncOptions;
pub use quantize::{quantize, QuantizedTime};
pub use state::{PlayState, PlaybackState};
pub use synchronizer::Synchronizer;
