//! readalong - keeps a transcript highlighted in step with audio playback
//!
//! The core is [`sync::Synchronizer`]: it watches a [`source::PlaybackSource`]
//! and marks the current segment of a [`transcript::TranscriptView`], with
//! play/pause/stop/seek transport, clip windows and a stop-after-current
//! mode. Segment times are compared on a half-second grid.
//!
//! ```
//! use readalong::source::ScriptedSource;
//! use readalong::sync::{SyncOptions, Synchronizer};
//! use readalong::transcript::{SegmentId, Transcript};
//!
//! let transcript = Transcript::from_pairs([(0.0, "Once upon a time"), (2.1, "there was a bear.")]);
//! let mut sync = Synchronizer::new(ScriptedSource::new(Some(5.0)), transcript, SyncOptions::default());
//!
//! sync.seek_to_segment(2.1);
//! sync.pump();
//! assert_eq!(sync.highlighted(), Some(SegmentId(1)));
//! ```

pub mod cli;
pub mod config;
pub mod player;
pub mod scheduler;
pub mod source;
pub mod sync;
pub mod theme;
pub mod transcript;

pub use config::Config;
