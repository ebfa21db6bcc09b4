//! Synchronizer options.

use serde::{Deserialize, Serialize};

use crate::transcript::DEFAULT_TIME_ATTRIBUTE;

/// Options for a [`Synchronizer`](super::Synchronizer).
///
/// Also the `[sync]` section of the config file; every field has a default.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SyncOptions {
    /// Activating a segment seeks playback to it
    pub touch_to_seek: bool,
    /// Marker name applied to the highlighted segment
    pub highlight_marker: String,
    /// Attribute holding each segment's start time
    pub time_attribute: String,
    /// Start of the playable window in seconds
    pub clip_begin: f64,
    /// End of the playable window; resolved to the media duration when unset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub clip_end: Option<f64>,
    /// Initial playback rate
    pub playback_rate: f64,
    /// Stop automatically at the end of the segment playback started in
    pub stop_after_current: bool,
}

impl Default for SyncOptions {
    fn default() -> Self {
        Self {
            touch_to_seek: true,
            highlight_marker: "highlighted".to_string(),
            time_attribute: DEFAULT_TIME_ATTRIBUTE.to_string(),
            clip_begin: 0.0,
            clip_end: None,
            playback_rate: 1.0,
            stop_after_current: false,
        }
    }
}

impl SyncOptions {
    /// Replace values a playback source cannot use with their defaults.
    ///
    /// Non-finite or negative clip begin becomes 0, a non-finite clip end is
    /// dropped, a clip end before clip begin is raised to it, and a
    /// non-positive rate becomes 1.
    pub fn normalized(mut self) -> Self {
        if !self.clip_begin.is_finite() || self.clip_begin < 0.0 {
            tracing::warn!(clip_begin = self.clip_begin, "invalid clip begin, using 0");
            self.clip_begin = 0.0;
        }
        self.clip_end = self
            .clip_end
            .filter(|end| end.is_finite())
            .map(|end| end.max(self.clip_begin));
        if !(self.playback_rate.is_finite() && self.playback_rate > 0.0) {
            tracing::warn!(rate = self.playback_rate, "invalid playback rate, using 1");
            self.playback_rate = 1.0;
        }
        self
    }
}
