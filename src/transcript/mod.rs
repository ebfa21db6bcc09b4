//! Transcript documents and the view trait the synchronizer highlights.
//!
//! A transcript file is JSON: either an object carrying an optional media
//! `duration` and a `segments` array, or a bare array of segments:
//!
//! ```json
//! { "duration": 9.0,
//!   "segments": [
//!     { "playhead": "0.0", "text": "Once upon a time" },
//!     { "playhead": 2.1,   "text": "there was a bear." } ] }
//! ```
//!
//! Each segment's start time is read from a configurable attribute
//! (`playhead` by default). Numbers and numeric strings are both accepted.

mod error;
mod segment;
mod view;

use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

use serde::Deserialize;
use serde_json::{Map, Value};

pub use error::TranscriptError;
pub use segment::{Segment, SegmentId};
pub use view::TranscriptView;

/// Default name of the start-time attribute.
pub const DEFAULT_TIME_ATTRIBUTE: &str = "playhead";

/// Per-segment presentation state.
#[derive(Debug, Clone, Default, PartialEq)]
struct SegmentMarks {
    markers: BTreeSet<String>,
    /// `None` until the segment is exposed as pressable
    pressed: Option<bool>,
}

/// In-memory transcript: segments plus their presentation state.
#[derive(Debug, Clone, PartialEq)]
pub struct Transcript {
    segments: Vec<Segment>,
    duration: Option<f64>,
    marks: Vec<SegmentMarks>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawTranscript {
    Document {
        #[serde(default)]
        duration: Option<f64>,
        segments: Vec<Map<String, Value>>,
    },
    Bare(Vec<Map<String, Value>>),
}

impl Transcript {
    /// Build a transcript from already-parsed segments.
    ///
    /// Segment ids are reassigned to match their position.
    pub fn new(segments: Vec<Segment>, duration: Option<f64>) -> Self {
        let segments: Vec<Segment> = segments
            .into_iter()
            .enumerate()
            .map(|(i, mut segment)| {
                segment.id = SegmentId(i);
                segment
            })
            .collect();
        let marks = vec![SegmentMarks::default(); segments.len()];
        Self {
            segments,
            duration: duration.filter(|d| d.is_finite() && *d >= 0.0),
            marks,
        }
    }

    /// Build a transcript from `(start, text)` pairs.
    pub fn from_pairs<'a>(pairs: impl IntoIterator<Item = (f64, &'a str)>) -> Self {
        let segments = pairs
            .into_iter()
            .enumerate()
            .map(|(i, (start, text))| Segment::new(i, start, text))
            .collect();
        Self::new(segments, None)
    }

    /// Load a transcript file from a path.
    pub fn load<P: AsRef<Path>>(path: P, time_attribute: &str) -> Result<Self, TranscriptError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(TranscriptError::NotFound {
                path: path.to_path_buf(),
            });
        }
        let content = fs::read_to_string(path).map_err(|source| TranscriptError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&content, time_attribute)
    }

    /// Parse a transcript from JSON text.
    pub fn from_json_str(content: &str, time_attribute: &str) -> Result<Self, TranscriptError> {
        let (duration, raw_segments) = match serde_json::from_str::<RawTranscript>(content)? {
            RawTranscript::Document { duration, segments } => (duration, segments),
            RawTranscript::Bare(segments) => (None, segments),
        };

        let segments = raw_segments
            .iter()
            .enumerate()
            .map(|(i, fields)| {
                let raw = fields.get(time_attribute);
                let start = raw.and_then(read_time);
                match (raw, start) {
                    (Some(value), None) => tracing::warn!(
                        segment = i,
                        attribute = time_attribute,
                        %value,
                        "segment start time is not a number"
                    ),
                    (None, _) => tracing::debug!(
                        segment = i,
                        attribute = time_attribute,
                        "segment has no start time"
                    ),
                    _ => {}
                }
                let text = fields
                    .get("text")
                    .and_then(Value::as_str)
                    .unwrap_or_default();
                Segment::new(i, start, text)
            })
            .collect();

        Ok(Self::new(segments, duration))
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Media duration declared by the transcript file, if any.
    pub fn duration(&self) -> Option<f64> {
        self.duration
    }

    /// Latest declared start time among all segments.
    pub fn last_start(&self) -> Option<f64> {
        self.segments
            .iter()
            .filter_map(|s| s.start)
            .fold(None, |max, t| Some(max.map_or(t, |m: f64| m.max(t))))
    }

    pub fn get(&self, id: SegmentId) -> Option<&Segment> {
        self.segments.get(id.0)
    }

    /// Whether `marker` is currently set on segment `id`.
    pub fn has_marker(&self, id: SegmentId, marker: &str) -> bool {
        self.marks
            .get(id.0)
            .is_some_and(|m| m.markers.contains(marker))
    }

    /// All segments currently carrying `marker`, in document order.
    pub fn marked(&self, marker: &str) -> Vec<SegmentId> {
        self.segments
            .iter()
            .filter(|s| self.has_marker(s.id, marker))
            .map(|s| s.id)
            .collect()
    }

    /// Pressed indicator of segment `id`; `None` if never exposed.
    pub fn is_pressed(&self, id: SegmentId) -> Option<bool> {
        self.marks.get(id.0).and_then(|m| m.pressed)
    }
}

impl TranscriptView for Transcript {
    fn segments(&self) -> &[Segment] {
        &self.segments
    }

    fn set_marker(&mut self, id: SegmentId, marker: &str, on: bool) {
        if let Some(marks) = self.marks.get_mut(id.0) {
            if on {
                marks.markers.insert(marker.to_string());
            } else {
                marks.markers.remove(marker);
            }
        }
    }

    fn set_pressed(&mut self, id: SegmentId, pressed: bool) {
        if let Some(marks) = self.marks.get_mut(id.0) {
            marks.pressed = Some(pressed);
        }
    }

    fn segment(&self, id: SegmentId) -> Option<&Segment> {
        self.get(id)
    }
}

/// Read a start time from a number or a numeric string.
fn read_time(value: &Value) -> Option<f64> {
    let time = match value {
        Value::Number(n) => n.as_f64()?,
        Value::String(s) => s.trim().parse::<f64>().ok()?,
        _ => return None,
    };
    time.is_finite().then_some(time)
}
