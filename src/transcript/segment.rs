//! Transcript segments.

use std::fmt;

use serde::Serialize;

/// Identifier of a transcript segment: its position in document order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct SegmentId(pub usize);

impl SegmentId {
    /// Position of the segment in document order.
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for SegmentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A unit of transcript text with its declared start time.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Segment {
    pub id: SegmentId,
    /// Declared start time in seconds, `None` when the time attribute is
    /// missing or unreadable
    pub start: Option<f64>,
    pub text: String,
}

impl Segment {
    pub fn new(id: usize, start: impl Into<Option<f64>>, text: impl Into<String>) -> Self {
        Self {
            id: SegmentId(id),
            start: start.into(),
            text: text.into(),
        }
    }
}
