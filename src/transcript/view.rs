//! TranscriptView trait.

use super::segment::{Segment, SegmentId};

/// The transcript container a synchronizer highlights.
///
/// Supplies the segments in document order and carries per-segment
/// presentation state: named markers (the highlight) and a pressed
/// indicator for segments that can be activated to seek. The synchronizer
/// never changes the segment list itself.
pub trait TranscriptView {
    /// Segments in document order.
    fn segments(&self) -> &[Segment];

    /// Add or remove `marker` on one segment.
    fn set_marker(&mut self, id: SegmentId, marker: &str, on: bool);

    /// Set the pressed indicator on one segment.
    fn set_pressed(&mut self, id: SegmentId, pressed: bool);

    /// Remove `marker` from every segment.
    fn clear_marker(&mut self, marker: &str) {
        let ids: Vec<SegmentId> = self.segments().iter().map(|s| s.id).collect();
        for id in ids {
            self.set_marker(id, marker, false);
        }
    }

    /// Mark every segment unpressed.
    fn clear_pressed(&mut self) {
        let ids: Vec<SegmentId> = self.segments().iter().map(|s| s.id).collect();
        for id in ids {
            self.set_pressed(id, false);
        }
    }

    /// Look up a segment by id.
    fn segment(&self, id: SegmentId) -> Option<&Segment> {
        self.segments().iter().find(|s| s.id == id)
    }
}
