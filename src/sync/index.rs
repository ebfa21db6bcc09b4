//! Segment index: quantized time to segment lookup.

use std::collections::BTreeMap;

use super::quantize::QuantizedTime;
use crate::transcript::{Segment, SegmentId};

/// Immutable mapping from quantized start time to segment.
///
/// When two segments quantize to the same slot, the first one in document
/// order keeps the slot. Later ones are recorded as shadowed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SegmentIndex {
    slots: BTreeMap<QuantizedTime, SegmentId>,
    shadowed: Vec<SegmentId>,
}

impl SegmentIndex {
    /// Build the index from `(declared start, id)` pairs in document order.
    pub fn build<I>(segments: I) -> Self
    where
        I: IntoIterator<Item = (f64, SegmentId)>,
    {
        let mut index = Self::default();

        for (start, id) in segments {
            let Some(slot) = QuantizedTime::from_secs(start) else {
                tracing::warn!(segment = %id, start, "skipping segment with non-finite start");
                continue;
            };
            match index.slots.get(&slot) {
                Some(owner) => {
                    tracing::debug!(segment = %id, owner = %owner, %slot, "segment shadowed by earlier one");
                    index.shadowed.push(id);
                }
                None => {
                    index.slots.insert(slot, id);
                }
            }
        }

        index
    }

    /// Build the index from transcript segments, skipping those without a
    /// start time.
    pub fn from_segments(segments: &[Segment]) -> Self {
        Self::build(segments.iter().filter_map(|s| s.start.map(|t| (t, s.id))))
    }

    /// Segment owning exactly this slot.
    pub fn get(&self, time: QuantizedTime) -> Option<SegmentId> {
        self.slots.get(&time).copied()
    }

    /// First slot strictly after `time`.
    pub fn next_after(&self, time: QuantizedTime) -> Option<(QuantizedTime, SegmentId)> {
        use std::ops::Bound::{Excluded, Unbounded};
        self.slots
            .range((Excluded(time), Unbounded))
            .next()
            .map(|(slot, id)| (*slot, *id))
    }

    /// Slot a segment owns, if it owns one.
    pub fn slot_of(&self, id: SegmentId) -> Option<QuantizedTime> {
        self.slots
            .iter()
            .find(|(_, owner)| **owner == id)
            .map(|(slot, _)| *slot)
    }

    /// Segments that lost a slot collision, in document order.
    pub fn shadowed(&self) -> &[SegmentId] {
        &self.shadowed
    }

    /// Slots in ascending time order.
    pub fn iter(&self) -> impl Iterator<Item = (QuantizedTime, SegmentId)> + '_ {
        self.slots.iter().map(|(slot, id)| (*slot, *id))
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}
