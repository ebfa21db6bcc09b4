//! Half-second quantization of playback positions.
//!
//! Playback sources report positions a few times per second at arbitrary
//! fractional offsets. Segment lookup happens on a half-second grid so that
//! each report lands on a stable key.

use std::fmt;

use serde::{Serialize, Serializer};

/// A playback position rounded to the nearest half second.
///
/// Stored as a count of half-second ticks, so values order totally and can
/// key a map. Rounding is half-up on the doubled value: `floor(2t + 0.5)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct QuantizedTime(i64);

impl QuantizedTime {
    /// Quantized time zero.
    pub const ZERO: Self = Self(0);

    /// Quantize a position given in seconds.
    ///
    /// Returns `None` for NaN or infinite input.
    pub fn from_secs(secs: f64) -> Option<Self> {
        if !secs.is_finite() {
            return None;
        }
        // `as` saturates for out-of-range floats
        Some(Self((secs * 2.0 + 0.5).floor() as i64))
    }

    /// Build from a raw count of half-second ticks.
    pub const fn from_ticks(ticks: i64) -> Self {
        Self(ticks)
    }

    /// Number of half-second ticks.
    pub const fn ticks(self) -> i64 {
        self.0
    }

    /// Position in seconds (always a multiple of 0.5).
    pub fn as_secs(self) -> f64 {
        self.0 as f64 / 2.0
    }
}

impl fmt::Display for QuantizedTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1}", self.as_secs())
    }
}

impl Serialize for QuantizedTime {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(self.as_secs())
    }
}

/// Round `secs` to the nearest 0.5, returning seconds.
///
/// Convenience wrapper over [`QuantizedTime::from_secs`].
pub fn quantize(secs: f64) -> Option<f64> {
    QuantizedTime::from_secs(secs).map(QuantizedTime::as_secs)
}
