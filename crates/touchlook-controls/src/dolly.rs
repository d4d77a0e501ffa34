//! Camera-relative translation accumulator.

use glam::Vec3;

use crate::delta::DeltaMemo;

/// Accumulated pan (x, y) and pinch (z) driven by two-finger gestures.
///
/// Values are in camera-relative scroll units and are unbounded. The bounding
/// box applies only to the world position they are projected into.
#[derive(Debug, Clone, Default)]
pub struct Dolly {
    offset: Vec3,
    memo: DeltaMemo<Vec3>,
}

impl Dolly {
    /// Creates a zeroed accumulator.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The accumulated offset.
    #[must_use]
    pub fn offset(&self) -> Vec3 {
        self.offset
    }

    /// Adds to the accumulated offset.
    pub fn push(&mut self, delta: Vec3) {
        self.offset += delta;
    }

    /// Zeroes the offset and forgets the last sample.
    pub fn reset(&mut self) {
        self.offset = Vec3::ZERO;
        self.memo.clear();
    }

    /// Returns the offset change since the previous call.
    pub fn sample_delta(&mut self) -> Vec3 {
        self.memo.sample(self.offset)
    }
}
