//! Axis-aligned box that keeps the camera from wandering off.

use glam::Vec3;

use crate::config::{AxisRange, LookConfig};

/// World-space box the camera position is clamped into.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    /// Minimum corner.
    pub min: Vec3,
    /// Maximum corner.
    pub max: Vec3,
}

impl Bounds {
    /// Creates bounds from per-axis ranges around `anchor`.
    #[must_use]
    pub fn from_ranges(anchor: Vec3, x: AxisRange, y: AxisRange, z: AxisRange) -> Self {
        let (min_x, max_x) = x.interval(anchor.x);
        let (min_y, max_y) = y.interval(anchor.y);
        let (min_z, max_z) = z.interval(anchor.z);
        Self {
            min: Vec3::new(min_x, min_y, min_z),
            max: Vec3::new(max_x, max_y, max_z),
        }
    }

    /// Creates bounds from a configuration's ranges around `anchor`.
    #[must_use]
    pub fn from_config(anchor: Vec3, config: &LookConfig) -> Self {
        Self::from_ranges(anchor, config.xrange, config.yrange, config.zrange)
    }

    /// Clamps a position into the box, axis by axis.
    #[must_use]
    pub fn clamp(&self, position: Vec3) -> Vec3 {
        position.max(self.min).min(self.max)
    }

    /// Returns whether the position lies inside the box (inclusive).
    #[must_use]
    pub fn contains(&self, position: Vec3) -> bool {
        position.cmpge(self.min).all() && position.cmple(self.max).all()
    }
}
