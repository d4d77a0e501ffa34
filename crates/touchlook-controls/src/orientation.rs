//! Yaw/pitch accumulator.

use glam::Vec2;
use touchlook_core::PitchLimits;

use crate::delta::DeltaMemo;

/// Rotation change between two samples, in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct OrientationDelta {
    /// Change of yaw (rotation about world Y).
    pub yaw: f32,
    /// Change of pitch (rotation about the camera's X).
    pub pitch: f32,
}

impl OrientationDelta {
    /// Returns true when neither angle changed.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.yaw == 0.0 && self.pitch == 0.0
    }
}

/// Accumulated yaw and pitch driven by one-finger drags.
///
/// Yaw is unbounded. Pitch is kept inside the configured limits after every
/// mutation.
#[derive(Debug, Clone)]
pub struct Orientation {
    yaw: f32,
    pitch: f32,
    limits: PitchLimits,
    memo: DeltaMemo<Vec2>,
}

impl Orientation {
    /// Creates a zeroed orientation with the given pitch limits.
    #[must_use]
    pub fn new(limits: PitchLimits) -> Self {
        Self {
            yaw: 0.0,
            pitch: limits.clamp(0.0),
            limits,
            memo: DeltaMemo::new(),
        }
    }

    /// Yaw in radians.
    #[must_use]
    pub fn yaw(&self) -> f32 {
        self.yaw
    }

    /// Pitch in radians.
    #[must_use]
    pub fn pitch(&self) -> f32 {
        self.pitch
    }

    /// The pitch limits in radians.
    #[must_use]
    pub fn limits(&self) -> PitchLimits {
        self.limits
    }

    /// Adds to yaw and pitch (radians), then clamps pitch.
    pub fn rotate(&mut self, d_yaw: f32, d_pitch: f32) {
        self.yaw += d_yaw;
        self.pitch += d_pitch;
        self.clamp_pitch();
    }

    /// Forces pitch back into its limits.
    pub fn clamp_pitch(&mut self) {
        self.pitch = self.limits.clamp(self.pitch);
    }

    /// Replaces the pitch limits and clamps the current pitch into them.
    pub fn set_pitch_limits(&mut self, limits: PitchLimits) {
        self.limits = limits;
        self.clamp_pitch();
    }

    /// Zeroes both angles and forgets the last sample, so the next
    /// [`sample_delta`](Self::sample_delta) reports no change.
    pub fn reset(&mut self) {
        self.yaw = 0.0;
        self.pitch = 0.0;
        self.clamp_pitch();
        self.memo.clear();
    }

    /// Returns the rotation since the previous call, in degrees.
    pub fn sample_delta(&mut self) -> OrientationDelta {
        let current = Vec2::new(self.yaw.to_degrees(), self.pitch.to_degrees());
        let delta = self.memo.sample(current);
        OrientationDelta {
            yaw: delta.x,
            pitch: delta.y,
        }
    }
}
