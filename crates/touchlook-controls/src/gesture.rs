//! Touch gesture tracking.
//!
//! Converts raw touch lists into increments on the [`Orientation`] and
//! [`Dolly`] accumulators:
//!
//! - one finger rotates (horizontal drag yaws, vertical drag pitches)
//! - two fingers pan with their midpoint and zoom with their spread
//!
//! Screen deltas are normalized to radians of a full turn per surface
//! dimension before the speed factors are applied.

use std::f32::consts::{SQRT_2, TAU};

use glam::{Vec2, Vec3};
use touchlook_core::TouchList;

use crate::dolly::Dolly;
use crate::orientation::Orientation;

/// Yaw change per normalized horizontal delta.
pub const YAW_SPEED: f32 = 0.2;

/// Pitch change per normalized vertical delta.
pub const PITCH_SPEED: f32 = 0.25;

/// Dolly change per normalized two-finger delta.
pub const DOLLY_SPEED: f32 = 0.5;

/// Normalized single-event delta above which a sample counts as a tracking glitch.
pub const GLITCH_THRESHOLD: f32 = 1.5;

/// Where the last sample of the current gesture was taken.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TouchAnchor {
    /// The touch (one finger) or midpoint (two fingers), in page coordinates.
    pub point: Vec2,
    /// Distance between the two fingers, unset until the first two-finger move.
    pub distance: Option<f32>,
}

impl TouchAnchor {
    fn at(point: Vec2) -> Self {
        Self {
            point,
            distance: None,
        }
    }
}

/// What a touch-move did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// One-finger drag rotated the orientation.
    Rotated,
    /// Two-finger drag or pinch moved the dolly.
    Dollied,
    /// The normalized delta exceeded [`GLITCH_THRESHOLD`]; the anchor was refreshed.
    Glitch,
    /// There was no anchor yet; this sample became the anchor.
    Seeded,
    /// The event was not usable (finger count or surface size).
    Ignored,
}

fn is_glitch(delta: Vec2) -> bool {
    delta.x.abs() > GLITCH_THRESHOLD || delta.y.abs() > GLITCH_THRESHOLD
}

fn midpoint_and_distance(a: Vec2, b: Vec2) -> (Vec2, f32) {
    ((a + b) * 0.5, a.distance(b))
}

/// Tracks the anchor of the gesture in progress.
#[derive(Debug, Clone, Default)]
pub struct GestureTracker {
    anchor: Option<TouchAnchor>,
    active: bool,
}

impl GestureTracker {
    /// Creates a tracker with no gesture in progress.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The current anchor.
    #[must_use]
    pub fn anchor(&self) -> Option<TouchAnchor> {
        self.anchor
    }

    /// Whether a one-finger gesture is in progress.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Forgets the gesture in progress.
    pub fn reset(&mut self) {
        self.anchor = None;
        self.active = false;
    }

    /// Handles a touch-start with all active touches.
    pub fn touch_start(&mut self, touches: &TouchList) {
        match touches.points() {
            [] => log::warn!("touch start without any touches"),
            [point] => {
                self.anchor = Some(TouchAnchor::at(*point));
                self.active = true;
            }
            [a, b] => {
                self.anchor = Some(TouchAnchor::at(midpoint_and_distance(*a, *b).0));
            }
            _ => {}
        }
    }

    /// Handles a touch-move with all active touches.
    ///
    /// `surface` is the render surface size in the same units as the touches.
    pub fn touch_move(
        &mut self,
        touches: &TouchList,
        surface: Vec2,
        orientation: &mut Orientation,
        dolly: &mut Dolly,
    ) -> MoveOutcome {
        if surface.x <= 0.0 || surface.y <= 0.0 {
            log::warn!("ignoring touch move on a {}x{} surface", surface.x, surface.y);
            return MoveOutcome::Ignored;
        }
        match touches.points() {
            [] => {
                log::warn!("touch move without any touches");
                MoveOutcome::Ignored
            }
            [point] => self.rotate(*point, surface, orientation),
            [a, b] => self.pan(*a, *b, surface, orientation, dolly),
            _ => MoveOutcome::Ignored,
        }
    }

    /// Handles a touch-end with the touches that remain.
    ///
    /// Dropping from two fingers to one re-anchors on the remaining finger so
    /// the stale midpoint does not turn into a jump.
    pub fn touch_end(&mut self, remaining: &TouchList) {
        self.active = false;
        if let [point] = remaining.points() {
            self.anchor = Some(TouchAnchor::at(*point));
            self.active = true;
        }
    }

    fn rotate(&mut self, point: Vec2, surface: Vec2, orientation: &mut Orientation) -> MoveOutcome {
        let Some(anchor) = self.anchor else {
            self.anchor = Some(TouchAnchor::at(point));
            return MoveOutcome::Seeded;
        };

        // x drives yaw, y drives pitch
        let delta = TAU * (point - anchor.point) / surface;
        orientation.rotate(-delta.x * YAW_SPEED, -delta.y * PITCH_SPEED);

        self.anchor = Some(TouchAnchor::at(point));
        if is_glitch(delta) {
            log::debug!("one-finger sample jumped by {delta:?}, re-anchoring");
            return MoveOutcome::Glitch;
        }
        MoveOutcome::Rotated
    }

    fn pan(
        &mut self,
        a: Vec2,
        b: Vec2,
        surface: Vec2,
        orientation: &mut Orientation,
        dolly: &mut Dolly,
    ) -> MoveOutcome {
        let (midpoint, distance) = midpoint_and_distance(a, b);
        let Some(anchor) = self.anchor else {
            self.anchor = Some(TouchAnchor {
                point: midpoint,
                distance: Some(distance),
            });
            return MoveOutcome::Seeded;
        };

        let anchor_distance = anchor.distance.unwrap_or(distance);
        let max_distance = SQRT_2 * surface.min_element();

        let delta = TAU * (midpoint - anchor.point) / surface;
        let delta_distance = TAU * (distance - anchor_distance) / max_distance;

        self.anchor = Some(TouchAnchor {
            point: midpoint,
            distance: Some(distance),
        });
        if is_glitch(delta) {
            log::debug!("two-finger sample jumped by {delta:?}, re-anchoring");
            return MoveOutcome::Glitch;
        }

        dolly.push(Vec3::new(delta.x, delta.y, delta_distance) * DOLLY_SPEED);
        orientation.clamp_pitch();
        MoveOutcome::Dollied
    }
}
