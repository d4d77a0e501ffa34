//! Per-tick transform composition.
//!
//! Samples the accumulators once per frame and writes the resulting rotation
//! and position to the host entity. Rotation is written first so the dolly is
//! projected with the yaw the user is looking along now.

use glam::{Vec2, Vec3};
use touchlook_core::{Bounds, Entity};

use crate::dolly::Dolly;
use crate::orientation::Orientation;

/// What a composer pass wrote to the entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ComposeOutcome {
    /// The rotation attribute was written.
    pub rotated: bool,
    /// The position attribute was written.
    pub moved: bool,
}

/// Rotates a camera-relative pan into world X/Z.
///
/// `yaw` is in degrees. `leftright` moves perpendicular to the view direction,
/// `inout` moves along it. Returns `(world_x, world_z)`.
#[must_use]
pub fn project_dolly(yaw: f32, leftright: f32, inout: f32) -> Vec2 {
    let side = (yaw - 90.0).to_radians();
    let forward = yaw.to_radians();
    Vec2::new(
        leftright * side.sin() - inout * forward.sin(),
        leftright * side.cos() - inout * forward.cos(),
    )
}

/// Applies the accumulated rotation and dolly since the last pass to `entity`.
pub fn compose(
    entity: &mut dyn Entity,
    orientation: &mut Orientation,
    dolly: &mut Dolly,
    bounds: &Bounds,
) -> ComposeOutcome {
    let mut outcome = ComposeOutcome::default();

    let current_rotation = entity.rotation();
    let current_position = entity.position();

    let turn = orientation.sample_delta();
    let rotation = Vec3::new(
        current_rotation.x - turn.pitch,
        current_rotation.y - turn.yaw,
        current_rotation.z,
    );
    if !turn.is_zero() {
        entity.set_rotation(rotation);
        outcome.rotated = true;
        log::trace!("rotation -> {rotation:?}");
    }

    let shift = dolly.sample_delta();
    if shift.x != 0.0 || shift.z != 0.0 {
        let world = project_dolly(rotation.y, shift.x, shift.z);
        let position = bounds.clamp(current_position + Vec3::new(world.x, shift.y, world.y));
        entity.set_position(position);
        outcome.moved = true;
        log::trace!("position -> {position:?}");
    }

    outcome
}
