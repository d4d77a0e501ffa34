//! Collaborator interfaces provided by the host scene.
//!
//! The controls never own the entity, the render surface or the default look
//! controller. They reach them through these traits on every call.

use glam::{EulerRot, Vec2, Vec3};

use crate::event::{EventKind, ListenerId};

/// The scene-graph entity carrying the camera.
pub trait Entity {
    /// Rotation in degrees (x = pitch, y = yaw, z = roll).
    fn rotation(&self) -> Vec3;

    /// Sets the rotation in degrees.
    fn set_rotation(&mut self, rotation: Vec3);

    /// Position in world units.
    fn position(&self) -> Vec3;

    /// Sets the position in world units.
    fn set_position(&mut self, position: Vec3);

    /// Sets the order in which the Euler angles are applied.
    fn set_rotation_order(&mut self, order: EulerRot);
}

/// The canvas the scene is rendered into.
pub trait RenderSurface {
    /// Width in CSS pixels.
    fn client_width(&self) -> f32;

    /// Height in CSS pixels.
    fn client_height(&self) -> f32;

    /// Adds (`on = true`) or removes a style class.
    fn set_class(&mut self, class: &str, on: bool);

    /// Returns whether a style class is present.
    fn has_class(&self, class: &str) -> bool;

    /// Returns `(width, height)`.
    fn size(&self) -> Vec2 {
        Vec2::new(self.client_width(), self.client_height())
    }
}

/// A camera controller with a play/pause lifecycle.
///
/// The host's default single-pointer look controller implements this; the
/// mode controller decides which controller currently drives the camera.
pub trait LookController {
    /// Starts reacting to input.
    fn play(&mut self);

    /// Stops reacting to input.
    fn pause(&mut self);

    /// Returns whether the controller is playing.
    fn is_playing(&self) -> bool;
}

/// Everything the controls need from the host scene.
pub trait Host {
    /// The entity the controls are attached to.
    fn entity(&mut self) -> &mut dyn Entity;

    /// Whether the device is a touch/mobile device.
    fn is_mobile(&self) -> bool;

    /// The render surface, if it has been created yet.
    fn render_surface(&mut self) -> Option<&mut dyn RenderSurface>;

    /// The entity's default look controller, created if it does not exist.
    fn look_controller(&mut self) -> &mut dyn LookController;

    /// Registers a listener for `kind` and returns its handle.
    fn subscribe(&mut self, kind: EventKind) -> ListenerId;

    /// Removes a listener. Returns `false` if the handle was not registered.
    fn unsubscribe(&mut self, listener: ListenerId) -> bool;
}
