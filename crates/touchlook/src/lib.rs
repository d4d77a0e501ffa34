//! touchlook: multitouch look controls for 3D scene cameras.
//!
//! One finger drags to look around, two fingers pinch to walk forward and
//! back and slide to strafe. The camera position stays inside a box anchored
//! on where the camera started.
//!
//! # Quick Start
//!
//! ```
//! use touchlook::*;
//!
//! fn main() -> Result<()> {
//!     let mut host = HeadlessHost::mobile(360.0, 640.0);
//!     let mut controls = MultitouchLookControls::init(&mut host, LookConfig::default())?;
//!     controls.play(&mut host);
//!
//!     // Drag one finger a tenth of the screen to the right
//!     host.touch_start(&mut controls, &[Vec2::new(100.0, 300.0)]);
//!     host.touch_move(&mut controls, &[Vec2::new(136.0, 300.0)]);
//!     host.frame(&mut controls);
//!
//!     // The yaw accumulator turned by -7.2°, so the entity turns by +7.2°
//!     assert!((host.entity.rotation.y - 7.2).abs() < 1e-3);
//!     Ok(())
//! }
//! ```
//!
//! # Integration
//!
//! A host scene implements [`Host`] (entity, render surface, default look
//! controller and event subscriptions) and drives
//! [`MultitouchLookControls`] through its lifecycle. [`HeadlessHost`] is a
//! complete in-memory implementation. [`TouchTracker`] turns per-finger
//! window touch events into the touch lists the controls consume.

// Documentation lints - internal functions don't need exhaustive error docs
#![allow(clippy::missing_errors_doc)]
// Builder patterns return Self which doesn't need must_use
#![allow(clippy::must_use_candidate)]
// Types such as `TouchListeners` repeat their module name
#![allow(clippy::module_name_repetitions)]

pub mod component;
pub mod cursor;
pub mod headless;
pub mod listeners;
pub mod mode;
pub mod touch_input;

pub use component::MultitouchLookControls;
pub use cursor::{GrabCursor, GRAB_CURSOR_CLASS};
pub use headless::{HeadlessEntity, HeadlessHost, HeadlessLookController, HeadlessSurface};
pub use listeners::{TouchAttachment, TouchListeners};
pub use mode::{ActiveController, Mode, ModeController, Transition};
pub use touch_input::TouchTracker;

// Re-export core types
pub use touchlook_core::{
    AxisRange, Bounds, Entity, EventKind, Host, HostEvent, ListenerId, LookConfig,
    LookController, PitchLimits, RenderSurface, Result, TouchList, TouchLookError,
};

// Re-export gesture engine types
pub use touchlook_controls::{
    ComposeOutcome, Dolly, GestureTracker, MoveOutcome, Orientation, DOLLY_SPEED,
    GLITCH_THRESHOLD, PITCH_SPEED, YAW_SPEED,
};

// Re-export glam types for convenience
pub use glam::{EulerRot, Vec2, Vec3};
