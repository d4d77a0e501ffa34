//! Gesture-to-transform engine for touchlook.
//!
//! Touch events feed the [`GestureTracker`], which mutates the [`Orientation`]
//! and [`Dolly`] accumulators. Once per frame [`compose`] samples what changed
//! and writes rotation and position to the host [`Entity`](touchlook_core::Entity).

// Documentation lints - internal functions don't need exhaustive panic docs
#![allow(clippy::missing_panics_doc)]
// Builder patterns return Self which doesn't need must_use
#![allow(clippy::must_use_candidate)]
// Deltas are compared exactly against zero to skip redundant writes
#![allow(clippy::float_cmp)]

pub mod composer;
pub mod delta;
pub mod dolly;
pub mod gesture;
pub mod orientation;

pub use composer::{compose, project_dolly, ComposeOutcome};
pub use delta::DeltaMemo;
pub use dolly::Dolly;
pub use gesture::{
    GestureTracker, MoveOutcome, TouchAnchor, DOLLY_SPEED, GLITCH_THRESHOLD, PITCH_SPEED,
    YAW_SPEED,
};
pub use orientation::{Orientation, OrientationDelta};
