//! Core abstractions for touchlook.
//!
//! This crate provides the types shared by the gesture engine and the plugin:
//! - [`LookConfig`] and [`AxisRange`] configuration with validation
//! - [`Bounds`] for clamping the camera position
//! - [`Host`] and related traits describing the host scene
//! - [`HostEvent`] and [`ListenerId`] for event subscription

// Documentation lints - internal functions don't need exhaustive error docs
#![allow(clippy::missing_errors_doc)]
// Builder patterns return Self which doesn't need must_use
#![allow(clippy::must_use_candidate)]
// Configured limits are compared exactly to detect changes
#![allow(clippy::float_cmp)]

pub mod bounds;
pub mod config;
pub mod error;
pub mod event;
pub mod host;

pub use bounds::Bounds;
pub use config::{AxisRange, LookConfig, PitchLimits};
pub use error::{Result, TouchLookError};
pub use event::{EventKind, HostEvent, ListenerId, TouchList};
pub use host::{Entity, Host, LookController, RenderSurface};

// Re-export glam types for convenience
pub use glam::{EulerRot, Vec2, Vec3};
