//! Host events and listener handles.

use glam::Vec2;

/// Ordered list of active touch points in page coordinates.
///
/// For a touch-end event this holds the touches that remain on the surface.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TouchList(pub Vec<Vec2>);

impl TouchList {
    /// Creates a touch list from page coordinates.
    #[must_use]
    pub fn new(points: impl Into<Vec<Vec2>>) -> Self {
        Self(points.into())
    }

    /// Number of touches.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true when no finger is down.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The touch points.
    #[must_use]
    pub fn points(&self) -> &[Vec2] {
        &self.0
    }
}

impl From<Vec<Vec2>> for TouchList {
    fn from(points: Vec<Vec2>) -> Self {
        Self(points)
    }
}

/// Event kinds a listener can subscribe to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    /// A finger touched the surface.
    TouchStart,
    /// One or more fingers moved.
    TouchMove,
    /// A finger was lifted or the touch was cancelled.
    TouchEnd,
    /// The host entered immersive (VR) presentation.
    EnterImmersive,
    /// The host left immersive presentation.
    ExitImmersive,
    /// The render surface became available.
    SurfaceReady,
}

/// An event delivered by the host to a subscribed listener.
#[derive(Debug, Clone, PartialEq)]
pub enum HostEvent {
    /// Touch start with all active touches.
    TouchStart(TouchList),
    /// Touch move with all active touches.
    TouchMove(TouchList),
    /// Touch end with the remaining touches.
    TouchEnd(TouchList),
    /// Immersive presentation started.
    EnterImmersive,
    /// Immersive presentation ended.
    ExitImmersive,
    /// The render surface was created.
    SurfaceReady,
}

impl HostEvent {
    /// Returns the kind used to route this event to listeners.
    #[must_use]
    pub fn kind(&self) -> EventKind {
        match self {
            HostEvent::TouchStart(_) => EventKind::TouchStart,
            HostEvent::TouchMove(_) => EventKind::TouchMove,
            HostEvent::TouchEnd(_) => EventKind::TouchEnd,
            HostEvent::EnterImmersive => EventKind::EnterImmersive,
            HostEvent::ExitImmersive => EventKind::ExitImmersive,
            HostEvent::SurfaceReady => EventKind::SurfaceReady,
        }
    }
}

/// Handle to a subscription registered with the host.
///
/// Unsubscribing with the same handle removes exactly the listener it names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ListenerId(pub u64);
