//! Touch listener attachment.
//!
//! Subscriptions are kept as explicit [`ListenerId`] handles so that detaching
//! removes exactly the listeners that were attached. Events that arrive on a
//! handle that is no longer held are ignored.

use glam::EulerRot;
use touchlook_core::{EventKind, Host, ListenerId};

/// Handles of the three touch subscriptions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TouchListeners {
    /// Touch-start subscription.
    pub start: ListenerId,
    /// Touch-move subscription.
    pub moved: ListenerId,
    /// Touch-end subscription.
    pub end: ListenerId,
}

impl TouchListeners {
    fn subscribe(host: &mut dyn Host) -> Self {
        Self {
            start: host.subscribe(EventKind::TouchStart),
            moved: host.subscribe(EventKind::TouchMove),
            end: host.subscribe(EventKind::TouchEnd),
        }
    }

    fn unsubscribe(self, host: &mut dyn Host) {
        host.unsubscribe(self.start);
        host.unsubscribe(self.moved);
        host.unsubscribe(self.end);
    }

    /// Returns the handle subscribed for `kind`, if it is a touch kind.
    #[must_use]
    pub fn handle(&self, kind: EventKind) -> Option<ListenerId> {
        match kind {
            EventKind::TouchStart => Some(self.start),
            EventKind::TouchMove => Some(self.moved),
            EventKind::TouchEnd => Some(self.end),
            _ => None,
        }
    }
}

/// Attachment state of the touch listeners.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TouchAttachment {
    /// No touch listeners.
    #[default]
    Detached,
    /// Waiting for the render surface; holds the surface-ready subscription.
    Pending(ListenerId),
    /// Listening for touches.
    Attached(TouchListeners),
}

impl TouchAttachment {
    /// Whether touch listeners are live.
    #[must_use]
    pub fn is_attached(&self) -> bool {
        matches!(self, TouchAttachment::Attached(_))
    }

    /// Subscribes the touch listeners, or defers until the surface exists.
    ///
    /// Does nothing if already attached or pending.
    pub fn attach(&mut self, host: &mut dyn Host) {
        if *self != TouchAttachment::Detached {
            return;
        }
        // Yaw first, then pitch: turn the head, then lower the chin.
        host.entity().set_rotation_order(EulerRot::YXZ);

        if host.render_surface().is_some() {
            *self = TouchAttachment::Attached(TouchListeners::subscribe(host));
        } else {
            log::debug!("no render surface yet, deferring touch listeners");
            *self = TouchAttachment::Pending(host.subscribe(EventKind::SurfaceReady));
        }
    }

    /// Removes the touch listeners or the pending subscription. Idempotent.
    pub fn detach(&mut self, host: &mut dyn Host) {
        match std::mem::take(self) {
            TouchAttachment::Detached => return,
            TouchAttachment::Pending(listener) => {
                host.unsubscribe(listener);
            }
            TouchAttachment::Attached(listeners) => listeners.unsubscribe(host),
        }
        host.entity().set_rotation_order(EulerRot::XYZ);
    }

    /// Completes a deferred attach if `listener` is the pending subscription.
    ///
    /// Returns whether the event was consumed.
    pub fn on_surface_ready(&mut self, host: &mut dyn Host, listener: ListenerId) -> bool {
        match *self {
            TouchAttachment::Pending(pending) if pending == listener => {
                host.unsubscribe(listener);
                *self = TouchAttachment::Attached(TouchListeners::subscribe(host));
                true
            }
            _ => false,
        }
    }

    /// Whether `listener` is the live subscription for touch events of `kind`.
    #[must_use]
    pub fn accepts(&self, listener: ListenerId, kind: EventKind) -> bool {
        match self {
            TouchAttachment::Attached(listeners) => listeners.handle(kind) == Some(listener),
            _ => false,
        }
    }
}
