//! Grab-cursor affordance on the render surface.

use touchlook_core::{EventKind, Host, ListenerId};

/// Style class shown on the render surface while the touch controls are enabled.
pub const GRAB_CURSOR_CLASS: &str = "a-grab-cursor";

/// Toggles the grab cursor, deferring until the surface exists.
///
/// At most one surface-ready subscription is pending; the most recently
/// requested state is the one applied when it fires.
#[derive(Debug, Default)]
pub struct GrabCursor {
    pending: Option<(ListenerId, bool)>,
}

impl GrabCursor {
    /// Creates a cursor toggle with nothing pending.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The state waiting for the surface, if any.
    #[must_use]
    pub fn pending(&self) -> Option<bool> {
        self.pending.map(|(_, on)| on)
    }

    /// Shows or hides the grab cursor.
    pub fn set(&mut self, host: &mut dyn Host, on: bool) {
        let applied = match host.render_surface() {
            Some(surface) => {
                surface.set_class(GRAB_CURSOR_CLASS, on);
                true
            }
            None => false,
        };
        if applied {
            self.cancel(host);
            return;
        }

        if let Some((_, state)) = self.pending.as_mut() {
            *state = on;
            return;
        }
        let listener = host.subscribe(EventKind::SurfaceReady);
        log::debug!("no render surface yet, deferring grab cursor");
        self.pending = Some((listener, on));
    }

    /// Applies the deferred state if `listener` is the pending subscription.
    ///
    /// Returns whether the event was consumed.
    pub fn on_surface_ready(&mut self, host: &mut dyn Host, listener: ListenerId) -> bool {
        match self.pending {
            Some((pending, on)) if pending == listener => {
                self.pending = None;
                host.unsubscribe(listener);
                if let Some(surface) = host.render_surface() {
                    surface.set_class(GRAB_CURSOR_CLASS, on);
                }
                true
            }
            _ => false,
        }
    }

    /// Drops the pending subscription, if any.
    pub fn cancel(&mut self, host: &mut dyn Host) {
        if let Some((listener, _)) = self.pending.take() {
            host.unsubscribe(listener);
        }
    }
}
