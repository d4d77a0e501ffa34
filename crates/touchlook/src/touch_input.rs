//! Translation of per-finger window touch events into touch lists.
//!
//! A windowing system reports one finger per event. The controls expect
//! every event to carry all fingers on the surface, and a touch-end to carry
//! the fingers that remain. [`TouchTracker`] keeps the active fingers in the
//! order they went down and builds those lists.

use glam::Vec2;
use touchlook_core::{HostEvent, TouchList};
use winit::dpi::PhysicalPosition;
use winit::event::{Touch, TouchPhase};

/// Active fingers keyed by their touch id, in touch-down order.
#[derive(Debug, Clone, Default)]
pub struct TouchTracker {
    active: Vec<(u64, Vec2)>,
}

impl TouchTracker {
    /// Creates a tracker with no fingers down.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Converts a window touch event.
    pub fn handle(&mut self, touch: &Touch) -> HostEvent {
        self.apply(touch.id, touch.phase, touch.location)
    }

    /// Records one finger's phase change and returns the event for the controls.
    ///
    /// A cancelled touch is reported as a touch-end.
    pub fn apply(
        &mut self,
        id: u64,
        phase: TouchPhase,
        location: PhysicalPosition<f64>,
    ) -> HostEvent {
        let point = to_point(location);
        match phase {
            TouchPhase::Started => {
                self.upsert(id, point);
                HostEvent::TouchStart(self.touch_list())
            }
            TouchPhase::Moved => {
                self.upsert(id, point);
                HostEvent::TouchMove(self.touch_list())
            }
            TouchPhase::Ended | TouchPhase::Cancelled => {
                self.active.retain(|(active, _)| *active != id);
                HostEvent::TouchEnd(self.touch_list())
            }
        }
    }

    /// The fingers currently down.
    #[must_use]
    pub fn touch_list(&self) -> TouchList {
        TouchList(self.active.iter().map(|(_, point)| *point).collect())
    }

    /// Number of fingers down.
    #[must_use]
    pub fn len(&self) -> usize {
        self.active.len()
    }

    /// Returns true when no finger is down.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }

    /// Forgets every finger, e.g. when the window loses focus.
    pub fn clear(&mut self) {
        self.active.clear();
    }

    fn upsert(&mut self, id: u64, point: Vec2) {
        match self.active.iter_mut().find(|(active, _)| *active == id) {
            Some((_, existing)) => *existing = point,
            None => self.active.push((id, point)),
        }
    }
}

#[allow(clippy::cast_possible_truncation)]
fn to_point(location: PhysicalPosition<f64>) -> Vec2 {
    Vec2::new(location.x as f32, location.y as f32)
}
