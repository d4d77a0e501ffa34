//! In-memory host for running the controls without a scene graph.
//!
//! Provides an entity, a render surface, a default look controller and a
//! listener registry, and routes events to the controls the way a real host
//! would. Useful for integration tests, gesture replays, and embedding the
//! controls in runtimes that bring their own input loop.

use std::collections::{BTreeMap, BTreeSet};

use glam::{EulerRot, Vec2, Vec3};
use touchlook_controls::ComposeOutcome;
use touchlook_core::{
    Entity, EventKind, Host, HostEvent, ListenerId, LookController, RenderSurface, TouchList,
};

use crate::component::MultitouchLookControls;

/// Entity pose stored in memory.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeadlessEntity {
    /// Rotation in degrees.
    pub rotation: Vec3,
    /// Position in world units.
    pub position: Vec3,
    /// Euler order the rotation is applied in.
    pub rotation_order: EulerRot,
}

impl Default for HeadlessEntity {
    fn default() -> Self {
        Self {
            rotation: Vec3::ZERO,
            position: Vec3::ZERO,
            rotation_order: EulerRot::XYZ,
        }
    }
}

impl Entity for HeadlessEntity {
    fn rotation(&self) -> Vec3 {
        self.rotation
    }

    fn set_rotation(&mut self, rotation: Vec3) {
        self.rotation = rotation;
    }

    fn position(&self) -> Vec3 {
        self.position
    }

    fn set_position(&mut self, position: Vec3) {
        self.position = position;
    }

    fn set_rotation_order(&mut self, order: EulerRot) {
        self.rotation_order = order;
    }
}

/// Render surface with a fixed size and a set of style classes.
#[derive(Debug, Clone, PartialEq)]
pub struct HeadlessSurface {
    /// Width in pixels.
    pub width: f32,
    /// Height in pixels.
    pub height: f32,
    classes: BTreeSet<String>,
}

impl HeadlessSurface {
    /// Creates a surface of the given size with no classes.
    #[must_use]
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            classes: BTreeSet::new(),
        }
    }
}

impl RenderSurface for HeadlessSurface {
    fn client_width(&self) -> f32 {
        self.width
    }

    fn client_height(&self) -> f32 {
        self.height
    }

    fn set_class(&mut self, class: &str, on: bool) {
        if on {
            self.classes.insert(class.to_string());
        } else {
            self.classes.remove(class);
        }
    }

    fn has_class(&self, class: &str) -> bool {
        self.classes.contains(class)
    }
}

/// Default look controller that only records its play state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeadlessLookController {
    playing: bool,
}

impl LookController for HeadlessLookController {
    fn play(&mut self) {
        self.playing = true;
    }

    fn pause(&mut self) {
        self.playing = false;
    }

    fn is_playing(&self) -> bool {
        self.playing
    }
}

/// A complete in-memory host.
#[derive(Debug, Clone)]
pub struct HeadlessHost {
    /// The camera entity.
    pub entity: HeadlessEntity,
    mobile: bool,
    surface: Option<HeadlessSurface>,
    look: Option<HeadlessLookController>,
    listeners: BTreeMap<ListenerId, EventKind>,
    next_listener: u64,
}

impl HeadlessHost {
    fn new(mobile: bool, width: f32, height: f32) -> Self {
        Self {
            entity: HeadlessEntity::default(),
            mobile,
            surface: Some(HeadlessSurface::new(width, height)),
            look: None,
            listeners: BTreeMap::new(),
            next_listener: 0,
        }
    }

    /// A touch device with a render surface of the given size.
    #[must_use]
    pub fn mobile(width: f32, height: f32) -> Self {
        Self::new(true, width, height)
    }

    /// A non-touch device with a render surface of the given size.
    #[must_use]
    pub fn desktop(width: f32, height: f32) -> Self {
        Self::new(false, width, height)
    }

    /// Removes the render surface; create it later with [`create_surface`](Self::create_surface).
    #[must_use]
    pub fn without_surface(mut self) -> Self {
        self.surface = None;
        self
    }

    /// Sets the starting entity position.
    #[must_use]
    pub fn with_position(mut self, position: Vec3) -> Self {
        self.entity.position = position;
        self
    }

    /// The render surface, if created.
    #[must_use]
    pub fn surface(&self) -> Option<&HeadlessSurface> {
        self.surface.as_ref()
    }

    /// The default look controller, if it has been created.
    #[must_use]
    pub fn look(&self) -> Option<&HeadlessLookController> {
        self.look.as_ref()
    }

    /// Handles currently subscribed for `kind`.
    #[must_use]
    pub fn listeners(&self, kind: EventKind) -> Vec<ListenerId> {
        self.listeners
            .iter()
            .filter(|(_, subscribed)| **subscribed == kind)
            .map(|(listener, _)| *listener)
            .collect()
    }

    /// Total number of live subscriptions.
    #[must_use]
    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    /// Delivers `event` to every listener subscribed for its kind.
    ///
    /// A listener removed while the event is being delivered does not receive it.
    pub fn dispatch(&mut self, controls: &mut MultitouchLookControls, event: &HostEvent) {
        for listener in self.listeners(event.kind()) {
            if self.listeners.contains_key(&listener) {
                controls.on_event(self, listener, event);
            }
        }
    }

    /// Creates the render surface and announces it.
    pub fn create_surface(&mut self, controls: &mut MultitouchLookControls, width: f32, height: f32) {
        self.surface = Some(HeadlessSurface::new(width, height));
        self.dispatch(controls, &HostEvent::SurfaceReady);
    }

    /// Dispatches a touch-start with the given active touches.
    pub fn touch_start(&mut self, controls: &mut MultitouchLookControls, touches: &[Vec2]) {
        self.dispatch(controls, &HostEvent::TouchStart(TouchList::new(touches)));
    }

    /// Dispatches a touch-move with the given active touches.
    pub fn touch_move(&mut self, controls: &mut MultitouchLookControls, touches: &[Vec2]) {
        self.dispatch(controls, &HostEvent::TouchMove(TouchList::new(touches)));
    }

    /// Dispatches a touch-end with the touches that remain.
    pub fn touch_end(&mut self, controls: &mut MultitouchLookControls, remaining: &[Vec2]) {
        self.dispatch(controls, &HostEvent::TouchEnd(TouchList::new(remaining)));
    }

    /// Runs one frame.
    pub fn frame(&mut self, controls: &mut MultitouchLookControls) -> ComposeOutcome {
        controls.tick(self)
    }
}

impl Host for HeadlessHost {
    fn entity(&mut self) -> &mut dyn Entity {
        &mut self.entity
    }

    fn is_mobile(&self) -> bool {
        self.mobile
    }

    fn render_surface(&mut self) -> Option<&mut dyn RenderSurface> {
        self.surface
            .as_mut()
            .map(|surface| surface as &mut dyn RenderSurface)
    }

    fn look_controller(&mut self) -> &mut dyn LookController {
        self.look.get_or_insert_with(HeadlessLookController::default)
    }

    fn subscribe(&mut self, kind: EventKind) -> ListenerId {
        let listener = ListenerId(self.next_listener);
        self.next_listener += 1;
        self.listeners.insert(listener, kind);
        listener
    }

    fn unsubscribe(&mut self, listener: ListenerId) -> bool {
        self.listeners.remove(&listener).is_some()
    }
}
