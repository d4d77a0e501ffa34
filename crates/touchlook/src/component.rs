//! The multitouch look controls plugin.

use glam::Vec3;
use touchlook_controls::{compose, ComposeOutcome, Dolly, GestureTracker, Orientation};
use touchlook_core::{Bounds, EventKind, Host, HostEvent, ListenerId, LookConfig, Result};

use crate::cursor::GrabCursor;
use crate::listeners::TouchAttachment;
use crate::mode::{ActiveController, Mode, ModeController};

/// Handles of the immersive-mode subscriptions.
#[derive(Debug, Clone, Copy)]
struct ImmersiveListeners {
    enter: ListenerId,
    exit: ListenerId,
}

/// Touch camera controls attached to a host entity.
///
/// The host drives the lifecycle the same way it drives any entity component:
///
/// 1. [`init`](Self::init) once when attached,
/// 2. [`play`](Self::play) / [`pause`](Self::pause) as the entity starts and stops,
/// 3. [`update`](Self::update) whenever the configuration changes,
/// 4. [`tick`](Self::tick) once per frame,
/// 5. [`on_event`](Self::on_event) for every event on a subscribed listener,
/// 6. [`remove`](Self::remove) when detached.
///
/// On a non-touch device the controls disable themselves for good and hand
/// the camera to the host's default look controller.
#[derive(Debug)]
pub struct MultitouchLookControls {
    config: LookConfig,
    mode: ModeController,
    enabled: bool,
    playing: bool,
    tracker: GestureTracker,
    orientation: Orientation,
    dolly: Dolly,
    bounds: Bounds,
    /// Configuration the bounds and pitch limits were last built from.
    anchored: LookConfig,
    touch: TouchAttachment,
    cursor: GrabCursor,
    immersive: Option<ImmersiveListeners>,
    /// Entity rotation at the moment immersive mode was entered.
    saved_rotation: Option<Vec3>,
}

impl MultitouchLookControls {
    /// Attaches the controls to the host entity.
    ///
    /// The default look controller is created if needed and paused, unless the
    /// device is not a touch device, in which case it keeps the camera.
    pub fn init(host: &mut dyn Host, config: LookConfig) -> Result<Self> {
        config.validate()?;

        host.look_controller().pause();
        let mode = ModeController::new(host.is_mobile());
        let anchor = host.entity().position();

        let mut controls = Self {
            orientation: Orientation::new(config.pitch_limits()),
            bounds: Bounds::from_config(anchor, &config),
            anchored: config.clone(),
            config,
            mode,
            enabled: false,
            playing: false,
            tracker: GestureTracker::new(),
            dolly: Dolly::new(),
            touch: TouchAttachment::Detached,
            cursor: GrabCursor::new(),
            immersive: None,
            saved_rotation: None,
        };

        if controls.mode.mode() == Mode::Desktop {
            controls.config.enabled = false;
            controls.cursor.set(host, false);
            host.look_controller().play();
            log::info!("not a touch device, using the default look controller");
            return Ok(controls);
        }

        controls.enabled = controls.config.enabled;
        controls.cursor.set(host, controls.enabled);
        controls.immersive = Some(ImmersiveListeners {
            enter: host.subscribe(EventKind::EnterImmersive),
            exit: host.subscribe(EventKind::ExitImmersive),
        });
        if controls.enabled {
            controls.compose_pass(host);
        }
        log::info!("multitouch look controls attached, bounds {:?}", controls.bounds);
        Ok(controls)
    }

    /// Replaces the configuration.
    ///
    /// An invalid configuration is rejected and the current one stays in
    /// force. When the ranges or pitch limits change on an enabled
    /// configuration, the bounds are re-anchored on the entity's current
    /// position and the accumulators restart from zero without moving the
    /// camera.
    pub fn update(&mut self, host: &mut dyn Host, config: LookConfig) -> Result<()> {
        config.validate()?;

        if self.mode.mode() == Mode::Desktop {
            if config.enabled {
                log::debug!("ignoring enable request on a non-touch device");
            }
            self.config = LookConfig {
                enabled: false,
                ..config
            };
            return Ok(());
        }

        self.config = config;
        self.apply_enabled(host);
        if !self.config.enabled || !self.anchored.limits_differ(&self.config) {
            return Ok(());
        }
        self.anchored = self.config.clone();

        self.orientation.reset();
        self.orientation.set_pitch_limits(self.config.pitch_limits());
        self.dolly.reset();
        self.bounds = Bounds::from_config(host.entity().position(), &self.config);
        log::debug!("bounds recomputed: {:?}", self.bounds);

        self.compose_pass(host);
        Ok(())
    }

    /// Applies the rotation and movement accumulated since the last frame.
    pub fn tick(&mut self, host: &mut dyn Host) -> ComposeOutcome {
        if !self.enabled {
            return ComposeOutcome::default();
        }
        self.compose_pass(host)
    }

    /// Starts listening for touches, if the controls are enabled.
    pub fn play(&mut self, host: &mut dyn Host) {
        self.playing = true;
        self.sync_listeners(host);
    }

    /// Stops listening for touches.
    pub fn pause(&mut self, host: &mut dyn Host) {
        self.playing = false;
        self.sync_listeners(host);
    }

    /// Detaches the controls from the host and drops every subscription.
    pub fn remove(&mut self, host: &mut dyn Host) {
        self.pause(host);
        if let Some(immersive) = self.immersive.take() {
            host.unsubscribe(immersive.enter);
            host.unsubscribe(immersive.exit);
        }
        self.cursor.cancel(host);
        log::info!("multitouch look controls removed");
    }

    /// Handles an event delivered on `listener`.
    pub fn on_event(&mut self, host: &mut dyn Host, listener: ListenerId, event: &HostEvent) {
        let kind = event.kind();
        match event {
            HostEvent::TouchStart(touches) if self.touch.accepts(listener, kind) => {
                self.tracker.touch_start(touches);
            }
            HostEvent::TouchMove(touches) if self.touch.accepts(listener, kind) => {
                let Some(size) = host.render_surface().map(|surface| surface.size()) else {
                    return;
                };
                self.tracker
                    .touch_move(touches, size, &mut self.orientation, &mut self.dolly);
            }
            HostEvent::TouchEnd(touches) if self.touch.accepts(listener, kind) => {
                self.tracker.touch_end(touches);
            }
            HostEvent::EnterImmersive if self.is_immersive_listener(listener, kind) => {
                self.enter_immersive(host);
            }
            HostEvent::ExitImmersive if self.is_immersive_listener(listener, kind) => {
                self.exit_immersive(host);
            }
            HostEvent::SurfaceReady => {
                let cursor = self.cursor.on_surface_ready(host, listener);
                let touch = self.touch.on_surface_ready(host, listener);
                if !cursor && !touch {
                    log::trace!("surface ready on unknown listener {listener:?}");
                }
            }
            _ => log::trace!("ignoring {kind:?} on stale listener {listener:?}"),
        }
    }

    /// Whether the controls currently drive the camera.
    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Whether touch listeners are live.
    #[must_use]
    pub fn is_listening(&self) -> bool {
        self.touch.is_attached()
    }

    /// The current mode.
    #[must_use]
    pub fn mode(&self) -> Mode {
        self.mode.mode()
    }

    /// The controller that owns the camera.
    #[must_use]
    pub fn active_controller(&self) -> ActiveController {
        self.mode.active_controller()
    }

    /// The configuration in force.
    #[must_use]
    pub fn config(&self) -> &LookConfig {
        &self.config
    }

    /// The position bounds in force.
    #[must_use]
    pub fn bounds(&self) -> &Bounds {
        &self.bounds
    }

    /// The yaw/pitch accumulator.
    #[must_use]
    pub fn orientation(&self) -> &Orientation {
        &self.orientation
    }

    /// The dolly accumulator.
    #[must_use]
    pub fn dolly(&self) -> &Dolly {
        &self.dolly
    }

    /// The gesture tracker.
    #[must_use]
    pub fn tracker(&self) -> &GestureTracker {
        &self.tracker
    }

    fn compose_pass(&mut self, host: &mut dyn Host) -> ComposeOutcome {
        compose(
            host.entity(),
            &mut self.orientation,
            &mut self.dolly,
            &self.bounds,
        )
    }

    fn is_immersive_listener(&self, listener: ListenerId, kind: EventKind) -> bool {
        self.immersive.is_some_and(|immersive| match kind {
            EventKind::EnterImmersive => immersive.enter == listener,
            EventKind::ExitImmersive => immersive.exit == listener,
            _ => false,
        })
    }

    /// Recomputes the enabled state and brings the cursor and listeners in line.
    fn apply_enabled(&mut self, host: &mut dyn Host) {
        let enabled =
            self.config.enabled && self.mode.active_controller() == ActiveController::Touch;
        if enabled != self.enabled {
            self.enabled = enabled;
            self.cursor.set(host, enabled);
            log::debug!("multitouch look controls enabled: {enabled}");
        }
        self.sync_listeners(host);
    }

    fn sync_listeners(&mut self, host: &mut dyn Host) {
        if self.playing && self.enabled {
            self.touch.attach(host);
        } else {
            self.touch.detach(host);
            self.tracker.reset();
        }
    }

    fn enter_immersive(&mut self, host: &mut dyn Host) {
        if self.mode.enter_immersive().is_none() {
            return;
        }
        self.playing = false;
        self.apply_enabled(host);
        let entity = host.entity();
        self.saved_rotation = Some(entity.rotation());
        entity.set_rotation(Vec3::ZERO);
        host.look_controller().play();
        log::debug!("entered immersive mode, default look controller active");
    }

    fn exit_immersive(&mut self, host: &mut dyn Host) {
        if self.mode.exit_immersive().is_none() {
            return;
        }
        host.look_controller().pause();
        // Drop the head rotation and resume the pose from before immersive mode.
        let rotation = self.saved_rotation.take().unwrap_or(Vec3::ZERO);
        host.entity().set_rotation(rotation);
        self.playing = true;
        self.apply_enabled(host);
        if self.enabled {
            self.compose_pass(host);
        }
        log::debug!("left immersive mode, multitouch look controls active");
    }
}
