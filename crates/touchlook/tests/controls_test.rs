//! Integration tests for the multitouch look controls.
//!
//! Every test drives the controls through a [`HeadlessHost`], the same way a
//! scene would: lifecycle calls, event dispatch, and one `frame` per tick.

use proptest::prelude::*;
use touchlook::*;

const WIDTH: f32 = 1000.0;
const HEIGHT: f32 = 800.0;

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn p(x: f32, y: f32) -> Vec2 {
    Vec2::new(x, y)
}

/// A playing instance on a 1000x800 touch device.
fn playing(host: HeadlessHost, config: LookConfig) -> (HeadlessHost, MultitouchLookControls) {
    init_logging();
    let mut host = host;
    let mut controls = MultitouchLookControls::init(&mut host, config).expect("init failed");
    controls.play(&mut host);
    (host, controls)
}

fn mobile() -> (HeadlessHost, MultitouchLookControls) {
    playing(HeadlessHost::mobile(WIDTH, HEIGHT), LookConfig::default())
}

fn drag(host: &mut HeadlessHost, controls: &mut MultitouchLookControls, from: Vec2, to: Vec2) {
    host.touch_start(controls, &[from]);
    host.touch_move(controls, &[to]);
    host.touch_end(controls, &[]);
}

#[test]
fn test_one_finger_drag_turns_camera() {
    let (mut host, mut controls) = mobile();
    assert!(controls.is_listening());
    assert_eq!(host.entity.rotation_order, EulerRot::YXZ);

    host.touch_start(&mut controls, &[p(500.0, 400.0)]);
    host.touch_move(&mut controls, &[p(600.0, 400.0)]);
    // Nothing is written until the next tick.
    assert_eq!(host.entity.rotation, Vec3::ZERO);

    let outcome = host.frame(&mut controls);
    assert!(outcome.rotated);
    assert!(!outcome.moved);
    assert!((controls.orientation().yaw().to_degrees() + 7.2).abs() < 1e-3);
    assert!((host.entity.rotation.y - 7.2).abs() < 1e-3);
    assert_eq!(host.entity.rotation.x, 0.0);

    // A second tick without input writes nothing.
    assert_eq!(host.frame(&mut controls), ComposeOutcome::default());
}

#[test]
fn test_vertical_drag_respects_pitch_limits() {
    let (mut host, mut controls) = mobile();
    // Drag up repeatedly; each sample stays below the glitch threshold.
    for step in 0..20 {
        let y = 700.0 - step as f32 * 30.0;
        host.touch_start(&mut controls, &[p(500.0, y)]);
        host.touch_move(&mut controls, &[p(500.0, y - 30.0)]);
        host.touch_end(&mut controls, &[]);
        host.frame(&mut controls);
    }
    // Dragging up raises the accumulated pitch to its 15° ceiling.
    assert!((controls.orientation().pitch().to_degrees() - 15.0).abs() < 1e-3);
    assert!((host.entity.rotation.x + 15.0).abs() < 1e-3);
}

#[test]
fn test_bounds_from_ranges() {
    let (_, controls) = mobile();
    assert_eq!(controls.bounds().min.x, -5.0);
    assert_eq!(controls.bounds().max.x, 5.0);
    assert_eq!(controls.bounds().min.y, -1.0);
    assert_eq!(controls.bounds().max.y, 1.0);

    let config: LookConfig = "xrange: -2 3".parse().unwrap();
    let host = HeadlessHost::mobile(WIDTH, HEIGHT).with_position(Vec3::new(4.0, 1.6, -2.0));
    let (_, controls) = playing(host, config);
    assert_eq!(controls.bounds().min.x, 2.0);
    assert_eq!(controls.bounds().max.x, 7.0);
    assert_eq!(controls.bounds().min.z, -7.0);
    assert_eq!(controls.bounds().max.z, 3.0);
}

#[test]
fn test_pinch_walks_forward() {
    let (mut host, mut controls) = mobile();
    host.touch_start(&mut controls, &[p(450.0, 400.0), p(550.0, 400.0)]);
    host.touch_move(&mut controls, &[p(450.0, 400.0), p(550.0, 400.0)]);
    host.touch_move(&mut controls, &[p(425.0, 400.0), p(575.0, 400.0)]);
    assert!((controls.dolly().offset().z - 0.1388).abs() < 1e-3);

    let outcome = host.frame(&mut controls);
    assert!(outcome.moved);
    assert!(!outcome.rotated);
    // Facing -Z, spreading the fingers moves the camera forward.
    assert!((host.entity.position.z + 0.1388).abs() < 1e-3);
    assert!(host.entity.position.x.abs() < 1e-6);
}

#[test]
fn test_pan_is_clamped_to_bounds() {
    let (mut host, mut controls) = mobile();
    host.touch_start(&mut controls, &[p(100.0, 400.0), p(200.0, 400.0)]);
    host.touch_move(&mut controls, &[p(100.0, 400.0), p(200.0, 400.0)]);
    // Slide right in small steps far past the X bound.
    for step in 1..=400 {
        let x = step as f32 * 10.0;
        host.touch_move(&mut controls, &[p(100.0 + x, 400.0), p(200.0 + x, 400.0)]);
        host.frame(&mut controls);
    }
    assert_eq!(host.entity.position.x, -5.0);
    assert!(controls.bounds().contains(host.entity.position));
}

#[test]
fn test_two_to_one_finger_does_not_jump() {
    let (mut host, mut controls) = mobile();
    host.touch_start(&mut controls, &[p(100.0, 400.0), p(700.0, 400.0)]);
    host.touch_move(&mut controls, &[p(100.0, 400.0), p(700.0, 400.0)]);
    host.touch_end(&mut controls, &[p(700.0, 400.0)]);
    host.touch_move(&mut controls, &[p(705.0, 400.0)]);
    host.frame(&mut controls);

    // 5 px of motion, not the 300 px between the old midpoint and the finger.
    assert!(host.entity.rotation.y.abs() < 0.5);
    assert!(host.entity.rotation.y > 0.0);
    assert_eq!(host.entity.position, Vec3::ZERO);
}

#[test]
fn test_desktop_hands_camera_to_look_controller() {
    init_logging();
    let mut host = HeadlessHost::desktop(WIDTH, HEIGHT);
    let mut controls = MultitouchLookControls::init(&mut host, LookConfig::default()).unwrap();
    assert_eq!(controls.mode(), Mode::Desktop);
    assert_eq!(controls.active_controller(), ActiveController::Look);
    assert!(!controls.is_enabled());
    assert!(!controls.config().enabled);
    assert!(host.look().unwrap().is_playing());

    controls.play(&mut host);
    assert!(!controls.is_listening());
    assert_eq!(host.listener_count(), 0);
    assert!(!host.surface().unwrap().has_class(GRAB_CURSOR_CLASS));

    // Asking to enable on a non-touch device is accepted but has no effect.
    controls
        .update(&mut host, LookConfig::default().with_enabled(true))
        .unwrap();
    assert!(!controls.is_enabled());
    assert!(!controls.config().enabled);
    assert!(!controls.is_listening());

    // Immersive signals are not subscribed on desktop.
    host.dispatch(&mut controls, &HostEvent::EnterImmersive);
    assert_eq!(controls.mode(), Mode::Desktop);
}

#[test]
fn test_mobile_init_pauses_look_controller() {
    let (host, controls) = mobile();
    assert_eq!(controls.mode(), Mode::MobileNormal);
    assert_eq!(controls.active_controller(), ActiveController::Touch);
    assert!(!host.look().unwrap().is_playing());
    assert!(host.surface().unwrap().has_class(GRAB_CURSOR_CLASS));
    assert_eq!(host.listeners(EventKind::EnterImmersive).len(), 1);
    assert_eq!(host.listeners(EventKind::ExitImmersive).len(), 1);
    assert_eq!(host.listeners(EventKind::TouchMove).len(), 1);
}

#[test]
fn test_waits_for_render_surface() {
    let host = HeadlessHost::mobile(WIDTH, HEIGHT).without_surface();
    let (mut host, mut controls) = playing(host, LookConfig::default());
    assert!(!controls.is_listening());
    assert!(controls.is_enabled());
    // One subscription for the cursor, one for the touch listeners.
    assert_eq!(host.listeners(EventKind::SurfaceReady).len(), 2);
    assert!(host.listeners(EventKind::TouchStart).is_empty());

    host.create_surface(&mut controls, WIDTH, HEIGHT);
    assert!(controls.is_listening());
    assert!(host.surface().unwrap().has_class(GRAB_CURSOR_CLASS));
    assert!(host.listeners(EventKind::SurfaceReady).is_empty());

    drag(&mut host, &mut controls, p(500.0, 400.0), p(600.0, 400.0));
    host.frame(&mut controls);
    assert!((host.entity.rotation.y - 7.2).abs() < 1e-3);
}

#[test]
fn test_pause_before_surface_drops_pending_attach() {
    let host = HeadlessHost::mobile(WIDTH, HEIGHT).without_surface();
    let (mut host, mut controls) = playing(host, LookConfig::default());
    controls.pause(&mut host);
    // Only the cursor is still waiting.
    assert_eq!(host.listeners(EventKind::SurfaceReady).len(), 1);

    host.create_surface(&mut controls, WIDTH, HEIGHT);
    assert!(!controls.is_listening());
    assert!(host.listeners(EventKind::TouchStart).is_empty());
    assert!(host.surface().unwrap().has_class(GRAB_CURSOR_CLASS));
}

#[test]
fn test_immersive_round_trip() {
    let (mut host, mut controls) = mobile();
    drag(&mut host, &mut controls, p(500.0, 400.0), p(600.0, 400.0));
    host.frame(&mut controls);
    assert!((host.entity.rotation.y - 7.2).abs() < 1e-3);

    host.dispatch(&mut controls, &HostEvent::EnterImmersive);
    assert_eq!(controls.mode(), Mode::MobileImmersive);
    assert_eq!(controls.active_controller(), ActiveController::Look);
    assert!(!controls.is_enabled());
    assert!(!controls.is_listening());
    assert_eq!(host.entity.rotation, Vec3::ZERO);
    assert!(host.look().unwrap().is_playing());
    assert!(!host.surface().unwrap().has_class(GRAB_CURSOR_CLASS));

    // Touches reach nobody while immersive.
    host.touch_start(&mut controls, &[p(500.0, 400.0)]);
    host.touch_move(&mut controls, &[p(550.0, 400.0)]);
    assert_eq!(host.frame(&mut controls), ComposeOutcome::default());

    // Head tracking turns the camera.
    host.entity.rotation = Vec3::new(12.0, 80.0, 3.0);

    host.dispatch(&mut controls, &HostEvent::ExitImmersive);
    assert_eq!(controls.mode(), Mode::MobileNormal);
    assert!(controls.is_enabled());
    assert!(controls.is_listening());
    assert!(!host.look().unwrap().is_playing());
    assert!(host.surface().unwrap().has_class(GRAB_CURSOR_CLASS));
    // Head rotation dropped, pre-immersive rotation restored.
    assert!((host.entity.rotation.y - 7.2).abs() < 1e-3);
    assert!(host.entity.rotation.x.abs() < 1e-4);
    assert_eq!(host.entity.rotation.z, 0.0);

    // A repeated exit signal is ignored.
    host.dispatch(&mut controls, &HostEvent::ExitImmersive);
    assert!((host.entity.rotation.y - 7.2).abs() < 1e-3);
}

#[test]
fn test_exit_immersive_restores_starting_rotation() {
    init_logging();
    let mut host = HeadlessHost::mobile(WIDTH, HEIGHT);
    host.entity.rotation = Vec3::new(0.0, 30.0, 0.0);
    let mut controls = MultitouchLookControls::init(&mut host, LookConfig::default()).unwrap();
    controls.play(&mut host);

    drag(&mut host, &mut controls, p(500.0, 400.0), p(600.0, 400.0));
    host.frame(&mut controls);
    let before = host.entity.rotation;
    assert!((before.y - 37.2).abs() < 1e-3);

    host.dispatch(&mut controls, &HostEvent::EnterImmersive);
    assert_eq!(host.entity.rotation, Vec3::ZERO);
    host.entity.rotation = Vec3::new(-5.0, 140.0, 0.0);
    host.dispatch(&mut controls, &HostEvent::ExitImmersive);

    assert_eq!(host.entity.rotation, before);
    assert_eq!(host.frame(&mut controls), ComposeOutcome::default());
}

#[test]
fn test_exit_immersive_restores_rotation_after_update() {
    let (mut host, mut controls) = mobile();
    drag(&mut host, &mut controls, p(500.0, 400.0), p(600.0, 400.0));
    host.frame(&mut controls);
    controls
        .update(&mut host, LookConfig::default().with_xrange(AxisRange::Symmetric(3.0)))
        .unwrap();
    let before = host.entity.rotation;
    assert!((before.y - 7.2).abs() < 1e-3);

    host.dispatch(&mut controls, &HostEvent::EnterImmersive);
    host.dispatch(&mut controls, &HostEvent::ExitImmersive);
    assert_eq!(host.entity.rotation, before);

    // Touch input continues from the restored heading.
    drag(&mut host, &mut controls, p(500.0, 400.0), p(600.0, 400.0));
    host.frame(&mut controls);
    assert!((host.entity.rotation.y - 14.4).abs() < 1e-3);
}

#[test]
fn test_exit_immersive_keeps_configured_disable() {
    let (mut host, mut controls) = mobile();
    host.dispatch(&mut controls, &HostEvent::EnterImmersive);
    controls
        .update(&mut host, LookConfig::default().with_enabled(false))
        .unwrap();
    host.dispatch(&mut controls, &HostEvent::ExitImmersive);
    assert_eq!(controls.mode(), Mode::MobileNormal);
    assert!(!controls.is_enabled());
    assert!(!controls.is_listening());
}

#[test]
fn test_update_reanchors_without_jump() {
    let (mut host, mut controls) = mobile();
    drag(&mut host, &mut controls, p(500.0, 400.0), p(600.0, 400.0));
    host.touch_start(&mut controls, &[p(450.0, 400.0), p(550.0, 400.0)]);
    host.touch_move(&mut controls, &[p(450.0, 400.0), p(550.0, 400.0)]);
    host.touch_move(&mut controls, &[p(400.0, 400.0), p(600.0, 400.0)]);
    host.touch_end(&mut controls, &[]);
    host.frame(&mut controls);
    let pose = host.entity;
    assert_ne!(pose.position, Vec3::ZERO);

    let config = LookConfig::default().with_xrange(AxisRange::Symmetric(1.0));
    controls.update(&mut host, config).unwrap();

    // Bounds follow the camera, accumulators restart, the pose is untouched.
    let center = (controls.bounds().min + controls.bounds().max) * 0.5;
    assert!((center.x - pose.position.x).abs() < 1e-6);
    assert!((controls.bounds().max.x - controls.bounds().min.x - 2.0).abs() < 1e-6);
    assert_eq!(controls.orientation().yaw(), 0.0);
    assert_eq!(controls.dolly().offset(), Vec3::ZERO);
    assert_eq!(host.entity, pose);
    assert_eq!(host.frame(&mut controls), ComposeOutcome::default());

    // The next drag continues from the current heading.
    drag(&mut host, &mut controls, p(500.0, 400.0), p(600.0, 400.0));
    host.frame(&mut controls);
    assert!((host.entity.rotation.y - pose.rotation.y - 7.2).abs() < 1e-3);
}

#[test]
fn test_update_with_same_limits_keeps_state() {
    let (mut host, mut controls) = mobile();
    drag(&mut host, &mut controls, p(500.0, 400.0), p(600.0, 400.0));
    host.touch_start(&mut controls, &[p(450.0, 400.0), p(550.0, 400.0)]);
    host.touch_move(&mut controls, &[p(450.0, 400.0), p(550.0, 400.0)]);
    host.touch_move(&mut controls, &[p(400.0, 400.0), p(600.0, 400.0)]);
    host.touch_end(&mut controls, &[]);
    host.frame(&mut controls);
    let bounds = *controls.bounds();
    let yaw = controls.orientation().yaw();
    let offset = controls.dolly().offset();
    assert_ne!(host.entity.position, Vec3::ZERO);

    // Only `enabled` is mentioned, so nothing is re-anchored.
    let config = controls.config().merged("enabled: true").unwrap();
    controls.update(&mut host, config).unwrap();
    assert_eq!(*controls.bounds(), bounds);
    assert_eq!(controls.orientation().yaw(), yaw);
    assert_eq!(controls.dolly().offset(), offset);

    // A range change made while disabled applies once re-enabled.
    controls
        .update(
            &mut host,
            LookConfig::default()
                .with_enabled(false)
                .with_xrange(AxisRange::Symmetric(1.0)),
        )
        .unwrap();
    assert_eq!(*controls.bounds(), bounds);
    controls
        .update(&mut host, LookConfig::default().with_xrange(AxisRange::Symmetric(1.0)))
        .unwrap();
    assert!((controls.bounds().max.x - controls.bounds().min.x - 2.0).abs() < 1e-6);
    assert_eq!(controls.orientation().yaw(), 0.0);
}

#[test]
fn test_invalid_update_is_rejected() {
    let (mut host, mut controls) = mobile();
    let before = controls.config().clone();

    let err = controls
        .update(&mut host, LookConfig::default().with_pitch_range(30.0, -30.0))
        .unwrap_err();
    assert!(matches!(err, TouchLookError::InvalidPitchLimits { .. }));
    assert_eq!(controls.config(), &before);
    assert!(controls.is_listening());

    assert!(LookConfig::default().merged("xrange: 3 1").is_err());
    assert!(LookConfig::from_json(r#"{"yrange": "1 2 3"}"#).is_err());
}

#[test]
fn test_update_toggles_enabled() {
    let (mut host, mut controls) = mobile();
    controls
        .update(&mut host, LookConfig::default().with_enabled(false))
        .unwrap();
    assert!(!controls.is_enabled());
    assert!(!controls.is_listening());
    assert!(!host.surface().unwrap().has_class(GRAB_CURSOR_CLASS));
    assert_eq!(host.listeners(EventKind::TouchStart).len(), 0);

    controls.update(&mut host, LookConfig::default()).unwrap();
    assert!(controls.is_enabled());
    assert!(controls.is_listening());
    assert!(host.surface().unwrap().has_class(GRAB_CURSOR_CLASS));
    assert_eq!(host.listeners(EventKind::TouchStart).len(), 1);
}

#[test]
fn test_pause_play_and_remove() {
    let (mut host, mut controls) = mobile();
    assert_eq!(host.listener_count(), 5);

    controls.pause(&mut host);
    assert!(!controls.is_listening());
    assert_eq!(host.listener_count(), 2);
    assert_eq!(host.entity.rotation_order, EulerRot::XYZ);

    // Pausing twice is harmless.
    controls.pause(&mut host);
    assert_eq!(host.listener_count(), 2);

    controls.play(&mut host);
    assert!(controls.is_listening());
    assert_eq!(host.listener_count(), 5);

    controls.remove(&mut host);
    assert!(!controls.is_listening());
    assert_eq!(host.listener_count(), 0);
}

#[test]
fn test_stale_listener_is_ignored() {
    let (mut host, mut controls) = mobile();
    let stale_start = host.listeners(EventKind::TouchStart)[0];
    let stale_move = host.listeners(EventKind::TouchMove)[0];
    controls.pause(&mut host);
    controls.play(&mut host);
    assert_ne!(host.listeners(EventKind::TouchMove)[0], stale_move);

    controls.on_event(
        &mut host,
        stale_start,
        &HostEvent::TouchStart(TouchList::new(vec![p(500.0, 400.0)])),
    );
    assert_eq!(controls.tracker().anchor(), None);
    controls.on_event(
        &mut host,
        stale_move,
        &HostEvent::TouchMove(TouchList::new(vec![p(600.0, 400.0)])),
    );
    assert_eq!(controls.orientation().yaw(), 0.0);
}

#[test]
fn test_window_touches_drive_controls() {
    use winit::dpi::PhysicalPosition;
    use winit::event::TouchPhase;

    let (mut host, mut controls) = mobile();
    let mut tracker = TouchTracker::new();
    let events = [
        (0, TouchPhase::Started, 500.0, 400.0),
        (0, TouchPhase::Moved, 600.0, 400.0),
        (0, TouchPhase::Ended, 600.0, 400.0),
    ];
    for (id, phase, x, y) in events {
        let event = tracker.apply(id, phase, PhysicalPosition::new(x, y));
        host.dispatch(&mut controls, &event);
    }
    host.frame(&mut controls);
    assert!((host.entity.rotation.y - 7.2).abs() < 1e-3);
    assert!(tracker.is_empty());
}

proptest! {
    #[test]
    fn prop_position_stays_in_bounds(
        moves in prop::collection::vec((-40.0f32..40.0, -40.0f32..40.0, -30.0f32..30.0), 1..60),
    ) {
        let (mut host, mut controls) = mobile();
        let mut a = p(400.0, 400.0);
        let mut b = p(600.0, 400.0);
        host.touch_start(&mut controls, &[a, b]);
        for (dx, dy, spread) in moves {
            a += Vec2::new(dx - spread, dy);
            b += Vec2::new(dx + spread, dy);
            host.touch_move(&mut controls, &[a, b]);
            host.frame(&mut controls);
            prop_assert!(controls.bounds().contains(host.entity.position));
        }
    }

    #[test]
    fn prop_pitch_never_leaves_limits(
        drags in prop::collection::vec(-100.0f32..100.0, 1..40),
    ) {
        let (mut host, mut controls) = mobile();
        for dy in drags {
            drag(&mut host, &mut controls, p(500.0, 400.0), p(500.0, 400.0 + dy));
            host.frame(&mut controls);
            let pitch = -host.entity.rotation.x;
            prop_assert!((-20.0 - 1e-3..=15.0 + 1e-3).contains(&pitch));
        }
    }
}
