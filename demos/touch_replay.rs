//! Replays a recorded touch session through the multitouch look controls.
//!
//! Window touch events (one finger per event) go through a `TouchTracker`,
//! are dispatched on a headless host, and one frame runs after each event.
//! Run with `RUST_LOG=debug` to see the controls' decisions.

use touchlook::{HeadlessHost, LookConfig, MultitouchLookControls, Result, TouchTracker};
use winit::dpi::PhysicalPosition;
use winit::event::TouchPhase;

/// One recorded window touch: finger id, phase, and position in pixels.
type Sample = (u64, TouchPhase, f64, f64);

fn session() -> Vec<Sample> {
    let mut samples = vec![(0, TouchPhase::Started, 200.0, 400.0)];

    // Look right with one finger.
    for step in 1..=10 {
        samples.push((0, TouchPhase::Moved, 200.0 + f64::from(step) * 12.0, 400.0));
    }
    samples.push((0, TouchPhase::Ended, 320.0, 400.0));

    // Pinch out to walk forward.
    samples.push((1, TouchPhase::Started, 150.0, 500.0));
    samples.push((2, TouchPhase::Started, 250.0, 500.0));
    for step in 1..=10 {
        let spread = f64::from(step) * 8.0;
        samples.push((1, TouchPhase::Moved, 150.0 - spread, 500.0));
        samples.push((2, TouchPhase::Moved, 250.0 + spread, 500.0));
    }

    // Lift one finger and keep looking with the other.
    samples.push((1, TouchPhase::Ended, 70.0, 500.0));
    for step in 1..=5 {
        samples.push((2, TouchPhase::Moved, 330.0 - f64::from(step) * 6.0, 500.0));
    }
    samples.push((2, TouchPhase::Cancelled, 300.0, 500.0));
    samples
}

fn main() -> Result<()> {
    env_logger::init();

    let config: LookConfig = "maxPitch: 30; minPitch: -30; zrange: -4 1".parse()?;
    let mut host = HeadlessHost::mobile(360.0, 720.0);
    let mut controls = MultitouchLookControls::init(&mut host, config)?;
    controls.play(&mut host);

    let mut tracker = TouchTracker::new();
    for (id, phase, x, y) in session() {
        let event = tracker.apply(id, phase, PhysicalPosition::new(x, y));
        host.dispatch(&mut controls, &event);
        let outcome = host.frame(&mut controls);
        if outcome.rotated || outcome.moved {
            println!(
                "{phase:?} fingers={} rotation={:?} position={:?}",
                tracker.len(),
                host.entity.rotation,
                host.entity.position
            );
        }
    }

    println!("bounds: {:?}", controls.bounds());
    controls.remove(&mut host);
    Ok(())
}
