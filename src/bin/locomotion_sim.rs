//! Locomotion Simulator - Headless Controller Walkthrough
//!
//! Run with: `cargo run --bin locomotion_sim -- [config.json]`
//!
//! Drives a first-person controller over a gentle ramp for four seconds at
//! 50 Hz with a scripted input timeline:
//! - 0.0s - 1.0s: walk forward while turning right
//! - 1.0s - 1.8s: sprint forward
//! - 1.8s: jump
//! - 2.0s - 2.8s: crouch-walk
//! - 2.8s - 3.4s: back-pedal while looking up
//! - 3.4s - 4.0s: stand still
//!
//! Set `RUST_LOG=debug` to see stance changes and jumps, `RUST_LOG=trace` for
//! every move.

use std::error::Error;
use std::path::Path;

use fp_locomotion_engine::camera::CameraTransform;
use fp_locomotion_engine::input::{FpsMouseState, InputSampler, KeyCode, MovementKeys};
use fp_locomotion_engine::physics::{CharacterMover, KinematicBody};
use fp_locomotion_engine::{ControllerConfig, LocomotionController};
use glam::Vec3;

const FRAME_TIME: f32 = 0.02;
const FRAME_COUNT: u32 = 200;
const REPORT_EVERY: u32 = 10;

/// Walkable slope of the simulated body, in degrees
const SLOPE_LIMIT: f32 = 40.0;

/// Ground rises 5cm per meter travelled along -Z.
fn ramp(_x: f32, z: f32) -> f32 {
    (-z * 0.05).max(0.0)
}

/// Key and mouse events for one frame of the script.
fn script(frame: u32, keys: &mut MovementKeys, mouse: &mut FpsMouseState) {
    match frame {
        0 => {
            keys.handle_key(KeyCode::W, true);
        }
        50 => {
            keys.handle_key(KeyCode::ShiftLeft, true);
        }
        90 => {
            keys.handle_key(KeyCode::Space, true);
        }
        95 => {
            keys.handle_key(KeyCode::Space, false);
            keys.handle_key(KeyCode::ShiftLeft, false);
        }
        100 => {
            keys.handle_key(KeyCode::ControlLeft, true);
        }
        140 => {
            keys.handle_key(KeyCode::ControlLeft, false);
            keys.handle_key(KeyCode::W, false);
            keys.handle_key(KeyCode::S, true);
        }
        170 => {
            keys.reset();
        }
        _ => {}
    }

    if frame < 50 {
        mouse.accumulate_delta(1.5, 0.0);
    } else if (140..170).contains(&frame) {
        // Screen-space up
        mouse.accumulate_delta(0.0, -1.0);
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let config = match std::env::args().nth(1) {
        Some(path) => ControllerConfig::load(Path::new(&path))?,
        None => ControllerConfig::default(),
    };

    let body = KinematicBody::new(Vec3::ZERO, ramp).with_slope_limit(SLOPE_LIMIT);
    let camera = CameraTransform::at_height(1.6);
    let mut controller = LocomotionController::from_config(&config, body, Some(camera))?;

    let mut keys = MovementKeys::new();
    let mut mouse = FpsMouseState::new();
    mouse.set_captured(true);
    let mut sampler = InputSampler::new();

    println!("=== Locomotion Simulator ===");
    println!(
        "jump speed {:.3} m/s, gravity {:.2} m/s^2, {} frames at {:.0} Hz",
        controller.jump_speed(),
        config.locomotion.gravity,
        FRAME_COUNT,
        1.0 / FRAME_TIME
    );
    println!();
    println!(
        "{:>5}  {:>22}  {:>9}  {:>6}  {:>8}  {:>6}  {:>6}  {:>6}",
        "time", "position", "stance", "sprint", "grounded", "vy", "yaw", "pitch"
    );

    for frame in 0..FRAME_COUNT {
        script(frame, &mut keys, &mut mouse);
        let input = sampler.sample(&keys, &mut mouse);
        let report = controller.update(FRAME_TIME, &input);

        if report.jumped {
            println!("  -- jump at {:.2}s", frame as f32 * FRAME_TIME);
        }

        if (frame + 1) % REPORT_EVERY == 0 {
            let body = controller.mover();
            let position = body.position;
            println!(
                "{:>5.2}  ({:>6.2}, {:>5.2}, {:>6.2})  {:>9}  {:>6}  {:>8}  {:>6.2}  {:>6.1}  {:>6.1}",
                (frame + 1) as f32 * FRAME_TIME,
                position.x,
                position.y,
                position.z,
                format!("{:?}", report.stance),
                report.sprinting,
                body.is_grounded(),
                report.vertical_speed,
                report.look.yaw_degrees,
                report.look.pitch_degrees,
            );
        }
    }

    let travel = controller.mover().requested_travel();
    println!();
    println!(
        "requested travel ({:.2}, {:.2}, {:.2}), final eye height {:.2}",
        travel.x,
        travel.y,
        travel.z,
        controller.camera().map_or(0.0, |c| c.position.y)
    );

    Ok(())
}
