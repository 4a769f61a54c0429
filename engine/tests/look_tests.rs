//! Look Tests - Clamping, Smoothing and Rotation Output
//!
//! Tests for CameraLookAccumulator driven through its public API.

use fp_locomotion_engine::camera::{
    AxisBounds, CameraLookAccumulator, ClampConfig, ClampMode, LookAccumulator, LookConfig,
    SmoothingConfig,
};
use fp_locomotion_engine::error::ConfigError;
use glam::{Vec2, Vec3};

const EPSILON: f32 = 0.001;

fn approx_eq(a: f32, b: f32) -> bool {
    (a - b).abs() < EPSILON
}

fn config(mode: ClampMode, smoothing: SmoothingConfig) -> LookConfig {
    LookConfig {
        base_speed: 1.0,
        horizontal_multiplier: 1.0,
        vertical_multiplier: 1.0,
        clamp: ClampConfig {
            mode,
            horizontal: AxisBounds::new(-90.0, 90.0),
            vertical: AxisBounds::new(-60.0, 60.0),
        },
        smoothing,
    }
}

fn no_smoothing() -> SmoothingConfig {
    SmoothingConfig {
        enabled: false,
        ..Default::default()
    }
}

fn smoothing(window: usize, strength: f32) -> SmoothingConfig {
    SmoothingConfig {
        enabled: true,
        window,
        strength,
    }
}

// ============================================================================
// Clamping
// ============================================================================

#[test]
fn test_output_stays_within_bounds_under_extreme_input() {
    for strength in [0.0, 0.5, 1.0] {
        let mut look =
            CameraLookAccumulator::new(config(ClampMode::Both, smoothing(10, strength))).unwrap();
        for frame in 0..500 {
            let sign = if frame % 97 < 60 { 1.0 } else { -1.0 };
            let rotation = look.compute_rotation(Vec2::new(sign * 35.0, sign * 23.0));
            assert!(rotation.yaw_degrees >= -90.0 && rotation.yaw_degrees <= 90.0);
            assert!(rotation.pitch_degrees >= -60.0 && rotation.pitch_degrees <= 60.0);
        }
    }
}

#[test]
fn test_saturates_at_upper_bound() {
    let mut look = CameraLookAccumulator::new(config(ClampMode::Both, no_smoothing())).unwrap();
    let mut last = 0.0;
    for _ in 0..200 {
        last = look.compute_rotation(Vec2::new(0.0, 10.0)).pitch_degrees;
    }
    assert_eq!(last, 60.0);
}

#[test]
fn test_pitch_500_degrees_clamps_to_60_not_wrapped() {
    let mut look = CameraLookAccumulator::new(config(ClampMode::Both, no_smoothing())).unwrap();
    // 50 frames of +10 degrees: 500 degrees of requested pitch
    let mut rotation = look.compute_rotation(Vec2::ZERO);
    for _ in 0..50 {
        rotation = look.compute_rotation(Vec2::new(0.0, 10.0));
    }
    assert_eq!(rotation.pitch_degrees, 60.0);
}

#[test]
fn test_single_frame_500_degrees_clamps_to_60() {
    let mut look = CameraLookAccumulator::new(config(ClampMode::Both, no_smoothing())).unwrap();
    // 500 folds to 140 before the bound clamp, still above 60
    let rotation = look.compute_rotation(Vec2::new(0.0, 500.0));
    assert_eq!(rotation.pitch_degrees, 60.0);
}

#[test]
fn test_vertical_mode_leaves_yaw_free() {
    let mut look =
        CameraLookAccumulator::new(config(ClampMode::Vertical, no_smoothing())).unwrap();
    let rotation = look.compute_rotation(Vec2::new(200.0, 200.0));
    assert_eq!(rotation.yaw_degrees, 200.0);
    assert_eq!(rotation.pitch_degrees, 60.0);
}

#[test]
fn test_horizontal_mode_saturates_yaw_only() {
    let mut look =
        CameraLookAccumulator::new(config(ClampMode::Horizontal, smoothing(5, 0.5))).unwrap();
    let mut rotation = look.compute_rotation(Vec2::ZERO);
    for _ in 0..20 {
        rotation = look.compute_rotation(Vec2::new(15.0, 4.0));
        assert!(rotation.yaw_degrees <= 90.0);
    }
    assert!(approx_eq(rotation.yaw_degrees, 90.0));
    assert_eq!(look.state().raw_yaw, 90.0);
    // Pitch bounds are ignored in this mode
    assert_eq!(look.state().raw_pitch, 80.0);
    assert!(rotation.pitch_degrees > 60.0);
}

#[test]
fn test_no_clamp_mode_accumulates_freely() {
    let mut look = CameraLookAccumulator::new(config(ClampMode::None, no_smoothing())).unwrap();
    for _ in 0..10 {
        look.compute_rotation(Vec2::new(50.0, -50.0));
    }
    assert_eq!(look.yaw(), 500.0);
    assert_eq!(look.pitch(), -500.0);
}

// ============================================================================
// Smoothing
// ============================================================================

#[test]
fn test_disabled_smoothing_has_no_lag_or_history() {
    let mut look = CameraLookAccumulator::new(config(ClampMode::Both, no_smoothing())).unwrap();
    let rotation = look.compute_rotation(Vec2::new(12.0, -7.0));
    assert_eq!(rotation.yaw_degrees, 12.0);
    assert_eq!(rotation.pitch_degrees, -7.0);
    assert!(look.state().history_yaw.is_empty());
    assert!(look.state().history_pitch.is_empty());
}

#[test]
fn test_zero_strength_is_instantaneous() {
    let mut look =
        CameraLookAccumulator::new(config(ClampMode::Both, smoothing(5, 0.0))).unwrap();
    let mut expected = 0.0;
    for dx in [3.0, 8.0, -20.0, 1.0, 40.0, -2.0] {
        expected += dx;
        let rotation = look.compute_rotation(Vec2::new(dx, 0.0));
        assert!(approx_eq(rotation.yaw_degrees, expected));
    }
}

#[test]
fn test_full_strength_is_window_mean() {
    let window = 5;
    let mut look =
        CameraLookAccumulator::new(config(ClampMode::None, smoothing(window, 1.0))).unwrap();

    let mut samples = Vec::new();
    let mut raw = 0.0;
    for frame in 0..12 {
        raw += frame as f32;
        samples.push(raw);
        let rotation = look.compute_rotation(Vec2::new(frame as f32, 0.0));

        let recent = &samples[samples.len().saturating_sub(window)..];
        let mean = recent.iter().sum::<f32>() / recent.len() as f32;
        assert!(approx_eq(rotation.yaw_degrees, mean));
    }
}

#[test]
fn test_history_bounded_by_window() {
    for window in [5, 12, 20] {
        let mut look =
            CameraLookAccumulator::new(config(ClampMode::Both, smoothing(window, 0.5))).unwrap();
        for _ in 0..100 {
            look.compute_rotation(Vec2::new(1.0, 1.0));
            assert!(look.state().history_yaw.len() <= window);
            assert!(look.state().history_pitch.len() <= window);
        }
        assert_eq!(look.state().history_yaw.len(), window);
        assert_eq!(look.state().history_yaw.capacity(), window);
    }
}

// ============================================================================
// Configuration and output
// ============================================================================

#[test]
fn test_inverted_bounds_rejected() {
    let mut bad = config(ClampMode::Both, no_smoothing());
    bad.clamp.vertical = AxisBounds::new(30.0, -30.0);
    let result = CameraLookAccumulator::new(bad);
    assert!(matches!(result, Err(ConfigError::InvertedBounds { .. })));
}

#[test]
fn test_window_outside_range_rejected() {
    for window in [0, 4, 21] {
        let result = CameraLookAccumulator::new(config(ClampMode::Both, smoothing(window, 0.5)));
        assert!(matches!(result, Err(ConfigError::SmoothingWindowOutOfRange(_))));
    }
}

#[test]
fn test_rotation_directions() {
    let mut look = CameraLookAccumulator::new(config(ClampMode::None, no_smoothing())).unwrap();

    let right = look.compute_rotation(Vec2::new(90.0, 0.0));
    assert!((right.yaw * Vec3::NEG_Z - Vec3::X).length() < EPSILON);

    look.reset();
    let up = look.compute_rotation(Vec2::new(0.0, 30.0));
    assert!((up.pitch * Vec3::NEG_Z).y > 0.0);
}

#[test]
fn test_gain_scales_input() {
    let mut cfg = config(ClampMode::None, no_smoothing());
    cfg.base_speed = 4.0;
    cfg.horizontal_multiplier = 0.5;
    cfg.vertical_multiplier = 2.0;
    let mut look = CameraLookAccumulator::new(cfg).unwrap();

    let rotation = LookAccumulator::compute_rotation(&mut look, Vec2::new(1.0, 1.0));
    assert!(approx_eq(rotation.yaw_degrees, 2.0));
    assert!(approx_eq(rotation.pitch_degrees, 8.0));
}
