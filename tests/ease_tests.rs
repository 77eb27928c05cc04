// Host-side tests for the smoothing and per-frame motion logic.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod core {
    pub mod ease {
        include!("../src/core/ease.rs");
    }
    pub mod motion {
        include!("../src/core/motion.rs");
    }
}

use crate::core::ease::*;
use crate::core::motion::*;

#[test]
fn cubic_out_endpoints_and_midpoint() {
    assert_eq!(cubic_out(0.0), 0.0);
    assert_eq!(cubic_out(1.0), 1.0);
    assert!((cubic_out(0.5) - 0.875).abs() < 1e-6);
    // clamped outside 0..1
    assert_eq!(cubic_out(-1.0), 0.0);
    assert_eq!(cubic_out(2.0), 1.0);
}

#[test]
fn cubic_out_is_monotonic() {
    let mut prev = 0.0;
    for i in 1..=100 {
        let v = cubic_out(i as f32 / 100.0);
        assert!(v >= prev);
        prev = v;
    }
}

#[test]
fn pointer_state_is_last_write_wins() {
    let mut p = PointerState::default();
    for i in 0..10 {
        p.record(i as f32, (i * 2) as f32, 1024.0, 768.0);
    }
    assert_eq!(p.x, 9.0);
    assert_eq!(p.y, 18.0);
    assert_eq!(p.centered_x, 9.0 - 512.0);
    assert_eq!(p.centered_y, 18.0 - 384.0);
}

#[test]
fn cursor_distance_decays_geometrically() {
    let mut follower = CursorFollower::default();
    follower.notify_moved();
    let target = 100.0_f32;
    for k in 1..=20 {
        follower.step(target, 0.0);
        let expected_remaining = target * 0.85_f32.powi(k);
        assert!(
            (target - follower.x - expected_remaining).abs() < 1e-3,
            "frame {}: remaining {} expected {}",
            k,
            target - follower.x,
            expected_remaining
        );
    }
}

#[test]
fn cursor_output_is_offset_by_indicator_radius() {
    let mut follower = CursorFollower::default();
    follower.notify_moved();
    let (x, y) = follower.step(200.0, 100.0).unwrap();
    assert!((x - (200.0 * 0.15 - 30.0)).abs() < 1e-4);
    assert!((y - (100.0 * 0.15 - 30.0)).abs() < 1e-4);
}

#[test]
fn cursor_settles_and_stops_writing_until_next_move() {
    let mut follower = CursorFollower::default();
    follower.notify_moved();
    // run well past convergence on a short distance
    for _ in 0..200 {
        follower.step(5.0, 5.0);
    }
    assert!(!follower.easing);
    assert_eq!(follower.step(5.0, 5.0), None);
    // a pointer move resumes easing
    follower.notify_moved();
    assert!(follower.step(50.0, 5.0).is_some());
}

#[test]
fn camera_error_shrinks_by_five_percent_per_frame() {
    let mut camera = CameraRig::default();
    let centered_x = 400.0_f32;
    let target = centered_x * 0.0005;
    for k in 1..=50 {
        camera.step(centered_x, 0.0);
        let expected_error = target * 0.95_f32.powi(k);
        assert!((target - camera.x - expected_error).abs() < 1e-5, "frame {}", k);
    }
    assert_eq!(camera.z, 300.0);
}

#[test]
fn camera_y_target_is_negated() {
    let mut camera = CameraRig::default();
    for _ in 0..2000 {
        camera.step(0.0, 600.0);
    }
    assert!((camera.y - (-600.0 * 0.0005)).abs() < 1e-4);
}

#[test]
fn hundred_frames_with_centered_pointer() {
    // viewport 1024, pointer parked dead center: rotation accumulates,
    // camera stays converged at the origin.
    let mut pointer = PointerState::default();
    pointer.record(512.0, 384.0, 1024.0, 768.0);
    let mut rotation = FieldRotation::default();
    let mut camera = CameraRig::default();
    for _ in 0..100 {
        rotation.advance();
        camera.step(pointer.centered_x, pointer.centered_y);
    }
    assert!((rotation.x - 0.05).abs() < 1e-5);
    assert!((rotation.y - 0.10).abs() < 1e-5);
    assert!(camera.x.abs() < 1e-6);
    assert!(camera.y.abs() < 1e-6);
}

#[test]
fn peak_envelope_rises_then_falls() {
    assert_eq!(peak_envelope(0.0), 0.0);
    assert!((peak_envelope(0.5) - 1.0).abs() < 1e-6);
    assert!(peak_envelope(1.0).abs() < 1e-6);
    assert!(peak_envelope(0.25) > 0.5);
    assert!(peak_envelope(0.75) > 0.0);
}
