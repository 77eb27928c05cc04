// Host-side tests for constants and their relationships.
// The main crate is wasm-only, so we include the pure-Rust module directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}

use constants::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn easing_rates_are_valid_fractions() {
    assert!(CURSOR_EASE > 0.0 && CURSOR_EASE < 1.0);
    assert!(CAMERA_EASE > 0.0 && CAMERA_EASE < 1.0);
    // the cursor converges faster than the camera parallax
    assert!(CURSOR_EASE > CAMERA_EASE);
    assert!(CURSOR_SETTLE_EPSILON > 0.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn field_parameters_are_consistent() {
    assert_eq!(PARTICLE_COUNT, 5000);
    assert!(FIELD_HALF_EXTENT > 0.0);
    assert!(HUE_MIN >= 0.0 && HUE_MAX <= 1.0 && HUE_MIN < HUE_MAX);
    assert!(FIELD_SATURATION >= 0.0 && FIELD_SATURATION <= 1.0);
    assert!(FIELD_LIGHTNESS >= 0.0 && FIELD_LIGHTNESS <= 1.0);
    assert!(FIELD_OPACITY > 0.0 && FIELD_OPACITY <= 1.0);
    assert!(POINT_SIZE_PX > 0.0);
    // y rotation runs at twice the x rate
    assert!((FIELD_ROT_Y_PER_FRAME - 2.0 * FIELD_ROT_X_PER_FRAME).abs() < 1e-9);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn camera_frustum_contains_the_field_center() {
    assert!(CAMERA_NEAR > 0.0);
    assert!(CAMERA_NEAR < CAMERA_Z && CAMERA_Z < CAMERA_FAR);
    assert!(CAMERA_FOV_DEG > 0.0 && CAMERA_FOV_DEG < 180.0);
    assert!(PARALLAX_SCALE > 0.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn timing_gates_are_sane() {
    assert!(LOADER_DELAY_MS > 0);
    assert!(LOADER_FADE_MS > 0.0);
    assert!(REVEAL_THRESHOLD > 0.0 && REVEAL_THRESHOLD < 1.0);
    assert!(REVEAL_DELAY_MS >= 0);
    assert!(DESKTOP_MIN_WIDTH > 0.0);
    assert!(NAV_SCROLL_THRESHOLD > 0.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn ambient_steady_state_stays_bounded() {
    assert!(AMBIENT_SPAWN_INTERVAL_MS > 0);
    assert!(AMBIENT_DURATION_MIN_MS > 0.0);
    // max lifetime over spawn interval bounds concurrently-alive particles
    let max_lifetime = AMBIENT_DURATION_MIN_MS + AMBIENT_DURATION_SPAN_MS;
    let max_alive = max_lifetime / AMBIENT_SPAWN_INTERVAL_MS as f32;
    assert!(max_alive <= 2.0);
}
