// Host-side tests for particle field generation and color conversion.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod core {
    pub mod field {
        include!("../src/core/field.rs");
    }
}

use crate::core::field::*;
use rand::prelude::*;

#[test]
fn field_has_exactly_5000_points_inside_the_cube() {
    let mut rng = StdRng::seed_from_u64(42);
    let field = generate(&mut rng);
    assert_eq!(field.len(), 5000);
    for p in &field {
        for c in p.position.to_array() {
            assert!((-1000.0..=1000.0).contains(&c), "coordinate {} out of cube", c);
        }
    }
}

#[test]
fn colors_are_finite_unit_range_linear_rgb() {
    let mut rng = StdRng::seed_from_u64(7);
    let field = generate(&mut rng);
    for p in &field {
        for c in p.color {
            assert!(c.is_finite());
            assert!((0.0..=1.0).contains(&c));
        }
    }
}

#[test]
fn hue_stays_in_the_blue_purple_band() {
    let mut rng = StdRng::seed_from_u64(1);
    for _ in 0..10_000 {
        let h = random_hue(&mut rng);
        assert!((0.5..=0.8).contains(&h), "hue {} out of band", h);
    }
}

#[test]
fn positions_cover_the_cube() {
    // sanity against a broken scale factor: with 5000 uniform draws some
    // coordinate should land in each outer quarter of the cube
    let mut rng = StdRng::seed_from_u64(3);
    let field = generate(&mut rng);
    assert!(field.iter().any(|p| p.position.x > 500.0));
    assert!(field.iter().any(|p| p.position.x < -500.0));
    assert!(field.iter().any(|p| p.position.z > 500.0));
    assert!(field.iter().any(|p| p.position.z < -500.0));
}

#[test]
fn hsl_reference_values() {
    // zero saturation is achromatic
    let grey = hsl_to_rgb(0.25, 0.0, 0.5);
    assert_eq!(grey, [0.5, 0.5, 0.5]);

    // hsl(0.5, 0.7, 0.5) is the cyan end of the field's band
    let cyan = hsl_to_rgb(0.5, 0.7, 0.5);
    assert!((cyan[0] - 0.15).abs() < 1e-5);
    assert!((cyan[1] - 0.85).abs() < 1e-5);
    assert!((cyan[2] - 0.85).abs() < 1e-5);

    // primary red at full saturation
    let red = hsl_to_rgb(0.0, 1.0, 0.5);
    assert!((red[0] - 1.0).abs() < 1e-5);
    assert!(red[1].abs() < 1e-5);
    assert!(red[2].abs() < 1e-5);
}

#[test]
fn srgb_to_linear_endpoints_and_monotonic() {
    assert_eq!(srgb_to_linear(0.0), 0.0);
    assert!((srgb_to_linear(1.0) - 1.0).abs() < 1e-6);
    let mut prev = 0.0;
    for i in 1..=100 {
        let v = srgb_to_linear(i as f32 / 100.0);
        assert!(v >= prev);
        prev = v;
    }
    // linear is darker than srgb in the midrange
    assert!(srgb_to_linear(0.5) < 0.5);
}
