// Host-side tests for the intro timeline and loader fade math.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod core {
    pub mod ease {
        include!("../src/core/ease.rs");
    }
    pub mod timeline {
        include!("../src/core/timeline.rs");
    }
}

use crate::core::timeline::*;

#[test]
fn hero_segments_start_with_declared_overlaps() {
    let tl = hero_timeline();
    let starts: Vec<f32> = tl.segments.iter().map(|s| s.start_ms).collect();
    assert_eq!(starts, vec![0.0, 500.0, 900.0, 1300.0]);
}

#[test]
fn hero_timeline_total_duration() {
    let tl = hero_timeline();
    assert_eq!(tl.total_ms(), 2300.0);
    assert!(!tl.finished(2299.0));
    assert!(tl.finished(2300.0));
}

#[test]
fn segment_holds_hidden_pose_before_start() {
    let tl = hero_timeline();
    // the title starts at 500ms; before that it sits at its "from" pose
    let title = tl.segments[1];
    let s = title.sample(100.0);
    assert_eq!(s.opacity, 0.0);
    assert_eq!(s.translate_z, -100.0);
    assert_eq!(s.rotate_x_deg, 90.0);
}

#[test]
fn segment_settles_at_identity_pose() {
    let tl = hero_timeline();
    for seg in &tl.segments {
        let s = seg.sample(seg.end_ms());
        assert!((s.opacity - 1.0).abs() < 1e-6);
        assert!(s.translate_z.abs() < 1e-4);
        assert!(s.rotate_x_deg.abs() < 1e-4);
    }
}

#[test]
fn segment_progress_is_eased_not_linear() {
    let tl = hero_timeline();
    let subtitle = tl.segments[0];
    // cubic-out front-loads the motion: at half time opacity is 0.875
    let s = subtitle.sample(500.0);
    assert!((s.opacity - 0.875).abs() < 1e-6);
}

#[test]
fn overlap_never_pushes_a_start_negative() {
    let mut tl = Timeline::default();
    tl.add(100.0, 0.0, 0.0, 0.0).add(100.0, 500.0, 0.0, 0.0);
    assert_eq!(tl.segments[1].start_ms, 0.0);
}

#[test]
fn loader_fade_envelope() {
    assert_eq!(loader_opacity(0.0), 1.0);
    assert!(loader_opacity(500.0) < 0.2); // cubic-out front-loads the fade
    assert!(loader_opacity(1000.0).abs() < 1e-6);
    assert!(!loader_fade_done(999.0));
    assert!(loader_fade_done(1000.0));
}
