// Small easing/smoothing helpers shared by the frame loops and tweens.

/// Decelerating cubic curve, 0..1 -> 0..1 (`easeOutCubic`).
#[inline]
pub fn cubic_out(p: f32) -> f32 {
    let p = p.clamp(0.0, 1.0);
    let inv = 1.0 - p;
    1.0 - inv * inv * inv
}

/// Exponential smoothing: move `current` toward `target` by `rate` of the
/// remaining distance. `rate` in 0..1; higher converges faster.
#[inline]
pub fn ease_toward(current: f32, target: f32, rate: f32) -> f32 {
    current + (target - current) * rate
}

/// Two-segment keyframe envelope 0 -> 1 -> 0, eased on each half.
/// Used for the scale/opacity arcs of the ambient star particles.
#[inline]
pub fn peak_envelope(p: f32) -> f32 {
    let p = p.clamp(0.0, 1.0);
    if p < 0.5 {
        cubic_out(p * 2.0)
    } else {
        1.0 - cubic_out((p - 0.5) * 2.0)
    }
}
