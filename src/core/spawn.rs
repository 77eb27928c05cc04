use crate::constants::*;
use rand::prelude::*;

use super::ease::{cubic_out, peak_envelope};

/// Randomized parameters of one ambient star particle. Generated at spawn
/// time; the element animates once and removes itself on completion.
#[derive(Clone, Copy, Debug)]
pub struct AmbientSpawn {
    pub start_x: f32,
    pub start_y: f32,
    pub drift_x: f32,
    pub duration_ms: f32,
}

impl AmbientSpawn {
    pub fn random(rng: &mut impl Rng, viewport_w: f32, viewport_h: f32) -> Self {
        Self {
            start_x: rng.gen::<f32>() * viewport_w,
            start_y: viewport_h + AMBIENT_START_BELOW_PX,
            drift_x: (rng.gen::<f32>() - 0.5) * AMBIENT_DRIFT_SPAN_PX,
            duration_ms: AMBIENT_DURATION_MIN_MS + rng.gen::<f32>() * AMBIENT_DURATION_SPAN_MS,
        }
    }

    #[inline]
    pub fn finished(&self, t_ms: f32) -> bool {
        t_ms >= self.duration_ms
    }
}

/// Style values for one animation tick: a rise past the viewport top with
/// horizontal drift and a full turn, scale/opacity ramping 0 -> 1 -> 0.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AmbientSample {
    pub translate_x: f32,
    pub translate_y: f32,
    pub rotate_deg: f32,
    pub scale: f32,
    pub opacity: f32,
}

pub fn sample(spawn: &AmbientSpawn, viewport_h: f32, t_ms: f32) -> AmbientSample {
    let p = (t_ms / spawn.duration_ms).clamp(0.0, 1.0);
    let e = cubic_out(p);
    let envelope = peak_envelope(p);
    AmbientSample {
        translate_x: spawn.drift_x * e,
        translate_y: -(viewport_h + AMBIENT_RISE_MARGIN_PX) * e,
        rotate_deg: 360.0 * e,
        scale: envelope,
        opacity: envelope,
    }
}
