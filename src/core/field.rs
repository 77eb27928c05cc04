use crate::constants::*;
use glam::Vec3;
use rand::prelude::*;

/// One point of the background field. Position and color are fixed after
/// generation; only the aggregate rotation changes per frame.
#[derive(Clone, Copy, Debug)]
pub struct Particle {
    pub position: Vec3,
    pub color: [f32; 3], // linear RGB
}

#[inline]
pub fn random_position(rng: &mut impl Rng) -> Vec3 {
    let span = FIELD_HALF_EXTENT * 2.0;
    Vec3::new(
        (rng.gen::<f32>() - 0.5) * span,
        (rng.gen::<f32>() - 0.5) * span,
        (rng.gen::<f32>() - 0.5) * span,
    )
}

#[inline]
pub fn random_hue(rng: &mut impl Rng) -> f32 {
    HUE_MIN + rng.gen::<f32>() * (HUE_MAX - HUE_MIN)
}

/// Generate the full field: uniform positions in a cube, hue restricted to
/// the blue-to-purple band, fixed saturation/lightness, linear RGB out.
pub fn generate(rng: &mut impl Rng) -> Vec<Particle> {
    (0..PARTICLE_COUNT)
        .map(|_| {
            let srgb = hsl_to_rgb(random_hue(rng), FIELD_SATURATION, FIELD_LIGHTNESS);
            Particle {
                position: random_position(rng),
                color: [
                    srgb_to_linear(srgb[0]),
                    srgb_to_linear(srgb[1]),
                    srgb_to_linear(srgb[2]),
                ],
            }
        })
        .collect()
}

/// HSL to sRGB, all components 0..1.
pub fn hsl_to_rgb(h: f32, s: f32, l: f32) -> [f32; 3] {
    if s <= 0.0 {
        return [l, l, l];
    }
    let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
    let p = 2.0 * l - q;
    [
        hue_to_channel(p, q, h + 1.0 / 3.0),
        hue_to_channel(p, q, h),
        hue_to_channel(p, q, h - 1.0 / 3.0),
    ]
}

fn hue_to_channel(p: f32, q: f32, t: f32) -> f32 {
    let t = t.rem_euclid(1.0);
    if t < 1.0 / 6.0 {
        p + (q - p) * 6.0 * t
    } else if t < 1.0 / 2.0 {
        q
    } else if t < 2.0 / 3.0 {
        p + (q - p) * (2.0 / 3.0 - t) * 6.0
    } else {
        p
    }
}

/// sRGB component to linear, matching the working color space of the
/// renderer (the swapchain converts back on output).
#[inline]
pub fn srgb_to_linear(c: f32) -> f32 {
    if c < 0.04045 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}
