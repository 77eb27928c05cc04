use crate::constants::LOADER_FADE_MS;

use super::ease::cubic_out;

/// One property animation within the intro timeline: opacity 0 -> 1 plus a
/// depth/rotation settle, eased with `cubic_out` over `duration_ms`.
#[derive(Clone, Copy, Debug)]
pub struct Segment {
    pub start_ms: f32,
    pub duration_ms: f32,
    pub from_translate_z: f32,
    pub from_rotate_x_deg: f32,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SegmentSample {
    pub opacity: f32,
    pub translate_z: f32,
    pub rotate_x_deg: f32,
}

impl Segment {
    /// Property values at `t_ms` from timeline start. Clamped on both ends,
    /// so sampling before the segment starts yields the "from" pose.
    pub fn sample(&self, t_ms: f32) -> SegmentSample {
        let p = ((t_ms - self.start_ms) / self.duration_ms).clamp(0.0, 1.0);
        let e = cubic_out(p);
        SegmentSample {
            opacity: e,
            translate_z: self.from_translate_z * (1.0 - e),
            rotate_x_deg: self.from_rotate_x_deg * (1.0 - e),
        }
    }

    #[inline]
    pub fn end_ms(&self) -> f32 {
        self.start_ms + self.duration_ms
    }
}

/// Sequenced segments with declared overlaps: each added segment starts
/// `overlap_ms` before the previous one completes.
#[derive(Clone, Debug, Default)]
pub struct Timeline {
    pub segments: Vec<Segment>,
}

impl Timeline {
    pub fn add(
        &mut self,
        duration_ms: f32,
        overlap_ms: f32,
        from_translate_z: f32,
        from_rotate_x_deg: f32,
    ) -> &mut Self {
        let start_ms = match self.segments.last() {
            Some(prev) => (prev.end_ms() - overlap_ms).max(0.0),
            None => 0.0,
        };
        self.segments.push(Segment {
            start_ms,
            duration_ms,
            from_translate_z,
            from_rotate_x_deg,
        });
        self
    }

    pub fn total_ms(&self) -> f32 {
        self.segments
            .iter()
            .map(Segment::end_ms)
            .fold(0.0, f32::max)
    }

    pub fn finished(&self, t_ms: f32) -> bool {
        t_ms >= self.total_ms()
    }
}

/// The hero reveal: subtitle, title, description, call-to-action, staggered
/// by overlapping starts rather than run strictly back to back.
pub fn hero_timeline() -> Timeline {
    let mut tl = Timeline::default();
    tl.add(1000.0, 0.0, -50.0, 45.0)
        .add(1200.0, 500.0, -100.0, 90.0)
        .add(1000.0, 800.0, -30.0, 30.0)
        .add(1000.0, 600.0, -20.0, 20.0);
    tl
}

/// Loading overlay opacity at `t_ms` into the fade (1 -> 0, cubic-out).
#[inline]
pub fn loader_opacity(t_ms: f32) -> f32 {
    1.0 - cubic_out(t_ms / LOADER_FADE_MS)
}

#[inline]
pub fn loader_fade_done(t_ms: f32) -> bool {
    t_ms >= LOADER_FADE_MS
}
