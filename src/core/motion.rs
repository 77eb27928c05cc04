use crate::constants::*;

use super::ease::ease_toward;

/// Latest pointer coordinates, written only by the pointermove handler.
/// `centered_*` are offset from the viewport center for camera parallax.
#[derive(Default, Clone, Copy)]
pub struct PointerState {
    pub x: f32,
    pub y: f32,
    pub centered_x: f32,
    pub centered_y: f32,
}

impl PointerState {
    pub fn record(&mut self, x: f32, y: f32, viewport_w: f32, viewport_h: f32) {
        self.x = x;
        self.y = y;
        self.centered_x = x - viewport_w / 2.0;
        self.centered_y = y - viewport_h / 2.0;
    }
}

/// Eased position of the custom cursor indicator. The `easing` flag is set
/// on every pointer move and cleared once the position settles, so the loop
/// stops touching the DOM while the pointer is idle.
#[derive(Default, Clone, Copy)]
pub struct CursorFollower {
    pub x: f32,
    pub y: f32,
    pub easing: bool,
}

impl CursorFollower {
    pub fn notify_moved(&mut self) {
        self.easing = true;
    }

    /// Advance one frame toward `(target_x, target_y)`. Returns the
    /// top-left translation to apply to the cursor element, or `None`
    /// when the follower is settled and no write is needed.
    pub fn step(&mut self, target_x: f32, target_y: f32) -> Option<(f32, f32)> {
        if !self.easing {
            return None;
        }
        self.x = ease_toward(self.x, target_x, CURSOR_EASE);
        self.y = ease_toward(self.y, target_y, CURSOR_EASE);
        if (target_x - self.x).abs() < CURSOR_SETTLE_EPSILON
            && (target_y - self.y).abs() < CURSOR_SETTLE_EPSILON
        {
            self.easing = false;
        }
        Some((self.x - CURSOR_RADIUS_PX, self.y - CURSOR_RADIUS_PX))
    }
}

/// Camera position eased toward a pointer-derived parallax target.
/// Z is fixed at creation; only X/Y move.
#[derive(Clone, Copy)]
pub struct CameraRig {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Default for CameraRig {
    fn default() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            z: CAMERA_Z,
        }
    }
}

impl CameraRig {
    /// One frame of parallax easing from viewport-centered pointer
    /// coordinates. Y is negated so the scene leans away from the pointer.
    pub fn step(&mut self, centered_x: f32, centered_y: f32) {
        let target_x = centered_x * PARALLAX_SCALE;
        let target_y = -(centered_y * PARALLAX_SCALE);
        self.x = ease_toward(self.x, target_x, CAMERA_EASE);
        self.y = ease_toward(self.y, target_y, CAMERA_EASE);
    }
}

/// Aggregate rotation of the particle field, advanced by a fixed increment
/// each frame. Unbounded; rotation is periodic so wrap is unnecessary.
#[derive(Default, Clone, Copy)]
pub struct FieldRotation {
    pub x: f32,
    pub y: f32,
}

impl FieldRotation {
    pub fn advance(&mut self) {
        self.x += FIELD_ROT_X_PER_FRAME;
        self.y += FIELD_ROT_Y_PER_FRAME;
    }
}
