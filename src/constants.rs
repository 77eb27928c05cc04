/// Tuning constants for the visual layer.
///
/// These express intended behavior (counts, easing rates, capability gates)
/// and keep magic numbers out of the code.
// Particle field build parameters
pub const PARTICLE_COUNT: usize = 5000;
pub const FIELD_HALF_EXTENT: f32 = 1000.0; // coordinates uniform in [-extent, extent]
pub const HUE_MIN: f32 = 0.5; // blue..purple band
pub const HUE_MAX: f32 = 0.8;
pub const FIELD_SATURATION: f32 = 0.7;
pub const FIELD_LIGHTNESS: f32 = 0.5;
pub const POINT_SIZE_PX: f32 = 3.0;
pub const FIELD_OPACITY: f32 = 0.8;

// Per-frame field rotation increments (radians)
pub const FIELD_ROT_X_PER_FRAME: f32 = 0.0005;
pub const FIELD_ROT_Y_PER_FRAME: f32 = 0.001;

// Camera
pub const CAMERA_Z: f32 = 300.0;
pub const CAMERA_FOV_DEG: f32 = 75.0;
pub const CAMERA_NEAR: f32 = 0.1;
pub const CAMERA_FAR: f32 = 1000.0;
// Parallax target = centered pointer * scale, eased at 5% of remaining distance per frame
pub const PARALLAX_SCALE: f32 = 0.0005;
pub const CAMERA_EASE: f32 = 0.05;

// Custom cursor follower
pub const CURSOR_EASE: f32 = 0.15; // fraction of remaining distance per frame
pub const CURSOR_SETTLE_EPSILON: f32 = 0.1; // stop writing below this per-axis delta
pub const CURSOR_RADIUS_PX: f32 = 30.0; // half of the 60px visual indicator

// Capability gate: custom cursor and ambient particles are desktop-only
pub const DESKTOP_MIN_WIDTH: f64 = 768.0;

// Loader / intro timeline (milliseconds)
pub const LOADER_DELAY_MS: i32 = 3000;
pub const LOADER_FADE_MS: f32 = 1000.0;

// Scroll reveal
pub const REVEAL_THRESHOLD: f64 = 0.15;
pub const REVEAL_ROOT_MARGIN: &str = "0px 0px -20px 0px";
pub const REVEAL_DELAY_MS: i32 = 50;

// Ambient star particles
pub const AMBIENT_SPAWN_INTERVAL_MS: i32 = 4000;
pub const AMBIENT_DURATION_MIN_MS: f32 = 2000.0;
pub const AMBIENT_DURATION_SPAN_MS: f32 = 3000.0; // duration in [min, min+span)
pub const AMBIENT_DRIFT_SPAN_PX: f32 = 300.0; // horizontal drift in [-span/2, span/2)
pub const AMBIENT_RISE_MARGIN_PX: f32 = 100.0; // overshoot above the viewport top
pub const AMBIENT_START_BELOW_PX: f32 = 10.0; // spawn just below the viewport bottom

// Navigation
pub const NAV_SCROLL_THRESHOLD: f64 = 100.0;
