pub mod ease;
pub mod field;
pub mod motion;
pub mod spawn;
pub mod timeline;

pub use field::*;
pub use motion::*;

// Shaders bundled as string constants
pub static POINTS_WGSL: &str = include_str!("../../shaders/points.wgsl");
