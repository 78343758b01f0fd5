//! Application-Layer: Use-Cases, Interaktions-Tools, Jitter und Presets.

pub mod jitter;
pub mod presets;
pub mod tools;
pub mod use_cases;

pub use jitter::{apply_jitter, JitterSource, NoJitter, RandomJitter};
pub use presets::EasingPreset;
pub use tools::curve_edit::{locate_hit_point, DragSession, PointHit};
