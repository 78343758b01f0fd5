//! Geteilte Bausteine: Kurven-Geometrie, numerische Helfer und Optionen.

/// Auswertung und Längenschätzung kubischer Bézier-Segmente.
pub mod bezier_geometry;
pub mod numeric;
pub mod options;

pub use options::EngineOptions;
pub use options::{HIT_RADIUS_PX, PADDING_RATIO};
