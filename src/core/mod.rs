//! Core-Domänentypen: Segmente, Kurven, Verkettung, Begrenzung und Viewport.

pub mod bounds;
/// Kurven-Container und JSON-Rohformat
///
/// - BezierCurve: nicht-leere, geordnete Folge von Segmenten
/// - RawCurve: Einzelsegment oder Segmentliste, wie vom Host geliefert
pub mod curve;
pub mod error;
pub mod point;
pub mod segment;
pub mod topology;
pub mod viewport;

pub use bounds::CurveBounds;
pub use curve::{BezierCurve, RawCurve, RawPoint};
pub use error::CurveError;
pub use point::{is_same_point, mirror_point, LinkTolerance};
pub use segment::{BezierSegment, ControlPoint, MAX_COORDINATE};
pub use topology::{classify_segment, segment_links_all, SegmentLinks};
pub use viewport::{CoordinateMapping, IdentityMapping, ViewportTransform};
