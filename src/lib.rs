//! Bezier-Timing-Editor Library.
//! Stückweise kubische Bézier-Kurven: Verkettung, Abtastung, Bearbeitung
//! und Ableitung von Zeit/Wert-Folgen. Ohne UI, für Hosts und Tests.

pub mod app;
pub mod core;
pub mod shared;

pub use app::use_cases::point_editing::{update_point, update_point_with};
pub use app::use_cases::sampling::{
    max_abs_displacement, sample, sample_with, SampleCount, SampledPoint, SamplingConfig, ValueAxis,
};
pub use app::use_cases::timed_values::{
    sample_timed_values, sample_timed_values_with, timed_values_from_points, TimedValue,
    TimedValueOptions,
};
pub use app::{
    locate_hit_point, DragSession, EasingPreset, JitterSource, NoJitter, PointHit, RandomJitter,
};
pub use core::{
    classify_segment, is_same_point, mirror_point, segment_links_all, BezierCurve, BezierSegment,
    ControlPoint, CoordinateMapping, CurveBounds, CurveError, IdentityMapping, LinkTolerance,
    SegmentLinks, ViewportTransform,
};
pub use shared::EngineOptions;
