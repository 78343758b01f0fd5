//! Kurve: geordnete, nicht-leere Folge von Bézier-Segmenten.
//!
//! Eine Kurve ist aus Sicht des Kerns unveränderlich. Jede Bearbeitung liefert
//! eine neue Kurve, die Eingabe bleibt unberührt.

use super::error::CurveError;
use super::segment::{BezierSegment, ControlPoint};
use glam::DVec2;
use serde::{Deserialize, Serialize};

/// Punkt im Austauschformat `{ "x": .., "y": .. }`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RawPoint {
    pub x: f64,
    pub y: f64,
}

impl From<RawPoint> for DVec2 {
    fn from(p: RawPoint) -> Self {
        DVec2::new(p.x, p.y)
    }
}

impl From<DVec2> for RawPoint {
    fn from(p: DVec2) -> Self {
        Self { x: p.x, y: p.y }
    }
}

/// Austauschformat einer Kurve: ein einzelnes Segment oder eine Liste von Segmenten.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawCurve {
    /// Mehrere Segmente `[[p0, p1, p2, p3], ...]`
    Segments(Vec<Vec<RawPoint>>),
    /// Ein Segment `[p0, p1, p2, p3]`
    Single(Vec<RawPoint>),
}

/// Kurve aus mindestens einem Segment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawCurve", into = "RawCurve")]
pub struct BezierCurve {
    segments: Vec<BezierSegment>,
}

impl BezierCurve {
    /// Erstellt eine Kurve; leere Segmentlisten und ungültige Koordinaten
    /// werden abgelehnt.
    pub fn new(segments: Vec<BezierSegment>) -> Result<Self, CurveError> {
        if segments.is_empty() {
            return Err(CurveError::EmptyCurve);
        }
        for (i, segment) in segments.iter().enumerate() {
            segment.validate(i)?;
        }
        Ok(Self { segments })
    }

    /// Kurve aus genau einem Segment.
    pub fn single(segment: BezierSegment) -> Result<Self, CurveError> {
        Self::new(vec![segment])
    }

    /// Kurve aus fest eingebauten Punkten ohne Prüfung (Presets im Einheitsquadrat).
    pub(crate) fn from_known_segment(segment: BezierSegment) -> Self {
        Self {
            segments: vec![segment],
        }
    }

    /// Erstellt eine Kurve aus rohen Punktlisten (je Segment genau 4 endliche Punkte).
    pub fn from_point_lists<S: AsRef<[DVec2]>>(lists: &[S]) -> Result<Self, CurveError> {
        let segments = lists
            .iter()
            .enumerate()
            .map(|(i, pts)| BezierSegment::from_slice(pts.as_ref(), i))
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(segments)
    }

    /// Parst eine Kurve aus JSON (einzelnes Segment oder Segmentliste).
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Alle Segmente in Reihenfolge.
    pub fn segments(&self) -> &[BezierSegment] {
        &self.segments
    }

    /// Anzahl der Segmente (immer ≥ 1).
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Immer false; vorhanden für Konsistenz mit `len()`.
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Segment am Index, mit Bereichsprüfung.
    pub fn segment(&self, index: usize) -> Result<&BezierSegment, CurveError> {
        self.segments
            .get(index)
            .ok_or(CurveError::SegmentIndexOutOfRange {
                index,
                len: self.segments.len(),
            })
    }

    /// Logischer Ursprung: P0 des ersten Segments.
    pub fn origin(&self) -> DVec2 {
        self.segments[0].start()
    }

    /// Iteriert über alle Kontrollpunkte mit (Segment, Punkt)-Position.
    pub fn control_points(&self) -> impl Iterator<Item = (usize, ControlPoint, DVec2)> + '_ {
        self.segments.iter().enumerate().flat_map(|(i, seg)| {
            ControlPoint::ALL
                .into_iter()
                .map(move |cp| (i, cp, seg.point(cp)))
        })
    }
}

impl TryFrom<RawCurve> for BezierCurve {
    type Error = CurveError;

    fn try_from(raw: RawCurve) -> Result<Self, Self::Error> {
        let lists: Vec<Vec<DVec2>> = match raw {
            RawCurve::Segments(segs) => segs
                .into_iter()
                .map(|seg| seg.into_iter().map(DVec2::from).collect())
                .collect(),
            RawCurve::Single(seg) => vec![seg.into_iter().map(DVec2::from).collect()],
        };
        Self::from_point_lists(&lists)
    }
}

impl From<BezierCurve> for RawCurve {
    fn from(curve: BezierCurve) -> Self {
        RawCurve::Segments(
            curve
                .segments
                .iter()
                .map(|seg| seg.points.iter().copied().map(RawPoint::from).collect())
                .collect(),
        )
    }
}
