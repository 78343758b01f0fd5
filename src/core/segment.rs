//! Einzelnes kubisches Bézier-Segment aus vier Kontrollpunkten.

use super::error::CurveError;
use glam::DVec2;

/// Größter erlaubter Koordinaten-Betrag.
///
/// Bernstein-Summen, Verschiebungen zum Ursprung und Spiegelungen an einem
/// Anker bleiben damit endlich.
pub const MAX_COORDINATE: f64 = f64::MAX / 8.0;

/// Position eines Punkts innerhalb eines Segments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ControlPoint {
    /// Start-Anker
    P0,
    /// Ausgehender Handle (gehört zu P0)
    P1,
    /// Eingehender Handle (gehört zu P3)
    P2,
    /// End-Anker
    P3,
}

impl ControlPoint {
    /// Alle vier Punkte in Segment-Reihenfolge.
    pub const ALL: [ControlPoint; 4] = [
        ControlPoint::P0,
        ControlPoint::P1,
        ControlPoint::P2,
        ControlPoint::P3,
    ];

    /// Index im Punkt-Array (0..=3).
    pub fn index(self) -> usize {
        match self {
            ControlPoint::P0 => 0,
            ControlPoint::P1 => 1,
            ControlPoint::P2 => 2,
            ControlPoint::P3 => 3,
        }
    }
}

impl TryFrom<usize> for ControlPoint {
    type Error = CurveError;

    fn try_from(index: usize) -> Result<Self, Self::Error> {
        match index {
            0 => Ok(ControlPoint::P0),
            1 => Ok(ControlPoint::P1),
            2 => Ok(ControlPoint::P2),
            3 => Ok(ControlPoint::P3),
            _ => Err(CurveError::PointIndexOutOfRange { index }),
        }
    }
}

/// Kubisches Bézier-Segment `[P0, P1, P2, P3]`.
///
/// Werttyp: Kopien teilen keinen Zustand mit dem Original.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BezierSegment {
    /// Kontrollpunkte in Reihenfolge P0..P3
    pub points: [DVec2; 4],
}

impl BezierSegment {
    /// Erstellt ein Segment aus Start, zwei Handles und Ende.
    pub fn new(p0: DVec2, p1: DVec2, p2: DVec2, p3: DVec2) -> Self {
        Self {
            points: [p0, p1, p2, p3],
        }
    }

    /// Erstellt ein Segment aus einer Punktliste; prüft Anzahl und Koordinaten.
    ///
    /// `segment` ist nur für die Fehlermeldung.
    pub fn from_slice(points: &[DVec2], segment: usize) -> Result<Self, CurveError> {
        let points: [DVec2; 4] = points.try_into().map_err(|_| CurveError::InvalidSegment {
            segment,
            points: points.len(),
        })?;
        let checked = Self { points };
        checked.validate(segment)?;
        Ok(checked)
    }

    /// Prüft alle Koordinaten: endlich und betragsmäßig ≤ [`MAX_COORDINATE`].
    pub fn validate(&self, segment: usize) -> Result<(), CurveError> {
        for (point, p) in self.points.iter().enumerate() {
            if !p.is_finite() {
                return Err(CurveError::NonFiniteCoordinate { segment, point });
            }
            if p.abs().max_element() > MAX_COORDINATE {
                return Err(CurveError::CoordinateOutOfRange { segment, point });
            }
        }
        Ok(())
    }

    /// Start-Anker
    pub fn start(&self) -> DVec2 {
        self.points[0]
    }

    /// End-Anker
    pub fn end(&self) -> DVec2 {
        self.points[3]
    }

    /// Punkt an der gegebenen Position.
    pub fn point(&self, which: ControlPoint) -> DVec2 {
        self.points[which.index()]
    }

    /// Setzt den Punkt an der gegebenen Position.
    pub fn set_point(&mut self, which: ControlPoint, position: DVec2) {
        self.points[which.index()] = position;
    }
}
