//! Achsenparallele Begrenzung einer Punktmenge.

use super::curve::BezierCurve;
use glam::DVec2;

/// Begrenzungsrechteck mit entarteten Spannweiten als 1.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CurveBounds {
    pub min: DVec2,
    pub max: DVec2,
}

impl CurveBounds {
    /// Begrenzung aller Punkte. Gibt `None` bei leerer Eingabe.
    pub fn of(points: impl IntoIterator<Item = DVec2>) -> Option<Self> {
        let mut iter = points.into_iter();
        let first = iter.next()?;
        let (min, max) = iter.fold((first, first), |(min, max), p| (min.min(p), max.max(p)));
        Some(Self { min, max })
    }

    /// Begrenzung aller Kontrollpunkte einer Kurve.
    pub fn of_curve(curve: &BezierCurve) -> Self {
        let origin = curve.origin();
        Self::of(curve.control_points().map(|(_, _, p)| p)).unwrap_or(Self {
            min: origin,
            max: origin,
        })
    }

    /// Spannweite je Achse; eine Spannweite von 0 wird als 1 gemeldet.
    pub fn range(&self) -> DVec2 {
        let span = self.max - self.min;
        DVec2::new(
            if span.x == 0.0 { 1.0 } else { span.x },
            if span.y == 0.0 { 1.0 } else { span.y },
        )
    }
}
