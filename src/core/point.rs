//! Geometrie-Grundbausteine: Punkt-Vergleich mit Toleranz und Spiegelung.

use glam::DVec2;
use serde::{Deserialize, Serialize};

/// Standard-Toleranz für Vergleiche im UI-Koordinatenraum.
pub const DEFAULT_LINK_TOLERANCE: f64 = 0.01;

/// Toleranz-Strategie für den Vergleich zweier Punkte.
///
/// - `euclidean = true`: Abstand `hypot(dx, dy) < tolerance` (Radius, für Hit-Tests)
/// - `euclidean = false`: beide Achsen einzeln `< tolerance` (für Segment-Verkettung)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LinkTolerance {
    /// Maximale Abweichung (exklusiv)
    pub tolerance: f64,
    /// Radius- statt Achsenvergleich
    pub euclidean: bool,
}

impl LinkTolerance {
    /// Achsenweiser Vergleich mit der gegebenen Toleranz.
    pub fn per_axis(tolerance: f64) -> Self {
        Self {
            tolerance,
            euclidean: false,
        }
    }

    /// Radius-Vergleich mit der gegebenen Toleranz.
    pub fn radius(tolerance: f64) -> Self {
        Self {
            tolerance,
            euclidean: true,
        }
    }
}

impl Default for LinkTolerance {
    fn default() -> Self {
        Self::per_axis(DEFAULT_LINK_TOLERANCE)
    }
}

/// Prüft, ob zwei Punkte innerhalb der Toleranz zusammenfallen.
pub fn is_same_point(a: DVec2, b: DVec2, tolerance: LinkTolerance) -> bool {
    let delta = a - b;
    if tolerance.euclidean {
        delta.x.hypot(delta.y) < tolerance.tolerance
    } else {
        delta.x.abs() < tolerance.tolerance && delta.y.abs() < tolerance.tolerance
    }
}

/// Spiegelt `point` am `anchor`: `2·anchor − point`.
pub fn mirror_point(point: DVec2, anchor: DVec2) -> DVec2 {
    DVec2::new(2.0 * anchor.x - point.x, 2.0 * anchor.y - point.y)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_same_point_per_axis() {
        let tol = LinkTolerance::per_axis(0.01);
        assert!(is_same_point(
            DVec2::new(1.0, 1.0),
            DVec2::new(1.005, 0.995),
            tol
        ));
        assert!(!is_same_point(
            DVec2::new(1.0, 1.0),
            DVec2::new(1.02, 1.0),
            tol
        ));
    }

    #[test]
    fn test_same_point_euclidean_is_stricter_on_diagonal() {
        // 0.008 pro Achse: achsenweise gleich, Radius ≈ 0.0113 > 0.01
        let a = DVec2::ZERO;
        let b = DVec2::new(0.008, 0.008);
        assert!(is_same_point(a, b, LinkTolerance::per_axis(0.01)));
        assert!(!is_same_point(a, b, LinkTolerance::radius(0.01)));
    }

    #[test]
    fn test_tolerance_is_exclusive() {
        let tol = LinkTolerance::per_axis(0.5);
        assert!(!is_same_point(DVec2::ZERO, DVec2::new(0.5, 0.0), tol));
    }

    #[test]
    fn test_mirror_point() {
        let mirrored = mirror_point(DVec2::new(1.0, 3.0), DVec2::new(2.0, 2.0));
        assert_relative_eq!(mirrored.x, 3.0);
        assert_relative_eq!(mirrored.y, 1.0);
        // Spiegelung ist selbstinvers
        let back = mirror_point(mirrored, DVec2::new(2.0, 2.0));
        assert_relative_eq!(back.x, 1.0);
        assert_relative_eq!(back.y, 3.0);
    }
}
