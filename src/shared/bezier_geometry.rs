//! Reine Geometrie-Funktionen für kubische Bézier-Segmente.
//!
//! Layer-neutral: wird von Sampling, Bearbeitung und Hit-Test gleichermaßen
//! genutzt, ohne Zirkel-Abhängigkeiten zu erzeugen.

use crate::core::BezierSegment;
use glam::DVec2;

/// Standard-Auflösung der Längen-Schätzung (Anzahl Polylinien-Stücke).
pub const DEFAULT_ARC_LENGTH_PRECISION: usize = 10;

/// B(t) = (1-t)³·P0 + 3(1-t)²t·P1 + 3(1-t)t²·P2 + t³·P3
///
/// `t` wird nicht geklemmt; Aufrufer liefern `t ∈ [0, 1]`.
/// Bei t = 0 bzw. t = 1 ist das Ergebnis exakt P0 bzw. P3.
pub fn cubic_bezier(p0: DVec2, p1: DVec2, p2: DVec2, p3: DVec2, t: f64) -> DVec2 {
    let inv = 1.0 - t;
    let inv2 = inv * inv;
    let t2 = t * t;
    inv2 * inv * p0 + 3.0 * inv2 * t * p1 + 3.0 * inv * t2 * p2 + t2 * t * p3
}

/// Approximierte Kurvenlänge über `precision` gleichmäßige Polylinien-Stücke.
///
/// Grobe Schätzung ohne Verfeinerung. `precision = 0` liefert 0.
pub fn estimate_arc_length(p0: DVec2, p1: DVec2, p2: DVec2, p3: DVec2, precision: usize) -> f64 {
    let mut length = 0.0;
    let mut prev = cubic_bezier(p0, p1, p2, p3, 0.0);
    for i in 1..=precision {
        let t = i as f64 / precision as f64;
        let p = cubic_bezier(p0, p1, p2, p3, t);
        length += prev.distance(p);
        prev = p;
    }
    length
}

impl BezierSegment {
    /// Punkt auf dem Segment bei Parameter `t`.
    pub fn evaluate(&self, t: f64) -> DVec2 {
        let [p0, p1, p2, p3] = self.points;
        cubic_bezier(p0, p1, p2, p3, t)
    }

    /// Geschätzte Bogenlänge (siehe [`estimate_arc_length`]).
    pub fn arc_length(&self, precision: usize) -> f64 {
        let [p0, p1, p2, p3] = self.points;
        estimate_arc_length(p0, p1, p2, p3, precision)
    }
}
