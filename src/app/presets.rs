//! Vorgefertigte Easing-Kurven als Einzelsegmente im Einheitsquadrat.
//!
//! Gespeichert in mathematischer Orientierung (y nach oben). Für Display-Flächen
//! mit y nach unten liefert [`EasingPreset::display_curve`] die gespiegelte Form.

use crate::core::{BezierCurve, BezierSegment};
use glam::DVec2;

/// Bekannte Easing-Kurven (CSS-Kontrollpunkte).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EasingPreset {
    Linear,
    EaseInSine,
    EaseOutSine,
    EaseInOutSine,
    EaseInQuad,
    EaseOutQuad,
    EaseInOutQuad,
    EaseInCubic,
    EaseOutCubic,
    EaseInOutCubic,
    EaseOutBack,
}

impl EasingPreset {
    /// Alle Presets in Anzeige-Reihenfolge.
    pub const ALL: [EasingPreset; 11] = [
        EasingPreset::Linear,
        EasingPreset::EaseInSine,
        EasingPreset::EaseOutSine,
        EasingPreset::EaseInOutSine,
        EasingPreset::EaseInQuad,
        EasingPreset::EaseOutQuad,
        EasingPreset::EaseInOutQuad,
        EasingPreset::EaseInCubic,
        EasingPreset::EaseOutCubic,
        EasingPreset::EaseInOutCubic,
        EasingPreset::EaseOutBack,
    ];

    /// Kebab-Case-Name, z.B. `ease-in-out-sine`.
    pub fn name(self) -> &'static str {
        match self {
            EasingPreset::Linear => "linear",
            EasingPreset::EaseInSine => "ease-in-sine",
            EasingPreset::EaseOutSine => "ease-out-sine",
            EasingPreset::EaseInOutSine => "ease-in-out-sine",
            EasingPreset::EaseInQuad => "ease-in-quad",
            EasingPreset::EaseOutQuad => "ease-out-quad",
            EasingPreset::EaseInOutQuad => "ease-in-out-quad",
            EasingPreset::EaseInCubic => "ease-in-cubic",
            EasingPreset::EaseOutCubic => "ease-out-cubic",
            EasingPreset::EaseInOutCubic => "ease-in-out-cubic",
            EasingPreset::EaseOutBack => "ease-out-back",
        }
    }

    /// Sucht ein Preset über seinen Namen.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.name() == name)
    }

    /// Die beiden Handles (P1, P2); Anker sind immer (0,0) und (1,1).
    fn handles(self) -> (DVec2, DVec2) {
        let (p1, p2) = match self {
            EasingPreset::Linear => ((0.25, 0.25), (0.75, 0.75)),
            EasingPreset::EaseInSine => ((0.47, 0.0), (0.745, 0.715)),
            EasingPreset::EaseOutSine => ((0.39, 0.575), (0.565, 1.0)),
            EasingPreset::EaseInOutSine => ((0.445, 0.05), (0.55, 0.95)),
            EasingPreset::EaseInQuad => ((0.55, 0.085), (0.68, 0.53)),
            EasingPreset::EaseOutQuad => ((0.25, 0.46), (0.45, 0.94)),
            EasingPreset::EaseInOutQuad => ((0.455, 0.03), (0.515, 0.955)),
            EasingPreset::EaseInCubic => ((0.55, 0.055), (0.675, 0.19)),
            EasingPreset::EaseOutCubic => ((0.215, 0.61), (0.355, 1.0)),
            EasingPreset::EaseInOutCubic => ((0.645, 0.045), (0.355, 1.0)),
            EasingPreset::EaseOutBack => ((0.34, 1.56), (0.64, 1.0)),
        };
        (DVec2::new(p1.0, p1.1), DVec2::new(p2.0, p2.1))
    }

    /// Kurve in mathematischer Orientierung (y nach oben).
    pub fn curve(self) -> BezierCurve {
        let (p1, p2) = self.handles();
        BezierCurve::from_known_segment(BezierSegment::new(DVec2::ZERO, p1, p2, DVec2::ONE))
    }

    /// Kurve in Display-Orientierung (y nach unten): `y → 1 − y`.
    pub fn display_curve(self) -> BezierCurve {
        let flip = |p: DVec2| DVec2::new(p.x, 1.0 - p.y);
        let (p1, p2) = self.handles();
        BezierCurve::from_known_segment(BezierSegment::new(
            flip(DVec2::ZERO),
            flip(p1),
            flip(p2),
            flip(DVec2::ONE),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_names_roundtrip() {
        for preset in EasingPreset::ALL {
            assert_eq!(EasingPreset::from_name(preset.name()), Some(preset));
        }
        assert_eq!(EasingPreset::from_name("bounce"), None);
    }

    #[test]
    fn test_display_curve_flips_y() {
        let math = EasingPreset::EaseInSine.curve();
        let display = EasingPreset::EaseInSine.display_curve();
        let m = math.segments()[0].points;
        let d = display.segments()[0].points;

        assert_eq!(d[0], DVec2::new(0.0, 1.0));
        assert_eq!(d[3], DVec2::new(1.0, 0.0));
        assert_relative_eq!(d[2].y, 1.0 - m[2].y, epsilon = 1e-12);
        assert_relative_eq!(d[2].x, m[2].x);
    }

    #[test]
    fn test_ease_out_back_overshoots() {
        let seg = EasingPreset::EaseOutBack.curve().segments()[0];
        let peak = (0..=20)
            .map(|i| seg.evaluate(i as f64 / 20.0).y)
            .fold(f64::MIN, f64::max);
        assert!(peak > 1.0);
    }
}
