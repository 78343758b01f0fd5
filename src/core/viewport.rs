//! Abbildung zwischen logischem Kurvenraum und Display-Koordinaten.

use super::bounds::CurveBounds;
use crate::shared::numeric::safe_div;
use glam::DVec2;

/// Größter erlaubter Rand-Anteil je Seite.
pub const MAX_PADDING_RATIO: f64 = 0.5;

/// Affine Abbildung logisch ↔ Display, vom Host bereitgestellt.
pub trait CoordinateMapping {
    /// Logische Koordinate → Display-Koordinate
    fn to_display(&self, logical: DVec2) -> DVec2;
    /// Display-Koordinate → logische Koordinate
    fn to_logical(&self, display: DVec2) -> DVec2;
}

/// Identität: logischer Raum ist der Display-Raum.
#[derive(Debug, Clone, Copy, Default)]
pub struct IdentityMapping;

impl CoordinateMapping for IdentityMapping {
    fn to_display(&self, logical: DVec2) -> DVec2 {
        logical
    }

    fn to_logical(&self, display: DVec2) -> DVec2 {
        display
    }
}

/// Einpassung einer Begrenzung in eine Zeichenfläche mit Rand.
///
/// Gleichmäßige Skalierung (Seitenverhältnis bleibt), zentriert im
/// Zeichenbereich innerhalb des Rands.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewportTransform {
    /// Logische Begrenzung, die eingepasst wurde
    pub bounds: CurveBounds,
    /// Display-Einheiten pro logischer Einheit
    pub scale: f64,
    /// Display-Position von `bounds.min`
    pub draw_offset: DVec2,
}

impl ViewportTransform {
    /// Passt `bounds` in eine Fläche `viewport` (Breite, Höhe) ein.
    ///
    /// `padding_ratio` wird auf `[0, 0.5]` geklemmt und gilt je Achse relativ
    /// zur jeweiligen Flächengröße.
    pub fn fit(bounds: CurveBounds, viewport: DVec2, padding_ratio: f64) -> Self {
        let ratio = padding_ratio.clamp(0.0, MAX_PADDING_RATIO);
        let padding = viewport * ratio;
        let draw_area = viewport - 2.0 * padding;
        let range = bounds.range();

        let scale = safe_div(draw_area.x, range.x).min(safe_div(draw_area.y, range.y));
        let center_offset = (draw_area - range * scale) / 2.0;

        Self {
            bounds,
            scale,
            draw_offset: padding + center_offset,
        }
    }
}

impl CoordinateMapping for ViewportTransform {
    fn to_display(&self, logical: DVec2) -> DVec2 {
        (logical - self.bounds.min) * self.scale + self.draw_offset
    }

    fn to_logical(&self, display: DVec2) -> DVec2 {
        let local = display - self.draw_offset;
        DVec2::new(safe_div(local.x, self.scale), safe_div(local.y, self.scale)) + self.bounds.min
    }
}
