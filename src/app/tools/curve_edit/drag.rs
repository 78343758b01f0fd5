//! Drag-Logik: Kontrollpunkt greifen, ziehen, loslassen.

use super::hit_test::locate_hit_point;
use super::state::DragSession;
use crate::app::use_cases::point_editing::update_point_with;
use crate::core::{BezierCurve, CoordinateMapping, CurveError};
use glam::DVec2;

impl DragSession {
    /// Greift den Punkt unter `display_pos`. Gibt `true` bei Treffer.
    pub fn on_drag_start(
        &mut self,
        curve: &BezierCurve,
        display_pos: DVec2,
        mapping: &dyn CoordinateMapping,
    ) -> bool {
        self.dragging = locate_hit_point(curve, display_pos, self.hit_radius, mapping);
        if let Some(hit) = self.dragging {
            log::debug!(
                "Drag gestartet: Segment {} {:?}",
                hit.segment_index,
                hit.point
            );
        }
        self.dragging.is_some()
    }

    /// Verschiebt den gegriffenen Punkt auf `display_pos`.
    ///
    /// Ohne aktiven Drag: `Ok(None)`. Sonst die neue Kurve.
    pub fn on_drag_update(
        &self,
        curve: &BezierCurve,
        display_pos: DVec2,
        mapping: &dyn CoordinateMapping,
    ) -> Result<Option<BezierCurve>, CurveError> {
        let Some(hit) = self.dragging else {
            return Ok(None);
        };
        let logical = mapping.to_logical(display_pos);
        update_point_with(
            curve,
            hit.segment_index,
            hit.point,
            logical,
            self.link_tolerance,
        )
        .map(Some)
    }

    /// Beendet den Drag.
    pub fn on_drag_end(&mut self) {
        self.dragging = None;
    }
}
