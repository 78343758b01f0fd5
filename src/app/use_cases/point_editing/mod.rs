//! Use-Case: Einen Kontrollpunkt verschieben und die Nachbarsegmente mitführen.
//!
//! - **Anker (P0/P3):** eigener Handle wird starr mitverschoben. Bei verketteter
//!   Fuge folgt der Anker des Nachbarn (Schluss) und dessen ferner Handle wird
//!   am gemeinsamen Anker gespiegelt (C1-Stetigkeit).
//! - **Handle (P1/P2):** nur der gegenüberliegende Handle des verketteten
//!   Nachbarn wird gespiegelt; Anker bewegen sich nie.
//!
//! Die Verkettung wird **vor** der Bearbeitung bestimmt. Ein isoliertes Segment
//! verändert ausschließlich seine eigenen vier Punkte.

use crate::core::{
    classify_segment, mirror_point, BezierCurve, ControlPoint, CurveError, LinkTolerance,
};
use glam::DVec2;

/// Verschiebt Punkt `point_index` (0..=3) von Segment `segment_index`.
///
/// Verkettung mit Standard-Toleranz; siehe [`update_point_with`].
pub fn update_point(
    curve: &BezierCurve,
    segment_index: usize,
    point_index: usize,
    new_position: DVec2,
) -> Result<BezierCurve, CurveError> {
    let which = ControlPoint::try_from(point_index)?;
    update_point_with(
        curve,
        segment_index,
        which,
        new_position,
        LinkTolerance::default(),
    )
}

/// Verschiebt einen Kontrollpunkt und liefert die neue Kurve.
///
/// Die Eingabe wird nie verändert. Ungültige Indizes oder nicht-endliche
/// Positionen führen zu einem Fehler, bevor irgendetwas kopiert wird.
/// Die bearbeitete Kopie durchläuft dieselbe Prüfung wie jede neue Kurve:
/// landet ein mitgeführter Handle außerhalb von [`MAX_COORDINATE`], wird
/// [`CurveError::CoordinateOutOfRange`] geliefert.
///
/// [`MAX_COORDINATE`]: crate::core::segment::MAX_COORDINATE
pub fn update_point_with(
    curve: &BezierCurve,
    segment_index: usize,
    which: ControlPoint,
    new_position: DVec2,
    tolerance: LinkTolerance,
) -> Result<BezierCurve, CurveError> {
    if !new_position.is_finite() {
        return Err(CurveError::NonFinitePosition);
    }
    let links = classify_segment(curve, segment_index, tolerance)?;

    let mut segments = curve.segments().to_vec();
    let old_position = segments[segment_index].point(which);
    let delta = new_position - old_position;
    if !delta.is_finite() {
        return Err(CurveError::NonFinitePosition);
    }
    segments[segment_index].set_point(which, new_position);

    match which {
        ControlPoint::P0 => {
            let current = &mut segments[segment_index];
            let moved_handle = current.points[1] + delta;
            current.points[1] = moved_handle;

            if links.linked_to_prev {
                let prev = &mut segments[segment_index - 1];
                prev.points[3] = new_position;
                prev.points[2] = mirror_point(moved_handle, new_position);
            }
        }
        ControlPoint::P1 => {
            if links.linked_to_prev {
                let anchor = segments[segment_index].points[0];
                segments[segment_index - 1].points[2] = mirror_point(new_position, anchor);
            }
        }
        ControlPoint::P2 => {
            if links.linked_to_next {
                let anchor = segments[segment_index].points[3];
                segments[segment_index + 1].points[1] = mirror_point(new_position, anchor);
            }
        }
        ControlPoint::P3 => {
            let current = &mut segments[segment_index];
            let moved_handle = current.points[2] + delta;
            current.points[2] = moved_handle;

            if links.linked_to_next {
                let next = &mut segments[segment_index + 1];
                next.points[0] = new_position;
                next.points[1] = mirror_point(moved_handle, new_position);
            }
        }
    }

    log::debug!(
        "Segment {} {:?} → ({:.3}, {:.3}), Vorgaenger gekoppelt: {}, Nachfolger gekoppelt: {}",
        segment_index,
        which,
        new_position.x,
        new_position.y,
        links.linked_to_prev,
        links.linked_to_next
    );

    BezierCurve::new(segments)
}
