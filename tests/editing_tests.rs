//! Integrationstests für die Punkt-Bearbeitung:
//! - Drag-Sitzung über eingepasster Zeichenfläche
//! - Verkettung bleibt über mehrere Bearbeitungen erhalten
//! - Fehlerfälle an der öffentlichen Schnittstelle

use approx::assert_relative_eq;
use bezier_timing_editor::{
    segment_links_all, update_point, BezierCurve, CoordinateMapping, CurveBounds, CurveError,
    DragSession, EngineOptions, LinkTolerance, ViewportTransform,
};
use glam::DVec2;

fn linked_pair() -> BezierCurve {
    BezierCurve::from_json(include_str!("fixtures/linked_pair.json"))
        .expect("Fixture muss gültig sein")
}

fn viewport_for(curve: &BezierCurve, options: &EngineOptions) -> ViewportTransform {
    ViewportTransform::fit(
        CurveBounds::of_curve(curve),
        DVec2::new(800.0, 600.0),
        options.padding_ratio,
    )
}

// ─── Drag über Display-Koordinaten ───────────────────────────────────────────

#[test]
fn test_drag_joint_keeps_segments_linked() {
    let options = EngineOptions::default();
    let mut curve = linked_pair();
    let mapping = viewport_for(&curve, &options);
    let mut session = DragSession::new(&options);

    let joint = mapping.to_display(DVec2::new(1.0, 0.0));
    assert!(session.on_drag_start(&curve, joint + DVec2::new(2.0, -2.0), &mapping));

    // Mehrere Zeiger-Bewegungen, jede auf der jeweils aktuellen Kurve
    for step in 1..=5 {
        let target = mapping.to_display(DVec2::new(1.0, 0.1 * step as f64));
        curve = session
            .on_drag_update(&curve, target, &mapping)
            .expect("gültige Bearbeitung")
            .expect("Drag aktiv");
    }
    session.on_drag_end();

    let segs = curve.segments();
    assert_relative_eq!(segs[0].end().y, 0.5, epsilon = 1e-9);
    assert_eq!(segs[0].end(), segs[1].start());
    let links = segment_links_all(&curve, LinkTolerance::default());
    assert!(links[1].linked_to_prev);
}

#[test]
fn test_click_far_from_points_starts_nothing() {
    let options = EngineOptions::default();
    let curve = linked_pair();
    let mapping = viewport_for(&curve, &options);
    let mut session = DragSession::new(&options);

    let empty_area = mapping.to_display(DVec2::new(1.5, 0.5));
    assert!(!session.on_drag_start(&curve, empty_area, &mapping));
    assert_eq!(
        session.on_drag_update(&curve, empty_area, &mapping),
        Ok(None)
    );
}

// ─── Direkte Bearbeitung ─────────────────────────────────────────────────────

#[test]
fn test_handle_edit_keeps_tangent_mirrored() {
    let curve = linked_pair();
    let updated = update_point(&curve, 0, 2, DVec2::new(0.5, 2.0)).expect("gültige Bearbeitung");

    let anchor = updated.segments()[0].end();
    let own = updated.segments()[0].points[2];
    let other = updated.segments()[1].points[1];
    assert_eq!(own + other, 2.0 * anchor);
}

#[test]
fn test_invalid_edit_leaves_curve_untouched() {
    let curve = linked_pair();
    let result = update_point(&curve, 5, 0, DVec2::ZERO);
    assert_eq!(
        result,
        Err(CurveError::SegmentIndexOutOfRange { index: 5, len: 2 })
    );
    assert_eq!(curve, linked_pair());
}
