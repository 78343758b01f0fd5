#![no_main]

use bezier_timing_editor::{sample, update_point, BezierCurve};
use glam::DVec2;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };
    let Ok(curve) = BezierCurve::from_json(text) else {
        return;
    };

    let points = sample(&curve, 3);
    assert!(points.len() >= 2);

    let _ = update_point(&curve, curve.len() - 1, 3, DVec2::new(0.5, 0.5));
});
