//! Use-Case: Zeit/Wert-Folge aus der Kurvenform ableiten.
//!
//! Jeder abgetastete Punkt wird zu einem Eintrag `{progress, time, value}`.
//! `value` folgt der normierten Verschiebung entlang einer Achse,
//! `time` dem Index im festen Intervall. Beide können gestreut werden.

use super::sampling::{
    max_abs_displacement, sample_with, SampleCount, SampledPoint, SamplingConfig, ValueAxis,
};
use crate::app::jitter::{apply_jitter, JitterSource};
use crate::core::BezierCurve;
use crate::shared::numeric::{round_half_up, safe_div};
use crate::shared::options::{
    INTERVAL_JITTER_RATIO, INTERVAL_MS, MAX_VALUE, MIN_VALUE, VALUE_JITTER_RATIO,
};
use serde::{Deserialize, Serialize};

/// Parameter der Zeit/Wert-Ableitung.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimedValueOptions {
    /// Untere Grenze des Wertebereichs (auch Mindestwert nach Jitter)
    pub min_value: f64,
    /// Wert bei maximaler Verschiebung
    pub max_value: f64,
    /// ±Anteil des Werts als Rauschen
    pub value_jitter_ratio: f64,
    /// Nominaler Abstand zweier Punkte in Millisekunden
    pub interval: f64,
    /// ±Anteil des Intervalls als Rauschen
    pub interval_jitter_ratio: f64,
    /// Achse, deren Verschiebung den Wert steuert
    pub axis: ValueAxis,
}

impl TimedValueOptions {
    /// Gleiche Bereiche, aber ohne jegliches Rauschen.
    pub fn without_jitter(self) -> Self {
        Self {
            value_jitter_ratio: 0.0,
            interval_jitter_ratio: 0.0,
            ..self
        }
    }
}

impl Default for TimedValueOptions {
    fn default() -> Self {
        Self {
            min_value: MIN_VALUE,
            max_value: MAX_VALUE,
            value_jitter_ratio: VALUE_JITTER_RATIO,
            interval: INTERVAL_MS,
            interval_jitter_ratio: INTERVAL_JITTER_RATIO,
            axis: ValueAxis::Dy,
        }
    }
}

/// Eintrag der Zeit/Wert-Folge.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimedValue {
    /// Position über die gesamte Kurve, 0..=1
    pub progress: f64,
    /// Zeitversatz in Millisekunden (≥ 0)
    pub time: u64,
    /// Ganzzahlig gerundeter Wert (≥ `min_value`)
    pub value: f64,
    pub x: f64,
    pub y: f64,
    pub dx: f64,
    pub dy: f64,
}

/// Tastet die Kurve ab und leitet daraus die Zeit/Wert-Folge ab.
pub fn sample_timed_values(
    curve: &BezierCurve,
    count: impl Into<SampleCount>,
    options: &TimedValueOptions,
    jitter: &mut dyn JitterSource,
) -> Vec<TimedValue> {
    sample_timed_values_with(
        curve,
        &count.into(),
        &SamplingConfig::default(),
        options,
        jitter,
    )
}

/// Wie [`sample_timed_values`], mit expliziter Abtast-Konfiguration.
pub fn sample_timed_values_with(
    curve: &BezierCurve,
    count: &SampleCount,
    config: &SamplingConfig,
    options: &TimedValueOptions,
    jitter: &mut dyn JitterSource,
) -> Vec<TimedValue> {
    let points = sample_with(curve, count, config);
    timed_values_from_points(&points, options, jitter)
}

/// Leitet die Zeit/Wert-Folge aus bereits abgetasteten Punkten ab.
///
/// Normiert wird global über alle Punkte; bei maximaler Verschiebung 0
/// ist der normierte Anteil 0 und der Wert `min_value`.
pub fn timed_values_from_points(
    points: &[SampledPoint],
    options: &TimedValueOptions,
    jitter: &mut dyn JitterSource,
) -> Vec<TimedValue> {
    let max_abs = max_abs_displacement(points, options.axis);
    let value_span = options.max_value - options.min_value;

    points
        .iter()
        .enumerate()
        .map(|(i, p)| {
            let normalized = safe_div(p.displacement(options.axis), max_abs);
            let value_base = options.min_value + value_span * normalized;
            let value = apply_jitter(value_base, options.value_jitter_ratio, value_base, jitter);
            let value = round_half_up(value).max(options.min_value);

            let time_base = i as f64 * options.interval;
            let time = apply_jitter(
                time_base,
                options.interval_jitter_ratio,
                options.interval,
                jitter,
            );
            let time = round_half_up(time).max(0.0) as u64;

            TimedValue {
                progress: p.progress,
                time,
                value,
                x: p.x,
                y: p.y,
                dx: p.dx,
                dy: p.dy,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::jitter::{NoJitter, RandomJitter};
    use crate::core::BezierSegment;
    use glam::DVec2;

    fn hill() -> BezierCurve {
        // Display-Orientierung: y wächst nach unten, der Bogen geht nach oben (y < 0)
        BezierCurve::single(BezierSegment::new(
            DVec2::new(0.0, 0.0),
            DVec2::new(0.0, -1.0),
            DVec2::new(1.0, -1.0),
            DVec2::new(1.0, 0.0),
        ))
        .expect("gültiges Segment")
    }

    fn deterministic() -> TimedValueOptions {
        TimedValueOptions {
            min_value: 0.0,
            max_value: 100.0,
            ..TimedValueOptions::default()
        }
        .without_jitter()
    }

    #[test]
    fn test_values_follow_normalized_dy() {
        let values = sample_timed_values(&hill(), 3, &deterministic(), &mut NoJitter);

        assert_eq!(values.len(), 3);
        let v: Vec<f64> = values.iter().map(|t| t.value).collect();
        // dy = 0, 0.75, 0 → max 0.75 → 0, 100, 0
        assert_eq!(v, vec![0.0, 100.0, 0.0]);
    }

    #[test]
    fn test_times_follow_interval() {
        let values = sample_timed_values(&hill(), 5, &deterministic(), &mut NoJitter);
        let t: Vec<u64> = values.iter().map(|v| v.time).collect();
        assert_eq!(t, vec![0, 100, 200, 300, 400]);
    }

    #[test]
    fn test_value_clamped_to_min() {
        // Bogen nach unten → negative dy → Wert unter min_value wird angehoben
        let valley = BezierCurve::single(BezierSegment::new(
            DVec2::new(0.0, 0.0),
            DVec2::new(0.0, 1.0),
            DVec2::new(1.0, 1.0),
            DVec2::new(1.0, 0.0),
        ))
        .expect("gültiges Segment");
        let options = TimedValueOptions {
            min_value: 5.0,
            max_value: 50.0,
            ..TimedValueOptions::default()
        }
        .without_jitter();
        let values = sample_timed_values(&valley, 3, &options, &mut NoJitter);
        assert!(values.iter().all(|v| v.value >= 5.0));
        assert_eq!(values[1].value, 5.0);
    }

    #[test]
    fn test_flat_curve_yields_min_value() {
        let flat = BezierCurve::single(BezierSegment::new(
            DVec2::ZERO,
            DVec2::new(1.0, 0.0),
            DVec2::new(2.0, 0.0),
            DVec2::new(3.0, 0.0),
        ))
        .expect("gültiges Segment");
        let options = TimedValueOptions::default().without_jitter();
        let values = sample_timed_values(&flat, 4, &options, &mut NoJitter);
        assert!(values.iter().all(|v| v.value == 1.0));
    }

    #[test]
    fn test_dx_axis() {
        let options = TimedValueOptions {
            axis: ValueAxis::Dx,
            ..deterministic()
        };
        let values = sample_timed_values(&hill(), 3, &options, &mut NoJitter);
        let v: Vec<f64> = values.iter().map(|t| t.value).collect();
        assert_eq!(v, vec![0.0, 50.0, 100.0]);
    }

    #[test]
    fn test_without_jitter_is_deterministic() {
        let options = deterministic();
        let a = sample_timed_values(&hill(), 9, &options, &mut RandomJitter::from_seed(1));
        let b = sample_timed_values(&hill(), 9, &options, &mut RandomJitter::from_seed(2));
        assert_eq!(a, b);
    }

    #[test]
    fn test_seeded_jitter_is_reproducible_and_bounded() {
        let options = TimedValueOptions::default();
        let a = sample_timed_values(&hill(), 20, &options, &mut RandomJitter::from_seed(42));
        let b = sample_timed_values(&hill(), 20, &options, &mut RandomJitter::from_seed(42));
        assert_eq!(a, b);

        for (i, v) in a.iter().enumerate() {
            let nominal = i as f64 * options.interval;
            let spread = options.interval * options.interval_jitter_ratio;
            assert!(
                (v.time as f64 - nominal).abs() <= spread + 1.0,
                "Index {}",
                i
            );
            assert!(v.value >= options.min_value);
        }
    }

    #[test]
    fn test_time_never_negative() {
        let options = TimedValueOptions {
            interval_jitter_ratio: 1.0,
            ..deterministic()
        };
        struct Low;
        impl JitterSource for Low {
            fn next_unit(&mut self) -> f64 {
                0.0
            }
        }
        let values = sample_timed_values(&hill(), 3, &options, &mut Low);
        assert_eq!(values[0].time, 0);
        assert_eq!(values[1].time, 0);
    }

    #[test]
    fn test_serialized_entry_is_flat() {
        let values = sample_timed_values(&hill(), 2, &deterministic(), &mut NoJitter);
        let json = serde_json::to_value(values[1]).expect("serialisierbar");
        assert_eq!(json["time"], 100);
        assert_eq!(json["x"], 1.0);
        assert_eq!(json["progress"], 1.0);
    }
}
