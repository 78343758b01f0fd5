//! Use-Case: Abtastung einer (mehrteiligen) Kurve mit globalem Fortschritt.
//!
//! Verkettete Segmente teilen sich ihren Verbindungspunkt; er erscheint in der
//! flachen Ausgabe genau einmal. Fortschritt und Verschiebung beziehen sich
//! immer auf die ganze Kurve, nie auf ein einzelnes Segment.

use crate::core::{segment_links_all, BezierCurve, LinkTolerance};
use crate::shared::numeric::{round_fixed, safe_div};
use crate::shared::options::OUTPUT_DECIMALS;
use serde::{Deserialize, Serialize};

/// Mindestanzahl Abtastpunkte je Segment (Start und Ende).
pub const MIN_SEGMENT_SAMPLES: usize = 2;
/// Ersatzwert für fehlende Einträge bei expliziten Segment-Anzahlen.
pub const DEFAULT_SEGMENT_SAMPLES: usize = 10;

/// Wie viele Punkte je Segment abgetastet werden.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SampleCount {
    /// Gleiche Anzahl in jedem Segment
    PerSegment(usize),
    /// Gesamtanzahl, möglichst gleichmäßig auf die Segmente verteilt
    Total(usize),
    /// Anzahl je Segment; fehlende Einträge → [`DEFAULT_SEGMENT_SAMPLES`]
    Explicit(Vec<usize>),
}

impl From<usize> for SampleCount {
    fn from(count: usize) -> Self {
        SampleCount::PerSegment(count)
    }
}

impl From<Vec<usize>> for SampleCount {
    fn from(counts: Vec<usize>) -> Self {
        SampleCount::Explicit(counts)
    }
}

impl SampleCount {
    /// Löst die Angabe in eine Anzahl je Segment auf (jeweils ≥ 2).
    pub fn per_segment(&self, segment_count: usize) -> Vec<usize> {
        let raw: Vec<usize> = match self {
            SampleCount::PerSegment(k) => vec![*k; segment_count],
            SampleCount::Total(n) => {
                let base = n / segment_count.max(1);
                let remainder = n % segment_count.max(1);
                (0..segment_count)
                    .map(|i| base + usize::from(i < remainder))
                    .collect()
            }
            SampleCount::Explicit(counts) => {
                if counts.len() < segment_count {
                    log::warn!(
                        "{} Segment-Anzahlen fuer {} Segmente, Rest mit {} aufgefuellt",
                        counts.len(),
                        segment_count,
                        DEFAULT_SEGMENT_SAMPLES
                    );
                }
                (0..segment_count)
                    .map(|i| counts.get(i).copied().unwrap_or(DEFAULT_SEGMENT_SAMPLES))
                    .collect()
            }
        };

        raw.into_iter()
            .enumerate()
            .map(|(i, count)| {
                if count < MIN_SEGMENT_SAMPLES {
                    log::warn!(
                        "Segment {}: {} Abtastpunkte auf {} angehoben",
                        i,
                        count,
                        MIN_SEGMENT_SAMPLES
                    );
                    MIN_SEGMENT_SAMPLES
                } else {
                    count
                }
            })
            .collect()
    }
}

/// Laufzeit-Parameter der Abtastung.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SamplingConfig {
    /// Toleranz für die Verkettungserkennung
    pub link_tolerance: LinkTolerance,
    /// Rundung von `x`, `y`, `dx`, `dy` auf n Nachkommastellen (`None` = ungerundet).
    /// `progress` bleibt immer ungerundet, sonst fielen bei vielen Punkten
    /// benachbarte Werte zusammen.
    pub decimals: Option<u32>,
}

impl Default for SamplingConfig {
    fn default() -> Self {
        Self {
            link_tolerance: LinkTolerance::default(),
            decimals: Some(OUTPUT_DECIMALS),
        }
    }
}

/// Verschiebungs-Achse, die einen Wert steuert.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueAxis {
    /// Horizontale Verschiebung `x − origin.x`
    Dx,
    /// Vertikale Verschiebung `origin.y − y` (nach oben positiv in Display-Koordinaten)
    #[default]
    Dy,
}

/// Abgetasteter Kurvenpunkt.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SampledPoint {
    /// Position über die gesamte Kurve, 0..=1
    pub progress: f64,
    pub x: f64,
    pub y: f64,
    /// `x − origin.x`
    pub dx: f64,
    /// `origin.y − y`
    pub dy: f64,
}

impl SampledPoint {
    /// Verschiebung entlang der gewählten Achse.
    pub fn displacement(&self, axis: ValueAxis) -> f64 {
        match axis {
            ValueAxis::Dx => self.dx,
            ValueAxis::Dy => self.dy,
        }
    }
}

/// Abtastung mit Standard-Konfiguration.
pub fn sample(curve: &BezierCurve, count: impl Into<SampleCount>) -> Vec<SampledPoint> {
    sample_with(curve, &count.into(), &SamplingConfig::default())
}

/// Tastet alle Segmente ab und liefert eine flache, deduplizierte Punktliste.
///
/// Länge: Summe der Segment-Anzahlen minus eins je verketteter Fuge.
pub fn sample_with(
    curve: &BezierCurve,
    count: &SampleCount,
    config: &SamplingConfig,
) -> Vec<SampledPoint> {
    let segments = curve.segments();
    let links = segment_links_all(curve, config.link_tolerance);
    let counts = count.per_segment(segments.len());

    // Erster Punkt eines verketteten Segments = letzter Punkt des Vorgängers
    let skips: Vec<usize> = links
        .iter()
        .map(|l| usize::from(l.linked_to_prev))
        .collect();
    let total: usize = counts.iter().zip(&skips).map(|(c, s)| c - s).sum();

    log::debug!(
        "Abtastung: {} Segmente, {} Punkte gesamt ({:?})",
        segments.len(),
        total,
        counts
    );

    let origin = curve.origin();
    let round = |v: f64| config.decimals.map_or(v, |d| round_fixed(v, d));
    let mut points = Vec::with_capacity(total);

    for ((segment, &seg_count), &skip) in segments.iter().zip(&counts).zip(&skips) {
        for i in skip..seg_count {
            let t = safe_div(i as f64, (seg_count - 1) as f64);
            let p = segment.evaluate(t);
            let progress = safe_div(points.len() as f64, (total - 1) as f64);
            points.push(SampledPoint {
                progress,
                x: round(p.x),
                y: round(p.y),
                dx: round(p.x - origin.x),
                dy: round(origin.y - p.y),
            });
        }
    }

    points
}

/// Größter Betrag der Verschiebung entlang `axis` (0 bei leerer Liste).
pub fn max_abs_displacement(points: &[SampledPoint], axis: ValueAxis) -> f64 {
    points
        .iter()
        .map(|p| p.displacement(axis).abs())
        .fold(0.0, f64::max)
}
