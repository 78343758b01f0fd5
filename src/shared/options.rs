//! Zentrale Konfiguration für den Bezier-Timing-Editor.
//!
//! `EngineOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use crate::app::use_cases::sampling::{SamplingConfig, ValueAxis, DEFAULT_SEGMENT_SAMPLES};
use crate::app::use_cases::timed_values::TimedValueOptions;
use crate::core::LinkTolerance;
use serde::{Deserialize, Serialize};

// ── Verkettung ──────────────────────────────────────────────────────

/// Toleranz, unter der zwei Anker als derselbe Punkt gelten.
pub const LINK_TOLERANCE: f64 = crate::core::point::DEFAULT_LINK_TOLERANCE;

// ── Interaktion ─────────────────────────────────────────────────────

/// Greif-Radius für Kontrollpunkte in Display-Pixeln.
pub const HIT_RADIUS_PX: f64 = 10.0;
/// Rand-Anteil je Seite beim Einpassen in die Zeichenfläche.
pub const PADDING_RATIO: f64 = 0.05;

// ── Abtastung ───────────────────────────────────────────────────────

/// Nachkommastellen der gerundeten Ausgabe.
pub const OUTPUT_DECIMALS: u32 = 3;

// ── Zeit/Wert-Folge ─────────────────────────────────────────────────

/// Mindestwert der Folge.
pub const MIN_VALUE: f64 = 1.0;
/// Wert bei maximaler Verschiebung.
pub const MAX_VALUE: f64 = 50.0;
/// Wert-Rauschen als ±Anteil.
pub const VALUE_JITTER_RATIO: f64 = 0.3;
/// Nominales Intervall in Millisekunden.
pub const INTERVAL_MS: f64 = 100.0;
/// Intervall-Rauschen als ±Anteil.
pub const INTERVAL_JITTER_RATIO: f64 = 0.2;

// ── Laufzeit-Optionen (serialisierbar) ─────────────────────────────

/// Alle zur Laufzeit änderbaren Engine-Optionen.
/// Wird als `bezier_timing_editor.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct EngineOptions {
    // ── Verkettung ──────────────────────────────────────────────
    /// Toleranz für die Anker-Gleichheit
    pub link_tolerance: f64,
    /// Euklidischer Abstand statt Vergleich je Achse
    pub link_euclidean: bool,

    // ── Interaktion ─────────────────────────────────────────────
    /// Greif-Radius in Display-Pixeln
    pub hit_radius_px: f64,
    /// Rand-Anteil je Seite (wird auf 0..=0.5 geklemmt)
    pub padding_ratio: f64,

    // ── Abtastung ───────────────────────────────────────────────
    /// Ausgabe runden
    pub round_output: bool,
    /// Nachkommastellen bei gerundeter Ausgabe
    pub output_decimals: u32,
    /// Abtastpunkte je Segment, wenn der Host nichts vorgibt
    pub default_samples: usize,

    // ── Zeit/Wert-Folge ─────────────────────────────────────────
    pub min_value: f64,
    pub max_value: f64,
    pub value_jitter_ratio: f64,
    /// Nominales Intervall in Millisekunden
    pub interval_ms: f64,
    pub interval_jitter_ratio: f64,
    /// Achse, deren Verschiebung den Wert steuert
    pub axis: ValueAxis,
}

impl Default for EngineOptions {
    fn default() -> Self {
        Self {
            link_tolerance: LINK_TOLERANCE,
            link_euclidean: false,
            hit_radius_px: HIT_RADIUS_PX,
            padding_ratio: PADDING_RATIO,
            round_output: true,
            output_decimals: OUTPUT_DECIMALS,
            default_samples: DEFAULT_SEGMENT_SAMPLES,
            min_value: MIN_VALUE,
            max_value: MAX_VALUE,
            value_jitter_ratio: VALUE_JITTER_RATIO,
            interval_ms: INTERVAL_MS,
            interval_jitter_ratio: INTERVAL_JITTER_RATIO,
            axis: ValueAxis::Dy,
        }
    }
}

impl EngineOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler → Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("bezier_timing_editor"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("bezier_timing_editor.toml")
    }

    /// Verkettungs-Toleranz gemäß `link_euclidean`.
    pub fn link_tolerance(&self) -> LinkTolerance {
        if self.link_euclidean {
            LinkTolerance::radius(self.link_tolerance)
        } else {
            LinkTolerance::per_axis(self.link_tolerance)
        }
    }

    /// Abtast-Parameter für [`crate::sample_with`].
    pub fn sampling_config(&self) -> SamplingConfig {
        SamplingConfig {
            link_tolerance: self.link_tolerance(),
            decimals: self.round_output.then_some(self.output_decimals),
        }
    }

    /// Parameter der Zeit/Wert-Folge.
    pub fn timed_value_options(&self) -> TimedValueOptions {
        TimedValueOptions {
            min_value: self.min_value,
            max_value: self.max_value,
            value_jitter_ratio: self.value_jitter_ratio,
            interval: self.interval_ms,
            interval_jitter_ratio: self.interval_jitter_ratio,
            axis: self.axis,
        }
    }
}
