//! Bezier-Timing-Editor (Kommandozeile).
//!
//! Tastet eine Kurve ab und gibt die Zeit/Wert-Folge als JSON aus.
//!
//! ```text
//! bezier-timing-editor [kurve.json | preset-name] [punkte-je-segment]
//! ```

use anyhow::{bail, Context};
use bezier_timing_editor::{
    sample_timed_values_with, BezierCurve, EasingPreset, EngineOptions, RandomJitter, SampleCount,
};
use std::path::Path;

/// Preset, wenn keine Kurve angegeben wurde.
const DEFAULT_PRESET: EasingPreset = EasingPreset::EaseInOutSine;

fn main() -> anyhow::Result<()> {
    // Logger initialisieren
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    log::info!(
        "Bezier-Timing-Editor v{} startet...",
        env!("CARGO_PKG_VERSION")
    );

    let options = EngineOptions::load_from_file(&EngineOptions::config_path());
    let mut args = std::env::args().skip(1);

    let curve = match args.next() {
        Some(source) => load_curve(&source)?,
        None => DEFAULT_PRESET.display_curve(),
    };
    let samples = match args.next() {
        Some(raw) => raw
            .parse::<usize>()
            .with_context(|| format!("Ungueltige Punktanzahl: {}", raw))?,
        None => options.default_samples,
    };

    let mut jitter = RandomJitter::from_entropy();
    let values = sample_timed_values_with(
        &curve,
        &SampleCount::PerSegment(samples),
        &options.sampling_config(),
        &options.timed_value_options(),
        &mut jitter,
    );
    log::info!(
        "{} Segmente, {} Eintraege erzeugt",
        curve.len(),
        values.len()
    );

    let json = serde_json::to_string_pretty(&values).context("JSON-Ausgabe fehlgeschlagen")?;
    println!("{}", json);
    Ok(())
}

/// Lädt eine Kurve aus einer JSON-Datei oder über einen Preset-Namen.
fn load_curve(source: &str) -> anyhow::Result<BezierCurve> {
    if let Some(preset) = EasingPreset::from_name(source) {
        log::info!("Verwende Preset: {}", preset.name());
        return Ok(preset.display_curve());
    }

    let path = Path::new(source);
    if !path.exists() {
        bail!(
            "Weder Datei noch bekanntes Preset: {} (Presets: {})",
            source,
            EasingPreset::ALL
                .iter()
                .map(|p| p.name())
                .collect::<Vec<_>>()
                .join(", ")
        );
    }

    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Kurven-Datei nicht lesbar: {}", path.display()))?;
    let curve = BezierCurve::from_json(&content)
        .with_context(|| format!("Kurven-Datei fehlerhaft: {}", path.display()))?;
    log::info!("Kurve geladen aus: {}", path.display());
    Ok(curve)
}
