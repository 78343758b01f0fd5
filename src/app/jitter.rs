//! Austauschbare Zufallsquelle für Jitter auf Zeit und Wert.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Liefert gleichverteilte Zahlen in `[0, 1)`.
pub trait JitterSource {
    fn next_unit(&mut self) -> f64;
}

/// Jitter ohne Rauschen: liefert immer die Mitte (0.5 → Faktor 0).
#[derive(Debug, Clone, Copy, Default)]
pub struct NoJitter;

impl JitterSource for NoJitter {
    fn next_unit(&mut self) -> f64 {
        0.5
    }
}

/// Jitter aus einem `rand`-Generator.
#[derive(Debug, Clone)]
pub struct RandomJitter<R: Rng> {
    rng: R,
}

impl<R: Rng> RandomJitter<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RandomJitter<StdRng> {
    /// Reproduzierbare Folge aus einem Seed.
    pub fn from_seed(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    /// Nicht-reproduzierbare Folge aus OS-Entropie.
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }
}

impl<R: Rng> JitterSource for RandomJitter<R> {
    fn next_unit(&mut self) -> f64 {
        self.rng.gen::<f64>()
    }
}

/// `base + jitter_base · (2U − 1) · ratio`
///
/// Bei `ratio == 0` wird nicht gezogen; das Ergebnis ist exakt `base`.
pub fn apply_jitter(base: f64, ratio: f64, jitter_base: f64, source: &mut dyn JitterSource) -> f64 {
    if ratio == 0.0 {
        return base;
    }
    let u = source.next_unit();
    base + jitter_base * (2.0 * u - 1.0) * ratio
}
