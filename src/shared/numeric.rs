//! Numerische Hilfen: sichere Division und Rundung.

/// Division mit definiertem Ergebnis 0 bei Nenner 0.
pub fn safe_div(a: f64, b: f64) -> f64 {
    if b == 0.0 {
        0.0
    } else {
        a / b
    }
}

/// Rundet halb nach oben auf eine ganze Zahl (`-2.5 → -2`, `2.5 → 3`).
pub fn round_half_up(value: f64) -> f64 {
    (value + 0.5).floor()
}

/// Rundet halb nach oben auf `decimals` Nachkommastellen.
///
/// Läuft `value · 10^decimals` über, bleibt `value` ungerundet. Bei dieser
/// Größenordnung hat f64 ohnehin keine Nachkommastellen mehr.
pub fn round_fixed(value: f64, decimals: u32) -> f64 {
    let factor = 10f64.powi(decimals as i32);
    let scaled = value * factor;
    if !scaled.is_finite() {
        return value;
    }
    round_half_up(scaled) / factor
}
