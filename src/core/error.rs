//! Fehlertypen des Kurven-Kerns.

use thiserror::Error;

/// Fehler bei ungültiger Kurvenform oder ungültigen Indizes.
///
/// Alle Operationen prüfen ihre Eingaben vollständig, bevor sie etwas verändern.
/// Ein Fehler bedeutet daher nie eine halb bearbeitete Kurve.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CurveError {
    /// Kurve ohne Segmente
    #[error("Kurve enthaelt keine Segmente")]
    EmptyCurve,

    /// Segment mit falscher Punktanzahl
    #[error("Segment {segment} hat {points} Punkte, erwartet werden genau 4")]
    InvalidSegment {
        /// Index des Segments in der Eingabe
        segment: usize,
        /// Tatsächliche Punktanzahl
        points: usize,
    },

    /// NaN oder Unendlich in einer Koordinate
    #[error("Segment {segment}, Punkt {point}: Koordinate ist nicht endlich")]
    NonFiniteCoordinate {
        /// Index des Segments
        segment: usize,
        /// Index des Punkts im Segment (0..=3)
        point: usize,
    },

    /// Koordinate endlich, aber zu groß für überlauffreie Rechnung
    #[error("Segment {segment}, Punkt {point}: Koordinate ausserhalb des erlaubten Bereichs")]
    CoordinateOutOfRange {
        /// Index des Segments
        segment: usize,
        /// Index des Punkts im Segment (0..=3)
        point: usize,
    },

    /// Segment-Index außerhalb der Kurve
    #[error("Segment-Index {index} ausserhalb der Kurve (Laenge {len})")]
    SegmentIndexOutOfRange {
        /// Angefragter Index
        index: usize,
        /// Anzahl der Segmente
        len: usize,
    },

    /// Punkt-Index außerhalb von P0..P3
    #[error("Punkt-Index {index} ausserhalb von 0..=3")]
    PointIndexOutOfRange {
        /// Angefragter Index
        index: usize,
    },

    /// Neue Position eines Punkts ist nicht endlich
    #[error("Neue Punktposition ist nicht endlich")]
    NonFinitePosition,
}
