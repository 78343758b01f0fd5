//! Zustand einer Drag-Sitzung über einer Kurve.

use super::hit_test::PointHit;
use crate::core::LinkTolerance;
use crate::shared::EngineOptions;

/// Verbindet Hit-Test und Punkt-Bearbeitung für einen Host.
///
/// Hält nur, welcher Punkt gegriffen ist; die Kurve selbst gehört dem Host.
#[derive(Debug, Clone)]
pub struct DragSession {
    /// Gerade gegriffener Punkt
    pub(crate) dragging: Option<PointHit>,
    /// Greif-Radius in Display-Einheiten
    pub hit_radius: f64,
    /// Toleranz für die Verkettung bei der Bearbeitung
    pub link_tolerance: LinkTolerance,
}

impl DragSession {
    /// Erstellt eine Sitzung mit Radius und Toleranz aus den Optionen.
    pub fn new(options: &EngineOptions) -> Self {
        Self {
            dragging: None,
            hit_radius: options.hit_radius_px,
            link_tolerance: options.link_tolerance(),
        }
    }

    /// Aktuell gegriffener Punkt.
    pub fn dragging(&self) -> Option<PointHit> {
        self.dragging
    }

    /// true während ein Punkt gegriffen ist.
    pub fn is_dragging(&self) -> bool {
        self.dragging.is_some()
    }
}

impl Default for DragSession {
    fn default() -> Self {
        Self::new(&EngineOptions::default())
    }
}
