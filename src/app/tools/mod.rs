//! Interaktions-Werkzeuge für Hosts mit Zeigereingabe.

/// Greifen und Ziehen von Kontrollpunkten.
pub mod curve_edit;
