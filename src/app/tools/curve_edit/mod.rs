//! Kurven-Bearbeitung per Zeiger: Kontrollpunkte greifen und ziehen.
//!
//! Der Host liefert Zeigerpositionen in Display-Koordinaten und eine
//! [`CoordinateMapping`](crate::core::CoordinateMapping). Drosselung schneller
//! Bewegungen bleibt Sache des Hosts.
//!
//! Aufgeteilt in:
//! - `state`    — Sitzungszustand
//! - `hit_test` — Punkt unter dem Zeiger finden
//! - `drag`     — on_drag_start/update/end

mod drag;
mod state;

pub use hit_test::{locate_hit_point, PointHit};
pub use state::DragSession;
