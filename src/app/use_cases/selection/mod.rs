//! Use-Case-Funktionen für die Entity-Selektion.
//!
//! Aufgeteilt nach Selektionsmodus:
//! - `pick`: Einzelklick (Treffer → Command)
//! - `rect`: Box-Selektion (Screen-Rechteck → Weltvolumen → Kandidaten)
//! - `hover`: Hover-Ziel
//! - `helpers`: Gemeinsame Hilfsfunktionen

mod helpers;
mod hover;
mod pick;
mod rect;

pub use helpers::pickable_hit;
pub use hover::resolve_hover;
pub use pick::resolve_click;
pub use rect::{SelectionRegion, collect_candidates, resolve_box, selection_region};
