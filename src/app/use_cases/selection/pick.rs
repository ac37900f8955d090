//! Use-Case: Selektion per Klick.

use crate::app::SelectionState;
use crate::app::events::SelectionCommand;
use crate::core::EntityId;

/// Übersetzt einen Klick-Treffer in einen Selektions-Command.
///
/// - kein Treffer, kein Modifier → Selektion aufheben
/// - kein Treffer, Modifier → keine Änderung (`None`)
/// - Treffer mit Modifier → umschalten
/// - Treffer ohne Modifier → war die Selektion genau `{E}`, wird sie aufgehoben,
///   sonst wird nur `E` selektiert
pub fn resolve_click(
    selection: &SelectionState,
    hit: Option<&EntityId>,
    additive: bool,
) -> Option<SelectionCommand> {
    match (hit, additive) {
        (None, false) => Some(SelectionCommand::ClearSelection),
        (None, true) => None,
        (Some(id), true) => Some(SelectionCommand::Toggle { id: id.clone() }),
        (Some(id), false) if selection.is_exactly(id) => Some(SelectionCommand::ClearSelection),
        (Some(id), false) => Some(SelectionCommand::SelectOnly { id: id.clone() }),
    }
}
