//! Use-Case: Hover-Auflösung.

use crate::app::SelectionState;
use crate::app::events::SelectionCommand;
use crate::core::EntityId;

/// Liefert `SetHover`, wenn sich das Hover-Ziel ändert.
///
/// Unverändertes Ziel ergibt `None`, damit Pointer-Jitter nicht flackert.
pub fn resolve_hover(
    selection: &SelectionState,
    hit: Option<EntityId>,
) -> Option<SelectionCommand> {
    if selection.hovered_id == hit {
        None
    } else {
        Some(SelectionCommand::SetHover { id: hit })
    }
}
