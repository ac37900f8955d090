//! Handler für Selektions-Commands.
//!
//! Jede Funktion mutiert `SelectionState` und restylt genau die Proxys, deren
//! Flags sich geändert haben. Rückgabe `true` = Selektion oder Hover geändert.

use crate::app::events::SelectionCommand;
use crate::app::{SelectionState, VolumeRegistry};
use crate::core::EntityId;
use indexmap::IndexSet;

/// Führt einen Selektions-Command aus.
pub fn execute(
    state: &mut SelectionState,
    registry: &mut VolumeRegistry,
    command: &SelectionCommand,
) -> bool {
    match command {
        SelectionCommand::Select { id } => select(state, registry, id),
        SelectionCommand::Deselect { id } => deselect(state, registry, id),
        SelectionCommand::Toggle { id } => toggle(state, registry, id),
        SelectionCommand::SelectOnly { id } => select_only(state, registry, id),
        SelectionCommand::ReplaceWith { ids } => replace_with(state, registry, ids),
        SelectionCommand::UnionWith { ids } => union_with(state, registry, ids),
        SelectionCommand::SelectAll => select_all(state, registry),
        SelectionCommand::ClearSelection => clear(state, registry),
        SelectionCommand::SetHover { id } => set_hover(state, registry, id.as_ref()),
    }
}

fn restyle(state: &SelectionState, registry: &mut VolumeRegistry, id: &EntityId) {
    registry.set_style(id, state.style_flags(id));
}

/// Fügt eine Entity zur Selektion hinzu.
///
/// No-op für bereits selektierte, leere oder nicht registrierte IDs.
pub fn select(state: &mut SelectionState, registry: &mut VolumeRegistry, id: &EntityId) -> bool {
    if id.is_empty() || state.is_selected(id) {
        return false;
    }
    if !registry.contains(id) {
        log::trace!("select ignoriert, ID nicht registriert: {}", id);
        return false;
    }
    state.selected_ids.insert(id.clone());
    restyle(state, registry, id);
    true
}

/// Entfernt eine Entity aus der Selektion; der Proxy fällt auf Hovered oder Default zurück.
pub fn deselect(state: &mut SelectionState, registry: &mut VolumeRegistry, id: &EntityId) -> bool {
    if !state.selected_ids.shift_remove(id) {
        return false;
    }
    restyle(state, registry, id);
    true
}

/// Schaltet die Selektion einer Entity um.
pub fn toggle(state: &mut SelectionState, registry: &mut VolumeRegistry, id: &EntityId) -> bool {
    if state.is_selected(id) {
        deselect(state, registry, id)
    } else {
        select(state, registry, id)
    }
}

/// Ersetzt die Selektion durch genau `id`.
pub fn select_only(
    state: &mut SelectionState,
    registry: &mut VolumeRegistry,
    id: &EntityId,
) -> bool {
    let others: Vec<EntityId> = state
        .selected_ids
        .iter()
        .filter(|selected| *selected != id)
        .cloned()
        .collect();

    let mut changed = false;
    for other in &others {
        changed |= deselect(state, registry, other);
    }
    changed |= select(state, registry, id);
    changed
}

/// Ersetzt die Selektion durch die Kandidaten (leere Menge ⇒ leere Selektion).
///
/// Bereits selektierte Kandidaten werden nicht neu gestylt.
pub fn replace_with(
    state: &mut SelectionState,
    registry: &mut VolumeRegistry,
    ids: &IndexSet<EntityId>,
) -> bool {
    let dropped: Vec<EntityId> = state
        .selected_ids
        .iter()
        .filter(|selected| !ids.contains(*selected))
        .cloned()
        .collect();

    let mut changed = false;
    for id in &dropped {
        changed |= deselect(state, registry, id);
    }
    changed |= union_with(state, registry, ids);
    changed
}

/// Fügt die Kandidaten zur Selektion hinzu (entfernt nie).
pub fn union_with(
    state: &mut SelectionState,
    registry: &mut VolumeRegistry,
    ids: &IndexSet<EntityId>,
) -> bool {
    let mut changed = false;
    for id in ids {
        changed |= select(state, registry, id);
    }
    changed
}

/// Selektiert alle registrierten Entities.
pub fn select_all(state: &mut SelectionState, registry: &mut VolumeRegistry) -> bool {
    let all: Vec<EntityId> = registry.ids().cloned().collect();
    let mut changed = false;
    for id in &all {
        changed |= select(state, registry, id);
    }
    log::info!("Alle {} Entities selektiert", state.selected_ids.len());
    changed
}

/// Hebt die Selektion auf.
pub fn clear(state: &mut SelectionState, registry: &mut VolumeRegistry) -> bool {
    // Snapshot, da deselect die Menge verändert
    let selected: Vec<EntityId> = state.selected_ids.iter().cloned().collect();
    let mut changed = false;
    for id in &selected {
        changed |= deselect(state, registry, id);
    }
    changed
}

/// Setzt das Hover-Ziel. Unverändertes Ziel restylt nichts.
pub fn set_hover(
    state: &mut SelectionState,
    registry: &mut VolumeRegistry,
    id: Option<&EntityId>,
) -> bool {
    if state.hovered_id.as_ref() == id {
        return false;
    }

    let previous = state.hovered_id.take();
    state.hovered_id = id.cloned();

    if let Some(previous) = previous {
        restyle(state, registry, &previous);
    }
    if let Some(current) = id {
        restyle(state, registry, current);
    }
    true
}

/// Verwirft selektierte und gehoverte IDs, die nicht mehr registriert sind.
///
/// Greift, wenn der Host Volumes direkt an der Registry entfernt. Die Proxys
/// existieren nicht mehr, daher wird nichts restylt.
pub fn retain_registered(state: &mut SelectionState, registry: &VolumeRegistry) -> bool {
    let before = state.selected_ids.len();
    state.selected_ids.retain(|id| registry.contains(id));
    let mut changed = state.selected_ids.len() != before;

    if state
        .hovered_id
        .as_ref()
        .is_some_and(|id| !registry.contains(id))
    {
        state.hovered_id = None;
        changed = true;
    }
    if changed {
        log::debug!("Nicht mehr registrierte IDs aus Selektion/Hover entfernt");
    }
    changed
}
