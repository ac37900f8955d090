//! Gemeinsame Hilfsfunktionen für Selektionslogik.

use crate::app::VolumeRegistry;
use crate::core::EntityId;

/// Filtert ein Hit-Test-Ergebnis auf registrierte, pickbare Entities.
///
/// Der Hit-Tester kann Proxys melden, die inzwischen entfernt oder gesperrt
/// wurden; solche Treffer zählen als "kein Treffer".
pub fn pickable_hit(registry: &VolumeRegistry, hit: Option<EntityId>) -> Option<EntityId> {
    let id = hit?;
    if registry.is_pickable(&id) {
        Some(id)
    } else {
        log::trace!("Hit auf nicht pickbare/unbekannte Entity verworfen: {}", id);
        None
    }
}
