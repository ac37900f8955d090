use crate::app::events::SelectionSnapshot;
use crate::core::{EntityId, StyleFlags};
use indexmap::IndexSet;

/// Auswahlbezogener Zustand (einzige Quelle der Wahrheit für die Selektion)
#[derive(Debug, Clone, Default)]
pub struct SelectionState {
    /// Menge der aktuell selektierten Entity-IDs (IndexSet für deterministische Reihenfolge)
    pub selected_ids: IndexSet<EntityId>,
    /// Entity unter dem Mauszeiger (darf gleichzeitig selektiert sein)
    pub hovered_id: Option<EntityId>,
}

impl SelectionState {
    /// Erstellt einen leeren Selektionszustand.
    pub fn new() -> Self {
        Self::default()
    }

    /// Prüft, ob die Entity selektiert ist.
    pub fn is_selected(&self, id: &EntityId) -> bool {
        self.selected_ids.contains(id)
    }

    /// Prüft, ob die Entity gehovert ist.
    pub fn is_hovered(&self, id: &EntityId) -> bool {
        self.hovered_id.as_ref() == Some(id)
    }

    /// Gibt `true` zurück, wenn die Selektion genau aus `id` besteht.
    pub fn is_exactly(&self, id: &EntityId) -> bool {
        self.selected_ids.len() == 1 && self.selected_ids.contains(id)
    }

    /// Style-Flags, mit denen der Proxy von `id` dargestellt werden muss.
    pub fn style_flags(&self, id: &EntityId) -> StyleFlags {
        StyleFlags {
            selected: self.is_selected(id),
            hovered: self.is_hovered(id),
        }
    }

    /// Unveränderliche Kopie der aktuellen Selektion.
    pub fn snapshot(&self) -> SelectionSnapshot {
        SelectionSnapshot::new(&self.selected_ids)
    }
}
