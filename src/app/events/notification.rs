//! "Selection changed"-Benachrichtigung an den Host.

use crate::core::EntityId;
use indexmap::IndexSet;
use std::fmt;
use std::sync::Arc;

/// Unveränderliche Kopie der Selektion zum Zeitpunkt der Benachrichtigung.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SelectionSnapshot {
    ids: Arc<IndexSet<EntityId>>,
}

impl SelectionSnapshot {
    /// Kopiert die übergebene Menge.
    pub fn new(ids: &IndexSet<EntityId>) -> Self {
        Self {
            ids: Arc::new(ids.clone()),
        }
    }

    /// Prüft die Mitgliedschaft.
    pub fn contains(&self, id: &EntityId) -> bool {
        self.ids.contains(id)
    }

    /// Anzahl selektierter Entities.
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Gibt `true` zurück, wenn nichts selektiert ist.
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// IDs in Selektionsreihenfolge.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = &EntityId> {
        self.ids.iter()
    }

    /// IDs sortiert (für deterministische Ausgabe).
    pub fn sorted_ids(&self) -> Vec<EntityId> {
        let mut ids: Vec<EntityId> = self.ids.iter().cloned().collect();
        ids.sort_unstable();
        ids
    }
}

/// Auslöser einer Benachrichtigung.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SelectionCause {
    /// Klick ohne Bewegung
    Click,
    /// Rubber-Band-Selektion
    BoxSelect,
    /// Escape: explizites "alles abwählen"
    ClearRequested,
    /// Cmd/Ctrl + A
    SelectAll,
}

impl SelectionCause {
    /// Stabiler Name für Logs und Replay-Ausgabe.
    pub fn as_str(&self) -> &'static str {
        match self {
            SelectionCause::Click => "click",
            SelectionCause::BoxSelect => "box_select",
            SelectionCause::ClearRequested => "clear_requested",
            SelectionCause::SelectAll => "select_all",
        }
    }
}

impl fmt::Display for SelectionCause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Event "Selektion geändert".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionChanged {
    /// Selektion nach dem Schritt
    pub selection: SelectionSnapshot,
    /// Auslöser
    pub cause: SelectionCause,
}
