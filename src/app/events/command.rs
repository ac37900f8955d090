use crate::core::EntityId;
use indexmap::IndexSet;

/// Commands sind mutierende Schritte auf dem Selektionszustand, die zentral ausgeführt werden.
#[derive(Debug, Clone, PartialEq)]
pub enum SelectionCommand {
    /// Entity zur Selektion hinzufügen
    Select { id: EntityId },
    /// Entity aus der Selektion entfernen
    Deselect { id: EntityId },
    /// Selektion umschalten (Cmd/Ctrl-Klick)
    Toggle { id: EntityId },
    /// Selektion durch genau diese Entity ersetzen
    SelectOnly { id: EntityId },
    /// Selektion durch die Kandidaten ersetzen (Box ohne Modifier)
    ReplaceWith { ids: IndexSet<EntityId> },
    /// Kandidaten zur Selektion hinzufügen (Box mit Modifier)
    UnionWith { ids: IndexSet<EntityId> },
    /// Alle registrierten Entities selektieren
    SelectAll,
    /// Selektion aufheben
    ClearSelection,
    /// Hover-Ziel setzen oder löschen
    SetHover { id: Option<EntityId> },
}
