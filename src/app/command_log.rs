//! Begrenztes Command-Log für Diagnose und Replay-Auswertung.
//!
//! Jeder Eintrag merkt sich, ob der Command Selektion oder Hover tatsächlich
//! verändert hat. So lassen sich No-op-Klicks (z.B. Modifier-Klick ins Leere)
//! von wirksamen Änderungen unterscheiden.

use super::events::SelectionCommand;

/// Ein protokollierter Command samt Wirkung.
#[derive(Debug, Clone, PartialEq)]
pub struct LoggedCommand {
    /// Ausgeführter Command
    pub command: SelectionCommand,
    /// `true`, wenn Selektion oder Hover geändert wurde
    pub changed: bool,
}

/// Speichert ausgeführte Commands in Reihenfolge.
#[derive(Debug, Default)]
pub struct CommandLog {
    entries: Vec<LoggedCommand>,
}

impl CommandLog {
    const MAX_ENTRIES: usize = 1000;

    /// Erstellt ein leeres Command-Log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Fügt einen ausgeführten Command hinzu.
    /// Begrenzt auf MAX_ENTRIES, die ältere Hälfte wird dann verworfen.
    pub fn record(&mut self, command: SelectionCommand, changed: bool) {
        if self.entries.len() >= Self::MAX_ENTRIES {
            self.entries.drain(..Self::MAX_ENTRIES / 2);
        }
        self.entries.push(LoggedCommand { command, changed });
    }

    /// Gibt die Anzahl der geloggten Commands zurück.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Gibt `true` zurück, wenn keine Commands vorhanden sind.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Liefert eine read-only Sicht auf alle Einträge.
    pub fn entries(&self) -> &[LoggedCommand] {
        &self.entries
    }

    /// Alle Commands ohne Hover-Wechsel, in Ausführungsreihenfolge.
    pub fn resolutions(&self) -> impl Iterator<Item = &SelectionCommand> {
        self.entries
            .iter()
            .map(|entry| &entry.command)
            .filter(|command| !matches!(command, SelectionCommand::SetHover { .. }))
    }

    /// Anzahl der Commands, die nichts verändert haben.
    pub fn no_op_count(&self) -> usize {
        self.entries.iter().filter(|entry| !entry.changed).count()
    }

    /// Letzter ausgeführter Command.
    pub fn last(&self) -> Option<&LoggedCommand> {
        self.entries.last()
    }
}
