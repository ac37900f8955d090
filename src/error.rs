//! Fehlertaxonomie des Selektions-Subsystems.
//!
//! Keiner dieser Fehler ist für den Host fatal: `InvalidInput` wird bei der
//! Registrierung geloggt und übersprungen, `UnregisteredReference` ist immer ein
//! stilles No-op, `UnsupportedProjection` nur ein einmaliger Hinweis.

use crate::core::EntityId;

/// Fehler des Selektions-Subsystems.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SelectionError {
    /// Fehlende Entity-ID oder Bounding-Definition bei der Registrierung
    #[error("Ungültige Eingabe: {0}")]
    InvalidInput(String),
    /// Operation auf eine ID ohne registriertes Volume
    #[error("Kein Bounding-Volume für Entity '{0}' registriert")]
    UnregisteredReference(EntityId),
    /// Box-Selektion mit Perspektiv-Kamera über die AABB-Näherung
    #[error(
        "Box-Selektion mit Perspektiv-Kamera nutzt eine achsen-alignierte Näherung des Frustums"
    )]
    UnsupportedProjection,
    /// Registry wurde bereits freigegeben
    #[error("Volume-Registry wurde bereits freigegeben")]
    RegistryDisposed,
}
