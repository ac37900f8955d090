//! Zentrale Konfiguration des Selektions-Subsystems.
//!
//! `SelectionOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use serde::{Deserialize, Serialize};

// ── Proxy-Styles ────────────────────────────────────────────────────

/// Default-Style: voll transparent (RGBA).
pub const STYLE_DEFAULT_COLOR: [f32; 4] = [0.0, 0.0, 0.0, 0.0];
/// Hover-Style: heller, transluzenter Highlight (RGBA: Hellblau).
pub const STYLE_HOVERED_COLOR: [f32; 4] = [0.6, 0.85, 1.0, 0.2];
/// Selektions-Style: transluzenter Highlight (RGBA: Blau).
pub const STYLE_SELECTED_COLOR: [f32; 4] = [0.1, 0.45, 1.0, 0.4];

// ── Interaktion ─────────────────────────────────────────────────────

/// Bewegung ab der ein Press als Drag gilt (Pixel). 0.0 = jede Bewegung.
pub const DRAG_THRESHOLD_PX: f32 = 0.0;

/// Regel für die Box-Selektion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BoxSelectPolicy {
    /// Volume muss vollständig im Selektionsvolumen liegen
    #[default]
    Contain,
    /// Überlappung genügt
    Intersect,
}

/// Alle zur Laufzeit änderbaren Selektions-Optionen.
/// Wird als `viewer_selection.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectionOptions {
    // ── Styles ──────────────────────────────────────────────────
    /// Farbe unselektierter Proxys
    pub style_default_color: [f32; 4],
    /// Farbe gehoverter Proxys
    pub style_hovered_color: [f32; 4],
    /// Farbe selektierter Proxys
    pub style_selected_color: [f32; 4],

    // ── Interaktion ─────────────────────────────────────────────
    /// Klick/Drag-Schwelle in Pixeln
    #[serde(default = "default_drag_threshold_px")]
    pub drag_threshold_px: f32,
    /// Contain- oder Intersect-Regel für die Box-Selektion
    #[serde(default)]
    pub box_select_policy: BoxSelectPolicy,
    /// Perspektiv-Kameras mit echtem Frustum-Test statt AABB-Näherung
    #[serde(default)]
    pub exact_perspective_selection: bool,
}

impl Default for SelectionOptions {
    fn default() -> Self {
        Self {
            style_default_color: STYLE_DEFAULT_COLOR,
            style_hovered_color: STYLE_HOVERED_COLOR,
            style_selected_color: STYLE_SELECTED_COLOR,

            drag_threshold_px: DRAG_THRESHOLD_PX,
            box_select_policy: BoxSelectPolicy::Contain,
            exact_perspective_selection: false,
        }
    }
}

/// Serde-Default für `drag_threshold_px` (Abwärtskompatibilität bestehender TOML-Dateien).
fn default_drag_threshold_px() -> f32 {
    DRAG_THRESHOLD_PX
}

impl SelectionOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("viewer_selection"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("viewer_selection.toml")
    }
}
