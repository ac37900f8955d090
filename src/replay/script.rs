//! Input-Skript (TOML): geordnete Pointer- und Tastatur-Events.

use crate::app::events::{InputEvent, Key, KeyInput, Modifiers, PointerButton, PointerInput};
use anyhow::Context;
use glam::Vec2;
use serde::Deserialize;
use std::path::Path;

/// Modifier-Taste im Skript.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ModifierKey {
    Ctrl,
    Meta,
    Shift,
    Alt,
}

fn to_modifiers(keys: &[ModifierKey]) -> Modifiers {
    keys.iter().fold(Modifiers::NONE, |mut modifiers, key| {
        match key {
            ModifierKey::Ctrl => modifiers.ctrl = true,
            ModifierKey::Meta => modifiers.meta = true,
            ModifierKey::Shift => modifiers.shift = true,
            ModifierKey::Alt => modifiers.alt = true,
        }
        modifiers
    })
}

/// Pointer-Schritt.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PointerStep {
    /// Position in Surface-Pixeln
    pub at: Vec2,
    #[serde(default)]
    pub button: PointerButton,
    #[serde(default)]
    pub modifiers: Vec<ModifierKey>,
    #[serde(default)]
    pub off_surface: bool,
}

impl PointerStep {
    fn to_input(&self) -> PointerInput {
        let input = PointerInput::at(self.at.x, self.at.y)
            .with_button(self.button)
            .with_modifiers(to_modifiers(&self.modifiers));
        if self.off_surface {
            input.off_surface()
        } else {
            input
        }
    }
}

/// Tastatur-Schritt; `key` ist `"escape"` oder ein einzelnes Zeichen.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct KeyStep {
    pub key: String,
    #[serde(default)]
    pub modifiers: Vec<ModifierKey>,
}

impl KeyStep {
    fn to_input(&self) -> KeyInput {
        let key = if self.key.eq_ignore_ascii_case("escape") {
            Key::Escape
        } else {
            let mut chars = self.key.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) => Key::Char(c),
                _ => Key::Other,
            }
        };
        KeyInput::new(key).with_modifiers(to_modifiers(&self.modifiers))
    }
}

/// Ein Skript-Schritt.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum ScriptStep {
    PointerDown(PointerStep),
    PointerMove(PointerStep),
    PointerUp(PointerStep),
    KeyDown(KeyStep),
}

impl ScriptStep {
    /// Übersetzt den Schritt in ein Controller-Event.
    pub fn to_event(&self) -> InputEvent {
        match self {
            Self::PointerDown(step) => InputEvent::PointerDown(step.to_input()),
            Self::PointerMove(step) => InputEvent::PointerMove(step.to_input()),
            Self::PointerUp(step) => InputEvent::PointerUp(step.to_input()),
            Self::KeyDown(step) => InputEvent::KeyDown(step.to_input()),
        }
    }
}

/// Inhalt einer Skript-Datei.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct ScriptFile {
    #[serde(default)]
    pub steps: Vec<ScriptStep>,
}

impl ScriptFile {
    /// Parst ein Skript aus TOML-Text.
    pub fn parse(content: &str) -> anyhow::Result<Self> {
        toml::from_str(content).context("Skript-Datei ist kein gültiges TOML")
    }

    /// Lädt ein Skript aus einer Datei.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Skript-Datei nicht lesbar: {}", path.display()))?;
        Self::parse(&content).with_context(|| format!("Fehler in {}", path.display()))
    }
}
