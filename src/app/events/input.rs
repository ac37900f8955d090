//! Rohe Eingabe-Events der interaktiven Fläche.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Maustaste eines Pointer-Events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PointerButton {
    /// Linke / primäre Taste
    #[default]
    Primary,
    /// Rechte Taste
    Secondary,
    /// Mittlere Taste
    Middle,
}

/// Gehaltene Modifier-Tasten.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Modifiers {
    /// Ctrl
    pub ctrl: bool,
    /// Cmd (macOS) / Meta
    pub meta: bool,
    /// Shift
    pub shift: bool,
    /// Alt / Option
    pub alt: bool,
}

impl Modifiers {
    /// Keine Modifier.
    pub const NONE: Self = Self {
        ctrl: false,
        meta: false,
        shift: false,
        alt: false,
    };

    /// Nur Ctrl gehalten.
    pub const CTRL: Self = Self {
        ctrl: true,
        ..Self::NONE
    };

    /// Nur Cmd/Meta gehalten.
    pub const META: Self = Self {
        meta: true,
        ..Self::NONE
    };

    /// Primärer Multi-Select-Modifier (Ctrl, auf macOS Cmd).
    pub fn command(&self) -> bool {
        self.ctrl || self.meta
    }
}

/// Pointer-Event in Pixeln der interaktiven Fläche (Ursprung oben links).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerInput {
    /// Position relativ zur Fläche
    pub position: Vec2,
    /// Auslösende Taste (bei Move: irrelevant)
    pub button: PointerButton,
    /// Ob das Event-Ziel die interaktive Fläche ist
    pub on_surface: bool,
    /// Gehaltene Modifier
    pub modifiers: Modifiers,
}

impl PointerInput {
    /// Primär-Event auf der Fläche ohne Modifier.
    pub fn at(x: f32, y: f32) -> Self {
        Self {
            position: Vec2::new(x, y),
            button: PointerButton::Primary,
            on_surface: true,
            modifiers: Modifiers::NONE,
        }
    }

    /// Setzt die Modifier.
    pub fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }

    /// Setzt die Taste.
    pub fn with_button(mut self, button: PointerButton) -> Self {
        self.button = button;
        self
    }

    /// Markiert das Event als außerhalb der Fläche.
    pub fn off_surface(mut self) -> Self {
        self.on_surface = false;
        self
    }
}

/// Taste eines Keyboard-Events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    /// Escape
    Escape,
    /// Buchstabe/Zeichen (Groß-/Kleinschreibung egal)
    Char(char),
    /// Alles andere
    Other,
}

/// Keyboard-Event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyInput {
    /// Gedrückte Taste
    pub key: Key,
    /// Gehaltene Modifier
    pub modifiers: Modifiers,
}

impl KeyInput {
    /// Taste ohne Modifier.
    pub fn new(key: Key) -> Self {
        Self {
            key,
            modifiers: Modifiers::NONE,
        }
    }

    /// Setzt die Modifier.
    pub fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }

    /// Escape (Selektion aufheben).
    pub fn is_escape(&self) -> bool {
        self.key == Key::Escape
    }

    /// Cmd/Ctrl + A (Alle selektieren).
    pub fn is_select_all(&self) -> bool {
        self.modifiers.command()
            && matches!(self.key, Key::Char(c) if c.eq_ignore_ascii_case(&'a'))
    }
}

/// Ergebnis eines Keyboard-Events für den Host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct KeyOutcome {
    /// Host soll das Plattform-Default-Verhalten unterdrücken
    pub prevent_default: bool,
}

/// Alle Eingaben, die der Controller verarbeitet.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Taste gedrückt
    PointerDown(PointerInput),
    /// Zeiger bewegt
    PointerMove(PointerInput),
    /// Taste losgelassen
    PointerUp(PointerInput),
    /// Keyboard-Taste gedrückt
    KeyDown(KeyInput),
}
