//! Rubber-Band-Overlay der Box-Selektion.

use glam::Vec2;

/// Rechteck in Screen-Pixeln (Ursprung oben links).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenRect {
    /// Obere linke Ecke
    pub min: Vec2,
    /// Untere rechte Ecke
    pub max: Vec2,
}

impl ScreenRect {
    /// Berechnet das achsen-alignierte Rect aus zwei beliebigen Eckpunkten.
    pub fn from_corners(a: Vec2, b: Vec2) -> Self {
        Self {
            min: a.min(b),
            max: a.max(b),
        }
    }

    /// Breite und Höhe.
    pub fn size(&self) -> Vec2 {
        self.max - self.min
    }
}

/// Zeichnet das Auswahlrechteck während eines Drags.
pub trait SelectionOverlay {
    /// Rechteck anzeigen oder aktualisieren.
    fn show_rect(&mut self, rect: ScreenRect);
    /// Rechteck entfernen.
    fn hide(&mut self);
}

/// Overlay ohne Darstellung.
#[derive(Debug, Default)]
pub struct NoOverlay;

impl SelectionOverlay for NoOverlay {
    fn show_rect(&mut self, _rect: ScreenRect) {}

    fn hide(&mut self) {}
}
