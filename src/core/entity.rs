//! Entity-Referenzen und Bounding-Definitionen (read-only Eingaben des Hosts).

use glam::{Vec2, Vec3};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Stabile, eindeutige Entity-ID.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntityId(String);

impl EntityId {
    /// Erstellt eine ID aus beliebigem String-Inhalt (auch leer; Validierung erfolgt bei Registrierung).
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Gibt die ID als `&str` zurück.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Leere IDs sind ungültig.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for EntityId {
    fn from(value: &str) -> Self {
        Self(value.to_owned())
    }
}

impl From<String> for EntityId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// Entity aus dem Dokument, wie sie der Host bei der Registrierung übergibt.
///
/// Der Selektions-Kern mutiert diese Daten nie.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntityRef {
    /// Eindeutige ID
    pub id: EntityId,
    /// Weltposition
    pub position: Vec3,
    /// Skalierung entlang der lokalen X-Achse
    #[serde(default = "unit_scale")]
    pub x_scale: f32,
    /// Skalierung entlang der lokalen Y-Achse
    #[serde(default = "unit_scale")]
    pub y_scale: f32,
    /// Rotation um die lokale Z-Achse in Grad
    #[serde(default)]
    pub rotation_deg: f32,
    /// Optionaler Anzeigename
    #[serde(default)]
    pub name: Option<String>,
}

fn unit_scale() -> f32 {
    1.0
}

impl EntityRef {
    /// Erstellt eine unskalierte, unrotierte Entity an `position`.
    pub fn new(id: impl Into<EntityId>, position: Vec3) -> Self {
        Self {
            id: id.into(),
            position,
            x_scale: 1.0,
            y_scale: 1.0,
            rotation_deg: 0.0,
            name: None,
        }
    }

    /// Setzt die Skalierungsfaktoren.
    pub fn with_scale(mut self, x_scale: f32, y_scale: f32) -> Self {
        self.x_scale = x_scale;
        self.y_scale = y_scale;
        self
    }

    /// Setzt die Rotation (Grad, um Z).
    pub fn with_rotation_deg(mut self, rotation_deg: f32) -> Self {
        self.rotation_deg = rotation_deg;
        self
    }

    /// Setzt den Anzeigenamen.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Rotation in Radiant.
    pub fn rotation_rad(&self) -> f32 {
        self.rotation_deg.to_radians()
    }
}

/// Lokale Bounding-Definition einer Entity (unskaliert, unrotiert).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingDef {
    /// Breite im lokalen Frame
    pub width: f32,
    /// Höhe im lokalen Frame
    pub height: f32,
    /// Lokaler Mittelpunkt-Offset
    #[serde(default)]
    pub center: Vec2,
}

impl BoundingDef {
    /// Erstellt eine Bounding-Definition.
    pub fn new(width: f32, height: f32, center: Vec2) -> Self {
        Self {
            width,
            height,
            center,
        }
    }

    /// Bounding-Definition mit Mittelpunkt im Ursprung.
    pub fn centered(width: f32, height: f32) -> Self {
        Self::new(width, height, Vec2::ZERO)
    }
}
