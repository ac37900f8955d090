//! Bounding-Volume: flacher, unsichtbarer Proxy pro Entity für Hit-Tests und Highlighting.

use super::bounds::Aabb;
use super::entity::{BoundingDef, EntityId, EntityRef};
use glam::{Vec2, Vec3};

/// Visueller Zustand eines Proxys. Genau einer ist aktiv.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum VolumeStyle {
    /// Voll transparent, ausgeblendet
    #[default]
    Default,
    /// Heller, transluzenter Hover-Highlight
    Hovered,
    /// Transluzenter Selektions-Highlight
    Selected,
}

/// Gewünschter Zustand beim Restyling. `selected` hat Vorrang vor `hovered`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StyleFlags {
    /// Entity ist selektiert
    pub selected: bool,
    /// Entity liegt unter dem Mauszeiger
    pub hovered: bool,
}

impl StyleFlags {
    /// Löst die Flags in genau einen Style auf.
    pub fn resolve(self) -> VolumeStyle {
        if self.selected {
            VolumeStyle::Selected
        } else if self.hovered {
            VolumeStyle::Hovered
        } else {
            VolumeStyle::Default
        }
    }
}

/// Ein registrierter Proxy.
#[derive(Debug, Clone, PartialEq)]
pub struct BoundingVolume {
    /// Besitzende Entity
    pub entity_id: EntityId,
    /// Anzeigename der Entity (falls vorhanden)
    pub name: Option<String>,
    /// Weltposition des Proxy-Mittelpunkts
    pub position: Vec3,
    /// Skalierte Größe (`width * x_scale` × `height * y_scale`)
    pub size: Vec2,
    /// Rotation um Z in Radiant
    pub rotation_rad: f32,
    /// Aktueller Style
    pub style: VolumeStyle,
    /// Sichtbarkeit des Highlights
    pub visible: bool,
    /// Vom Host steuerbar: nimmt an Hit-Test und Box-Selektion teil
    pub pickable: bool,
}

impl BoundingVolume {
    /// Berechnet die Welt-Transformation aus Entity und lokaler Bounding-Definition.
    ///
    /// Der lokale Mittelpunkt wird rotiert, mit den Skalierungsfaktoren skaliert
    /// und zur Weltposition addiert.
    pub fn from_entity(entity: &EntityRef, bounds: &BoundingDef) -> Self {
        let rotation_rad = entity.rotation_rad();
        let rotated = Vec2::from_angle(rotation_rad).rotate(bounds.center);
        let offset = rotated * Vec2::new(entity.x_scale, entity.y_scale);

        Self {
            entity_id: entity.id.clone(),
            name: entity.name.clone(),
            position: entity.position + offset.extend(0.0),
            size: Vec2::new(
                (bounds.width * entity.x_scale).abs(),
                (bounds.height * entity.y_scale).abs(),
            ),
            rotation_rad,
            style: VolumeStyle::Default,
            visible: false,
            pickable: true,
        }
    }

    /// Übernimmt die Transformation eines neu berechneten Volumes, Style bleibt erhalten.
    pub(crate) fn update_transform(&mut self, other: BoundingVolume) {
        self.name = other.name;
        self.position = other.position;
        self.size = other.size;
        self.rotation_rad = other.rotation_rad;
    }

    /// Die vier Ecken des rotierten Rechtecks in Weltkoordinaten.
    pub fn corners(&self) -> [Vec3; 4] {
        let half = self.size * 0.5;
        let rotation = Vec2::from_angle(self.rotation_rad);
        [
            Vec2::new(-half.x, -half.y),
            Vec2::new(half.x, -half.y),
            Vec2::new(half.x, half.y),
            Vec2::new(-half.x, half.y),
        ]
        .map(|local| self.position + rotation.rotate(local).extend(0.0))
    }

    /// Achsen-alignierte Welt-Box des Proxys.
    pub fn world_aabb(&self) -> Aabb {
        let [a, b, c, d] = self.corners();
        Aabb::new(a, b).including(c).including(d)
    }

    /// Prüft einen Punkt in der Proxy-Ebene gegen das rotierte Rechteck (inkl. Rand).
    pub fn contains_world_point(&self, point: Vec3) -> bool {
        let local = Vec2::from_angle(-self.rotation_rad).rotate((point - self.position).truncate());
        let half = self.size * 0.5;
        local.x.abs() <= half.x && local.y.abs() <= half.y
    }
}
