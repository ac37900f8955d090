//! Core-Domänentypen: Entities, Bounding-Volumes, Geometrie und Kamera-Zugriff.

pub mod bounds;
pub mod camera;
pub mod entity;
pub mod volume;

pub use bounds::{Aabb, SelectionFrustum};
pub use camera::{
    OrthographicCamera, PerspectiveCamera, ProjectionKind, ViewportCamera, screen_to_ndc,
    unproject,
};
pub use entity::{BoundingDef, EntityId, EntityRef};
pub use volume::{BoundingVolume, StyleFlags, VolumeStyle};
