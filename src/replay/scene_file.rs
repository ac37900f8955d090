//! Szenen-Datei (TOML): Kamera, Surface-Größe und Entities mit Bounds.

use crate::core::{
    BoundingDef, EntityRef, OrthographicCamera, PerspectiveCamera, ProjectionKind, ViewportCamera,
};
use anyhow::Context;
use glam::{Mat4, Vec2, Vec3};
use serde::Deserialize;
use std::path::Path;

/// Kamera-Beschreibung in der Szenen-Datei.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CameraSpec {
    /// Draufsicht auf die XY-Ebene
    Orthographic {
        /// Sichtbare Welt-Halbhöhe bei Zoom 1.0
        extent: f32,
        #[serde(default)]
        position: Vec2,
        #[serde(default = "default_zoom")]
        zoom: f32,
    },
    /// Zentralprojektion Auge → Ziel
    Perspective {
        eye: Vec3,
        target: Vec3,
        #[serde(default = "default_fov_y_deg")]
        fov_y_deg: f32,
    },
}

fn default_zoom() -> f32 {
    1.0
}

fn default_fov_y_deg() -> f32 {
    60.0
}

/// Eine Entity der Szene samt optionaler Bounding-Definition.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SceneEntity {
    #[serde(flatten)]
    pub entity: EntityRef,
    /// Fehlt sie, wird die Entity beim Laden übersprungen
    #[serde(default)]
    pub bounds: Option<BoundingDef>,
    #[serde(default = "default_pickable")]
    pub pickable: bool,
}

fn default_pickable() -> bool {
    true
}

/// Inhalt einer Szenen-Datei.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SceneFile {
    /// Größe der interaktiven Fläche in Pixeln
    pub surface: Vec2,
    pub camera: CameraSpec,
    #[serde(default)]
    pub entities: Vec<SceneEntity>,
}

impl SceneFile {
    /// Parst eine Szene aus TOML-Text.
    pub fn parse(content: &str) -> anyhow::Result<Self> {
        let scene: Self = toml::from_str(content).context("Szenen-Datei ist kein gültiges TOML")?;
        if scene.surface.min_element() <= 0.0 {
            anyhow::bail!("Surface-Größe muss positiv sein: {:?}", scene.surface);
        }
        Ok(scene)
    }

    /// Lädt eine Szene aus einer Datei.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Szenen-Datei nicht lesbar: {}", path.display()))?;
        Self::parse(&content).with_context(|| format!("Fehler in {}", path.display()))
    }

    /// Baut die Kamera der Szene.
    pub fn build_camera(&self) -> SceneCamera {
        match self.camera {
            CameraSpec::Orthographic {
                extent,
                position,
                zoom,
            } => {
                let mut camera = OrthographicCamera::new(extent, self.surface);
                camera.look_at(position);
                camera.zoom = zoom;
                SceneCamera::Orthographic(camera)
            }
            CameraSpec::Perspective {
                eye,
                target,
                fov_y_deg,
            } => {
                let mut camera = PerspectiveCamera::new(eye, target, self.surface);
                camera.fov_y_deg = fov_y_deg;
                SceneCamera::Perspective(camera)
            }
        }
    }
}

/// Kamera einer geladenen Szene.
#[derive(Debug, Clone)]
pub enum SceneCamera {
    Orthographic(OrthographicCamera),
    Perspective(PerspectiveCamera),
}

impl ViewportCamera for SceneCamera {
    fn view_projection(&self) -> Mat4 {
        match self {
            Self::Orthographic(camera) => camera.view_projection(),
            Self::Perspective(camera) => camera.view_projection(),
        }
    }

    fn surface_size(&self) -> Vec2 {
        match self {
            Self::Orthographic(camera) => camera.surface_size(),
            Self::Perspective(camera) => camera.surface_size(),
        }
    }

    fn projection_kind(&self) -> ProjectionKind {
        match self {
            Self::Orthographic(camera) => camera.projection_kind(),
            Self::Perspective(camera) => camera.projection_kind(),
        }
    }
}
