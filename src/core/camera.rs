//! Kamera-Zugriff für die Unprojektion von Screen-Koordinaten.
//!
//! Der Selektions-Kern besitzt keine Kamera; er liest View-Projektion und
//! Surface-Größe über [`ViewportCamera`]. Die beiden Referenz-Kameras dienen
//! Hosts ohne eigene Kamera sowie den Tests.

use glam::{Mat4, Vec2, Vec3};
use serde::{Deserialize, Serialize};
use std::cell::RefCell;
use std::rc::Rc;

/// Art der Projektion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProjectionKind {
    /// Parallelprojektion: Box-Selektion ist exakt
    Orthographic,
    /// Zentralprojektion: Box-Selektion ist eine Näherung (siehe `rect`)
    Perspective,
}

/// Vom Host bereitgestellter Kamera-/Viewport-Zugriff.
pub trait ViewportCamera {
    /// View-Projektions-Matrix (Welt → Clip).
    fn view_projection(&self) -> Mat4;

    /// Inverse View-Projektion (NDC → Welt).
    fn inverse_view_projection(&self) -> Mat4 {
        self.view_projection().inverse()
    }

    /// Größe der interaktiven Fläche in Pixeln.
    fn surface_size(&self) -> Vec2;

    /// Art der Projektion.
    fn projection_kind(&self) -> ProjectionKind;
}

impl<C: ViewportCamera + ?Sized> ViewportCamera for Rc<C> {
    fn view_projection(&self) -> Mat4 {
        (**self).view_projection()
    }

    fn inverse_view_projection(&self) -> Mat4 {
        (**self).inverse_view_projection()
    }

    fn surface_size(&self) -> Vec2 {
        (**self).surface_size()
    }

    fn projection_kind(&self) -> ProjectionKind {
        (**self).projection_kind()
    }
}

impl<C: ViewportCamera> ViewportCamera for RefCell<C> {
    fn view_projection(&self) -> Mat4 {
        self.borrow().view_projection()
    }

    fn inverse_view_projection(&self) -> Mat4 {
        self.borrow().inverse_view_projection()
    }

    fn surface_size(&self) -> Vec2 {
        self.borrow().surface_size()
    }

    fn projection_kind(&self) -> ProjectionKind {
        self.borrow().projection_kind()
    }
}

/// Konvertiert Screen-Pixel (Ursprung oben links) in NDC [-1, 1].
///
/// Y wird gespiegelt, da NDC nach oben wächst.
pub fn screen_to_ndc(screen_pos: Vec2, surface_size: Vec2) -> Vec2 {
    let size = surface_size.max(Vec2::ONE);
    Vec2::new(
        screen_pos.x / size.x * 2.0 - 1.0,
        1.0 - screen_pos.y / size.y * 2.0,
    )
}

/// Unprojiziert einen NDC-Punkt in Weltkoordinaten (`depth` 0 = Near, 1 = Far).
pub fn unproject(inverse_view_projection: &Mat4, ndc: Vec2, depth: f32) -> Vec3 {
    inverse_view_projection.project_point3(ndc.extend(depth))
}

/// Orthografische Draufsicht auf die XY-Ebene mit Pan und Zoom.
#[derive(Debug, Clone)]
pub struct OrthographicCamera {
    /// Position der Kamera in Welt-Koordinaten (XY)
    pub position: Vec2,
    /// Zoom-Level (1.0 = normal, 2.0 = doppelt so groß)
    pub zoom: f32,
    /// Sichtbare Welt-Halbhöhe bei Zoom 1.0
    pub base_world_extent: f32,
    /// Größe der interaktiven Fläche in Pixeln
    pub surface_size: Vec2,
}

impl OrthographicCamera {
    /// Abstand des Auges zur XY-Ebene.
    pub const EYE_HEIGHT: f32 = 500.0;
    /// Near-Plane-Abstand.
    pub const NEAR: f32 = 0.1;
    /// Far-Plane-Abstand.
    pub const FAR: f32 = 1000.0;

    /// Erstellt eine Kamera im Ursprung.
    pub fn new(base_world_extent: f32, surface_size: Vec2) -> Self {
        Self {
            position: Vec2::ZERO,
            zoom: 1.0,
            base_world_extent,
            surface_size,
        }
    }

    /// Zentriert die Kamera auf einen Punkt
    pub fn look_at(&mut self, target: Vec2) {
        self.position = target;
    }

    /// Berechnet den Umrechnungsfaktor von Screen-Pixeln zu Welt-Einheiten.
    pub fn world_per_pixel(&self) -> f32 {
        2.0 * self.base_world_extent / (self.zoom * self.surface_size.y.max(1.0))
    }

    fn half_extents(&self) -> Vec2 {
        let half_height = self.base_world_extent / self.zoom;
        let aspect = self.surface_size.x / self.surface_size.y.max(1.0);
        Vec2::new(half_height * aspect, half_height)
    }
}

impl ViewportCamera for OrthographicCamera {
    fn view_projection(&self) -> Mat4 {
        let half = self.half_extents();
        let projection =
            Mat4::orthographic_rh(-half.x, half.x, -half.y, half.y, Self::NEAR, Self::FAR);
        let view = Mat4::look_at_rh(
            self.position.extend(Self::EYE_HEIGHT),
            self.position.extend(0.0),
            Vec3::Y,
        );
        projection * view
    }

    fn surface_size(&self) -> Vec2 {
        self.surface_size
    }

    fn projection_kind(&self) -> ProjectionKind {
        ProjectionKind::Orthographic
    }
}

/// Perspektivische Kamera (Auge → Ziel).
#[derive(Debug, Clone)]
pub struct PerspectiveCamera {
    /// Augpunkt
    pub eye: Vec3,
    /// Blickziel
    pub target: Vec3,
    /// Vertikales Sichtfeld in Grad
    pub fov_y_deg: f32,
    /// Near-Plane-Abstand
    pub near: f32,
    /// Far-Plane-Abstand
    pub far: f32,
    /// Größe der interaktiven Fläche in Pixeln
    pub surface_size: Vec2,
}

impl PerspectiveCamera {
    /// Erstellt eine Kamera mit 60° Sichtfeld.
    pub fn new(eye: Vec3, target: Vec3, surface_size: Vec2) -> Self {
        Self {
            eye,
            target,
            fov_y_deg: 60.0,
            near: 0.1,
            far: 1000.0,
            surface_size,
        }
    }
}

impl ViewportCamera for PerspectiveCamera {
    fn view_projection(&self) -> Mat4 {
        let aspect = self.surface_size.x / self.surface_size.y.max(1.0);
        let projection =
            Mat4::perspective_rh(self.fov_y_deg.to_radians(), aspect, self.near, self.far);
        let view = Mat4::look_at_rh(self.eye, self.target, Vec3::Y);
        projection * view
    }

    fn surface_size(&self) -> Vec2 {
        self.surface_size
    }

    fn projection_kind(&self) -> ProjectionKind {
        ProjectionKind::Perspective
    }
}
