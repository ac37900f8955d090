//! Use-Case: Box-Selektion (Rubber-Band per Drag).
//!
//! Die beiden Screen-Ecken werden in NDC umgerechnet, für Near- und Far-Tiefe
//! durch die inverse View-Projektion unprojiziert und ergeben acht Weltpunkte.
//!
//! - Orthografische Kamera: Die AABB dieser Punkte ist exakt das Prisma unter
//!   dem Rechteck.
//! - Perspektivische Kamera: Das echte Selektionsvolumen ist ein Frustum. Die
//!   AABB der acht Punkte ist nur eine Näherung und kann Volumes neben dem
//!   Rechteck einschließen (siehe Test
//!   `perspective_box_approximation_overselects`). Mit
//!   `exact_perspective_selection` wird stattdessen gegen die sechs
//!   Frustum-Ebenen getestet.

use crate::app::VolumeRegistry;
use crate::app::events::SelectionCommand;
use crate::core::{
    Aabb, EntityId, ProjectionKind, SelectionFrustum, ViewportCamera, screen_to_ndc, unproject,
};
use crate::shared::BoxSelectPolicy;
use glam::{Vec2, Vec3};
use indexmap::IndexSet;

/// Weltraum-Selektionsvolumen einer Box-Selektion.
#[derive(Debug, Clone)]
pub enum SelectionRegion {
    /// Achsen-alignierte Box der acht unprojizierten Ecken
    Box(Aabb),
    /// Exaktes Frustum (nur perspektivisch und auf Wunsch)
    Frustum(SelectionFrustum),
}

impl SelectionRegion {
    /// Prüft die Welt-AABB eines Volumes gemäß Policy.
    pub fn accepts(&self, volume_aabb: &Aabb, policy: BoxSelectPolicy) -> bool {
        match (self, policy) {
            (Self::Box(region), BoxSelectPolicy::Contain) => region.contains_aabb(volume_aabb),
            (Self::Box(region), BoxSelectPolicy::Intersect) => region.intersects(volume_aabb),
            (Self::Frustum(region), BoxSelectPolicy::Contain) => region.contains_aabb(volume_aabb),
            (Self::Frustum(region), BoxSelectPolicy::Intersect) => {
                region.intersects_aabb(volume_aabb)
            }
        }
    }
}

/// Unprojiziert das Screen-Rechteck in ein Selektionsvolumen.
pub fn selection_region<C: ViewportCamera + ?Sized>(
    camera: &C,
    corner_a: Vec2,
    corner_b: Vec2,
    exact_perspective: bool,
) -> SelectionRegion {
    let surface = camera.surface_size();
    let a = screen_to_ndc(corner_a, surface);
    let b = screen_to_ndc(corner_b, surface);
    let quad = [
        Vec2::new(a.x, a.y),
        Vec2::new(b.x, a.y),
        Vec2::new(b.x, b.y),
        Vec2::new(a.x, b.y),
    ];

    let inverse = camera.inverse_view_projection();
    let near: [Vec3; 4] = quad.map(|ndc| unproject(&inverse, ndc, 0.0));
    let far: [Vec3; 4] = quad.map(|ndc| unproject(&inverse, ndc, 1.0));

    if exact_perspective && camera.projection_kind() == ProjectionKind::Perspective {
        return SelectionRegion::Frustum(SelectionFrustum::from_corners(near, far));
    }

    let aabb = near
        .iter()
        .chain(far.iter())
        .fold(Aabb::new(near[0], near[0]), |acc, p| acc.including(*p));
    SelectionRegion::Box(aabb)
}

/// Sammelt alle pickbaren Volumes, die das Selektionsvolumen akzeptiert.
///
/// Reihenfolge = Registrierungsreihenfolge.
pub fn collect_candidates(
    registry: &VolumeRegistry,
    region: &SelectionRegion,
    policy: BoxSelectPolicy,
) -> IndexSet<EntityId> {
    registry
        .all()
        .filter(|volume| volume.pickable)
        .filter(|volume| region.accepts(&volume.world_aabb(), policy))
        .map(|volume| volume.entity_id.clone())
        .collect()
}

/// Ohne Modifier ersetzt die Box die Selektion, mit Modifier wird vereinigt.
pub fn resolve_box(candidates: IndexSet<EntityId>, additive: bool) -> SelectionCommand {
    if additive {
        SelectionCommand::UnionWith { ids: candidates }
    } else {
        SelectionCommand::ReplaceWith { ids: candidates }
    }
}
