//! Achsen-alignierte Boxen und Selektions-Frustum für die Box-Selektion.

use glam::Vec3;

/// Achsen-alignierte Bounding-Box in Weltkoordinaten.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    /// Minimale Ecke
    pub min: Vec3,
    /// Maximale Ecke
    pub max: Vec3,
}

impl Aabb {
    /// Erstellt eine Box aus zwei beliebigen Ecken.
    pub fn new(a: Vec3, b: Vec3) -> Self {
        Self {
            min: a.min(b),
            max: a.max(b),
        }
    }

    /// Kleinste Box, die alle Punkte umschließt. `None` bei leerer Eingabe.
    pub fn from_points(points: impl IntoIterator<Item = Vec3>) -> Option<Self> {
        let mut iter = points.into_iter();
        let first = iter.next()?;
        Some(iter.fold(Self::new(first, first), Self::including))
    }

    /// Erweitert die Box um einen Punkt.
    pub fn including(self, p: Vec3) -> Self {
        Self {
            min: self.min.min(p),
            max: self.max.max(p),
        }
    }

    /// Prüft, ob `other` vollständig (inkl. Rand) in dieser Box liegt.
    pub fn contains_aabb(&self, other: &Aabb) -> bool {
        self.min.cmple(other.min).all() && self.max.cmpge(other.max).all()
    }

    /// Prüft, ob sich beide Boxen überlappen (Berührung zählt).
    pub fn intersects(&self, other: &Aabb) -> bool {
        self.min.cmple(other.max).all() && self.max.cmpge(other.min).all()
    }

    /// Die acht Eckpunkte der Box.
    pub fn corners(&self) -> [Vec3; 8] {
        let (lo, hi) = (self.min, self.max);
        [
            Vec3::new(lo.x, lo.y, lo.z),
            Vec3::new(hi.x, lo.y, lo.z),
            Vec3::new(lo.x, hi.y, lo.z),
            Vec3::new(hi.x, hi.y, lo.z),
            Vec3::new(lo.x, lo.y, hi.z),
            Vec3::new(hi.x, lo.y, hi.z),
            Vec3::new(lo.x, hi.y, hi.z),
            Vec3::new(hi.x, hi.y, hi.z),
        ]
    }
}

/// Ebene in Hesse-Normalform; `normal` zeigt ins Innere des Volumens.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Plane {
    normal: Vec3,
    d: f32,
}

impl Plane {
    /// Ebene durch drei Punkte, orientiert zum Punkt `inside`.
    fn through(a: Vec3, b: Vec3, c: Vec3, inside: Vec3) -> Option<Self> {
        let normal = (b - a).cross(c - a).try_normalize()?;
        let mut plane = Self {
            normal,
            d: -normal.dot(a),
        };
        if plane.signed_distance(inside) < 0.0 {
            plane.normal = -plane.normal;
            plane.d = -plane.d;
        }
        Some(plane)
    }

    fn signed_distance(&self, p: Vec3) -> f32 {
        self.normal.dot(p) + self.d
    }
}

/// Toleranz für Punkte exakt auf einer Frustum-Ebene.
const PLANE_EPSILON: f32 = 1e-4;

/// Echtes Selektions-Frustum aus den acht unprojizierten Rechteck-Ecken.
///
/// Wird für Perspektiv-Kameras verwendet, wenn die exakte Selektion aktiviert ist.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectionFrustum {
    planes: Vec<Plane>,
}

impl SelectionFrustum {
    /// Baut das Frustum aus Near-Quad `[n00, n10, n11, n01]` und Far-Quad in gleicher Reihenfolge.
    ///
    /// Degenerierte Seiten (z.B. Rechteck ohne Breite) liefern keine Ebene; ein solches
    /// Frustum enthält nichts.
    pub fn from_corners(near: [Vec3; 4], far: [Vec3; 4]) -> Self {
        let centroid = (near.iter().chain(far.iter()).copied().sum::<Vec3>()) / 8.0;
        let faces = [
            (near[0], near[1], near[2]),
            (far[0], far[2], far[1]),
            (near[0], far[0], far[1]),
            (near[1], far[1], far[2]),
            (near[2], far[2], far[3]),
            (near[3], far[3], far[0]),
        ];
        let planes: Vec<Plane> = faces
            .into_iter()
            .filter_map(|(a, b, c)| Plane::through(a, b, c, centroid))
            .collect();
        if planes.len() < faces.len() {
            // Degeneriert: leeres Volumen erzwingen
            return Self { planes: Vec::new() };
        }
        Self { planes }
    }

    /// Punkt liegt innerhalb aller Ebenen.
    pub fn contains_point(&self, p: Vec3) -> bool {
        !self.planes.is_empty()
            && self
                .planes
                .iter()
                .all(|plane| plane.signed_distance(p) >= -PLANE_EPSILON)
    }

    /// Box liegt vollständig im (konvexen) Frustum.
    pub fn contains_aabb(&self, aabb: &Aabb) -> bool {
        aabb.corners().iter().all(|&c| self.contains_point(c))
    }

    /// Konservativer Überlappungstest: keine Ebene trennt die Box vollständig ab.
    pub fn intersects_aabb(&self, aabb: &Aabb) -> bool {
        if self.planes.is_empty() {
            return false;
        }
        let corners = aabb.corners();
        self.planes.iter().all(|plane| {
            corners
                .iter()
                .any(|&c| plane.signed_distance(c) >= -PLANE_EPSILON)
        })
    }
}
