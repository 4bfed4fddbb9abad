//! Primitive bounding volumes
//!
//! Axis-aligned and oriented boxes with the value-level queries the
//! rest of the engine is built on. All operations are pure.

use crate::foundation::math::{Mat3, Vec3};

/// Axis-Aligned Bounding Box
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    /// Minimum corner of the bounding box
    pub min: Vec3,
    /// Maximum corner of the bounding box
    pub max: Vec3,
}

impl Aabb {
    /// Create a new AABB from min and max points
    pub fn new(min: Vec3, max: Vec3) -> Self {
        Self { min, max }
    }

    /// Create an AABB centered at a point with given half-extents
    pub fn from_center_extents(center: Vec3, extents: Vec3) -> Self {
        Self {
            min: center - extents,
            max: center + extents,
        }
    }

    /// Tight bounds of a point cloud, or `None` for an empty slice
    pub fn from_points(points: &[Vec3]) -> Option<Self> {
        let first = *points.first()?;
        let mut min = first;
        let mut max = first;
        for p in &points[1..] {
            min = min.inf(p);
            max = max.sup(p);
        }
        Some(Self { min, max })
    }

    /// Get the center of the AABB
    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }

    /// Get the half-extents of the AABB
    pub fn extents(&self) -> Vec3 {
        (self.max - self.min) * 0.5
    }

    /// Inset every face by `margin`, shrinking the box uniformly.
    ///
    /// Used to tighten a collision volume relative to its visual mesh
    /// so grazing near-misses are not reported as hits. Extents are
    /// clamped at zero, so over-shrinking collapses the box to its
    /// center instead of turning it inside out.
    pub fn shrunk(&self, margin: f32) -> Self {
        let extents = (self.extents() - Vec3::repeat(margin)).sup(&Vec3::zeros());
        Self::from_center_extents(self.center(), extents)
    }

    /// Check if this AABB contains a point
    pub fn contains_point(&self, point: Vec3) -> bool {
        point.x >= self.min.x && point.x <= self.max.x &&
        point.y >= self.min.y && point.y <= self.max.y &&
        point.z >= self.min.z && point.z <= self.max.z
    }

    /// Check if this AABB intersects another AABB
    pub fn intersects(&self, other: &Aabb) -> bool {
        self.min.x <= other.max.x && self.max.x >= other.min.x &&
        self.min.y <= other.max.y && self.max.y >= other.min.y &&
        self.min.z <= other.max.z && self.max.z >= other.min.z
    }
}

/// Oriented Bounding Box
///
/// Center, non-negative half-extents, and an orientation matrix whose
/// columns are the box's local axes. The orientation is expected to be
/// orthonormal; the overlap test tolerates violations without panicking
/// but its result is then unspecified.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Obb {
    /// Center position in world space
    pub center: Vec3,
    /// Half-extents along the box's local axes
    pub half_extents: Vec3,
    /// Orientation; columns are the local X, Y, Z axes
    pub rotation: Mat3,
}

impl Obb {
    /// Create a new OBB.
    ///
    /// Negative half-extent components are clamped to zero rather than
    /// accepted as degenerate inverted boxes.
    pub fn new(center: Vec3, half_extents: Vec3, rotation: Mat3) -> Self {
        Self {
            center,
            half_extents: half_extents.sup(&Vec3::zeros()),
            rotation,
        }
    }

    /// Lift an AABB into an OBB with identity orientation
    pub fn from_aabb(aabb: &Aabb) -> Self {
        Self::new(aabb.center(), aabb.extents(), Mat3::identity())
    }

    /// The box's local axis `i` (0, 1, or 2) as a world-space vector
    pub fn axis(&self, i: usize) -> Vec3 {
        self.rotation.column(i).into_owned()
    }
}
