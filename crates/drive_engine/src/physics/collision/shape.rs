//! Model-space collision volumes
//!
//! Collision geometry is stored in model space and transformed to world
//! space on demand during tests, decoupled from whatever the renderer
//! draws. An actor's volume is set once at construction (usually from
//! the local bounds of its mesh vertices) and combined with the live
//! pose every tick.

use crate::foundation::math::{rotation_from_matrix, Vec3};
use crate::foundation::pose::Pose;
use super::primitives::{Aabb, Obb};

/// Model-space collision box template for a moving object.
///
/// Holds the object's local bounds plus a shrink margin. The margin
/// insets every face of the bounds before transformation, so the
/// collision volume sits slightly inside the visual mesh and grazing
/// near-misses do not end the run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CollisionVolume {
    /// Object bounds in model space
    pub local_bounds: Aabb,
    /// Inset applied to every face before transformation
    pub margin: f32,
}

impl CollisionVolume {
    /// Create a collision volume from local bounds and a shrink margin
    pub fn new(local_bounds: Aabb, margin: f32) -> Self {
        Self { local_bounds, margin }
    }

    /// Tight volume around a model-space point cloud, or `None` for an
    /// empty one (geometry not loaded yet)
    pub fn from_points(points: &[Vec3], margin: f32) -> Option<Self> {
        Aabb::from_points(points).map(|bounds| Self::new(bounds, margin))
    }

    /// Transform this template into a world-space OBB at the given pose.
    ///
    /// The shrunken local bounds provide center and half-extents; the
    /// pose provides the world position of the center and, via its
    /// matrix, the orientation.
    pub fn world_obb(&self, pose: &Pose) -> Obb {
        let local = self.local_bounds.shrunk(self.margin);
        let world_matrix = pose.to_matrix();
        let center = pose.transform_point(local.center());
        let rotation = rotation_from_matrix(&world_matrix);
        Obb::new(center, local.extents(), rotation)
    }
}
