//! World pose of a simulated object
//!
//! The driving game only ever rotates about the vertical axis, so a
//! pose is a position plus a yaw angle rather than a full quaternion
//! transform.

use super::math::{Mat4, Vec3};

/// Position and yaw of an object in world space
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pose {
    /// Position in world space
    pub position: Vec3,

    /// Rotation about the world Y axis, in radians
    pub yaw: f32,
}

impl Pose {
    /// Create a pose from a position and yaw angle
    pub fn new(position: Vec3, yaw: f32) -> Self {
        Self { position, yaw }
    }

    /// Convert to a world transformation matrix (rotation then translation)
    pub fn to_matrix(&self) -> Mat4 {
        Mat4::new_translation(&self.position) * Mat4::from_axis_angle(&Vec3::y_axis(), self.yaw)
    }

    /// Apply this pose to a point in local space
    pub fn transform_point(&self, point: Vec3) -> Vec3 {
        let rotated = Mat4::from_axis_angle(&Vec3::y_axis(), self.yaw).transform_vector(&point);
        rotated + self.position
    }
}

impl Default for Pose {
    fn default() -> Self {
        Self {
            position: Vec3::zeros(),
            yaw: 0.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::math::constants::HALF_PI;
    use approx::assert_relative_eq;

    #[test]
    fn test_identity_pose_is_noop() {
        let pose = Pose::default();
        let point = Vec3::new(1.0, 2.0, 3.0);
        assert_relative_eq!(pose.transform_point(point), point, epsilon = 1e-6);
    }

    #[test]
    fn test_yaw_rotates_about_y() {
        // +90 degrees about Y maps +X onto -Z
        let pose = Pose::new(Vec3::zeros(), HALF_PI);
        let moved = pose.transform_point(Vec3::new(1.0, 0.0, 0.0));
        assert_relative_eq!(moved, Vec3::new(0.0, 0.0, -1.0), epsilon = 1e-6);
    }

    #[test]
    fn test_transform_point_matches_matrix() {
        let pose = Pose::new(Vec3::new(-2.0, 0.18, 38.0), 0.7);
        let point = Vec3::new(0.3, 0.1, -0.9);
        let via_matrix = pose.to_matrix().transform_point(&point.into());
        assert_relative_eq!(pose.transform_point(point), via_matrix.coords, epsilon = 1e-5);
    }
}
