//! Math utilities and types
//!
//! Provides fundamental math types for the simulation, aliased over
//! nalgebra so the rest of the engine never spells out scalar types.

pub use nalgebra::{Matrix3, Matrix4, Vector3};

/// 3D vector type
pub type Vec3 = Vector3<f32>;

/// 3x3 matrix type (orientation only: no translation, no scale)
pub type Mat3 = Matrix3<f32>;

/// 4x4 matrix type
pub type Mat4 = Matrix4<f32>;

/// Extract the orthonormal rotation part of a world transform.
///
/// Takes the upper-left 3x3 block of `matrix`, normalizes out any scale
/// baked into its columns, and discards translation. Columns of zero
/// length are passed through unchanged rather than divided by zero.
pub fn rotation_from_matrix(matrix: &Mat4) -> Mat3 {
    let mut rotation = matrix.fixed_view::<3, 3>(0, 0).into_owned();
    for i in 0..3 {
        let len = rotation.column(i).magnitude();
        if len > f32::EPSILON {
            let scaled = rotation.column(i) / len;
            rotation.set_column(i, &scaled);
        }
    }
    rotation
}

/// Math constants
pub mod constants {
    /// Pi constant
    pub const PI: f32 = std::f32::consts::PI;

    /// 2 * Pi
    pub const TAU: f32 = 2.0 * PI;

    /// Pi / 2
    pub const HALF_PI: f32 = PI * 0.5;

    /// Pi / 4
    pub const QUARTER_PI: f32 = PI * 0.25;

    /// Degrees to radians conversion factor
    pub const DEG_TO_RAD: f32 = PI / 180.0;

    /// Radians to degrees conversion factor
    pub const RAD_TO_DEG: f32 = 180.0 / PI;
}

/// Math utility functions
pub mod utils {
    use super::constants;

    /// Convert degrees to radians
    pub fn deg_to_rad(degrees: f32) -> f32 {
        degrees * constants::DEG_TO_RAD
    }

    /// Convert radians to degrees
    pub fn rad_to_deg(radians: f32) -> f32 {
        radians * constants::RAD_TO_DEG
    }
}
