//! Foundation utilities shared across the engine
//!
//! Math type aliases, constants, and pose/transform helpers.

pub mod math;
pub mod pose;

pub use math::{Mat3, Mat4, Vec3};
pub use pose::Pose;
