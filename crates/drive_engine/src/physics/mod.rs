//! Physics module for collision detection
//!
//! Narrow-phase box-box overlap testing plus the model-space collision
//! volumes the simulation derives world boxes from. There is no
//! collision response here: the simulation only needs a yes/no overlap
//! verdict per tick.

pub mod collision;

pub use collision::{obb_intersects_aabb, Aabb, CollisionVolume, Obb};
