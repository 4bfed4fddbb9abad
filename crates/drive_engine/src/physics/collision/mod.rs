//! Box-based collision detection
//!
//! # Architecture
//!
//! - **Model Space Storage**: the actor's collision volume is stored in
//!   local coordinates and transformed to world space on demand each
//!   tick, never cached across poses.
//! - **Static world boxes**: obstacles are axis-aligned and immutable,
//!   so their world boxes are a pure function of placement.
//! - **Narrow phase only**: the obstacle counts in this game are small
//!   enough that every pair is tested; there is no broad phase.
//!
//! # Module Organization
//!
//! - [`primitives`] - Axis-aligned and oriented box types
//! - [`sat`] - The OBB vs AABB separating-axis overlap test
//! - [`shape`] - Model-space collision volumes transformed per tick

pub mod primitives;
pub mod sat;
pub mod shape;

pub use primitives::{Aabb, Obb};
pub use sat::obb_intersects_aabb;
pub use shape::CollisionVolume;
