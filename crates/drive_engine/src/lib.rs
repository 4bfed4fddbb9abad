//! # Drive Engine
//!
//! Simulation core for a minimal driving game: a vehicle advances along
//! its heading each tick, the player steers by discrete angle
//! increments, and the run ends when the vehicle's oriented bounding
//! box overlaps a static obstacle (loss) or crosses the finish
//! threshold (win).
//!
//! The crate deliberately stops at the simulation boundary. Rendering,
//! asset loading, input devices, and UI are collaborators: they feed
//! geometry and steering events in, and read the game state and actor
//! pose back out each tick.
//!
//! ## Quick Start
//!
//! ```
//! use drive_engine::prelude::*;
//!
//! let actor = Actor::new(Vec3::new(0.0, 0.0, 10.0), -std::f32::consts::FRAC_PI_2)
//!     .with_collision_volume(CollisionVolume::new(
//!         Aabb::from_center_extents(Vec3::zeros(), Vec3::new(1.0, 0.4, 0.5)),
//!         0.2,
//!     ));
//! let obstacles = vec![Obstacle::new(Vec3::new(0.0, 0.5, 5.0), Vec3::new(4.0, 2.0, 0.5))];
//! let mut sim = Simulation::new(actor, obstacles, SimConfig::default());
//!
//! sim.start();
//! while sim.state() == GameState::Running {
//!     sim.tick();
//! }
//! assert_eq!(sim.state(), GameState::Lost);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names)]

pub mod foundation;
pub mod physics;
pub mod sim;

/// Common imports for engine users
pub mod prelude {
    pub use crate::foundation::{
        math::{Mat3, Mat4, Vec3},
        pose::Pose,
    };
    pub use crate::physics::collision::{
        obb_intersects_aabb, Aabb, CollisionVolume, Obb,
    };
    pub use crate::sim::{Actor, GameState, Obstacle, SimConfig, Simulation, Steer};
}
