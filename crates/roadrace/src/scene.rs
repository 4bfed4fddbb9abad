//! Course construction
//!
//! Builds the fixed obstacle course: a straight road flanked by box
//! obstacles, four walls staggered across the lanes, and a finish line
//! just past the last wall. The layout is established once at game
//! start and reused across restarts.

use drive_engine::foundation::math::{constants::HALF_PI, utils::deg_to_rad, Vec3};
use drive_engine::physics::collision::CollisionVolume;
use drive_engine::sim::{Actor, Obstacle, SimConfig, Simulation};

use crate::config::{GameConfig, TrackConfig};

/// Distance from the road center to the side boxes
const SIDE_BOX_CLEARANCE: f32 = 1.2;

/// Side box dimensions
const SIDE_BOX_SIZE: Vec3 = Vec3::new(2.0, 0.4, 8.0);

/// Wall dimensions (wide and tall, blocking one lane)
const WALL_SIZE: Vec3 = Vec3::new(4.0, 2.0, 0.5);

/// Lane walls as (x, z) placements, nearest-to-start last
const WALL_PLACEMENTS: [(f32, f32); 4] = [(-1.0, 25.0), (2.0, 16.0), (-1.0, 7.0), (2.0, 2.0)];

/// Model-space hull of the car body, used to derive its collision
/// volume the same way a loaded mesh would supply its vertices.
///
/// Authored with the long axis along model X: the render yaw maps
/// model X onto the direction of travel, so the collision box's long
/// axis tracks the lane.
const CAR_HULL: [Vec3; 10] = [
    // Chassis corners, nose toward +X
    Vec3::new(-1.0, 0.0, -0.5),
    Vec3::new(1.0, 0.0, -0.5),
    Vec3::new(-1.0, 0.0, 0.5),
    Vec3::new(1.0, 0.0, 0.5),
    Vec3::new(-1.0, 0.5, -0.5),
    Vec3::new(1.0, 0.5, -0.5),
    Vec3::new(-1.0, 0.5, 0.5),
    Vec3::new(1.0, 0.5, 0.5),
    // Cabin roof line, set back from the nose
    Vec3::new(-0.4, 0.8, -0.4),
    Vec3::new(-0.4, 0.8, 0.4),
];

/// Build the obstacle course for the given track layout.
///
/// Obstacles come back in a fixed order: left/right side boxes from the
/// far end toward the start, then the four lane walls.
pub fn course_obstacles(track: &TrackConfig) -> Vec<Obstacle> {
    let mut obstacles = Vec::new();

    let side_offset = track.road_width / 2.0 + SIDE_BOX_CLEARANCE;
    let count = track.side_box_count;
    for i in 0..count {
        #[allow(clippy::cast_precision_loss)]
        let z = -track.road_length / 2.0
            + (i as f32 + 0.5) * (track.road_length / count as f32);
        obstacles.push(Obstacle::new(Vec3::new(-side_offset, 0.5, z), SIDE_BOX_SIZE));
        obstacles.push(Obstacle::new(Vec3::new(side_offset, 0.5, z), SIDE_BOX_SIZE));
    }

    for (x, z) in WALL_PLACEMENTS {
        obstacles.push(Obstacle::new(Vec3::new(x, 0.5, z), WALL_SIZE));
    }

    obstacles
}

/// Collision volume of the car, inset by the given margin.
///
/// `None` when no hull geometry is available; the simulation then
/// skips collision testing until a volume is attached, the same way it
/// would while a model is still loading.
pub fn car_collision_volume(margin: f32) -> Option<CollisionVolume> {
    CollisionVolume::from_points(&CAR_HULL, margin)
}

/// Assemble the full simulation: car at the start line, course
/// obstacles, and tunables from the configuration.
pub fn build_simulation(config: &GameConfig) -> Simulation {
    // Left lane, two units before the road's near end, facing -Z
    let start = Vec3::new(-2.0, 0.18, config.track.road_length / 2.0 - 2.0);
    let mut actor = Actor::new(start, -HALF_PI);
    if let Some(volume) = car_collision_volume(config.gameplay.collision_margin) {
        actor = actor.with_collision_volume(volume);
    }

    let sim_config = SimConfig {
        speed: config.gameplay.speed,
        turn_step: deg_to_rad(config.gameplay.turn_step_deg),
        finish_z: config.track.finish_z,
        forward_reach: config.gameplay.forward_reach,
    };

    Simulation::new(actor, course_obstacles(&config.track), sim_config)
}
