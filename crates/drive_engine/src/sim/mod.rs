//! Game state machine and per-tick simulation step
//!
//! A [`Simulation`] owns the actor, the fixed obstacle course, and the
//! current [`GameState`], and advances them one tick at a time under an
//! external frame-synchronized scheduler. All state lives in this
//! context object; two simulations never share anything.

use log::{debug, info, trace};

use crate::foundation::math::{constants::PI, Vec3};
use crate::foundation::pose::Pose;
use crate::physics::collision::{obb_intersects_aabb, Aabb, CollisionVolume, Obb};

/// Lifecycle of a single playthrough
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    /// Pre-start: the scene exists but nothing moves
    Idle,
    /// The actor advances every tick
    Running,
    /// Terminal: the actor hit an obstacle
    Lost,
    /// Terminal: the actor crossed the finish line
    Won,
}

/// A discrete steering input event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Steer {
    /// Decrease the heading by one turn step
    Left,
    /// Increase the heading by one turn step
    Right,
}

/// The player-controlled vehicle
#[derive(Debug, Clone)]
pub struct Actor {
    /// Position in world space
    pub position: Vec3,
    /// Direction of travel in radians; advancing moves along
    /// `(cos(heading), 0, sin(heading))`
    pub heading: f32,
    /// Whether the per-tick advance applies
    pub movement_enabled: bool,
    collision_volume: Option<CollisionVolume>,
}

impl Actor {
    /// Create an actor at a starting position and heading.
    ///
    /// Movement starts disabled; the simulation enables it on start and
    /// restart. The actor has no collision volume until one is attached
    /// (its geometry may not be available yet).
    pub fn new(position: Vec3, heading: f32) -> Self {
        Self {
            position,
            heading,
            movement_enabled: false,
            collision_volume: None,
        }
    }

    /// Attach a model-space collision volume
    #[must_use]
    pub fn with_collision_volume(mut self, volume: CollisionVolume) -> Self {
        self.collision_volume = Some(volume);
        self
    }

    /// The pose the renderer draws and the collision test uses.
    ///
    /// The renderable yaw is derived from the heading so the model
    /// faces its direction of travel.
    pub fn pose(&self) -> Pose {
        Pose::new(self.position, -self.heading + PI)
    }

    /// Current world-space collision box, or `None` while the actor has
    /// no collision volume
    pub fn world_obb(&self) -> Option<Obb> {
        self.collision_volume.map(|v| v.world_obb(&self.pose()))
    }
}

/// A static obstacle, immutable after scene setup
#[derive(Debug, Clone, Copy)]
pub struct Obstacle {
    /// Center of the obstacle in world space
    pub center: Vec3,
    /// Full extent of the obstacle along each world axis
    pub size: Vec3,
}

impl Obstacle {
    /// Create an obstacle from its world placement
    pub fn new(center: Vec3, size: Vec3) -> Self {
        Self { center, size }
    }

    /// World-space bounds; a pure function of the fixed placement
    pub fn world_aabb(&self) -> Aabb {
        Aabb::from_center_extents(self.center, self.size * 0.5)
    }
}

/// Simulation tunables
#[derive(Debug, Clone, Copy)]
pub struct SimConfig {
    /// Distance the actor advances per tick
    pub speed: f32,
    /// Heading change per steering event, in radians
    pub turn_step: f32,
    /// Finish threshold on the Z axis; the run is won once the actor
    /// has fully passed it
    pub finish_z: f32,
    /// How far ahead of the actor's position the finish comparison
    /// reaches, so the whole vehicle clears the line before the win
    pub forward_reach: f32,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            speed: 0.03,
            turn_step: PI / 36.0,
            finish_z: -2.0,
            forward_reach: 1.0,
        }
    }
}

/// One playthrough's worth of state: actor, course, and game state
#[derive(Debug)]
pub struct Simulation {
    actor: Actor,
    initial_position: Vec3,
    initial_heading: f32,
    obstacles: Vec<Obstacle>,
    config: SimConfig,
    state: GameState,
    missing_geometry_logged: bool,
}

impl Simulation {
    /// Build a simulation in the [`GameState::Idle`] state.
    ///
    /// The actor's starting position and heading are captured as the
    /// pose restarts reset to. The obstacle sequence is fixed for the
    /// simulation's lifetime and reused across restarts.
    pub fn new(actor: Actor, obstacles: Vec<Obstacle>, config: SimConfig) -> Self {
        let initial_position = actor.position;
        let initial_heading = actor.heading;
        Self {
            actor,
            initial_position,
            initial_heading,
            obstacles,
            config,
            state: GameState::Idle,
            missing_geometry_logged: false,
        }
    }

    /// Current game state
    pub fn state(&self) -> GameState {
        self.state
    }

    /// The actor, for collaborators that need more than the pose
    pub fn actor(&self) -> &Actor {
        &self.actor
    }

    /// Per-tick pose for camera follow and rendering
    pub fn actor_pose(&self) -> Pose {
        self.actor.pose()
    }

    /// Obstacles in course order
    pub fn obstacles(&self) -> &[Obstacle] {
        &self.obstacles
    }

    /// Begin the run from [`GameState::Idle`]. No-op in any other state.
    pub fn start(&mut self) {
        if self.state == GameState::Idle {
            self.actor.movement_enabled = true;
            self.state = GameState::Running;
            info!("run started");
        }
    }

    /// Reset the actor to its initial pose and re-enter
    /// [`GameState::Running`].
    ///
    /// Idempotent: restarting twice with no tick in between leaves the
    /// same state as restarting once. Callers apply this between ticks,
    /// so no partially reset state is ever visible to a tick.
    pub fn restart(&mut self) {
        self.actor.position = self.initial_position;
        self.actor.heading = self.initial_heading;
        self.actor.movement_enabled = true;
        self.state = GameState::Running;
        info!("run restarted");
    }

    /// Apply one discrete steering event. Ignored unless running.
    pub fn steer(&mut self, input: Steer) {
        if self.state != GameState::Running {
            return;
        }
        match input {
            Steer::Left => self.actor.heading -= self.config.turn_step,
            Steer::Right => self.actor.heading += self.config.turn_step,
        }
        trace!("heading now {:.4} rad", self.actor.heading);
    }

    /// Advance the simulation by one tick.
    ///
    /// While running: advance the actor along its heading, re-derive
    /// its collision box, test it against every obstacle, then test the
    /// finish threshold. Collision is evaluated before the finish, so a
    /// tick satisfying both ends in a loss. A collision also rolls the
    /// advance back, freezing the actor at its last clear position.
    /// Outside [`GameState::Running`] a tick does nothing.
    pub fn tick(&mut self) {
        if self.state != GameState::Running || !self.actor.movement_enabled {
            return;
        }

        let previous_position = self.actor.position;
        self.actor.position.x += self.actor.heading.cos() * self.config.speed;
        self.actor.position.z += self.actor.heading.sin() * self.config.speed;
        trace!("advanced to {:?}", self.actor.position);

        if self.collides_with_course() {
            self.actor.position = previous_position;
            self.actor.movement_enabled = false;
            self.state = GameState::Lost;
            info!("collision at {:?}, run lost", self.actor.position);
        }

        let crossed_finish =
            self.actor.position.z < self.config.finish_z - self.config.forward_reach;
        if crossed_finish && self.state == GameState::Running {
            self.actor.movement_enabled = false;
            self.state = GameState::Won;
            info!("finish line crossed at {:?}, run won", self.actor.position);
        }
    }

    /// True when the actor's collision box overlaps any obstacle.
    ///
    /// An actor without collision geometry cannot be tested this tick;
    /// the check defers until a volume is attached. The skip is logged
    /// once rather than on every tick of the run.
    fn collides_with_course(&mut self) -> bool {
        let Some(actor_obb) = self.actor.world_obb() else {
            if !self.missing_geometry_logged {
                debug!("actor has no collision volume, skipping collision test");
                self.missing_geometry_logged = true;
            }
            return false;
        };
        self.obstacles
            .iter()
            .any(|obstacle| obb_intersects_aabb(&actor_obb, &obstacle.world_aabb()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::math::constants::HALF_PI;
    use approx::assert_relative_eq;

    const TICK_LIMIT: usize = 20_000;

    fn test_actor() -> Actor {
        // Car-sized footprint, margin 0.2 like the real scene. The hull
        // is long along model X, the axis the pose yaw turns toward the
        // direction of travel.
        Actor::new(Vec3::new(0.0, 0.0, 10.0), -HALF_PI).with_collision_volume(
            CollisionVolume::new(
                Aabb::from_center_extents(Vec3::new(0.0, 0.4, 0.0), Vec3::new(1.0, 0.4, 0.5)),
                0.2,
            ),
        )
    }

    fn run_until_settled(sim: &mut Simulation) -> usize {
        let mut ticks = 0;
        while sim.state() == GameState::Running && ticks < TICK_LIMIT {
            sim.tick();
            ticks += 1;
        }
        assert!(ticks < TICK_LIMIT, "simulation never settled");
        ticks
    }

    #[test]
    fn test_world_box_long_axis_tracks_heading() {
        // Heading -HALF_PI travels along -Z, so the world box must
        // reach 0.8 forward along Z and only 0.3 sideways along X.
        let obb = test_actor().world_obb().unwrap();
        let z_reach = obb.half_extents.x * obb.axis(0).z.abs()
            + obb.half_extents.y * obb.axis(1).z.abs()
            + obb.half_extents.z * obb.axis(2).z.abs();
        let x_reach = obb.half_extents.x * obb.axis(0).x.abs()
            + obb.half_extents.y * obb.axis(1).x.abs()
            + obb.half_extents.z * obb.axis(2).x.abs();
        assert_relative_eq!(z_reach, 0.8, epsilon = 1e-5);
        assert_relative_eq!(x_reach, 0.3, epsilon = 1e-5);
    }

    #[test]
    fn test_idle_tick_does_not_move() {
        let mut sim = Simulation::new(test_actor(), Vec::new(), SimConfig::default());
        let before = sim.actor().position;
        sim.tick();
        assert_eq!(sim.state(), GameState::Idle);
        assert_relative_eq!(sim.actor().position, before, epsilon = 1e-6);
    }

    #[test]
    fn test_straight_run_wins_exactly_once() {
        let mut sim = Simulation::new(test_actor(), Vec::new(), SimConfig::default());
        sim.start();
        assert_eq!(sim.state(), GameState::Running);

        run_until_settled(&mut sim);
        assert_eq!(sim.state(), GameState::Won);

        // Stopped just past the threshold, finish_z - forward_reach = -3
        let z = sim.actor().position.z;
        assert!(z < -3.0);
        assert!(z > -3.0 - 2.0 * sim.config.speed);

        // Terminal state: further ticks do not re-advance the actor
        let frozen = sim.actor().position;
        for _ in 0..10 {
            sim.tick();
        }
        assert_eq!(sim.state(), GameState::Won);
        assert_relative_eq!(sim.actor().position, frozen, epsilon = 1e-6);
    }

    #[test]
    fn test_collision_loses_and_freezes() {
        let wall = Obstacle::new(Vec3::new(0.0, 0.4, 5.0), Vec3::new(4.0, 0.8, 0.5));
        let mut sim = Simulation::new(test_actor(), vec![wall], SimConfig::default());
        sim.start();

        // Track the last clear position so the freeze can be verified
        let mut last_clear = sim.actor().position;
        let mut ticks = 0;
        while sim.state() == GameState::Running && ticks < TICK_LIMIT {
            last_clear = sim.actor().position;
            sim.tick();
            ticks += 1;
        }
        assert_eq!(sim.state(), GameState::Lost);

        // The colliding advance was rolled back: the position after the
        // losing tick equals the position after the previous tick
        assert_relative_eq!(sim.actor().position, last_clear, epsilon = 1e-6);
        assert!(!sim.actor().movement_enabled);

        let frozen = sim.actor().position;
        sim.tick();
        assert_relative_eq!(sim.actor().position, frozen, epsilon = 1e-6);

        // Restart resets the pose and re-enters Running
        sim.restart();
        assert_eq!(sim.state(), GameState::Running);
        assert_relative_eq!(sim.actor().position, Vec3::new(0.0, 0.0, 10.0), epsilon = 1e-6);
        assert_relative_eq!(sim.actor().heading, -HALF_PI, epsilon = 1e-6);
    }

    #[test]
    fn test_restart_is_idempotent() {
        let mut sim = Simulation::new(test_actor(), Vec::new(), SimConfig::default());
        sim.start();
        sim.tick();
        sim.steer(Steer::Left);

        sim.restart();
        let position = sim.actor().position;
        let heading = sim.actor().heading;
        let state = sim.state();

        sim.restart();
        assert_eq!(sim.state(), state);
        assert_relative_eq!(sim.actor().position, position, epsilon = 1e-6);
        assert_relative_eq!(sim.actor().heading, heading, epsilon = 1e-6);
    }

    #[test]
    fn test_steering_applies_only_while_running() {
        let config = SimConfig::default();
        let mut sim = Simulation::new(test_actor(), Vec::new(), config);

        // Idle: ignored
        sim.steer(Steer::Right);
        assert_relative_eq!(sim.actor().heading, -HALF_PI, epsilon = 1e-6);

        sim.start();
        sim.steer(Steer::Right);
        assert_relative_eq!(sim.actor().heading, -HALF_PI + config.turn_step, epsilon = 1e-6);
        sim.steer(Steer::Left);
        sim.steer(Steer::Left);
        assert_relative_eq!(sim.actor().heading, -HALF_PI - config.turn_step, epsilon = 1e-6);

        // Terminal: ignored again
        run_until_settled(&mut sim);
        let settled_heading = sim.actor().heading;
        sim.steer(Steer::Right);
        assert_relative_eq!(sim.actor().heading, settled_heading, epsilon = 1e-6);
    }

    #[test]
    fn test_missing_geometry_skips_collision() {
        // No collision volume attached: the wall straddling the path
        // never registers, and the run is decided by the finish line.
        let actor = Actor::new(Vec3::new(0.0, 0.0, 10.0), -HALF_PI);
        let wall = Obstacle::new(Vec3::new(0.0, 0.4, 5.0), Vec3::new(8.0, 2.0, 0.5));
        let mut sim = Simulation::new(actor, vec![wall], SimConfig::default());
        sim.start();
        run_until_settled(&mut sim);
        assert_eq!(sim.state(), GameState::Won);
    }

    #[test]
    fn test_missing_geometry_skip_is_latched() {
        let actor = Actor::new(Vec3::new(0.0, 0.0, 10.0), -HALF_PI);
        let mut sim = Simulation::new(actor, Vec::new(), SimConfig::default());
        sim.start();
        assert!(!sim.missing_geometry_logged);
        sim.tick();
        assert!(sim.missing_geometry_logged);
        // Further skips stay behind the latch
        sim.tick();
        assert!(sim.missing_geometry_logged);
    }

    #[test]
    fn test_loss_takes_precedence_over_finish() {
        // A wall whose near face sits exactly one car-length past the
        // finish threshold: the collision fires at the same point on
        // the path as the win would, and collision is evaluated first.
        let config = SimConfig::default();
        let wall = Obstacle::new(Vec3::new(0.0, 0.4, -4.0), Vec3::new(8.0, 2.0, 0.4));
        let mut sim = Simulation::new(test_actor(), vec![wall], config);
        sim.start();
        run_until_settled(&mut sim);
        assert_eq!(sim.state(), GameState::Lost);
    }
}
