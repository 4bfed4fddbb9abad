//! Headless driving demo
//!
//! Runs the simulation without a renderer: the first run drives
//! straight down the left lane into a wall, the second steers onto the
//! left shoulder to dodge the walls and reach the finish line. State
//! transitions are logged; a renderer would read the actor pose each
//! tick instead.

mod config;
mod scene;

use drive_engine::sim::{GameState, Simulation, Steer};
use log::{info, warn};

use config::GameConfig;

/// Safety cap so a mis-tuned course cannot spin forever
const TICK_LIMIT: usize = 200_000;

fn main() {
    env_logger::init();

    let config = load_config();
    let mut sim = scene::build_simulation(&config);

    info!("first run: straight down the left lane");
    sim.start();
    run_while(&mut sim, |_| true);
    report(&sim);

    info!("second run: dodge onto the left shoulder");
    sim.restart();
    sim.steer(Steer::Left);
    sim.steer(Steer::Left);
    run_while(&mut sim, |s| s.actor().position.x > -3.5);
    sim.steer(Steer::Right);
    sim.steer(Steer::Right);
    run_while(&mut sim, |_| true);
    report(&sim);
}

/// Load the configuration named on the command line, or defaults
fn load_config() -> GameConfig {
    let Some(path) = std::env::args().nth(1) else {
        return GameConfig::default();
    };
    match GameConfig::load_from_file(&path) {
        Ok(config) => config,
        Err(err) => {
            warn!("failed to load config {path}: {err}; using defaults");
            GameConfig::default()
        }
    }
}

/// Tick the simulation while it is running and the predicate holds
fn run_while(sim: &mut Simulation, keep_going: impl Fn(&Simulation) -> bool) {
    let mut ticks = 0;
    while sim.state() == GameState::Running && keep_going(sim) && ticks < TICK_LIMIT {
        sim.tick();
        ticks += 1;
    }
}

/// Log where the run ended up
fn report(sim: &Simulation) {
    let pose = sim.actor_pose();
    match sim.state() {
        GameState::Lost => info!(
            "game over at ({:.2}, {:.2}, {:.2})",
            pose.position.x, pose.position.y, pose.position.z
        ),
        GameState::Won => info!(
            "you win, finished at ({:.2}, {:.2}, {:.2})",
            pose.position.x, pose.position.y, pose.position.z
        ),
        state => info!("run halted in state {state:?}"),
    }
}
