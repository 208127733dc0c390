pub mod components;
pub mod config;
pub mod controller;
pub mod error;
pub mod params;
pub mod resources;
pub mod session;
pub mod systems;

pub use components::*;
pub use config::*;
pub use controller::{Controller, ControllerKind, PaddleController};
pub use error::*;
pub use params::*;
pub use resources::*;
pub use session::*;

use hecs::World;
use systems::*;

/// Run the deterministic Pong game simulation
#[allow(clippy::too_many_arguments)]
pub fn step(
    world: &mut World,
    time: &mut Time,
    config: &Config,
    score: &mut Score,
    events: &mut Events,
    inputs: &mut InputQueue,
    rng: &mut GameRng,
) {
    // Clamp dt to prevent large jumps
    let clamped_dt = time.dt.min(Params::MAX_DT);

    // Clear events at start of frame
    events.clear();

    // 1. Ingest held-key inputs for manual pilots
    ingest_inputs(world, inputs);

    // Fixed micro-steps for stable physics
    let mut remaining_dt = clamped_dt;
    while remaining_dt > 0.0 {
        let step_dt = remaining_dt.min(Params::FIXED_DT);
        remaining_dt -= step_dt;

        let step_time = Time {
            dt: step_dt,
            now: time.now + (clamped_dt - remaining_dt),
        };

        // 2. Pilots decide acceleration commands
        run_controllers(world);

        // 3. Move paddles based on commands
        move_paddles(world, &step_time, config);

        // 4. Move ball
        move_ball(world, &step_time);

        // 5. Check collisions (ball vs paddles, walls)
        check_collisions(world, config, events);

        // 6. Check scoring (ball exited arena)
        check_scoring(world, config, score, events, rng);
    }

    // Update time
    time.now += clamped_dt;
}

/// Helper to create a paddle entity steered by `controller`
pub fn create_paddle(
    world: &mut World,
    player_id: u8,
    y: f32,
    controller: PaddleController,
) -> hecs::Entity {
    world.spawn((Paddle::new(player_id, y), PaddleIntent::new(), Pilot(controller)))
}

/// Helper to create the ball entity
pub fn create_ball(world: &mut World, pos: glam::Vec2, vel: glam::Vec2) -> hecs::Entity {
    world.spawn((Ball::new(pos, vel),))
}
