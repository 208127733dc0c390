use hecs::World;

use crate::components::*;
use crate::controller::{Controller, PaddleController};
use crate::resources::*;

/// Apply queued held-key directions to manually piloted paddles
pub fn ingest_inputs(world: &mut World, inputs: &mut InputQueue) {
    for &(player_id, direction) in &inputs.inputs {
        for (_entity, (paddle, pilot)) in world.query_mut::<(&Paddle, &mut Pilot)>() {
            if paddle.player_id != player_id {
                continue;
            }
            if let PaddleController::Manual(manual) = &mut pilot.0 {
                manual.set_direction(direction as f64);
            }
        }
    }

    inputs.clear();
}

/// Ask every pilot for this step's acceleration command
pub fn run_controllers(world: &mut World) {
    let ball_y = {
        let mut ball_query = world.query::<&Ball>();
        ball_query.iter().next().map(|(_e, ball)| ball.pos.y)
    };

    for (_entity, (paddle, pilot, intent)) in
        world.query_mut::<(&Paddle, &Pilot, &mut PaddleIntent)>()
    {
        // No ball in play: treat it as level with the paddle
        let offset = ball_y.map_or(0.0, |y| (y - paddle.y) as f64);
        intent.command = pilot.0.command(offset, paddle.velocity as f64) as f32;
    }
}
