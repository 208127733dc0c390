use crate::{Ball, Config, Events, GameRng, Score};
use hecs::World;

/// Check if ball left the arena (scoring)
pub fn check_scoring(
    world: &mut World,
    config: &Config,
    score: &mut Score,
    events: &mut Events,
    rng: &mut GameRng,
) {
    let serve_speed = config.ball_speed / 2.0;

    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        // Check if ball exited left or right edge
        if ball.pos.x <= 0.0 {
            // Right player scores
            score.increment_right();
            events.right_scored = true;

            ball.reset(config.ball_spawn(), serve_speed, rng);
        } else if ball.pos.x >= config.arena_width {
            // Left player scores
            score.increment_left();
            events.left_scored = true;

            ball.reset(config.ball_spawn(), serve_speed, rng);
        }
    }
}
