use crate::{Ball, Config, Paddle, PaddleIntent, Time};
use hecs::World;

/// Integrate paddle velocity from intents, then position
pub fn move_paddles(world: &mut World, time: &Time, config: &Config) {
    for (_entity, (paddle, intent)) in world.query_mut::<(&mut Paddle, &PaddleIntent)>() {
        paddle.velocity += intent.command * config.paddle_accel * time.dt;
        paddle.velocity = paddle
            .velocity
            .clamp(-config.paddle_max_speed, config.paddle_max_speed);

        paddle.y += paddle.velocity * time.dt;

        // Stop dead at the arena edge
        let clamped = config.clamp_paddle_y(paddle.y);
        if clamped != paddle.y {
            paddle.y = clamped;
            paddle.velocity = 0.0;
        }
    }
}

/// Move ball based on velocity
pub fn move_ball(world: &mut World, time: &Time) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        ball.pos += ball.vel * time.dt;
    }
}
