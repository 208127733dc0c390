use crate::{Ball, Config, Events, Paddle};
use glam::Vec2;
use hecs::World;

/// Check ball collisions with walls and paddles
pub fn check_collisions(world: &mut World, config: &Config, events: &mut Events) {
    // First, collect ball data without holding borrows
    let ball_data = {
        let mut ball_query = world.query::<&Ball>();
        ball_query.iter().next().map(|(_e, ball)| *ball)
    };

    let mut ball = match ball_data {
        Some(ball) => ball,
        None => return, // No ball in world
    };
    let radius = config.ball_radius;
    let mut changed = false;

    // Top/bottom walls reflect the vertical component
    if ball.pos.y - radius <= 0.0 {
        ball.pos.y = radius;
        ball.vel.y = ball.vel.y.abs();
        events.ball_hit_wall = true;
        changed = true;
    } else if ball.pos.y + radius >= config.arena_height {
        ball.pos.y = config.arena_height - radius;
        ball.vel.y = -ball.vel.y.abs();
        events.ball_hit_wall = true;
        changed = true;
    }

    let paddles: Vec<(u8, f32)> = world
        .query::<&Paddle>()
        .iter()
        .map(|(_e, p)| (p.player_id, p.y))
        .collect();

    for (player_id, paddle_y) in paddles {
        if deflect_off_paddle(&mut ball, player_id, paddle_y, config) {
            events.ball_hit_paddle = true;
            changed = true;
            break;
        }
    }

    if changed {
        for (_entity, b) in world.query_mut::<&mut Ball>() {
            *b = ball;
        }
    }
}

/// Bounce `ball` off a paddle if it overlaps it while moving towards it.
///
/// The outgoing angle is the mirror of the incoming one, bent by up to
/// `max_angle_variation` degrees depending on where along the paddle the
/// ball landed; the ball leaves at full ball speed.
fn deflect_off_paddle(ball: &mut Ball, player_id: u8, paddle_y: f32, config: &Config) -> bool {
    let paddle_x = config.paddle_x(player_id);
    let half_thickness = config.paddle_thickness / 2.0;
    let half_size = config.paddle_size / 2.0;

    let dx = (ball.pos.x - paddle_x).abs();
    let dy = (ball.pos.y - paddle_y).abs();
    if dx > half_thickness + config.ball_radius || dy > half_size {
        return false;
    }

    let incoming = (player_id == 0 && ball.vel.x < 0.0) || (player_id == 1 && ball.vel.x > 0.0);
    if !incoming {
        return false;
    }

    // -1 at the top edge, 1 at the bottom edge
    let variation = ((ball.pos.y - paddle_y) / half_size).clamp(-1.0, 1.0);
    let bend = variation * config.max_angle_variation;
    let (away, angle) = if player_id == 0 {
        (1.0, 180.0 - ball.angle_deg() + bend)
    } else {
        (-1.0, 180.0 - ball.angle_deg() - bend)
    };

    let mut vel = Vec2::from_angle(angle.to_radians()) * config.ball_speed;
    // A steep bend can swing the ball back past vertical; keep it leaving
    vel.x = away * vel.x.abs();
    ball.vel = vel;
    ball.pos.x = paddle_x + away * (half_thickness + config.ball_radius);

    true
}
