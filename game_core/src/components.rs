use glam::Vec2;

use crate::controller::PaddleController;

/// Paddle component - one side's paddle
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Paddle {
    pub player_id: u8,  // 0 = left, 1 = right
    pub y: f32,         // Centre Y (clamped to arena)
    pub velocity: f32,  // px/s, positive = down
}

impl Paddle {
    pub fn new(player_id: u8, y: f32) -> Self {
        Self {
            player_id,
            y,
            velocity: 0.0,
        }
    }
}

/// Ball component - the pong ball
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
}

impl Ball {
    pub fn new(pos: Vec2, vel: Vec2) -> Self {
        Self { pos, vel }
    }

    /// Reset ball to `center`, serving towards a random side
    pub fn reset(&mut self, center: Vec2, speed: f32, rng: &mut crate::GameRng) {
        use rand::Rng;

        self.pos = center;

        let spread = crate::Params::SERVE_SPREAD;
        let offset: f32 = rng.0.gen_range(-spread..spread);
        let angle = if rng.0.gen_bool(0.5) {
            offset
        } else {
            std::f32::consts::PI + offset
        };

        self.vel = Vec2::new(angle.cos(), angle.sin()) * speed;
    }

    /// Direction of travel in degrees, y down
    pub fn angle_deg(&self) -> f32 {
        self.vel.y.atan2(self.vel.x).to_degrees()
    }
}

/// Acceleration command for a paddle, written by its pilot each step
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PaddleIntent {
    pub command: f32, // -2..2 for manual input, consequent universe for fuzzy
}

impl PaddleIntent {
    pub fn new() -> Self {
        Self::default()
    }
}

/// The controller steering a paddle
#[derive(Debug, Clone)]
pub struct Pilot(pub PaddleController);
