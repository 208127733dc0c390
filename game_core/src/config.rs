use crate::controller::{table, FuzzyParams};
use crate::error::GameError;
use crate::params::Params;

/// Game configuration
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub arena_width: f32,
    pub arena_height: f32,
    pub paddle_thickness: f32,
    pub paddle_size: f32,
    pub paddle_accel: f32,
    pub paddle_max_speed: f32,
    pub ball_radius: f32,
    pub ball_speed: f32,
    pub max_angle_variation: f32,
    /// Points needed to win a game; `None` plays until the tick limit
    pub win_score: Option<u32>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            arena_width: Params::ARENA_WIDTH,
            arena_height: Params::ARENA_HEIGHT,
            paddle_thickness: Params::PADDLE_THICKNESS,
            paddle_size: Params::PADDLE_SIZE,
            paddle_accel: Params::PADDLE_ACCEL,
            paddle_max_speed: Params::PADDLE_MAX_SPEED,
            ball_radius: Params::BALL_RADIUS,
            ball_speed: Params::BALL_SPEED,
            max_angle_variation: Params::MAX_ANGLE_VARIATION,
            win_score: None,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn validate(&self) -> Result<(), GameError> {
        let positive = [
            ("arena width", self.arena_width),
            ("arena height", self.arena_height),
            ("paddle thickness", self.paddle_thickness),
            ("paddle size", self.paddle_size),
            ("paddle acceleration", self.paddle_accel),
            ("paddle max speed", self.paddle_max_speed),
            ("ball radius", self.ball_radius),
            ("ball speed", self.ball_speed),
        ];
        for (what, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(GameError::InvalidConfig(format!(
                    "{what} must be positive, got {value}"
                )));
            }
        }
        if self.paddle_size >= self.arena_height {
            return Err(GameError::InvalidConfig(format!(
                "paddle size {} does not fit arena height {}",
                self.paddle_size, self.arena_height
            )));
        }
        if !(0.0..90.0).contains(&self.max_angle_variation) {
            return Err(GameError::InvalidConfig(format!(
                "max angle variation must be in [0, 90), got {}",
                self.max_angle_variation
            )));
        }
        if self.win_score == Some(0) {
            return Err(GameError::InvalidConfig("win score must be at least 1".into()));
        }

        // Fuzzy antecedents must be representable whichever systems play
        let params = self.fuzzy_params();
        table::ball_offset_variable(&params)?;
        table::paddle_velocity_variable(&params)?;
        Ok(())
    }

    /// Parameters the fuzzy table is scaled by
    pub fn fuzzy_params(&self) -> FuzzyParams {
        FuzzyParams {
            screen_height: self.arena_height as f64,
            paddle_size: self.paddle_size as f64,
            max_speed: self.paddle_max_speed as f64,
            ball_speed: self.ball_speed as f64,
        }
    }

    /// X position of a paddle's centre based on player ID
    pub fn paddle_x(&self, player_id: u8) -> f32 {
        if player_id == 0 {
            Params::PADDLE_INSET // Left paddle
        } else {
            self.arena_width - Params::PADDLE_INSET // Right paddle
        }
    }

    /// Clamp paddle centre Y to arena bounds
    pub fn clamp_paddle_y(&self, y: f32) -> f32 {
        let half_size = self.paddle_size / 2.0;
        y.clamp(half_size, self.arena_height - half_size)
    }

    pub fn ball_spawn(&self) -> glam::Vec2 {
        glam::Vec2::new(self.arena_width / 2.0, self.arena_height / 2.0)
    }
}
