use super::Controller;

pub const MAX_DIRECTION: f64 = 2.0;

/// Held-key input: the command is whatever direction the player holds
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ManualInput {
    direction: f64,
}

impl ManualInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn direction(&self) -> f64 {
        self.direction
    }

    pub fn set_direction(&mut self, direction: f64) {
        self.direction = if direction.is_finite() {
            direction.clamp(-MAX_DIRECTION, MAX_DIRECTION)
        } else {
            0.0
        };
    }
}

impl Controller for ManualInput {
    fn command(&self, _ball_offset: f64, _paddle_velocity: f64) -> f64 {
        self.direction
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_ignores_game_state() {
        let mut input = ManualInput::new();
        input.set_direction(1.0);
        assert_eq!(input.command(-500.0, 800.0), 1.0);
        assert_eq!(input.command(500.0, -800.0), 1.0);
    }

    #[test]
    fn test_direction_is_clamped() {
        let mut input = ManualInput::new();
        input.set_direction(7.0);
        assert_eq!(input.direction(), 2.0);
        input.set_direction(f64::NAN);
        assert_eq!(input.direction(), 0.0);
    }
}
