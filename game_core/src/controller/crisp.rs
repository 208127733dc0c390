use super::Controller;

/// Bang-bang controller: full command towards the ball, ignoring velocity
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CrispController;

impl Controller for CrispController {
    fn command(&self, ball_offset: f64, _paddle_velocity: f64) -> f64 {
        if ball_offset < 0.0 {
            -1.0
        } else if ball_offset > 0.0 {
            1.0
        } else {
            0.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_function() {
        let crisp = CrispController;
        assert_eq!(crisp.command(-5.0, 0.0), -1.0);
        assert_eq!(crisp.command(-5.0, 700.0), -1.0);
        assert_eq!(crisp.command(5.0, -700.0), 1.0);
        assert_eq!(crisp.command(0.0, 123.0), 0.0);
        assert_eq!(crisp.command(-0.0, 0.0), 0.0);
    }
}
