use clap::Parser;
use game_core::{Config, ControllerKind, Params};

/// Headless Pong with crisp, fuzzy or manual paddles
#[derive(Debug, Parser)]
#[command(name = "fuzzy-pong", version, about, long_about = None)]
pub struct Cli {
    /// System steering the left paddle (input, crisp, fuzzy)
    #[arg(long, default_value = "input")]
    pub paddle1: ControllerKind,

    /// System steering the right paddle (input, crisp, fuzzy)
    #[arg(long, default_value = "fuzzy")]
    pub paddle2: ControllerKind,

    /// Also write the log to logs/<timestamp>.txt
    #[arg(long)]
    pub log: bool,

    /// Print the fuzzy configuration as JSON and exit
    #[arg(long)]
    pub view: bool,

    #[arg(long, default_value_t = Params::ARENA_WIDTH)]
    pub width: f32,

    #[arg(long, default_value_t = Params::ARENA_HEIGHT)]
    pub height: f32,

    /// Paddle acceleration, px/s²
    #[arg(long, default_value_t = Params::PADDLE_ACCEL)]
    pub speed: f32,

    /// Paddle speed limit, px/s
    #[arg(long, default_value_t = Params::PADDLE_MAX_SPEED)]
    pub max_speed: f32,

    #[arg(long, default_value_t = Params::BALL_SPEED)]
    pub ball_speed: f32,

    /// Largest bend a paddle edge adds to the bounce, degrees
    #[arg(long, default_value_t = Params::MAX_ANGLE_VARIATION)]
    pub max_angle_variation: f32,

    #[arg(long, default_value_t = Params::PADDLE_SIZE)]
    pub paddle_size: f32,

    /// Points needed to win a game; unlimited when absent
    #[arg(long)]
    pub score: Option<u32>,

    /// Number of games to play
    #[arg(long, default_value_t = 1)]
    pub games: u32,

    /// Tick limit per game (60 ticks per second)
    #[arg(long, default_value_t = 36_000)]
    pub max_ticks: u64,

    #[arg(long, default_value_t = 12345)]
    pub seed: u64,
}

impl Cli {
    pub fn config(&self) -> Config {
        Config {
            arena_width: self.width,
            arena_height: self.height,
            paddle_size: self.paddle_size,
            paddle_accel: self.speed,
            paddle_max_speed: self.max_speed,
            ball_speed: self.ball_speed,
            max_angle_variation: self.max_angle_variation,
            win_score: self.score,
            ..Config::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["fuzzy-pong"]).unwrap();
        assert_eq!(cli.paddle1, ControllerKind::Manual);
        assert_eq!(cli.paddle2, ControllerKind::Fuzzy);
        assert!(!cli.log && !cli.view);
        assert_eq!(cli.games, 1);
        assert_eq!(cli.score, None);
        assert_eq!(cli.config(), Config::new());
    }

    #[test]
    fn test_overrides_reach_config() {
        let cli = Cli::try_parse_from([
            "fuzzy-pong",
            "--paddle1",
            "crisp",
            "--paddle2",
            "FUZZY",
            "--height",
            "600",
            "--ball-speed",
            "500",
            "--score",
            "5",
        ])
        .unwrap();

        assert_eq!(cli.paddle1, ControllerKind::Crisp);
        assert_eq!(cli.paddle2, ControllerKind::Fuzzy);
        let config = cli.config();
        assert_eq!(config.arena_height, 600.0);
        assert_eq!(config.ball_speed, 500.0);
        assert_eq!(config.win_score, Some(5));
    }

    #[test]
    fn test_unknown_paddle_system_is_rejected() {
        assert!(Cli::try_parse_from(["fuzzy-pong", "--paddle2", "neural"]).is_err());
    }
}
