//! Paddle controllers
//!
//! Every strategy answers the same question once per tick: given where the
//! ball is relative to the paddle centre and how fast the paddle moves, what
//! acceleration should it apply?

pub mod crisp;
pub mod fuzzy;
pub mod manual;
pub mod table;

pub use crisp::CrispController;
pub use fuzzy::{Explanation, FuzzyController};
pub use manual::ManualInput;
pub use table::FuzzyParams;

use std::fmt;
use std::str::FromStr;

use crate::error::GameError;

pub trait Controller {
    /// Acceleration command for one tick
    fn command(&self, ball_offset: f64, paddle_velocity: f64) -> f64;
}

/// Which strategy drives a paddle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControllerKind {
    Manual,
    Crisp,
    Fuzzy,
}

impl FromStr for ControllerKind {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "input" | "manual" => Ok(ControllerKind::Manual),
            "crisp" => Ok(ControllerKind::Crisp),
            "fuzzy" => Ok(ControllerKind::Fuzzy),
            _ => Err(GameError::UnknownController(s.to_string())),
        }
    }
}

impl fmt::Display for ControllerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ControllerKind::Manual => "input",
            ControllerKind::Crisp => "crisp",
            ControllerKind::Fuzzy => "fuzzy",
        };
        f.write_str(name)
    }
}

/// A controller selected once at configuration time
#[derive(Debug, Clone)]
pub enum PaddleController {
    Fuzzy(FuzzyController),
    Crisp(CrispController),
    Manual(ManualInput),
}

impl PaddleController {
    pub fn build(kind: ControllerKind, params: &FuzzyParams) -> Result<Self, GameError> {
        Ok(match kind {
            ControllerKind::Manual => PaddleController::Manual(ManualInput::new()),
            ControllerKind::Crisp => PaddleController::Crisp(CrispController),
            ControllerKind::Fuzzy => PaddleController::Fuzzy(FuzzyController::new(params)?),
        })
    }

    pub fn kind(&self) -> ControllerKind {
        match self {
            PaddleController::Fuzzy(_) => ControllerKind::Fuzzy,
            PaddleController::Crisp(_) => ControllerKind::Crisp,
            PaddleController::Manual(_) => ControllerKind::Manual,
        }
    }
}

impl Controller for PaddleController {
    fn command(&self, ball_offset: f64, paddle_velocity: f64) -> f64 {
        match self {
            PaddleController::Fuzzy(c) => c.command(ball_offset, paddle_velocity),
            PaddleController::Crisp(c) => c.command(ball_offset, paddle_velocity),
            PaddleController::Manual(c) => c.command(ball_offset, paddle_velocity),
        }
    }
}
