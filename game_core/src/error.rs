use fuzzy_core::ConfigError;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum GameError {
    #[error("fuzzy controller configuration: {0}")]
    Fuzzy(#[from] ConfigError),

    #[error("unknown controller '{0}' (expected input, crisp or fuzzy)")]
    UnknownController(String),

    #[error("invalid game configuration: {0}")]
    InvalidConfig(String),
}
