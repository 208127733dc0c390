//! Canonical fuzzy paddle configuration.
//!
//! Version 1: velocity terms scale with ball speed, breakpoints use exact
//! division so the table is mirror-symmetric about zero offset and velocity.

use fuzzy_core::{ConfigError, InferenceEngine, LinguisticVariable, Membership, Rule, Universe};
use serde::Serialize;

pub const FUZZY_TABLE_VERSION: u32 = 1;

pub const BALL_OFFSET: &str = "ball_offset";
pub const PADDLE_VELOCITY: &str = "paddle_velocity";
pub const PADDLE_SPEED: &str = "paddle_speed";

pub const OFFSET_STEP: f64 = 0.5;
pub const VELOCITY_STEP: f64 = 0.1;
pub const SPEED_STEP: f64 = 0.1;
pub const SPEED_LIMIT: f64 = 2.0;

/// Game quantities the antecedent breakpoints are scaled by
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FuzzyParams {
    /// `H`: offset universe is `[-H, H]`
    pub screen_height: f64,
    /// `P`
    pub paddle_size: f64,
    /// `V`: velocity universe is `[-V, V]`
    pub max_speed: f64,
    /// `B`
    pub ball_speed: f64,
}

/// Where the ball is relative to the paddle centre (y grows downward)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Offset {
    FarHigh,
    CloseHigh,
    Zero,
    CloseLow,
    FarLow,
}

impl Offset {
    pub const ALL: [Offset; 5] = [
        Offset::FarHigh,
        Offset::CloseHigh,
        Offset::Zero,
        Offset::CloseLow,
        Offset::FarLow,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Offset::FarHigh => "FAR_HIGH",
            Offset::CloseHigh => "CLOSE_HIGH",
            Offset::Zero => "ZERO",
            Offset::CloseLow => "CLOSE_LOW",
            Offset::FarLow => "FAR_LOW",
        }
    }

    pub fn mirror(self) -> Self {
        match self {
            Offset::FarHigh => Offset::FarLow,
            Offset::CloseHigh => Offset::CloseLow,
            Offset::Zero => Offset::Zero,
            Offset::CloseLow => Offset::CloseHigh,
            Offset::FarLow => Offset::FarHigh,
        }
    }
}

/// Terms shared by paddle velocity (input) and paddle speed (output)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Motion {
    FastUp,
    SlowUp,
    Zero,
    SlowDown,
    FastDown,
}

impl Motion {
    pub const ALL: [Motion; 5] = [
        Motion::FastUp,
        Motion::SlowUp,
        Motion::Zero,
        Motion::SlowDown,
        Motion::FastDown,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Motion::FastUp => "FAST_UP",
            Motion::SlowUp => "SLOW_UP",
            Motion::Zero => "ZERO",
            Motion::SlowDown => "SLOW_DOWN",
            Motion::FastDown => "FAST_DOWN",
        }
    }

    pub fn mirror(self) -> Self {
        match self {
            Motion::FastUp => Motion::FastDown,
            Motion::SlowUp => Motion::SlowDown,
            Motion::Zero => Motion::Zero,
            Motion::SlowDown => Motion::SlowUp,
            Motion::FastDown => Motion::FastUp,
        }
    }
}

/// Consequent per cell, rows in [`Offset::ALL`] order, columns in
/// [`Motion::ALL`] order of paddle velocity.
pub const RULE_TABLE: [[Motion; 5]; 5] = {
    use Motion::*;
    [
        // FAR_HIGH
        [Zero, FastUp, FastUp, FastUp, FastUp],
        // CLOSE_HIGH
        [SlowDown, Zero, SlowUp, FastUp, FastUp],
        // ZERO
        [FastDown, SlowDown, Zero, SlowUp, FastUp],
        // CLOSE_LOW
        [FastDown, FastDown, SlowDown, Zero, SlowUp],
        // FAR_LOW
        [FastDown, FastDown, FastDown, FastDown, Zero],
    ]
};

pub fn consequent_of(offset: Offset, velocity: Motion) -> Motion {
    RULE_TABLE[offset as usize][velocity as usize]
}

pub fn ball_offset_variable(params: &FuzzyParams) -> Result<LinguisticVariable, ConfigError> {
    let h = params.screen_height;
    let half = params.paddle_size / 2.0;
    let third = params.paddle_size / 3.0;

    LinguisticVariable::new(
        BALL_OFFSET,
        Universe::new(-h, h, OFFSET_STEP)?,
        [
            (Offset::FarHigh.name(), Membership::trapezoidal(-h, -h, -half, -third)?),
            (Offset::CloseHigh.name(), Membership::trapezoidal(-half, -third, -0.5, -0.5)?),
            (Offset::Zero.name(), Membership::trapezoidal(-0.5, -0.5, 0.5, 0.5)?),
            (Offset::CloseLow.name(), Membership::trapezoidal(0.5, 0.5, third, half)?),
            (Offset::FarLow.name(), Membership::trapezoidal(third, half, h, h)?),
        ],
    )
}

pub fn paddle_velocity_variable(params: &FuzzyParams) -> Result<LinguisticVariable, ConfigError> {
    let v = params.max_speed;
    let half = params.ball_speed / 2.0;
    let quarter = params.ball_speed / 4.0;

    LinguisticVariable::new(
        PADDLE_VELOCITY,
        Universe::new(-v, v, VELOCITY_STEP)?,
        [
            (Motion::FastUp.name(), Membership::trapezoidal(-v, -v, -half, -quarter)?),
            (Motion::SlowUp.name(), Membership::trapezoidal(-half, -quarter, -0.1, -0.1)?),
            (Motion::Zero.name(), Membership::trapezoidal(-0.1, -0.1, 0.1, 0.1)?),
            (Motion::SlowDown.name(), Membership::trapezoidal(0.1, 0.1, quarter, half)?),
            (Motion::FastDown.name(), Membership::trapezoidal(quarter, half, v, v)?),
        ],
    )
}

pub fn paddle_speed_variable() -> Result<LinguisticVariable, ConfigError> {
    let s = SPEED_LIMIT;

    LinguisticVariable::new(
        PADDLE_SPEED,
        Universe::new(-s, s, SPEED_STEP)?,
        [
            (Motion::FastUp.name(), Membership::triangular(-s, -s, -1.0)?),
            (Motion::SlowUp.name(), Membership::trapezoidal(-1.2, -1.0, -0.1, -0.1)?),
            (Motion::Zero.name(), Membership::trapezoidal(-0.1, -0.1, 0.1, 0.1)?),
            (Motion::SlowDown.name(), Membership::trapezoidal(0.1, 0.1, 1.0, 1.2)?),
            (Motion::FastDown.name(), Membership::triangular(1.0, s, s)?),
        ],
    )
}

/// The dense 5×5 rule base
pub fn rules() -> Vec<Rule> {
    Offset::ALL
        .iter()
        .flat_map(|&offset| {
            Motion::ALL.iter().map(move |&velocity| {
                Rule::when(BALL_OFFSET, offset.name())
                    .and(PADDLE_VELOCITY, velocity.name())
                    .then(consequent_of(offset, velocity).name())
            })
        })
        .collect()
}

/// Engine over the canonical variables with a caller-supplied rule base
pub fn engine_with_rules(
    params: &FuzzyParams,
    rules: Vec<Rule>,
) -> Result<InferenceEngine, ConfigError> {
    InferenceEngine::new(
        vec![ball_offset_variable(params)?, paddle_velocity_variable(params)?],
        paddle_speed_variable()?,
        rules,
    )
}

pub fn build_engine(params: &FuzzyParams) -> Result<InferenceEngine, ConfigError> {
    engine_with_rules(params, rules())
}
