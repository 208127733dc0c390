use std::sync::Arc;

use fuzzy_core::{ConfigError, Fuzzified, Inference, InferenceEngine, InferenceError};
use tracing::{debug, warn};

use super::table::{self, FuzzyParams};
use super::Controller;

/// Mamdani controller over the canonical paddle table.
///
/// The engine is built once; clones share it.
#[derive(Debug, Clone)]
pub struct FuzzyController {
    engine: Arc<InferenceEngine>,
}

impl FuzzyController {
    pub fn new(params: &FuzzyParams) -> Result<Self, ConfigError> {
        let engine = table::build_engine(params)?;
        debug!(
            version = table::FUZZY_TABLE_VERSION,
            screen_height = params.screen_height,
            paddle_size = params.paddle_size,
            max_speed = params.max_speed,
            ball_speed = params.ball_speed,
            "fuzzy controller ready"
        );
        Ok(Self {
            engine: Arc::new(engine),
        })
    }

    pub fn engine(&self) -> &InferenceEngine {
        &self.engine
    }

    /// Full inference trace for one tick's inputs
    pub fn explain(
        &self,
        ball_offset: f64,
        paddle_velocity: f64,
    ) -> Result<Explanation<'_>, InferenceError> {
        let inference = self.engine.evaluate(&[
            (table::BALL_OFFSET, ball_offset),
            (table::PADDLE_VELOCITY, paddle_velocity),
        ])?;
        let inputs = self
            .engine
            .antecedents()
            .iter()
            .zip([ball_offset, paddle_velocity])
            .map(|(variable, x)| variable.fuzzify(x))
            .collect();
        Ok(Explanation { inputs, inference })
    }
}

/// What the fuzzy controller saw and concluded for one pair of inputs
#[derive(Debug, Clone)]
pub struct Explanation<'a> {
    /// Ball offset then paddle velocity
    pub inputs: Vec<Fuzzified<'a>>,
    pub inference: Inference,
}

impl Explanation<'_> {
    /// Strongest term of each input
    pub fn dominant_terms(&self) -> Vec<&str> {
        self.inputs
            .iter()
            .filter_map(|input| input.dominant().map(|(term, _)| term))
            .collect()
    }
}

impl Controller for FuzzyController {
    fn command(&self, ball_offset: f64, paddle_velocity: f64) -> f64 {
        // Antecedents are configured as [ball_offset, paddle_velocity]
        match self.engine.infer_positional(&[ball_offset, paddle_velocity]) {
            Ok(output) => output,
            Err(err) => {
                warn!(%err, ball_offset, paddle_velocity, "fuzzy inference rejected input");
                0.0
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Config;

    fn controller() -> FuzzyController {
        FuzzyController::new(&Config::new().fuzzy_params()).unwrap()
    }

    #[test]
    fn test_centred_and_still_is_neutral() {
        let out = controller().command(0.0, 0.0);
        assert!(out.abs() < 1e-9, "{out}");
    }

    #[test]
    fn test_ball_far_above_accelerates_up_hard() {
        let out = controller().command(-768.0, 0.0);
        assert!(out < -1.5, "{out}");
        assert!(out >= -2.0);
    }

    #[test]
    fn test_ball_far_below_accelerates_down_hard() {
        let out = controller().command(768.0, 0.0);
        assert!(out > 1.5, "{out}");
    }

    #[test]
    fn test_brakes_when_overshooting() {
        // Ball just above, paddle already racing up: slow down
        let out = controller().command(-40.0, -700.0);
        assert!(out > 0.0, "{out}");
    }

    #[test]
    fn test_positional_matches_named_inference() {
        let controller = controller();
        for &(offset, velocity) in &[(-120.0, 35.5), (12.25, -300.0), (0.3, 0.05)] {
            let named = controller.explain(offset, velocity).unwrap().inference.output;
            assert_eq!(named.to_bits(), controller.command(offset, velocity).to_bits());
        }
    }

    #[test]
    fn test_explanation_names_strongest_terms() {
        let controller = controller();
        let explanation = controller.explain(-768.0, 0.0).unwrap();
        assert_eq!(explanation.dominant_terms(), vec!["FAR_HIGH", "ZERO"]);
        assert_eq!(explanation.inputs[0].degree("FAR_HIGH"), Some(1.0));
        assert!(explanation.inference.output < -1.5);

        let explanation = controller.explain(40.0, 700.0).unwrap();
        assert_eq!(explanation.dominant_terms(), vec!["CLOSE_LOW", "FAST_DOWN"]);
    }

    #[test]
    fn test_non_finite_input_is_neutral() {
        assert_eq!(controller().command(f64::NAN, 0.0), 0.0);
    }

    #[test]
    fn test_clones_share_engine() {
        let a = controller();
        let b = a.clone();
        assert!(Arc::ptr_eq(&a.engine, &b.engine));
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn prop_command_stays_in_speed_range(
                offset in -1000.0f64..1000.0,
                velocity in -1000.0f64..1000.0,
            ) {
                let out = controller().command(offset, velocity);
                prop_assert!(out.is_finite());
                prop_assert!((-table::SPEED_LIMIT..=table::SPEED_LIMIT).contains(&out), "{}", out);
            }

            #[test]
            fn prop_mirrored_inputs_mirror_command(
                offset in -768.0f64..768.0,
                velocity in -800.0f64..800.0,
            ) {
                let controller = controller();
                let up = controller.command(offset, velocity);
                let down = controller.command(-offset, -velocity);
                prop_assert!((up + down).abs() < 1e-6, "{} vs {}", up, down);
            }
        }
    }
}
