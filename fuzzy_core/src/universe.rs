use serde::Serialize;

use crate::error::ConfigError;

/// Closed interval of discourse with the sampling step used for defuzzification
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Universe {
    pub lo: f64,
    pub hi: f64,
    pub step: f64,
}

impl Universe {
    pub fn new(lo: f64, hi: f64, step: f64) -> Result<Self, ConfigError> {
        let valid = lo.is_finite() && hi.is_finite() && step.is_finite() && lo < hi && step > 0.0;
        if !valid {
            return Err(ConfigError::InvalidUniverse { lo, hi, step });
        }
        Ok(Self { lo, hi, step })
    }

    /// Number of intervals between samples
    pub fn intervals(&self) -> usize {
        ((self.hi - self.lo) / self.step).round().max(1.0) as usize
    }

    /// Evenly spaced sample points, both ends included.
    ///
    /// Points are computed from the index rather than accumulated, so the
    /// grid carries no drift and `hi` is hit exactly.
    pub fn samples(&self) -> impl Iterator<Item = f64> + '_ {
        let n = self.intervals();
        let span = self.hi - self.lo;
        (0..=n).map(move |i| {
            if i == n {
                self.hi
            } else {
                self.lo + span * i as f64 / n as f64
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_samples_include_both_ends() {
        let universe = Universe::new(-2.0, 2.0, 0.1).unwrap();
        let samples: Vec<f64> = universe.samples().collect();
        assert_eq!(samples.len(), 41);
        assert_eq!(samples[0], -2.0);
        assert_eq!(samples[20], 0.0);
        assert_eq!(samples[40], 2.0);
    }

    #[test]
    fn test_step_wider_than_span() {
        let universe = Universe::new(0.0, 1.0, 5.0).unwrap();
        let samples: Vec<f64> = universe.samples().collect();
        assert_eq!(samples, vec![0.0, 1.0]);
    }

    #[test]
    fn test_rejects_bad_bounds() {
        assert!(Universe::new(1.0, 1.0, 0.1).is_err());
        assert!(Universe::new(2.0, 1.0, 0.1).is_err());
        assert!(Universe::new(0.0, 1.0, 0.0).is_err());
        assert!(Universe::new(0.0, f64::NAN, 0.1).is_err());
    }
}
