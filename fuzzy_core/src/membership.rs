use serde::Serialize;

use crate::error::ConfigError;

/// Piecewise-linear membership function of one fuzzy term
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "shape", rename_all = "snake_case")]
pub enum Membership {
    Triangular { a: f64, b: f64, c: f64 },
    Trapezoidal { a: f64, b: f64, c: f64, d: f64 },
}

impl Membership {
    /// Triangle rising over `[a, b]` and falling over `[b, c]`
    pub fn triangular(a: f64, b: f64, c: f64) -> Result<Self, ConfigError> {
        let shape = Membership::Triangular { a, b, c };
        shape.validate()?;
        Ok(shape)
    }

    /// Trapezoid rising over `[a, b]`, flat over `[b, c]`, falling over `[c, d]`
    pub fn trapezoidal(a: f64, b: f64, c: f64, d: f64) -> Result<Self, ConfigError> {
        let shape = Membership::Trapezoidal { a, b, c, d };
        shape.validate()?;
        Ok(shape)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        let (a, b, c, d) = self.breakpoints();
        let finite = [a, b, c, d].iter().all(|p| p.is_finite());
        if finite && a <= b && b <= c && c <= d {
            Ok(())
        } else {
            Err(ConfigError::InvalidShape {
                shape: format!("{self:?}"),
            })
        }
    }

    /// Breakpoints as a trapezoid; a triangle has `b == c`
    pub fn breakpoints(&self) -> (f64, f64, f64, f64) {
        match *self {
            Membership::Triangular { a, b, c } => (a, b, b, c),
            Membership::Trapezoidal { a, b, c, d } => (a, b, c, d),
        }
    }

    /// Degree of truth of `x`, always in `[0, 1]`
    pub fn degree(&self, x: f64) -> f64 {
        let (a, b, c, d) = self.breakpoints();
        if x.is_nan() || x < a || x > d {
            return 0.0;
        }
        if x < b {
            rising(x, a, b)
        } else if x <= c {
            1.0
        } else {
            falling(x, c, d)
        }
    }
}

/// Left ramp of a shape; a zero-width ramp is a step to full membership.
fn rising(x: f64, a: f64, b: f64) -> f64 {
    if b <= a {
        return 1.0;
    }
    ((x - a) / (b - a)).clamp(0.0, 1.0)
}

/// Right ramp of a shape; a zero-width ramp is a step to full membership.
fn falling(x: f64, c: f64, d: f64) -> f64 {
    if d <= c {
        return 1.0;
    }
    ((d - x) / (d - c)).clamp(0.0, 1.0)
}
