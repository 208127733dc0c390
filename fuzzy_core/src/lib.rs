//! Mamdani fuzzy inference
//!
//! Linguistic variables partitioned into triangular/trapezoidal terms, rules
//! combined with min/max, max aggregation and centroid defuzzification.

pub mod engine;
pub mod error;
pub mod membership;
pub mod rule;
pub mod universe;
pub mod variable;

pub use engine::*;
pub use error::*;
pub use membership::*;
pub use rule::{AndBuilder, Clause, Operator, OrBuilder, Rule, RuleBuilder};
pub use universe::*;
pub use variable::*;
