use thiserror::Error;

/// Errors raised while building variables, rules or an engine
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("invalid membership shape {shape}: breakpoints must be finite and ordered")]
    InvalidShape { shape: String },

    #[error("invalid universe [{lo}, {hi}] with step {step}")]
    InvalidUniverse { lo: f64, hi: f64, step: f64 },

    #[error("variable '{variable}' has no terms")]
    NoTerms { variable: String },

    #[error("variable '{variable}' defines term '{term}' twice")]
    DuplicateTerm { variable: String, term: String },

    #[error("antecedent '{0}' is configured twice")]
    DuplicateVariable(String),

    #[error("rule {rule} references unknown variable '{variable}'")]
    UnknownVariable { rule: usize, variable: String },

    #[error("rule {rule} references unknown term '{term}' of '{variable}'")]
    UnknownTerm {
        rule: usize,
        variable: String,
        term: String,
    },

    #[error("rule {0} has no antecedent clauses")]
    EmptyRule(usize),
}

/// Errors raised by a single inference call
#[derive(Error, Debug, Clone, PartialEq)]
pub enum InferenceError {
    #[error("no input given for antecedent '{0}'")]
    MissingInput(String),

    #[error("input '{0}' does not name an antecedent")]
    UnknownInput(String),

    #[error("input '{0}' given more than once")]
    DuplicateInput(String),

    #[error("input for '{variable}' is not finite: {value}")]
    NonFiniteInput { variable: String, value: f64 },

    #[error("expected {expected} positional inputs, got {actual}")]
    Arity { expected: usize, actual: usize },
}
