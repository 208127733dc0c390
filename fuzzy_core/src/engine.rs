use serde::Serialize;
use tracing::{debug, trace};

use crate::error::{ConfigError, InferenceError};
use crate::rule::{CompiledRule, Rule};
use crate::variable::LinguisticVariable;

/// Mamdani inference over a fixed rule base.
///
/// Everything that does not depend on the inputs is resolved once here: rule
/// clauses become indices and every consequent term is sampled over the
/// consequent universe. [`InferenceEngine::infer`] then only fuzzifies,
/// fires, aggregates and takes the centroid.
#[derive(Debug, Clone)]
pub struct InferenceEngine {
    antecedents: Vec<LinguisticVariable>,
    consequent: LinguisticVariable,
    rules: Vec<Rule>,
    compiled: Vec<CompiledRule>,
    samples: Vec<f64>,
    /// Consequent term membership per sample, indexed `[term][sample]`
    surfaces: Vec<Vec<f64>>,
}

/// Full trace of one inference
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Inference {
    /// Term degrees per antecedent, in configuration order
    pub degrees: Vec<Vec<f64>>,
    /// Firing strength per rule
    pub strengths: Vec<f64>,
    /// Activation per consequent term
    pub activations: Vec<f64>,
    /// Set when the output fuzzy set was empty and the output fell back to 0
    pub degenerate: bool,
    pub output: f64,
}

impl InferenceEngine {
    pub fn new(
        antecedents: Vec<LinguisticVariable>,
        consequent: LinguisticVariable,
        rules: Vec<Rule>,
    ) -> Result<Self, ConfigError> {
        for (i, var) in antecedents.iter().enumerate() {
            if antecedents[..i].iter().any(|v| v.name() == var.name()) {
                return Err(ConfigError::DuplicateVariable(var.name().to_string()));
            }
        }

        let compiled = rules
            .iter()
            .enumerate()
            .map(|(i, rule)| compile(i, rule, &antecedents, &consequent))
            .collect::<Result<Vec<_>, _>>()?;

        let samples: Vec<f64> = consequent.universe().samples().collect();
        let surfaces = consequent
            .terms()
            .iter()
            .map(|t| samples.iter().map(|&x| t.membership.degree(x)).collect())
            .collect();

        debug!(
            antecedents = antecedents.len(),
            consequent = consequent.name(),
            rules = compiled.len(),
            samples = samples.len(),
            "built inference engine"
        );

        Ok(Self {
            antecedents,
            consequent,
            rules,
            compiled,
            samples,
            surfaces,
        })
    }

    pub fn antecedents(&self) -> &[LinguisticVariable] {
        &self.antecedents
    }

    pub fn consequent(&self) -> &LinguisticVariable {
        &self.consequent
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// Crisp output for named inputs; every antecedent needs exactly one value
    pub fn infer(&self, inputs: &[(&str, f64)]) -> Result<f64, InferenceError> {
        self.evaluate(inputs).map(|inference| inference.output)
    }

    /// Crisp output for inputs given in antecedent order
    pub fn infer_positional(&self, crisp: &[f64]) -> Result<f64, InferenceError> {
        self.evaluate_positional(crisp).map(|inference| inference.output)
    }

    pub fn evaluate(&self, inputs: &[(&str, f64)]) -> Result<Inference, InferenceError> {
        let mut crisp: Vec<Option<f64>> = vec![None; self.antecedents.len()];
        for &(name, value) in inputs {
            let idx = self
                .antecedents
                .iter()
                .position(|v| v.name() == name)
                .ok_or_else(|| InferenceError::UnknownInput(name.to_string()))?;
            if crisp[idx].replace(value).is_some() {
                return Err(InferenceError::DuplicateInput(name.to_string()));
            }
        }

        let crisp = crisp
            .into_iter()
            .zip(&self.antecedents)
            .map(|(value, var)| {
                value.ok_or_else(|| InferenceError::MissingInput(var.name().to_string()))
            })
            .collect::<Result<Vec<_>, _>>()?;

        self.evaluate_positional(&crisp)
    }

    pub fn evaluate_positional(&self, crisp: &[f64]) -> Result<Inference, InferenceError> {
        if crisp.len() != self.antecedents.len() {
            return Err(InferenceError::Arity {
                expected: self.antecedents.len(),
                actual: crisp.len(),
            });
        }
        if let Some((var, &value)) = self
            .antecedents
            .iter()
            .zip(crisp)
            .find(|(_, value)| !value.is_finite())
        {
            return Err(InferenceError::NonFiniteInput {
                variable: var.name().to_string(),
                value,
            });
        }

        Ok(self.run(crisp))
    }

    fn run(&self, crisp: &[f64]) -> Inference {
        // 1. Fuzzification
        let degrees: Vec<Vec<f64>> = self
            .antecedents
            .iter()
            .zip(crisp)
            .map(|(var, &x)| var.degrees(x))
            .collect();

        // 2. Rule firing
        let strengths: Vec<f64> = self.compiled.iter().map(|r| r.strength(&degrees)).collect();

        // 3. Aggregation per consequent term
        let mut activations = vec![0.0; self.surfaces.len()];
        for (rule, &strength) in self.compiled.iter().zip(&strengths) {
            let slot = &mut activations[rule.consequent];
            *slot = f64::max(*slot, strength);
        }

        // 4 + 5. Clipped output set and its centroid
        let mut weighted = 0.0;
        let mut area = 0.0;
        for (i, &x) in self.samples.iter().enumerate() {
            let mu = self
                .surfaces
                .iter()
                .zip(&activations)
                .map(|(surface, &level)| surface[i].min(level))
                .fold(0.0, f64::max);
            if mu > 0.0 {
                weighted += x * mu;
                area += mu;
            }
        }

        let degenerate = area <= 0.0;
        let output = if degenerate { 0.0 } else { weighted / area };
        trace!(?crisp, output, degenerate, "fuzzy inference");

        Inference {
            degrees,
            strengths,
            activations,
            degenerate,
            output,
        }
    }
}

fn compile(
    index: usize,
    rule: &Rule,
    antecedents: &[LinguisticVariable],
    consequent: &LinguisticVariable,
) -> Result<CompiledRule, ConfigError> {
    if rule.clauses.is_empty() {
        return Err(ConfigError::EmptyRule(index));
    }

    let mut clauses = Vec::with_capacity(rule.clauses.len());
    for clause in &rule.clauses {
        let var = antecedents
            .iter()
            .position(|v| v.name() == clause.variable)
            .ok_or_else(|| ConfigError::UnknownVariable {
                rule: index,
                variable: clause.variable.clone(),
            })?;
        let term = antecedents[var].term_index(&clause.term).ok_or_else(|| {
            ConfigError::UnknownTerm {
                rule: index,
                variable: clause.variable.clone(),
                term: clause.term.clone(),
            }
        })?;
        clauses.push((var, term));
    }

    let target = consequent
        .term_index(&rule.consequent)
        .ok_or_else(|| ConfigError::UnknownTerm {
            rule: index,
            variable: consequent.name().to_string(),
            term: rule.consequent.clone(),
        })?;

    Ok(CompiledRule {
        clauses,
        operator: rule.operator,
        consequent: target,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::membership::Membership;
    use crate::universe::Universe;

    fn tip_engine(rules: Vec<Rule>) -> InferenceEngine {
        let service = LinguisticVariable::new(
            "service",
            Universe::new(0.0, 10.0, 0.5).unwrap(),
            [
                ("POOR", Membership::trapezoidal(0.0, 0.0, 2.0, 6.0).unwrap()),
                ("GOOD", Membership::trapezoidal(5.0, 8.0, 10.0, 10.0).unwrap()),
            ],
        )
        .unwrap();
        let tip = LinguisticVariable::new(
            "tip",
            Universe::new(0.0, 20.0, 1.0).unwrap(),
            [
                ("LOW", Membership::triangular(0.0, 0.0, 10.0).unwrap()),
                ("HIGH", Membership::triangular(10.0, 20.0, 20.0).unwrap()),
            ],
        )
        .unwrap();
        InferenceEngine::new(vec![service], tip, rules).unwrap()
    }

    fn tip_rules() -> Vec<Rule> {
        vec![
            Rule::when("service", "POOR").then("LOW"),
            Rule::when("service", "GOOD").then("HIGH"),
        ]
    }

    #[test]
    fn test_single_rule_centroid() {
        let engine = tip_engine(tip_rules());
        // Only POOR fires, fully: centroid of the LOW triangle sampled at 1.0
        let out = engine.infer(&[("service", 0.0)]).unwrap();
        let expected: f64 = (0..=10).map(|x| x as f64 * (10 - x) as f64 / 10.0).sum::<f64>()
            / (0..=10).map(|x| (10 - x) as f64 / 10.0).sum::<f64>();
        assert!((out - expected).abs() < 1e-12, "{out} vs {expected}");
    }

    #[test]
    fn test_activation_clips_surface() {
        let engine = tip_engine(tip_rules());
        let inference = engine.evaluate(&[("service", 9.0)]).unwrap();
        assert_eq!(inference.strengths, vec![0.0, 1.0]);
        assert_eq!(inference.activations, vec![0.0, 1.0]);
        assert!(inference.output > 10.0);
        assert!(!inference.degenerate);
    }

    #[test]
    fn test_aggregation_takes_maximum() {
        let rules = vec![
            Rule::when("service", "POOR").then("LOW"),
            Rule::when("service", "GOOD").then("LOW"),
        ];
        let engine = tip_engine(rules);
        // POOR = 1/8, GOOD = 1/6 at service 5.5
        let inference = engine.evaluate(&[("service", 5.5)]).unwrap();
        assert!((inference.strengths[0] - 0.125).abs() < 1e-12);
        assert!((inference.strengths[1] - 1.0 / 6.0).abs() < 1e-12);
        assert!((inference.activations[0] - 1.0 / 6.0).abs() < 1e-12);
        assert_eq!(inference.activations[1], 0.0);
    }

    #[test]
    fn test_or_rule_fires_at_strongest_clause() {
        let rules = vec![
            Rule::when("service", "POOR").or("service", "GOOD").then("HIGH"),
            Rule::when("service", "POOR").and("service", "GOOD").then("LOW"),
        ];
        let engine = tip_engine(rules);
        let inference = engine.evaluate(&[("service", 5.5)]).unwrap();
        assert!((inference.strengths[0] - 1.0 / 6.0).abs() < 1e-12);
        assert!((inference.strengths[1] - 0.125).abs() < 1e-12);
        assert!((inference.activations[1] - 1.0 / 6.0).abs() < 1e-12);
        assert!((inference.activations[0] - 0.125).abs() < 1e-12);
    }

    #[test]
    fn test_zero_rules_yield_neutral_output() {
        let engine = tip_engine(Vec::new());
        let inference = engine.evaluate(&[("service", 3.0)]).unwrap();
        assert!(inference.degenerate);
        assert_eq!(inference.output, 0.0);
    }

    #[test]
    fn test_no_firing_rule_yields_neutral_output() {
        let engine = tip_engine(tip_rules());
        // Outside both supports
        let out = engine.infer(&[("service", -50.0)]).unwrap();
        assert_eq!(out, 0.0);
        assert!(!out.is_nan());
    }

    #[test]
    fn test_input_errors() {
        let engine = tip_engine(tip_rules());
        assert_eq!(
            engine.infer(&[]),
            Err(InferenceError::MissingInput("service".into()))
        );
        assert_eq!(
            engine.infer(&[("speed", 1.0)]),
            Err(InferenceError::UnknownInput("speed".into()))
        );
        assert_eq!(
            engine.infer(&[("service", 1.0), ("service", 2.0)]),
            Err(InferenceError::DuplicateInput("service".into()))
        );
        assert!(matches!(
            engine.infer(&[("service", f64::NAN)]),
            Err(InferenceError::NonFiniteInput { .. })
        ));
        assert_eq!(
            engine.infer_positional(&[1.0, 2.0]),
            Err(InferenceError::Arity {
                expected: 1,
                actual: 2
            })
        );
    }

    #[test]
    fn test_config_errors() {
        let build = |rules: Vec<Rule>| {
            let engine = tip_engine(Vec::new());
            InferenceEngine::new(
                engine.antecedents().to_vec(),
                engine.consequent().clone(),
                rules,
            )
        };

        assert_eq!(
            build(vec![Rule::when("quality", "POOR").then("LOW")]).unwrap_err(),
            ConfigError::UnknownVariable {
                rule: 0,
                variable: "quality".into()
            }
        );
        assert!(matches!(
            build(vec![Rule::when("service", "OK").then("LOW")]),
            Err(ConfigError::UnknownTerm { rule: 0, .. })
        ));
        assert!(matches!(
            build(vec![
                Rule::when("service", "POOR").then("LOW"),
                Rule::when("service", "POOR").then("MEDIUM"),
            ]),
            Err(ConfigError::UnknownTerm { rule: 1, .. })
        ));
        assert_eq!(
            build(vec![Rule::new(Vec::new(), Default::default(), "LOW")]).unwrap_err(),
            ConfigError::EmptyRule(0)
        );
    }

    #[test]
    fn test_duplicate_antecedent() {
        let engine = tip_engine(Vec::new());
        let service = engine.antecedents()[0].clone();
        let err = InferenceEngine::new(
            vec![service.clone(), service],
            engine.consequent().clone(),
            Vec::new(),
        )
        .unwrap_err();
        assert_eq!(err, ConfigError::DuplicateVariable("service".into()));
    }
}
