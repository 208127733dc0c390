use serde::Serialize;

/// How the clause degrees of one rule combine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Operator {
    /// Gödel t-norm (minimum)
    #[default]
    And,
    /// Gödel t-conorm (maximum)
    Or,
}

impl Operator {
    pub fn combine(self, degrees: impl IntoIterator<Item = f64>) -> f64 {
        let mut degrees = degrees.into_iter();
        let Some(first) = degrees.next() else {
            return 0.0;
        };
        match self {
            Operator::And => degrees.fold(first, f64::min),
            Operator::Or => degrees.fold(first, f64::max),
        }
    }
}

/// One `variable IS term` proposition
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Clause {
    pub variable: String,
    pub term: String,
}

/// IF clause (op clause)* THEN consequent-term
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Rule {
    pub clauses: Vec<Clause>,
    pub operator: Operator,
    pub consequent: String,
}

impl Rule {
    pub fn new(clauses: Vec<Clause>, operator: Operator, consequent: impl Into<String>) -> Self {
        Self {
            clauses,
            operator,
            consequent: consequent.into(),
        }
    }

    /// Start a rule: `Rule::when("offset", "FAR").and("velocity", "ZERO").then("FAST")`.
    ///
    /// The first connective fixes the rule's operator; the builder it returns
    /// only offers that connective, so `and` and `or` never mix in one rule.
    pub fn when(variable: impl Into<String>, term: impl Into<String>) -> RuleBuilder {
        RuleBuilder {
            clauses: vec![Clause::new(variable, term)],
        }
    }
}

impl Clause {
    pub fn new(variable: impl Into<String>, term: impl Into<String>) -> Self {
        Self {
            variable: variable.into(),
            term: term.into(),
        }
    }
}

/// A rule with a single clause so far
#[derive(Debug, Clone)]
pub struct RuleBuilder {
    clauses: Vec<Clause>,
}

impl RuleBuilder {
    pub fn and(mut self, variable: impl Into<String>, term: impl Into<String>) -> AndBuilder {
        self.clauses.push(Clause::new(variable, term));
        AndBuilder {
            clauses: self.clauses,
        }
    }

    pub fn or(mut self, variable: impl Into<String>, term: impl Into<String>) -> OrBuilder {
        self.clauses.push(Clause::new(variable, term));
        OrBuilder {
            clauses: self.clauses,
        }
    }

    pub fn then(self, consequent: impl Into<String>) -> Rule {
        Rule::new(self.clauses, Operator::And, consequent)
    }
}

/// Conjunction of clauses
#[derive(Debug, Clone)]
pub struct AndBuilder {
    clauses: Vec<Clause>,
}

impl AndBuilder {
    pub fn and(mut self, variable: impl Into<String>, term: impl Into<String>) -> Self {
        self.clauses.push(Clause::new(variable, term));
        self
    }

    pub fn then(self, consequent: impl Into<String>) -> Rule {
        Rule::new(self.clauses, Operator::And, consequent)
    }
}

/// Disjunction of clauses
#[derive(Debug, Clone)]
pub struct OrBuilder {
    clauses: Vec<Clause>,
}

impl OrBuilder {
    pub fn or(mut self, variable: impl Into<String>, term: impl Into<String>) -> Self {
        self.clauses.push(Clause::new(variable, term));
        self
    }

    pub fn then(self, consequent: impl Into<String>) -> Rule {
        Rule::new(self.clauses, Operator::Or, consequent)
    }
}

/// A rule with every name resolved to an index
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct CompiledRule {
    /// (antecedent index, term index)
    pub clauses: Vec<(usize, usize)>,
    pub operator: Operator,
    pub consequent: usize,
}

impl CompiledRule {
    /// Firing strength given per-antecedent degree tables
    pub fn strength(&self, degrees: &[Vec<f64>]) -> f64 {
        self.operator
            .combine(self.clauses.iter().map(|&(var, term)| degrees[var][term]))
    }
}
