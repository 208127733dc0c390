use serde::Serialize;

use crate::error::ConfigError;
use crate::membership::Membership;
use crate::universe::Universe;

/// A named fuzzy term of a linguistic variable
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Term {
    pub name: String,
    pub membership: Membership,
}

/// A numeric axis partitioned into named fuzzy terms
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LinguisticVariable {
    name: String,
    universe: Universe,
    terms: Vec<Term>,
}

impl LinguisticVariable {
    pub fn new(
        name: impl Into<String>,
        universe: Universe,
        terms: impl IntoIterator<Item = (impl Into<String>, Membership)>,
    ) -> Result<Self, ConfigError> {
        let name = name.into();
        let mut collected: Vec<Term> = Vec::new();
        for (term, membership) in terms {
            let term = term.into();
            if collected.iter().any(|t| t.name == term) {
                return Err(ConfigError::DuplicateTerm {
                    variable: name,
                    term,
                });
            }
            collected.push(Term {
                name: term,
                membership,
            });
        }
        if collected.is_empty() {
            return Err(ConfigError::NoTerms { variable: name });
        }

        Ok(Self {
            name,
            universe,
            terms: collected,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn universe(&self) -> &Universe {
        &self.universe
    }

    pub fn terms(&self) -> &[Term] {
        &self.terms
    }

    pub fn term_index(&self, term: &str) -> Option<usize> {
        self.terms.iter().position(|t| t.name == term)
    }

    /// Degree of every term at `x`, zero degrees included. `x` is not clamped.
    pub fn fuzzify(&self, x: f64) -> Fuzzified<'_> {
        Fuzzified {
            variable: self,
            degrees: self.degrees(x),
        }
    }

    pub(crate) fn degrees(&self, x: f64) -> Vec<f64> {
        self.terms.iter().map(|t| t.membership.degree(x)).collect()
    }
}

/// Result of fuzzifying one crisp value, in term declaration order
#[derive(Debug, Clone, PartialEq)]
pub struct Fuzzified<'v> {
    variable: &'v LinguisticVariable,
    degrees: Vec<f64>,
}

impl<'v> Fuzzified<'v> {
    pub fn degree(&self, term: &str) -> Option<f64> {
        self.variable.term_index(term).map(|i| self.degrees[i])
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'v str, f64)> + '_ {
        self.variable
            .terms
            .iter()
            .zip(&self.degrees)
            .map(|(t, d)| (t.name.as_str(), *d))
    }

    /// Term with the highest degree; the first declared wins a tie
    pub fn dominant(&self) -> Option<(&'v str, f64)> {
        self.iter()
            .fold(None, |best: Option<(&str, f64)>, (term, degree)| match best {
                Some((_, d)) if d >= degree => best,
                _ => Some((term, degree)),
            })
    }
}
