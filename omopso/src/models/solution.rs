use crate::models::RealVariable;
use crate::utils::Float;

/// A candidate solution: an ordered tuple of decision variables and the objective values
/// assigned by the problem evaluation (minimized).
#[derive(Clone, Debug, PartialEq)]
pub struct Solution {
    /// Decision variables.
    pub variables: Vec<RealVariable>,
    /// Objective values, empty until the solution is evaluated.
    pub objectives: Vec<Float>,
    /// Optional constraint violation reported by the problem.
    pub constraint_violation: Option<Float>,
}

impl Solution {
    /// Creates a new instance of `Solution` with unevaluated objectives.
    pub fn new(variables: Vec<RealVariable>) -> Self {
        Self { variables, objectives: vec![], constraint_violation: None }
    }

    /// Creates a new instance of `Solution` with given objective values.
    pub fn with_objectives(variables: Vec<RealVariable>, objectives: Vec<Float>) -> Self {
        Self { variables, objectives, constraint_violation: None }
    }

    /// Returns decision variable values.
    pub fn values(&self) -> impl Iterator<Item = Float> + '_ {
        self.variables.iter().map(|variable| variable.value())
    }

    /// Returns true if the solution has objective values assigned.
    pub fn is_evaluated(&self) -> bool {
        !self.objectives.is_empty()
    }
}
