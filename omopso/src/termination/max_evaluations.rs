#[cfg(test)]
#[path = "../../tests/unit/termination/max_evaluations_test.rs"]
mod max_evaluations_test;

use super::*;

/// A termination criteria which is in terminated state when the evaluation budget is spent.
/// As the swarm is evaluated as a whole, the last iteration may exceed the budget by less than
/// the swarm size.
pub struct MaxEvaluations {
    limit: usize,
}

impl MaxEvaluations {
    /// Creates a new instance of `MaxEvaluations`.
    pub fn new(limit: usize) -> Self {
        Self { limit }
    }
}

impl Termination for MaxEvaluations {
    fn is_termination(&self, statistics: &OptimizerStatistics) -> bool {
        statistics.evaluations >= self.limit
    }

    fn estimate(&self, statistics: &OptimizerStatistics) -> Float {
        if self.limit == 0 { 1. } else { (statistics.evaluations as Float / self.limit as Float).min(1.) }
    }
}
