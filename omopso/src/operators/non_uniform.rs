#[cfg(test)]
#[path = "../../tests/unit/operators/non_uniform_test.rs"]
mod non_uniform_test;

use super::*;
use crate::utils::Float;

/// A non-uniform mutation: each variable, with given probability, moves towards its upper or lower
/// bound (chosen by a coin flip) by a random fraction of the distance which shrinks as the
/// optimization approaches `max_iterations`.
///
/// Beyond `max_iterations` the progress fraction is clamped to one, so the operator leaves
/// variables unchanged.
#[derive(Clone, Debug)]
pub struct NonUniformMutation {
    probability: Float,
    perturbation: Float,
    max_iterations: usize,
}

impl NonUniformMutation {
    /// Creates a new instance of `NonUniformMutation`.
    pub fn new(probability: Float, perturbation: Float, max_iterations: usize) -> Self {
        assert!((0. ..=1.).contains(&probability), "probability must be in [0, 1] range");
        assert!(perturbation > 0., "perturbation must be positive");
        assert!(max_iterations > 0, "max iterations must be positive");

        Self { probability, perturbation, max_iterations }
    }

    /// Returns the delta to apply for given distance to the target bound.
    pub fn delta(&self, context: &MutationContext, difference: Float) -> Float {
        let fraction = (context.current_iteration() as Float / self.max_iterations as Float).clamp(0., 1.);
        let exponent = (1. - fraction).powf(self.perturbation);

        difference * (1. - context.random.uniform_real(0., 1.).powf(exponent))
    }
}

impl Mutation for NonUniformMutation {
    fn mutate(&self, context: &MutationContext, solution: &Solution) -> Solution {
        let mut offspring = solution.clone();

        offspring.variables.iter_mut().for_each(|variable| {
            if context.random.uniform_real(0., 1.) < self.probability {
                let value = variable.value();
                let target = if context.random.is_head_not_tails() { variable.upper_bound() } else { variable.lower_bound() };

                variable.set_value(value + self.delta(context, target - value));
            }
        });

        offspring
    }
}
