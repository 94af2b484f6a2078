#[cfg(test)]
#[path = "../../tests/unit/operators/uniform_test.rs"]
mod uniform_test;

use super::*;
use crate::utils::Float;

/// A uniform mutation: each variable, with given probability, is shifted by a uniformly
/// distributed value from `[-perturbation / 2, perturbation / 2)` and clamped into its bounds.
#[derive(Clone, Debug)]
pub struct UniformMutation {
    probability: Float,
    perturbation: Float,
}

impl UniformMutation {
    /// Creates a new instance of `UniformMutation`.
    pub fn new(probability: Float, perturbation: Float) -> Self {
        assert!((0. ..=1.).contains(&probability), "probability must be in [0, 1] range");
        assert!(perturbation > 0., "perturbation must be positive");

        Self { probability, perturbation }
    }
}

impl Mutation for UniformMutation {
    fn mutate(&self, context: &MutationContext, solution: &Solution) -> Solution {
        let mut offspring = solution.clone();

        offspring.variables.iter_mut().for_each(|variable| {
            if context.random.uniform_real(0., 1.) < self.probability {
                let value = variable.value() + (context.random.uniform_real(0., 1.) - 0.5) * self.perturbation;
                variable.set_value(value);
            }
        });

        offspring
    }
}
