//! This module contains mutation operators applied to particles and the policy which decides what
//! operator a particle receives on a given iteration.

#[cfg(test)]
#[path = "../../tests/unit/operators/policy_test.rs"]
mod policy_test;

use crate::models::Solution;
use crate::utils::Random;

mod non_uniform;
pub use self::non_uniform::NonUniformMutation;

mod uniform;
pub use self::uniform::UniformMutation;

/// Provides information about optimization progress to mutation operators.
pub struct MutationContext<'a> {
    /// A random stream of the run.
    pub random: &'a dyn Random,
    /// Total amount of objective evaluations so far.
    pub evaluations: usize,
    /// Amount of particles in the swarm.
    pub swarm_size: usize,
}

impl MutationContext<'_> {
    /// Returns current iteration as it is seen by time-varying operators: amount of evaluations
    /// divided by swarm size.
    pub fn current_iteration(&self) -> usize {
        self.evaluations / self.swarm_size.max(1)
    }
}

/// A mutation operator which takes one parent and produces one offspring. The parent is never
/// modified: the offspring is derived from its full copy.
pub trait Mutation {
    /// Creates a mutated copy of the solution.
    fn mutate(&self, context: &MutationContext, solution: &Solution) -> Solution;
}

/// Specifies which mutation operator a particle receives.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum MutationRole {
    /// Non-uniform mutation with time-decaying perturbation.
    NonUniform,
    /// Uniform mutation with fixed perturbation.
    Uniform,
    /// No mutation at all.
    None,
}

const ROLES: [MutationRole; 3] = [MutationRole::NonUniform, MutationRole::Uniform, MutationRole::None];

/// Assigns mutation roles to particles. Within one iteration the swarm is always split into three
/// equal (up to rounding) groups by particle index.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum MutationPolicy {
    /// A particle keeps the role assigned by its index for the whole run.
    Static,
    /// Roles rotate every iteration, so each particle cycles through non-uniform, uniform and no
    /// mutation.
    #[default]
    Rotating,
}

impl MutationPolicy {
    /// Returns the role of the particle with given index on given (zero based) iteration.
    pub fn role(&self, particle_idx: usize, iteration: usize) -> MutationRole {
        let shift = match self {
            MutationPolicy::Static => 0,
            MutationPolicy::Rotating => iteration % ROLES.len(),
        };

        ROLES[(particle_idx + shift) % ROLES.len()]
    }

    /// Returns roles of the whole swarm on given iteration.
    pub fn roles(&self, swarm_size: usize, iteration: usize) -> Vec<MutationRole> {
        (0..swarm_size).map(|particle_idx| self.role(particle_idx, iteration)).collect()
    }
}
