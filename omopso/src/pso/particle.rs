#[cfg(test)]
#[path = "../../tests/unit/pso/particle_test.rs"]
mod particle_test;

use crate::algorithms::dominance::{DominanceComparator, ParetoDominance};
use crate::models::Solution;
use crate::utils::{Float, Random};
use std::cmp::Ordering;

/// Specifies ranges from which velocity update coefficients are sampled on every update.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SwarmCoefficients {
    /// Inertia weight range.
    pub inertia: (Float, Float),
    /// Cognitive (personal best) acceleration range.
    pub cognitive: (Float, Float),
    /// Social (leader) acceleration range.
    pub social: (Float, Float),
}

impl Default for SwarmCoefficients {
    fn default() -> Self {
        Self { inertia: (0.1, 0.5), cognitive: (1.5, 2.0), social: (1.5, 2.0) }
    }
}

impl SwarmCoefficients {
    /// Samples coefficients for one velocity update.
    pub fn sample(&self, random: &dyn Random) -> VelocityFactors {
        let r1 = random.uniform_real(0., 1.);
        let r2 = random.uniform_real(0., 1.);
        let c1 = random.uniform_real(self.cognitive.0, self.cognitive.1);
        let c2 = random.uniform_real(self.social.0, self.social.1);
        let w = random.uniform_real(self.inertia.0, self.inertia.1);

        VelocityFactors { r1, r2, c1, c2, w }
    }
}

/// Coefficients of a single velocity update.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VelocityFactors {
    /// Random weight of the cognitive component.
    pub r1: Float,
    /// Random weight of the social component.
    pub r2: Float,
    /// Cognitive acceleration.
    pub c1: Float,
    /// Social acceleration.
    pub c2: Float,
    /// Inertia weight.
    pub w: Float,
}

/// A particle of the swarm.
#[derive(Clone, Debug)]
pub struct Particle {
    /// Current position.
    pub position: Solution,
    /// Current velocity, one component per variable.
    pub velocity: Vec<Float>,
    /// The best position found by this particle so far.
    pub personal_best: Solution,
}

impl Particle {
    /// Creates a new particle at given position with zero velocity.
    pub fn new(position: Solution) -> Self {
        Self { velocity: vec![0.; position.variables.len()], personal_best: position.clone(), position }
    }

    /// Applies `v = w * v + c1 * r1 * (pbest - x) + c2 * r2 * (leader - x)`.
    pub(crate) fn update_velocity(&mut self, leader: &Solution, factors: &VelocityFactors) {
        let VelocityFactors { r1, r2, c1, c2, w } = *factors;

        self.velocity
            .iter_mut()
            .zip(self.position.values())
            .zip(self.personal_best.values())
            .zip(leader.values())
            .for_each(|(((velocity, x), best), lead)| {
                *velocity = w * *velocity + c1 * r1 * (best - x) + c2 * r2 * (lead - x);
            });
    }

    /// Moves the particle by its velocity. A component which leaves the bounds is clamped to the
    /// bound and its velocity is reflected.
    pub(crate) fn update_position(&mut self) {
        self.position.variables.iter_mut().zip(self.velocity.iter_mut()).for_each(|(variable, velocity)| {
            let value = variable.value() + *velocity;

            if variable.is_out_of_bounds(value) {
                *velocity = -*velocity;
            }

            variable.set_value(value);
        });
    }

    /// Replaces personal best with the current position unless the personal best dominates it.
    pub(crate) fn update_personal_best(&mut self) {
        if ParetoDominance.compare(&self.position, &self.personal_best) != Ordering::Greater {
            self.personal_best = self.position.clone();
        }
    }
}
