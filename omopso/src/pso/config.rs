#[cfg(test)]
#[path = "../../tests/unit/pso/config_test.rs"]
mod config_test;

use super::SwarmCoefficients;
use crate::models::Problem;
use crate::operators::{Mutation, MutationPolicy, NonUniformMutation, UniformMutation};
use crate::telemetry::TelemetryMode;
use crate::utils::{Float, GenericError, GenericResult};
use std::sync::Arc;

/// A mutation operator shared by the optimizer.
pub type MutationOperator = Arc<dyn Mutation + Send + Sync>;

/// Default epsilon value used for every objective when epsilons are not specified.
pub const DEFAULT_EPSILON: Float = 0.0075;

/// Default amount of particles.
pub const DEFAULT_SWARM_SIZE: usize = 100;

/// Default iterations horizon of the non-uniform mutation.
pub const DEFAULT_MAX_ITERATIONS: usize = 250;

/// A configuration of the optimizer.
#[derive(Clone)]
pub struct OmopsoConfig {
    /// Amount of particles.
    pub swarm_size: usize,
    /// Max amount of leaders kept in the archive.
    pub leader_archive_size: usize,
    /// Epsilon box sizes, one per objective.
    pub epsilons: Vec<Float>,
    mutation_probability: Float,
    mutation_perturbation: Float,
    max_iterations: usize,
    /// Specifies mutation role of particles.
    pub mutation_policy: MutationPolicy,
    /// Velocity update coefficients.
    pub coefficients: SwarmCoefficients,
    /// Uniform mutation operator.
    pub uniform_mutation: MutationOperator,
    /// Non-uniform mutation operator.
    pub non_uniform_mutation: MutationOperator,
    /// Telemetry mode.
    pub telemetry_mode: TelemetryMode,
}

impl OmopsoConfig {
    /// Returns per variable mutation probability the mutation operators were built with.
    pub fn mutation_probability(&self) -> Float {
        self.mutation_probability
    }

    /// Returns mutation perturbation the mutation operators were built with.
    pub fn mutation_perturbation(&self) -> Float {
        self.mutation_perturbation
    }

    /// Returns iterations horizon of the non-uniform mutation schedule.
    pub fn max_iterations(&self) -> usize {
        self.max_iterations
    }

    /// Checks the configuration against the problem.
    pub fn validate(&self, problem: &dyn Problem) -> GenericResult<()> {
        validate_parameters(
            problem,
            self.swarm_size,
            self.leader_archive_size,
            self.epsilons.as_slice(),
            self.mutation_probability,
            self.mutation_perturbation,
            self.max_iterations,
            &self.coefficients,
        )
    }
}

/// Provides configurable way to build `OmopsoConfig` using fluent interface pattern.
/// Parameters which are not specified get defaults of the original algorithm.
#[derive(Default)]
pub struct OmopsoConfigBuilder {
    swarm_size: Option<usize>,
    leader_archive_size: Option<usize>,
    epsilons: Option<Vec<Float>>,
    mutation_probability: Option<Float>,
    mutation_perturbation: Option<Float>,
    max_iterations: Option<usize>,
    mutation_policy: Option<MutationPolicy>,
    coefficients: Option<SwarmCoefficients>,
    uniform_mutation: Option<MutationOperator>,
    non_uniform_mutation: Option<MutationOperator>,
    telemetry_mode: Option<TelemetryMode>,
}

impl OmopsoConfigBuilder {
    /// Sets swarm size. Default is 100.
    pub fn with_swarm_size(mut self, swarm_size: usize) -> Self {
        self.swarm_size = Some(swarm_size);
        self
    }

    /// Sets leader archive capacity. Default is 100.
    pub fn with_leader_archive_size(mut self, leader_archive_size: usize) -> Self {
        self.leader_archive_size = Some(leader_archive_size);
        self
    }

    /// Sets epsilons, one per objective. Default is 0.0075 for each objective.
    pub fn with_epsilons(mut self, epsilons: Vec<Float>) -> Self {
        self.epsilons = Some(epsilons);
        self
    }

    /// Sets per variable mutation probability. Default is `1 / variables`.
    pub fn with_mutation_probability(mut self, probability: Float) -> Self {
        self.mutation_probability = Some(probability);
        self
    }

    /// Sets mutation perturbation. Default is 0.5.
    pub fn with_mutation_perturbation(mut self, perturbation: Float) -> Self {
        self.mutation_perturbation = Some(perturbation);
        self
    }

    /// Sets iterations horizon of the non-uniform mutation. Default is 250.
    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = Some(max_iterations);
        self
    }

    /// Sets mutation policy. Default is rotating.
    pub fn with_mutation_policy(mut self, policy: MutationPolicy) -> Self {
        self.mutation_policy = Some(policy);
        self
    }

    /// Sets velocity update coefficients.
    pub fn with_coefficients(mut self, coefficients: SwarmCoefficients) -> Self {
        self.coefficients = Some(coefficients);
        self
    }

    /// Overrides uniform mutation operator.
    pub fn with_uniform_mutation(mut self, operator: MutationOperator) -> Self {
        self.uniform_mutation = Some(operator);
        self
    }

    /// Overrides non-uniform mutation operator.
    pub fn with_non_uniform_mutation(mut self, operator: MutationOperator) -> Self {
        self.non_uniform_mutation = Some(operator);
        self
    }

    /// Sets telemetry mode. Default is no telemetry.
    pub fn with_telemetry_mode(mut self, mode: TelemetryMode) -> Self {
        self.telemetry_mode = Some(mode);
        self
    }

    /// Builds a configuration for given problem.
    pub fn build(self, problem: &dyn Problem) -> GenericResult<OmopsoConfig> {
        let swarm_size = self.swarm_size.unwrap_or(DEFAULT_SWARM_SIZE);
        let leader_archive_size = self.leader_archive_size.unwrap_or(100);
        let epsilons = self.epsilons.unwrap_or_else(|| vec![DEFAULT_EPSILON; problem.objectives()]);
        let mutation_probability = self.mutation_probability.unwrap_or(1. / problem.variables().max(1) as Float);
        let mutation_perturbation = self.mutation_perturbation.unwrap_or(0.5);
        let max_iterations = self.max_iterations.unwrap_or(DEFAULT_MAX_ITERATIONS);
        let coefficients = self.coefficients.unwrap_or_default();

        validate_parameters(
            problem,
            swarm_size,
            leader_archive_size,
            epsilons.as_slice(),
            mutation_probability,
            mutation_perturbation,
            max_iterations,
            &coefficients,
        )?;

        Ok(OmopsoConfig {
            swarm_size,
            leader_archive_size,
            epsilons,
            mutation_probability,
            mutation_perturbation,
            max_iterations,
            mutation_policy: self.mutation_policy.unwrap_or_default(),
            coefficients,
            uniform_mutation: self
                .uniform_mutation
                .unwrap_or_else(|| Arc::new(UniformMutation::new(mutation_probability, mutation_perturbation))),
            non_uniform_mutation: self.non_uniform_mutation.unwrap_or_else(|| {
                Arc::new(NonUniformMutation::new(mutation_probability, mutation_perturbation, max_iterations))
            }),
            telemetry_mode: self.telemetry_mode.unwrap_or(TelemetryMode::None),
        })
    }
}

#[allow(clippy::too_many_arguments)]
fn validate_parameters(
    problem: &dyn Problem,
    swarm_size: usize,
    leader_archive_size: usize,
    epsilons: &[Float],
    mutation_probability: Float,
    mutation_perturbation: Float,
    max_iterations: usize,
    coefficients: &SwarmCoefficients,
) -> GenericResult<()> {
    let mut errors: Vec<GenericError> = vec![];

    if problem.variables() == 0 || problem.objectives() == 0 {
        errors.push(format!("problem '{}' has no variables or no objectives", problem.name()).into());
    }

    if swarm_size == 0 {
        errors.push("swarm size must be positive".into());
    }

    if leader_archive_size == 0 {
        errors.push("leader archive size must be positive".into());
    }

    if epsilons.len() != problem.objectives() {
        errors.push(format!("expected {} epsilons, got {}", problem.objectives(), epsilons.len()).into());
    }

    if let Some(epsilon) = epsilons.iter().find(|epsilon| !epsilon.is_finite() || **epsilon <= 0.) {
        errors.push(format!("epsilon must be positive, got {epsilon}").into());
    }

    if !(0. ..=1.).contains(&mutation_probability) {
        errors.push(format!("mutation probability must be in [0, 1] range, got {mutation_probability}").into());
    }

    if !mutation_perturbation.is_finite() || mutation_perturbation <= 0. {
        errors.push(format!("mutation perturbation must be positive, got {mutation_perturbation}").into());
    }

    if max_iterations == 0 {
        errors.push("max iterations must be positive".into());
    }

    [("inertia", coefficients.inertia), ("cognitive", coefficients.cognitive), ("social", coefficients.social)]
        .into_iter()
        .filter(|(_, (min, max))| !min.is_finite() || !max.is_finite() || min > max)
        .for_each(|(name, (min, max))| errors.push(format!("invalid {name} range: [{min}, {max}]").into()));

    if errors.is_empty() { Ok(()) } else { Err(GenericError::join_many(errors.as_slice(), "; ").into()) }
}
