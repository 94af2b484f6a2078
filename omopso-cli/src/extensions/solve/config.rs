//! Optimizer configuration.

#[cfg(test)]
#[path = "../../../tests/unit/extensions/solve/config_test.rs"]
mod config_test;

use omopso::prelude::*;
use omopso::pso::{DEFAULT_MAX_ITERATIONS, DEFAULT_SWARM_SIZE};
use omopso::termination::{CompositeTermination, MaxEvaluations, MaxIterations, MaxTime};
use serde::Deserialize;
use std::io::{BufReader, Read};
use std::sync::Arc;

/// Default logging frequency in iterations.
const DEFAULT_LOG_EVERY: usize = 10;

/// An optimizer configuration.
#[derive(Clone, Default, Deserialize, Debug)]
pub struct Config {
    /// Specifies swarm configuration.
    pub swarm: Option<SwarmConfig>,
    /// Specifies mutation configuration.
    pub mutation: Option<MutationConfig>,
    /// Specifies optimizer termination configuration.
    pub termination: Option<TerminationConfig>,
    /// Specifies telemetry configuration.
    pub telemetry: Option<TelemetryConfig>,
    /// Specifies environment configuration.
    pub environment: Option<EnvironmentConfig>,
}

/// A swarm configuration.
#[derive(Clone, Default, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct SwarmConfig {
    /// Amount of particles. Default is 100.
    pub size: Option<usize>,
    /// Capacity of the leader archive. Default is 100.
    pub leader_archive_size: Option<usize>,
    /// Epsilon box sizes, one per objective. Default is 0.0075 for each objective.
    pub epsilons: Option<Vec<f64>>,
}

/// A mutation configuration.
#[derive(Clone, Default, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct MutationConfig {
    /// Per variable mutation probability. Default is `1 / variables`.
    pub probability: Option<f64>,
    /// Mutation perturbation. Default is 0.5.
    pub perturbation: Option<f64>,
    /// Iterations horizon of non-uniform mutation. When omitted, it is derived from termination.
    pub max_iterations: Option<usize>,
    /// Specifies how mutation roles are assigned to particles.
    pub policy: Option<MutationPolicyType>,
}

/// Specifies mutation policy.
#[derive(Clone, Copy, Deserialize, Debug, Eq, PartialEq)]
#[serde(rename_all = "camelCase")]
pub enum MutationPolicyType {
    /// Roles rotate every iteration.
    Rotating,
    /// Roles are fixed by particle index.
    Static,
}

/// A termination configuration: the optimizer stops when any of the limits is reached.
#[derive(Clone, Default, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct TerminationConfig {
    /// Max amount of iterations.
    pub max_iterations: Option<usize>,
    /// Max amount of objective evaluations.
    pub max_evaluations: Option<usize>,
    /// Max running time in seconds.
    pub max_time: Option<f64>,
}

/// A telemetry configuration.
#[derive(Clone, Default, Deserialize, Debug)]
pub struct TelemetryConfig {
    /// Specifies logging configuration.
    pub logging: Option<LoggingConfig>,
}

/// A logging configuration.
#[derive(Clone, Default, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct LoggingConfig {
    /// Specifies whether logging is enabled.
    pub enabled: bool,
    /// Log progress every N iterations. Default is 10.
    pub log_every: Option<usize>,
}

/// An environment configuration.
#[derive(Clone, Default, Deserialize, Debug)]
pub struct EnvironmentConfig {
    /// A seed of the random stream: runs with the same seed are repeatable.
    pub seed: Option<u64>,
    /// Specifies whether particles are evaluated in parallel.
    pub parallel: Option<bool>,
}

/// Reads config from reader.
pub fn read_config<R: Read>(reader: BufReader<R>) -> Result<Config, GenericError> {
    serde_json::from_reader(reader).map_err(|err| format!("cannot deserialize config: '{err}'").into())
}

/// Creates an optimizer configuration builder from config. Telemetry, if enabled, writes into
/// the given logger.
pub fn create_builder_from_config(config: &Config, logger: InfoLogger) -> OmopsoConfigBuilder {
    let mut builder = OmopsoConfigBuilder::default();

    builder = configure_from_swarm(builder, &config.swarm);
    builder = configure_from_mutation(builder, config);
    builder = configure_from_telemetry(builder, &config.telemetry, logger);

    builder
}

/// Creates a termination from config. When no limit is specified, the optimizer stops after
/// `default_iterations`.
pub fn create_termination_from_config(config: &Config, default_iterations: usize) -> CompositeTermination {
    let mut terminations: Vec<Box<dyn Termination + Send + Sync>> = vec![];

    if let Some(termination) = &config.termination {
        if let Some(max_iterations) = termination.max_iterations {
            terminations.push(Box::new(MaxIterations::new(max_iterations)));
        }

        if let Some(max_evaluations) = termination.max_evaluations {
            terminations.push(Box::new(MaxEvaluations::new(max_evaluations)));
        }

        if let Some(max_time) = termination.max_time {
            terminations.push(Box::new(MaxTime::new(max_time)));
        }
    }

    if terminations.is_empty() {
        terminations.push(Box::new(MaxIterations::new(default_iterations)));
    }

    CompositeTermination::new(terminations)
}

/// Creates an environment from config.
pub fn create_environment_from_config(config: &Config, logger: InfoLogger) -> Environment {
    let environment = config.environment.as_ref();

    let random: Arc<dyn Random + Send + Sync> = match environment.and_then(|environment| environment.seed) {
        Some(seed) => Arc::new(DefaultRandom::new_repeatable(seed)),
        None => Arc::new(DefaultRandom::default()),
    };

    let parallelism = match environment.and_then(|environment| environment.parallel) {
        Some(true) => Parallelism::Parallel,
        _ => Parallelism::Sequential,
    };

    Environment::new(random, parallelism, logger)
}

fn configure_from_swarm(mut builder: OmopsoConfigBuilder, swarm_config: &Option<SwarmConfig>) -> OmopsoConfigBuilder {
    if let Some(config) = swarm_config {
        if let Some(size) = config.size {
            builder = builder.with_swarm_size(size);
        }

        if let Some(leader_archive_size) = config.leader_archive_size {
            builder = builder.with_leader_archive_size(leader_archive_size);
        }

        if let Some(epsilons) = &config.epsilons {
            builder = builder.with_epsilons(epsilons.clone());
        }
    }

    builder
}

fn configure_from_mutation(mut builder: OmopsoConfigBuilder, config: &Config) -> OmopsoConfigBuilder {
    let mutation = config.mutation.clone().unwrap_or_default();

    if let Some(probability) = mutation.probability {
        builder = builder.with_mutation_probability(probability);
    }

    if let Some(perturbation) = mutation.perturbation {
        builder = builder.with_mutation_perturbation(perturbation);
    }

    if let Some(policy) = mutation.policy {
        builder = builder.with_mutation_policy(match policy {
            MutationPolicyType::Rotating => MutationPolicy::Rotating,
            MutationPolicyType::Static => MutationPolicy::Static,
        });
    }

    builder.with_max_iterations(mutation.max_iterations.unwrap_or_else(|| get_iterations_horizon(config)))
}

/// Non-uniform mutation decays over the expected run length: explicit iterations limit first,
/// then evaluations budget spread over the swarm.
fn get_iterations_horizon(config: &Config) -> usize {
    let swarm_size = config.swarm.as_ref().and_then(|swarm| swarm.size).unwrap_or(DEFAULT_SWARM_SIZE).max(1);
    let termination = config.termination.as_ref();

    termination
        .and_then(|termination| termination.max_iterations)
        .or_else(|| termination.and_then(|termination| termination.max_evaluations).map(|evals| evals / swarm_size))
        .filter(|iterations| *iterations > 0)
        .unwrap_or(DEFAULT_MAX_ITERATIONS)
}

fn configure_from_telemetry(
    builder: OmopsoConfigBuilder,
    telemetry_config: &Option<TelemetryConfig>,
    logger: InfoLogger,
) -> OmopsoConfigBuilder {
    let logging = telemetry_config.as_ref().and_then(|config| config.logging.as_ref());

    let mode = match logging {
        Some(LoggingConfig { enabled: true, log_every }) => {
            TelemetryMode::OnlyLogging { logger, log_every: log_every.unwrap_or(DEFAULT_LOG_EVERY) }
        }
        _ => TelemetryMode::None,
    };

    builder.with_telemetry_mode(mode)
}
