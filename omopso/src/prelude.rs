//! This module reimports a common used types.

pub use crate::models::Problem;
pub use crate::models::RealVariable;
pub use crate::models::Solution;

pub use crate::algorithms::dominance::Dominance;
pub use crate::algorithms::dominance::DominanceComparator;
pub use crate::algorithms::dominance::EpsilonBoxDominance;
pub use crate::algorithms::dominance::ParetoDominance;

pub use crate::archive::EpsilonBoxArchive;

pub use crate::operators::Mutation;
pub use crate::operators::MutationContext;
pub use crate::operators::MutationPolicy;
pub use crate::operators::MutationRole;

pub use crate::pso::Omopso;
pub use crate::pso::OmopsoConfig;
pub use crate::pso::OmopsoConfigBuilder;
pub use crate::pso::OptimizationResult;
pub use crate::pso::OptimizerState;

pub use crate::telemetry::TelemetryMode;
pub use crate::termination::Termination;

pub use crate::utils::compare_floats;
pub use crate::utils::DefaultRandom;
pub use crate::utils::Environment;
pub use crate::utils::Float;
pub use crate::utils::GenericError;
pub use crate::utils::GenericResult;
pub use crate::utils::InfoLogger;
pub use crate::utils::Parallelism;
pub use crate::utils::Random;
