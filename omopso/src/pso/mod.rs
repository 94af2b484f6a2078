//! The pso module contains the particle swarm optimizer: the swarm state and its update cycle.

mod config;
pub use self::config::*;

mod omopso;
pub use self::omopso::*;

mod particle;
pub use self::particle::*;

use crate::models::Solution;
use crate::utils::Timer;

/// Specifies a state of the optimizer.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum OptimizerState {
    /// The swarm is created and evaluated, no iteration is done yet.
    Initialized,
    /// At least one iteration is done.
    Iterating,
    /// The run is finished, no further iterations are allowed.
    Terminated,
}

/// A snapshot of optimization progress.
#[derive(Clone)]
pub struct OptimizerStatistics {
    /// Amount of completed iterations.
    pub iteration: usize,
    /// Total amount of objective evaluations, initialization included.
    pub evaluations: usize,
    /// Amount of leaders in the archive.
    pub archive_size: usize,
    /// Amount of archive improvements (new epsilon boxes occupied).
    pub improvements: usize,
    /// Time since the optimizer was created.
    pub time: Timer,
}

/// A result of the optimization run.
#[derive(Clone, Debug)]
pub struct OptimizationResult {
    /// Non-dominated solutions found.
    pub front: Vec<Solution>,
    /// Amount of completed iterations.
    pub iterations: usize,
    /// Total amount of objective evaluations.
    pub evaluations: usize,
}
