//! The termination module contains logic which defines termination criteria for the optimizer,
//! e.g. when to stop iterating.

use crate::pso::OptimizerStatistics;
use crate::utils::{compare_floats_refs, Float};

/// A trait which specifies criteria when the optimizer should stop searching for improved solutions.
pub trait Termination {
    /// Returns true if termination condition is met.
    fn is_termination(&self, statistics: &OptimizerStatistics) -> bool;

    /// Returns a relative estimation till termination. Value is in the `[0, 1]` range.
    fn estimate(&self, statistics: &OptimizerStatistics) -> Float;
}

mod max_evaluations;
pub use self::max_evaluations::MaxEvaluations;

mod max_iterations;
pub use self::max_iterations::MaxIterations;

mod max_time;
pub use self::max_time::MaxTime;

/// A termination which encapsulates multiple termination criteria: terminates when any of them does.
pub struct CompositeTermination {
    terminations: Vec<Box<dyn Termination + Send + Sync>>,
}

impl CompositeTermination {
    /// Creates a new instance of `CompositeTermination`.
    pub fn new(terminations: Vec<Box<dyn Termination + Send + Sync>>) -> Self {
        Self { terminations }
    }
}

impl Termination for CompositeTermination {
    fn is_termination(&self, statistics: &OptimizerStatistics) -> bool {
        self.terminations.iter().any(|t| t.is_termination(statistics))
    }

    fn estimate(&self, statistics: &OptimizerStatistics) -> Float {
        self.terminations.iter().map(|t| t.estimate(statistics)).max_by(compare_floats_refs).unwrap_or(0.)
    }
}
