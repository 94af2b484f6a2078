//! Optimization result serialization.

#[cfg(test)]
#[path = "../../../tests/unit/extensions/solve/result_test.rs"]
mod result_test;

use omopso::prelude::*;
use serde::Serialize;
use std::io::{BufWriter, Write};

/// A serializable optimization result.
#[derive(Clone, Debug, Serialize)]
pub struct SolveResult {
    /// Name of the solved problem.
    pub problem: String,
    /// Amount of completed iterations.
    pub iterations: usize,
    /// Total amount of objective evaluations.
    pub evaluations: usize,
    /// Non-dominated solutions found.
    pub front: Vec<FrontSolution>,
}

/// A serializable solution of the front.
#[derive(Clone, Debug, Serialize)]
pub struct FrontSolution {
    /// Decision variable values.
    pub variables: Vec<f64>,
    /// Objective values.
    pub objectives: Vec<f64>,
}

impl SolveResult {
    /// Creates a new instance of `SolveResult`.
    pub fn new(problem: &str, result: &OptimizationResult) -> Self {
        let front = result
            .front
            .iter()
            .map(|solution| FrontSolution {
                variables: solution.values().collect(),
                objectives: solution.objectives.clone(),
            })
            .collect();

        Self { problem: problem.to_string(), iterations: result.iterations, evaluations: result.evaluations, front }
    }
}

/// Writes optimization result as json.
pub fn write_result<W: Write>(
    mut writer: BufWriter<W>,
    problem: &str,
    result: &OptimizationResult,
) -> Result<(), GenericError> {
    serde_json::to_writer_pretty(&mut writer, &SolveResult::new(problem, result))
        .map_err(|err| format!("cannot serialize result: '{err}'"))?;

    writer.flush().map_err(GenericError::from)
}
