use crate::models::{Problem, RealVariable, Solution};
use crate::utils::GenericResult;
use std::sync::atomic::{AtomicUsize, Ordering};

/// A two objective problem with conflicting spheres centered at `-0.5` and `0.5`, each variable is
/// bounded by `[-1, 1]`.
pub struct TwoSpheresProblem {
    variables: usize,
    evaluations: AtomicUsize,
}

impl TwoSpheresProblem {
    pub fn new(variables: usize) -> Self {
        Self { variables, evaluations: AtomicUsize::new(0) }
    }

    pub fn evaluations(&self) -> usize {
        self.evaluations.load(Ordering::Relaxed)
    }
}

impl Problem for TwoSpheresProblem {
    fn name(&self) -> &str {
        "two-spheres"
    }

    fn variables(&self) -> usize {
        self.variables
    }

    fn objectives(&self) -> usize {
        2
    }

    fn new_solution(&self) -> Solution {
        Solution::new((0..self.variables).map(|_| RealVariable::new(-1., 1.)).collect())
    }

    fn evaluate(&self, solution: &mut Solution) -> GenericResult<()> {
        self.evaluations.fetch_add(1, Ordering::Relaxed);

        let f1 = solution.values().map(|x| (x + 0.5).powi(2)).sum::<f64>();
        let f2 = solution.values().map(|x| (x - 0.5).powi(2)).sum::<f64>();
        solution.objectives = vec![f1, f2];

        Ok(())
    }
}

/// Specifies how `FaultyProblem` misbehaves.
pub enum Fault {
    /// Returns an error after given amount of successful evaluations.
    ErrorAfter(usize),
    /// Assigns a wrong amount of objectives.
    WrongObjectives,
    /// Assigns NaN objectives.
    NanObjectives,
}

/// A problem which fails in a specified way.
pub struct FaultyProblem {
    fault: Fault,
    evaluations: AtomicUsize,
}

impl FaultyProblem {
    pub fn new(fault: Fault) -> Self {
        Self { fault, evaluations: AtomicUsize::new(0) }
    }
}

impl Problem for FaultyProblem {
    fn name(&self) -> &str {
        "faulty"
    }

    fn variables(&self) -> usize {
        2
    }

    fn objectives(&self) -> usize {
        2
    }

    fn new_solution(&self) -> Solution {
        Solution::new(vec![RealVariable::new(0., 1.), RealVariable::new(0., 1.)])
    }

    fn evaluate(&self, solution: &mut Solution) -> GenericResult<()> {
        let evaluations = self.evaluations.fetch_add(1, Ordering::Relaxed);

        solution.objectives = match self.fault {
            Fault::ErrorAfter(limit) if evaluations >= limit => return Err("evaluation failed".into()),
            Fault::ErrorAfter(_) => solution.values().collect(),
            Fault::WrongObjectives => vec![0.],
            Fault::NanObjectives => vec![f64::NAN, 0.],
        };

        Ok(())
    }
}
