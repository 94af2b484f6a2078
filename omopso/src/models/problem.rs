use crate::models::Solution;
use crate::utils::GenericResult;

/// A multi-objective optimization problem: defines the decision space through a template
/// solution and assigns objective values to candidate solutions. All objectives are minimized.
pub trait Problem: Send + Sync {
    /// Returns a problem name.
    fn name(&self) -> &str;

    /// Returns amount of decision variables.
    fn variables(&self) -> usize;

    /// Returns amount of objectives.
    fn objectives(&self) -> usize;

    /// Creates a template solution which defines variable bounds.
    fn new_solution(&self) -> Solution;

    /// Evaluates the solution and assigns its objectives (and constraint violation, if any) in place.
    fn evaluate(&self, solution: &mut Solution) -> GenericResult<()>;
}
