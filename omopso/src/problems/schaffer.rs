use super::*;

/// Schaffer's problem N.1: a single variable in `[-10, 10]`, objectives `x^2` and `(x - 2)^2`.
pub struct Schaffer;

impl Problem for Schaffer {
    fn name(&self) -> &str {
        "schaffer"
    }

    fn variables(&self) -> usize {
        1
    }

    fn objectives(&self) -> usize {
        2
    }

    fn new_solution(&self) -> Solution {
        create_solution(1, -10., 10.)
    }

    fn evaluate(&self, solution: &mut Solution) -> GenericResult<()> {
        let x = solution.variables[0].value();
        solution.objectives = vec![x * x, (x - 2.).powi(2)];

        Ok(())
    }
}
