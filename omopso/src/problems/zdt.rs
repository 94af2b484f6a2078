use super::*;

/// ZDT1 problem: a convex Pareto front `f2 = 1 - sqrt(f1)`.
pub struct Zdt1 {
    variables: usize,
}

impl Zdt1 {
    /// Creates a new instance of `Zdt1` with given amount of variables (at least 2).
    pub fn new(variables: usize) -> Self {
        assert!(variables > 1, "zdt1 requires at least two variables");
        Self { variables }
    }
}

impl Problem for Zdt1 {
    fn name(&self) -> &str {
        "zdt1"
    }

    fn variables(&self) -> usize {
        self.variables
    }

    fn objectives(&self) -> usize {
        2
    }

    fn new_solution(&self) -> Solution {
        create_solution(self.variables, 0., 1.)
    }

    fn evaluate(&self, solution: &mut Solution) -> GenericResult<()> {
        let (f1, g) = zdt_f1_g(solution);
        solution.objectives = vec![f1, g * (1. - (f1 / g).sqrt())];

        Ok(())
    }
}

/// ZDT2 problem: a non-convex Pareto front `f2 = 1 - f1^2`.
pub struct Zdt2 {
    variables: usize,
}

impl Zdt2 {
    /// Creates a new instance of `Zdt2` with given amount of variables (at least 2).
    pub fn new(variables: usize) -> Self {
        assert!(variables > 1, "zdt2 requires at least two variables");
        Self { variables }
    }
}

impl Problem for Zdt2 {
    fn name(&self) -> &str {
        "zdt2"
    }

    fn variables(&self) -> usize {
        self.variables
    }

    fn objectives(&self) -> usize {
        2
    }

    fn new_solution(&self) -> Solution {
        create_solution(self.variables, 0., 1.)
    }

    fn evaluate(&self, solution: &mut Solution) -> GenericResult<()> {
        let (f1, g) = zdt_f1_g(solution);
        solution.objectives = vec![f1, g * (1. - (f1 / g).powi(2))];

        Ok(())
    }
}

fn zdt_f1_g(solution: &Solution) -> (Float, Float) {
    let f1 = solution.variables[0].value();
    let rest = solution.values().skip(1).sum::<Float>();
    let g = 1. + 9. * rest / (solution.variables.len() - 1) as Float;

    (f1, g)
}
