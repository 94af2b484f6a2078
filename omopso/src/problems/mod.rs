//! This module contains well known multi-objective benchmark problems.

#[cfg(test)]
#[path = "../../tests/unit/problems/problems_test.rs"]
mod problems_test;

use crate::models::{Problem, RealVariable, Solution};
use crate::utils::{Float, GenericResult};
use std::sync::Arc;

mod schaffer;
pub use self::schaffer::Schaffer;

mod zdt;
pub use self::zdt::{Zdt1, Zdt2};

/// Returns a problem by its name. Amount of variables can be specified only for scalable problems.
pub fn get_problem_by_name(name: &str, variables: Option<usize>) -> GenericResult<Arc<dyn Problem>> {
    match name {
        "zdt1" => Ok(Arc::new(Zdt1::new(get_scalable_variables(name, variables)?))),
        "zdt2" => Ok(Arc::new(Zdt2::new(get_scalable_variables(name, variables)?))),
        "schaffer" => match variables {
            None | Some(1) => Ok(Arc::new(Schaffer)),
            Some(variables) => {
                Err(format!("problem '{name}' has exactly one variable, cannot use {variables}").into())
            }
        },
        _ => Err(format!("unknown problem name: '{name}'").into()),
    }
}

fn get_scalable_variables(name: &str, variables: Option<usize>) -> GenericResult<usize> {
    match variables {
        Some(variables) if variables < 2 => Err(format!("problem '{name}' requires at least two variables").into()),
        Some(variables) => Ok(variables),
        None => Ok(30),
    }
}

fn create_solution(variables: usize, lower_bound: Float, upper_bound: Float) -> Solution {
    Solution::new((0..variables).map(|_| RealVariable::new(lower_bound, upper_bound)).collect())
}
