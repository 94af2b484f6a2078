#[cfg(test)]
#[path = "../../tests/unit/algorithms/crowding_test.rs"]
mod crowding_test;

use crate::models::Solution;
use crate::utils::{compare_floats, Float};
use std::borrow::Borrow;

/// Calculates a crowding distance of each solution in the set. The result is aligned with the
/// input: higher distance means the solution lies in a less crowded region of the objective space.
///
/// Boundary solutions of each objective get infinite distance. Interior solutions accumulate the
/// normalized distance between their neighbours; an objective with zero spread contributes nothing.
pub fn crowding_distances<S: Borrow<Solution>>(solutions: &[S]) -> Vec<Float> {
    let size = solutions.len();

    if size <= 2 {
        return vec![Float::INFINITY; size];
    }

    let objective_count = solutions[0].borrow().objectives.len();
    assert!(
        solutions.iter().all(|solution| solution.borrow().objectives.len() == objective_count),
        "solutions have different amount of objectives"
    );

    let mut distances = vec![0.; size];
    let mut indices: Vec<usize> = (0..size).collect();

    (0..objective_count).for_each(|objective| {
        let value = |idx: usize| solutions[idx].borrow().objectives[objective];

        // stable sort keeps insertion order between equal values
        indices.sort_by(|&a, &b| compare_floats(value(a), value(b)));

        let (first, last) = (indices[0], indices[size - 1]);
        distances[first] = Float::INFINITY;
        distances[last] = Float::INFINITY;

        let spread = value(last) - value(first);
        if spread > 0. {
            (1..size - 1).for_each(|i| {
                distances[indices[i]] += (value(indices[i + 1]) - value(indices[i - 1])) / spread;
            });
        }
    });

    distances
}
