//! Dominance relations between solutions of a multi-objective (minimization) problem.
//!
//! Comparators follow the `Ordering` convention used across the crate: `Less` means that the first
//! solution dominates, `Greater` that the second one dominates and `Equal` that they are mutually
//! non-dominated.

#[cfg(test)]
#[path = "../../tests/unit/algorithms/dominance_test.rs"]
mod dominance_test;

use crate::models::Solution;
use crate::utils::{compare_floats, Float};
use std::cmp::Ordering;

/// A named view on the result of a dominance comparison.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Dominance {
    /// The first solution dominates the second one.
    FirstDominates,
    /// The second solution dominates the first one.
    SecondDominates,
    /// Neither solution dominates the other.
    NonDominated,
}

impl From<Ordering> for Dominance {
    fn from(order: Ordering) -> Self {
        match order {
            Ordering::Less => Dominance::FirstDominates,
            Ordering::Greater => Dominance::SecondDominates,
            Ordering::Equal => Dominance::NonDominated,
        }
    }
}

/// Compares two solutions in terms of dominance.
pub trait DominanceComparator {
    /// Returns dominance order of two solutions.
    fn compare(&self, a: &Solution, b: &Solution) -> Ordering;

    /// Returns dominance relation of two solutions.
    fn dominance(&self, a: &Solution, b: &Solution) -> Dominance {
        self.compare(a, b).into()
    }

    /// Returns true if `a` dominates `b`.
    fn dominates(&self, a: &Solution, b: &Solution) -> bool {
        self.compare(a, b) == Ordering::Less
    }
}

/// Calculates dominance order of two solutions using ordering functions.
pub fn dominance_order<'a, T: ?Sized + 'a, Order, Iter>(a: &'a T, b: &'a T, ordering_fns: Iter) -> Ordering
where
    Order: Fn(&'a T, &'a T) -> Ordering,
    Iter: Iterator<Item = Order>,
{
    let mut less_cnt = 0;
    let mut greater_cnt = 0;

    for ordering_fn in ordering_fns {
        match ordering_fn(a, b) {
            Ordering::Less => {
                less_cnt += 1;
            }
            Ordering::Greater => {
                greater_cnt += 1;
            }
            Ordering::Equal => {}
        }
    }

    if less_cnt > 0 && greater_cnt == 0 {
        Ordering::Less
    } else if greater_cnt > 0 && less_cnt == 0 {
        Ordering::Greater
    } else {
        debug_assert!((less_cnt > 0 && greater_cnt > 0) || (less_cnt == 0 && greater_cnt == 0));
        Ordering::Equal
    }
}

/// A classical Pareto dominance: the first solution dominates if it is not worse in all objectives
/// and strictly better in at least one.
#[derive(Clone, Copy, Debug, Default)]
pub struct ParetoDominance;

impl DominanceComparator for ParetoDominance {
    fn compare(&self, a: &Solution, b: &Solution) -> Ordering {
        assert_same_dimension(a, b);

        let objective_fns = (0..a.objectives.len())
            .map(|idx| move |a: &Solution, b: &Solution| compare_floats(a.objectives[idx], b.objectives[idx]));

        dominance_order(a, b, objective_fns)
    }
}

/// A result of epsilon-box comparison.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct BoxOrder {
    /// Dominance order.
    pub order: Ordering,
    /// True if both solutions occupy the same epsilon box.
    pub same_box: bool,
}

/// An epsilon-box dominance: objective values are coarsened into boxes of fixed width and the
/// Pareto rule is applied on box indices. Within the same box, the solution closer to the box's
/// lower corner wins.
#[derive(Clone, Debug)]
pub struct EpsilonBoxDominance {
    epsilons: Vec<Float>,
}

impl EpsilonBoxDominance {
    /// Creates a new instance of `EpsilonBoxDominance`.
    pub fn new(epsilons: Vec<Float>) -> Self {
        assert!(!epsilons.is_empty(), "epsilons cannot be empty");
        assert!(
            epsilons.iter().all(|epsilon| epsilon.is_finite() && *epsilon > 0.),
            "epsilons must be positive: {epsilons:?}"
        );

        Self { epsilons }
    }

    /// Returns epsilon values, one per objective.
    pub fn epsilons(&self) -> &[Float] {
        self.epsilons.as_slice()
    }

    /// Returns the index of the epsilon box occupied by the solution.
    pub fn box_index(&self, solution: &Solution) -> Vec<i64> {
        assert_eq!(solution.objectives.len(), self.epsilons.len(), "objective count does not match epsilon count");

        solution
            .objectives
            .iter()
            .zip(self.epsilons.iter())
            .map(|(value, epsilon)| (value / epsilon).floor() as i64)
            .collect()
    }

    /// Compares two solutions and reports whether they share the same box.
    pub fn compare_boxes(&self, a: &Solution, b: &Solution) -> BoxOrder {
        self.compare_indexed(a, &self.box_index(a), b, &self.box_index(b))
    }

    /// Compares two solutions using their precalculated box indices.
    pub(crate) fn compare_indexed(&self, a: &Solution, a_box: &[i64], b: &Solution, b_box: &[i64]) -> BoxOrder {
        if a_box == b_box {
            let order = compare_floats(self.corner_distance(a, a_box), self.corner_distance(b, b_box));

            return BoxOrder { order, same_box: true };
        }

        let index_fns = (0..a_box.len()).map(|idx| move |a: &[i64], b: &[i64]| a[idx].cmp(&b[idx]));
        let order = dominance_order(a_box, b_box, index_fns);

        BoxOrder { order, same_box: false }
    }

    /// Squared distance from the solution to the lower corner of its box.
    fn corner_distance(&self, solution: &Solution, box_index: &[i64]) -> Float {
        solution
            .objectives
            .iter()
            .zip(box_index.iter())
            .zip(self.epsilons.iter())
            .map(|((value, index), epsilon)| {
                let offset = value - *index as Float * epsilon;
                offset * offset
            })
            .sum()
    }
}

impl DominanceComparator for EpsilonBoxDominance {
    fn compare(&self, a: &Solution, b: &Solution) -> Ordering {
        assert_same_dimension(a, b);

        self.compare_boxes(a, b).order
    }
}

fn assert_same_dimension(a: &Solution, b: &Solution) {
    assert_eq!(a.objectives.len(), b.objectives.len(), "solutions have different amount of objectives");
}
