#[cfg(test)]
#[path = "../../tests/unit/archive/epsilon_box_test.rs"]
mod epsilon_box_test;

use crate::algorithms::crowding::crowding_distances;
use crate::algorithms::dominance::{BoxOrder, EpsilonBoxDominance};
use crate::models::Solution;
use crate::utils::{compare_floats, Float, Random};
use std::cmp::Ordering;

/// A bounded archive of mutually non-dominated solutions under epsilon-box dominance.
///
/// Every member occupies its own epsilon box. When the archive grows beyond its capacity, members
/// with the lowest crowding distance are evicted; among equally crowded members the earliest
/// inserted one goes first.
pub struct EpsilonBoxArchive {
    dominance: EpsilonBoxDominance,
    capacity: usize,
    members: Vec<ArchiveMember>,
    next_sequence: usize,
    improvements: usize,
    same_box_improvements: usize,
}

/// Members are kept in insertion order.
struct ArchiveMember {
    solution: Solution,
    box_index: Vec<i64>,
    sequence: usize,
}

impl EpsilonBoxArchive {
    /// Creates a new instance of `EpsilonBoxArchive`.
    pub fn new(epsilons: Vec<Float>, capacity: usize) -> Self {
        assert!(capacity > 0, "archive capacity must be positive");

        Self {
            dominance: EpsilonBoxDominance::new(epsilons),
            capacity,
            members: Vec::with_capacity(capacity + 1),
            next_sequence: 0,
            improvements: 0,
            same_box_improvements: 0,
        }
    }

    /// Offers a solution to the archive. Returns true if the solution is retained.
    ///
    /// The solution is rejected when any member dominates it or when it ties with the member of
    /// its box. Otherwise, all members it dominates are removed, it is inserted and the archive is
    /// truncated back to its capacity.
    pub fn offer(&mut self, solution: Solution) -> bool {
        let box_index = self.dominance.box_index(&solution);

        let mut dominated = Vec::new();
        let mut is_same_box_replacement = false;

        for (idx, member) in self.members.iter().enumerate() {
            let BoxOrder { order, same_box } =
                self.dominance.compare_indexed(&solution, &box_index, &member.solution, &member.box_index);

            match order {
                Ordering::Less => {
                    dominated.push(idx);
                    is_same_box_replacement |= same_box;
                }
                Ordering::Greater => return false,
                Ordering::Equal if same_box => return false,
                Ordering::Equal => {}
            }
        }

        dominated.into_iter().rev().for_each(|idx| {
            self.members.remove(idx);
        });

        if is_same_box_replacement {
            self.same_box_improvements += 1;
        } else {
            self.improvements += 1;
        }

        let sequence = self.next_sequence;
        self.next_sequence += 1;
        self.members.push(ArchiveMember { solution, box_index, sequence });

        self.truncate();

        self.members.iter().any(|member| member.sequence == sequence)
    }

    /// Selects `count` leaders using binary tournaments on crowding distance: less crowded members
    /// are preferred, ties are resolved by a coin flip.
    pub fn select(&self, count: usize, random: &dyn Random) -> Vec<Solution> {
        if self.members.is_empty() {
            return vec![];
        }

        let distances = self.crowding_distances();
        let last = self.members.len() as i32 - 1;

        (0..count)
            .map(|_| {
                let first = random.uniform_int(0, last) as usize;
                let second = random.uniform_int(0, last) as usize;

                let winner = match compare_floats(distances[first], distances[second]) {
                    Ordering::Greater => first,
                    Ordering::Less => second,
                    Ordering::Equal if random.is_head_not_tails() => first,
                    Ordering::Equal => second,
                };

                self.members[winner].solution.clone()
            })
            .collect()
    }

    /// Returns amount of members.
    pub fn size(&self) -> usize {
        self.members.len()
    }

    /// Returns true if archive has no members.
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Returns archive capacity.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns a snapshot of archive members in insertion order.
    pub fn solutions(&self) -> Vec<Solution> {
        self.iter().cloned().collect()
    }

    /// Iterates over archive members in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Solution> + '_ {
        self.members.iter().map(|member| &member.solution)
    }

    /// Returns dominance comparator used by the archive.
    pub fn dominance(&self) -> &EpsilonBoxDominance {
        &self.dominance
    }

    /// Returns amount of accepted solutions which occupied a new epsilon box.
    pub fn improvements(&self) -> usize {
        self.improvements
    }

    /// Returns amount of accepted solutions which replaced a member of the same epsilon box.
    pub fn same_box_improvements(&self) -> usize {
        self.same_box_improvements
    }

    fn crowding_distances(&self) -> Vec<Float> {
        crowding_distances(&self.members.iter().map(|member| &member.solution).collect::<Vec<_>>())
    }

    fn truncate(&mut self) {
        while self.members.len() > self.capacity {
            // `min_by` returns the first of equal elements: the earliest inserted member
            let victim = self
                .crowding_distances()
                .into_iter()
                .enumerate()
                .min_by(|(_, a), (_, b)| compare_floats(*a, *b))
                .map(|(idx, _)| idx);

            match victim {
                Some(idx) => {
                    self.members.remove(idx);
                }
                None => break,
            }
        }
    }
}
