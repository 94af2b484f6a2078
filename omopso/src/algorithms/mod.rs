//! This module contains dominance relations and the crowding distance estimator used to rank
//! solutions of a multi-objective problem.

pub mod crowding;
pub mod dominance;
