//! This crate implements OMOPSO, a multi-objective particle swarm optimizer which keeps its
//! leaders in an epsilon-dominance archive and uses uniform and non-uniform mutation to preserve
//! swarm diversity.
//!
//! The main entry point is [`pso::Omopso`]:
//!
//! ```no_run
//! use omopso::prelude::*;
//! use omopso::problems::Zdt1;
//! use omopso::termination::MaxIterations;
//! use std::sync::Arc;
//!
//! let problem = Arc::new(Zdt1::new(30));
//! let config = OmopsoConfigBuilder::default().with_swarm_size(50).with_epsilons(vec![0.01, 0.01]).build(problem.as_ref())?;
//! let mut optimizer = Omopso::new(problem, config, Arc::new(Environment::default()))?;
//!
//! let result = optimizer.solve(&MaxIterations::new(100))?;
//! println!("found {} non-dominated solutions", result.front.len());
//! # Ok::<(), GenericError>(())
//! ```

#![warn(missing_docs)]

#[cfg(test)]
#[path = "../tests/helpers/mod.rs"]
#[macro_use]
pub mod helpers;

pub mod algorithms;
pub mod archive;
pub mod models;
pub mod operators;
pub mod prelude;
pub mod problems;
pub mod pso;
pub mod telemetry;
pub mod termination;
pub mod utils;
