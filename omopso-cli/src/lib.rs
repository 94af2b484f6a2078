//! A command line interface library for OMOPSO optimizer: it reads optimizer configuration and
//! writes optimization results.

#![warn(missing_docs)]

#[cfg(test)]
#[path = "../tests/helpers/mod.rs"]
#[macro_use]
mod helpers;

pub use omopso;

pub mod extensions;
