//! Contains functionality used by the solve command.

pub mod config;
pub mod result;
