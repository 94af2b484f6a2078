//! This module contains the value types the optimizer operates on and the problem interface.

mod problem;
pub use self::problem::Problem;

mod solution;
pub use self::solution::Solution;

mod variable;
pub use self::variable::RealVariable;
