#[cfg(test)]
#[path = "../../tests/unit/models/variable_test.rs"]
mod variable_test;

use crate::utils::Float;

/// A real-valued decision variable with fixed inclusive bounds.
#[derive(Clone, Debug, PartialEq)]
pub struct RealVariable {
    lower_bound: Float,
    upper_bound: Float,
    value: Float,
}

impl RealVariable {
    /// Creates a new instance of `RealVariable` with value set to the middle of the range.
    pub fn new(lower_bound: Float, upper_bound: Float) -> Self {
        assert!(lower_bound.is_finite() && upper_bound.is_finite(), "variable bounds must be finite");
        assert!(lower_bound <= upper_bound, "lower bound {lower_bound} is greater than upper bound {upper_bound}");

        Self { lower_bound, upper_bound, value: lower_bound + (upper_bound - lower_bound) / 2. }
    }

    /// Creates a new instance of `RealVariable` with given value, the value is clamped into bounds.
    pub fn with_value(lower_bound: Float, upper_bound: Float, value: Float) -> Self {
        let mut variable = Self::new(lower_bound, upper_bound);
        variable.set_value(value);

        variable
    }

    /// Returns lower bound.
    pub fn lower_bound(&self) -> Float {
        self.lower_bound
    }

    /// Returns upper bound.
    pub fn upper_bound(&self) -> Float {
        self.upper_bound
    }

    /// Returns current value.
    pub fn value(&self) -> Float {
        self.value
    }

    /// Sets a new value. Values outside of the bounds are clamped.
    pub fn set_value(&mut self, value: Float) {
        self.value = self.clamp(value);
    }

    /// Clamps given value into variable bounds.
    pub fn clamp(&self, value: Float) -> Float {
        // NaN is mapped to the lower bound
        if value.is_nan() { self.lower_bound } else { value.clamp(self.lower_bound, self.upper_bound) }
    }

    /// Returns true if given value lies outside of the bounds.
    pub fn is_out_of_bounds(&self, value: Float) -> bool {
        value < self.lower_bound || value > self.upper_bound
    }
}
