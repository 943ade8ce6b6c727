use crate::io::configuration::FIELD_DELIMITER;
use crate::io::error::{Result, computation_error, invalid_parameter};
use crate::math::fraction::{Fraction, Mean};
use std::fmt;

/// Ordered sequence of values drawn without repetition from the input list
///
/// The sum and mean are computed once, exactly, at construction. A variation
/// is never mutated afterwards.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Variation {
    values: Vec<i64>,
    sum: i64,
    mean: Mean,
}

impl Variation {
    /// Build a variation from its values
    ///
    /// # Errors
    ///
    /// Returns an error if `values` is empty or the sum overflows `i64`
    pub fn new(values: Vec<i64>) -> Result<Self> {
        if values.is_empty() {
            return Err(invalid_parameter(
                "values",
                &"[]",
                &"a variation needs at least one value",
            ));
        }

        let sum = values
            .iter()
            .try_fold(0_i64, |acc, &value| acc.checked_add(value))
            .ok_or_else(|| computation_error("variation sum", &"sum overflows i64"))?;
        let length = i64::try_from(values.len())
            .map_err(|_conversion_error| computation_error("variation mean", &"too many values"))?;
        let mean = Fraction::new(sum, length)
            .ok_or_else(|| computation_error("variation mean", &"mean out of range"))?;

        Ok(Self { values, sum, mean })
    }

    /// Values in position order
    pub fn values(&self) -> &[i64] {
        &self.values
    }

    /// Number of positions
    pub const fn len(&self) -> usize {
        self.values.len()
    }

    /// Always false for a constructed variation
    pub const fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Exact sum of the values
    pub const fn sum(&self) -> i64 {
        self.sum
    }

    /// Exact arithmetic mean
    pub const fn mean(&self) -> Mean {
        self.mean
    }

    /// Test whether both variations hold the same value at some shared position
    pub fn conflicts_with(&self, other: &Self) -> bool {
        self.values
            .iter()
            .zip(other.values.iter())
            .any(|(a, b)| a == b)
    }

    /// Test whether the variations differ at every shared position
    pub fn is_column_disjoint_with(&self, other: &Self) -> bool {
        !self.conflicts_with(other)
    }
}

impl fmt::Display for Variation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut values = self.values.iter();
        if let Some(first) = values.next() {
            write!(f, "{first}")?;
        }
        for value in values {
            write!(f, "{FIELD_DELIMITER}{value}")?;
        }
        Ok(())
    }
}
