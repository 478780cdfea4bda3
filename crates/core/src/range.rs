//! Bounded progress value.
//!
//! `ProgressRange` keeps `minimum < maximum` and `minimum <= value <= maximum`
//! at all times. Setters either apply fully and report what happened through
//! a [`ValueChange`], or fail with a [`RangeError`] and leave the range as it
//! was.

use thiserror::Error;

use progress_bar_types::{DEFAULT_MAXIMUM, DEFAULT_MINIMUM};

/// Rejected mutation of a [`ProgressRange`]
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum RangeError {
    #[error("minimum {minimum} must be less than maximum {maximum}")]
    MinimumNotBelowMaximum { minimum: f64, maximum: f64 },

    #[error("maximum {maximum} must be greater than minimum {minimum}")]
    MaximumNotAboveMinimum { maximum: f64, minimum: f64 },

    #[error("value {value} must be between minimum {minimum} and maximum {maximum}")]
    ValueOutOfRange { value: f64, minimum: f64, maximum: f64 },

    #[error("{value} is not a finite number")]
    NotFinite { value: f64 },
}

/// Outcome of a successful mutation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValueChange {
    /// Value before the mutation
    pub previous: f64,
    /// Value after the mutation
    pub current: f64,
    /// The mutation drove the value to the maximum
    pub completed: bool,
}

impl ValueChange {
    fn unchanged(value: f64) -> Self {
        Self {
            previous: value,
            current: value,
            completed: false,
        }
    }

    /// The stored value differs from the one before the mutation
    pub fn changed(&self) -> bool {
        self.previous != self.current
    }
}

/// Minimum, maximum and current progress value
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProgressRange {
    minimum: f64,
    maximum: f64,
    value: f64,
}

impl Default for ProgressRange {
    fn default() -> Self {
        Self {
            minimum: DEFAULT_MINIMUM,
            maximum: DEFAULT_MAXIMUM,
            value: DEFAULT_MINIMUM,
        }
    }
}

impl ProgressRange {
    pub fn minimum(&self) -> f64 {
        self.minimum
    }

    pub fn maximum(&self) -> f64 {
        self.maximum
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    /// Value normalized to `0.0..=1.0` within the range
    pub fn fraction(&self) -> f64 {
        ((self.value - self.minimum) / (self.maximum - self.minimum)).clamp(0.0, 1.0)
    }

    /// Set the lower bound, pulling the value up to it if needed
    pub fn set_minimum(&mut self, minimum: f64) -> Result<ValueChange, RangeError> {
        check_finite(minimum)?;
        if minimum >= self.maximum {
            return Err(RangeError::MinimumNotBelowMaximum {
                minimum,
                maximum: self.maximum,
            });
        }

        self.minimum = minimum;
        if self.value < minimum {
            return self.set_value(minimum);
        }
        Ok(ValueChange::unchanged(self.value))
    }

    /// Set the upper bound, pulling the value down to it if needed
    pub fn set_maximum(&mut self, maximum: f64) -> Result<ValueChange, RangeError> {
        check_finite(maximum)?;
        if maximum <= self.minimum {
            return Err(RangeError::MaximumNotAboveMinimum {
                maximum,
                minimum: self.minimum,
            });
        }

        self.maximum = maximum;
        if self.value > maximum {
            return self.set_value(maximum);
        }
        Ok(ValueChange::unchanged(self.value))
    }

    /// Set the current value.
    ///
    /// Reaching the maximum reports `completed` on every call, not only on
    /// the first arrival.
    pub fn set_value(&mut self, value: f64) -> Result<ValueChange, RangeError> {
        check_finite(value)?;
        if value < self.minimum || value > self.maximum {
            return Err(RangeError::ValueOutOfRange {
                value,
                minimum: self.minimum,
                maximum: self.maximum,
            });
        }

        let previous = self.value;
        let completed = value >= self.maximum;
        self.value = if completed { self.maximum } else { value };

        Ok(ValueChange {
            previous,
            current: self.value,
            completed,
        })
    }
}

fn check_finite(value: f64) -> Result<(), RangeError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(RangeError::NotFinite { value })
    }
}
