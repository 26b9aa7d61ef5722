//! Monetary budget attached to a task.

use super::TaskDomainError;
use serde::Serialize;
use std::fmt;

/// Finite, non-negative budget amount.
///
/// A zero budget means "no budget"; the form leaves the field blank for it.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize)]
#[serde(transparent)]
pub struct Budget(f64);

impl Budget {
    /// The empty budget.
    pub const ZERO: Self = Self(0.0);

    /// Creates a validated budget.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::InvalidBudget`] when the amount is negative,
    /// infinite or `NaN`.
    pub fn new(amount: f64) -> Result<Self, TaskDomainError> {
        if !amount.is_finite() || amount < 0.0 {
            return Err(TaskDomainError::InvalidBudget(amount.to_string()));
        }
        Ok(Self(amount))
    }

    /// Returns the underlying amount.
    #[must_use]
    pub const fn amount(self) -> f64 {
        self.0
    }

    /// Returns `true` when no budget has been set.
    #[must_use]
    pub fn is_zero(self) -> bool {
        self.0 <= 0.0
    }
}

impl fmt::Display for Budget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
