//! Field validation errors.
//!
//! The display text of each variant is the message shown next to the field.

use thiserror::Error;

/// A single field-scoped validation failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum FieldError {
    /// Title is missing or blank.
    #[error("Title is required")]
    TitleRequired,
    /// Title has fewer than three characters.
    #[error("Title must be at least 3 characters")]
    TitleTooShort,
    /// Title has more than fifty characters.
    #[error("Title must be less than 50 characters")]
    TitleTooLong,
    /// Description has fewer than ten characters.
    #[error("Description must be at least 10 characters")]
    DescriptionTooShort,
    /// Description has more than five hundred characters.
    #[error("Description must be less than 500 characters")]
    DescriptionTooLong,
    /// Start date is missing or blank.
    #[error("Start date is required")]
    StartDateRequired,
    /// Start date is not a calendar date.
    #[error("Start date must be a valid date")]
    StartDateInvalid,
    /// Start date lies before today.
    #[error("Start date cannot be in the past")]
    StartDateInPast,
    /// Status is missing or not one of the known labels.
    #[error("Please select a valid status")]
    StatusInvalid,
    /// Budget is not a finite number.
    #[error("Budget must be a valid number")]
    BudgetNotANumber,
    /// Budget is zero or negative.
    #[error("Budget must be greater than 0")]
    BudgetNotPositive,
    /// Budget exceeds one million.
    #[error("Budget must be less than $1,000,000")]
    BudgetTooLarge,
}
