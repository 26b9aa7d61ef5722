//! Individual validation rule implementations.
//!
//! Each rule is a pure function over the raw text of one form field. `None`
//! and blank input both mean "nothing entered". Rules return `Ok(())` on
//! success or the [`FieldError`] to display on failure.

use crate::task::domain::{Budget, TaskStatus, parse_calendar_date};
use chrono::NaiveDate;

use super::FieldError;

/// Minimum title length in characters, after trimming.
pub const TITLE_MIN_CHARS: usize = 3;
/// Maximum title length in characters, after trimming.
pub const TITLE_MAX_CHARS: usize = 50;
/// Minimum description length in characters, after trimming.
pub const DESCRIPTION_MIN_CHARS: usize = 10;
/// Maximum description length in characters, after trimming.
pub const DESCRIPTION_MAX_CHARS: usize = 500;
/// Largest budget accepted from the form.
pub const BUDGET_MAX: f64 = 1_000_000.0;

fn entered(raw: Option<&str>) -> Option<&str> {
    raw.map(str::trim).filter(|value| !value.is_empty())
}

/// Validates the task title.
///
/// # Errors
///
/// Returns [`FieldError::TitleRequired`] when blank, or
/// [`FieldError::TitleTooShort`]/[`FieldError::TitleTooLong`] when the trimmed
/// title falls outside 3–50 characters.
///
/// # Examples
///
/// ```
/// use taskboard::task::validation::{FieldError, validate_title};
///
/// assert_eq!(validate_title(Some("  Ship release ")), Ok(()));
/// assert_eq!(validate_title(Some("Hi")), Err(FieldError::TitleTooShort));
/// assert_eq!(validate_title(None), Err(FieldError::TitleRequired));
/// ```
pub fn validate_title(title: Option<&str>) -> Result<(), FieldError> {
    let Some(trimmed) = entered(title) else {
        return Err(FieldError::TitleRequired);
    };
    let length = trimmed.chars().count();
    if length < TITLE_MIN_CHARS {
        return Err(FieldError::TitleTooShort);
    }
    if length > TITLE_MAX_CHARS {
        return Err(FieldError::TitleTooLong);
    }
    Ok(())
}

/// Validates the optional task description.
///
/// # Errors
///
/// Returns [`FieldError::DescriptionTooShort`] or
/// [`FieldError::DescriptionTooLong`] when a non-blank description falls
/// outside 10–500 characters after trimming.
pub fn validate_description(description: Option<&str>) -> Result<(), FieldError> {
    let Some(trimmed) = entered(description) else {
        return Ok(());
    };
    let length = trimmed.chars().count();
    if length < DESCRIPTION_MIN_CHARS {
        return Err(FieldError::DescriptionTooShort);
    }
    if length > DESCRIPTION_MAX_CHARS {
        return Err(FieldError::DescriptionTooLong);
    }
    Ok(())
}

/// Validates the start date against `today`.
///
/// Any date on or after `today` is accepted; time of day plays no part.
///
/// # Errors
///
/// Returns [`FieldError::StartDateRequired`] when blank,
/// [`FieldError::StartDateInvalid`] when the text is not a date, and
/// [`FieldError::StartDateInPast`] for dates strictly before `today`.
pub fn validate_start_date(start_date: Option<&str>, today: NaiveDate) -> Result<(), FieldError> {
    parse_start_date(start_date, today).map(|_| ())
}

/// Validates the status label.
///
/// # Errors
///
/// Returns [`FieldError::StatusInvalid`] unless the value exactly matches one
/// of `New`, `In Progress`, `Completed` or `Cancelled`.
pub fn validate_status(status: Option<&str>) -> Result<(), FieldError> {
    parse_status(status).map(|_| ())
}

/// Validates the optional budget.
///
/// # Errors
///
/// Returns [`FieldError::BudgetNotANumber`] for text that is not a finite
/// number, [`FieldError::BudgetNotPositive`] for zero or negative amounts and
/// [`FieldError::BudgetTooLarge`] above 1,000,000.
///
/// # Examples
///
/// ```
/// use taskboard::task::validation::{FieldError, validate_budget};
///
/// assert_eq!(validate_budget(Some("500")), Ok(()));
/// assert_eq!(validate_budget(Some("")), Ok(()));
/// assert_eq!(validate_budget(Some("0")), Err(FieldError::BudgetNotPositive));
/// ```
pub fn validate_budget(budget: Option<&str>) -> Result<(), FieldError> {
    parse_budget(budget).map(|_| ())
}

pub(crate) fn parse_start_date(
    start_date: Option<&str>,
    today: NaiveDate,
) -> Result<NaiveDate, FieldError> {
    let trimmed = entered(start_date).ok_or(FieldError::StartDateRequired)?;
    let date = parse_calendar_date(trimmed).ok_or(FieldError::StartDateInvalid)?;
    if date < today {
        return Err(FieldError::StartDateInPast);
    }
    Ok(date)
}

pub(crate) fn parse_status(status: Option<&str>) -> Result<TaskStatus, FieldError> {
    status
        .and_then(|label| TaskStatus::try_from(label).ok())
        .ok_or(FieldError::StatusInvalid)
}

/// Parses the budget entry; blank input yields [`Budget::ZERO`].
pub(crate) fn parse_budget(budget: Option<&str>) -> Result<Budget, FieldError> {
    let Some(trimmed) = entered(budget) else {
        return Ok(Budget::ZERO);
    };
    let amount = trimmed
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .ok_or(FieldError::BudgetNotANumber)?;
    if amount <= 0.0 {
        return Err(FieldError::BudgetNotPositive);
    }
    if amount > BUDGET_MAX {
        return Err(FieldError::BudgetTooLarge);
    }
    Budget::new(amount).map_err(|_| FieldError::BudgetNotANumber)
}
