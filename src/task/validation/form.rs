//! Task form state and the validation pass over it.
//!
//! [`TaskForm`] holds the raw text of every input plus the error markers
//! currently shown next to invalid fields. Validation replaces the markers
//! wholesale, so repeated passes over the same input never accumulate
//! duplicate messages.

use std::collections::BTreeMap;
use std::fmt;

use chrono::NaiveDate;

use crate::task::domain::{Task, TaskFields};

use super::FieldError;
use super::rules::{
    parse_budget, parse_start_date, parse_status, validate_description, validate_title,
};

/// Form inputs that carry validation rules.
///
/// The color picker is unconstrained and has no entry here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FormField {
    /// Title input.
    Title,
    /// Description input.
    Description,
    /// Start date input.
    StartDate,
    /// Status selector.
    Status,
    /// Budget input.
    Budget,
}

impl FormField {
    /// Every validated field, in form order.
    pub const ALL: [Self; 5] = [
        Self::Title,
        Self::Description,
        Self::StartDate,
        Self::Status,
        Self::Budget,
    ];

    /// Returns the field name used in messages.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::Description => "description",
            Self::StartDate => "start date",
            Self::Status => "status",
            Self::Budget => "budget",
        }
    }
}

impl fmt::Display for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Raw text currently entered in the task form.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FormValues {
    /// Title input.
    pub title: String,
    /// Description input.
    pub description: String,
    /// Color picker value.
    pub color: String,
    /// Start date input, `YYYY-MM-DD`.
    pub start_date: String,
    /// Status selector value.
    pub status: String,
    /// Budget input.
    pub budget: String,
}

impl FormValues {
    /// Returns blank values with the given accent color preselected.
    #[must_use]
    pub fn with_color(color: impl Into<String>) -> Self {
        Self {
            color: color.into(),
            ..Self::default()
        }
    }

    /// Returns the values shown when `task` is loaded for editing.
    ///
    /// A zero budget is shown as a blank input.
    #[must_use]
    pub fn from_task(task: &Task) -> Self {
        let budget = if task.budget().is_zero() {
            String::new()
        } else {
            task.budget().to_string()
        };
        Self {
            title: task.title().to_owned(),
            description: task.description().unwrap_or_default().to_owned(),
            color: task.color().to_owned(),
            start_date: task.start_date().format("%Y-%m-%d").to_string(),
            status: task.status().as_str().to_owned(),
            budget,
        }
    }

    fn raw(&self, field: FormField) -> &str {
        match field {
            FormField::Title => &self.title,
            FormField::Description => &self.description,
            FormField::StartDate => &self.start_date,
            FormField::Status => &self.status,
            FormField::Budget => &self.budget,
        }
    }
}

/// Error markers currently attached to form fields, at most one per field.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FieldErrors(BTreeMap<FormField, FieldError>);

impl FieldErrors {
    /// Creates an empty marker set.
    #[must_use]
    pub const fn new() -> Self {
        Self(BTreeMap::new())
    }

    /// Returns `true` when no field is marked invalid.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the number of invalid fields.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns the error shown on `field`, if any.
    #[must_use]
    pub fn get(&self, field: FormField) -> Option<FieldError> {
        self.0.get(&field).copied()
    }

    /// Iterates over invalid fields in form order.
    pub fn iter(&self) -> impl Iterator<Item = (FormField, FieldError)> + '_ {
        self.0.iter().map(|(field, error)| (*field, *error))
    }

    fn mark(&mut self, field: FormField, error: FieldError) {
        self.0.insert(field, error);
    }

    fn unmark(&mut self, field: FormField) {
        self.0.remove(&field);
    }

    fn clear(&mut self) {
        self.0.clear();
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (field, error) in self.iter() {
            if !first {
                f.write_str("; ")?;
            }
            write!(f, "{field}: {error}")?;
            first = false;
        }
        Ok(())
    }
}

/// Runs the rule for a single field.
///
/// # Errors
///
/// Returns the [`FieldError`] produced by the field's rule.
pub fn check(field: FormField, values: &FormValues, today: NaiveDate) -> Result<(), FieldError> {
    let raw = Some(values.raw(field));
    match field {
        FormField::Title => validate_title(raw),
        FormField::Description => validate_description(raw),
        FormField::StartDate => parse_start_date(raw, today).map(|_| ()),
        FormField::Status => parse_status(raw).map(|_| ()),
        FormField::Budget => parse_budget(raw).map(|_| ()),
    }
}

/// Task form: entered values and the error markers displayed beside them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskForm {
    values: FormValues,
    errors: FieldErrors,
    default_color: String,
}

impl TaskForm {
    /// Creates a blank form that preselects `default_color`.
    #[must_use]
    pub fn new(default_color: impl Into<String>) -> Self {
        let color = default_color.into();
        Self {
            values: FormValues::with_color(color.clone()),
            errors: FieldErrors::new(),
            default_color: color,
        }
    }

    /// Returns the entered values.
    #[must_use]
    pub const fn values(&self) -> &FormValues {
        &self.values
    }

    /// Returns the entered values for editing by the presentation layer.
    pub const fn values_mut(&mut self) -> &mut FormValues {
        &mut self.values
    }

    /// Replaces every entered value; error markers are left as they are.
    pub fn set_values(&mut self, values: FormValues) {
        self.values = values;
    }

    /// Returns the error markers from the last validation pass.
    #[must_use]
    pub const fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    /// Validates every field.
    ///
    /// Clears all markers, then marks each field whose rule fails. Returns
    /// `true` when no rule failed.
    pub fn validate(&mut self, today: NaiveDate) -> bool {
        self.errors.clear();
        for field in FormField::ALL {
            if let Err(error) = check(field, &self.values, today) {
                self.errors.mark(field, error);
            }
        }
        self.errors.is_empty()
    }

    /// Re-validates one field, as when the input loses focus.
    ///
    /// Only that field's marker changes. Returns `true` when it is valid.
    pub fn check_field(&mut self, field: FormField, today: NaiveDate) -> bool {
        match check(field, &self.values, today) {
            Ok(()) => {
                self.errors.unmark(field);
                true
            }
            Err(error) => {
                self.errors.mark(field, error);
                false
            }
        }
    }

    /// Validates the form and converts it into typed task fields.
    ///
    /// Title and description are trimmed, a blank description becomes
    /// `None`, and a blank budget becomes zero.
    ///
    /// # Errors
    ///
    /// Returns the field markers when any rule fails.
    pub fn validated_fields(&mut self, today: NaiveDate) -> Result<TaskFields, FieldErrors> {
        if !self.validate(today) {
            return Err(self.errors.clone());
        }
        self.typed_fields(today).map_err(|(field, error)| {
            self.errors.mark(field, error);
            self.errors.clone()
        })
    }

    fn typed_fields(&self, today: NaiveDate) -> Result<TaskFields, (FormField, FieldError)> {
        let values = &self.values;
        let start_date = parse_start_date(Some(&values.start_date), today)
            .map_err(|error| (FormField::StartDate, error))?;
        let status =
            parse_status(Some(&values.status)).map_err(|error| (FormField::Status, error))?;
        let budget =
            parse_budget(Some(&values.budget)).map_err(|error| (FormField::Budget, error))?;
        let description = Some(values.description.trim())
            .filter(|text| !text.is_empty())
            .map(str::to_owned);

        Ok(TaskFields::new(
            values.title.trim().to_owned(),
            description,
            values.color.clone(),
            start_date,
            status,
            budget,
        ))
    }

    /// Loads `task` into the form for editing and clears all markers.
    pub fn load_task(&mut self, task: &Task) {
        self.values = FormValues::from_task(task);
        self.errors.clear();
    }

    /// Empties the form, restores the default color and clears all markers.
    pub fn reset(&mut self) {
        self.values = FormValues::with_color(self.default_color.clone());
        self.errors.clear();
    }
}
