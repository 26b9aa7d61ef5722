//! Task form validation.
//!
//! This module provides the individual field rules and the form state that
//! runs them and keeps one error marker per invalid field.

pub mod error;
pub mod form;
pub mod rules;

pub use error::FieldError;
pub use form::{FieldErrors, FormField, FormValues, TaskForm};
pub use rules::{
    validate_budget, validate_description, validate_start_date, validate_status, validate_title,
};
