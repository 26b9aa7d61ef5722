//! Unit tests for the task module.
//!
//! Tests are organised by concern: domain values, field rules, the form,
//! wire payloads, the board service and the view projection.

mod form_tests;
mod support;
mod validation_tests;
