//! Tests for form-wide validation and conversion into task fields.

use crate::task::domain::{Budget, OwnerId, TaskFactory, TaskStatus};
use crate::task::validation::{FieldError, FormField, FormValues, TaskForm};
use mockable::DefaultClock;
use rstest::{fixture, rstest};

use super::support::{days_from_today, today};

const COLOR: &str = "#563d7c";

#[fixture]
fn valid_form() -> TaskForm {
    let mut form = TaskForm::new(COLOR);
    form.set_values(FormValues {
        title: "  Ship release  ".to_owned(),
        description: "   ".to_owned(),
        color: "#ff0000".to_owned(),
        start_date: days_from_today(1).format("%Y-%m-%d").to_string(),
        status: "In Progress".to_owned(),
        budget: "500".to_owned(),
    });
    form
}

#[rstest]
fn blank_form_marks_title_date_and_status() {
    let mut form = TaskForm::new(COLOR);

    assert!(!form.validate(today()));

    let errors = form.errors();
    assert_eq!(errors.len(), 3);
    assert_eq!(errors.get(FormField::Title), Some(FieldError::TitleRequired));
    assert_eq!(
        errors.get(FormField::StartDate),
        Some(FieldError::StartDateRequired)
    );
    assert_eq!(errors.get(FormField::Status), Some(FieldError::StatusInvalid));
    assert_eq!(errors.get(FormField::Budget), None);
}

#[rstest]
fn validation_is_idempotent(mut valid_form: TaskForm) {
    valid_form.values_mut().budget = "-3".to_owned();

    assert!(!valid_form.validate(today()));
    let first = valid_form.errors().clone();
    assert!(!valid_form.validate(today()));

    assert_eq!(valid_form.errors(), &first);
}

#[rstest]
fn fixing_input_clears_stale_markers(mut valid_form: TaskForm) {
    valid_form.values_mut().title = "Hi".to_owned();
    assert!(!valid_form.validate(today()));

    valid_form.values_mut().title = "High".to_owned();

    assert!(valid_form.validate(today()));
    assert!(valid_form.errors().is_empty());
}

#[rstest]
fn check_field_only_touches_that_field(mut valid_form: TaskForm) {
    valid_form.values_mut().title = String::new();
    valid_form.values_mut().budget = "lots".to_owned();
    assert!(!valid_form.validate(today()));

    valid_form.values_mut().budget = "250".to_owned();

    assert!(valid_form.check_field(FormField::Budget, today()));
    assert_eq!(valid_form.errors().get(FormField::Budget), None);
    assert_eq!(
        valid_form.errors().get(FormField::Title),
        Some(FieldError::TitleRequired)
    );
}

#[rstest]
fn validated_fields_trim_and_drop_blank_description(mut valid_form: TaskForm) {
    let fields = valid_form
        .validated_fields(today())
        .expect("form should be valid");

    assert_eq!(fields.title(), "Ship release");
    assert_eq!(fields.description(), None);
    assert_eq!(fields.color(), "#ff0000");
    assert_eq!(fields.status(), TaskStatus::InProgress);
    assert_eq!(fields.budget(), Budget::new(500.0).expect("valid budget"));
}

#[rstest]
fn validated_fields_report_every_marker(mut valid_form: TaskForm) {
    valid_form.values_mut().title = "Hi".to_owned();
    valid_form.values_mut().status = "Blocked".to_owned();

    let errors = valid_form
        .validated_fields(today())
        .expect_err("form should be invalid");

    assert_eq!(errors.len(), 2);
    assert_eq!(
        errors.to_string(),
        "title: Title must be at least 3 characters; status: Please select a valid status"
    );
}

#[rstest]
fn loading_a_task_shows_zero_budget_as_blank(mut valid_form: TaskForm) {
    let fields = valid_form.validated_fields(today()).expect("valid form");
    let task = TaskFactory::new(OwnerId::default())
        .create(fields, &DefaultClock)
        .with_fields(super::support::fields("Plain task", TaskStatus::New));
    let mut form = TaskForm::new(COLOR);

    form.load_task(&task);

    assert_eq!(form.values().title, "Plain task");
    assert_eq!(form.values().budget, "");
    assert_eq!(form.values().status, "New");
}

#[rstest]
fn reset_restores_default_color(mut valid_form: TaskForm) {
    valid_form.values_mut().title = "Hi".to_owned();
    assert!(!valid_form.validate(today()));

    valid_form.reset();

    assert_eq!(valid_form.values(), &FormValues::with_color(COLOR));
    assert!(valid_form.errors().is_empty());
}
