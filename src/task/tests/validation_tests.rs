//! Tests for the individual field rules.

use crate::task::validation::{
    FieldError, validate_budget, validate_description, validate_start_date, validate_status,
    validate_title,
};
use rstest::rstest;

use super::support::{days_from_today, today};

#[rstest]
#[case(None, Err(FieldError::TitleRequired))]
#[case(Some(""), Err(FieldError::TitleRequired))]
#[case(Some("    "), Err(FieldError::TitleRequired))]
#[case(Some("Hi"), Err(FieldError::TitleTooShort))]
#[case(Some("  Hi  "), Err(FieldError::TitleTooShort))]
#[case(Some("Fix"), Ok(()))]
#[case(Some("Ship release"), Ok(()))]
fn title_rules(#[case] title: Option<&str>, #[case] expected: Result<(), FieldError>) {
    assert_eq!(validate_title(title), expected);
}

#[rstest]
fn title_length_bounds_count_characters() {
    let fifty = "é".repeat(50);
    let fifty_one = "é".repeat(51);

    assert_eq!(validate_title(Some(&fifty)), Ok(()));
    assert_eq!(
        validate_title(Some(&fifty_one)),
        Err(FieldError::TitleTooLong)
    );
}

#[rstest]
#[case(None, Ok(()))]
#[case(Some("   "), Ok(()))]
#[case(Some("too short"), Err(FieldError::DescriptionTooShort))]
#[case(Some("ten chars!"), Ok(()))]
fn description_rules(#[case] description: Option<&str>, #[case] expected: Result<(), FieldError>) {
    assert_eq!(validate_description(description), expected);
}

#[rstest]
fn description_rejects_more_than_five_hundred_characters() {
    let limit = "x".repeat(500);
    let over = "x".repeat(501);

    assert_eq!(validate_description(Some(&limit)), Ok(()));
    assert_eq!(
        validate_description(Some(&over)),
        Err(FieldError::DescriptionTooLong)
    );
}

#[rstest]
fn start_date_accepts_today_and_later() {
    let now = today();
    let today_text = now.format("%Y-%m-%d").to_string();
    let later = days_from_today(30).format("%Y-%m-%d").to_string();

    assert_eq!(validate_start_date(Some(&today_text), now), Ok(()));
    assert_eq!(validate_start_date(Some(&later), now), Ok(()));
}

#[rstest]
#[case(None, FieldError::StartDateRequired)]
#[case(Some(" "), FieldError::StartDateRequired)]
#[case(Some("not a date"), FieldError::StartDateInvalid)]
#[case(Some("2001-01-01"), FieldError::StartDateInPast)]
fn start_date_rejections(#[case] raw: Option<&str>, #[case] expected: FieldError) {
    assert_eq!(validate_start_date(raw, today()), Err(expected));
}

#[rstest]
#[case(Some("New"), Ok(()))]
#[case(Some("In Progress"), Ok(()))]
#[case(Some("Cancelled"), Ok(()))]
#[case(Some(""), Err(FieldError::StatusInvalid))]
#[case(Some("Blocked"), Err(FieldError::StatusInvalid))]
#[case(None, Err(FieldError::StatusInvalid))]
fn status_rules(#[case] status: Option<&str>, #[case] expected: Result<(), FieldError>) {
    assert_eq!(validate_status(status), expected);
}

#[rstest]
#[case(None, Ok(()))]
#[case(Some(""), Ok(()))]
#[case(Some("0.01"), Ok(()))]
#[case(Some("1000000"), Ok(()))]
#[case(Some("abc"), Err(FieldError::BudgetNotANumber))]
#[case(Some("12abc"), Err(FieldError::BudgetNotANumber))]
#[case(Some("inf"), Err(FieldError::BudgetNotANumber))]
#[case(Some("0"), Err(FieldError::BudgetNotPositive))]
#[case(Some("-5"), Err(FieldError::BudgetNotPositive))]
#[case(Some("1000000.01"), Err(FieldError::BudgetTooLarge))]
fn budget_rules(#[case] budget: Option<&str>, #[case] expected: Result<(), FieldError>) {
    assert_eq!(validate_budget(budget), expected);
}

#[rstest]
fn messages_match_the_form_copy() {
    assert_eq!(
        FieldError::BudgetTooLarge.to_string(),
        "Budget must be less than $1,000,000"
    );
    assert_eq!(
        FieldError::StatusInvalid.to_string(),
        "Please select a valid status"
    );
}
