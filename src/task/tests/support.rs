//! Shared builders for task unit tests.

use chrono::{Days, Local, NaiveDate};

use crate::task::domain::{Budget, TaskFields, TaskStatus};
use crate::task::ports::TaskPayload;

pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

pub fn days_from_today(days: u64) -> NaiveDate {
    today()
        .checked_add_days(Days::new(days))
        .expect("date within range")
}

pub fn fields(title: &str, status: TaskStatus) -> TaskFields {
    TaskFields::new(
        title.to_owned(),
        None,
        "#563d7c".to_owned(),
        days_from_today(7),
        status,
        Budget::ZERO,
    )
}

pub fn record(id: &str, title: &str, status: &str) -> TaskPayload {
    TaskPayload {
        id: Some(crate::task::domain::TaskId::new(id).expect("valid id")),
        user_id: Some("local-user".to_owned()),
        title: Some(title.to_owned()),
        description: Some(String::new()),
        color: Some("#563d7c".to_owned()),
        start_date: Some(days_from_today(3).format("%Y-%m-%d").to_string()),
        status: Some(status.to_owned()),
        budget: Some(0.0),
        ..TaskPayload::default()
    }
}
