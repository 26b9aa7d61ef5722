//! JSON records exchanged with the remote task resource.
//!
//! Field names follow the resource's camelCase convention. Decoding is
//! lenient: identifiers may be strings or numbers, budgets may be numbers or
//! numeric strings, and any field may be absent. Conversion into a [`Task`]
//! enforces the fields every task must carry.

use crate::task::domain::{
    Budget, OwnerId, PersistedTaskData, Task, TaskDomainError, TaskId, TaskStatus,
    parse_calendar_date,
};
use chrono::{DateTime, SecondsFormat, Utc};
use mockable::Clock;
use serde::{Deserialize, Deserializer, Serialize};
use tracing::warn;

/// Task record as stored on the remote resource.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskPayload {
    /// Record identifier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<TaskId>,
    /// Server-assigned document identifier.
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub server_id: Option<TaskId>,
    /// Owning user.
    #[serde(default)]
    pub user_id: Option<String>,
    /// Title.
    #[serde(default)]
    pub title: Option<String>,
    /// Description; empty when none was entered.
    #[serde(default)]
    pub description: Option<String>,
    /// Accent color.
    #[serde(default)]
    pub color: Option<String>,
    /// Start date, `YYYY-MM-DD`.
    #[serde(default)]
    pub start_date: Option<String>,
    /// Status label.
    #[serde(default)]
    pub status: Option<String>,
    /// Budget amount.
    #[serde(default, deserialize_with = "lenient_amount")]
    pub budget: Option<f64>,
    /// Creation timestamp, RFC 3339.
    #[serde(default)]
    pub created_at: Option<String>,
}

/// Identifiers returned by the server after creating a task.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct RemoteIds {
    /// Record identifier, if echoed.
    #[serde(default)]
    pub id: Option<TaskId>,
    /// Server-assigned document identifier, if any.
    #[serde(rename = "_id", default)]
    pub server_id: Option<TaskId>,
}

impl From<&Task> for TaskPayload {
    fn from(task: &Task) -> Self {
        Self {
            id: Some(task.id().clone()),
            server_id: task.server_id().cloned(),
            user_id: task.owner_id().map(|owner| owner.as_str().to_owned()),
            title: Some(task.title().to_owned()),
            description: Some(task.description().unwrap_or_default().to_owned()),
            color: Some(task.color().to_owned()),
            start_date: Some(task.start_date().format("%Y-%m-%d").to_string()),
            status: Some(task.status().as_str().to_owned()),
            budget: Some(task.budget().amount()),
            created_at: Some(
                task.created_at()
                    .to_rfc3339_opts(SecondsFormat::Millis, true),
            ),
        }
    }
}

impl TaskPayload {
    /// Converts the record into a task.
    ///
    /// A missing, negative or non-finite budget becomes zero, and a missing
    /// or unreadable creation timestamp falls back to the clock's current
    /// time.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError`] when the record has no identifier, title,
    /// start date or status, or when any of them is invalid.
    pub fn into_task(self, clock: &impl Clock) -> Result<Task, TaskDomainError> {
        let id = self
            .id
            .clone()
            .or_else(|| self.server_id.clone())
            .ok_or(TaskDomainError::MissingField("id"))?;
        let title = self
            .title
            .filter(|text| !text.trim().is_empty())
            .ok_or(TaskDomainError::MissingField("title"))?;
        let raw_date = self
            .start_date
            .ok_or(TaskDomainError::MissingField("startDate"))?;
        let start_date = parse_calendar_date(&raw_date)
            .ok_or_else(|| TaskDomainError::InvalidStartDate(raw_date.clone()))?;
        let raw_status = self
            .status
            .ok_or(TaskDomainError::MissingField("status"))?;
        let status = TaskStatus::try_from(raw_status.as_str())?;
        let budget = self.budget.map_or(Budget::ZERO, |amount| {
            Budget::new(amount).unwrap_or_else(|err| {
                warn!(task_id = %id, error = %err, "stored budget unusable, using zero");
                Budget::ZERO
            })
        });
        let owner_id = self.user_id.and_then(|owner| OwnerId::new(owner).ok());
        let description = self.description.filter(|text| !text.trim().is_empty());
        let created_at = self
            .created_at
            .and_then(|raw| DateTime::parse_from_rfc3339(&raw).ok())
            .map_or_else(|| clock.utc(), |timestamp| timestamp.with_timezone(&Utc));

        Ok(Task::from_persisted(PersistedTaskData {
            id,
            server_id: self.server_id,
            owner_id,
            title,
            description,
            color: self.color.unwrap_or_default(),
            start_date,
            status,
            budget,
            created_at,
        }))
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum WireAmount {
    Number(f64),
    Text(String),
}

fn lenient_amount<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let amount = Option::<WireAmount>::deserialize(deserializer)?.and_then(|raw| match raw {
        WireAmount::Number(value) => Some(value),
        WireAmount::Text(text) => text.trim().parse::<f64>().ok(),
    });
    Ok(amount)
}
