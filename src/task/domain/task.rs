//! Task record and the validated field set that creates or edits it.

use super::{Budget, OwnerId, TaskId, TaskStatus};
use chrono::{DateTime, NaiveDate, Utc};
use mockable::Clock;

/// User-editable task fields that passed form validation.
///
/// Values of this type are produced by
/// [`TaskForm::validated_fields`](crate::task::validation::TaskForm::validated_fields);
/// holding one is proof that the form rules accepted the input.
#[derive(Debug, Clone, PartialEq)]
pub struct TaskFields {
    title: String,
    description: Option<String>,
    color: String,
    start_date: NaiveDate,
    status: TaskStatus,
    budget: Budget,
}

impl TaskFields {
    pub(crate) const fn new(
        title: String,
        description: Option<String>,
        color: String,
        start_date: NaiveDate,
        status: TaskStatus,
        budget: Budget,
    ) -> Self {
        Self {
            title,
            description,
            color,
            start_date,
            status,
            budget,
        }
    }

    /// Returns the trimmed title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the trimmed description, if one was entered.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Returns the accent color.
    #[must_use]
    pub fn color(&self) -> &str {
        &self.color
    }

    /// Returns the start date.
    #[must_use]
    pub const fn start_date(&self) -> NaiveDate {
        self.start_date
    }

    /// Returns the status.
    #[must_use]
    pub const fn status(&self) -> TaskStatus {
        self.status
    }

    /// Returns the budget, zero when none was entered.
    #[must_use]
    pub const fn budget(&self) -> Budget {
        self.budget
    }
}

/// A task record.
///
/// `id` is minted on the client at creation. Servers may answer with their own
/// `id` and/or `_id`; the server `_id` is preferred when addressing the record
/// remotely (see [`Task::remote_key`]).
#[derive(Debug, Clone, PartialEq)]
pub struct Task {
    id: TaskId,
    server_id: Option<TaskId>,
    owner_id: Option<OwnerId>,
    title: String,
    description: Option<String>,
    color: String,
    start_date: NaiveDate,
    status: TaskStatus,
    budget: Budget,
    created_at: DateTime<Utc>,
}

/// Parameter object for reconstructing a task from a remote record.
#[derive(Debug, Clone, PartialEq)]
pub struct PersistedTaskData {
    /// Record identifier (`id`, or `_id` when the server sent only that).
    pub id: TaskId,
    /// Server-assigned `_id`, if any.
    pub server_id: Option<TaskId>,
    /// Owning user, if the record names one.
    pub owner_id: Option<OwnerId>,
    /// Title.
    pub title: String,
    /// Description, if any.
    pub description: Option<String>,
    /// Accent color.
    pub color: String,
    /// Start date.
    pub start_date: NaiveDate,
    /// Status.
    pub status: TaskStatus,
    /// Budget.
    pub budget: Budget,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
}

impl Task {
    /// Creates a new, not yet persisted task for `owner_id`.
    #[must_use]
    pub fn new(owner_id: OwnerId, fields: TaskFields, clock: &impl Clock) -> Self {
        Self {
            id: TaskId::generate(clock),
            server_id: None,
            owner_id: Some(owner_id),
            title: fields.title,
            description: fields.description,
            color: fields.color,
            start_date: fields.start_date,
            status: fields.status,
            budget: fields.budget,
            created_at: clock.utc(),
        }
    }

    /// Reconstructs a task from a remote record.
    #[must_use]
    pub fn from_persisted(data: PersistedTaskData) -> Self {
        Self {
            id: data.id,
            server_id: data.server_id,
            owner_id: data.owner_id,
            title: data.title,
            description: data.description,
            color: data.color,
            start_date: data.start_date,
            status: data.status,
            budget: data.budget,
            created_at: data.created_at,
        }
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> &TaskId {
        &self.id
    }

    /// Returns the server-assigned `_id`, if any.
    #[must_use]
    pub const fn server_id(&self) -> Option<&TaskId> {
        self.server_id.as_ref()
    }

    /// Returns the identifier used to address this task on the server.
    #[must_use]
    pub fn remote_key(&self) -> &TaskId {
        self.server_id.as_ref().unwrap_or(&self.id)
    }

    /// Returns `true` when either identifier equals `key`.
    #[must_use]
    pub fn answers_to(&self, key: &TaskId) -> bool {
        &self.id == key || self.server_id.as_ref() == Some(key)
    }

    /// Returns the owning user, if known.
    #[must_use]
    pub const fn owner_id(&self) -> Option<&OwnerId> {
        self.owner_id.as_ref()
    }

    /// Returns the title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the description, if any.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Returns the accent color.
    #[must_use]
    pub fn color(&self) -> &str {
        &self.color
    }

    /// Returns the start date.
    #[must_use]
    pub const fn start_date(&self) -> NaiveDate {
        self.start_date
    }

    /// Returns the status.
    #[must_use]
    pub const fn status(&self) -> TaskStatus {
        self.status
    }

    /// Returns the budget.
    #[must_use]
    pub const fn budget(&self) -> Budget {
        self.budget
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns a copy of this task carrying the edited fields.
    ///
    /// Identifiers, owner and creation time are kept.
    #[must_use]
    pub fn with_fields(&self, fields: TaskFields) -> Self {
        Self {
            title: fields.title,
            description: fields.description,
            color: fields.color,
            start_date: fields.start_date,
            status: fields.status,
            budget: fields.budget,
            ..self.clone()
        }
    }

    /// Records identifiers returned by the server after creation.
    ///
    /// Absent values leave the current identifiers untouched.
    pub fn adopt_remote_ids(&mut self, id: Option<TaskId>, server_id: Option<TaskId>) {
        if let Some(remote_id) = id {
            self.id = remote_id;
        }
        if let Some(remote_server_id) = server_id {
            self.server_id = Some(remote_server_id);
        }
    }
}
