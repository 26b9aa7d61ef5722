//! Construction of new task records.

use super::{OwnerId, Task, TaskFields};
use mockable::Clock;

/// Builds new tasks on behalf of a single configured owner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskFactory {
    owner_id: OwnerId,
}

impl TaskFactory {
    /// Creates a factory for `owner_id`.
    #[must_use]
    pub const fn new(owner_id: OwnerId) -> Self {
        Self { owner_id }
    }

    /// Returns the owner stamped onto every created task.
    #[must_use]
    pub const fn owner_id(&self) -> &OwnerId {
        &self.owner_id
    }

    /// Creates a task with a fresh client identifier and creation timestamp.
    #[must_use]
    pub fn create(&self, fields: TaskFields, clock: &impl Clock) -> Task {
        Task::new(self.owner_id.clone(), fields, clock)
    }
}
