//! Domain model for task tracking.
//!
//! The task domain models task records, their identifiers and scalar value
//! types while keeping network and presentation concerns outside of the domain
//! boundary.

mod budget;
mod dates;
mod error;
mod factory;
mod ids;
mod status;
mod task;

pub use budget::Budget;
pub use dates::parse_calendar_date;
pub use error::{ParseTaskStatusError, TaskDomainError};
pub use factory::TaskFactory;
pub use ids::{OwnerId, TaskId};
pub use status::TaskStatus;
pub use task::{PersistedTaskData, Task, TaskFields};
