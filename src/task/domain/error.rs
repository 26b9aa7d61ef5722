//! Error types for task domain validation and parsing.

use thiserror::Error;

/// Errors returned while constructing domain task values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TaskDomainError {
    /// The task identifier is empty after trimming.
    #[error("task identifier must not be empty")]
    EmptyTaskId,

    /// The owner identifier is empty after trimming.
    #[error("owner identifier must not be empty")]
    EmptyOwnerId,

    /// The budget is negative or not a finite number.
    #[error("invalid budget {0}, expected a finite non-negative amount")]
    InvalidBudget(String),

    /// A persisted record lacks a field every task must carry.
    #[error("task record is missing required field `{0}`")]
    MissingField(&'static str),

    /// A persisted record carries an unparseable start date.
    #[error("invalid start date '{0}', expected YYYY-MM-DD or an RFC 3339 timestamp")]
    InvalidStartDate(String),

    /// A persisted record carries an unknown status.
    #[error(transparent)]
    InvalidStatus(#[from] ParseTaskStatusError),
}

/// Error returned while parsing task statuses.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown task status: {0}")]
pub struct ParseTaskStatusError(pub String);
