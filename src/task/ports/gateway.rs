//! Gateway port for the remote task resource.

use crate::task::domain::{OwnerId, Task};
use async_trait::async_trait;
use std::fmt;
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;

use super::{RemoteIds, TaskPayload};

/// Result type for gateway operations.
pub type GatewayResult<T> = Result<T, GatewayError>;

/// Remote task resource contract.
///
/// Implementations only report what the server said. They never touch the
/// board's local task list; the board mutates it after a call succeeds.
#[async_trait]
pub trait TaskGateway: Send + Sync {
    /// Fetches every task record matching `query`.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError`] when the resource cannot be read.
    async fn list(&self, query: &ListQuery) -> GatewayResult<Vec<TaskPayload>>;

    /// Submits a new task.
    ///
    /// Returns the identifiers the server assigned, which may be empty.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError`] when the server does not accept the task.
    async fn create(&self, task: &Task) -> GatewayResult<RemoteIds>;

    /// Replaces the stored record addressed by [`Task::remote_key`].
    ///
    /// Returns the record as echoed by the server.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError`] when the server does not accept the update.
    async fn update(&self, task: &Task) -> GatewayResult<TaskPayload>;

    /// Removes the stored record addressed by [`Task::remote_key`].
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError`] when the server does not confirm removal.
    async fn delete(&self, task: &Task) -> GatewayResult<()>;
}

/// Filter applied when listing tasks.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListQuery {
    owner: Option<OwnerId>,
}

impl ListQuery {
    /// Lists every task on the resource.
    #[must_use]
    pub const fn all() -> Self {
        Self { owner: None }
    }

    /// Lists only tasks owned by `owner`.
    #[must_use]
    pub const fn for_owner(owner: OwnerId) -> Self {
        Self { owner: Some(owner) }
    }

    /// Returns the owner filter, if any.
    #[must_use]
    pub const fn owner(&self) -> Option<&OwnerId> {
        self.owner.as_ref()
    }
}

/// Remote operation kinds, used in errors and logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GatewayOperation {
    /// Fetch all tasks.
    List,
    /// Create a task.
    Create,
    /// Update a task.
    Update,
    /// Delete a task.
    Delete,
}

impl GatewayOperation {
    /// Returns the operation name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::List => "list",
            Self::Create => "create",
            Self::Update => "update",
            Self::Delete => "delete",
        }
    }
}

impl fmt::Display for GatewayOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors returned by gateway implementations.
#[derive(Debug, Clone, Error)]
pub enum GatewayError {
    /// The request could not be delivered or the response not read.
    #[error("transport error: {0}")]
    Transport(Arc<dyn std::error::Error + Send + Sync>),

    /// The server answered with a non-success status.
    #[error("server returned status {status}: {body}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Response body, possibly empty.
        body: String,
    },

    /// The response body could not be decoded.
    #[error("failed to decode response: {0}")]
    Decode(String),

    /// No answer arrived within the configured limit.
    #[error("request timed out after {0:?}")]
    Timeout(Duration),

    /// The configured endpoint cannot address task records.
    #[error("invalid endpoint: {0}")]
    InvalidEndpoint(String),
}

impl GatewayError {
    /// Wraps a transport error.
    pub fn transport(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Transport(Arc::new(err))
    }
}
