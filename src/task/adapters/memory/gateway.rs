//! In-memory task resource for board tests.
//!
//! Behaves like a simple REST resource: created records receive a fresh `_id`,
//! updates and deletes are addressed by `_id` or `id`, and listing honours the
//! owner filter. Tests can script failures per operation, reject deletion of
//! specific records, stall operations indefinitely, or take the whole
//! resource offline.

use async_trait::async_trait;
use std::collections::{HashMap, HashSet};
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};
use uuid::Uuid;

use crate::task::{
    domain::{Task, TaskId},
    ports::{
        GatewayError, GatewayOperation, GatewayResult, ListQuery, RemoteIds, TaskGateway,
        TaskPayload,
    },
};

/// Thread-safe in-memory task resource.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTaskGateway {
    state: Arc<RwLock<InMemoryGatewayState>>,
}

#[derive(Debug, Default)]
struct InMemoryGatewayState {
    records: Vec<TaskPayload>,
    offline: bool,
    scripted_failures: HashMap<GatewayOperation, usize>,
    rejected_deletes: HashSet<TaskId>,
    stalled: HashSet<GatewayOperation>,
    calls: HashMap<GatewayOperation, usize>,
}

impl InMemoryGatewayState {
    fn position_of(&self, key: &TaskId) -> Option<usize> {
        self.records.iter().position(|record| {
            record.server_id.as_ref() == Some(key) || record.id.as_ref() == Some(key)
        })
    }
}

fn poisoned(err: impl std::fmt::Display) -> GatewayError {
    GatewayError::transport(std::io::Error::other(err.to_string()))
}

fn unavailable() -> GatewayError {
    GatewayError::Status {
        status: 503,
        body: "service unavailable".to_owned(),
    }
}

fn not_found(key: &TaskId) -> GatewayError {
    GatewayError::Status {
        status: 404,
        body: format!("task {key} not found"),
    }
}

impl InMemoryTaskGateway {
    /// Creates an empty, online resource.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> GatewayResult<RwLockReadGuard<'_, InMemoryGatewayState>> {
        self.state.read().map_err(poisoned)
    }

    fn write(&self) -> GatewayResult<RwLockWriteGuard<'_, InMemoryGatewayState>> {
        self.state.write().map_err(poisoned)
    }

    /// Stores a record as if another client had created it.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::Transport`] if the state lock is poisoned.
    pub fn insert(&self, record: TaskPayload) -> GatewayResult<()> {
        self.write()?.records.push(record);
        Ok(())
    }

    /// Returns a snapshot of the stored records.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::Transport`] if the state lock is poisoned.
    pub fn records(&self) -> GatewayResult<Vec<TaskPayload>> {
        Ok(self.read()?.records.clone())
    }

    /// Makes every operation fail with a transport error while `offline`.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::Transport`] if the state lock is poisoned.
    pub fn set_offline(&self, offline: bool) -> GatewayResult<()> {
        self.write()?.offline = offline;
        Ok(())
    }

    /// Makes the next `count` calls of `operation` fail with status 503.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::Transport`] if the state lock is poisoned.
    pub fn fail_next(&self, operation: GatewayOperation, count: usize) -> GatewayResult<()> {
        *self.write()?.scripted_failures.entry(operation).or_default() += count;
        Ok(())
    }

    /// Makes every deletion addressed to `key` fail with status 503.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::Transport`] if the state lock is poisoned.
    pub fn reject_delete(&self, key: TaskId) -> GatewayResult<()> {
        self.write()?.rejected_deletes.insert(key);
        Ok(())
    }

    /// Makes calls of `operation` never complete.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::Transport`] if the state lock is poisoned.
    pub fn stall(&self, operation: GatewayOperation) -> GatewayResult<()> {
        self.write()?.stalled.insert(operation);
        Ok(())
    }

    /// Returns how many times `operation` has been invoked.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::Transport`] if the state lock is poisoned.
    pub fn call_count(&self, operation: GatewayOperation) -> GatewayResult<usize> {
        Ok(self
            .read()?
            .calls
            .get(&operation)
            .copied()
            .unwrap_or_default())
    }

    /// Records the call and applies offline mode and scripted failures.
    async fn begin(&self, operation: GatewayOperation) -> GatewayResult<()> {
        let stalled = {
            let mut state = self.write()?;
            *state.calls.entry(operation).or_default() += 1;
            if state.offline {
                return Err(GatewayError::transport(std::io::Error::new(
                    std::io::ErrorKind::ConnectionRefused,
                    "task resource is offline",
                )));
            }
            if let Some(remaining) = state.scripted_failures.get_mut(&operation)
                && *remaining > 0
            {
                *remaining -= 1;
                return Err(unavailable());
            }
            state.stalled.contains(&operation)
        };
        if stalled {
            std::future::pending::<()>().await;
        }
        Ok(())
    }
}

#[async_trait]
impl TaskGateway for InMemoryTaskGateway {
    async fn list(&self, query: &ListQuery) -> GatewayResult<Vec<TaskPayload>> {
        self.begin(GatewayOperation::List).await?;
        let state = self.read()?;
        let records = state
            .records
            .iter()
            .filter(|record| {
                query
                    .owner()
                    .is_none_or(|owner| record.user_id.as_deref() == Some(owner.as_str()))
            })
            .cloned()
            .collect();
        Ok(records)
    }

    async fn create(&self, task: &Task) -> GatewayResult<RemoteIds> {
        self.begin(GatewayOperation::Create).await?;
        let server_id = TaskId::new(Uuid::new_v4().to_string())
            .map_err(|err| GatewayError::Decode(err.to_string()))?;
        let mut record = TaskPayload::from(task);
        record.server_id = Some(server_id.clone());
        let ids = RemoteIds {
            id: record.id.clone(),
            server_id: Some(server_id),
        };
        self.write()?.records.push(record);
        Ok(ids)
    }

    async fn update(&self, task: &Task) -> GatewayResult<TaskPayload> {
        self.begin(GatewayOperation::Update).await?;
        let key = task.remote_key();
        let mut state = self.write()?;
        let position = state.position_of(key).ok_or_else(|| not_found(key))?;
        let record = TaskPayload::from(task);
        let slot = state
            .records
            .get_mut(position)
            .ok_or_else(|| not_found(key))?;
        *slot = record.clone();
        Ok(record)
    }

    async fn delete(&self, task: &Task) -> GatewayResult<()> {
        self.begin(GatewayOperation::Delete).await?;
        let key = task.remote_key();
        let mut state = self.write()?;
        if state.rejected_deletes.contains(key) {
            return Err(unavailable());
        }
        let position = state.position_of(key).ok_or_else(|| not_found(key))?;
        state.records.remove(position);
        Ok(())
    }
}
