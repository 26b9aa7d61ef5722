//! Task board: the local task list reconciled with the remote resource.
//!
//! The board owns the task collection, the edit cursor, the form and the
//! presentation flags. Every mutation of the collection except the full
//! replacement done by [`TaskBoard::load_all`] happens only after the gateway
//! confirms the matching remote operation. Mutating operations take
//! `&mut self`, so at most one operation is in flight per board.

use chrono::NaiveDate;
use futures::future::join_all;
use mockable::Clock;
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, info, instrument, warn};

use crate::config::BoardConfig;
use crate::task::{
    domain::{Task, TaskFactory, TaskFields},
    ports::{GatewayError, GatewayOperation, GatewayResult, ListQuery, TaskGateway, TaskPayload},
    validation::{FieldErrors, TaskForm},
    view::BoardView,
};

use super::{EditCursor, Notice};

/// Service-level errors for board operations.
#[derive(Debug, Error)]
pub enum BoardError {
    /// The form failed validation; no request was sent.
    #[error("invalid form input: {0}")]
    Validation(FieldErrors),

    /// No task exists at the given position.
    #[error("no task at position {0}")]
    NoSuchTask(usize),

    /// The remote resource did not confirm the operation.
    #[error("{operation} request failed: {source}")]
    Remote {
        /// Operation that failed.
        operation: GatewayOperation,
        /// Underlying gateway error.
        #[source]
        source: GatewayError,
    },

    /// Some deletions of a bulk removal failed; the board was reloaded.
    #[error("{failed} of {total} deletions failed; board resynchronized from server")]
    PartialBatch {
        /// Number of failed deletions.
        failed: usize,
        /// Number of attempted deletions.
        total: usize,
    },
}

/// Result type for board operations.
pub type BoardResult<T> = Result<T, BoardError>;

/// Whether the board reflects the server.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SyncMode {
    /// The last listing succeeded.
    #[default]
    Online,
    /// The last listing failed; the board is empty until the next success.
    Degraded,
}

/// Result of [`TaskBoard::save`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveOutcome {
    /// A new task was appended at the given position.
    Created(usize),
    /// The task at the given position was updated.
    Updated(usize),
}

/// Task board orchestration service.
pub struct TaskBoard<G, C>
where
    G: TaskGateway,
    C: Clock + Send + Sync,
{
    gateway: Arc<G>,
    clock: Arc<C>,
    factory: TaskFactory,
    filter_by_owner: bool,
    request_timeout: Duration,
    tasks: Vec<Task>,
    cursor: EditCursor,
    form: TaskForm,
    hide_completed: bool,
    sync_mode: SyncMode,
    notice: Option<Notice>,
}

impl<G, C> TaskBoard<G, C>
where
    G: TaskGateway,
    C: Clock + Send + Sync,
{
    /// Creates an empty board; call [`TaskBoard::load_all`] to populate it.
    #[must_use]
    pub fn new(gateway: Arc<G>, clock: Arc<C>, config: &BoardConfig) -> Self {
        Self {
            gateway,
            clock,
            factory: TaskFactory::new(config.owner_id().clone()),
            filter_by_owner: config.filter_by_owner(),
            request_timeout: config.request_timeout(),
            tasks: Vec::new(),
            cursor: EditCursor::IDLE,
            form: TaskForm::new(config.default_color()),
            hide_completed: config.hide_completed(),
            sync_mode: SyncMode::Online,
            notice: None,
        }
    }

    /// Returns the task collection in display order.
    #[must_use]
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Returns the task at `index`, if any.
    #[must_use]
    pub fn task(&self, index: usize) -> Option<&Task> {
        self.tasks.get(index)
    }

    /// Returns the edit cursor.
    #[must_use]
    pub const fn cursor(&self) -> EditCursor {
        self.cursor
    }

    /// Returns the task loaded into the form, if any.
    #[must_use]
    pub fn editing_task(&self) -> Option<&Task> {
        self.cursor.index().and_then(|index| self.tasks.get(index))
    }

    /// Returns the form.
    #[must_use]
    pub const fn form(&self) -> &TaskForm {
        &self.form
    }

    /// Returns the form for input by the presentation layer.
    pub const fn form_mut(&mut self) -> &mut TaskForm {
        &mut self.form
    }

    /// Returns whether completed tasks are hidden from the view.
    #[must_use]
    pub const fn hide_completed(&self) -> bool {
        self.hide_completed
    }

    /// Returns whether the board reflects the server.
    #[must_use]
    pub const fn sync_mode(&self) -> SyncMode {
        self.sync_mode
    }

    /// Returns the outcome message of the latest operation, if any.
    #[must_use]
    pub const fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    /// Removes and returns the current notice.
    pub const fn take_notice(&mut self) -> Option<Notice> {
        self.notice.take()
    }

    /// Projects the current state for display.
    #[must_use]
    pub fn view(&self) -> BoardView {
        BoardView::project(&self.tasks, self.hide_completed, self.cursor)
    }

    fn today(&self) -> NaiveDate {
        self.clock.local().date_naive()
    }

    fn notify(&mut self, notice: Notice) {
        debug!(notice = %notice, "board notice");
        self.notice = Some(notice);
    }

    /// Runs a gateway call under the request timeout.
    async fn remote<T>(
        &self,
        operation: GatewayOperation,
        call: impl Future<Output = GatewayResult<T>>,
    ) -> BoardResult<T> {
        tokio::time::timeout(self.request_timeout, call)
            .await
            .unwrap_or_else(|_| Err(GatewayError::Timeout(self.request_timeout)))
            .map_err(|source| BoardError::Remote { operation, source })
    }

    fn list_query(&self) -> ListQuery {
        if self.filter_by_owner {
            ListQuery::for_owner(self.factory.owner_id().clone())
        } else {
            ListQuery::all()
        }
    }

    fn materialize(&self, records: Vec<TaskPayload>) -> Vec<Task> {
        let owner = self.factory.owner_id();
        records
            .into_iter()
            .filter_map(|record| match record.into_task(&*self.clock) {
                Ok(task) => Some(task),
                Err(err) => {
                    warn!(error = %err, "skipping malformed task record");
                    None
                }
            })
            .filter(|task| !self.filter_by_owner || task.owner_id() == Some(owner))
            .collect()
    }

    fn stop_editing(&mut self) {
        self.cursor = EditCursor::IDLE;
        self.form.reset();
    }

    /// Replaces the collection with the server's task list.
    ///
    /// When the owner filter is enabled only the owner's tasks are requested
    /// and kept. A cursor whose task is still present keeps pointing at it;
    /// otherwise editing stops. On failure the collection becomes empty and
    /// the board enters [`SyncMode::Degraded`].
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::Remote`] when the listing fails.
    #[instrument(skip(self))]
    pub async fn load_all(&mut self) -> BoardResult<usize> {
        let query = self.list_query();
        let editing_key = self.editing_task().map(|task| task.remote_key().clone());
        let listing = self
            .remote(GatewayOperation::List, self.gateway.list(&query))
            .await;

        match listing {
            Ok(records) => {
                self.tasks = self.materialize(records);
                let relocated = editing_key.and_then(|key| {
                    self.tasks
                        .iter()
                        .position(|task| task.answers_to(&key))
                });
                match relocated {
                    Some(index) => self.cursor = EditCursor::at(index),
                    None if !self.cursor.is_idle() => self.stop_editing(),
                    None => {}
                }
                self.sync_mode = SyncMode::Online;
                let count = self.tasks.len();
                info!(count, "tasks loaded from server");
                self.notify(Notice::success(format!("{count} tasks loaded from server")));
                Ok(count)
            }
            Err(err) => {
                warn!(error = %err, "task listing failed, continuing in degraded mode");
                self.tasks.clear();
                if !self.cursor.is_idle() {
                    self.stop_editing();
                }
                self.sync_mode = SyncMode::Degraded;
                self.notify(Notice::error(
                    "Failed to load tasks from server. Working in offline mode.",
                ));
                Err(err)
            }
        }
    }

    /// Reloads the collection from the server.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::Remote`] when the listing fails.
    pub async fn refresh(&mut self) -> BoardResult<usize> {
        self.load_all().await
    }

    /// Loads the task at `index` into the form and points the cursor at it.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::NoSuchTask`] when `index` is out of range.
    pub fn begin_edit(&mut self, index: usize) -> BoardResult<()> {
        let task = self.tasks.get(index).ok_or(BoardError::NoSuchTask(index))?;
        self.form.load_task(task);
        self.cursor = EditCursor::at(index);
        self.notify(Notice::success("Task loaded for editing"));
        Ok(())
    }

    /// Empties the form and stops editing.
    pub fn clear_form(&mut self) {
        self.stop_editing();
    }

    /// Flips the hide-completed flag and returns its new value.
    ///
    /// The collection itself is untouched.
    pub const fn toggle_completed_filter(&mut self) -> bool {
        self.hide_completed = !self.hide_completed;
        self.hide_completed
    }

    /// Validates the form, then creates or updates a task depending on the
    /// cursor.
    ///
    /// Invalid input sends no request.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::Validation`] with the field markers when the form
    /// is invalid, or the error of [`TaskBoard::submit_new`] or
    /// [`TaskBoard::submit_edit`].
    pub async fn save(&mut self) -> BoardResult<SaveOutcome> {
        let today = self.today();
        let fields = self
            .form
            .validated_fields(today)
            .map_err(BoardError::Validation)?;
        match self.cursor.index() {
            None => self.submit_new(fields).await.map(SaveOutcome::Created),
            Some(index) => self
                .submit_edit(index, fields)
                .await
                .map(|()| SaveOutcome::Updated(index)),
        }
    }

    /// Creates a task from validated fields and appends it once the server
    /// confirms.
    ///
    /// Identifiers returned by the server are merged onto the task. On
    /// success the form is reset; on failure nothing is added and the task is
    /// discarded.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::Remote`] when the server does not confirm.
    #[instrument(skip(self, fields))]
    pub async fn submit_new(&mut self, fields: TaskFields) -> BoardResult<usize> {
        let mut task = self.factory.create(fields, &*self.clock);
        let created = self
            .remote(GatewayOperation::Create, self.gateway.create(&task))
            .await;

        match created {
            Ok(ids) => {
                task.adopt_remote_ids(ids.id, ids.server_id);
                let position = self.tasks.len();
                info!(task_id = %task.remote_key(), "task created");
                self.tasks.push(task);
                self.stop_editing();
                self.notify(Notice::success("Task created and saved to server!"));
                Ok(position)
            }
            Err(err) => {
                warn!(error = %err, "task creation was not confirmed");
                self.notify(Notice::error(
                    "Failed to save task to server. Please try again.",
                ));
                Err(err)
            }
        }
    }

    /// Applies validated fields to the task at `index` once the server
    /// confirms the full updated record.
    ///
    /// The local task keeps its pre-edit values until confirmation. On
    /// success the cursor is cleared and the form reset; on failure the
    /// cursor is kept so the edit can be retried.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::NoSuchTask`] when `index` is out of range, or
    /// [`BoardError::Remote`] when the server does not confirm.
    #[instrument(skip(self, fields))]
    pub async fn submit_edit(&mut self, index: usize, fields: TaskFields) -> BoardResult<()> {
        let candidate = self
            .tasks
            .get(index)
            .ok_or(BoardError::NoSuchTask(index))?
            .with_fields(fields);
        let updated = self
            .remote(GatewayOperation::Update, self.gateway.update(&candidate))
            .await;

        match updated {
            Ok(_) => {
                let slot = self
                    .tasks
                    .get_mut(index)
                    .ok_or(BoardError::NoSuchTask(index))?;
                *slot = candidate;
                self.stop_editing();
                info!(index, "task updated");
                self.notify(Notice::success("Task updated on server!"));
                Ok(())
            }
            Err(err) => {
                warn!(error = %err, "task update was not confirmed");
                self.notify(Notice::error(
                    "Failed to update task on server. Please try again.",
                ));
                Err(err)
            }
        }
    }

    /// Deletes the task at `index` and removes it once the server confirms.
    ///
    /// Removing a task before the edited one shifts the cursor so it keeps
    /// pointing at the same task; removing the edited task stops editing.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::NoSuchTask`] when `index` is out of range, or
    /// [`BoardError::Remote`] when the server does not confirm.
    #[instrument(skip(self))]
    pub async fn remove(&mut self, index: usize) -> BoardResult<Task> {
        let target = self.tasks.get(index).ok_or(BoardError::NoSuchTask(index))?;
        let deleted = self
            .remote(GatewayOperation::Delete, self.gateway.delete(target))
            .await;

        match deleted {
            Ok(()) => {
                let removed = self.tasks.remove(index);
                if self.cursor.points_at(index) {
                    self.form.reset();
                }
                self.cursor = self.cursor.after_removal(index);
                info!(task_id = %removed.remote_key(), "task deleted");
                self.notify(Notice::success("Task deleted from server!"));
                Ok(removed)
            }
            Err(err) => {
                warn!(error = %err, "task deletion was not confirmed");
                self.notify(Notice::error(
                    "Failed to delete task from server. Please try again.",
                ));
                Err(err)
            }
        }
    }

    /// Deletes every task concurrently and empties the collection only if
    /// all deletions are confirmed.
    ///
    /// If any deletion fails nothing is removed locally; the board is
    /// reloaded from the server instead, since some deletions may have
    /// succeeded.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::PartialBatch`] when at least one deletion failed.
    #[instrument(skip(self), fields(total = self.tasks.len()))]
    pub async fn remove_all(&mut self) -> BoardResult<usize> {
        let total = self.tasks.len();
        if total == 0 {
            return Ok(0);
        }

        let outcomes = join_all(
            self.tasks
                .iter()
                .map(|task| self.remote(GatewayOperation::Delete, self.gateway.delete(task))),
        )
        .await;
        let failures: Vec<BoardError> = outcomes.into_iter().filter_map(Result::err).collect();

        if failures.is_empty() {
            self.tasks.clear();
            self.stop_editing();
            info!(total, "all tasks deleted");
            self.notify(Notice::success("All tasks deleted from server!"));
            return Ok(total);
        }

        for failure in &failures {
            warn!(error = %failure, "bulk deletion left a task behind");
        }
        if let Err(err) = self.load_all().await {
            warn!(error = %err, "resynchronization after bulk deletion failed");
        }
        let failed = failures.len();
        self.notify(Notice::error(format!(
            "Failed to delete {failed} of {total} tasks. Task list reloaded from server."
        )));
        Err(BoardError::PartialBatch { failed, total })
    }
}
