//! Service layer for task creation, advancement, updates, and reporting.

use crate::task::{
    domain::{NewTask, Task, TaskDomainError, TaskDraft, TaskId, TaskPriority, TaskStatus},
    ports::{TaskRepository, TaskRepositoryError},
};
use chrono::NaiveDate;
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Service-level errors for task lifecycle operations.
#[derive(Debug, Error)]
pub enum TaskLifecycleError {
    /// No task exists with the identifier.
    #[error("task not found: {0}")]
    NotFound(TaskId),
    /// A domain rule rejected the operation.
    #[error(transparent)]
    Domain(#[from] TaskDomainError),
    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] TaskRepositoryError),
}

impl TaskLifecycleError {
    /// Returns whether the error reports a missing task.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::NotFound(_) | Self::Repository(TaskRepositoryError::NotFound(_))
        )
    }

    /// Returns whether the error reports a rejected status transition.
    #[must_use]
    pub const fn is_invalid_transition(&self) -> bool {
        matches!(
            self,
            Self::Domain(TaskDomainError::InvalidTransition { .. })
        )
    }
}

/// Result type for task lifecycle service operations.
pub type TaskLifecycleResult<T> = Result<T, TaskLifecycleError>;

/// Task lifecycle orchestration service.
///
/// Stateless over the injected repository: each call is an independent unit
/// of work. Read-modify-write operations on the same task (`advance`,
/// `update`) are not serialised, so concurrent callers race and the last
/// write wins.
#[derive(Clone)]
pub struct TaskLifecycleService<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    repository: Arc<R>,
    clock: Arc<C>,
}

impl<R, C> TaskLifecycleService<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    /// Creates a new task lifecycle service.
    #[must_use]
    pub const fn new(repository: Arc<R>, clock: Arc<C>) -> Self {
        Self { repository, clock }
    }

    /// Today's date according to the injected clock (UTC).
    fn today(&self) -> NaiveDate {
        self.clock.utc().date_naive()
    }

    /// Creates a task in [`TaskStatus::Todo`] dated today.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::Repository`] when the repository rejects
    /// persistence.
    pub async fn create(&self, draft: TaskDraft) -> TaskLifecycleResult<Task> {
        let new_task = NewTask::from_draft(draft, &*self.clock);
        let task = self.repository.insert(new_task).await?;
        info!(task_id = %task.id(), title = task.title(), "created task");
        Ok(task)
    }

    /// Retrieves a task by identifier.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::NotFound`] when no task has the
    /// identifier, or [`TaskLifecycleError::Repository`] when lookup fails.
    pub async fn get(&self, id: TaskId) -> TaskLifecycleResult<Task> {
        self.load(id).await
    }

    /// Lists tasks in `status`, ordered by ascending priority.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::Repository`] when the query fails.
    pub async fn list_by_status(&self, status: TaskStatus) -> TaskLifecycleResult<Vec<Task>> {
        let tasks = self.repository.find_by_status(status).await?;
        debug!(%status, count = tasks.len(), "listed tasks by status");
        Ok(tasks)
    }

    /// Lists tasks with exactly `priority`.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::Repository`] when the query fails.
    pub async fn list_by_priority(
        &self,
        priority: TaskPriority,
    ) -> TaskLifecycleResult<Vec<Task>> {
        let tasks = self.repository.find_by_priority(priority).await?;
        debug!(%priority, count = tasks.len(), "listed tasks by priority");
        Ok(tasks)
    }

    /// Lists tasks due on `due_date`.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::Repository`] when the query fails.
    pub async fn list_due_on(&self, due_date: NaiveDate) -> TaskLifecycleResult<Vec<Task>> {
        let tasks = self.repository.find_by_due_date(due_date).await?;
        debug!(%due_date, count = tasks.len(), "listed tasks by due date");
        Ok(tasks)
    }

    /// Moves a task one step along `TODO → IN_PROGRESS → DONE`.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::NotFound`] when the task does not exist,
    /// [`TaskLifecycleError::Domain`] with
    /// [`TaskDomainError::InvalidTransition`] when it is already done, or
    /// [`TaskLifecycleError::Repository`] when persistence fails.
    pub async fn advance(&self, id: TaskId) -> TaskLifecycleResult<Task> {
        let mut task = self.load(id).await?;
        let from = task.status();
        let to = task.advance().inspect_err(|_| {
            warn!(task_id = %id, %from, "rejected advance from terminal status");
        })?;
        self.repository.update(&task).await?;
        info!(task_id = %id, %from, %to, "advanced task");
        Ok(task)
    }

    /// Replaces title, description, priority, and due date.
    ///
    /// Every field is overwritten with the value in `changes`, including
    /// unset ones. Status and creation date are preserved.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::NotFound`] when the task does not exist,
    /// or [`TaskLifecycleError::Repository`] when persistence fails.
    pub async fn update(&self, id: TaskId, changes: TaskDraft) -> TaskLifecycleResult<Task> {
        let mut task = self.load(id).await?;
        task.replace_details(changes);
        self.repository.update(&task).await?;
        info!(task_id = %id, "updated task");
        Ok(task)
    }

    /// Permanently removes a task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::NotFound`] when the task does not exist,
    /// or [`TaskLifecycleError::Repository`] when persistence fails.
    pub async fn delete(&self, id: TaskId) -> TaskLifecycleResult<()> {
        if !self.repository.exists_by_id(id).await? {
            return Err(TaskLifecycleError::NotFound(id));
        }
        self.repository.delete_by_id(id).await?;
        info!(task_id = %id, "deleted task");
        Ok(())
    }

    /// Reports unfinished tasks whose due date is before today.
    ///
    /// Evaluated against the clock at call time.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::Repository`] when the query fails.
    pub async fn overdue_report(&self) -> TaskLifecycleResult<Vec<Task>> {
        let today = self.today();
        let tasks = self
            .repository
            .find_overdue(TaskStatus::Done, today)
            .await?;
        debug!(%today, count = tasks.len(), "generated overdue report");
        Ok(tasks)
    }

    async fn load(&self, id: TaskId) -> TaskLifecycleResult<Task> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(TaskLifecycleError::NotFound(id))
    }
}
