//! Repository port for task persistence and predicate lookups.

use crate::task::domain::{NewTask, Task, TaskId, TaskPriority, TaskStatus};
use async_trait::async_trait;
use chrono::NaiveDate;
use std::sync::Arc;
use thiserror::Error;

/// Result type for task repository operations.
pub type TaskRepositoryResult<T> = Result<T, TaskRepositoryError>;

/// Task persistence contract.
///
/// Every backend (in-memory map, relational table) must answer each query
/// identically. Each call is a single atomic request; no call holds state
/// open across calls.
#[async_trait]
pub trait TaskRepository: Send + Sync {
    /// Stores a new task and returns it with its store-assigned identifier.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::Persistence`] when the backend fails.
    async fn insert(&self, task: NewTask) -> TaskRepositoryResult<Task>;

    /// Persists changes to an existing task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::NotFound`] when the task does not exist.
    async fn update(&self, task: &Task) -> TaskRepositoryResult<()>;

    /// Finds a task by identifier.
    ///
    /// Returns `None` when the task does not exist.
    async fn find_by_id(&self, id: TaskId) -> TaskRepositoryResult<Option<Task>>;

    /// Returns whether a task with the identifier exists.
    async fn exists_by_id(&self, id: TaskId) -> TaskRepositoryResult<bool>;

    /// Removes a task. Removing an absent task is a no-op.
    async fn delete_by_id(&self, id: TaskId) -> TaskRepositoryResult<()>;

    /// Returns all tasks with exactly `status`, ordered by ascending
    /// priority.
    ///
    /// Tasks without a priority come after all prioritised tasks. Ties keep
    /// insertion order.
    async fn find_by_status(&self, status: TaskStatus) -> TaskRepositoryResult<Vec<Task>>;

    /// Returns all tasks with exactly `priority`, in insertion order.
    async fn find_by_priority(&self, priority: TaskPriority) -> TaskRepositoryResult<Vec<Task>>;

    /// Returns all tasks due on `due_date`, in insertion order.
    async fn find_by_due_date(&self, due_date: NaiveDate) -> TaskRepositoryResult<Vec<Task>>;

    /// Returns tasks whose status differs from `excluded_status` and whose
    /// due date is strictly before `before`.
    ///
    /// Tasks without a due date never match.
    async fn find_overdue(
        &self,
        excluded_status: TaskStatus,
        before: NaiveDate,
    ) -> TaskRepositoryResult<Vec<Task>>;
}

/// Errors returned by task repository implementations.
#[derive(Debug, Clone, Error)]
pub enum TaskRepositoryError {
    /// The task was not found.
    #[error("task not found: {0}")]
    NotFound(TaskId),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl TaskRepositoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
