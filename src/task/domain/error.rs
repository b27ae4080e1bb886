//! Error types for task domain rules and parsing.

use super::{TaskId, TaskStatus};
use thiserror::Error;

/// Errors raised when a task operation violates a domain rule.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TaskDomainError {
    /// The task is already in its terminal status and cannot advance.
    #[error("task {task_id} cannot advance from {from}")]
    InvalidTransition {
        /// Task that rejected the transition.
        task_id: TaskId,
        /// Status the task was in when the transition was attempted.
        from: TaskStatus,
    },
}

/// Error returned while parsing task statuses from text.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown task status: {0}")]
pub struct ParseTaskStatusError(pub String);

/// Error returned while parsing task priorities from text.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown task priority: {0}")]
pub struct ParseTaskPriorityError(pub String);
