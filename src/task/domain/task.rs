//! Task aggregate root, its creation draft, and the unsaved form handed to
//! stores.

use super::{TaskDomainError, TaskId, TaskPriority, TaskStatus};
use chrono::NaiveDate;
use mockable::Clock;
use serde::Serialize;

/// Caller-supplied task fields used for both creation and full updates.
///
/// A draft carries only the mutable fields. Status and creation date are
/// never taken from caller input. Fields left unset are `None`, and an update
/// applies that `None` as-is.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TaskDraft {
    title: String,
    description: Option<String>,
    priority: Option<TaskPriority>,
    due_date: Option<NaiveDate>,
}

impl TaskDraft {
    /// Creates a draft with the required title.
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the priority.
    #[must_use]
    pub const fn with_priority(mut self, priority: TaskPriority) -> Self {
        self.priority = Some(priority);
        self
    }

    /// Sets the due date.
    #[must_use]
    pub const fn with_due_date(mut self, due_date: NaiveDate) -> Self {
        self.due_date = Some(due_date);
        self
    }

    /// Replaces the optional fields in one call.
    #[must_use]
    pub fn with_optional_fields(
        mut self,
        description: Option<String>,
        priority: Option<TaskPriority>,
        due_date: Option<NaiveDate>,
    ) -> Self {
        self.description = description;
        self.priority = priority;
        self.due_date = due_date;
        self
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

    /// Returns the priority, if any.
    #[must_use]
    pub const fn priority(&self) -> Option<TaskPriority> {
        self.priority
    }

    /// Returns the due date, if any.
    #[must_use]
    pub const fn due_date(&self) -> Option<NaiveDate> {
        self.due_date
    }
}

/// A task that has been built but not yet stored, so has no identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTask {
    title: String,
    description: Option<String>,
    created_on: NaiveDate,
    status: TaskStatus,
    priority: Option<TaskPriority>,
    due_date: Option<NaiveDate>,
}

impl NewTask {
    /// Builds an unsaved task from a draft.
    ///
    /// The status is always [`TaskStatus::Todo`] and the creation date is
    /// today's UTC date according to `clock`.
    #[must_use]
    pub fn from_draft(draft: TaskDraft, clock: &impl Clock) -> Self {
        let TaskDraft {
            title,
            description,
            priority,
            due_date,
        } = draft;

        Self {
            title,
            description,
            created_on: clock.utc().date_naive(),
            status: TaskStatus::Todo,
            priority,
            due_date,
        }
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

    /// Returns the creation date.
    #[must_use]
    pub const fn created_on(&self) -> NaiveDate {
        self.created_on
    }

    /// Returns the initial status.
    #[must_use]
    pub const fn status(&self) -> TaskStatus {
        self.status
    }

    /// Returns the priority, if any.
    #[must_use]
    pub const fn priority(&self) -> Option<TaskPriority> {
        self.priority
    }

    /// Returns the due date, if any.
    #[must_use]
    pub const fn due_date(&self) -> Option<NaiveDate> {
        self.due_date
    }

    /// Attaches a store-assigned identifier, producing a stored task.
    #[must_use]
    pub fn into_task(self, id: TaskId) -> Task {
        Task {
            id,
            title: self.title,
            description: self.description,
            created_on: self.created_on,
            status: self.status,
            priority: self.priority,
            due_date: self.due_date,
        }
    }
}

/// Task aggregate root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    id: TaskId,
    title: String,
    description: Option<String>,
    #[serde(rename = "creationDate")]
    created_on: NaiveDate,
    status: TaskStatus,
    priority: Option<TaskPriority>,
    due_date: Option<NaiveDate>,
}

/// Parameter object for reconstructing a persisted task aggregate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedTaskData {
    /// Persisted task identifier.
    pub id: TaskId,
    /// Persisted title.
    pub title: String,
    /// Persisted description.
    pub description: Option<String>,
    /// Persisted creation date.
    pub created_on: NaiveDate,
    /// Persisted lifecycle status.
    pub status: TaskStatus,
    /// Persisted priority.
    pub priority: Option<TaskPriority>,
    /// Persisted due date.
    pub due_date: Option<NaiveDate>,
}

impl Task {
    /// Reconstructs a task from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedTaskData) -> Self {
        Self {
            id: data.id,
            title: data.title,
            description: data.description,
            created_on: data.created_on,
            status: data.status,
            priority: data.priority,
            due_date: data.due_date,
        }
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
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

    /// Returns the creation date.
    #[must_use]
    pub const fn created_on(&self) -> NaiveDate {
        self.created_on
    }

    /// Returns the lifecycle status.
    #[must_use]
    pub const fn status(&self) -> TaskStatus {
        self.status
    }

    /// Returns the priority, if any.
    #[must_use]
    pub const fn priority(&self) -> Option<TaskPriority> {
        self.priority
    }

    /// Returns the due date, if any.
    #[must_use]
    pub const fn due_date(&self) -> Option<NaiveDate> {
        self.due_date
    }

    /// Moves the task one step forward through its lifecycle.
    ///
    /// Returns the new status.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::InvalidTransition`] when the task is already
    /// [`TaskStatus::Done`]. The task is left unchanged.
    pub fn advance(&mut self) -> Result<TaskStatus, TaskDomainError> {
        let next = self
            .status
            .next()
            .ok_or(TaskDomainError::InvalidTransition {
                task_id: self.id,
                from: self.status,
            })?;
        self.status = next;
        Ok(next)
    }

    /// Overwrites title, description, priority, and due date with the draft.
    ///
    /// Every field is replaced, including with `None`. Identifier, status, and
    /// creation date are untouched.
    pub fn replace_details(&mut self, draft: TaskDraft) {
        let TaskDraft {
            title,
            description,
            priority,
            due_date,
        } = draft;
        self.title = title;
        self.description = description;
        self.priority = priority;
        self.due_date = due_date;
    }

    /// Returns whether the task is unfinished and due strictly before `today`.
    #[must_use]
    pub fn is_overdue(&self, today: NaiveDate) -> bool {
        self.is_due_before_unless(TaskStatus::Done, today)
    }

    /// Returns whether the task is due strictly before `date` while in any
    /// status other than `excluded_status`. Undated tasks never match.
    #[must_use]
    pub fn is_due_before_unless(&self, excluded_status: TaskStatus, date: NaiveDate) -> bool {
        self.status != excluded_status && self.due_date.is_some_and(|due| due < date)
    }
}
