//! Diesel row models for task persistence.

use super::schema::tasks;
use chrono::NaiveDate;
use diesel::prelude::*;

/// Query result row for task records.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = tasks)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct TaskRow {
    /// Task identifier.
    pub id: uuid::Uuid,
    /// Task title.
    pub title: String,
    /// Optional description.
    pub description: Option<String>,
    /// Creation date.
    pub created_on: NaiveDate,
    /// Lifecycle status.
    pub status: String,
    /// Optional priority.
    pub priority: Option<String>,
    /// Optional due date.
    pub due_date: Option<NaiveDate>,
}

/// Insert model for task records. The identifier and sequence are generated
/// by the database.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = tasks)]
pub struct NewTaskRow {
    /// Task title.
    pub title: String,
    /// Optional description.
    pub description: Option<String>,
    /// Creation date.
    pub created_on: NaiveDate,
    /// Initial lifecycle status.
    pub status: String,
    /// Optional priority.
    pub priority: Option<String>,
    /// Optional due date.
    pub due_date: Option<NaiveDate>,
}

/// Changeset written on update. Creation date is deliberately absent.
#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = tasks)]
#[diesel(treat_none_as_null = true)]
pub struct TaskChangeset {
    /// Task title.
    pub title: String,
    /// Optional description; `None` clears the column.
    pub description: Option<String>,
    /// Lifecycle status.
    pub status: String,
    /// Optional priority; `None` clears the column.
    pub priority: Option<String>,
    /// Optional due date; `None` clears the column.
    pub due_date: Option<NaiveDate>,
}
