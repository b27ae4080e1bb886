//! Task endpoints.
//!
//! - `POST   /tasks`                     create
//! - `GET    /tasks/status/:status`      list by status, ascending priority
//! - `GET    /tasks/priority/:priority`  list by priority
//! - `GET    /tasks/due/:date`           list by due date
//! - `GET    /tasks/report`              overdue report
//! - `GET    /tasks/:id`                 fetch one
//! - `PUT    /tasks/:id`                 replace details
//! - `PUT    /tasks/:id/move`            advance status
//! - `DELETE /tasks/:id`                 delete

use super::{ApiError, SharedService};
use crate::task::{
    domain::{Task, TaskDraft, TaskId, TaskPriority, TaskStatus},
    ports::TaskRepository,
};
use axum::{
    Json, Router,
    extract::{
        Path, State,
        rejection::{JsonRejection, PathRejection},
    },
    http::StatusCode,
    routing::{get, post, put},
};
use chrono::NaiveDate;
use mockable::Clock;
use serde::Deserialize;
use uuid::Uuid;

/// Builds the task routes, to be nested under `/tasks`.
pub fn routes<R, C>() -> Router<SharedService<R, C>>
where
    R: TaskRepository + 'static,
    C: Clock + Send + Sync + 'static,
{
    Router::new()
        .route("/", post(create_task::<R, C>))
        .route("/report", get(overdue_report::<R, C>))
        .route("/status/:status", get(list_by_status::<R, C>))
        .route("/priority/:priority", get(list_by_priority::<R, C>))
        .route("/due/:date", get(list_due_on::<R, C>))
        .route(
            "/:id",
            get(get_task::<R, C>)
                .put(update_task::<R, C>)
                .delete(delete_task::<R, C>),
        )
        .route("/:id/move", put(advance_task::<R, C>))
}

// ─────────────────────────────────────────────────────────────────────────────
// Request types
// ─────────────────────────────────────────────────────────────────────────────

/// Body accepted by create and update.
///
/// Unknown fields, including `id`, `status` and `creationDate`, are ignored.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskPayload {
    /// Required, non-blank title.
    #[serde(default)]
    pub title: Option<String>,
    /// Optional description.
    #[serde(default)]
    pub description: Option<String>,
    /// Optional priority (`LOW`, `MEDIUM`, `HIGH`, any case).
    #[serde(default)]
    pub priority: Option<String>,
    /// Optional due date (`YYYY-MM-DD`).
    #[serde(default)]
    pub due_date: Option<String>,
}

impl TaskPayload {
    /// Validates the payload and converts it into a draft.
    ///
    /// # Errors
    ///
    /// Returns a `400 Bad Request` [`ApiError`] when the title is missing or
    /// blank, or when the priority or due date does not parse.
    pub fn into_draft(self) -> Result<TaskDraft, ApiError> {
        let Self {
            title,
            description,
            priority,
            due_date,
        } = self;
        let required_title = title
            .filter(|value| !value.trim().is_empty())
            .ok_or_else(|| ApiError::bad_request("title is required"))?;
        let parsed_priority = priority.as_deref().map(parse_priority).transpose()?;
        let parsed_due_date = due_date.as_deref().map(parse_date).transpose()?;
        Ok(TaskDraft::new(required_title).with_optional_fields(
            description,
            parsed_priority,
            parsed_due_date,
        ))
    }
}

fn parse_status(raw: &str) -> Result<TaskStatus, ApiError> {
    TaskStatus::try_from(raw).map_err(|err| ApiError::bad_request(err.to_string()))
}

fn parse_priority(raw: &str) -> Result<TaskPriority, ApiError> {
    TaskPriority::try_from(raw).map_err(|err| ApiError::bad_request(err.to_string()))
}

fn parse_date(raw: &str) -> Result<NaiveDate, ApiError> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .map_err(|err| ApiError::bad_request(format!("invalid date '{raw}': {err}")))
}

// ─────────────────────────────────────────────────────────────────────────────
// Handlers
// ─────────────────────────────────────────────────────────────────────────────

/// POST /tasks - Create a task in `TODO`.
pub async fn create_task<R, C>(
    State(service): State<SharedService<R, C>>,
    body: Result<Json<TaskPayload>, JsonRejection>,
) -> Result<(StatusCode, Json<Task>), ApiError>
where
    R: TaskRepository + 'static,
    C: Clock + Send + Sync + 'static,
{
    let Json(payload) = body?;
    let draft = payload.into_draft()?;
    let task = service.create(draft).await?;
    Ok((StatusCode::CREATED, Json(task)))
}

/// GET /tasks/status/:status - List tasks in a status.
pub async fn list_by_status<R, C>(
    State(service): State<SharedService<R, C>>,
    Path(raw_status): Path<String>,
) -> Result<Json<Vec<Task>>, ApiError>
where
    R: TaskRepository + 'static,
    C: Clock + Send + Sync + 'static,
{
    let status = parse_status(&raw_status)?;
    Ok(Json(service.list_by_status(status).await?))
}

/// GET /tasks/priority/:priority - List tasks with a priority.
pub async fn list_by_priority<R, C>(
    State(service): State<SharedService<R, C>>,
    Path(raw_priority): Path<String>,
) -> Result<Json<Vec<Task>>, ApiError>
where
    R: TaskRepository + 'static,
    C: Clock + Send + Sync + 'static,
{
    let priority = parse_priority(&raw_priority)?;
    Ok(Json(service.list_by_priority(priority).await?))
}

/// GET /tasks/due/:date - List tasks due on a date.
pub async fn list_due_on<R, C>(
    State(service): State<SharedService<R, C>>,
    Path(date): Path<String>,
) -> Result<Json<Vec<Task>>, ApiError>
where
    R: TaskRepository + 'static,
    C: Clock + Send + Sync + 'static,
{
    let due_date = parse_date(&date)?;
    Ok(Json(service.list_due_on(due_date).await?))
}

/// GET /tasks/report - Unfinished tasks past their due date.
pub async fn overdue_report<R, C>(
    State(service): State<SharedService<R, C>>,
) -> Result<Json<Vec<Task>>, ApiError>
where
    R: TaskRepository + 'static,
    C: Clock + Send + Sync + 'static,
{
    Ok(Json(service.overdue_report().await?))
}

/// GET /tasks/:id - Fetch a task.
pub async fn get_task<R, C>(
    State(service): State<SharedService<R, C>>,
    path: Result<Path<Uuid>, PathRejection>,
) -> Result<Json<Task>, ApiError>
where
    R: TaskRepository + 'static,
    C: Clock + Send + Sync + 'static,
{
    let Path(id) = path?;
    Ok(Json(service.get(TaskId::from_uuid(id)).await?))
}

/// PUT /tasks/:id - Replace a task's details.
pub async fn update_task<R, C>(
    State(service): State<SharedService<R, C>>,
    path: Result<Path<Uuid>, PathRejection>,
    body: Result<Json<TaskPayload>, JsonRejection>,
) -> Result<Json<Task>, ApiError>
where
    R: TaskRepository + 'static,
    C: Clock + Send + Sync + 'static,
{
    let Path(id) = path?;
    let Json(payload) = body?;
    let draft = payload.into_draft()?;
    Ok(Json(service.update(TaskId::from_uuid(id), draft).await?))
}

/// PUT /tasks/:id/move - Advance a task to its next status.
pub async fn advance_task<R, C>(
    State(service): State<SharedService<R, C>>,
    path: Result<Path<Uuid>, PathRejection>,
) -> Result<Json<Task>, ApiError>
where
    R: TaskRepository + 'static,
    C: Clock + Send + Sync + 'static,
{
    let Path(id) = path?;
    service
        .advance(TaskId::from_uuid(id))
        .await
        .map(Json)
        .map_err(ApiError::from_advance)
}

/// DELETE /tasks/:id - Delete a task.
pub async fn delete_task<R, C>(
    State(service): State<SharedService<R, C>>,
    path: Result<Path<Uuid>, PathRejection>,
) -> Result<StatusCode, ApiError>
where
    R: TaskRepository + 'static,
    C: Clock + Send + Sync + 'static,
{
    let Path(id) = path?;
    service.delete(TaskId::from_uuid(id)).await?;
    Ok(StatusCode::NO_CONTENT)
}
