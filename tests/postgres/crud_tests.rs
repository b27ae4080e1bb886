//! CRUD tests for `PostgresTaskRepository`.

use super::helpers::{insert, repository, ymd};
use rstest::rstest;
use taskboard::task::{
    adapters::postgres::PostgresTaskRepository,
    domain::{TaskDraft, TaskId, TaskPriority, TaskStatus},
    ports::{TaskRepository, TaskRepositoryError},
};

#[rstest]
#[tokio::test(flavor = "multi_thread")]
#[ignore = "needs a PostgreSQL database named by TASKBOARD_TEST_DATABASE_URL"]
async fn insert_and_find_round_trip(
    repository: Result<PostgresTaskRepository, eyre::Report>,
) -> Result<(), eyre::Report> {
    let repo = repository?;

    let created = insert(
        &repo,
        TaskDraft::new("Round trip")
            .with_description("stored in postgres")
            .with_priority(TaskPriority::High)
            .with_due_date(ymd(2030, 1, 2)?),
    )
    .await?;

    let found = repo.find_by_id(created.id()).await?;
    eyre::ensure!(found.as_ref() == Some(&created), "found {found:?}");
    eyre::ensure!(created.status() == TaskStatus::Todo);
    eyre::ensure!(repo.exists_by_id(created.id()).await?);
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
#[ignore = "needs a PostgreSQL database named by TASKBOARD_TEST_DATABASE_URL"]
async fn update_persists_status_and_cleared_fields(
    repository: Result<PostgresTaskRepository, eyre::Report>,
) -> Result<(), eyre::Report> {
    let repo = repository?;
    let mut task = insert(
        &repo,
        TaskDraft::new("Before")
            .with_description("to be cleared")
            .with_priority(TaskPriority::Low),
    )
    .await?;

    task.advance()?;
    task.replace_details(TaskDraft::new("After").with_due_date(ymd(2031, 3, 4)?));
    repo.update(&task).await?;

    let stored = repo
        .find_by_id(task.id())
        .await?
        .ok_or_else(|| eyre::eyre!("task vanished"))?;
    eyre::ensure!(stored == task, "stored {stored:?} differs from {task:?}");
    eyre::ensure!(stored.description().is_none());
    eyre::ensure!(stored.priority().is_none());
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
#[ignore = "needs a PostgreSQL database named by TASKBOARD_TEST_DATABASE_URL"]
async fn update_of_missing_row_reports_not_found(
    repository: Result<PostgresTaskRepository, eyre::Report>,
) -> Result<(), eyre::Report> {
    let repo = repository?;
    let task = insert(&repo, TaskDraft::new("Soon deleted")).await?;
    repo.delete_by_id(task.id()).await?;

    let result = repo.update(&task).await;
    eyre::ensure!(
        matches!(result, Err(TaskRepositoryError::NotFound(id)) if id == task.id()),
        "expected NotFound, got {result:?}"
    );
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
#[ignore = "needs a PostgreSQL database named by TASKBOARD_TEST_DATABASE_URL"]
async fn delete_removes_row_and_ignores_unknown_ids(
    repository: Result<PostgresTaskRepository, eyre::Report>,
) -> Result<(), eyre::Report> {
    let repo = repository?;
    let task = insert(&repo, TaskDraft::new("Delete me")).await?;

    repo.delete_by_id(task.id()).await?;
    repo.delete_by_id(TaskId::new()).await?;

    eyre::ensure!(repo.find_by_id(task.id()).await?.is_none());
    eyre::ensure!(!repo.exists_by_id(task.id()).await?);
    Ok(())
}
