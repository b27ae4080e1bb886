//! In-memory integration tests for task lifecycle operations.

use std::sync::Arc;

use chrono::Utc;
use mockable::DefaultClock;
use rstest::{fixture, rstest};
use taskboard::task::{
    adapters::memory::InMemoryTaskRepository,
    domain::{TaskDraft, TaskPriority, TaskStatus},
    services::{TaskLifecycleError, TaskLifecycleService},
};

type TestService = TaskLifecycleService<InMemoryTaskRepository, DefaultClock>;

#[fixture]
fn service() -> TestService {
    TaskLifecycleService::new(
        Arc::new(InMemoryTaskRepository::new()),
        Arc::new(DefaultClock),
    )
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn created_task_is_todo_and_dated_today(service: TestService) -> Result<(), eyre::Report> {
    let before = Utc::now().date_naive();
    let task = service
        .create(TaskDraft::new("Plan sprint").with_priority(TaskPriority::Medium))
        .await?;
    let after = Utc::now().date_naive();

    eyre::ensure!(task.status() == TaskStatus::Todo, "new task must be TODO");
    eyre::ensure!(
        (before..=after).contains(&task.created_on()),
        "creation date {} outside {before}..={after}",
        task.created_on()
    );
    eyre::ensure!(service.get(task.id()).await? == task, "stored task differs");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn full_lifecycle_from_todo_to_deleted(service: TestService) -> Result<(), eyre::Report> {
    let task = service.create(TaskDraft::new("Lifecycle")).await?;
    let id = task.id();

    eyre::ensure!(service.advance(id).await?.status() == TaskStatus::InProgress);
    let renamed = service
        .update(id, TaskDraft::new("Lifecycle, renamed"))
        .await?;
    eyre::ensure!(renamed.status() == TaskStatus::InProgress);
    eyre::ensure!(renamed.created_on() == task.created_on());
    eyre::ensure!(service.advance(id).await?.status() == TaskStatus::Done);

    let rejected = service.advance(id).await;
    eyre::ensure!(
        rejected
            .as_ref()
            .is_err_and(TaskLifecycleError::is_invalid_transition),
        "expected invalid transition, got {rejected:?}"
    );

    service.delete(id).await?;
    let missing = service.get(id).await;
    eyre::ensure!(
        missing.as_ref().is_err_and(TaskLifecycleError::is_not_found),
        "expected not found, got {missing:?}"
    );
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn services_sharing_a_repository_see_each_others_writes() -> Result<(), eyre::Report> {
    let repository = Arc::new(InMemoryTaskRepository::new());
    let writer = TaskLifecycleService::new(Arc::clone(&repository), Arc::new(DefaultClock));
    let reader = TaskLifecycleService::new(repository, Arc::new(DefaultClock));

    let task = writer.create(TaskDraft::new("Shared")).await?;
    writer.advance(task.id()).await?;

    let seen = reader.get(task.id()).await?;
    eyre::ensure!(seen.status() == TaskStatus::InProgress);
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn concurrent_creates_on_distinct_tasks_do_not_interfere(
    service: TestService,
) -> Result<(), eyre::Report> {
    let shared = Arc::new(service);
    let mut handles = Vec::new();
    for index in 0..16 {
        let worker = Arc::clone(&shared);
        handles.push(tokio::spawn(async move {
            let task = worker
                .create(TaskDraft::new(format!("worker {index}")))
                .await?;
            worker.advance(task.id()).await
        }));
    }

    for handle in handles {
        let advanced = handle.await??;
        eyre::ensure!(advanced.status() == TaskStatus::InProgress);
    }
    let in_progress = shared.list_by_status(TaskStatus::InProgress).await?;
    eyre::ensure!(in_progress.len() == 16, "found {}", in_progress.len());
    Ok(())
}
