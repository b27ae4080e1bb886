//! Then steps for task lifecycle BDD scenarios.

use super::world::{TaskLifecycleWorld, run_async};
use rstest_bdd_macros::then;
use taskboard::task::{
    domain::{Task, TaskDomainError, TaskDraft, TaskStatus},
    services::TaskLifecycleError,
};

fn parse_status(raw: &str) -> Result<TaskStatus, eyre::Report> {
    TaskStatus::try_from(raw).map_err(|err| eyre::eyre!("invalid status in scenario: {err}"))
}

#[then(r#"the task status is "{status}""#)]
fn task_status_is(world: &TaskLifecycleWorld, status: String) -> Result<(), eyre::Report> {
    let expected = parse_status(&status)?;
    let task = world.current()?;
    let stored = run_async(world.service.get(task.id()))?;

    if stored.status() != expected {
        return Err(eyre::eyre!(
            "expected status {expected}, found {}",
            stored.status()
        ));
    }
    Ok(())
}

#[then(r#"task "{title}" has status "{status}""#)]
fn named_task_status_is(
    world: &TaskLifecycleWorld,
    title: String,
    status: String,
) -> Result<(), eyre::Report> {
    let expected = parse_status(&status)?;
    let stored = run_async(world.service.get(world.titled(&title)?.id()))?;

    eyre::ensure!(
        stored.status() == expected,
        "expected {title} to be {expected}, found {}",
        stored.status()
    );
    Ok(())
}

#[then(r#"the task title is "{title}""#)]
fn task_title_is(world: &TaskLifecycleWorld, title: String) -> Result<(), eyre::Report> {
    let stored = run_async(world.service.get(world.current()?.id()))?;
    eyre::ensure!(
        stored.title() == title,
        "expected title {title:?}, found {:?}",
        stored.title()
    );
    Ok(())
}

#[then(r#"the "{status}" tasks are "{titles}""#)]
fn tasks_in_status_are(
    world: &TaskLifecycleWorld,
    status: String,
    titles: String,
) -> Result<(), eyre::Report> {
    let listed = run_async(world.service.list_by_status(parse_status(&status)?))?;
    let actual: Vec<&str> = listed.iter().map(Task::title).collect();
    let expected: Vec<&str> = titles.split(',').map(str::trim).collect();

    eyre::ensure!(
        actual == expected,
        "expected {status} tasks {expected:?}, found {actual:?}"
    );
    Ok(())
}

fn overdue_titles(world: &TaskLifecycleWorld) -> Result<Vec<String>, eyre::Report> {
    let report = run_async(world.service.overdue_report())?;
    Ok(report.iter().map(|task| task.title().to_owned()).collect())
}

#[then(r#"the overdue report includes "{title}""#)]
fn overdue_report_includes(world: &TaskLifecycleWorld, title: String) -> Result<(), eyre::Report> {
    let titles = overdue_titles(world)?;
    eyre::ensure!(
        titles.contains(&title),
        "expected {title} in overdue report {titles:?}"
    );
    Ok(())
}

#[then(r#"the overdue report excludes "{title}""#)]
fn overdue_report_excludes(world: &TaskLifecycleWorld, title: String) -> Result<(), eyre::Report> {
    let titles = overdue_titles(world)?;
    eyre::ensure!(
        !titles.contains(&title),
        "did not expect {title} in overdue report {titles:?}"
    );
    Ok(())
}

#[then("the advance fails with an invalid transition error")]
fn advance_fails_with_invalid_transition(world: &TaskLifecycleWorld) -> Result<(), eyre::Report> {
    let result = world
        .last_advance_result
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing advance result"))?;

    if !matches!(
        result,
        Err(TaskLifecycleError::Domain(
            TaskDomainError::InvalidTransition {
                from: TaskStatus::Done,
                ..
            }
        ))
    ) {
        return Err(eyre::eyre!(
            "expected InvalidTransition error, got {result:?}"
        ));
    }
    Ok(())
}

#[then("every operation on the task reports not found")]
fn every_operation_reports_not_found(world: &TaskLifecycleWorld) -> Result<(), eyre::Report> {
    let id = world.current()?.id();
    let service = &world.service;

    let outcomes = [
        ("get", run_async(service.get(id)).map(drop)),
        (
            "update",
            run_async(service.update(id, TaskDraft::new("Ghost"))).map(drop),
        ),
        ("advance", run_async(service.advance(id)).map(drop)),
        ("delete", run_async(service.delete(id))),
    ];

    for (operation, outcome) in outcomes {
        eyre::ensure!(
            outcome
                .as_ref()
                .is_err_and(TaskLifecycleError::is_not_found),
            "expected {operation} to report not found, got {outcome:?}"
        );
    }
    Ok(())
}
