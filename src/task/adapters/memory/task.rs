//! In-memory task repository for tests and database-free deployments.

use async_trait::async_trait;
use chrono::NaiveDate;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::task::{
    domain::{NewTask, Task, TaskId, TaskPriority, TaskStatus},
    ports::{TaskRepository, TaskRepositoryError, TaskRepositoryResult},
};

/// Thread-safe in-memory task repository.
///
/// Cloning shares the underlying storage.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTaskRepository {
    state: Arc<RwLock<InMemoryTaskState>>,
}

#[derive(Debug, Default)]
struct InMemoryTaskState {
    tasks: HashMap<TaskId, StoredTask>,
    next_sequence: u64,
}

/// A stored task tagged with its insertion sequence.
#[derive(Debug, Clone)]
struct StoredTask {
    sequence: u64,
    task: Task,
}

impl InMemoryTaskRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn read_state(
        &self,
    ) -> TaskRepositoryResult<std::sync::RwLockReadGuard<'_, InMemoryTaskState>> {
        self.state.read().map_err(|err| {
            TaskRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })
    }

    fn write_state(
        &self,
    ) -> TaskRepositoryResult<std::sync::RwLockWriteGuard<'_, InMemoryTaskState>> {
        self.state.write().map_err(|err| {
            TaskRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })
    }

    /// Collects matching tasks in insertion order.
    fn select(&self, predicate: impl Fn(&Task) -> bool) -> TaskRepositoryResult<Vec<Task>> {
        let state = self.read_state()?;
        let mut matches: Vec<&StoredTask> = state
            .tasks
            .values()
            .filter(|stored| predicate(&stored.task))
            .collect();
        matches.sort_by_key(|stored| stored.sequence);
        Ok(matches.into_iter().map(|stored| stored.task.clone()).collect())
    }
}

/// Sort key placing prioritised tasks first in ascending priority, then
/// unprioritised ones.
fn priority_sort_key(task: &Task) -> (bool, Option<TaskPriority>) {
    (task.priority().is_none(), task.priority())
}

#[async_trait]
impl TaskRepository for InMemoryTaskRepository {
    async fn insert(&self, task: NewTask) -> TaskRepositoryResult<Task> {
        let mut state = self.write_state()?;
        let mut id = TaskId::new();
        while state.tasks.contains_key(&id) {
            id = TaskId::new();
        }

        let stored = task.into_task(id);
        let sequence = state.next_sequence;
        state.next_sequence += 1;
        state.tasks.insert(
            id,
            StoredTask {
                sequence,
                task: stored.clone(),
            },
        );
        Ok(stored)
    }

    async fn update(&self, task: &Task) -> TaskRepositoryResult<()> {
        let mut state = self.write_state()?;
        let stored = state
            .tasks
            .get_mut(&task.id())
            .ok_or(TaskRepositoryError::NotFound(task.id()))?;
        stored.task = task.clone();
        Ok(())
    }

    async fn find_by_id(&self, id: TaskId) -> TaskRepositoryResult<Option<Task>> {
        let state = self.read_state()?;
        Ok(state.tasks.get(&id).map(|stored| stored.task.clone()))
    }

    async fn exists_by_id(&self, id: TaskId) -> TaskRepositoryResult<bool> {
        let state = self.read_state()?;
        Ok(state.tasks.contains_key(&id))
    }

    async fn delete_by_id(&self, id: TaskId) -> TaskRepositoryResult<()> {
        let mut state = self.write_state()?;
        state.tasks.remove(&id);
        Ok(())
    }

    async fn find_by_status(&self, status: TaskStatus) -> TaskRepositoryResult<Vec<Task>> {
        let mut tasks = self.select(|task| task.status() == status)?;
        // Stable sort keeps insertion order within equal priorities.
        tasks.sort_by_key(priority_sort_key);
        Ok(tasks)
    }

    async fn find_by_priority(&self, priority: TaskPriority) -> TaskRepositoryResult<Vec<Task>> {
        self.select(|task| task.priority() == Some(priority))
    }

    async fn find_by_due_date(&self, due_date: NaiveDate) -> TaskRepositoryResult<Vec<Task>> {
        self.select(|task| task.due_date() == Some(due_date))
    }

    async fn find_overdue(
        &self,
        excluded_status: TaskStatus,
        before: NaiveDate,
    ) -> TaskRepositoryResult<Vec<Task>> {
        self.select(|task| task.is_due_before_unless(excluded_status, before))
    }
}
