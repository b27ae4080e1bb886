//! `PostgreSQL` adapters for task lifecycle persistence.

mod models;
mod repository;
mod schema;

pub use repository::{CREATE_TASKS_SQL, PostgresTaskRepository, TaskPgPool, build_pool};
