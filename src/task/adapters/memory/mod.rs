//! In-memory adapters for task lifecycle storage.

mod task;

pub use task::InMemoryTaskRepository;
