//! Domain model for task lifecycle management.
//!
//! The task domain models creation defaults, the forward-only status machine,
//! full-replacement updates, and the overdue rule while keeping all
//! infrastructure concerns outside of the domain boundary.

mod error;
mod ids;
mod priority;
mod status;
mod task;

pub use error::{ParseTaskPriorityError, ParseTaskStatusError, TaskDomainError};
pub use ids::TaskId;
pub use priority::TaskPriority;
pub use status::TaskStatus;
pub use task::{NewTask, PersistedTaskData, Task, TaskDraft};
