//! Taskboard: task-tracking backend.
//!
//! This crate stores tasks that move through a forward-only lifecycle
//! (`TODO → IN_PROGRESS → DONE`), lists them by status, priority, or due
//! date, and reports overdue work. An HTTP surface exposes the operations.
//!
//! # Architecture
//!
//! Taskboard follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports (database, HTTP)
//!
//! # Modules
//!
//! - [`task`]: Task domain, storage port and adapters, lifecycle service
//! - [`api`]: HTTP routes mapping lifecycle operations to responses
//! - [`config`]: Command-line and environment configuration
//! - [`telemetry`]: Tracing subscriber setup

pub mod api;
pub mod config;
pub mod task;
pub mod telemetry;
