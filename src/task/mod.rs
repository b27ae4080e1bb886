//! Task lifecycle management.
//!
//! Tasks are created in `TODO`, advance one step at a time to `DONE`, carry
//! replaceable details (title, description, priority, due date), and are
//! reported as overdue once their due date has passed unfinished. The module
//! follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
