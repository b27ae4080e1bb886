//! Step definitions for task lifecycle behaviour scenarios.

mod then;
pub mod world;
