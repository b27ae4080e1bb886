//! Adapter implementations of the task ports.
//!
//! - [`memory`]: process-local storage
//! - [`postgres`]: diesel-backed `PostgreSQL` storage

pub mod memory;
pub mod postgres;
