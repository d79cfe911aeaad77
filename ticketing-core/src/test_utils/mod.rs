//! In-memory repositories and fixtures for tests.
//!
//! Enabled for this crate's own tests and, through the `test-utils` feature,
//! for downstream crates.

pub mod fixtures;
pub mod memory_store;

pub use memory_store::{MemoryEmployeeRepository, MemoryTicketRepository};
