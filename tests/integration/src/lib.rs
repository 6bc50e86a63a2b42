//! Integration test utilities for the defect API
//!
//! Spawns the real router on a loopback port with an in-memory database and a
//! throwaway upload directory.

pub mod fixtures;
pub mod helpers;

pub use fixtures::*;
pub use helpers::*;
