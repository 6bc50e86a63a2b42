//! # shelvia-db
//!
//! Database layer implementing the record and audit store traits with SQLite via SQLx.
//!
//! ## Overview
//!
//! - Connection pool management (file-backed or in-memory)
//! - Idempotent schema bootstrap
//! - Row models with SQLx `FromRow` derives
//! - Entity ↔ Model mappers
//! - Repository implementations
//!
//! ## Usage
//!
//! ```rust,ignore
//! use shelvia_common::DatabaseConfig;
//! use shelvia_db::{connect, SqliteDefectRepository};
//!
//! async fn example(config: &DatabaseConfig) -> Result<(), Box<dyn std::error::Error>> {
//!     let pool = connect(config).await?;
//!     let defects = SqliteDefectRepository::new(pool);
//!     Ok(())
//! }
//! ```

pub mod mappers;
pub mod models;
pub mod pool;
pub mod repositories;

// Re-export commonly used types
pub use pool::{connect, create_memory_pool, create_pool, init_schema, SqlitePool};
pub use repositories::{SqliteAuditRepository, SqliteDefectRepository};
