//! Repository implementations
//!
//! SQLite implementations of the store traits defined in shelvia-core.

mod audit;
mod defect;
mod error;

pub use audit::SqliteAuditRepository;
pub use defect::SqliteDefectRepository;
