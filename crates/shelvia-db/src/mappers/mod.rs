//! Entity to model mappers
//!
//! - `TryFrom<Model> for Entity`: convert database rows to domain objects
//! - `*Insert`/`*Update` structs: prepare entity data for database operations

mod audit_log;
mod defect;

pub use audit_log::AuditLogInsert;
pub use defect::{DefectInsert, DefectUpdate};
