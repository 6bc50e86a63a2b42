//! Database models - SQLx-compatible structs for SQLite tables

mod audit_log;
mod defect;

pub use audit_log::AuditLogModel;
pub use defect::{CategoryCountModel, DefectModel, DefectStatsModel};
