//! Error handling utilities for repositories

use shelvia_core::error::DomainError;
use shelvia_core::value_objects::DefectId;
use sqlx::Error as SqlxError;

/// Convert SQLx error to DomainError
pub fn map_db_error(e: SqlxError) -> DomainError {
    DomainError::DatabaseError(e.to_string())
}

/// Create a "defect not found" error
pub fn defect_not_found(id: DefectId) -> DomainError {
    DomainError::DefectNotFound(id)
}
