//! Domain errors - error types for the domain layer

use thiserror::Error;

use crate::value_objects::DefectId;

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    // =========================================================================
    // Not Found Errors
    // =========================================================================
    #[error("Defect not found: {0}")]
    DefectNotFound(DefectId),

    #[error("File not found: {0}")]
    FileNotFound(String),

    // =========================================================================
    // Validation Errors
    // =========================================================================
    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Invalid filename: {0}")]
    InvalidFilename(String),

    #[error("Unknown category: {0}")]
    InvalidCategory(String),

    // =========================================================================
    // Authorization Errors
    // =========================================================================
    #[error("Access denied to file {filename} for defect {defect_id}")]
    FileAccessDenied { defect_id: DefectId, filename: String },

    // =========================================================================
    // Infrastructure Errors (wrapped)
    // =========================================================================
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Storage error: {0}")]
    StorageError(String),
}

impl DomainError {
    /// Get an error code string for API responses
    pub fn code(&self) -> &'static str {
        match self {
            // Not Found
            Self::DefectNotFound(_) => "UNKNOWN_DEFECT",
            Self::FileNotFound(_) => "UNKNOWN_FILE",

            // Validation
            Self::ValidationError(_) => "VALIDATION_ERROR",
            Self::InvalidFilename(_) => "INVALID_FILENAME",
            Self::InvalidCategory(_) => "INVALID_CATEGORY",

            // Authorization
            Self::FileAccessDenied { .. } => "FILE_ACCESS_DENIED",

            // Infrastructure
            Self::DatabaseError(_) => "DATABASE_ERROR",
            Self::StorageError(_) => "STORAGE_ERROR",
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::DefectNotFound(_) | Self::FileNotFound(_))
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::ValidationError(_) | Self::InvalidFilename(_) | Self::InvalidCategory(_)
        )
    }

    /// Check if this is an authorization error
    pub fn is_authorization(&self) -> bool {
        matches!(self, Self::FileAccessDenied { .. })
    }

    /// Create a validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::ValidationError(msg.into())
    }
}
