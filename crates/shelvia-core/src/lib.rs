//! # shelvia-core
//!
//! Domain layer containing defect entities, value objects, store traits, and domain errors.
//! This crate has zero dependencies on infrastructure (database, filesystem, web framework).

pub mod entities;
pub mod error;
pub mod traits;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use entities::{
    validate_title, AttachmentKey, AuditAction, AuditEntry, Defect, DefectPatch, NewAuditEntry,
    NewDefect, DEFAULT_STATUS, RESOLVED_STATUS,
};
pub use error::DomainError;
pub use traits::{
    AttachmentStore, AuditQuery, AuditRepository, DefectQuery, DefectRepository, DefectStats,
    RepoResult,
};
pub use value_objects::{Category, CategoryParseError, DefectId, DefectIdParseError, Patch};
