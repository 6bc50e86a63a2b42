//! Domain entities - core business objects

mod attachment;
mod audit;
mod defect;

pub use attachment::AttachmentKey;
pub use audit::{AuditAction, AuditEntry, NewAuditEntry};
pub use defect::{
    validate_title, Defect, DefectPatch, NewDefect, DEFAULT_STATUS, RESOLVED_STATUS,
    TITLE_MAX_LEN, TITLE_MIN_LEN,
};
