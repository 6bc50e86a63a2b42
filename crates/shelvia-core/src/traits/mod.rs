//! Store traits (ports) implemented by the infrastructure crates

mod repositories;

pub use repositories::{
    AttachmentStore, AuditQuery, AuditRepository, DefectQuery, DefectRepository, DefectStats,
    RepoResult, DEFAULT_PAGE_LIMIT, MAX_PAGE_LIMIT,
};
