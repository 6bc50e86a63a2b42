//! Business logic services
//!
//! Each service borrows the shared [`ServiceContext`] for the duration of a
//! request and orchestrates store calls plus the audit side channel.

pub mod attachment;
pub mod audit;
pub mod context;
pub mod defect;
pub mod error;
pub mod health;
pub mod stats;

// Re-export all services for convenience
pub use attachment::{AttachmentFile, AttachmentService};
pub use audit::AuditService;
pub use context::{ServiceContext, ServiceContextBuilder};
pub use defect::DefectService;
pub use error::{ServiceError, ServiceResult};
pub use health::HealthService;
pub use stats::StatsService;

#[cfg(test)]
pub(crate) mod test_support {
    use std::sync::Arc;

    use shelvia_db::{create_memory_pool, SqliteAuditRepository, SqliteDefectRepository};
    use shelvia_storage::FsAttachmentStore;
    use tempfile::TempDir;

    use super::ServiceContext;

    /// Context over a private in-memory database and a temporary upload directory
    pub async fn test_context() -> (ServiceContext, TempDir) {
        let pool = create_memory_pool().await.unwrap();
        let dir = TempDir::new().unwrap();

        let ctx = ServiceContext::builder()
            .pool(pool.clone())
            .defect_repo(Arc::new(SqliteDefectRepository::new(pool.clone())))
            .audit_repo(Arc::new(SqliteAuditRepository::new(pool)))
            .attachment_store(Arc::new(FsAttachmentStore::new(dir.path())))
            .build()
            .unwrap();

        (ctx, dir)
    }
}
