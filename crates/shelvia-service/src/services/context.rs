//! Service context - dependency container for services
//!
//! Holds the stores and the database pool needed by services.

use std::sync::Arc;

use shelvia_core::traits::{AttachmentStore, AuditRepository, DefectRepository};
use shelvia_db::SqlitePool;

use super::error::{ServiceError, ServiceResult};

/// Service context containing all dependencies
#[derive(Clone)]
pub struct ServiceContext {
    // Database pool
    pool: SqlitePool,

    // Stores
    defect_repo: Arc<dyn DefectRepository>,
    audit_repo: Arc<dyn AuditRepository>,
    attachment_store: Arc<dyn AttachmentStore>,
}

impl ServiceContext {
    pub fn new(
        pool: SqlitePool,
        defect_repo: Arc<dyn DefectRepository>,
        audit_repo: Arc<dyn AuditRepository>,
        attachment_store: Arc<dyn AttachmentStore>,
    ) -> Self {
        Self {
            pool,
            defect_repo,
            audit_repo,
            attachment_store,
        }
    }

    pub fn builder() -> ServiceContextBuilder {
        ServiceContextBuilder::new()
    }

    /// Get the SQLite connection pool
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    pub fn defect_repo(&self) -> &dyn DefectRepository {
        self.defect_repo.as_ref()
    }

    pub fn audit_repo(&self) -> &dyn AuditRepository {
        self.audit_repo.as_ref()
    }

    pub fn attachment_store(&self) -> &dyn AttachmentStore {
        self.attachment_store.as_ref()
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("pool", &"SqlitePool")
            .field("stores", &"...")
            .finish()
    }
}

/// Builder for creating ServiceContext
#[derive(Default)]
pub struct ServiceContextBuilder {
    pool: Option<SqlitePool>,
    defect_repo: Option<Arc<dyn DefectRepository>>,
    audit_repo: Option<Arc<dyn AuditRepository>>,
    attachment_store: Option<Arc<dyn AttachmentStore>>,
}

impl ServiceContextBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pool(mut self, pool: SqlitePool) -> Self {
        self.pool = Some(pool);
        self
    }

    pub fn defect_repo(mut self, repo: Arc<dyn DefectRepository>) -> Self {
        self.defect_repo = Some(repo);
        self
    }

    pub fn audit_repo(mut self, repo: Arc<dyn AuditRepository>) -> Self {
        self.audit_repo = Some(repo);
        self
    }

    pub fn attachment_store(mut self, store: Arc<dyn AttachmentStore>) -> Self {
        self.attachment_store = Some(store);
        self
    }

    /// Build the ServiceContext
    ///
    /// # Errors
    /// Returns `ServiceError::Internal` if any dependency is missing
    pub fn build(self) -> ServiceResult<ServiceContext> {
        Ok(ServiceContext::new(
            self.pool.ok_or_else(|| ServiceError::internal("pool is required"))?,
            self.defect_repo.ok_or_else(|| ServiceError::internal("defect_repo is required"))?,
            self.audit_repo.ok_or_else(|| ServiceError::internal("audit_repo is required"))?,
            self.attachment_store
                .ok_or_else(|| ServiceError::internal("attachment_store is required"))?,
        ))
    }
}
