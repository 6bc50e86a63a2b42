//! Repository traits (ports) - define the interface for data access
//!
//! The domain layer defines what it needs, and the infrastructure layer
//! (`shelvia-db`, `shelvia-storage`) provides the implementation.

use std::collections::BTreeMap;

use async_trait::async_trait;

use crate::entities::{AttachmentKey, AuditEntry, Defect, NewAuditEntry, NewDefect};
use crate::error::DomainError;
use crate::value_objects::{Category, DefectId};

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

/// Default page size for list queries
pub const DEFAULT_PAGE_LIMIT: i64 = 50;
/// Maximum page size for list queries
pub const MAX_PAGE_LIMIT: i64 = 500;

fn check_limit(limit: i64) -> Result<(), DomainError> {
    if (1..=MAX_PAGE_LIMIT).contains(&limit) {
        Ok(())
    } else {
        Err(DomainError::validation(format!(
            "limit must be between 1 and {MAX_PAGE_LIMIT}"
        )))
    }
}

// ============================================================================
// Defect Repository
// ============================================================================

/// Filter and page options for listing defects
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DefectQuery {
    /// Exact status match; `None` means any status
    pub status: Option<String>,
    /// Exact category match; `None` means any category
    pub category: Option<Category>,
    pub offset: i64,
    pub limit: i64,
}

impl Default for DefectQuery {
    fn default() -> Self {
        Self {
            status: None,
            category: None,
            offset: 0,
            limit: DEFAULT_PAGE_LIMIT,
        }
    }
}

impl DefectQuery {
    /// Build a query from 1-based page numbers
    ///
    /// # Errors
    /// Returns a validation error if `page < 1` or `limit` is outside `1..=500`
    pub fn paged(
        status: Option<String>,
        category: Option<Category>,
        page: i64,
        limit: i64,
    ) -> Result<Self, DomainError> {
        if page < 1 {
            return Err(DomainError::validation("page must be at least 1"));
        }
        check_limit(limit)?;

        let offset = (page - 1)
            .checked_mul(limit)
            .ok_or_else(|| DomainError::validation("page is too large"))?;

        Ok(Self {
            status,
            category,
            offset,
            limit,
        })
    }
}

/// Aggregate counts over all defects
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DefectStats {
    pub total: i64,
    pub open: i64,
    pub resolved: i64,
    /// Only categories that appear at least once
    pub by_category: BTreeMap<Category, i64>,
}

#[async_trait]
pub trait DefectRepository: Send + Sync {
    /// Find defect by ID
    async fn find_by_id(&self, id: DefectId) -> RepoResult<Option<Defect>>;

    /// List defects matching the query, in insertion order
    async fn find_all(&self, query: &DefectQuery) -> RepoResult<Vec<Defect>>;

    /// Insert a new defect and return the stored record
    async fn create(&self, defect: &NewDefect) -> RepoResult<Defect>;

    /// Overwrite the mutable fields of an existing defect
    async fn update(&self, defect: &Defect) -> RepoResult<()>;

    /// Compute aggregate counts
    async fn stats(&self) -> RepoResult<DefectStats>;
}

// ============================================================================
// Audit Repository
// ============================================================================

/// Page options for listing audit entries
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuditQuery {
    pub limit: i64,
    pub offset: i64,
}

impl Default for AuditQuery {
    fn default() -> Self {
        Self {
            limit: DEFAULT_PAGE_LIMIT,
            offset: 0,
        }
    }
}

impl AuditQuery {
    /// # Errors
    /// Returns a validation error if `limit` is outside `1..=500` or `offset` is negative
    pub fn new(limit: i64, offset: i64) -> Result<Self, DomainError> {
        check_limit(limit)?;
        if offset < 0 {
            return Err(DomainError::validation("offset cannot be negative"));
        }
        Ok(Self { limit, offset })
    }
}

#[async_trait]
pub trait AuditRepository: Send + Sync {
    /// Append an entry to the log
    async fn append(&self, entry: &NewAuditEntry) -> RepoResult<AuditEntry>;

    /// List entries in insertion order
    async fn list(&self, query: AuditQuery) -> RepoResult<Vec<AuditEntry>>;

    /// List entries that target a specific defect
    async fn find_by_target(&self, target_id: DefectId) -> RepoResult<Vec<AuditEntry>>;
}

// ============================================================================
// Attachment Store
// ============================================================================

#[async_trait]
pub trait AttachmentStore: Send + Sync {
    /// Write the blob, silently replacing an existing one; returns the storage name
    async fn put(&self, key: &AttachmentKey, bytes: &[u8]) -> RepoResult<String>;

    /// Storage names of all attachments of a defect, sorted
    async fn list(&self, defect_id: DefectId) -> RepoResult<Vec<String>>;

    /// Read a blob, `None` if it does not exist
    async fn get(&self, key: &AttachmentKey) -> RepoResult<Option<Vec<u8>>>;
}
