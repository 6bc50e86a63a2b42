//! Audit service
//!
//! Writes are a best-effort side channel: a failing audit store is logged and
//! never fails the request that triggered it.

use shelvia_core::entities::NewAuditEntry;
use tracing::{instrument, warn};
use validator::Validate;

use crate::dto::{AuditEntryResponse, AuditListParams};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Audit service
pub struct AuditService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> AuditService<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Append an entry, swallowing store failures
    #[instrument(skip(self, entry), fields(action = %entry.action, target = ?entry.target_id))]
    pub async fn record(&self, entry: NewAuditEntry) {
        if let Err(e) = self.ctx.audit_repo().append(&entry).await {
            warn!(error = %e, "Failed to write audit entry");
        }
    }

    /// List entries in insertion order
    #[instrument(skip(self))]
    pub async fn list(&self, params: AuditListParams) -> ServiceResult<Vec<AuditEntryResponse>> {
        params.validate()?;
        let query = params.to_query()?;

        let entries = self.ctx.audit_repo().list(query).await?;
        Ok(entries.into_iter().map(AuditEntryResponse::from).collect())
    }
}
