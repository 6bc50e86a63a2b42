//! Defect service
//!
//! Create, list, fetch and partially update defect records. Every successful
//! mutation leaves an audit entry.

use chrono::Utc;
use shelvia_core::entities::{AuditAction, NewAuditEntry, NewDefect};
use shelvia_core::{DefectId, DomainError};
use tracing::{info, instrument};
use validator::Validate;

use crate::dto::{CreateDefectRequest, DefectResponse, ListDefectsParams, UpdateDefectRequest};

use super::audit::AuditService;
use super::context::ServiceContext;
use super::error::ServiceResult;

/// Defect service
pub struct DefectService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> DefectService<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Create a new open defect
    #[instrument(skip(self, actor, request))]
    pub async fn create_defect(
        &self,
        actor: &str,
        request: CreateDefectRequest,
    ) -> ServiceResult<DefectResponse> {
        request.validate()?;

        let new_defect = NewDefect::new(
            request.title.clone(),
            request.description.clone(),
            request.category()?,
        )?;
        let defect = self.ctx.defect_repo().create(&new_defect).await?;

        AuditService::new(self.ctx)
            .record(
                NewAuditEntry::new(AuditAction::CreateDefect, actor, "/defect", "POST")
                    .with_target(defect.id)
                    .with_payload(&request),
            )
            .await;

        info!(defect_id = %defect.id, "Defect created");

        Ok(DefectResponse::from(defect))
    }

    /// List defects with optional filters
    #[instrument(skip(self))]
    pub async fn list_defects(&self, params: ListDefectsParams) -> ServiceResult<Vec<DefectResponse>> {
        let query = params.to_query()?;
        let defects = self.ctx.defect_repo().find_all(&query).await?;

        Ok(defects.into_iter().map(DefectResponse::from).collect())
    }

    /// Get a defect by ID
    #[instrument(skip(self))]
    pub async fn get_defect(&self, id: DefectId) -> ServiceResult<DefectResponse> {
        let defect = self
            .ctx
            .defect_repo()
            .find_by_id(id)
            .await?
            .ok_or(DomainError::DefectNotFound(id))?;

        Ok(DefectResponse::from(defect))
    }

    /// Apply a partial update
    ///
    /// Moving the status to `resolved` stamps `resolved_at` unless the
    /// request sets it itself.
    #[instrument(skip(self, actor, request))]
    pub async fn update_defect(
        &self,
        actor: &str,
        id: DefectId,
        request: UpdateDefectRequest,
    ) -> ServiceResult<DefectResponse> {
        request.validate()?;
        let patch = request.into_patch()?;

        let mut defect = self
            .ctx
            .defect_repo()
            .find_by_id(id)
            .await?
            .ok_or(DomainError::DefectNotFound(id))?;

        let patch = patch.with_resolution_stamp(&defect, Utc::now());
        defect.apply(patch.clone())?;
        self.ctx.defect_repo().update(&defect).await?;

        AuditService::new(self.ctx)
            .record(
                NewAuditEntry::new(AuditAction::UpdateDefect, actor, format!("/defect/{id}"), "PATCH")
                    .with_target(id)
                    .with_payload(&patch),
            )
            .await;

        info!(defect_id = %id, status = %defect.status, "Defect updated");

        Ok(DefectResponse::from(defect))
    }
}
