//! Stats service

use tracing::instrument;

use crate::dto::StatsResponse;

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Aggregate counts over all defects
pub struct StatsService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> StatsService<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    #[instrument(skip(self))]
    pub async fn stats(&self) -> ServiceResult<StatsResponse> {
        let stats = self.ctx.defect_repo().stats().await?;
        Ok(StatsResponse::from(stats))
    }
}
