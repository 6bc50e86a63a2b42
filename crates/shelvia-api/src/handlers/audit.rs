//! Audit log handlers

use axum::{extract::State, Json};
use shelvia_service::dto::{AuditEntryResponse, AuditListParams};
use shelvia_service::AuditService;

use crate::extractors::{ApiKey, ApiQuery};
use crate::response::ApiResult;
use crate::state::AppState;

/// List audit entries, oldest first
///
/// GET /audit
pub async fn list_audit_entries(
    State(state): State<AppState>,
    _key: ApiKey,
    ApiQuery(params): ApiQuery<AuditListParams>,
) -> ApiResult<Json<Vec<AuditEntryResponse>>> {
    let entries = AuditService::new(state.service_context()).list(params).await?;
    Ok(Json(entries))
}
