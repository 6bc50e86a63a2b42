//! Defect handlers

use axum::{extract::State, Json};
use shelvia_service::dto::{CreateDefectRequest, DefectResponse, ListDefectsParams, UpdateDefectRequest};
use shelvia_service::DefectService;

use crate::extractors::{ApiKey, ApiPath, ApiQuery, DefectIdPath, ReadAccess, ValidatedJson};
use crate::response::{ApiResult, Created};
use crate::state::AppState;

/// Create a new defect
///
/// POST /defect
pub async fn create_defect(
    State(state): State<AppState>,
    key: ApiKey,
    ValidatedJson(request): ValidatedJson<CreateDefectRequest>,
) -> ApiResult<Created<Json<DefectResponse>>> {
    let service = DefectService::new(state.service_context());
    let defect = service.create_defect(&key.actor, request).await?;
    Ok(Created(Json(defect)))
}

/// List defects
///
/// GET /defect
pub async fn list_defects(
    State(state): State<AppState>,
    _access: ReadAccess,
    ApiQuery(params): ApiQuery<ListDefectsParams>,
) -> ApiResult<Json<Vec<DefectResponse>>> {
    let service = DefectService::new(state.service_context());
    let defects = service.list_defects(params).await?;
    Ok(Json(defects))
}

/// Get a defect by ID
///
/// GET /defect/:defect_id
pub async fn get_defect(
    State(state): State<AppState>,
    _access: ReadAccess,
    ApiPath(path): ApiPath<DefectIdPath>,
) -> ApiResult<Json<DefectResponse>> {
    let service = DefectService::new(state.service_context());
    let defect = service.get_defect(path.defect_id()).await?;
    Ok(Json(defect))
}

/// Partially update a defect
///
/// PATCH /defect/:defect_id
pub async fn update_defect(
    State(state): State<AppState>,
    key: ApiKey,
    ApiPath(path): ApiPath<DefectIdPath>,
    ValidatedJson(request): ValidatedJson<UpdateDefectRequest>,
) -> ApiResult<Json<DefectResponse>> {
    let service = DefectService::new(state.service_context());
    let defect = service
        .update_defect(&key.actor, path.defect_id(), request)
        .await?;
    Ok(Json(defect))
}
