//! Statistics handler

use axum::{extract::State, Json};
use shelvia_service::dto::StatsResponse;
use shelvia_service::StatsService;

use crate::extractors::ApiKey;
use crate::response::ApiResult;
use crate::state::AppState;

/// Aggregate defect counts
///
/// GET /stats
pub async fn get_stats(State(state): State<AppState>, _key: ApiKey) -> ApiResult<Json<StatsResponse>> {
    let stats = StatsService::new(state.service_context()).stats().await?;
    Ok(Json(stats))
}
