//! Health check handlers
//!
//! Endpoints for the root echo and the liveness and readiness checks.

use axum::{extract::State, http::StatusCode, Json};
use shelvia_service::dto::{HealthResponse, ReadinessResponse, RootResponse};
use shelvia_service::HealthService;

use crate::state::AppState;

/// Liveness echo
///
/// GET /
pub async fn root() -> Json<RootResponse> {
    Json(RootResponse::running())
}

/// Basic health check (liveness)
///
/// GET /health
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}

/// Readiness check with dependency health
///
/// GET /health/ready
pub async fn readiness_check(State(state): State<AppState>) -> (StatusCode, Json<ReadinessResponse>) {
    let response = HealthService::new(state.service_context()).readiness().await;

    let status = if response.is_ready() {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    (status, Json(response))
}
