//! Route definitions

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::handlers::{audit, defects, files, health, stats};
use crate::state::AppState;

/// Slack on top of the file size limit for multipart boundaries and headers
pub const MULTIPART_OVERHEAD_BYTES: usize = 64 * 1024;

/// Create the API router (health routes excluded so they bypass rate limiting)
pub fn create_router(max_upload_bytes: usize) -> Router<AppState> {
    Router::new()
        .merge(defect_routes())
        .merge(file_routes(max_upload_bytes))
        .route("/audit", get(audit::list_audit_entries))
        .route("/stats", get(stats::get_stats))
}

/// Root echo and health checks
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(health::root))
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
}

fn defect_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/defect",
            post(defects::create_defect).get(defects::list_defects),
        )
        .route(
            "/defect/:defect_id",
            get(defects::get_defect).patch(defects::update_defect),
        )
}

fn file_routes(max_upload_bytes: usize) -> Router<AppState> {
    Router::new()
        .route(
            "/defect/:defect_id/upload",
            post(files::upload_file).layer(DefaultBodyLimit::max(
                max_upload_bytes.saturating_add(MULTIPART_OVERHEAD_BYTES),
            )),
        )
        .route("/defect/:defect_id/files", get(files::list_files))
        .route(
            "/defect/:defect_id/files/:filename",
            get(files::download_file),
        )
}
