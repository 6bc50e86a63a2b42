//! Server setup and initialization
//!
//! Provides the application builder and server runner.

use std::sync::Arc;

use axum::Router;
use shelvia_common::{AppConfig, AppError};
use shelvia_db::{connect, SqliteAuditRepository, SqliteDefectRepository};
use shelvia_service::ServiceContextBuilder;
use shelvia_storage::FsAttachmentStore;
use tokio::net::TcpListener;
use tracing::{info, warn};

use crate::middleware::apply_middleware_with_config;
use crate::routes::{create_router, health_routes};
use crate::state::AppState;

/// Build the complete Axum application with all routes and middleware
pub fn create_app(state: AppState) -> Result<Router, AppError> {
    let config = state.config();

    let api = apply_middleware_with_config(
        create_router(config.storage.max_file_size_bytes()),
        &config.rate_limit,
        &config.cors,
        config.app.env.is_production(),
    )?;

    Ok(api.merge(health_routes()).with_state(state))
}

/// Initialize all dependencies and create AppState
pub async fn create_app_state(config: AppConfig) -> Result<AppState, AppError> {
    info!(url = %config.database.url, "Connecting to SQLite...");
    let pool = connect(&config.database)
        .await
        .map_err(|e| AppError::Database(e.to_string()))?;
    info!("Database ready");

    info!(dir = %config.storage.upload_dir, "Using attachment directory");
    let store = Arc::new(FsAttachmentStore::new(&config.storage.upload_dir));

    if config.auth.api_key.is_none() {
        warn!("SHELVIA_API_KEY is not set; protected endpoints will answer 500");
    }

    let service_context = ServiceContextBuilder::new()
        .pool(pool.clone())
        .defect_repo(Arc::new(SqliteDefectRepository::new(pool.clone())))
        .audit_repo(Arc::new(SqliteAuditRepository::new(pool)))
        .attachment_store(store)
        .build()?;

    Ok(AppState::new(service_context, config))
}

/// Serve the application on an address
pub async fn run_server(app: Router, addr: &str) -> Result<(), AppError> {
    info!("Starting HTTP server on {}", addr);

    let listener = TcpListener::bind(addr)
        .await
        .map_err(|e| AppError::Config(format!("Failed to bind to {addr}: {e}")))?;

    info!("Server listening on http://{}", addr);

    axum::serve(listener, app)
        .await
        .map_err(|e| AppError::internal(anyhow::anyhow!("Server error: {e}")))?;

    Ok(())
}

/// Run the complete server with configuration
pub async fn run(config: AppConfig) -> Result<(), AppError> {
    let addr = config.api.address();
    let state = create_app_state(config).await?;
    let app = create_app(state)?;
    run_server(app, &addr).await
}
