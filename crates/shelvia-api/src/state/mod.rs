//! Application state
//!
//! Holds the shared state for the Axum application including
//! the service context, configuration and API key verifier.

use std::sync::Arc;

use shelvia_common::{ApiKeyVerifier, AppConfig};
use shelvia_service::ServiceContext;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    service_context: Arc<ServiceContext>,
    config: Arc<AppConfig>,
    api_keys: ApiKeyVerifier,
}

impl AppState {
    pub fn new(service_context: ServiceContext, config: AppConfig) -> Self {
        let api_keys = ApiKeyVerifier::new(config.auth.api_key.clone());
        Self {
            service_context: Arc::new(service_context),
            config: Arc::new(config),
            api_keys,
        }
    }

    /// Get the service context
    pub fn service_context(&self) -> &ServiceContext {
        &self.service_context
    }

    /// Get the application configuration
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn api_keys(&self) -> &ApiKeyVerifier {
        &self.api_keys
    }

    /// Whether defect reads also require the API key
    pub fn protect_reads(&self) -> bool {
        self.config.auth.protect_reads
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("service_context", &"ServiceContext")
            .field("config", &"AppConfig")
            .field("api_keys", &self.api_keys)
            .finish()
    }
}
