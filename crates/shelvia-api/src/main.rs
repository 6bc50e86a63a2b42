//! Defect API server entry point
//!
//! Run with:
//! ```bash
//! cargo run -p shelvia-api
//! ```
//!
//! Configuration is read from environment variables and an optional `.env`.

use shelvia_common::{try_init_tracing_with_config, AppConfig, TracingConfig};
use tracing::{error, info};

#[tokio::main]
async fn main() {
    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    if let Err(e) = try_init_tracing_with_config(TracingConfig::for_environment(config.app.env)) {
        eprintln!("Warning: Failed to initialize tracing: {e}");
    }

    info!(
        app = %config.app.name,
        env = ?config.app.env,
        port = config.api.port,
        "Configuration loaded"
    );

    if let Err(e) = shelvia_api::run(config).await {
        error!(error = %e, "Server failed");
        std::process::exit(1);
    }
}
