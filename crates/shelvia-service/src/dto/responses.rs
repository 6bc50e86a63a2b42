//! Response DTOs for API endpoints
//!
//! All response DTOs implement `Serialize` for JSON output. Defect ids are
//! plain JSON numbers.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::Serialize;
use shelvia_core::Category;

// ============================================================================
// Defect Responses
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DefectResponse {
    pub id: i64,
    pub title: String,
    pub description: Option<String>,
    pub category: Option<Category>,
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub resolved_at: Option<DateTime<Utc>>,
}

/// Aggregate counts over all defects
#[derive(Debug, Clone, Serialize)]
pub struct StatsResponse {
    pub total_defects: i64,
    pub open_defects: i64,
    pub resolved_defects: i64,
    /// Only categories that appear at least once
    pub category_distribution: BTreeMap<Category, i64>,
}

// ============================================================================
// Audit Responses
// ============================================================================

#[derive(Debug, Clone, Serialize)]
pub struct AuditEntryResponse {
    pub id: i64,
    pub action: String,
    pub actor: String,
    pub endpoint: String,
    pub method: String,
    pub target_id: Option<i64>,
    /// Stored JSON payload; kept as a string if it does not parse
    pub payload: Option<serde_json::Value>,
    pub created_at: DateTime<Utc>,
}

// ============================================================================
// Attachment Responses
// ============================================================================

#[derive(Debug, Clone, Serialize)]
pub struct UploadResponse {
    pub ok: bool,
    /// Storage name, `defect_{id}_{original}`
    pub filename: String,
}

impl UploadResponse {
    pub fn stored(filename: String) -> Self {
        Self { ok: true, filename }
    }
}

// ============================================================================
// Health Responses
// ============================================================================

/// Liveness echo served at `/`
#[derive(Debug, Clone, Serialize)]
pub struct RootResponse {
    pub ok: bool,
    pub msg: String,
}

impl RootResponse {
    pub fn running() -> Self {
        Self {
            ok: true,
            msg: "backend çalışıyor".to_string(),
        }
    }
}

/// Basic health check response
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
}

impl HealthResponse {
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: Utc::now(),
        }
    }
}

/// Readiness check response
#[derive(Debug, Clone, Serialize)]
pub struct ReadinessResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub checks: HealthChecks,
}

#[derive(Debug, Clone, Serialize)]
pub struct HealthChecks {
    pub database: String,
}

impl ReadinessResponse {
    pub fn ready(database_healthy: bool) -> Self {
        Self {
            status: if database_healthy { "ready" } else { "not_ready" }.to_string(),
            timestamp: Utc::now(),
            checks: HealthChecks {
                database: if database_healthy { "healthy" } else { "unhealthy" }.to_string(),
            },
        }
    }

    pub fn is_ready(&self) -> bool {
        self.status == "ready"
    }
}
