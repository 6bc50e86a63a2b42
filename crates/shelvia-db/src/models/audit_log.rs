//! Audit log database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for audit_logs table
#[derive(Debug, Clone, FromRow)]
pub struct AuditLogModel {
    pub id: i64,
    pub action: String,
    pub actor: String,
    pub endpoint: String,
    pub method: String,
    pub target_id: Option<i64>,
    /// JSON text, kept verbatim
    pub payload: Option<String>,
    pub created_at: DateTime<Utc>,
}
