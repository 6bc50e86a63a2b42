//! Audit entry <-> model mapper

use chrono::{DateTime, Utc};
use shelvia_core::entities::{AuditEntry, NewAuditEntry};
use shelvia_core::value_objects::DefectId;

use crate::models::AuditLogModel;

impl From<AuditLogModel> for AuditEntry {
    fn from(model: AuditLogModel) -> Self {
        AuditEntry {
            id: model.id,
            action: model.action,
            actor: model.actor,
            endpoint: model.endpoint,
            method: model.method,
            target_id: model.target_id.map(DefectId::new),
            payload: model.payload,
            created_at: model.created_at,
        }
    }
}

/// Values for appending an audit entry
pub struct AuditLogInsert<'a> {
    pub action: &'static str,
    pub actor: &'a str,
    pub endpoint: &'a str,
    pub method: &'a str,
    pub target_id: Option<i64>,
    pub payload: Option<&'a str>,
    pub created_at: DateTime<Utc>,
}

impl<'a> AuditLogInsert<'a> {
    pub fn new(entry: &'a NewAuditEntry) -> Self {
        Self {
            action: entry.action.as_str(),
            actor: &entry.actor,
            endpoint: &entry.endpoint,
            method: &entry.method,
            target_id: entry.target_id.map(DefectId::into_inner),
            payload: entry.payload.as_deref(),
            created_at: entry.created_at,
        }
    }
}
