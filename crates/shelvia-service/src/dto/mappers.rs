//! Entity to DTO mappers

use shelvia_core::entities::{AuditEntry, Defect};
use shelvia_core::traits::DefectStats;

use super::responses::{AuditEntryResponse, DefectResponse, StatsResponse};

impl From<&Defect> for DefectResponse {
    fn from(defect: &Defect) -> Self {
        Self {
            id: defect.id.into_inner(),
            title: defect.title.clone(),
            description: defect.description.clone(),
            category: defect.category,
            status: defect.status.clone(),
            created_at: defect.created_at,
            resolved_at: defect.resolved_at,
        }
    }
}

impl From<Defect> for DefectResponse {
    fn from(defect: Defect) -> Self {
        Self {
            id: defect.id.into_inner(),
            title: defect.title,
            description: defect.description,
            category: defect.category,
            status: defect.status,
            created_at: defect.created_at,
            resolved_at: defect.resolved_at,
        }
    }
}

impl From<AuditEntry> for AuditEntryResponse {
    fn from(entry: AuditEntry) -> Self {
        let payload = entry.payload.map(|raw| {
            serde_json::from_str(&raw).unwrap_or(serde_json::Value::String(raw))
        });

        Self {
            id: entry.id,
            action: entry.action,
            actor: entry.actor,
            endpoint: entry.endpoint,
            method: entry.method,
            target_id: entry.target_id.map(shelvia_core::DefectId::into_inner),
            payload,
            created_at: entry.created_at,
        }
    }
}

impl From<DefectStats> for StatsResponse {
    fn from(stats: DefectStats) -> Self {
        Self {
            total_defects: stats.total,
            open_defects: stats.open,
            resolved_defects: stats.resolved,
            category_distribution: stats.by_category,
        }
    }
}
