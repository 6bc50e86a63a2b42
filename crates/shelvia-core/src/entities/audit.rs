//! Audit entry entity - append-only record of a mutating action

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fmt;

use crate::value_objects::DefectId;

/// Mutating actions that leave an audit trail
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AuditAction {
    CreateDefect,
    UpdateDefect,
    UploadFile,
}

impl AuditAction {
    /// Storage label
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::CreateDefect => "create_defect",
            Self::UpdateDefect => "update_defect",
            Self::UploadFile => "upload_file",
        }
    }
}

impl fmt::Display for AuditAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Stored audit entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuditEntry {
    pub id: i64,
    pub action: String,
    /// Credential used for the request; a pseudo-identity only
    pub actor: String,
    pub endpoint: String,
    pub method: String,
    pub target_id: Option<DefectId>,
    /// JSON snapshot of the input or applied fields
    pub payload: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Audit entry that has not been stored yet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewAuditEntry {
    pub action: AuditAction,
    pub actor: String,
    pub endpoint: String,
    pub method: String,
    pub target_id: Option<DefectId>,
    pub payload: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl NewAuditEntry {
    /// Create a new audit entry without target or payload
    pub fn new(
        action: AuditAction,
        actor: impl Into<String>,
        endpoint: impl Into<String>,
        method: impl Into<String>,
    ) -> Self {
        Self {
            action,
            actor: actor.into(),
            endpoint: endpoint.into(),
            method: method.into(),
            target_id: None,
            payload: None,
            created_at: Utc::now(),
        }
    }

    /// Set the affected defect
    pub fn with_target(mut self, target_id: DefectId) -> Self {
        self.target_id = Some(target_id);
        self
    }

    /// Attach a JSON snapshot of `payload`
    ///
    /// Serialization failure leaves the payload empty instead of failing.
    pub fn with_payload<T: Serialize + ?Sized>(mut self, payload: &T) -> Self {
        self.payload = serde_json::to_string(payload).ok();
        self
    }
}
