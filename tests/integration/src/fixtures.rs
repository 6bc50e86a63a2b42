//! Test fixtures
//!
//! Request bodies and response shapes shared by the integration tests.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Create defect request
#[derive(Debug, Serialize)]
pub struct CreateDefect {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

impl CreateDefect {
    pub fn new(title: &str) -> Self {
        Self {
            title: title.to_string(),
            description: None,
            category: None,
        }
    }

    pub fn with_category(mut self, category: &str) -> Self {
        self.category = Some(category.to_string());
        self
    }

    pub fn with_description(mut self, description: &str) -> Self {
        self.description = Some(description.to_string());
        self
    }
}

/// Defect response
#[derive(Debug, Deserialize)]
pub struct Defect {
    pub id: i64,
    pub title: String,
    pub description: Option<String>,
    pub category: Option<String>,
    pub status: String,
    pub created_at: String,
    pub resolved_at: Option<String>,
}

/// Audit entry response
#[derive(Debug, Deserialize)]
pub struct AuditEntry {
    pub id: i64,
    pub action: String,
    pub actor: String,
    pub endpoint: String,
    pub method: String,
    pub target_id: Option<i64>,
    pub payload: Option<serde_json::Value>,
    pub created_at: String,
}

/// Stats response
#[derive(Debug, Deserialize)]
pub struct Stats {
    pub total_defects: i64,
    pub open_defects: i64,
    pub resolved_defects: i64,
    pub category_distribution: BTreeMap<String, i64>,
}

/// Upload response
#[derive(Debug, Deserialize)]
pub struct Upload {
    pub ok: bool,
    pub filename: String,
}
