//! Defect database models

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for defects table
#[derive(Debug, Clone, FromRow)]
pub struct DefectModel {
    pub id: i64,
    pub title: String,
    pub description: Option<String>,
    /// Wire name of the category (e.g. `mekanik`)
    pub category: Option<String>,
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub resolved_at: Option<DateTime<Utc>>,
}

/// Totals row of the stats query
#[derive(Debug, Clone, Copy, FromRow)]
pub struct DefectStatsModel {
    pub total: i64,
    pub open: i64,
    pub resolved: i64,
}

/// One row of the per-category breakdown
#[derive(Debug, Clone, FromRow)]
pub struct CategoryCountModel {
    pub category: String,
    pub count: i64,
}
