//! SQLite implementation of AuditRepository

use async_trait::async_trait;
use sqlx::SqlitePool;
use tracing::instrument;

use shelvia_core::entities::{AuditEntry, NewAuditEntry};
use shelvia_core::traits::{AuditQuery, AuditRepository, RepoResult};
use shelvia_core::value_objects::DefectId;

use crate::mappers::AuditLogInsert;
use crate::models::AuditLogModel;

use super::error::map_db_error;

/// SQLite implementation of AuditRepository
#[derive(Clone)]
pub struct SqliteAuditRepository {
    pool: SqlitePool,
}

impl SqliteAuditRepository {
    /// Create a new SqliteAuditRepository
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AuditRepository for SqliteAuditRepository {
    #[instrument(skip(self, entry), fields(action = %entry.action))]
    async fn append(&self, entry: &NewAuditEntry) -> RepoResult<AuditEntry> {
        let insert = AuditLogInsert::new(entry);

        let row = sqlx::query_as::<_, AuditLogModel>(
            r"
            INSERT INTO audit_logs (action, actor, endpoint, method, target_id, payload, created_at)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)
            RETURNING id, action, actor, endpoint, method, target_id, payload, created_at
            ",
        )
        .bind(insert.action)
        .bind(insert.actor)
        .bind(insert.endpoint)
        .bind(insert.method)
        .bind(insert.target_id)
        .bind(insert.payload)
        .bind(insert.created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(AuditEntry::from(row))
    }

    #[instrument(skip(self))]
    async fn list(&self, query: AuditQuery) -> RepoResult<Vec<AuditEntry>> {
        let rows = sqlx::query_as::<_, AuditLogModel>(
            r"
            SELECT id, action, actor, endpoint, method, target_id, payload, created_at
            FROM audit_logs
            ORDER BY id ASC
            LIMIT ?1 OFFSET ?2
            ",
        )
        .bind(query.limit)
        .bind(query.offset)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(rows.into_iter().map(AuditEntry::from).collect())
    }

    #[instrument(skip(self))]
    async fn find_by_target(&self, target_id: DefectId) -> RepoResult<Vec<AuditEntry>> {
        let rows = sqlx::query_as::<_, AuditLogModel>(
            r"
            SELECT id, action, actor, endpoint, method, target_id, payload, created_at
            FROM audit_logs
            WHERE target_id = ?1
            ORDER BY id ASC
            ",
        )
        .bind(target_id.into_inner())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(rows.into_iter().map(AuditEntry::from).collect())
    }
}
