//! SQLite implementation of DefectRepository

use std::collections::BTreeMap;

use async_trait::async_trait;
use sqlx::SqlitePool;
use tracing::{instrument, warn};

use shelvia_core::entities::{Defect, NewDefect};
use shelvia_core::traits::{DefectQuery, DefectRepository, DefectStats, RepoResult};
use shelvia_core::value_objects::{Category, DefectId};

use crate::mappers::{DefectInsert, DefectUpdate};
use crate::models::{CategoryCountModel, DefectModel, DefectStatsModel};

use super::error::{defect_not_found, map_db_error};

/// SQLite implementation of DefectRepository
#[derive(Clone)]
pub struct SqliteDefectRepository {
    pool: SqlitePool,
}

impl SqliteDefectRepository {
    /// Create a new SqliteDefectRepository
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl DefectRepository for SqliteDefectRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: DefectId) -> RepoResult<Option<Defect>> {
        let result = sqlx::query_as::<_, DefectModel>(
            r"
            SELECT id, title, description, category, status, created_at, resolved_at
            FROM defects
            WHERE id = ?1
            ",
        )
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        result.map(Defect::try_from).transpose()
    }

    #[instrument(skip(self))]
    async fn find_all(&self, query: &DefectQuery) -> RepoResult<Vec<Defect>> {
        let rows = sqlx::query_as::<_, DefectModel>(
            r"
            SELECT id, title, description, category, status, created_at, resolved_at
            FROM defects
            WHERE (?1 IS NULL OR status = ?1)
              AND (?2 IS NULL OR category = ?2)
            ORDER BY id ASC
            LIMIT ?3 OFFSET ?4
            ",
        )
        .bind(query.status.as_deref())
        .bind(query.category.map(Category::as_str))
        .bind(query.limit)
        .bind(query.offset)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        rows.into_iter().map(Defect::try_from).collect()
    }

    #[instrument(skip(self, defect), fields(title = %defect.title))]
    async fn create(&self, defect: &NewDefect) -> RepoResult<Defect> {
        let insert = DefectInsert::new(defect);

        let row = sqlx::query_as::<_, DefectModel>(
            r"
            INSERT INTO defects (title, description, category, status, created_at)
            VALUES (?1, ?2, ?3, ?4, ?5)
            RETURNING id, title, description, category, status, created_at, resolved_at
            ",
        )
        .bind(insert.title)
        .bind(insert.description)
        .bind(insert.category)
        .bind(insert.status)
        .bind(insert.created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Defect::try_from(row)
    }

    #[instrument(skip(self, defect), fields(id = %defect.id))]
    async fn update(&self, defect: &Defect) -> RepoResult<()> {
        let update = DefectUpdate::new(defect);

        let result = sqlx::query(
            r"
            UPDATE defects
            SET title = ?2, description = ?3, category = ?4, status = ?5, resolved_at = ?6
            WHERE id = ?1
            ",
        )
        .bind(update.id)
        .bind(update.title)
        .bind(update.description)
        .bind(update.category)
        .bind(update.status)
        .bind(update.resolved_at)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(defect_not_found(defect.id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn stats(&self) -> RepoResult<DefectStats> {
        let totals = sqlx::query_as::<_, DefectStatsModel>(
            r"
            SELECT COUNT(*) AS total,
                   COALESCE(SUM(CASE WHEN status = 'open' THEN 1 ELSE 0 END), 0) AS open,
                   COALESCE(SUM(CASE WHEN status = 'resolved' THEN 1 ELSE 0 END), 0) AS resolved
            FROM defects
            ",
        )
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        let rows = sqlx::query_as::<_, CategoryCountModel>(
            r"
            SELECT category, COUNT(*) AS count
            FROM defects
            WHERE category IS NOT NULL
            GROUP BY category
            ",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        let mut by_category = BTreeMap::new();
        for row in rows {
            match row.category.parse::<Category>() {
                Ok(category) => {
                    by_category.insert(category, row.count);
                }
                Err(e) => warn!(error = %e, "Skipping unknown category in stats"),
            }
        }

        Ok(DefectStats {
            total: totals.total,
            open: totals.open,
            resolved: totals.resolved,
            by_category,
        })
    }
}
