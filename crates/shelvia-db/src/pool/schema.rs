//! Schema bootstrap
//!
//! Tables are created once and never altered.

use sqlx::SqlitePool;

const CREATE_DEFECTS: &str = r"
CREATE TABLE IF NOT EXISTS defects (
    id          INTEGER PRIMARY KEY AUTOINCREMENT,
    title       TEXT NOT NULL,
    description TEXT,
    category    TEXT,
    status      TEXT NOT NULL DEFAULT 'open',
    created_at  TEXT NOT NULL,
    resolved_at TEXT
)
";

const CREATE_AUDIT_LOGS: &str = r"
CREATE TABLE IF NOT EXISTS audit_logs (
    id         INTEGER PRIMARY KEY AUTOINCREMENT,
    action     TEXT NOT NULL,
    actor      TEXT NOT NULL,
    endpoint   TEXT NOT NULL,
    method     TEXT NOT NULL,
    target_id  INTEGER,
    payload    TEXT,
    created_at TEXT NOT NULL
)
";

const CREATE_INDEXES: [&str; 3] = [
    "CREATE INDEX IF NOT EXISTS idx_defects_status ON defects (status)",
    "CREATE INDEX IF NOT EXISTS idx_defects_category ON defects (category)",
    "CREATE INDEX IF NOT EXISTS idx_audit_logs_target ON audit_logs (target_id)",
];

/// Create tables and indexes if they are missing
pub async fn init_schema(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    sqlx::query(CREATE_DEFECTS).execute(pool).await?;
    sqlx::query(CREATE_AUDIT_LOGS).execute(pool).await?;
    for statement in CREATE_INDEXES {
        sqlx::query(statement).execute(pool).await?;
    }
    Ok(())
}
