use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous};
use sqlx::SqlitePool;
use std::path::Path;
use std::time::Duration;
use tracing::info;

use crate::application::ports::{IndexError, UploadIndex};
use crate::domain::entities::UploadRecord;
use crate::domain::value_objects::ReplayId;

/// SQLite-backed upload index.
///
/// Every insert is its own transaction and is fully synced before it returns,
/// so a record reported as inserted survives a crash.
pub struct SqliteUploadIndex {
    pool: SqlitePool,
}

impl SqliteUploadIndex {
    /// Open (creating if missing) the index database at `path`
    pub async fn open(path: impl AsRef<Path>, max_connections: u32) -> Result<Self, IndexError> {
        let path = path.as_ref();

        if let Some(parent) = path.parent() {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| IndexError::Database(sqlx::Error::Io(e)))?;
        }

        let opts = SqliteConnectOptions::new()
            .filename(path)
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal)
            .synchronous(SqliteSynchronous::Full)
            // Writers serialise on the database lock; wait instead of failing
            .busy_timeout(Duration::from_secs(5));

        let pool = SqlitePoolOptions::new()
            .max_connections(max_connections)
            .connect_with(opts)
            .await?;

        let index = Self { pool };
        index.migrate().await?;

        info!("Upload index opened at {}", path.display());
        Ok(index)
    }

    pub fn from_pool(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn migrate(&self) -> Result<(), IndexError> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS uploads (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                uuid TEXT NOT NULL UNIQUE,
                created_at TEXT NOT NULL
            )
            "#,
        )
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Full records in sequence order
    pub async fn list_records(&self) -> Result<Vec<UploadRecord>, IndexError> {
        let rows = sqlx::query_as::<_, UploadRow>(
            "SELECT id, uuid, created_at FROM uploads ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(|r| r.into_domain()).collect()
    }
}

#[async_trait]
impl UploadIndex for SqliteUploadIndex {
    async fn insert(&self, id: &ReplayId) -> Result<UploadRecord, IndexError> {
        let created_at = Utc::now();

        let result = sqlx::query("INSERT INTO uploads (uuid, created_at) VALUES (?, ?)")
            .bind(id.to_string())
            .bind(created_at)
            .execute(&self.pool)
            .await;

        match result {
            Ok(done) => Ok(UploadRecord::new(done.last_insert_rowid(), *id, created_at)),
            Err(sqlx::Error::Database(e)) if e.is_unique_violation() => {
                Err(IndexError::Conflict(id.to_string()))
            }
            Err(e) => Err(IndexError::Database(e)),
        }
    }

    async fn list_all(&self) -> Result<Vec<ReplayId>, IndexError> {
        // A single SELECT reads one consistent snapshot, even with concurrent inserts
        let uuids: Vec<String> = sqlx::query_scalar("SELECT uuid FROM uploads ORDER BY id")
            .fetch_all(&self.pool)
            .await?;

        uuids
            .iter()
            .map(|s| {
                s.parse::<ReplayId>()
                    .map_err(|e| IndexError::Corrupt(e.to_string()))
            })
            .collect()
    }

    async fn ping(&self) -> Result<(), IndexError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }

    async fn close(&self) {
        self.pool.close().await;
    }
}

#[derive(sqlx::FromRow)]
struct UploadRow {
    id: i64,
    uuid: String,
    created_at: DateTime<Utc>,
}

impl UploadRow {
    fn into_domain(self) -> Result<UploadRecord, IndexError> {
        let replay_id = self
            .uuid
            .parse::<ReplayId>()
            .map_err(|e| IndexError::Corrupt(e.to_string()))?;

        Ok(UploadRecord::new(self.id, replay_id, self.created_at))
    }
}
