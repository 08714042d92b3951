//! SQLite implementation of the URL storage capabilities.

use async_trait::async_trait;
use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions};
use std::time::Duration;

use crate::domain::repositories::{UrlDeleter, UrlGetter, UrlSaver, UrlUpdater};
use crate::error::StorageError;

/// How long a connection waits on a locked database before failing.
const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

/// SQLite repository for URL records.
///
/// The `url` table carries a `UNIQUE` constraint on `alias`; conflicts are
/// detected from the constraint violation reported by SQLite, never by a
/// read-before-write check.
#[derive(Debug, Clone)]
pub struct SqliteUrlRepository {
    pool: SqlitePool,
}

impl SqliteUrlRepository {
    /// Creates a repository from an existing pool whose schema is already migrated.
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Opens (creating if missing) the database at `storage_path` and applies
    /// the embedded migrations.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Internal`] if the file cannot be opened or the
    /// schema cannot be established.
    pub async fn connect(storage_path: &str, max_connections: u32) -> Result<Self, StorageError> {
        const OP: &str = "storage.sqlite.connect";

        let options = SqliteConnectOptions::new()
            .filename(storage_path)
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal)
            .busy_timeout(BUSY_TIMEOUT);

        let pool = SqlitePoolOptions::new()
            .max_connections(max_connections)
            .connect_with(options)
            .await
            .map_err(|e| StorageError::internal(OP, e))?;

        sqlx::migrate!("./migrations")
            .run(&pool)
            .await
            .map_err(|e| StorageError::internal(OP, e))?;

        Ok(Self::new(pool))
    }
}

/// Translates a sqlx failure into the domain vocabulary.
///
/// This is the only place that inspects SQLite error shapes.
fn map_sqlx_error(op: &'static str, err: sqlx::Error) -> StorageError {
    if err
        .as_database_error()
        .is_some_and(|db| db.is_unique_violation())
    {
        return StorageError::AlreadyExists;
    }

    StorageError::internal(op, err)
}

#[async_trait]
impl UrlSaver for SqliteUrlRepository {
    async fn save_url(&self, url: &str, alias: &str) -> Result<i64, StorageError> {
        const OP: &str = "storage.sqlite.save_url";

        let result = sqlx::query("INSERT INTO url (url, alias) VALUES (?, ?)")
            .bind(url)
            .bind(alias)
            .execute(&self.pool)
            .await
            .map_err(|e| map_sqlx_error(OP, e))?;

        Ok(result.last_insert_rowid())
    }
}

#[async_trait]
impl UrlGetter for SqliteUrlRepository {
    async fn get_url(&self, alias: &str) -> Result<String, StorageError> {
        const OP: &str = "storage.sqlite.get_url";

        sqlx::query_scalar::<_, String>("SELECT url FROM url WHERE alias = ?")
            .bind(alias)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| map_sqlx_error(OP, e))?
            .ok_or(StorageError::NotFound)
    }
}

#[async_trait]
impl UrlUpdater for SqliteUrlRepository {
    async fn update_url(
        &self,
        url: &str,
        old_alias: &str,
        new_alias: &str,
    ) -> Result<(), StorageError> {
        const OP: &str = "storage.sqlite.update_url";

        let result = sqlx::query("UPDATE url SET url = ?, alias = ? WHERE alias = ?")
            .bind(url)
            .bind(new_alias)
            .bind(old_alias)
            .execute(&self.pool)
            .await
            .map_err(|e| map_sqlx_error(OP, e))?;

        if result.rows_affected() == 0 {
            return Err(StorageError::NotFound);
        }

        Ok(())
    }
}

#[async_trait]
impl UrlDeleter for SqliteUrlRepository {
    async fn delete_url(&self, alias: &str) -> Result<(), StorageError> {
        const OP: &str = "storage.sqlite.delete_url";

        let result = sqlx::query("DELETE FROM url WHERE alias = ?")
            .bind(alias)
            .execute(&self.pool)
            .await
            .map_err(|e| map_sqlx_error(OP, e))?;

        if result.rows_affected() == 0 {
            return Err(StorageError::NotFound);
        }

        Ok(())
    }
}
