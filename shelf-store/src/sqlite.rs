//! SQLite-backed bookmark store.
//!
//! Every statement is parameterized. Partial updates use
//! `COALESCE(?, column)` so a `NULL` bind leaves the column as it was.

use std::str::FromStr;

use async_trait::async_trait;
use shelf_core::{Bookmark, BookmarkId, BookmarkPatch, NewBookmark, Rating};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::{FromRow, SqlitePool};
use tracing::debug;

use crate::{BookmarkStore, StoreError};

/// Default maximum connections for the pool.
pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;

const CREATE_TABLE: &str = r"
    CREATE TABLE IF NOT EXISTS bookmarks (
        id          INTEGER PRIMARY KEY AUTOINCREMENT,
        title       TEXT    NOT NULL,
        url         TEXT    NOT NULL,
        rating      INTEGER NOT NULL CHECK (rating BETWEEN 1 AND 5),
        description TEXT
    )
";

/// Open a SQLite pool, creating the database file if it does not exist.
///
/// # Errors
/// Returns [`StoreError::Database`] if the URL is malformed or the
/// connection fails.
pub async fn connect(database_url: &str, max_connections: u32) -> Result<SqlitePool, StoreError> {
    let options = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);
    let pool = SqlitePoolOptions::new()
        .max_connections(max_connections)
        .connect_with(options)
        .await?;
    Ok(pool)
}

/// Open a private in-memory database.
///
/// Each SQLite connection to `:memory:` is its own database, so the pool is
/// pinned to a single connection that is never recycled.
///
/// # Errors
/// Returns [`StoreError::Database`] if the connection fails.
pub async fn connect_in_memory() -> Result<SqlitePool, StoreError> {
    let options = SqliteConnectOptions::from_str("sqlite::memory:")?;
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .min_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect_with(options)
        .await?;
    Ok(pool)
}

#[derive(Debug, FromRow)]
struct BookmarkRow {
    id: i64,
    title: String,
    url: String,
    rating: i64,
    description: Option<String>,
}

impl TryFrom<BookmarkRow> for Bookmark {
    type Error = StoreError;

    fn try_from(row: BookmarkRow) -> Result<Self, Self::Error> {
        let rating =
            Rating::new(row.rating).map_err(|source| StoreError::CorruptRow { id: row.id, source })?;
        Ok(Bookmark::new(
            BookmarkId::from(row.id),
            row.title,
            row.url,
            rating,
            row.description,
        ))
    }
}

/// Bookmark store over a shared [`SqlitePool`].
#[derive(Debug, Clone)]
pub struct SqliteStore {
    pool: SqlitePool,
}

impl SqliteStore {
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Create the `bookmarks` table if it is missing.
    ///
    /// # Errors
    /// Returns [`StoreError::Database`] if the DDL fails.
    pub async fn migrate(&self) -> Result<(), StoreError> {
        sqlx::query(CREATE_TABLE).execute(&self.pool).await?;
        debug!("bookmarks table ready");
        Ok(())
    }

    /// The underlying pool.
    #[must_use]
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

#[async_trait]
impl BookmarkStore for SqliteStore {
    async fn list_all(&self) -> Result<Vec<Bookmark>, StoreError> {
        let rows = sqlx::query_as::<_, BookmarkRow>(
            "SELECT id, title, url, rating, description FROM bookmarks ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(Bookmark::try_from).collect()
    }

    async fn get_by_id(&self, id: BookmarkId) -> Result<Option<Bookmark>, StoreError> {
        sqlx::query_as::<_, BookmarkRow>(
            "SELECT id, title, url, rating, description FROM bookmarks WHERE id = ?",
        )
        .bind(id.get())
        .fetch_optional(&self.pool)
        .await?
        .map(Bookmark::try_from)
        .transpose()
    }

    async fn insert(&self, new: NewBookmark) -> Result<Bookmark, StoreError> {
        let row = sqlx::query_as::<_, BookmarkRow>(
            r"
            INSERT INTO bookmarks (title, url, rating, description)
            VALUES (?, ?, ?, ?)
            RETURNING id, title, url, rating, description
            ",
        )
        .bind(new.title.as_str())
        .bind(new.url.as_str())
        .bind(i64::from(new.rating))
        .bind(new.description.as_deref())
        .fetch_one(&self.pool)
        .await?;

        debug!(id = row.id, "bookmark inserted");
        Bookmark::try_from(row)
    }

    async fn delete_by_id(&self, id: BookmarkId) -> Result<u64, StoreError> {
        let result = sqlx::query("DELETE FROM bookmarks WHERE id = ?")
            .bind(id.get())
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }

    async fn update_by_id(&self, id: BookmarkId, patch: BookmarkPatch) -> Result<u64, StoreError> {
        let result = sqlx::query(
            r"
            UPDATE bookmarks SET
                title       = COALESCE(?, title),
                url         = COALESCE(?, url),
                rating      = COALESCE(?, rating),
                description = COALESCE(?, description)
            WHERE id = ?
            ",
        )
        .bind(patch.title.as_deref())
        .bind(patch.url.as_deref())
        .bind(patch.rating.map(i64::from))
        .bind(patch.description.as_deref())
        .bind(id.get())
        .execute(&self.pool)
        .await?;
        Ok(result.rows_affected())
    }
}
