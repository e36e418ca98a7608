//! Storage abstraction for bookmarks.
//!
//! Lets the HTTP layer run against SQLite or an owned in-memory map without
//! knowing which.

use async_trait::async_trait;
use shelf_core::{Bookmark, BookmarkId, BookmarkPatch, NewBookmark};

use crate::StoreError;

/// Table-scoped operations on the `bookmarks` table.
///
/// Implementations must be `Send + Sync` so one instance can be shared by
/// every request handler. No method retries; failures are returned as-is.
#[async_trait]
pub trait BookmarkStore: Send + Sync {
    /// Every stored bookmark. Callers must not rely on the order.
    ///
    /// # Errors
    /// Returns [`StoreError`] if the query fails or a row is corrupt.
    async fn list_all(&self) -> Result<Vec<Bookmark>, StoreError>;

    /// The bookmark with `id`, or `None` if there is none.
    ///
    /// # Errors
    /// Returns [`StoreError`] if the query fails or the row is corrupt.
    async fn get_by_id(&self, id: BookmarkId) -> Result<Option<Bookmark>, StoreError>;

    /// Insert a bookmark and return it with its newly assigned `id`.
    ///
    /// # Errors
    /// Returns [`StoreError::Database`] if the insert fails.
    async fn insert(&self, new: NewBookmark) -> Result<Bookmark, StoreError>;

    /// Delete the bookmark with `id`. Returns the number of rows removed (0 or 1).
    ///
    /// # Errors
    /// Returns [`StoreError::Database`] if the delete fails.
    async fn delete_by_id(&self, id: BookmarkId) -> Result<u64, StoreError>;

    /// Apply `patch` to the bookmark with `id`. Returns the number of rows
    /// matched (0 or 1).
    ///
    /// # Errors
    /// Returns [`StoreError::Database`] if the update fails.
    async fn update_by_id(&self, id: BookmarkId, patch: BookmarkPatch) -> Result<u64, StoreError>;
}
