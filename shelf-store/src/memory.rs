//! In-memory bookmark store.
//!
//! An owned repository instance: each `MemoryStore` has its own map and id
//! counter, so tests and single-process runs never share state implicitly.

use std::{collections::BTreeMap, sync::RwLock};

use async_trait::async_trait;
use shelf_core::{Bookmark, BookmarkId, BookmarkPatch, NewBookmark};

use crate::{BookmarkStore, StoreError};

#[derive(Debug, Default)]
struct Table {
    rows: BTreeMap<BookmarkId, Bookmark>,
    last_id: i64,
}

/// Thread-safe bookmark table held in process memory.
#[derive(Debug, Default)]
pub struct MemoryStore {
    table: RwLock<Table>,
}

impl MemoryStore {
    /// Create an empty store. Ids start at 1.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored bookmarks.
    ///
    /// # Panics
    /// Panics if the internal `RwLock` is poisoned.
    #[must_use]
    pub fn len(&self) -> usize {
        #[expect(clippy::expect_used, reason = "lock poisoning is unrecoverable")]
        let table = self.table.read().expect("bookmark table read lock poisoned");
        table.rows.len()
    }

    /// Returns `true` if no bookmarks are stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl BookmarkStore for MemoryStore {
    async fn list_all(&self) -> Result<Vec<Bookmark>, StoreError> {
        #[expect(clippy::expect_used, reason = "lock poisoning is unrecoverable")]
        let table = self.table.read().expect("bookmark table read lock poisoned");
        Ok(table.rows.values().cloned().collect())
    }

    async fn get_by_id(&self, id: BookmarkId) -> Result<Option<Bookmark>, StoreError> {
        #[expect(clippy::expect_used, reason = "lock poisoning is unrecoverable")]
        let table = self.table.read().expect("bookmark table read lock poisoned");
        Ok(table.rows.get(&id).cloned())
    }

    async fn insert(&self, new: NewBookmark) -> Result<Bookmark, StoreError> {
        #[expect(clippy::expect_used, reason = "lock poisoning is unrecoverable")]
        let mut table = self.table.write().expect("bookmark table write lock poisoned");
        table.last_id += 1;
        let bookmark = Bookmark::from_new(BookmarkId::from(table.last_id), new);
        table.rows.insert(bookmark.id, bookmark.clone());
        Ok(bookmark)
    }

    async fn delete_by_id(&self, id: BookmarkId) -> Result<u64, StoreError> {
        #[expect(clippy::expect_used, reason = "lock poisoning is unrecoverable")]
        let mut table = self.table.write().expect("bookmark table write lock poisoned");
        Ok(u64::from(table.rows.remove(&id).is_some()))
    }

    async fn update_by_id(&self, id: BookmarkId, patch: BookmarkPatch) -> Result<u64, StoreError> {
        #[expect(clippy::expect_used, reason = "lock poisoning is unrecoverable")]
        let mut table = self.table.write().expect("bookmark table write lock poisoned");
        match table.rows.get_mut(&id) {
            Some(bookmark) => {
                bookmark.apply(patch);
                Ok(1)
            }
            None => Ok(0),
        }
    }
}
