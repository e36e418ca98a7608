//! Error types for the store crate.

use shelf_core::CoreError;

/// Errors that can occur while talking to a bookmark store.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum StoreError {
    /// The database rejected or failed a query.
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// A stored row no longer satisfies the bookmark invariants.
    #[error("corrupt row for bookmark {id}: {source}")]
    CorruptRow {
        id: i64,
        #[source]
        source: CoreError,
    },
}
