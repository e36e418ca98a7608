//! Storage backends for the Shelf bookmarks service.
//!
//! [`BookmarkStore`] is the seam the HTTP layer talks to. [`SqliteStore`]
//! persists to a single `bookmarks` table; [`MemoryStore`] keeps an owned
//! map for tests and database-less runs.

#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]

pub mod backend;
pub mod error;
pub mod memory;
pub mod sqlite;

pub use backend::BookmarkStore;
pub use error::StoreError;
pub use memory::MemoryStore;
pub use sqlite::{connect, connect_in_memory, SqliteStore, DEFAULT_MAX_CONNECTIONS};
