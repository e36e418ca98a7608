use std::fmt;

use serde::{Deserialize, Serialize};

/// Storage-assigned identifier of a bookmark.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[non_exhaustive]
pub struct BookmarkId(pub i64);

impl BookmarkId {
    /// Returns the inner integer.
    #[must_use]
    pub fn get(self) -> i64 {
        self.0
    }
}

impl fmt::Display for BookmarkId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for BookmarkId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}
