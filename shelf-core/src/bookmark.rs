use serde::{Deserialize, Serialize};

use crate::{error::CoreError, id::BookmarkId, rating::Rating, sanitize::sanitize_text};

/// A persisted bookmark.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[non_exhaustive]
pub struct Bookmark {
    /// Identifier assigned by storage on insert. Never changes.
    pub id: BookmarkId,
    pub title: String,
    pub url: String,
    pub rating: Rating,
    /// Free text that may contain untrusted markup.
    pub description: Option<String>,
}

impl Bookmark {
    /// Assemble a bookmark from stored columns.
    #[must_use]
    pub fn new(
        id: BookmarkId,
        title: String,
        url: String,
        rating: Rating,
        description: Option<String>,
    ) -> Self {
        Self { id, title, url, rating, description }
    }

    /// Attach a storage-assigned `id` to a validated insert payload.
    #[must_use]
    pub fn from_new(id: BookmarkId, new: NewBookmark) -> Self {
        Self::new(id, new.title, new.url, new.rating, new.description)
    }

    /// Overwrite the fields present in `patch`, leaving the rest untouched.
    pub fn apply(&mut self, patch: BookmarkPatch) {
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(url) = patch.url {
            self.url = url;
        }
        if let Some(rating) = patch.rating {
            self.rating = rating;
        }
        if let Some(description) = patch.description {
            self.description = Some(description);
        }
    }
}

/// Validated payload for creating a bookmark.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub struct NewBookmark {
    pub title: String,
    pub url: String,
    pub rating: Rating,
    pub description: Option<String>,
}

impl NewBookmark {
    /// Validate the fields of a new bookmark.
    ///
    /// # Errors
    /// Returns [`CoreError::EmptyField`] if `title` or `url` is blank, either
    /// as sent or once sanitized.
    pub fn new(
        title: String,
        url: String,
        rating: Rating,
        description: Option<String>,
    ) -> Result<Self, CoreError> {
        require_text("title", &title)?;
        require_text("url", &url)?;
        Ok(Self { title, url, rating, description })
    }
}

/// Validated partial update. At least one field is always present.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub struct BookmarkPatch {
    pub title: Option<String>,
    pub url: Option<String>,
    pub rating: Option<Rating>,
    pub description: Option<String>,
}

impl BookmarkPatch {
    /// Validate a partial update.
    ///
    /// # Errors
    /// Returns [`CoreError::NoFieldsSupplied`] if every field is `None`, or
    /// [`CoreError::EmptyField`] if a supplied `title` or `url` is blank, either
    /// as sent or once sanitized.
    pub fn new(
        title: Option<String>,
        url: Option<String>,
        rating: Option<Rating>,
        description: Option<String>,
    ) -> Result<Self, CoreError> {
        if title.is_none() && url.is_none() && rating.is_none() && description.is_none() {
            return Err(CoreError::NoFieldsSupplied);
        }
        if let Some(title) = &title {
            require_text("title", title)?;
        }
        if let Some(url) = &url {
            require_text("url", url)?;
        }
        Ok(Self { title, url, rating, description })
    }
}

// Clients only ever see the sanitized text, so markup-only input such as
// `<script>x</script>` counts as blank.
fn require_text(field: &'static str, value: &str) -> Result<(), CoreError> {
    if value.trim().is_empty() || sanitize_text(value).trim().is_empty() {
        return Err(CoreError::EmptyField { field });
    }
    Ok(())
}
