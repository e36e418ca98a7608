//! Request bodies accepted by the bookmark endpoints.
//!
//! Every field is optional at the JSON level so that a missing field becomes
//! a domain validation error with a readable message, not a serde failure.
//! Unknown fields are ignored.

use serde::Deserialize;
use shelf_core::{BookmarkPatch, CoreError, NewBookmark, RatingInput};

/// Body of `POST /bookmarks`.
#[derive(Debug, Default, Deserialize)]
pub struct CreateBookmarkBody {
    pub title: Option<String>,
    pub url: Option<String>,
    pub rating: Option<RatingInput>,
    pub description: Option<String>,
}

impl CreateBookmarkBody {
    /// Validate into an insert payload.
    ///
    /// # Errors
    /// Returns [`CoreError::MissingField`] for an absent `title`, `url` or
    /// `rating`, and the [`NewBookmark::new`] / [`RatingInput::parse`] errors
    /// for blank or out-of-range values.
    pub fn validate(self) -> Result<NewBookmark, CoreError> {
        let title = self.title.ok_or(CoreError::MissingField { field: "title" })?;
        let url = self.url.ok_or(CoreError::MissingField { field: "url" })?;
        let rating = self.rating.ok_or(CoreError::MissingField { field: "rating" })?.parse()?;
        NewBookmark::new(title, url, rating, self.description)
    }
}

/// Body of `PATCH /bookmarks/{id}`.
#[derive(Debug, Default, Deserialize)]
pub struct PatchBookmarkBody {
    pub title: Option<String>,
    pub url: Option<String>,
    pub rating: Option<RatingInput>,
    pub description: Option<String>,
}

impl PatchBookmarkBody {
    /// Validate into a partial update.
    ///
    /// # Errors
    /// Returns [`CoreError::NoFieldsSupplied`] if no recognised field is
    /// present, [`CoreError::InvalidRating`] for a bad rating, or
    /// [`CoreError::EmptyField`] for a blank `title`/`url`.
    pub fn validate(self) -> Result<BookmarkPatch, CoreError> {
        let rating = self.rating.as_ref().map(RatingInput::parse).transpose()?;
        BookmarkPatch::new(self.title, self.url, rating, self.description)
    }
}
