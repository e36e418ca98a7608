//! Core types for the Shelf bookmarks service.
//!
//! Defines the bookmark record, its validated create/update payloads, the
//! bounded rating type and the HTML sanitizer applied to everything the
//! service returns.

#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]

pub mod bookmark;
pub mod error;
pub mod examples;
pub mod id;
pub mod rating;
pub mod sanitize;

pub use bookmark::{Bookmark, BookmarkPatch, NewBookmark};
pub use error::CoreError;
pub use id::BookmarkId;
pub use rating::{Rating, RatingInput};
pub use sanitize::{sanitize_bookmark, sanitize_text};
