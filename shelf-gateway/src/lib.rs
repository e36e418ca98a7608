//! HTTP API gateway for the Shelf bookmarks service.
//!
//! Exposes list/get/create/update/delete endpoints over a single
//! `bookmarks` resource. All text leaving the service is HTML-sanitized.

#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]

pub mod body;
pub mod config;
pub mod error;
pub mod extract;
pub mod routes;
