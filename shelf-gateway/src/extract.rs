//! Custom Axum extractors that reject with [`GatewayError`].

use axum::{
    extract::{FromRequest, FromRequestParts, Path, Request},
    http::request::Parts,
    Json,
};
use serde::de::DeserializeOwned;
use shelf_core::BookmarkId;

use crate::error::GatewayError;

/// JSON body whose rejection is a 400 [`GatewayError::InvalidRequest`]
/// instead of axum's default 415/422.
#[derive(Debug)]
pub struct JsonBody<T>(pub T);

impl<S, T> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = GatewayError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| GatewayError::InvalidRequest(rejection.body_text()))?;
        Ok(Self(value))
    }
}

/// Bookmark id taken from the `{id}` path segment.
///
/// Anything that is not a positive integer cannot name a stored bookmark and
/// is rejected as not found.
#[derive(Debug, Clone, Copy)]
pub struct BookmarkPath(pub BookmarkId);

impl<S> FromRequestParts<S> for BookmarkPath
where
    S: Send + Sync,
{
    type Rejection = GatewayError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw): Path<String> = Path::from_request_parts(parts, state)
            .await
            .map_err(|_| GatewayError::BookmarkNotFound(String::new()))?;

        match raw.parse::<i64>() {
            Ok(id) if id > 0 => Ok(Self(BookmarkId::from(id))),
            _ => Err(GatewayError::BookmarkNotFound(raw)),
        }
    }
}
