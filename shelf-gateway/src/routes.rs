//! Axum route handlers for the bookmarks API.

use std::sync::Arc;

use axum::{
    extract::State,
    http::{header, StatusCode},
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use shelf_core::{sanitize_bookmark, Bookmark};
use shelf_store::BookmarkStore;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;

use crate::{
    body::{CreateBookmarkBody, PatchBookmarkBody},
    error::GatewayError,
    extract::{BookmarkPath, JsonBody},
};

// ── Shared state ─────────────────────────────────────────────────────────────

/// Storage handle shared by every handler.
pub type Store = Arc<dyn BookmarkStore>;

// ── Router ────────────────────────────────────────────────────────────────────

/// Build the application router over the given store.
pub fn create_router(store: Store) -> Router {
    Router::new()
        .route("/bookmarks", get(list_bookmarks).post(create_bookmark))
        .route(
            "/bookmarks/{id}",
            get(get_bookmark).delete(delete_bookmark).patch(update_bookmark),
        )
        .route("/health", get(health))
        .with_state(store)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}

// ── Handlers ──────────────────────────────────────────────────────────────────

/// `GET /health`: liveness check.
pub async fn health() -> impl IntoResponse {
    (StatusCode::OK, Json(serde_json::json!({"status": "ok"})))
}

/// `GET /bookmarks` — every bookmark, sanitized. Empty table yields `[]`.
///
/// # Errors
/// Returns [`GatewayError::Store`] if the query fails.
pub async fn list_bookmarks(State(store): State<Store>) -> Result<Json<Vec<Bookmark>>, GatewayError> {
    let bookmarks = store.list_all().await?;
    Ok(Json(bookmarks.iter().map(sanitize_bookmark).collect()))
}

/// `GET /bookmarks/{id}` — a single sanitized bookmark.
///
/// # Errors
/// Returns [`GatewayError::BookmarkNotFound`] if no row has this id.
pub async fn get_bookmark(
    State(store): State<Store>,
    BookmarkPath(id): BookmarkPath,
) -> Result<Json<Bookmark>, GatewayError> {
    let bookmark = store
        .get_by_id(id)
        .await?
        .ok_or_else(|| GatewayError::BookmarkNotFound(id.to_string()))?;
    Ok(Json(sanitize_bookmark(&bookmark)))
}

/// `POST /bookmarks` — create a bookmark and return it with its new id.
///
/// # Errors
/// Returns [`GatewayError::Validation`] if `title`, `url` or `rating` is
/// missing or invalid; nothing is written in that case.
pub async fn create_bookmark(
    State(store): State<Store>,
    JsonBody(body): JsonBody<CreateBookmarkBody>,
) -> Result<impl IntoResponse, GatewayError> {
    let new = body.validate()?;
    let created = store.insert(new).await?;
    info!(id = %created.id, "bookmark created");

    let location = format!("/bookmarks/{}", created.id);
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(sanitize_bookmark(&created)),
    ))
}

/// `DELETE /bookmarks/{id}` — remove a bookmark.
///
/// # Errors
/// Returns [`GatewayError::BookmarkNotFound`] if no row was deleted.
pub async fn delete_bookmark(
    State(store): State<Store>,
    BookmarkPath(id): BookmarkPath,
) -> Result<StatusCode, GatewayError> {
    if store.delete_by_id(id).await? == 0 {
        return Err(GatewayError::BookmarkNotFound(id.to_string()));
    }
    info!(id = %id, "bookmark deleted");
    Ok(StatusCode::NO_CONTENT)
}

/// `PATCH /bookmarks/{id}` — change only the supplied fields.
///
/// # Errors
/// Returns [`GatewayError::Validation`] if no recognised field is supplied
/// or a rating is out of range (checked before storage is touched), and
/// [`GatewayError::BookmarkNotFound`] if the id matches nothing.
pub async fn update_bookmark(
    State(store): State<Store>,
    BookmarkPath(id): BookmarkPath,
    JsonBody(body): JsonBody<PatchBookmarkBody>,
) -> Result<StatusCode, GatewayError> {
    let patch = body.validate()?;
    if store.update_by_id(id, patch).await? == 0 {
        return Err(GatewayError::BookmarkNotFound(id.to_string()));
    }
    info!(id = %id, "bookmark updated");
    Ok(StatusCode::NO_CONTENT)
}
