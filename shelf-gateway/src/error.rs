//! Error types for the gateway crate.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use shelf_core::CoreError;
use shelf_store::StoreError;

/// Errors that can occur during gateway request handling.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum GatewayError {
    /// A field was missing, blank or out of range.
    #[error(transparent)]
    Validation(#[from] CoreError),

    /// The request body is not JSON of the expected shape.
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// No bookmark matches the id in the path.
    #[error("bookmark '{0}' not found")]
    BookmarkNotFound(String),

    /// An error propagated from the storage layer.
    #[error("storage error: {0}")]
    Store(#[from] StoreError),
}

impl IntoResponse for GatewayError {
    fn into_response(self) -> Response {
        let status = match &self {
            GatewayError::Validation(_) | GatewayError::InvalidRequest(_) => {
                tracing::error!(error = %self, "rejected request");
                StatusCode::BAD_REQUEST
            }
            GatewayError::BookmarkNotFound(_) => StatusCode::NOT_FOUND,
            GatewayError::Store(e) => {
                tracing::error!(error = %e, "storage failure");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };
        let message = match status {
            StatusCode::INTERNAL_SERVER_ERROR => "an internal error occurred".to_owned(),
            _ => self.to_string(),
        };
        // `message` is duplicated at the top level for clients of the create endpoint.
        let body = json!({ "error": { "message": message }, "message": message });
        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn body_json(resp: Response) -> serde_json::Value {
        let bytes = match axum::body::to_bytes(resp.into_body(), 4096).await {
            Ok(b) => b,
            Err(e) => panic!("failed to read body: {e}"),
        };
        match serde_json::from_slice(&bytes) {
            Ok(v) => v,
            Err(e) => panic!("invalid JSON: {e}"),
        }
    }

    fn corrupt_row() -> StoreError {
        StoreError::CorruptRow {
            id: 1,
            source: CoreError::InvalidRating { value: "0".to_owned() },
        }
    }

    #[test]
    fn gateway_error_status_codes_map_correctly() {
        let not_found = GatewayError::BookmarkNotFound("3".to_owned());
        assert_eq!(not_found.into_response().status(), StatusCode::NOT_FOUND);

        let missing = GatewayError::Validation(CoreError::MissingField { field: "title" });
        assert_eq!(missing.into_response().status(), StatusCode::BAD_REQUEST);

        let bad_json = GatewayError::InvalidRequest("expected value".to_owned());
        assert_eq!(bad_json.into_response().status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn gateway_error_store_variant_returns_500() {
        let err = GatewayError::Store(corrupt_row());
        assert_eq!(
            err.into_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR,
            "storage errors must map to 500"
        );
    }

    #[tokio::test]
    async fn validation_body_carries_message_in_both_shapes() {
        let err = GatewayError::Validation(CoreError::InvalidRating { value: "9".to_owned() });
        let body = body_json(err.into_response()).await;
        let nested = body["error"]["message"].as_str().unwrap_or_default();
        assert!(nested.contains("between 1 and 5"), "got {body}");
        assert_eq!(body["message"], body["error"]["message"]);
    }

    #[tokio::test]
    async fn storage_error_details_are_not_leaked() {
        let err = GatewayError::Store(corrupt_row());
        let body = body_json(err.into_response()).await;
        assert_eq!(body["message"], "an internal error occurred");
    }
}
