//! HTTP error types for the API server.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::error::Error;

/// Error wrapper for converting service errors to HTTP responses.
///
/// Every failure, whether client-caused or engine-side, is reported as 400
/// with the raw failure message in an `error` field. The error kinds stay
/// distinguishable at the adapter boundary so a later revision can map them
/// to differentiated status codes without touching the handlers.
#[derive(Debug)]
pub struct ApiError(pub Error);

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = serde_json::json!({ "error": self.0.to_string() });
        (StatusCode::BAD_REQUEST, Json(body)).into_response()
    }
}

impl From<Error> for ApiError {
    fn from(err: Error) -> Self {
        ApiError(err)
    }
}
