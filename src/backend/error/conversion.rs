/**
 * Error Conversion
 *
 * All backend errors implement `IntoResponse` from Axum, allowing them to be
 * returned directly from handlers and middleware.
 *
 * # Response Format
 *
 * ```json
 * {
 *   "error": "post not found",
 *   "status": 404
 * }
 * ```
 */

use axum::response::{IntoResponse, Json, Response};
use serde::{Deserialize, Serialize};

use crate::backend::error::types::BackendError;

/// JSON body of every error response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    /// Client-safe error message
    pub error: String,
    /// HTTP status code, repeated in the body
    pub status: u16,
}

impl IntoResponse for BackendError {
    /// Convert a backend error into an HTTP response
    ///
    /// Server-side failures are logged here with their full detail; the
    /// response body only carries the generic message.
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!("Request failed: {}", self);
        }

        let body = ErrorBody {
            error: self.message(),
            status: status.as_u16(),
        };

        (status, Json(body)).into_response()
    }
}
