use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

use crate::{Error, ErrorClass};

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status = match self.class() {
            ErrorClass::Client => StatusCode::BAD_REQUEST,
            ErrorClass::Server => StatusCode::INTERNAL_SERVER_ERROR,
        };

        // Server-class detail is already logged where it was raised.
        tracing::debug!(status = status.as_u16(), error = %self, "request failed");

        (status, Json(json!({ "error": self.user_message() }))).into_response()
    }
}
