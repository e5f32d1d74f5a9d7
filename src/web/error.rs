use crate::errors::AppError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

/// Input problems are reported back; everything else becomes a generic
/// failure and the detail goes to the log only.
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = if self.is_input_error() {
            (StatusCode::BAD_REQUEST, "BAD_REQUEST", self.to_string())
        } else {
            tracing::error!(error = %self, "render pass failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "INTERNAL_ERROR",
                "Failed to load dashboard data".to_string(),
            )
        };

        let body = json!({
            "error": message,
            "code": code,
        });

        (status, axum::Json(body)).into_response()
    }
}
