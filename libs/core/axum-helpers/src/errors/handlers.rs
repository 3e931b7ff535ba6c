use axum::{
    http::{StatusCode, Uri},
    response::Response,
};

use super::{ErrorCode, error_response};

/// Fallback handler for unknown routes; answers with the standard JSON error body.
pub async fn not_found(uri: Uri) -> Response {
    error_response(
        StatusCode::NOT_FOUND,
        format!("No route for {}", uri.path()),
        ErrorCode::NotFound,
    )
}
