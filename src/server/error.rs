//! Error-to-HTTP response conversion.
//!
//! Implements `IntoResponse` for [`vidserve_common::Error`] so the file
//! handler can return `Result<Response, AppError>` directly.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

/// Wrapper so we can implement `IntoResponse` for an external type.
#[derive(Debug)]
pub struct AppError {
    inner: vidserve_common::Error,
}

impl AppError {
    pub fn new(inner: vidserve_common::Error) -> Self {
        Self { inner }
    }
}

impl From<vidserve_common::Error> for AppError {
    fn from(e: vidserve_common::Error) -> Self {
        Self::new(e)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.inner.http_status())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        let body = json!({
            "error": self.inner.to_string(),
            "code": self.inner.code(),
            "path": self.inner.request_path(),
        });

        (status, axum::Json(body)).into_response()
    }
}
