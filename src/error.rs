//! Handler error type.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::storage::StoreError;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("template render failed: {0}")]
    Render(#[from] askama::Error),
    #[error("storage failed: {0}")]
    Storage(#[from] StoreError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        tracing::error!(error = %self, "request failed");
        (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error").into_response()
    }
}
