use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;
use tracing::error;

use crate::modules::employees::core::ports::FetchError;

#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error("domain rejected: {0}")]
    Domain(String),

    #[error("unexpected: {0}")]
    Unexpected(String),
}

/// Every failure becomes one uniform client-error response: 400 with a
/// plain-text message, as the original controller did with `BadRequest`.
/// The cause chain is logged here before it is flattened.
impl IntoResponse for ApplicationError {
    fn into_response(self) -> Response {
        match &self {
            ApplicationError::Fetch(cause) => error!(error = %cause, "upstream fetch failed"),
            ApplicationError::Domain(reason) => error!(reason = %reason, "request rejected"),
            ApplicationError::Unexpected(cause) => error!(error = %cause, "request failed"),
        }
        (StatusCode::BAD_REQUEST, self.to_string()).into_response()
    }
}
