//! # API Errors
//!
//! Every failure a handler can produce, and how it turns into a status code
//! and JSON body. Nothing propagates past the handler boundary.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;
use tracing::error;

use crate::store::StoreError;

use super::response::{ErrorResponse, MessageResponse};

/// Result type for handlers
pub type ApiResult<T> = Result<T, ApiError>;

/// Handler errors
#[derive(Debug, Error)]
pub enum ApiError {
    // ==================
    // Client Errors (4xx)
    // ==================
    /// Entity or route does not exist
    #[error("{0}")]
    NotFound(String),

    /// A create request left out a required field
    #[error("Missing fields")]
    MissingFields,

    /// A field was present but not a string
    #[error("Field '{0}' must be a string")]
    InvalidField(String),

    /// Body was not a JSON object
    #[error("{0}")]
    InvalidBody(String),

    /// Favorite already exists for this user and target
    #[error("{0}")]
    AlreadyFavorited(String),

    // ==================
    // Server Errors (5xx)
    // ==================
    /// Store failure; details are logged, not returned
    #[error("Internal server error")]
    Store(#[from] StoreError),
}

impl ApiError {
    pub fn not_found(msg: impl Into<String>) -> Self {
        ApiError::NotFound(msg.into())
    }

    /// Get HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::MissingFields
            | ApiError::InvalidField(_)
            | ApiError::InvalidBody(_)
            | ApiError::AlreadyFavorited(_) => StatusCode::BAD_REQUEST,
            ApiError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        match self {
            // Duplicate favorites answer with `msg`, like confirmations do
            ApiError::AlreadyFavorited(msg) => (status, Json(MessageResponse::new(msg))).into_response(),
            ApiError::Store(ref err) => {
                error!(error = %err, "store failure");
                (status, Json(ErrorResponse::new(self.to_string()))).into_response()
            }
            other => (status, Json(ErrorResponse::new(other.to_string()))).into_response(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(
            ApiError::not_found("Planet not found").status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(ApiError::MissingFields.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(
            ApiError::AlreadyFavorited("Planet already in favorites".to_string()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::Store(StoreError::UnsupportedUrl("x".to_string())).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_store_details_are_not_exposed() {
        let err = ApiError::from(StoreError::DuplicateEmail("han@falcon.io".to_string()));
        assert_eq!(err.to_string(), "Internal server error");
    }

    #[test]
    fn test_invalid_field_message() {
        assert_eq!(
            ApiError::InvalidField("climate".to_string()).to_string(),
            "Field 'climate' must be a string"
        );
    }
}
