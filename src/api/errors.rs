//! # API Errors
//!
//! One error-kind type for every handler-level failure. Kind maps to status
//! code in exactly one place; the transport layer renders the small
//! `{error, code}` body and never exposes internals.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

use crate::observability::Logger;
use crate::store::StoreError;

/// Result type for API actions
pub type ApiResult<T> = Result<T, ApiError>;

/// API errors
#[derive(Debug, Clone, Error)]
pub enum ApiError {
    // ==================
    // Client Errors (4xx)
    // ==================
    /// A required input field is absent or empty; detected before any
    /// store call
    #[error("invalid {entity} {field}")]
    MissingField {
        entity: &'static str,
        field: &'static str,
    },

    /// A read-path lookup the store could not serve. The read path reports
    /// store failures as invalid lookups, not as server faults.
    #[error("invalid {0}")]
    InvalidRead(String),

    /// No record matched the lookup
    #[error("{0} not found")]
    NotFound(&'static str),

    /// Write-gate rejection on a mutating request
    #[error("api key missing or not recognized")]
    Forbidden,

    // ==================
    // Server Errors (5xx)
    // ==================
    /// The store acknowledged a create without materializing a record
    #[error("{0} not added")]
    NotAdded(&'static str),

    /// An update matched or modified nothing
    #[error("{0} not updated")]
    NotUpdated(&'static str),

    /// A store call failed on the write path
    #[error("{0}")]
    Store(#[from] StoreError),
}

impl ApiError {
    /// Get HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            // 400 Bad Request
            ApiError::MissingField { .. } => StatusCode::BAD_REQUEST,

            // 403 Forbidden
            ApiError::Forbidden => StatusCode::FORBIDDEN,

            // 404 Not Found
            ApiError::InvalidRead(_) => StatusCode::NOT_FOUND,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,

            // 500 Internal Server Error
            ApiError::NotAdded(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::NotUpdated(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: u16,
}

impl From<ApiError> for ErrorResponse {
    fn from(err: ApiError) -> Self {
        Self {
            code: err.status_code().as_u16(),
            error: err.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            Logger::error(
                "REQUEST_FAILED",
                &[("code", status.as_str()), ("error", &self.to_string())],
            );
        }
        let body = Json(ErrorResponse::from(self));
        (status, body).into_response()
    }
}
