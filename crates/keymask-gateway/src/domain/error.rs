//! Gateway error types.
//!
//! `ApiError` covers request-level failures and maps onto HTTP status
//! codes; validation variants carry descriptive messages for the client,
//! `Internal` stays opaque. `GatewayError` covers service lifecycle
//! failures (configuration, socket bind).

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

/// Request-level error returned to HTTP clients.
///
/// Validation variants are detected at the boundary before the engine is
/// invoked; the engine itself is total over string input once initialized.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ApiError {
    /// Request body was not a JSON object
    #[error("invalid request body: {0}")]
    MalformedBody(String),

    /// The `text` or `action` field is missing
    #[error("invalid request: text and action are required")]
    MissingFields,

    /// The `text` or `action` field is empty after trimming
    #[error("text and action cannot be empty")]
    EmptyFields,

    /// The `action` value is not one of the supported actions
    #[error("invalid action: {0}")]
    InvalidAction(String),

    /// Any other failure while handling the request
    #[error("internal server error: {0}")]
    Internal(String),
}

impl ApiError {
    /// HTTP status code for this error.
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::MalformedBody(_)
            | ApiError::MissingFields
            | ApiError::EmptyFields
            | ApiError::InvalidAction(_) => StatusCode::BAD_REQUEST,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Whether this is a client error (as opposed to a server fault).
    pub fn is_client_error(&self) -> bool {
        self.status().is_client_error()
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = Json(serde_json::json!({ "error": self.to_string() }));
        (self.status(), body).into_response()
    }
}

/// Result type for request handling
pub type ApiResult<T> = Result<T, ApiError>;

/// Gateway-level errors (service lifecycle, internal use)
#[derive(Debug, thiserror::Error)]
pub enum GatewayError {
    /// Configuration error
    #[error("configuration error: {0}")]
    Config(String),

    /// Server socket bind error
    #[error("server bind error: {0}")]
    Bind(String),

    /// Internal server error
    #[error("internal error: {0}")]
    Internal(String),
}
