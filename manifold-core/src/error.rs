//! Error types shared between service layers and the HTTP boundary

use axum::http::StatusCode;
use serde_json::Value;
use thiserror::Error;

/// An expected failure carrying its HTTP mapping
///
/// Raised by service code at the point a failure is recognized as expected
/// (bad input, missing record, conflict) and inspected exactly once at the
/// HTTP boundary, which forwards status, message, and optional payload to
/// the client verbatim. The payload carries structured detail such as the
/// partial outcome of a batch operation.
#[derive(Error, Debug, Clone)]
#[error("{message}")]
pub struct HttpError {
    status: StatusCode,
    message: String,
    data: Option<Value>,
}

impl HttpError {
    /// Create a classified error with the given status and message
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        HttpError {
            status,
            message: message.into(),
            data: None,
        }
    }

    /// Attach structured detail to the error
    pub fn with_data(mut self, data: Value) -> Self {
        self.data = Some(data);
        self
    }

    /// Bad request (400)
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message)
    }

    /// Unauthorized (401)
    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::new(StatusCode::UNAUTHORIZED, message)
    }

    /// Forbidden (403)
    pub fn forbidden(message: impl Into<String>) -> Self {
        Self::new(StatusCode::FORBIDDEN, message)
    }

    /// Not found (404)
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, message)
    }

    /// Conflict (409)
    pub fn conflict(message: impl Into<String>) -> Self {
        Self::new(StatusCode::CONFLICT, message)
    }

    /// Internal server error (500)
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, message)
    }

    /// Service unavailable (503)
    pub fn service_unavailable(message: impl Into<String>) -> Self {
        Self::new(StatusCode::SERVICE_UNAVAILABLE, message)
    }

    /// HTTP status to emit
    pub fn status(&self) -> StatusCode {
        self.status
    }

    /// Message shown to the client
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Structured detail attached to the error
    pub fn data(&self) -> Option<&Value> {
        self.data.as_ref()
    }
}

/// Failure consumed by the response-writing boundary
///
/// Distinguishes failures the client may see verbatim from everything else,
/// which is reported as a generic internal error. Boundary code inspects
/// the tag with a `match`, never by string inspection.
#[derive(Error, Debug)]
pub enum Error {
    /// An expected failure with an explicit HTTP mapping
    #[error(transparent)]
    Http(#[from] HttpError),

    /// Any other failure surfacing from service logic
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for fallible service operations
pub type Result<T> = std::result::Result<T, Error>;
