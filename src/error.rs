// HTTP API Error Types
use axum::{http::StatusCode, response::IntoResponse, Json};
use serde_json::{json, Value};
use std::fmt;

use crate::database::StoreError;

/// Status marker carried by every failure envelope
pub const FAILED: &str = "FAILED";

/// HTTP API error. Every variant renders as `{ msg, data: null, status: "FAILED" }`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    // 401 (missing or forbidden payload fields)
    Validation(Vec<String>),

    // 400 Bad Request
    BadRequest(String),

    // 400 (duplicate unique key, or update of a missing record)
    Conflict(String),

    // 404 Not Found
    NotFound(String),

    // 500 (malformed identifier, kept as a server error)
    InvalidIdentifier(String),

    // 500 Internal Server Error
    Store(String),

    // 503 Service Unavailable
    ServiceUnavailable(String),
}

/// Resource names used when phrasing client messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resource {
    Contact,
    Group,
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Resource::Contact => f.write_str("Contact"),
            Resource::Group => f.write_str("Group"),
        }
    }
}

impl ApiError {
    /// Get HTTP status code
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::UNAUTHORIZED,
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Conflict(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::InvalidIdentifier(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::ServiceUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
        }
    }

    /// Get client-safe error message
    pub fn message(&self) -> String {
        match self {
            ApiError::Validation(messages) => messages.join(",\n"),
            ApiError::BadRequest(msg)
            | ApiError::Conflict(msg)
            | ApiError::NotFound(msg)
            | ApiError::InvalidIdentifier(msg)
            | ApiError::Store(msg)
            | ApiError::ServiceUnavailable(msg) => msg.clone(),
        }
    }

    /// Convert to JSON response body
    pub fn to_json(&self) -> Value {
        json!({
            "msg": self.message(),
            "data": Value::Null,
            "status": FAILED
        })
    }
}

// Static constructor methods
impl ApiError {
    pub fn validation(messages: Vec<String>) -> Self {
        ApiError::Validation(messages)
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        ApiError::BadRequest(message.into())
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        ApiError::Conflict(message.into())
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        ApiError::NotFound(message.into())
    }

    pub fn server_error() -> Self {
        ApiError::Store("Server Error".to_string())
    }

    pub fn service_unavailable(message: impl Into<String>) -> Self {
        ApiError::ServiceUnavailable(message.into())
    }

    /// Map a persistence failure onto the client-facing taxonomy for `resource`.
    pub fn from_store(err: StoreError, resource: Resource) -> Self {
        match err {
            StoreError::InvalidId(raw) => {
                tracing::debug!("Rejected malformed {} id {:?}", resource, raw);
                ApiError::InvalidIdentifier(format!("Invalid {} Id", resource))
            }
            StoreError::Duplicate { collection, field } => {
                tracing::warn!("Unique key {}.{} rejected by store", collection, field);
                ApiError::conflict(format!("{} is already exists", resource))
            }
            other => {
                // Log the real error but return generic message
                tracing::error!("{} store error: {}", resource, other);
                ApiError::server_error()
            }
        }
    }
}

/// Attach a resource to store results so `?` yields an [`ApiError`].
pub trait StoreResultExt<T> {
    fn for_resource(self, resource: Resource) -> Result<T, ApiError>;
}

impl<T> StoreResultExt<T> for Result<T, StoreError> {
    fn for_resource(self, resource: Resource) -> Result<T, ApiError> {
        self.map_err(|err| ApiError::from_store(err, resource))
    }
}

// Standard error trait implementations
impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for ApiError {}

// Automatic HTTP response conversion for Axum
impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        (self.status_code(), Json(self.to_json())).into_response()
    }
}

pub type ApiResult<T> = Result<T, ApiError>;
