//! API error types and HTTP status mapping.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use fleetport_authz::AuthzError;
use fleetport_core::InvalidPermissionName;
use fleetport_store::StoreError;

/// Errors returned by portal API endpoints.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Authentication required.
    #[error("Authentication required")]
    Unauthorized,

    /// Access denied.
    #[error("Access denied")]
    Forbidden,

    /// Resource not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Input validation error.
    #[error("Validation error: {0}")]
    Validation(String),

    /// A uniquely keyed resource already exists.
    ///
    /// The portal's existing clients expect duplicate catalog names to come
    /// back as 400, not 409, so this maps to Bad Request.
    #[error("Duplicate key: {0}")]
    DuplicateKey(String),

    /// The grant already exists on the user.
    #[error("Conflict: {0}")]
    AlreadyGranted(String),

    /// Infrastructure failure; details stay in the logs.
    #[error("Internal server error")]
    Internal,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_code, message) = match &self {
            Self::Unauthorized => (StatusCode::UNAUTHORIZED, "unauthorized", self.to_string()),
            Self::Forbidden => (StatusCode::FORBIDDEN, "forbidden", self.to_string()),
            Self::NotFound(m) => (StatusCode::NOT_FOUND, "not_found", m.clone()),
            Self::Validation(m) => (StatusCode::BAD_REQUEST, "validation_error", m.clone()),
            Self::DuplicateKey(m) => (StatusCode::BAD_REQUEST, "duplicate_key", m.clone()),
            Self::AlreadyGranted(m) => (StatusCode::CONFLICT, "already_granted", m.clone()),
            Self::Internal => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "internal_error",
                "Internal server error".to_string(),
            ),
        };
        let body = json!({ "error": error_code, "message": message });
        (status, Json(body)).into_response()
    }
}

impl From<AuthzError> for ApiError {
    fn from(err: AuthzError) -> Self {
        match err {
            AuthzError::Validation(m) => Self::Validation(m),
            AuthzError::DuplicatePermission(name) => {
                Self::DuplicateKey(format!("Permission already exists: {name}"))
            }
            AuthzError::PermissionNotFound(name) => {
                Self::NotFound(format!("Permission not found: {name}"))
            }
            AuthzError::UserNotFound(id) => Self::NotFound(format!("User not found: {id}")),
            AuthzError::AlreadyGranted(name) => {
                Self::AlreadyGranted(format!("Permission already granted: {name}"))
            }
            AuthzError::GrantNotFound(name) => {
                Self::NotFound(format!("Permission not granted: {name}"))
            }
            AuthzError::Store(e) => {
                tracing::error!(error = %e, "Store failure during authorization operation");
                Self::Internal
            }
        }
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::DuplicateKey(key) => Self::DuplicateKey(key),
            StoreError::Unavailable(m) => {
                tracing::error!(error = %m, "Store unavailable");
                Self::Internal
            }
        }
    }
}

impl From<InvalidPermissionName> for ApiError {
    fn from(err: InvalidPermissionName) -> Self {
        Self::Validation(err.to_string())
    }
}

/// Result type alias for portal API handlers.
pub type ApiResult<T> = Result<T, ApiError>;
