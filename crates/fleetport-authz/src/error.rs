//! Authorization error types.

use fleetport_core::{PermissionName, UserId};
use fleetport_store::StoreError;

/// Errors returned by catalog, grant, and resolution operations.
#[derive(Debug, thiserror::Error)]
pub enum AuthzError {
    /// Input validation error.
    #[error("Validation error: {0}")]
    Validation(String),

    /// A catalog entry with this name already exists.
    #[error("Permission already exists: {0}")]
    DuplicatePermission(PermissionName),

    /// No catalog entry with this name.
    #[error("Permission not found: {0}")]
    PermissionNotFound(PermissionName),

    /// The referenced user account does not exist.
    ///
    /// This propagates out of authorization checks as an error; a missing
    /// account is never silently reported as "denied".
    #[error("User not found: {0}")]
    UserNotFound(UserId),

    /// The user already holds this custom grant.
    #[error("Permission already granted: {0}")]
    AlreadyGranted(PermissionName),

    /// The user does not hold this custom grant.
    #[error("Permission not granted: {0}")]
    GrantNotFound(PermissionName),

    /// Record store failure.
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Result type alias for authorization operations.
pub type AuthzResult<T> = Result<T, AuthzError>;
