//! Request/response DTOs for the portal API.
//!
//! Wire field names are camelCase to match the portal's existing REST
//! clients; conversion to domain types happens at the handler boundary.

pub mod permission;
pub mod query;
pub mod user;

pub use permission::{CreatePermissionRequest, PermissionListResponse, PermissionResponse};
pub use query::{CanIQuery, CanIResponse, CapabilitiesResponse};
pub use user::{
    AssignPermissionRequest, ReplacePermissionsRequest, UserListResponse, UserResponse,
};
