//! DTOs for user accounts and grant mutation.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use fleetport_store::User;

/// Response for a single user account.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    /// Account id.
    pub id: Uuid,

    /// Display name.
    pub name: String,

    /// Login email.
    pub email: String,

    /// Role name: `platform_admin`, `branch_manager`, or `driver`.
    pub role: String,

    /// Operating region, if set.
    pub region: Option<String>,

    /// Custom permission grants, in assignment order.
    pub custom_permissions: Vec<String>,

    /// When the account was created.
    pub created_at: DateTime<Utc>,

    /// When the account was last written.
    pub updated_at: DateTime<Utc>,
}

/// Response for the user listing.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserListResponse {
    /// User accounts.
    pub items: Vec<UserResponse>,

    /// Number of accounts.
    pub total: usize,
}

/// Request to bulk-replace a user's custom permission grants.
#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ReplacePermissionsRequest {
    /// The full replacement grant list. Duplicates are collapsed, keeping
    /// the first occurrence.
    pub custom_permissions: Vec<String>,
}

/// Request to grant a single permission.
#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AssignPermissionRequest {
    /// The permission label to grant.
    pub permission_name: String,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: *user.id.as_uuid(),
            name: user.name,
            email: user.email,
            role: user.role.to_string(),
            region: user.region,
            custom_permissions: user
                .custom_permissions
                .into_iter()
                .map(|name| name.to_string())
                .collect(),
            created_at: user.created_at,
            updated_at: user.updated_at,
        }
    }
}
