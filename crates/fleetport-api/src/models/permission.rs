//! DTOs for the permission catalog.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use fleetport_store::PermissionDefinition;

/// Request to create a catalog permission.
#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreatePermissionRequest {
    /// Unique, case-sensitive permission label (e.g. "Add Vehicles").
    pub permission_name: String,

    /// Human-readable description shown in the admin UI.
    #[serde(default)]
    pub description: String,
}

/// Response for a single catalog permission.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PermissionResponse {
    /// The permission label.
    pub permission_name: String,

    /// Description.
    pub description: String,

    /// When the entry was created.
    pub created_at: DateTime<Utc>,
}

/// Response for the full catalog listing.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PermissionListResponse {
    /// Catalog entries, sorted by name.
    pub items: Vec<PermissionResponse>,

    /// Number of entries.
    pub total: usize,
}

impl From<PermissionDefinition> for PermissionResponse {
    fn from(definition: PermissionDefinition) -> Self {
        Self {
            permission_name: definition.name.to_string(),
            description: definition.description,
            created_at: definition.created_at,
        }
    }
}
