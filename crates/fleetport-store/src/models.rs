//! Persistent record models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use fleetport_core::{PermissionName, Role, UserId};

/// A portal user account.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    /// Unique account identifier.
    pub id: UserId,

    /// Display name.
    pub name: String,

    /// Login email, unique per deployment.
    pub email: String,

    /// Fixed role assigned at account creation.
    pub role: Role,

    /// Operating region, set for branch managers and drivers.
    pub region: Option<String>,

    /// Per-user permission grants layered on top of the role defaults.
    ///
    /// Kept duplicate-free in insertion order. Entries may reference catalog
    /// permissions that have since been deleted; such dangling grants remain
    /// authoritative for authorization until explicitly revoked.
    pub custom_permissions: Vec<PermissionName>,

    /// When the account was created.
    pub created_at: DateTime<Utc>,

    /// When the account was last written.
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Create a fresh account with no custom grants.
    pub fn new(name: impl Into<String>, email: impl Into<String>, role: Role) -> Self {
        let now = Utc::now();
        Self {
            id: UserId::new(),
            name: name.into(),
            email: email.into(),
            role,
            region: None,
            custom_permissions: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Builder-style region setter.
    #[must_use]
    pub fn with_region(mut self, region: impl Into<String>) -> Self {
        self.region = Some(region.into());
        self
    }
}

/// A named entry in the permission catalog.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PermissionDefinition {
    /// Unique, case-sensitive permission label.
    pub name: PermissionName,

    /// Human-readable description shown in the admin UI.
    pub description: String,

    /// When the entry was created.
    pub created_at: DateTime<Utc>,
}

impl PermissionDefinition {
    pub fn new(name: PermissionName, description: impl Into<String>) -> Self {
        Self {
            name,
            description: description.into(),
            created_at: Utc::now(),
        }
    }
}
