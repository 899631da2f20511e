//! Fixed account roles.

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// The role assigned to a portal account.
///
/// Roles are fixed at account creation; there is no role hierarchy and no
/// role implies another. Each role carries a compiled-in set of default
/// capabilities, extended per user by custom permission grants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// Platform administrator: manages users, permissions, and fleet setup.
    PlatformAdmin,
    /// Branch manager: oversees drivers and vehicle assignment for a region.
    BranchManager,
    /// Driver: end user with access to their own profile.
    Driver,
}

impl Role {
    /// All roles, in privilege order (broadest first).
    pub const ALL: [Role; 3] = [Role::PlatformAdmin, Role::BranchManager, Role::Driver];

    /// The wire name of this role.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::PlatformAdmin => "platform_admin",
            Role::BranchManager => "branch_manager",
            Role::Driver => "driver",
        }
    }
}

impl Display for Role {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a string is not a known role name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown role: {0}")]
pub struct UnknownRole(pub String);

impl FromStr for Role {
    type Err = UnknownRole;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "platform_admin" => Ok(Role::PlatformAdmin),
            "branch_manager" => Ok(Role::BranchManager),
            "driver" => Ok(Role::Driver),
            other => Err(UnknownRole(other.to_string())),
        }
    }
}
