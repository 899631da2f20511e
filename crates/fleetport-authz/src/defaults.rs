//! Compiled-in role default capabilities.
//!
//! The default table is data handed to the resolver, not a lookup baked
//! into it, so tests can run against a reduced fixture table.

use std::collections::{HashMap, HashSet};

use fleetport_core::{PermissionName, Role};

/// The default capability set of each role.
///
/// Resolution unions a user's role defaults with their custom grants;
/// defaults themselves are never persisted and cannot be revoked per user.
#[derive(Debug, Clone, Default)]
pub struct RoleDefaults {
    table: HashMap<Role, HashSet<PermissionName>>,
}

impl RoleDefaults {
    /// An empty table: every role resolves to custom grants only.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// The portal's standard table.
    ///
    /// Branch managers deliberately do not default to "View Vehicles" or
    /// "Add Vehicles"; those are grantable catalog permissions.
    #[must_use]
    pub fn standard() -> Self {
        Self::empty()
            .with_role(
                Role::PlatformAdmin,
                [
                    "View Dashboard",
                    "Manage Users",
                    "Change Roles",
                    "Manage Permissions",
                    "View Driver Overview",
                    "Manage Vehicles",
                    "View Profile",
                ],
            )
            .with_role(
                Role::BranchManager,
                [
                    "View Dashboard",
                    "View Drivers",
                    "Assign Vehicles",
                    "View Profile",
                ],
            )
            .with_role(Role::Driver, ["View Profile"])
    }

    /// Builder-style entry for one role. Invalid labels are rejected at
    /// construction; the standard table only uses known-good literals.
    #[must_use]
    pub fn with_role<'a>(mut self, role: Role, names: impl IntoIterator<Item = &'a str>) -> Self {
        let set = names
            .into_iter()
            .filter_map(|name| PermissionName::new(name).ok())
            .collect();
        self.table.insert(role, set);
        self
    }

    /// The default capability set for `role` (empty if the role has no row).
    #[must_use]
    pub fn for_role(&self, role: Role) -> HashSet<PermissionName> {
        self.table.get(&role).cloned().unwrap_or_default()
    }

    /// Whether `name` is a default capability of `role`.
    #[must_use]
    pub fn contains(&self, role: Role, name: &PermissionName) -> bool {
        self.table
            .get(&role)
            .is_some_and(|set| set.contains(name))
    }

    /// Every permission name appearing in any role's defaults.
    #[must_use]
    pub fn all_names(&self) -> HashSet<PermissionName> {
        self.table.values().flatten().cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn perm(name: &str) -> PermissionName {
        PermissionName::new(name).unwrap()
    }

    #[test]
    fn every_role_defaults_to_view_profile() {
        let defaults = RoleDefaults::standard();
        for role in Role::ALL {
            assert!(
                defaults.contains(role, &perm("View Profile")),
                "{role} is missing View Profile"
            );
        }
    }

    #[test]
    fn driver_defaults_are_minimal() {
        let defaults = RoleDefaults::standard();
        assert_eq!(defaults.for_role(Role::Driver), [perm("View Profile")].into());
    }

    #[test]
    fn branch_manager_does_not_default_to_vehicle_catalog_permissions() {
        let defaults = RoleDefaults::standard();
        assert!(!defaults.contains(Role::BranchManager, &perm("View Vehicles")));
        assert!(!defaults.contains(Role::BranchManager, &perm("Add Vehicles")));
        assert!(defaults.contains(Role::BranchManager, &perm("Assign Vehicles")));
    }

    #[test]
    fn platform_admin_manages_users_and_permissions() {
        let defaults = RoleDefaults::standard();
        assert!(defaults.contains(Role::PlatformAdmin, &perm("Manage Users")));
        assert!(defaults.contains(Role::PlatformAdmin, &perm("Manage Permissions")));
    }

    #[test]
    fn empty_table_grants_nothing() {
        let defaults = RoleDefaults::empty();
        for role in Role::ALL {
            assert!(defaults.for_role(role).is_empty());
        }
    }

    #[test]
    fn all_names_unions_every_role() {
        let defaults = RoleDefaults::empty()
            .with_role(Role::Driver, ["A"])
            .with_role(Role::BranchManager, ["A", "B"]);
        assert_eq!(defaults.all_names(), [perm("A"), perm("B")].into());
    }
}
