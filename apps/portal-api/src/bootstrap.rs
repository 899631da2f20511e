//! Idempotent startup seeding.
//!
//! Seeds the standard capability names into the catalog and optionally
//! creates the first platform admin account. Safe to run on every start.

use fleetport_authz::RoleDefaults;
use fleetport_core::Role;
use fleetport_store::{PermissionDefinition, PermissionStore, StoreError, User, UserStore};

use crate::config::Config;

/// Seed baseline records. Existing records are left untouched.
pub async fn seed(
    config: &Config,
    users: &dyn UserStore,
    permissions: &dyn PermissionStore,
    defaults: &RoleDefaults,
) -> Result<(), StoreError> {
    let mut names: Vec<_> = defaults.all_names().into_iter().collect();
    names.sort();

    for name in names {
        let definition = PermissionDefinition::new(name.clone(), "Standard portal capability");
        match permissions.insert(definition).await {
            Ok(()) => tracing::debug!(permission = %name, "Seeded catalog permission"),
            Err(StoreError::DuplicateKey(_)) => {}
            Err(e) => return Err(e),
        }
    }

    if let Some(email) = &config.bootstrap_admin_email {
        if users.get_by_email(email).await?.is_none() {
            let name = config
                .bootstrap_admin_name
                .clone()
                .unwrap_or_else(|| "Platform Admin".to_string());
            let admin = User::new(name, email.clone(), Role::PlatformAdmin);
            tracing::info!(user_id = %admin.id, "Seeded platform admin account");
            users.put(admin).await?;
        }
    }

    Ok(())
}
