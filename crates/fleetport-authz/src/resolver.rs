//! Effective capability resolution.

use std::collections::HashSet;
use std::sync::Arc;
use std::time::Duration;

use fleetport_cache::CacheLayer;
use fleetport_core::{PermissionName, UserId};
use fleetport_store::UserStore;

use crate::defaults::RoleDefaults;
use crate::error::{AuthzError, AuthzResult};
use crate::keys;

/// Default TTL for cached capability sets. Short, because a stale entry
/// means a revoked grant still authorizes until expiry.
pub const CAPABILITY_TTL: Duration = Duration::from_secs(300);

/// Resolves `(user, action)` authorization decisions.
///
/// A user's effective capability set is `defaults(role) ∪ custom grants`.
/// Membership is tested by exact string match against the requested action,
/// so a grant whose catalog entry was deleted still authorizes.
pub struct AccessResolver {
    users: Arc<dyn UserStore>,
    cache: CacheLayer,
    defaults: Arc<RoleDefaults>,
    capability_ttl: Duration,
}

impl AccessResolver {
    pub fn new(users: Arc<dyn UserStore>, cache: CacheLayer, defaults: Arc<RoleDefaults>) -> Self {
        Self {
            users,
            cache,
            defaults,
            capability_ttl: CAPABILITY_TTL,
        }
    }

    /// Override the capability cache TTL.
    #[must_use]
    pub fn with_capability_ttl(mut self, ttl: Duration) -> Self {
        self.capability_ttl = ttl;
        self
    }

    /// Compute the user's effective capability set.
    ///
    /// Serves from the per-user cache entry when present; otherwise reads
    /// the account, unions defaults with custom grants, and primes the
    /// cache. Fails with [`AuthzError::UserNotFound`] for unknown accounts
    /// and propagates store failures; neither reads as an empty set.
    pub async fn effective_capabilities(
        &self,
        user_id: UserId,
    ) -> AuthzResult<HashSet<PermissionName>> {
        let key = keys::user_capabilities(&user_id);
        if let Some(cached) = self.cache.get::<Vec<PermissionName>>(&key).await {
            tracing::debug!(user_id = %user_id, "Capability cache hit");
            return Ok(cached.into_iter().collect());
        }

        let user = self
            .users
            .get(user_id)
            .await?
            .ok_or(AuthzError::UserNotFound(user_id))?;

        let mut capabilities = self.defaults.for_role(user.role);
        capabilities.extend(user.custom_permissions.iter().cloned());

        // Sorted snapshot so the cached payload is deterministic.
        let mut snapshot: Vec<PermissionName> = capabilities.iter().cloned().collect();
        snapshot.sort();
        self.cache.set(&key, &snapshot, self.capability_ttl).await;

        tracing::debug!(
            user_id = %user_id,
            role = %user.role,
            capability_count = capabilities.len(),
            "Resolved effective capabilities"
        );
        Ok(capabilities)
    }

    /// Whether the user may perform `action`.
    pub async fn is_authorized(&self, user_id: UserId, action: &str) -> AuthzResult<bool> {
        let capabilities = self.effective_capabilities(user_id).await?;
        Ok(capabilities.iter().any(|name| name.as_str() == action))
    }

    /// Drop the user's cached capability set. Called after grant mutations.
    pub async fn invalidate(&self, user_id: UserId) {
        self.cache.invalidate(&keys::user_capabilities(&user_id)).await;
    }
}
