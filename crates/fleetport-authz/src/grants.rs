//! Custom permission grant mutation.

use chrono::Utc;
use std::collections::HashSet;
use std::sync::Arc;

use fleetport_cache::CacheLayer;
use fleetport_core::{PermissionName, UserId};
use fleetport_store::{User, UserStore};

use crate::error::{AuthzError, AuthzResult};
use crate::keys;

/// Mutates a user's custom permission grants.
///
/// Every mutation is read-modify-write over the whole user document with
/// last-writer-wins semantics, then drops the user's cached capability set.
/// Grants are not validated against the catalog.
pub struct GrantService {
    users: Arc<dyn UserStore>,
    cache: CacheLayer,
}

impl GrantService {
    pub fn new(users: Arc<dyn UserStore>, cache: CacheLayer) -> Self {
        Self { users, cache }
    }

    async fn load(&self, user_id: UserId) -> AuthzResult<User> {
        self.users
            .get(user_id)
            .await?
            .ok_or(AuthzError::UserNotFound(user_id))
    }

    async fn persist(&self, mut user: User) -> AuthzResult<User> {
        user.updated_at = Utc::now();
        self.users.put(user.clone()).await?;
        self.cache
            .invalidate(&keys::user_capabilities(&user.id))
            .await;
        Ok(user)
    }

    /// Grant one permission. Fails if the user already holds it.
    pub async fn assign(&self, user_id: UserId, name: PermissionName) -> AuthzResult<User> {
        let mut user = self.load(user_id).await?;
        if user.custom_permissions.contains(&name) {
            return Err(AuthzError::AlreadyGranted(name));
        }

        user.custom_permissions.push(name.clone());
        let user = self.persist(user).await?;
        tracing::info!(user_id = %user_id, permission = %name, "Assigned permission");
        Ok(user)
    }

    /// Revoke one permission. Fails if the user does not hold it.
    pub async fn revoke(&self, user_id: UserId, name: &PermissionName) -> AuthzResult<User> {
        let mut user = self.load(user_id).await?;
        let position = user
            .custom_permissions
            .iter()
            .position(|granted| granted == name)
            .ok_or_else(|| AuthzError::GrantNotFound(name.clone()))?;

        user.custom_permissions.remove(position);
        let user = self.persist(user).await?;
        tracing::info!(user_id = %user_id, permission = %name, "Revoked permission");
        Ok(user)
    }

    /// Replace the whole grant list, deduplicating while preserving the
    /// first occurrence of each name. Backs the bulk-update endpoint.
    pub async fn replace(&self, user_id: UserId, names: Vec<PermissionName>) -> AuthzResult<User> {
        let mut user = self.load(user_id).await?;

        let mut seen = HashSet::new();
        user.custom_permissions = names
            .into_iter()
            .filter(|name| seen.insert(name.clone()))
            .collect();

        let user = self.persist(user).await?;
        tracing::info!(
            user_id = %user_id,
            grant_count = user.custom_permissions.len(),
            "Replaced permission grants"
        );
        Ok(user)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fleetport_cache::MemoryCacheBackend;
    use fleetport_core::Role;
    use fleetport_store::InMemoryUserStore;

    fn perm(name: &str) -> PermissionName {
        PermissionName::new(name).unwrap()
    }

    async fn fixture_with_user(role: Role) -> (Arc<InMemoryUserStore>, GrantService, UserId) {
        let users = Arc::new(InMemoryUserStore::new());
        let cache = CacheLayer::new(Arc::new(MemoryCacheBackend::new()));
        let user = User::new("Lena", "lena@fleet.example", role);
        let id = user.id;
        users.seed([user]).await;
        (users.clone(), GrantService::new(users, cache), id)
    }

    #[tokio::test]
    async fn assign_appends_grant() {
        let (users, grants, id) = fixture_with_user(Role::BranchManager).await;
        grants.assign(id, perm("View Vehicles")).await.unwrap();
        grants.assign(id, perm("Add Vehicles")).await.unwrap();

        let user = users.get(id).await.unwrap().unwrap();
        assert_eq!(
            user.custom_permissions,
            vec![perm("View Vehicles"), perm("Add Vehicles")]
        );
        assert!(user.updated_at > user.created_at);
    }

    #[tokio::test]
    async fn double_assign_fails_and_leaves_single_grant() {
        let (users, grants, id) = fixture_with_user(Role::BranchManager).await;
        grants.assign(id, perm("View Vehicles")).await.unwrap();

        let err = grants.assign(id, perm("View Vehicles")).await.unwrap_err();
        assert!(matches!(err, AuthzError::AlreadyGranted(_)));

        let user = users.get(id).await.unwrap().unwrap();
        assert_eq!(user.custom_permissions, vec![perm("View Vehicles")]);
    }

    #[tokio::test]
    async fn revoke_unknown_grant_fails_without_changes() {
        let (users, grants, id) = fixture_with_user(Role::Driver).await;
        grants.assign(id, perm("View Reports")).await.unwrap();

        let err = grants.revoke(id, &perm("Never Granted")).await.unwrap_err();
        assert!(matches!(err, AuthzError::GrantNotFound(_)));

        let user = users.get(id).await.unwrap().unwrap();
        assert_eq!(user.custom_permissions, vec![perm("View Reports")]);
    }

    #[tokio::test]
    async fn revoke_removes_only_the_named_grant() {
        let (users, grants, id) = fixture_with_user(Role::BranchManager).await;
        grants.assign(id, perm("View Vehicles")).await.unwrap();
        grants.assign(id, perm("Add Vehicles")).await.unwrap();

        grants.revoke(id, &perm("View Vehicles")).await.unwrap();
        let user = users.get(id).await.unwrap().unwrap();
        assert_eq!(user.custom_permissions, vec![perm("Add Vehicles")]);
    }

    #[tokio::test]
    async fn replace_deduplicates_preserving_first_occurrence() {
        let (users, grants, id) = fixture_with_user(Role::BranchManager).await;
        grants
            .replace(
                id,
                vec![
                    perm("View Vehicles"),
                    perm("Add Vehicles"),
                    perm("View Vehicles"),
                ],
            )
            .await
            .unwrap();

        let user = users.get(id).await.unwrap().unwrap();
        assert_eq!(
            user.custom_permissions,
            vec![perm("View Vehicles"), perm("Add Vehicles")]
        );
    }

    #[tokio::test]
    async fn replace_with_empty_list_clears_grants() {
        let (users, grants, id) = fixture_with_user(Role::Driver).await;
        grants.assign(id, perm("View Reports")).await.unwrap();
        grants.replace(id, vec![]).await.unwrap();

        let user = users.get(id).await.unwrap().unwrap();
        assert!(user.custom_permissions.is_empty());
    }

    #[tokio::test]
    async fn mutations_on_unknown_user_fail() {
        let (_, grants, _) = fixture_with_user(Role::Driver).await;
        let ghost = UserId::new();

        assert!(matches!(
            grants.assign(ghost, perm("X")).await.unwrap_err(),
            AuthzError::UserNotFound(_)
        ));
        assert!(matches!(
            grants.revoke(ghost, &perm("X")).await.unwrap_err(),
            AuthzError::UserNotFound(_)
        ));
        assert!(matches!(
            grants.replace(ghost, vec![]).await.unwrap_err(),
            AuthzError::UserNotFound(_)
        ));
    }
}
