//! In-memory store implementations.
//!
//! Back tests and cache-less single-node deployments. Both are plain
//! `RwLock<HashMap>` maps; `put` replaces the whole document, matching the
//! last-writer-wins contract of the traits.

use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;

use fleetport_core::{PermissionName, UserId};

use crate::error::StoreError;
use crate::models::{PermissionDefinition, User};
use crate::traits::{PermissionStore, UserStore};

/// In-memory [`UserStore`].
#[derive(Default)]
pub struct InMemoryUserStore {
    users: RwLock<HashMap<UserId, User>>,
}

impl InMemoryUserStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the store with existing accounts.
    pub async fn seed(&self, users: impl IntoIterator<Item = User>) {
        let mut map = self.users.write().await;
        for user in users {
            map.insert(user.id, user);
        }
    }
}

#[async_trait]
impl UserStore for InMemoryUserStore {
    async fn get(&self, id: UserId) -> Result<Option<User>, StoreError> {
        Ok(self.users.read().await.get(&id).cloned())
    }

    async fn get_by_email(&self, email: &str) -> Result<Option<User>, StoreError> {
        Ok(self
            .users
            .read()
            .await
            .values()
            .find(|u| u.email == email)
            .cloned())
    }

    async fn list(&self) -> Result<Vec<User>, StoreError> {
        let mut users: Vec<User> = self.users.read().await.values().cloned().collect();
        users.sort_by(|a, b| a.created_at.cmp(&b.created_at).then(a.email.cmp(&b.email)));
        Ok(users)
    }

    async fn put(&self, user: User) -> Result<(), StoreError> {
        self.users.write().await.insert(user.id, user);
        Ok(())
    }
}

/// In-memory [`PermissionStore`].
#[derive(Default)]
pub struct InMemoryPermissionStore {
    definitions: RwLock<HashMap<PermissionName, PermissionDefinition>>,
}

impl InMemoryPermissionStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl PermissionStore for InMemoryPermissionStore {
    async fn get(&self, name: &PermissionName) -> Result<Option<PermissionDefinition>, StoreError> {
        Ok(self.definitions.read().await.get(name).cloned())
    }

    async fn list(&self) -> Result<Vec<PermissionDefinition>, StoreError> {
        Ok(self.definitions.read().await.values().cloned().collect())
    }

    async fn insert(&self, definition: PermissionDefinition) -> Result<(), StoreError> {
        let mut definitions = self.definitions.write().await;
        if definitions.contains_key(&definition.name) {
            return Err(StoreError::DuplicateKey(definition.name.to_string()));
        }
        definitions.insert(definition.name.clone(), definition);
        Ok(())
    }

    async fn remove(&self, name: &PermissionName) -> Result<bool, StoreError> {
        Ok(self.definitions.write().await.remove(name).is_some())
    }
}
