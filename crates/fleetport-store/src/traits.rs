//! Store traits.

use async_trait::async_trait;

use fleetport_core::{PermissionName, UserId};

use crate::error::StoreError;
use crate::models::{PermissionDefinition, User};

/// Persistence for user accounts.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Fetch one user by id.
    async fn get(&self, id: UserId) -> Result<Option<User>, StoreError>;

    /// Fetch one user by email (used by bootstrap seeding).
    async fn get_by_email(&self, email: &str) -> Result<Option<User>, StoreError>;

    /// List all users.
    async fn list(&self) -> Result<Vec<User>, StoreError>;

    /// Write the full user document, inserting or replacing.
    ///
    /// Grant mutations are read-modify-write over this call; concurrent
    /// writers race with last-writer-wins semantics.
    async fn put(&self, user: User) -> Result<(), StoreError>;
}

/// Persistence for the permission catalog.
#[async_trait]
pub trait PermissionStore: Send + Sync {
    /// Fetch one catalog entry by name.
    async fn get(&self, name: &PermissionName) -> Result<Option<PermissionDefinition>, StoreError>;

    /// List the full catalog (unordered; callers sort).
    async fn list(&self) -> Result<Vec<PermissionDefinition>, StoreError>;

    /// Insert a new catalog entry. Fails with [`StoreError::DuplicateKey`]
    /// if the name already exists.
    async fn insert(&self, definition: PermissionDefinition) -> Result<(), StoreError>;

    /// Remove a catalog entry by name. Returns whether an entry was removed.
    ///
    /// Removal never touches user grants; references become dangling.
    async fn remove(&self, name: &PermissionName) -> Result<bool, StoreError>;
}
