//! Permission catalog management.

use std::sync::Arc;
use std::time::Duration;

use fleetport_cache::{CacheLayer, DEFAULT_TTL};
use fleetport_core::PermissionName;
use fleetport_store::{PermissionDefinition, PermissionStore, StoreError};

use crate::error::{AuthzError, AuthzResult};
use crate::keys;

/// CRUD over the permission catalog.
///
/// The catalog is a menu for administrators, not an enforcement gate:
/// deleting an entry leaves existing grants in place, and grants are never
/// checked against catalog membership.
pub struct CatalogService {
    store: Arc<dyn PermissionStore>,
    cache: CacheLayer,
    catalog_ttl: Duration,
}

impl CatalogService {
    pub fn new(store: Arc<dyn PermissionStore>, cache: CacheLayer) -> Self {
        Self {
            store,
            cache,
            catalog_ttl: DEFAULT_TTL,
        }
    }

    /// Override the catalog cache TTL.
    #[must_use]
    pub fn with_catalog_ttl(mut self, ttl: Duration) -> Self {
        self.catalog_ttl = ttl;
        self
    }

    /// Create a catalog entry. The name must not already exist
    /// (case-sensitive match).
    pub async fn create(
        &self,
        name: PermissionName,
        description: String,
    ) -> AuthzResult<PermissionDefinition> {
        let definition = PermissionDefinition::new(name.clone(), description);
        self.store
            .insert(definition.clone())
            .await
            .map_err(|e| match e {
                StoreError::DuplicateKey(_) => AuthzError::DuplicatePermission(name.clone()),
                other => AuthzError::Store(other),
            })?;

        self.cache.invalidate(keys::CATALOG).await;
        tracing::info!(permission = %definition.name, "Created catalog permission");
        Ok(definition)
    }

    /// Delete a catalog entry by name.
    ///
    /// Grants referencing the entry are untouched and keep authorizing; the
    /// portal accepts this inconsistency in exchange for cheap deletes.
    pub async fn delete(&self, name: &PermissionName) -> AuthzResult<()> {
        let removed = self.store.remove(name).await?;
        if !removed {
            return Err(AuthzError::PermissionNotFound(name.clone()));
        }

        self.cache.invalidate(keys::CATALOG).await;
        tracing::info!(permission = %name, "Deleted catalog permission");
        Ok(())
    }

    /// List the catalog, sorted by name. Read-through cached.
    pub async fn list(&self) -> AuthzResult<Vec<PermissionDefinition>> {
        if let Some(cached) = self.cache.get::<Vec<PermissionDefinition>>(keys::CATALOG).await {
            tracing::debug!(entries = cached.len(), "Catalog cache hit");
            return Ok(cached);
        }

        let mut definitions = self.store.list().await?;
        definitions.sort_by(|a, b| a.name.cmp(&b.name));
        self.cache
            .set(keys::CATALOG, &definitions, self.catalog_ttl)
            .await;
        Ok(definitions)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fleetport_cache::MemoryCacheBackend;
    use fleetport_store::InMemoryPermissionStore;

    fn perm(name: &str) -> PermissionName {
        PermissionName::new(name).unwrap()
    }

    fn service() -> (Arc<InMemoryPermissionStore>, CacheLayer, CatalogService) {
        let store = Arc::new(InMemoryPermissionStore::new());
        let cache = CacheLayer::new(Arc::new(MemoryCacheBackend::new()));
        let service = CatalogService::new(store.clone(), cache.clone());
        (store, cache, service)
    }

    #[tokio::test]
    async fn create_then_list_sorted() {
        let (_, _, service) = service();
        service
            .create(perm("View Vehicles"), "See the fleet".to_string())
            .await
            .unwrap();
        service
            .create(perm("Add Vehicles"), "Register vehicles".to_string())
            .await
            .unwrap();

        let listed = service.list().await.unwrap();
        let names: Vec<&str> = listed.iter().map(|d| d.name.as_str()).collect();
        assert_eq!(names, vec!["Add Vehicles", "View Vehicles"]);
    }

    #[tokio::test]
    async fn duplicate_create_is_rejected_and_original_survives() {
        let (_, _, service) = service();
        service
            .create(perm("View Reports"), "Original".to_string())
            .await
            .unwrap();

        let err = service
            .create(perm("View Reports"), "Replacement".to_string())
            .await
            .unwrap_err();
        assert!(matches!(err, AuthzError::DuplicatePermission(_)));

        let listed = service.list().await.unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].description, "Original");
    }

    #[tokio::test]
    async fn delete_missing_entry_is_not_found() {
        let (_, _, service) = service();
        let err = service.delete(&perm("Ghost")).await.unwrap_err();
        assert!(matches!(err, AuthzError::PermissionNotFound(_)));
    }

    #[tokio::test]
    async fn mutations_invalidate_the_cached_snapshot() {
        let (_, cache, service) = service();
        service
            .create(perm("View Vehicles"), "See the fleet".to_string())
            .await
            .unwrap();

        // Prime the cache.
        assert_eq!(service.list().await.unwrap().len(), 1);
        assert!(cache
            .get::<Vec<PermissionDefinition>>(keys::CATALOG)
            .await
            .is_some());

        service.delete(&perm("View Vehicles")).await.unwrap();
        assert!(cache
            .get::<Vec<PermissionDefinition>>(keys::CATALOG)
            .await
            .is_none());
        assert!(service.list().await.unwrap().is_empty());
    }
}
