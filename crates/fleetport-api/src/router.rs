//! Router configuration for the portal API.

use std::sync::Arc;

use axum::routing::{delete, get, patch};
use axum::Router;

use fleetport_authz::{AccessResolver, CatalogService, GrantService, RoleDefaults};
use fleetport_cache::CacheLayer;
use fleetport_store::{PermissionStore, UserStore};

use crate::handlers;

/// Shared state for all portal API handlers.
#[derive(Clone)]
pub struct PortalState {
    /// User account store.
    pub users: Arc<dyn UserStore>,

    /// Permission catalog service.
    pub catalog: Arc<CatalogService>,

    /// Grant mutation service.
    pub grants: Arc<GrantService>,

    /// Authorization resolver.
    pub resolver: Arc<AccessResolver>,
}

impl PortalState {
    /// Wire the services over injected stores and cache.
    pub fn new(
        users: Arc<dyn UserStore>,
        permissions: Arc<dyn PermissionStore>,
        cache: CacheLayer,
        defaults: Arc<RoleDefaults>,
    ) -> Self {
        Self {
            catalog: Arc::new(CatalogService::new(permissions, cache.clone())),
            grants: Arc::new(GrantService::new(users.clone(), cache.clone())),
            resolver: Arc::new(AccessResolver::new(users.clone(), cache, defaults)),
            users,
        }
    }
}

/// Create the portal router with all endpoints.
///
/// # Routes
///
/// ## Permission catalog (admin)
/// - `GET    /permissions`                        - List catalog
/// - `POST   /permissions`                        - Create permission
/// - `DELETE /permissions/:name`                  - Delete permission
///
/// ## Users & grants (admin)
/// - `GET    /users`                              - List users
/// - `GET    /users/:id`                          - Get user
/// - `GET    /users/:id/capabilities`             - Resolved capability set
/// - `PATCH  /users/:id/permissions`              - Bulk-replace grants
/// - `POST   /users/:id/permissions`              - Assign one grant
/// - `DELETE /users/:id/permissions/:name`        - Revoke one grant
///
/// ## Query API
/// - `GET    /authz/can-i`                        - Check the caller's authorization
pub fn portal_router(state: PortalState) -> Router {
    Router::new()
        .route(
            "/permissions",
            get(handlers::permissions::list_permissions)
                .post(handlers::permissions::create_permission),
        )
        .route(
            "/permissions/:name",
            delete(handlers::permissions::delete_permission),
        )
        .route("/users", get(handlers::users::list_users))
        .route("/users/:id", get(handlers::users::get_user))
        .route(
            "/users/:id/capabilities",
            get(handlers::users::get_capabilities),
        )
        .route(
            "/users/:id/permissions",
            patch(handlers::users::replace_permissions).post(handlers::users::assign_permission),
        )
        .route(
            "/users/:id/permissions/:name",
            delete(handlers::users::revoke_permission),
        )
        .route("/authz/can-i", get(handlers::query::can_i))
        .with_state(state)
}
