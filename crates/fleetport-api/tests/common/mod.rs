//! Test helpers for fleetport-api integration tests.
//!
//! Provides an in-memory fixture wiring the stores, cache, and services the
//! way the server binary does, plus claims and token builders.

#![allow(dead_code)]

use std::sync::Arc;

use axum::Router;
use jsonwebtoken::{encode, Algorithm, EncodingKey, Header};

use fleetport_api::{jwt_auth_middleware, portal_router, JwtClaims, JwtVerifier, PortalState};
use fleetport_authz::RoleDefaults;
use fleetport_cache::{CacheLayer, MemoryCacheBackend};
use fleetport_core::{PermissionName, Role, UserId};
use fleetport_store::{InMemoryPermissionStore, InMemoryUserStore, User};

/// Signing secret shared by test tokens and the test verifier.
pub const TEST_JWT_SECRET: &str = "fleetport-test-secret";

/// Test fixture over in-memory stores.
pub struct TestFixture {
    pub users: Arc<InMemoryUserStore>,
    pub permissions: Arc<InMemoryPermissionStore>,
    pub cache: CacheLayer,
    pub state: PortalState,
}

impl TestFixture {
    pub fn new() -> Self {
        let users = Arc::new(InMemoryUserStore::new());
        let permissions = Arc::new(InMemoryPermissionStore::new());
        let cache = CacheLayer::new(Arc::new(MemoryCacheBackend::new()));
        let state = PortalState::new(
            users.clone(),
            permissions.clone(),
            cache.clone(),
            Arc::new(RoleDefaults::standard()),
        );

        Self {
            users,
            permissions,
            cache,
            state,
        }
    }

    /// Seed one account and return its id.
    pub async fn add_user(&self, name: &str, email: &str, role: Role) -> UserId {
        let user = User::new(name, email, role);
        let id = user.id;
        self.users.seed([user]).await;
        id
    }

    /// The full router with authentication layered, as served in production.
    pub fn app(&self) -> Router {
        portal_router(self.state.clone())
            .layer(axum::middleware::from_fn(jwt_auth_middleware))
            .layer(axum::Extension(JwtVerifier::new(TEST_JWT_SECRET)))
    }
}

/// Create claims for a user with the given role.
pub fn claims_for(user_id: UserId, role: Role) -> JwtClaims {
    let now = chrono::Utc::now().timestamp() as usize;
    JwtClaims {
        sub: user_id.to_string(),
        role,
        exp: now + 3600,
        iat: now,
    }
}

/// Mint a signed bearer token for the given claims.
pub fn mint_token(claims: &JwtClaims) -> String {
    encode(
        &Header::new(Algorithm::HS256),
        claims,
        &EncodingKey::from_secret(TEST_JWT_SECRET.as_bytes()),
    )
    .expect("Failed to sign test token")
}

/// Shorthand permission-name constructor for tests.
pub fn perm(name: &str) -> PermissionName {
    PermissionName::new(name).expect("Invalid test permission name")
}
