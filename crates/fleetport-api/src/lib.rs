//! REST API surface of the Fleetport portal.
//!
//! Routes, handlers, and request/response DTOs over the services in
//! `fleetport-authz`. Authentication is a bearer-token middleware that
//! verifies HS256 JWTs minted by the external identity service.

pub mod auth;
pub mod error;
pub mod handlers;
pub mod models;
pub mod openapi;
pub mod router;

pub use auth::{jwt_auth_middleware, JwtClaims, JwtVerifier};
pub use error::{ApiError, ApiResult};
pub use openapi::ApiDoc;
pub use router::{portal_router, PortalState};
