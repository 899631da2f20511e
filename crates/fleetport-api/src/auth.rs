//! Bearer-token authentication.
//!
//! The portal does not issue tokens; an external identity service signs
//! HS256 JWTs carrying the account id and role. The middleware verifies the
//! token and inserts [`JwtClaims`] as a request extension for handlers.

use axum::extract::Request;
use axum::http::header::AUTHORIZATION;
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use fleetport_core::{Role, UserId};

use crate::error::ApiError;

/// Verified claims of a portal access token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JwtClaims {
    /// Account id (UUID string).
    pub sub: String,

    /// The account's fixed role.
    pub role: Role,

    /// Expiry, seconds since the epoch.
    pub exp: usize,

    /// Issued-at, seconds since the epoch.
    pub iat: usize,
}

impl JwtClaims {
    /// The caller's account id, if `sub` is a well-formed UUID.
    pub fn user_id(&self) -> Result<UserId, ApiError> {
        self.sub.parse().map_err(|_| ApiError::Unauthorized)
    }

    /// Whether the caller holds the platform admin role.
    #[must_use]
    pub fn is_admin(&self) -> bool {
        self.role == Role::PlatformAdmin
    }
}

/// Shared JWT verification state, cloned into the middleware per request.
#[derive(Clone)]
pub struct JwtVerifier {
    decoding_key: Arc<DecodingKey>,
    validation: Validation,
}

impl JwtVerifier {
    /// Build a verifier for HS256 tokens signed with `secret`.
    #[must_use]
    pub fn new(secret: &str) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;
        Self {
            decoding_key: Arc::new(DecodingKey::from_secret(secret.as_bytes())),
            validation,
        }
    }

    /// Verify a compact JWT and return its claims.
    pub fn verify(&self, token: &str) -> Result<JwtClaims, ApiError> {
        decode::<JwtClaims>(token, &self.decoding_key, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| {
                tracing::debug!(error = %e, "Token verification failed");
                ApiError::Unauthorized
            })
    }
}

/// Extract and verify the bearer token, inserting [`JwtClaims`] into request
/// extensions. Expects a [`JwtVerifier`] extension layered outside this
/// middleware.
pub async fn jwt_auth_middleware(mut req: Request, next: Next) -> Response {
    let Some(verifier) = req.extensions().get::<JwtVerifier>().cloned() else {
        tracing::error!("JwtVerifier extension missing; check router layering");
        return ApiError::Internal.into_response();
    };

    let token = req
        .headers()
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "));

    let Some(token) = token else {
        return ApiError::Unauthorized.into_response();
    };

    match verifier.verify(token) {
        Ok(claims) => {
            req.extensions_mut().insert(claims);
            next.run(req).await
        }
        Err(err) => err.into_response(),
    }
}
