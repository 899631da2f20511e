//! Handlers for user accounts and grant mutation.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::{Extension, Json};
use uuid::Uuid;

use fleetport_core::{PermissionName, UserId};

use crate::auth::JwtClaims;
use crate::error::{ApiError, ApiResult};
use crate::models::query::CapabilitiesResponse;
use crate::models::user::{
    AssignPermissionRequest, ReplacePermissionsRequest, UserListResponse, UserResponse,
};
use crate::router::PortalState;

/// List all user accounts.
#[utoipa::path(
    get,
    path = "/users",
    tag = "Users",
    responses(
        (status = 200, description = "User accounts", body = UserListResponse),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden"),
        (status = 500, description = "Internal server error")
    ),
    security(("bearer_auth" = []))
)]
pub async fn list_users(
    State(state): State<PortalState>,
    Extension(claims): Extension<JwtClaims>,
) -> ApiResult<Json<UserListResponse>> {
    if !claims.is_admin() {
        return Err(ApiError::Forbidden);
    }

    let users = state.users.list().await?;
    let items: Vec<UserResponse> = users.into_iter().map(UserResponse::from).collect();
    let total = items.len();

    Ok(Json(UserListResponse { items, total }))
}

/// Get one user account.
#[utoipa::path(
    get,
    path = "/users/{id}",
    tag = "Users",
    params(
        ("id" = Uuid, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "User account", body = UserResponse),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden"),
        (status = 404, description = "User not found"),
        (status = 500, description = "Internal server error")
    ),
    security(("bearer_auth" = []))
)]
pub async fn get_user(
    State(state): State<PortalState>,
    Extension(claims): Extension<JwtClaims>,
    Path(id): Path<Uuid>,
) -> ApiResult<Json<UserResponse>> {
    if !claims.is_admin() {
        return Err(ApiError::Forbidden);
    }

    let user_id = UserId::from_uuid(id);
    let user = state
        .users
        .get(user_id)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("User not found: {user_id}")))?;

    Ok(Json(UserResponse::from(user)))
}

/// Resolve a user's effective capability set.
#[utoipa::path(
    get,
    path = "/users/{id}/capabilities",
    tag = "Users",
    params(
        ("id" = Uuid, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "Effective capabilities", body = CapabilitiesResponse),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden"),
        (status = 404, description = "User not found"),
        (status = 500, description = "Internal server error")
    ),
    security(("bearer_auth" = []))
)]
pub async fn get_capabilities(
    State(state): State<PortalState>,
    Extension(claims): Extension<JwtClaims>,
    Path(id): Path<Uuid>,
) -> ApiResult<Json<CapabilitiesResponse>> {
    if !claims.is_admin() {
        return Err(ApiError::Forbidden);
    }

    let user_id = UserId::from_uuid(id);
    let capabilities = state.resolver.effective_capabilities(user_id).await?;

    let mut names: Vec<String> = capabilities.into_iter().map(String::from).collect();
    names.sort();

    Ok(Json(CapabilitiesResponse {
        user_id: id,
        capabilities: names,
    }))
}

/// Bulk-replace a user's custom permission grants.
#[utoipa::path(
    patch,
    path = "/users/{id}/permissions",
    tag = "Users",
    params(
        ("id" = Uuid, Path, description = "User ID")
    ),
    request_body = ReplacePermissionsRequest,
    responses(
        (status = 200, description = "Updated user", body = UserResponse),
        (status = 400, description = "Invalid permission name"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden"),
        (status = 404, description = "User not found"),
        (status = 500, description = "Internal server error")
    ),
    security(("bearer_auth" = []))
)]
pub async fn replace_permissions(
    State(state): State<PortalState>,
    Extension(claims): Extension<JwtClaims>,
    Path(id): Path<Uuid>,
    Json(request): Json<ReplacePermissionsRequest>,
) -> ApiResult<Json<UserResponse>> {
    if !claims.is_admin() {
        return Err(ApiError::Forbidden);
    }

    let names = request
        .custom_permissions
        .into_iter()
        .map(PermissionName::new)
        .collect::<Result<Vec<_>, _>>()?;

    let user = state.grants.replace(UserId::from_uuid(id), names).await?;

    Ok(Json(UserResponse::from(user)))
}

/// Grant a single permission to a user.
#[utoipa::path(
    post,
    path = "/users/{id}/permissions",
    tag = "Users",
    params(
        ("id" = Uuid, Path, description = "User ID")
    ),
    request_body = AssignPermissionRequest,
    responses(
        (status = 201, description = "Updated user", body = UserResponse),
        (status = 400, description = "Invalid permission name"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden"),
        (status = 404, description = "User not found"),
        (status = 409, description = "Permission already granted"),
        (status = 500, description = "Internal server error")
    ),
    security(("bearer_auth" = []))
)]
pub async fn assign_permission(
    State(state): State<PortalState>,
    Extension(claims): Extension<JwtClaims>,
    Path(id): Path<Uuid>,
    Json(request): Json<AssignPermissionRequest>,
) -> ApiResult<(StatusCode, Json<UserResponse>)> {
    if !claims.is_admin() {
        return Err(ApiError::Forbidden);
    }

    let name = PermissionName::new(request.permission_name)?;
    let user = state.grants.assign(UserId::from_uuid(id), name).await?;

    Ok((StatusCode::CREATED, Json(UserResponse::from(user))))
}

/// Revoke a single permission from a user.
#[utoipa::path(
    delete,
    path = "/users/{id}/permissions/{name}",
    tag = "Users",
    params(
        ("id" = Uuid, Path, description = "User ID"),
        ("name" = String, Path, description = "Permission name")
    ),
    responses(
        (status = 204, description = "Grant revoked"),
        (status = 400, description = "Invalid permission name"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden"),
        (status = 404, description = "User or grant not found"),
        (status = 500, description = "Internal server error")
    ),
    security(("bearer_auth" = []))
)]
pub async fn revoke_permission(
    State(state): State<PortalState>,
    Extension(claims): Extension<JwtClaims>,
    Path((id, name)): Path<(Uuid, String)>,
) -> ApiResult<StatusCode> {
    if !claims.is_admin() {
        return Err(ApiError::Forbidden);
    }

    let name = PermissionName::new(name)?;
    state.grants.revoke(UserId::from_uuid(id), &name).await?;

    Ok(StatusCode::NO_CONTENT)
}
