//! Handlers for permission catalog CRUD.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::{Extension, Json};

use fleetport_core::PermissionName;

use crate::auth::JwtClaims;
use crate::error::{ApiError, ApiResult};
use crate::models::permission::{
    CreatePermissionRequest, PermissionListResponse, PermissionResponse,
};
use crate::router::PortalState;

/// List the permission catalog.
#[utoipa::path(
    get,
    path = "/permissions",
    tag = "Permissions",
    responses(
        (status = 200, description = "Catalog entries sorted by name", body = PermissionListResponse),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden"),
        (status = 500, description = "Internal server error")
    ),
    security(("bearer_auth" = []))
)]
pub async fn list_permissions(
    State(state): State<PortalState>,
    Extension(claims): Extension<JwtClaims>,
) -> ApiResult<Json<PermissionListResponse>> {
    if !claims.is_admin() {
        return Err(ApiError::Forbidden);
    }

    let definitions = state.catalog.list().await?;
    let items: Vec<PermissionResponse> =
        definitions.into_iter().map(PermissionResponse::from).collect();
    let total = items.len();

    Ok(Json(PermissionListResponse { items, total }))
}

/// Create a catalog permission.
#[utoipa::path(
    post,
    path = "/permissions",
    tag = "Permissions",
    request_body = CreatePermissionRequest,
    responses(
        (status = 201, description = "Permission created", body = PermissionResponse),
        (status = 400, description = "Invalid or duplicate permission name"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden"),
        (status = 500, description = "Internal server error")
    ),
    security(("bearer_auth" = []))
)]
pub async fn create_permission(
    State(state): State<PortalState>,
    Extension(claims): Extension<JwtClaims>,
    Json(request): Json<CreatePermissionRequest>,
) -> ApiResult<(StatusCode, Json<PermissionResponse>)> {
    if !claims.is_admin() {
        return Err(ApiError::Forbidden);
    }

    let name = PermissionName::new(request.permission_name)?;
    let definition = state.catalog.create(name, request.description).await?;

    Ok((StatusCode::CREATED, Json(PermissionResponse::from(definition))))
}

/// Delete a catalog permission by name.
///
/// Existing user grants referencing the name are left in place.
#[utoipa::path(
    delete,
    path = "/permissions/{name}",
    tag = "Permissions",
    params(
        ("name" = String, Path, description = "Permission name")
    ),
    responses(
        (status = 204, description = "Permission deleted"),
        (status = 400, description = "Invalid permission name"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden"),
        (status = 404, description = "Permission not found"),
        (status = 500, description = "Internal server error")
    ),
    security(("bearer_auth" = []))
)]
pub async fn delete_permission(
    State(state): State<PortalState>,
    Extension(claims): Extension<JwtClaims>,
    Path(name): Path<String>,
) -> ApiResult<StatusCode> {
    if !claims.is_admin() {
        return Err(ApiError::Forbidden);
    }

    let name = PermissionName::new(name)?;
    state.catalog.delete(&name).await?;

    Ok(StatusCode::NO_CONTENT)
}
