//! OpenAPI document for the portal API.

use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::handlers;
use crate::models::permission::{
    CreatePermissionRequest, PermissionListResponse, PermissionResponse,
};
use crate::models::query::{CanIResponse, CapabilitiesResponse};
use crate::models::user::{
    AssignPermissionRequest, ReplacePermissionsRequest, UserListResponse, UserResponse,
};

/// The generated OpenAPI document, served at `/docs/openapi.json`.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Fleetport Portal API",
        description = "Role-based fleet management portal: permission catalog, user grants, and authorization queries."
    ),
    paths(
        handlers::permissions::list_permissions,
        handlers::permissions::create_permission,
        handlers::permissions::delete_permission,
        handlers::users::list_users,
        handlers::users::get_user,
        handlers::users::get_capabilities,
        handlers::users::replace_permissions,
        handlers::users::assign_permission,
        handlers::users::revoke_permission,
        handlers::query::can_i,
    ),
    components(schemas(
        CreatePermissionRequest,
        PermissionResponse,
        PermissionListResponse,
        UserResponse,
        UserListResponse,
        ReplacePermissionsRequest,
        AssignPermissionRequest,
        CapabilitiesResponse,
        CanIResponse,
    )),
    modifiers(&SecurityAddon),
    tags(
        (name = "Permissions", description = "Permission catalog management"),
        (name = "Users", description = "User accounts and permission grants"),
        (name = "Authorization", description = "Authorization queries")
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            );
        }
    }
}
