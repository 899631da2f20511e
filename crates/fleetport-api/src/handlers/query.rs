//! Handler for the self-service authorization check.

use axum::extract::{Query, State};
use axum::{Extension, Json};

use crate::auth::JwtClaims;
use crate::error::ApiResult;
use crate::models::query::{CanIQuery, CanIResponse};
use crate::router::PortalState;

/// Check whether the calling user may perform an action.
///
/// Available to every authenticated role; the check always runs against the
/// caller's own account.
#[utoipa::path(
    get,
    path = "/authz/can-i",
    tag = "Authorization",
    params(CanIQuery),
    responses(
        (status = 200, description = "Authorization decision", body = CanIResponse),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Account no longer exists"),
        (status = 500, description = "Internal server error")
    ),
    security(("bearer_auth" = []))
)]
pub async fn can_i(
    State(state): State<PortalState>,
    Extension(claims): Extension<JwtClaims>,
    Query(query): Query<CanIQuery>,
) -> ApiResult<Json<CanIResponse>> {
    let user_id = claims.user_id()?;
    let allowed = state.resolver.is_authorized(user_id, &query.action).await?;

    Ok(Json(CanIResponse {
        allowed,
        action: query.action,
    }))
}
