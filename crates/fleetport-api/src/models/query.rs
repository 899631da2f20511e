//! DTOs for authorization queries.

use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;

/// Query parameters for the self-service authorization check.
#[derive(Debug, Clone, Deserialize, IntoParams)]
pub struct CanIQuery {
    /// The action label to test, matched exactly against the caller's
    /// effective capability set.
    pub action: String,
}

/// Result of an authorization check.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CanIResponse {
    /// Whether the action is allowed.
    pub allowed: bool,

    /// The action that was tested.
    pub action: String,
}

/// A user's resolved effective capability set.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CapabilitiesResponse {
    /// The account the set was resolved for.
    pub user_id: Uuid,

    /// Effective capabilities (role defaults plus custom grants), sorted.
    pub capabilities: Vec<String>,
}
