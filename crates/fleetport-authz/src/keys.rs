//! Cache key namespace.
//!
//! Every cached resource gets its own namespaced key so invalidations stay
//! independent: dropping a user's capability entry never disturbs the
//! catalog entry, and vice versa.

use fleetport_core::UserId;

/// Key for the full permission catalog snapshot.
pub const CATALOG: &str = "permissions:catalog";

/// Key for one user's resolved effective capability set.
#[must_use]
pub fn user_capabilities(user_id: &UserId) -> String {
    format!("users:{user_id}:capabilities")
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    #[test]
    fn capability_keys_embed_the_user_id() {
        let uuid = Uuid::parse_str("550e8400-e29b-41d4-a716-446655440000").unwrap();
        let id = UserId::from_uuid(uuid);
        assert_eq!(
            user_capabilities(&id),
            "users:550e8400-e29b-41d4-a716-446655440000:capabilities"
        );
    }

    #[test]
    fn namespaces_do_not_collide() {
        let id = UserId::new();
        assert_ne!(user_capabilities(&id), CATALOG);
    }
}
