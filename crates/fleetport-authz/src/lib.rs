//! Authorization resolution for the Fleetport portal.
//!
//! A user's effective capability set is the union of their role's default
//! capabilities and their individually granted custom permissions. This
//! crate owns that computation ([`AccessResolver`]), the permission catalog
//! ([`CatalogService`]), and grant mutation ([`GrantService`]).
//!
//! The catalog is advisory: grants are not validated against it, and
//! deleting a catalog entry does not revoke grants that reference it.

pub mod catalog;
pub mod defaults;
pub mod error;
pub mod grants;
pub mod keys;
pub mod resolver;

pub use catalog::CatalogService;
pub use defaults::RoleDefaults;
pub use error::{AuthzError, AuthzResult};
pub use grants::GrantService;
pub use resolver::AccessResolver;
