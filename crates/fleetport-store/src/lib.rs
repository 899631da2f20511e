//! Persistence seam for the Fleetport portal.
//!
//! The portal treats its record store as an external collaborator: services
//! depend on the [`UserStore`] and [`PermissionStore`] traits, never on a
//! concrete database. The in-memory implementations back tests and
//! single-node deployments.

pub mod error;
pub mod memory;
pub mod models;
pub mod traits;

pub use error::StoreError;
pub use memory::{InMemoryPermissionStore, InMemoryUserStore};
pub use models::{PermissionDefinition, User};
pub use traits::{PermissionStore, UserStore};
