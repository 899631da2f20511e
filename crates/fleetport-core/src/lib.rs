//! Core domain types shared across the Fleetport portal backend.
//!
//! Provides strongly typed identifiers, the fixed account role enum, and the
//! validated permission-name newtype used both for catalog entries and for
//! requested actions.

pub mod ids;
pub mod permission;
pub mod role;

pub use ids::{ParseIdError, UserId};
pub use permission::{InvalidPermissionName, PermissionName};
pub use role::{Role, UnknownRole};
