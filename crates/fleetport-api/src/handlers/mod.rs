//! HTTP handlers.

pub mod permissions;
pub mod query;
pub mod users;
