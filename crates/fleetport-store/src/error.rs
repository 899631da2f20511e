//! Store error type.

/// Errors surfaced by the record store.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// A unique key (permission name) already exists.
    #[error("Duplicate key: {0}")]
    DuplicateKey(String),

    /// The store could not be reached or the operation was aborted.
    ///
    /// This always fails the surrounding operation; infrastructure failures
    /// are never interpreted as an authorization decision.
    #[error("Store unavailable: {0}")]
    Unavailable(String),
}
