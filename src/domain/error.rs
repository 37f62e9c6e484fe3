//! Error kinds shared by every store.

use thiserror::Error;

/// Failure of a store operation.
///
/// Every operation is all-or-nothing against its own store: when one of these is
/// returned, nothing was mutated.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Input failed a check performed by the store itself (e.g. wallet address shape).
    #[error("{0}")]
    Validation(String),
    /// The referenced key is absent from the store.
    #[error("{0}")]
    NotFound(String),
    /// The entity exists but is not in the state the operation requires.
    #[error("{0}")]
    Conflict(String),
    /// An external collaborator (chain, content store) failed.
    #[error("upstream failure: {0}")]
    Upstream(#[from] anyhow::Error),
}

pub type StoreResult<T> = Result<T, StoreError>;
