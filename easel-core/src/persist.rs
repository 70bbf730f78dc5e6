//! Persistence collaborator contract.
//!
//! The core never talks to storage directly: it hands an owned, immutable
//! [`CanvasDocument`] snapshot to a [`CanvasStorage`] implementation and
//! awaits an opaque identifier. A failed save is recoverable and never
//! disturbs the in-memory canvas or its history.

use async_trait::async_trait;
use thiserror::Error;

use crate::document::CanvasDocument;

/// Result type for persistence operations.
pub type PersistResult<T> = Result<T, PersistError>;

/// Errors that can occur while persisting a canvas snapshot.
#[derive(Debug, Error)]
pub enum PersistError {
    /// The storage backend could not be reached.
    #[error("Storage unavailable: {0}")]
    Unavailable(String),

    /// The storage backend refused the document.
    #[error("Storage rejected the document: {0}")]
    Rejected(String),

    /// Snapshot serialization failed.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// An I/O error occurred while writing the snapshot.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Stores immutable canvas snapshots.
///
/// Implementations live outside the core (a remote backend, the local
/// filesystem, a test double). The document passed in is a completed
/// snapshot: it never aliases the live canvas, so a slow save can never
/// observe a concurrent mutation.
#[async_trait]
pub trait CanvasStorage: Send + Sync {
    /// Persist a snapshot, returning an opaque identifier for the stored
    /// canvas.
    ///
    /// # Errors
    ///
    /// Returns a [`PersistError`] if the snapshot could not be stored.
    async fn save(&self, document: &CanvasDocument) -> PersistResult<String>;
}
