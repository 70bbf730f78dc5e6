//! Error types for canvas editing operations.

use thiserror::Error;

/// Result type for canvas editing operations.
pub type CanvasResult<T> = Result<T, CanvasError>;

/// Errors that can occur while mutating or loading a canvas.
///
/// Validation rejections leave the canvas and its history untouched; none of
/// these conditions is fatal to the editing session.
#[derive(Debug, Error)]
pub enum CanvasError {
    /// No item with the given ID exists on the canvas.
    #[error("Item not found: {0}")]
    ItemNotFound(String),

    /// The target item is locked and the operation is not an unlock.
    #[error("Item is locked: {0}")]
    ItemLocked(String),

    /// An item with the given ID is already on the canvas.
    #[error("Duplicate item id: {0}")]
    DuplicateItem(String),

    /// An item size with a non-positive dimension was rejected.
    #[error("Invalid size {width}x{height}: both dimensions must be positive")]
    InvalidSize {
        /// Rejected width.
        width: f32,
        /// Rejected height.
        height: f32,
    },

    /// A z-index outside the valid range for the canvas was rejected.
    #[error("Z-index {index} out of range for {count} item(s)")]
    ZIndexOutOfRange {
        /// Requested z-index.
        index: usize,
        /// Number of items on the canvas.
        count: usize,
    },

    /// An identifier in a document could not be parsed.
    #[error("Invalid identifier: {0}")]
    InvalidId(String),

    /// A loaded document violates a canvas invariant.
    #[error("Invalid document: {0}")]
    InvalidDocument(String),

    /// Canvas serialization/deserialization error.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
