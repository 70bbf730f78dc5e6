//! Rendering collaborator contract.
//!
//! The core never rasterizes anything. It exposes the current canvas as a
//! [`CanvasDocument`] (items in ascending z-order, background, bounds) and
//! leaves producing pixels or vector output to a [`CanvasRenderer`]
//! implementation.

use thiserror::Error;

use crate::document::CanvasDocument;

/// Result type for rendering operations.
pub type RenderResult<T> = Result<T, RenderError>;

/// Errors that can occur while rendering a canvas snapshot.
#[derive(Debug, Error)]
pub enum RenderError {
    /// No suitable rendering backend available.
    #[error("No rendering backend available: {0}")]
    NoBackend(String),

    /// Resource loading failed (image source, font).
    #[error("Failed to load resource: {0}")]
    Resource(String),

    /// Producing the output surface failed.
    #[error("Frame render failed: {0}")]
    Frame(String),
}

/// Renders canvas snapshots to an encoded surface.
pub trait CanvasRenderer {
    /// Render a snapshot at the given target size in pixels, returning the
    /// encoded surface (raster image or vector document) as bytes.
    ///
    /// # Errors
    ///
    /// Returns a [`RenderError`] if the surface could not be produced. A
    /// failed render never affects the editing session.
    fn render(
        &mut self,
        document: &CanvasDocument,
        width: u32,
        height: u32,
    ) -> RenderResult<Vec<u8>>;
}
