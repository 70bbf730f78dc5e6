//! Serializable edit intents issued by a user interface.
//!
//! Each variant maps one-to-one onto a typed [`Editor`](crate::Editor)
//! method; [`Editor::apply`](crate::Editor::apply) dispatches them. The enum
//! exists so a UI layer can queue, log or replay intents without linking
//! against the typed surface.

use serde::{Deserialize, Serialize};

use crate::canvas::Background;
use crate::item::{Extent, Item, ItemId, Point};

/// A discrete edit operation against the current canvas.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", content = "data", rename_all = "snake_case")]
pub enum EditOp {
    /// Add an item on top of the stack.
    AddItem {
        /// The item to add.
        item: Item,
    },
    /// Remove an item, closing its z slot.
    RemoveItem {
        /// Target item.
        id: ItemId,
    },
    /// Move an item.
    SetPosition {
        /// Target item.
        id: ItemId,
        /// New position.
        position: Point,
    },
    /// Resize an item. Both dimensions must be positive.
    SetSize {
        /// Target item.
        id: ItemId,
        /// New size.
        size: Extent,
    },
    /// Rotate an item.
    SetRotation {
        /// Target item.
        id: ItemId,
        /// New rotation in degrees.
        degrees: f32,
    },
    /// Change an item's opacity (clamped to `[0, 1]`).
    SetOpacity {
        /// Target item.
        id: ItemId,
        /// New opacity.
        opacity: f32,
    },
    /// Move an item to a new layer position.
    SetZIndex {
        /// Target item.
        id: ItemId,
        /// New z-index in `[0, N-1]`.
        z_index: usize,
    },
    /// Toggle an item's lock flag.
    ToggleLock {
        /// Target item.
        id: ItemId,
    },
    /// Replace the canvas background.
    SetBackground {
        /// New background.
        background: Background,
    },
    /// Rename the canvas.
    SetName {
        /// New display name.
        name: String,
    },
    /// Resize the canvas bounds.
    ResizeCanvas {
        /// New bounds.
        size: Extent,
    },
}
