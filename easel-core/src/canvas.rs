//! The canvas aggregate: an ordered set of items plus canvas metadata.
//!
//! Every mutation entry point validates its inputs and re-establishes the
//! canvas invariants before returning:
//!
//! - item IDs are unique,
//! - z-indices form exactly `{0..N-1}`,
//! - the item sequence is ordered by ascending z-index,
//! - locked items only change through an explicit unlock,
//! - opacity stays in `[0, 1]` and sizes stay positive.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{CanvasError, CanvasResult};
use crate::item::{Extent, Item, ItemId, Point};

/// Unique identifier for a canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CanvasId(Uuid);

impl CanvasId {
    /// Create a new unique canvas ID.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Create from an existing UUID.
    #[must_use]
    pub const fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Parse an ID from its string form.
    ///
    /// # Errors
    ///
    /// Returns an error if the string is not a valid UUID.
    pub fn parse(s: &str) -> Result<Self, uuid::Error> {
        Ok(Self(Uuid::parse_str(s)?))
    }
}

impl Default for CanvasId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for CanvasId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Canvas background style. Content is opaque to the editing engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data", rename_all = "lowercase")]
pub enum Background {
    /// Solid color as hex.
    Color(String),
    /// Tiled or stretched image.
    Image {
        /// Image source URI.
        src: String,
    },
}

impl Default for Background {
    fn default() -> Self {
        Self::Color("#ffffff".to_string())
    }
}

/// The editable canvas: ordered items, background and bounds.
///
/// The item sequence is always sorted by ascending z-index, and z-indices
/// are always contiguous from 0. Mutations that would violate an invariant
/// are rejected wholesale, leaving the canvas unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Canvas {
    /// Unique identifier.
    pub id: CanvasId,
    /// Display name.
    pub name: String,
    /// Items ordered by ascending z-index.
    items: Vec<Item>,
    /// Background style.
    pub background: Background,
    /// Canvas bounds.
    pub size: Extent,
}

impl Canvas {
    /// Create a new empty canvas.
    #[must_use]
    pub fn new(name: impl Into<String>, size: Extent) -> Self {
        Self {
            id: CanvasId::new(),
            name: name.into(),
            items: Vec::new(),
            background: Background::default(),
            size,
        }
    }

    /// Assemble a canvas from already-validated parts.
    pub(crate) fn from_parts(
        id: CanvasId,
        name: String,
        size: Extent,
        background: Background,
        items: Vec<Item>,
    ) -> Self {
        Self {
            id,
            name,
            items,
            background,
            size,
        }
    }

    /// Items in ascending z-order.
    #[must_use]
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Get an item by ID.
    #[must_use]
    pub fn item(&self, id: ItemId) -> Option<&Item> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Check whether an item with the given ID exists.
    #[must_use]
    pub fn contains(&self, id: ItemId) -> bool {
        self.item(id).is_some()
    }

    /// Number of items on the canvas.
    #[must_use]
    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// Check if the canvas has no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Find the item at the given canvas coordinates.
    /// Returns the topmost (highest z-index) item containing the point.
    #[must_use]
    pub fn item_at(&self, x: f32, y: f32) -> Option<ItemId> {
        self.items
            .iter()
            .rev()
            .find(|item| item.contains_point(x, y))
            .map(|item| item.id)
    }

    /// Add an item on top of the stack (`z = N`).
    ///
    /// The item's opacity is clamped on the way in.
    ///
    /// # Errors
    ///
    /// Returns [`CanvasError::DuplicateItem`] if the ID is already present,
    /// or [`CanvasError::InvalidSize`] if a dimension is not positive.
    pub fn add_item(&mut self, item: Item) -> CanvasResult<ItemId> {
        let top = self.items.len();
        self.insert_item(item, top)
    }

    /// Insert an item at an explicit z position in `[0, N]`.
    ///
    /// Items at or above the insertion point shift up by one.
    ///
    /// # Errors
    ///
    /// Returns [`CanvasError::ZIndexOutOfRange`] if `z > N`, and the same
    /// errors as [`Canvas::add_item`] otherwise.
    pub fn insert_item(&mut self, mut item: Item, z: usize) -> CanvasResult<ItemId> {
        if z > self.items.len() {
            return Err(CanvasError::ZIndexOutOfRange {
                index: z,
                count: self.items.len(),
            });
        }
        if self.contains(item.id) {
            return Err(CanvasError::DuplicateItem(item.id.to_string()));
        }
        if !item.size.is_positive() {
            return Err(CanvasError::InvalidSize {
                width: item.size.width,
                height: item.size.height,
            });
        }
        item.opacity = item.opacity.clamp(0.0, 1.0);
        let id = item.id;
        self.items.insert(z, item);
        self.reindex();
        Ok(id)
    }

    /// Remove an item, closing its z slot (items above shift down by one).
    ///
    /// # Errors
    ///
    /// Returns [`CanvasError::ItemNotFound`] if the ID is unknown, or
    /// [`CanvasError::ItemLocked`] if the item is locked.
    pub fn remove_item(&mut self, id: ItemId) -> CanvasResult<Item> {
        let index = self.index_of(id)?;
        if self.items[index].locked {
            return Err(CanvasError::ItemLocked(id.to_string()));
        }
        let removed = self.items.remove(index);
        self.reindex();
        Ok(removed)
    }

    /// Set an item's position.
    ///
    /// # Errors
    ///
    /// Returns [`CanvasError::ItemNotFound`] or [`CanvasError::ItemLocked`].
    pub fn set_position(&mut self, id: ItemId, position: Point) -> CanvasResult<()> {
        let item = self.item_mut_unlocked(id)?;
        item.position = position;
        Ok(())
    }

    /// Set an item's size. Both dimensions must be positive; otherwise the
    /// whole operation is rejected and the item is unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`CanvasError::ItemNotFound`], [`CanvasError::ItemLocked`] or
    /// [`CanvasError::InvalidSize`].
    pub fn set_size(&mut self, id: ItemId, size: Extent) -> CanvasResult<()> {
        if !size.is_positive() {
            return Err(CanvasError::InvalidSize {
                width: size.width,
                height: size.height,
            });
        }
        let item = self.item_mut_unlocked(id)?;
        item.size = size;
        Ok(())
    }

    /// Set an item's rotation in degrees. Any value is accepted.
    ///
    /// # Errors
    ///
    /// Returns [`CanvasError::ItemNotFound`] or [`CanvasError::ItemLocked`].
    pub fn set_rotation(&mut self, id: ItemId, degrees: f32) -> CanvasResult<()> {
        let item = self.item_mut_unlocked(id)?;
        item.rotation = degrees;
        Ok(())
    }

    /// Set an item's opacity, clamped to `[0.0, 1.0]`.
    ///
    /// # Errors
    ///
    /// Returns [`CanvasError::ItemNotFound`] or [`CanvasError::ItemLocked`].
    pub fn set_opacity(&mut self, id: ItemId, opacity: f32) -> CanvasResult<()> {
        let item = self.item_mut_unlocked(id)?;
        item.opacity = opacity.clamp(0.0, 1.0);
        Ok(())
    }

    /// Move an item to a new z position in `[0, N-1]`.
    ///
    /// This is a single-position shift: the item is lifted out of its slot
    /// and reinserted, so every item between the old and new position moves
    /// by exactly one. Never a raw overwrite.
    ///
    /// # Errors
    ///
    /// Returns [`CanvasError::ItemNotFound`], [`CanvasError::ItemLocked`] or
    /// [`CanvasError::ZIndexOutOfRange`].
    pub fn set_z_index(&mut self, id: ItemId, z: usize) -> CanvasResult<()> {
        let index = self.index_of(id)?;
        if self.items[index].locked {
            return Err(CanvasError::ItemLocked(id.to_string()));
        }
        if z >= self.items.len() {
            return Err(CanvasError::ZIndexOutOfRange {
                index: z,
                count: self.items.len(),
            });
        }
        if z != index {
            let item = self.items.remove(index);
            self.items.insert(z, item);
            self.reindex();
        }
        Ok(())
    }

    /// Toggle an item's lock flag. Always permitted: this is the only
    /// mutation a locked item accepts.
    ///
    /// # Errors
    ///
    /// Returns [`CanvasError::ItemNotFound`] if the ID is unknown.
    pub fn toggle_lock(&mut self, id: ItemId) -> CanvasResult<bool> {
        let item = self
            .items
            .iter_mut()
            .find(|item| item.id == id)
            .ok_or_else(|| CanvasError::ItemNotFound(id.to_string()))?;
        item.locked = !item.locked;
        Ok(item.locked)
    }

    /// Set the canvas background.
    pub fn set_background(&mut self, background: Background) {
        self.background = background;
    }

    /// Rename the canvas.
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Resize the canvas bounds. Item positions are not adjusted.
    pub fn resize(&mut self, size: Extent) {
        self.size = size;
    }

    /// Serialize the canvas to JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json(&self) -> CanvasResult<String> {
        serde_json::to_string(self).map_err(CanvasError::Serialization)
    }

    /// Deserialize a canvas from JSON, re-validating every invariant.
    ///
    /// # Errors
    ///
    /// Returns [`CanvasError::Serialization`] if the JSON is malformed, or
    /// [`CanvasError::InvalidDocument`] if the decoded canvas violates an
    /// invariant.
    pub fn from_json(json: &str) -> CanvasResult<Self> {
        let canvas: Self = serde_json::from_str(json)?;
        canvas.validate()?;
        Ok(canvas)
    }

    /// Check every canvas invariant, for canvases built from external data.
    pub(crate) fn validate(&self) -> CanvasResult<()> {
        let mut seen = HashSet::new();
        for (index, item) in self.items.iter().enumerate() {
            if !seen.insert(item.id) {
                return Err(CanvasError::InvalidDocument(format!(
                    "duplicate item id {}",
                    item.id
                )));
            }
            if item.z_index != index {
                return Err(CanvasError::InvalidDocument(format!(
                    "item {} has z-index {} at sequence position {index}",
                    item.id, item.z_index
                )));
            }
            if !item.size.is_positive() {
                return Err(CanvasError::InvalidDocument(format!(
                    "item {} has non-positive size {}x{}",
                    item.id, item.size.width, item.size.height
                )));
            }
            if !(0.0..=1.0).contains(&item.opacity) {
                return Err(CanvasError::InvalidDocument(format!(
                    "item {} has opacity {} outside [0, 1]",
                    item.id, item.opacity
                )));
            }
        }
        Ok(())
    }

    /// Sequence position of an item.
    fn index_of(&self, id: ItemId) -> CanvasResult<usize> {
        self.items
            .iter()
            .position(|item| item.id == id)
            .ok_or_else(|| CanvasError::ItemNotFound(id.to_string()))
    }

    /// Mutable access to an item, rejecting locked targets.
    fn item_mut_unlocked(&mut self, id: ItemId) -> CanvasResult<&mut Item> {
        let item = self
            .items
            .iter_mut()
            .find(|item| item.id == id)
            .ok_or_else(|| CanvasError::ItemNotFound(id.to_string()))?;
        if item.locked {
            return Err(CanvasError::ItemLocked(id.to_string()));
        }
        Ok(item)
    }

    /// Re-establish `z_index == sequence position` after a structural change.
    fn reindex(&mut self) {
        for (index, item) in self.items.iter_mut().enumerate() {
            item.z_index = index;
        }
    }
}
