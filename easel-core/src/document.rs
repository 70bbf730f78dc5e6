//! Canonical serialized representation of a canvas.
//!
//! Documents are the immutable snapshots handed across the collaborator
//! boundary: persistence receives them, rendering reads them. Items are
//! always emitted in ascending z-order, and loading re-validates every
//! canvas invariant so external data can never corrupt a session.

use serde::{Deserialize, Serialize};

use crate::canvas::{Background, Canvas, CanvasId};
use crate::error::{CanvasError, CanvasResult};
use crate::item::{Extent, Item, ItemId, ItemKind, Point};

/// Document-friendly item description.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemDocument {
    /// Item identifier.
    pub id: String,
    /// Item content.
    pub kind: ItemKind,
    /// Position of the top-left corner.
    #[serde(default)]
    pub position: Point,
    /// Item size.
    pub size: Extent,
    /// Rotation in degrees.
    #[serde(default)]
    pub rotation: f32,
    /// Opacity.
    #[serde(default = "ItemDocument::default_opacity")]
    pub opacity: f32,
    /// Layering rank.
    pub z_index: usize,
    /// Lock flag.
    #[serde(default)]
    pub locked: bool,
}

impl From<&Item> for ItemDocument {
    fn from(item: &Item) -> Self {
        Self {
            id: item.id.to_string(),
            kind: item.kind.clone(),
            position: item.position,
            size: item.size,
            rotation: item.rotation,
            opacity: item.opacity,
            z_index: item.z_index,
            locked: item.locked,
        }
    }
}

impl ItemDocument {
    const fn default_opacity() -> f32 {
        1.0
    }

    /// Convert the document to a runtime item. Opacity is clamped on the
    /// way in; size and z-order violations surface when the owning canvas
    /// document is validated.
    ///
    /// # Errors
    ///
    /// Returns [`CanvasError::InvalidId`] if the item id is not a valid
    /// UUID.
    pub fn into_item(self) -> CanvasResult<Item> {
        let id = ItemId::parse(&self.id).map_err(|e| CanvasError::InvalidId(e.to_string()))?;
        Ok(Item {
            id,
            kind: self.kind,
            position: self.position,
            size: self.size,
            rotation: self.rotation,
            opacity: self.opacity.clamp(0.0, 1.0),
            z_index: self.z_index,
            locked: self.locked,
        })
    }
}

/// Canonical canvas document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CanvasDocument {
    /// Canvas identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Canvas bounds.
    pub size: Extent,
    /// Background style.
    #[serde(default)]
    pub background: Background,
    /// Items in ascending z-order.
    pub items: Vec<ItemDocument>,
}

impl CanvasDocument {
    /// Build a document from a live canvas.
    #[must_use]
    pub fn from_canvas(canvas: &Canvas) -> Self {
        let mut items: Vec<_> = canvas.items().iter().map(ItemDocument::from).collect();
        items.sort_by_key(|doc| doc.z_index);
        Self {
            id: canvas.id.to_string(),
            name: canvas.name.clone(),
            size: canvas.size,
            background: canvas.background.clone(),
            items,
        }
    }

    /// Materialize the document as a runtime canvas, re-validating every
    /// invariant.
    ///
    /// # Errors
    ///
    /// Returns [`CanvasError::InvalidId`] for unparseable identifiers and
    /// [`CanvasError::InvalidDocument`] for duplicate ids, non-contiguous
    /// z-indices or non-positive sizes.
    pub fn into_canvas(self) -> CanvasResult<Canvas> {
        let id = CanvasId::parse(&self.id).map_err(|e| CanvasError::InvalidId(e.to_string()))?;
        let mut items = self
            .items
            .into_iter()
            .map(ItemDocument::into_item)
            .collect::<CanvasResult<Vec<_>>>()?;
        items.sort_by_key(|item| item.z_index);

        let canvas = Canvas::from_parts(id, self.name, self.size, self.background, items);
        canvas.validate()?;
        Ok(canvas)
    }

    /// Serialize the document to JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json(&self) -> CanvasResult<String> {
        serde_json::to_string(self).map_err(CanvasError::Serialization)
    }

    /// Deserialize a document from JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if deserialization fails.
    pub fn from_json(json: &str) -> CanvasResult<Self> {
        serde_json::from_str(json).map_err(CanvasError::Serialization)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::ShapeKind;

    fn canvas_with_items() -> Canvas {
        let mut canvas = Canvas::new("doc test", Extent::new(640.0, 480.0));
        for fill in ["#111111", "#222222", "#333333"] {
            canvas
                .add_item(
                    Item::new(ItemKind::Shape {
                        shape: ShapeKind::Rectangle,
                        fill: fill.to_string(),
                    })
                    .with_position(Point::new(10.0, 10.0)),
                )
                .expect("add");
        }
        canvas
    }

    #[test]
    fn test_document_round_trip() {
        let canvas = canvas_with_items();
        let document = CanvasDocument::from_canvas(&canvas);
        let json = document.to_json().expect("serialize");
        let decoded = CanvasDocument::from_json(&json).expect("deserialize");
        let restored = decoded.into_canvas().expect("materialize");
        assert_eq!(canvas, restored);
    }

    #[test]
    fn test_items_emitted_in_z_order() {
        let mut canvas = canvas_with_items();
        let bottom = canvas.items()[0].id;
        canvas.set_z_index(bottom, 2).expect("raise");

        let document = CanvasDocument::from_canvas(&canvas);
        let zs: Vec<_> = document.items.iter().map(|doc| doc.z_index).collect();
        assert_eq!(zs, vec![0, 1, 2]);
        assert_eq!(document.items[2].id, bottom.to_string());
    }

    #[test]
    fn test_into_canvas_rejects_bad_id() {
        let canvas = canvas_with_items();
        let mut document = CanvasDocument::from_canvas(&canvas);
        document.items[0].id = "not-a-uuid".to_string();

        let err = document.into_canvas().expect_err("bad id");
        assert!(matches!(err, CanvasError::InvalidId(_)));
    }

    #[test]
    fn test_into_canvas_rejects_z_gap() {
        let canvas = canvas_with_items();
        let mut document = CanvasDocument::from_canvas(&canvas);
        document.items[1].z_index = 7;

        let err = document.into_canvas().expect_err("gap");
        assert!(matches!(err, CanvasError::InvalidDocument(_)));
    }

    #[test]
    fn test_into_canvas_clamps_opacity() {
        let canvas = canvas_with_items();
        let mut document = CanvasDocument::from_canvas(&canvas);
        document.items[0].opacity = 3.5;

        let restored = document.into_canvas().expect("materialize");
        assert!((restored.items()[0].opacity - 1.0).abs() < f32::EPSILON);
    }
}
