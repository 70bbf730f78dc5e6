//! Canvas items - the building blocks of an editable canvas.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for an item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ItemId(Uuid);

impl ItemId {
    /// Create a new unique item ID.
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

impl Default for ItemId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for ItemId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A 2D point in canvas coordinates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    /// X position (pixels from left).
    pub x: f32,
    /// Y position (pixels from top).
    pub y: f32,
}

impl Point {
    /// Create a new point.
    #[must_use]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// A 2D extent (width and height).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Extent {
    /// Width in pixels.
    pub width: f32,
    /// Height in pixels.
    pub height: f32,
}

impl Extent {
    /// Create a new extent.
    #[must_use]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Check that both dimensions are strictly positive.
    #[must_use]
    pub fn is_positive(self) -> bool {
        self.width > 0.0 && self.height > 0.0
    }
}

/// Geometric form of a shape item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShapeKind {
    /// Axis-aligned rectangle filling the item bounds.
    Rectangle,
    /// Ellipse inscribed in the item bounds.
    Ellipse,
    /// Line from the top-left to the bottom-right of the item bounds.
    Line,
}

/// The type of content an item carries.
///
/// Content is opaque to the editing engine: mutation, z-order and history
/// code never match on these variants, so new kinds require no engine
/// changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum ItemKind {
    /// A raster or vector image.
    Image {
        /// Image source URI or base64 data.
        src: String,
    },

    /// A text label.
    Text {
        /// Text content.
        content: String,
        /// Font size in pixels.
        font_size: f32,
        /// Text color as hex.
        color: String,
    },

    /// A filled geometric shape.
    Shape {
        /// Geometric form.
        shape: ShapeKind,
        /// Fill color as hex.
        fill: String,
    },
}

/// A canvas item: content plus the shared transform/style attributes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    /// Unique identifier, immutable for the item's lifetime.
    pub id: ItemId,
    /// Item content.
    pub kind: ItemKind,
    /// Position of the top-left corner.
    pub position: Point,
    /// Size; both dimensions strictly positive for every committed item.
    pub size: Extent,
    /// Rotation in degrees. Any value is accepted; values differing by a
    /// multiple of 360 render identically but compare unequal.
    pub rotation: f32,
    /// Opacity, clamped to `[0.0, 1.0]` on every write.
    pub opacity: f32,
    /// Layering rank within the owning canvas, contiguous from 0.
    pub z_index: usize,
    /// When true, every mutating operation except unlock is rejected.
    pub locked: bool,
}

impl Item {
    /// Create a new item with the given kind and default attributes.
    #[must_use]
    pub fn new(kind: ItemKind) -> Self {
        Self {
            id: ItemId::new(),
            kind,
            position: Point::default(),
            size: Extent::new(100.0, 100.0),
            rotation: 0.0,
            opacity: 1.0,
            z_index: 0,
            locked: false,
        }
    }

    /// Set the position.
    #[must_use]
    pub fn with_position(mut self, position: Point) -> Self {
        self.position = position;
        self
    }

    /// Set the size.
    #[must_use]
    pub fn with_size(mut self, size: Extent) -> Self {
        self.size = size;
        self
    }

    /// Set the rotation in degrees.
    #[must_use]
    pub fn with_rotation(mut self, degrees: f32) -> Self {
        self.rotation = degrees;
        self
    }

    /// Set the opacity, clamped to `[0.0, 1.0]`.
    #[must_use]
    pub fn with_opacity(mut self, opacity: f32) -> Self {
        self.opacity = opacity.clamp(0.0, 1.0);
        self
    }

    /// Set the lock flag.
    #[must_use]
    pub fn with_locked(mut self, locked: bool) -> Self {
        self.locked = locked;
        self
    }

    /// Rotation folded into `[0, 360)` for rendering.
    #[must_use]
    pub fn normalized_rotation(&self) -> f32 {
        self.rotation.rem_euclid(360.0)
    }

    /// Check if a point (in canvas coordinates) is within this item's
    /// bounds. Rotation is ignored; hit testing uses the axis-aligned box.
    #[must_use]
    pub fn contains_point(&self, x: f32, y: f32) -> bool {
        x >= self.position.x
            && x <= self.position.x + self.size.width
            && y >= self.position.y
            && y <= self.position.y + self.size.height
    }
}
