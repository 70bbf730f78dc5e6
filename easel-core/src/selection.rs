//! Selection tracking for the editing target.
//!
//! Selection is deliberately not part of the canvas value, so undo/redo
//! never changes which item is selected. The tracker is reconciled against
//! the canvas after every structural change so it can never dangle.

use crate::canvas::Canvas;
use crate::item::ItemId;

/// Tracks the item (if any) that is the current editing target.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Selection {
    selected: Option<ItemId>,
}

impl Selection {
    /// Create an empty selection.
    #[must_use]
    pub const fn new() -> Self {
        Self { selected: None }
    }

    /// The selected item ID, if any.
    #[must_use]
    pub const fn selected_id(&self) -> Option<ItemId> {
        self.selected
    }

    /// Check whether the given item is selected.
    #[must_use]
    pub fn is_selected(&self, id: ItemId) -> bool {
        self.selected == Some(id)
    }

    /// Select an item. Existence is the caller's responsibility; the editor
    /// validates against its canvas before delegating here.
    pub fn select(&mut self, id: ItemId) {
        self.selected = Some(id);
    }

    /// Clear the selection.
    pub fn clear(&mut self) {
        self.selected = None;
    }

    /// Drop the selection if the selected item no longer exists on the
    /// canvas. Returns true if the selection was cleared.
    pub fn reconcile(&mut self, canvas: &Canvas) -> bool {
        match self.selected {
            Some(id) if !canvas.contains(id) => {
                self.selected = None;
                true
            }
            _ => false,
        }
    }
}
