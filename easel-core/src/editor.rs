//! The editing surface: discrete mutation operations over the live canvas,
//! each committed as exactly one history snapshot.
//!
//! The editor wraps a [`History`] specialized to [`Canvas`]; the history
//! manager exclusively owns the live canvas together with the undo/redo
//! stacks. Every operation clones the current canvas, mutates the clone, and
//! commits it on success — a rejected operation leaves both canvas and
//! history untouched. Selection rides alongside and is never part of a
//! snapshot.

use crate::canvas::{Background, Canvas};
use crate::document::CanvasDocument;
use crate::error::{CanvasError, CanvasResult};
use crate::history::History;
use crate::item::{Extent, Item, ItemId, Point};
use crate::ops::EditOp;
use crate::selection::Selection;

/// An interactive editing session over one canvas.
#[derive(Debug, Clone)]
pub struct Editor {
    history: History<Canvas>,
    selection: Selection,
    /// Pre-gesture snapshot while a drag gesture is in flight.
    gesture_base: Option<Canvas>,
}

impl Editor {
    /// Start an editing session with unbounded history.
    #[must_use]
    pub fn new(canvas: Canvas) -> Self {
        Self {
            history: History::new(canvas),
            selection: Selection::new(),
            gesture_base: None,
        }
    }

    /// Start an editing session keeping at most `max_depth` undo steps.
    #[must_use]
    pub fn with_max_history(canvas: Canvas, max_depth: usize) -> Self {
        Self {
            history: History::with_max_depth(canvas, max_depth),
            selection: Selection::new(),
            gesture_base: None,
        }
    }

    /// Start an editing session from a persisted document.
    ///
    /// # Errors
    ///
    /// Returns an error if the document violates a canvas invariant.
    pub fn load(document: CanvasDocument) -> CanvasResult<Self> {
        Ok(Self::new(document.into_canvas()?))
    }

    /// The live canvas.
    #[must_use]
    pub fn canvas(&self) -> &Canvas {
        self.history.current()
    }

    /// An immutable snapshot of the live canvas for persistence or
    /// rendering collaborators.
    #[must_use]
    pub fn document(&self) -> CanvasDocument {
        CanvasDocument::from_canvas(self.canvas())
    }

    // -----------------------------------------------------------------------
    // Mutation operations
    // -----------------------------------------------------------------------

    /// Dispatch a serialized edit intent to the matching typed operation.
    ///
    /// # Errors
    ///
    /// Propagates the rejection of the underlying operation.
    pub fn apply(&mut self, op: EditOp) -> CanvasResult<()> {
        tracing::debug!("Applying edit op: {op:?}");
        match op {
            EditOp::AddItem { item } => self.add_item(item).map(|_| ()),
            EditOp::RemoveItem { id } => self.remove_item(id).map(|_| ()),
            EditOp::SetPosition { id, position } => self.set_position(id, position),
            EditOp::SetSize { id, size } => self.set_size(id, size),
            EditOp::SetRotation { id, degrees } => self.set_rotation(id, degrees),
            EditOp::SetOpacity { id, opacity } => self.set_opacity(id, opacity),
            EditOp::SetZIndex { id, z_index } => self.set_z_index(id, z_index),
            EditOp::ToggleLock { id } => self.toggle_lock(id).map(|_| ()),
            EditOp::SetBackground { background } => {
                self.set_background(background);
                Ok(())
            }
            EditOp::SetName { name } => {
                self.set_name(name);
                Ok(())
            }
            EditOp::ResizeCanvas { size } => {
                self.resize_canvas(size);
                Ok(())
            }
        }
    }

    /// Add an item on top of the stack.
    ///
    /// # Errors
    ///
    /// Propagates [`Canvas::add_item`] rejections.
    pub fn add_item(&mut self, item: Item) -> CanvasResult<ItemId> {
        self.commit(|canvas| canvas.add_item(item))
    }

    /// Insert an item at an explicit z position.
    ///
    /// # Errors
    ///
    /// Propagates [`Canvas::insert_item`] rejections.
    pub fn insert_item(&mut self, item: Item, z: usize) -> CanvasResult<ItemId> {
        self.commit(|canvas| canvas.insert_item(item, z))
    }

    /// Remove an item and return it. Clears the selection if the removed
    /// item was selected.
    ///
    /// # Errors
    ///
    /// Propagates [`Canvas::remove_item`] rejections.
    pub fn remove_item(&mut self, id: ItemId) -> CanvasResult<Item> {
        let removed = self.commit(|canvas| canvas.remove_item(id))?;
        self.selection.reconcile(self.history.current());
        Ok(removed)
    }

    /// Move an item.
    ///
    /// # Errors
    ///
    /// Propagates [`Canvas::set_position`] rejections.
    pub fn set_position(&mut self, id: ItemId, position: Point) -> CanvasResult<()> {
        self.commit(|canvas| canvas.set_position(id, position))
    }

    /// Resize an item.
    ///
    /// # Errors
    ///
    /// Propagates [`Canvas::set_size`] rejections.
    pub fn set_size(&mut self, id: ItemId, size: Extent) -> CanvasResult<()> {
        self.commit(|canvas| canvas.set_size(id, size))
    }

    /// Rotate an item.
    ///
    /// # Errors
    ///
    /// Propagates [`Canvas::set_rotation`] rejections.
    pub fn set_rotation(&mut self, id: ItemId, degrees: f32) -> CanvasResult<()> {
        self.commit(|canvas| canvas.set_rotation(id, degrees))
    }

    /// Change an item's opacity.
    ///
    /// # Errors
    ///
    /// Propagates [`Canvas::set_opacity`] rejections.
    pub fn set_opacity(&mut self, id: ItemId, opacity: f32) -> CanvasResult<()> {
        self.commit(|canvas| canvas.set_opacity(id, opacity))
    }

    /// Move an item to a new layer position.
    ///
    /// # Errors
    ///
    /// Propagates [`Canvas::set_z_index`] rejections.
    pub fn set_z_index(&mut self, id: ItemId, z: usize) -> CanvasResult<()> {
        self.commit(|canvas| canvas.set_z_index(id, z))
    }

    /// Toggle an item's lock flag. Returns the new lock state.
    ///
    /// # Errors
    ///
    /// Propagates [`Canvas::toggle_lock`] rejections.
    pub fn toggle_lock(&mut self, id: ItemId) -> CanvasResult<bool> {
        self.commit(|canvas| canvas.toggle_lock(id))
    }

    /// Replace the canvas background.
    pub fn set_background(&mut self, background: Background) {
        let _ = self.commit(|canvas| {
            canvas.set_background(background);
            Ok(())
        });
    }

    /// Rename the canvas.
    pub fn set_name(&mut self, name: impl Into<String>) {
        let name = name.into();
        let _ = self.commit(|canvas| {
            canvas.set_name(name);
            Ok(())
        });
    }

    /// Resize the canvas bounds.
    pub fn resize_canvas(&mut self, size: Extent) {
        let _ = self.commit(|canvas| {
            canvas.resize(size);
            Ok(())
        });
    }

    // -----------------------------------------------------------------------
    // Gesture boundary
    // -----------------------------------------------------------------------

    /// Begin a gesture (e.g. a drag). Mutations issued until
    /// [`Editor::end_gesture`] update the live canvas without recording
    /// history; the whole gesture commits as one entry on release. Nested
    /// calls are ignored.
    pub fn begin_gesture(&mut self) {
        if self.gesture_base.is_none() {
            self.gesture_base = Some(self.history.current().clone());
        }
    }

    /// Whether a gesture is in flight.
    #[must_use]
    pub fn gesture_active(&self) -> bool {
        self.gesture_base.is_some()
    }

    /// End the current gesture, committing its net effect as exactly one
    /// history entry. A gesture that changed nothing records nothing.
    pub fn end_gesture(&mut self) {
        if let Some(base) = self.gesture_base.take() {
            let settled = self.history.current().clone();
            if settled != base {
                tracing::debug!("Committing gesture edit");
                self.history.replace_current(base);
                self.history.record(settled);
            }
        }
    }

    /// Abort the current gesture, restoring the pre-gesture canvas.
    pub fn cancel_gesture(&mut self) {
        if let Some(base) = self.gesture_base.take() {
            self.history.replace_current(base);
            self.selection.reconcile(self.history.current());
        }
    }

    // -----------------------------------------------------------------------
    // History
    // -----------------------------------------------------------------------

    /// Step back one committed edit. Returns false (state unchanged) if the
    /// past is exhausted. An in-flight gesture is cancelled first.
    pub fn undo(&mut self) -> bool {
        self.cancel_gesture();
        let changed = self.history.undo().is_some();
        if changed {
            self.selection.reconcile(self.history.current());
        }
        changed
    }

    /// Step forward one undone edit. Returns false (state unchanged) if the
    /// future is exhausted. An in-flight gesture is cancelled first.
    pub fn redo(&mut self) -> bool {
        self.cancel_gesture();
        let changed = self.history.redo().is_some();
        if changed {
            self.selection.reconcile(self.history.current());
        }
        changed
    }

    /// Whether an undo step is available.
    #[must_use]
    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    /// Whether a redo step is available.
    #[must_use]
    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Number of available undo steps.
    #[must_use]
    pub fn undo_depth(&self) -> usize {
        self.history.undo_depth()
    }

    /// Number of available redo steps.
    #[must_use]
    pub fn redo_depth(&self) -> usize {
        self.history.redo_depth()
    }

    // -----------------------------------------------------------------------
    // Selection
    // -----------------------------------------------------------------------

    /// The selected item ID, if any.
    #[must_use]
    pub fn selected_id(&self) -> Option<ItemId> {
        self.selection.selected_id()
    }

    /// Select an item as the editing target.
    ///
    /// # Errors
    ///
    /// Returns [`crate::CanvasError::ItemNotFound`] if the item does not
    /// exist on the live canvas.
    pub fn select(&mut self, id: ItemId) -> CanvasResult<()> {
        if !self.history.current().contains(id) {
            return Err(CanvasError::ItemNotFound(id.to_string()));
        }
        self.selection.select(id);
        Ok(())
    }

    /// Select the topmost item at the given canvas coordinates, if any.
    /// Returns the new selection.
    pub fn select_at(&mut self, x: f32, y: f32) -> Option<ItemId> {
        match self.history.current().item_at(x, y) {
            Some(id) => {
                self.selection.select(id);
                Some(id)
            }
            None => {
                self.selection.clear();
                None
            }
        }
    }

    /// Clear the selection.
    pub fn clear_selection(&mut self) {
        self.selection.clear();
    }

    /// Commit a mutation: clone the live canvas, apply, and record the
    /// result as one history entry. Mutations that change nothing (or fail)
    /// record nothing. Inside a gesture the live canvas is swapped without
    /// recording; the gesture end owns the commit.
    fn commit<T>(&mut self, mutate: impl FnOnce(&mut Canvas) -> CanvasResult<T>) -> CanvasResult<T> {
        let mut next = self.history.current().clone();
        let value = mutate(&mut next)?;
        if next != *self.history.current() {
            if self.gesture_base.is_some() {
                self.history.replace_current(next);
            } else {
                self.history.record(next);
            }
        }
        Ok(value)
    }
}
