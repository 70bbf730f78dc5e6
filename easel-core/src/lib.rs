//! # Easel Core
//!
//! Core editing logic for a canvas-based visual editor: a mutable
//! collection of positioned, sized, rotated, layered items with full
//! undo/redo over every committed edit.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │                 easel-core                  │
//! ├─────────────────────────────────────────────┤
//! │  Canvas          │  Editor                  │
//! │  - Items         │  - Mutation operations   │
//! │  - Z-order       │  - Gesture boundary      │
//! │  - Invariants    │  - Selection tracking    │
//! ├─────────────────────────────────────────────┤
//! │  History<S>      │  Collaborator contracts  │
//! │  - past/current  │  - CanvasStorage (async) │
//! │  - future        │  - CanvasRenderer        │
//! │  - bounded depth │  - RecentItems           │
//! └─────────────────────────────────────────────┘
//! ```
//!
//! All state transitions are synchronous, in-memory and single-threaded;
//! the only asynchronous boundary is the persistence collaborator, which
//! receives immutable [`CanvasDocument`] snapshots.

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod canvas;
pub mod document;
pub mod editor;
pub mod error;
pub mod history;
pub mod item;
pub mod ops;
pub mod persist;
pub mod recents;
pub mod render;
pub mod selection;

pub use canvas::{Background, Canvas, CanvasId};
pub use document::{CanvasDocument, ItemDocument};
pub use editor::Editor;
pub use error::{CanvasError, CanvasResult};
pub use history::History;
pub use item::{Extent, Item, ItemId, ItemKind, Point, ShapeKind};
pub use ops::EditOp;
pub use persist::{CanvasStorage, PersistError, PersistResult};
pub use recents::{RecentItems, DEFAULT_RECENT_LIMIT};
pub use render::{CanvasRenderer, RenderError, RenderResult};
pub use selection::Selection;

/// Easel core version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
