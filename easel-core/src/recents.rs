//! Recently-used and favorite item tracking.
//!
//! A small, separately-persisted value type: an ordered list of recently
//! used identifiers capped at a configurable maximum, plus a set of
//! favorites. Identifiers are the string form of an item's unique ID, so
//! the tracker works across canvases without holding live references. The
//! persisting collaborator stores the whole value via its JSON round-trip.

use std::collections::{HashSet, VecDeque};

use serde::{Deserialize, Serialize};

/// Default cap on the recents list.
pub const DEFAULT_RECENT_LIMIT: usize = 10;

/// Ordered recents (most recent first) and favorites, keyed by identifier
/// string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecentItems {
    /// Recently used identifiers, most recent first.
    recent: VecDeque<String>,
    /// Favorited identifiers.
    favorites: HashSet<String>,
    /// Cap on `recent`; oldest entries are dropped beyond it.
    max_size: usize,
}

impl RecentItems {
    /// Create an empty tracker with the default cap.
    #[must_use]
    pub fn new() -> Self {
        Self::with_max_size(DEFAULT_RECENT_LIMIT)
    }

    /// Create an empty tracker with a custom cap (at least 1).
    #[must_use]
    pub fn with_max_size(max_size: usize) -> Self {
        Self {
            recent: VecDeque::new(),
            favorites: HashSet::new(),
            max_size: max_size.max(1),
        }
    }

    /// Record a use of the given identifier. An identifier already on the
    /// list moves to the front; the list is truncated from the old end once
    /// it exceeds the cap.
    pub fn touch(&mut self, id: impl Into<String>) {
        let id = id.into();
        self.recent.retain(|existing| *existing != id);
        self.recent.push_front(id);
        self.recent.truncate(self.max_size);
    }

    /// Recently used identifiers, most recent first.
    pub fn recent(&self) -> impl Iterator<Item = &str> {
        self.recent.iter().map(String::as_str)
    }

    /// Number of tracked recents.
    #[must_use]
    pub fn len(&self) -> usize {
        self.recent.len()
    }

    /// Check if no recents are tracked.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.recent.is_empty()
    }

    /// Mark or unmark an identifier as a favorite.
    pub fn set_favorite(&mut self, id: impl Into<String>, favored: bool) {
        let id = id.into();
        if favored {
            self.favorites.insert(id);
        } else {
            self.favorites.remove(&id);
        }
    }

    /// Flip an identifier's favorite state; returns the new state.
    pub fn toggle_favorite(&mut self, id: impl Into<String>) -> bool {
        let id = id.into();
        if self.favorites.remove(&id) {
            false
        } else {
            self.favorites.insert(id);
            true
        }
    }

    /// Check whether an identifier is favorited.
    #[must_use]
    pub fn is_favorite(&self, id: &str) -> bool {
        self.favorites.contains(id)
    }

    /// Favorited identifiers, in no particular order.
    pub fn favorites(&self) -> impl Iterator<Item = &str> {
        self.favorites.iter().map(String::as_str)
    }

    /// Serialize the tracker for persistence.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Deserialize a tracker from persisted JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if deserialization fails.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

impl Default for RecentItems {
    fn default() -> Self {
        Self::new()
    }
}
