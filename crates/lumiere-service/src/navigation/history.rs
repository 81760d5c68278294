//! In-memory navigation history.

use tracing::debug;
use url::Url;

/// A browser-style history stack of locations.
///
/// Every move returns the new current location; the caller hands it to
/// the viewing session as a location-change notification.
#[derive(Debug, Clone)]
pub struct NavigationHistory {
    entries: Vec<Url>,
    cursor: usize,
}

impl NavigationHistory {
    /// Starts a history at `initial`.
    pub fn new(initial: Url) -> Self {
        Self {
            entries: vec![initial],
            cursor: 0,
        }
    }

    /// The current location.
    pub fn current(&self) -> &Url {
        &self.entries[self.cursor]
    }

    /// Navigates to `location`, discarding any forward entries.
    pub fn push(&mut self, location: Url) -> &Url {
        self.entries.truncate(self.cursor + 1);
        self.entries.push(location);
        self.cursor += 1;
        debug!(location = %self.current(), depth = self.entries.len(), "History push");
        self.current()
    }

    /// Replaces the current entry without adding one.
    pub fn replace(&mut self, location: Url) -> &Url {
        self.entries[self.cursor] = location;
        self.current()
    }

    /// Moves one entry back, if possible.
    pub fn back(&mut self) -> Option<&Url> {
        if !self.can_go_back() {
            return None;
        }
        self.cursor -= 1;
        debug!(location = %self.current(), "History back");
        Some(self.current())
    }

    /// Moves one entry forward, if possible.
    pub fn forward(&mut self) -> Option<&Url> {
        if !self.can_go_forward() {
            return None;
        }
        self.cursor += 1;
        debug!(location = %self.current(), "History forward");
        Some(self.current())
    }

    /// Whether there is an entry behind the current one.
    pub fn can_go_back(&self) -> bool {
        self.cursor > 0
    }

    /// Whether there is an entry ahead of the current one.
    pub fn can_go_forward(&self) -> bool {
        self.cursor + 1 < self.entries.len()
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always false: a history holds at least its initial entry.
    pub fn is_empty(&self) -> bool {
        false
    }
}
