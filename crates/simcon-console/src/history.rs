#![forbid(unsafe_code)]

//! Bounded ring of executed input lines.
//!
//! The cursor lives in `[0, len]`; `cursor == len` is the fresh-line
//! state (not browsing). Navigation never wraps around.

/// Bounded history of executed input lines with a navigation cursor.
#[derive(Debug, Clone)]
pub struct HistoryRing {
    entries: Vec<String>,
    capacity: usize,
    cursor: usize,
}

impl HistoryRing {
    /// Create an empty history with the given capacity.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: Vec::new(),
            capacity,
            cursor: 0,
        }
    }

    /// Record an executed line.
    ///
    /// At capacity the oldest entry is dropped first. The cursor
    /// always returns to the fresh-line state afterwards. Callers only
    /// add non-empty lines; this is not re-checked here.
    pub fn add(&mut self, line: &str) {
        if self.capacity == 0 {
            return;
        }
        if self.entries.len() >= self.capacity {
            self.entries.remove(0);
        }
        self.entries.push(line.to_string());
        self.cursor = self.entries.len();
    }

    /// Step to the previous (older) entry.
    ///
    /// Returns the entry to load, or `None` when already at the oldest
    /// entry (the cursor does not move).
    pub fn previous(&mut self) -> Option<&str> {
        if self.cursor > 0 {
            self.cursor -= 1;
            Some(self.entries[self.cursor].as_str())
        } else {
            None
        }
    }

    /// Step to the next (newer) entry.
    ///
    /// Returns the entry to load, or `None` when stepping past the
    /// newest entry: the cursor snaps to the fresh-line state and the
    /// caller should clear the edit line.
    pub fn next(&mut self) -> Option<&str> {
        if self.cursor + 1 < self.entries.len() {
            self.cursor += 1;
            Some(self.entries[self.cursor].as_str())
        } else {
            self.cursor = self.entries.len();
            None
        }
    }

    /// Number of retained entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if no entries are retained.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Current cursor position in `[0, len]`.
    #[must_use]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Check if the cursor is in the fresh-line state.
    #[must_use]
    pub fn at_fresh_line(&self) -> bool {
        self.cursor == self.entries.len()
    }

    /// The entry at `index`, oldest first.
    #[must_use]
    pub fn entry(&self, index: usize) -> Option<&str> {
        self.entries.get(index).map(String::as_str)
    }
}
