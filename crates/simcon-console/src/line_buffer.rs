#![forbid(unsafe_code)]

//! Bounded scrollback log.
//!
//! Stores rendered text lines in insertion order with FIFO eviction
//! once the capacity is exceeded. Lines may carry a single leading
//! colour-override token; the console's default colour is elided so
//! the renderer's default path stays on its fast route.

use std::collections::VecDeque;

use simcon_core::{ConsoleOutput, FormatToken};

/// Bounded ordered log of console lines.
#[derive(Debug, Clone)]
pub struct LineBuffer {
    lines: VecDeque<String>,
    max_lines: usize,
}

impl LineBuffer {
    /// Create an empty buffer with the given line capacity.
    #[must_use]
    pub fn new(max_lines: usize) -> Self {
        Self {
            lines: VecDeque::with_capacity(max_lines.min(1024)),
            max_lines,
        }
    }

    /// Append `text` as one or more log lines, split on `'\n'`.
    ///
    /// Lines written with a non-default colour get the fixed override
    /// marker; the default window colour stays unmarked since the
    /// renderer's default path already uses it. Eviction past capacity
    /// is unconditional and silent, oldest lines first.
    pub fn write_line(&mut self, text: &str, colour: FormatToken) {
        let prefix = colour.marker();
        for line in text.split('\n') {
            self.lines.push_back(format!("{prefix}{line}"));
        }

        let excess = self.lines.len().saturating_sub(self.max_lines);
        if excess > 0 {
            self.lines.drain(..excess);
        }
    }

    /// Append text to the most recent line, if any.
    ///
    /// Used to echo the executed command onto the trailing prompt line.
    pub fn append_to_last(&mut self, text: &str) {
        if let Some(last) = self.lines.back_mut() {
            last.push_str(text);
        }
    }

    /// Drop all lines.
    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Number of stored lines.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Check if the buffer holds no lines.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// The line at `index`, oldest first.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&str> {
        self.lines.get(index).map(String::as_str)
    }

    /// Iterate over stored lines, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.lines.iter().map(String::as_str)
    }
}

impl ConsoleOutput for LineBuffer {
    fn write_line(&mut self, text: &str, colour: FormatToken) {
        LineBuffer::write_line(self, text, colour);
    }
}
