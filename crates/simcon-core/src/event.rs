#![forbid(unsafe_code)]

//! Discrete console input events.
//!
//! The embedding game's input dispatcher translates raw key presses
//! into these events and routes them to the console only while it is
//! open. Printable characters never arrive here; the text input host
//! writes them straight into the edit buffer.

/// An input event for the console.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConsoleInput {
    /// Clear the current input line.
    LineClear,
    /// Execute the current input line.
    LineExecute,
    /// Load the previous (older) history entry into the input line.
    HistoryPrevious,
    /// Load the next (newer) history entry, or return to the fresh line.
    HistoryNext,
    /// Page the log towards older lines.
    ScrollPrevious,
    /// Page the log towards newer lines.
    ScrollNext,
}
