#![forbid(unsafe_code)]

//! Host interfaces: text input, command interpreter, screen, theme.
//!
//! Everything the console needs from its embedding game besides
//! drawing. Each trait is a deliberately small seam; the game supplies
//! one implementation of each for the lifetime of the console.

use crate::colour::{Colour, ColourShades, FormatToken};
use crate::geometry::{ScreenCoords, ScreenRect};

/// Metadata for an active text-input session.
///
/// The session is a scoped lease over the console's edit line: while
/// it exists, the platform text-input service owns the raw buffer and
/// keeps these fields current as the user types. The console re-syncs
/// them itself after history navigation rewrites the line wholesale.
/// The lease must be dropped the moment the console closes; holding it
/// past [`TextInputHost::stop`] is a contract violation.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TextInputSession {
    /// Current line length in bytes.
    pub size: usize,
    /// Current line length in codepoints.
    pub length: usize,
    /// Caret position as a byte offset.
    pub selection_start: usize,
}

/// The platform text-input service.
pub trait TextInputHost {
    /// Begin a text-input session over the console's edit line.
    ///
    /// `current` is the line content at acquisition time; `max_len` is
    /// the edit buffer's byte capacity. Starting while a session is
    /// already active rebinds it; clearing the line does exactly that.
    fn start(&mut self, current: &str, max_len: usize) -> TextInputSession;

    /// End the active session, if any.
    fn stop(&mut self);
}

/// The append path command results flow back through.
pub trait ConsoleOutput {
    /// Append one or more log lines, split on `'\n'`.
    fn write_line(&mut self, text: &str, colour: FormatToken);
}

/// The external command interpreter.
pub trait CommandInterpreter {
    /// Execute one input line, writing any output through `out`.
    fn execute(&mut self, line: &str, out: &mut dyn ConsoleOutput);
}

/// Viewport and window queries against the game's screen.
pub trait Screen {
    /// Current screen width in pixels.
    fn width(&self) -> i32;

    /// Pan position of the main game viewport, if one exists.
    fn main_viewport_pos(&self) -> Option<ScreenCoords>;

    /// Schedule a redraw of the whole screen.
    fn invalidate_all(&mut self);

    /// Schedule a redraw of one screen region.
    fn mark_dirty(&mut self, rect: ScreenRect);
}

/// Themed colour slots for the console window class.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeSlot {
    /// Panel background colour.
    Background,
    /// Log and input text colour.
    Text,
}

/// Theme and shade-table lookup.
pub trait Theme {
    /// The themed colour for a console slot.
    fn colour(&self, slot: ThemeSlot) -> Colour;

    /// The fixed shade-table row for a base colour.
    fn shades(&self, base: Colour) -> ColourShades;
}
