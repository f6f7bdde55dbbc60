#![forbid(unsafe_code)]

//! Input-line edit state.
//!
//! Holds the console's authoritative copy of the edit line, the caret
//! as both a byte offset and a measured pixel position, and the blink
//! phase. While the console is open the platform text-input service
//! leases the line; this state becomes authoritative again as soon as
//! the session ends.

use simcon_core::{DrawSurface, FontStyle, TextInputSession};
use unicode_segmentation::UnicodeSegmentation;

/// Blink ticks during which the caret is drawn.
pub const CARET_FLASH_THRESHOLD: u32 = 15;
/// Full blink cycle length in ticks.
pub const CARET_FLASH_PERIOD: u32 = 30;

/// The console's single-line edit state.
#[derive(Debug, Clone)]
pub struct InputEditState {
    line: String,
    capacity: usize,
    selection_start: usize,
    caret_x: i32,
    caret_ticks: u32,
}

impl InputEditState {
    /// Create an empty edit state with the given byte capacity.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self {
            line: String::new(),
            capacity,
            selection_start: 0,
            caret_x: 0,
            caret_ticks: 0,
        }
    }

    /// The current line content.
    #[must_use]
    pub fn line(&self) -> &str {
        &self.line
    }

    /// Caret position as a byte offset into the line.
    #[must_use]
    pub fn selection_start(&self) -> usize {
        self.selection_start
    }

    /// Measured caret x position in pixels.
    #[must_use]
    pub fn caret_x(&self) -> i32 {
        self.caret_x
    }

    /// Replace the line content, e.g. with a history entry.
    ///
    /// Truncates at a grapheme boundary to fit the capacity (one byte
    /// reserved, mirroring the platform buffer contract). The caret
    /// byte offset is clamped into the new line; its pixel position is
    /// not recomputed here.
    pub fn set_text(&mut self, text: &str) {
        let max = self.capacity.saturating_sub(1);
        let mut end = 0;
        for (index, grapheme) in text.grapheme_indices(true) {
            if index + grapheme.len() > max {
                break;
            }
            end = index + grapheme.len();
        }
        self.line.clear();
        self.line.push_str(&text[..end]);
        let mut caret = self.selection_start.min(self.line.len());
        while caret > 0 && !self.line.is_char_boundary(caret) {
            caret -= 1;
        }
        self.selection_start = caret;
    }

    /// Zero the line and caret offset.
    pub fn clear(&mut self) {
        self.line.clear();
        self.selection_start = 0;
    }

    /// Move the caret to `position` (a byte offset) and re-measure its
    /// pixel x against the active font.
    ///
    /// The blink phase resets to zero so the caret is solid right
    /// after an edit.
    pub fn refresh_caret(&mut self, surface: &dyn DrawSurface, font: FontStyle, position: usize) {
        self.caret_ticks = 0;
        let mut position = position.min(self.line.len());
        // Offsets come from the platform session; floor to a char
        // boundary before slicing.
        while position > 0 && !self.line.is_char_boundary(position) {
            position -= 1;
        }
        self.selection_start = position;
        self.caret_x = surface.string_width(&self.line[..position], font);
    }

    /// Advance the blink phase by one frame.
    pub fn advance_blink(&mut self) {
        self.caret_ticks = (self.caret_ticks + 1) % CARET_FLASH_PERIOD;
    }

    /// Check if the caret is in the visible half of the blink cycle.
    #[must_use]
    pub fn caret_visible(&self) -> bool {
        self.caret_ticks < CARET_FLASH_THRESHOLD
    }

    /// Session metadata for the current line, caret at the end.
    ///
    /// `size` is bytes, `length` is codepoints; the platform service
    /// tracks both for its own caret handling.
    #[must_use]
    pub fn session_metadata(&self) -> TextInputSession {
        TextInputSession {
            size: self.line.len(),
            length: self.line.chars().count(),
            selection_start: self.line.len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use simcon_core::{
        Colour, FilterPalette, RectInsetFlags, ScreenCoords, ScreenRect, TextPaint,
    };

    /// Measures every codepoint as 8px wide.
    struct FixedWidthSurface;

    impl DrawSurface for FixedWidthSurface {
        fn fill_rect(&mut self, _rect: ScreenRect, _colour: Colour) {}
        fn fill_rect_inset(&mut self, _r: ScreenRect, _c: Colour, _f: RectInsetFlags) {}
        fn filter_rect(&mut self, _rect: ScreenRect, _palette: FilterPalette) {}
        fn draw_string(&mut self, _pos: ScreenCoords, _text: &str, _paint: TextPaint) {}
        fn string_width(&self, text: &str, _font: FontStyle) -> i32 {
            text.chars().count() as i32 * 8
        }
        fn line_height(&self, _font: FontStyle) -> i32 {
            10
        }
    }

    #[test]
    fn refresh_caret_measures_prefix_and_resets_blink() {
        let mut input = InputEditState::new(256);
        input.set_text("say hello");
        for _ in 0..20 {
            input.advance_blink();
        }
        assert!(!input.caret_visible());

        input.refresh_caret(&FixedWidthSurface, FontStyle::Medium, 3);
        assert_eq!(input.selection_start(), 3);
        assert_eq!(input.caret_x(), 24);
        assert!(input.caret_visible());
    }

    #[test]
    fn refresh_caret_clamps_past_end() {
        let mut input = InputEditState::new(256);
        input.set_text("ab");
        input.refresh_caret(&FixedWidthSurface, FontStyle::Medium, 99);
        assert_eq!(input.selection_start(), 2);
    }

    #[test]
    fn blink_duty_cycle() {
        let mut input = InputEditState::new(256);
        assert!(input.caret_visible());
        for tick in 1..CARET_FLASH_PERIOD {
            input.advance_blink();
            assert_eq!(input.caret_visible(), tick < CARET_FLASH_THRESHOLD);
        }
        input.advance_blink();
        assert!(input.caret_visible());
    }

    #[test]
    fn set_text_truncates_on_grapheme_boundary() {
        let mut input = InputEditState::new(5);
        input.set_text("héllo");
        // "hé" is 3 bytes; adding 'l' would exceed the 4 usable bytes.
        assert_eq!(input.line(), "hél");
    }

    #[test]
    fn set_text_clamps_stale_caret() {
        let mut input = InputEditState::new(256);
        input.set_text("a longer line");
        input.refresh_caret(&FixedWidthSurface, FontStyle::Medium, 10);
        input.set_text("ab");
        assert!(input.selection_start() <= input.line().len());
    }

    #[test]
    fn clear_zeroes_line_and_caret() {
        let mut input = InputEditState::new(256);
        input.set_text("abc");
        input.refresh_caret(&FixedWidthSurface, FontStyle::Medium, 2);
        input.clear();
        assert_eq!(input.line(), "");
        assert_eq!(input.selection_start(), 0);
    }

    #[test]
    fn session_metadata_counts_bytes_and_codepoints() {
        let mut input = InputEditState::new(256);
        input.set_text("héllo");
        let meta = input.session_metadata();
        assert_eq!(meta.size, 6);
        assert_eq!(meta.length, 5);
        assert_eq!(meta.selection_start, 6);
    }
}
