#![forbid(unsafe_code)]

//! Drawing-surface interface and paint types.
//!
//! The console renders by calling into a [`DrawSurface`] owned by the
//! game. Glyph measurement lives on the same trait because caret
//! placement needs the exact widths the renderer will use.

use crate::colour::Colour;
use crate::geometry::{ScreenCoords, ScreenRect};

use bitflags::bitflags;

/// Font style used for console text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FontStyle {
    /// Compact font, for small screens.
    Small,
    /// Regular console font.
    #[default]
    Medium,
}

bitflags! {
    /// Flags for inset-rectangle fills.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct RectInsetFlags: u8 {
        /// Draw only the bevel, leave the interior unfilled.
        const FILL_NONE = 1 << 0;
        /// Sunken bevel instead of raised.
        const BORDER_INSET = 1 << 1;
    }
}

/// A translucency filter palette id, opaque to the console.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterPalette(pub u8);

impl FilterPalette {
    /// The darkening filter used for the console panels.
    pub const DARKEN: FilterPalette = FilterPalette(51);
}

/// How to paint a string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TextPaint {
    /// Text colour.
    pub colour: Colour,
    /// Font style.
    pub font: FontStyle,
    /// Draw a dark outline around the glyphs.
    pub outline: bool,
}

impl TextPaint {
    /// Create a paint with the given colour and font, no outline.
    #[must_use]
    pub const fn new(colour: Colour, font: FontStyle) -> Self {
        Self {
            colour,
            font,
            outline: false,
        }
    }

    /// This paint with the outline flag set (builder).
    #[must_use]
    pub const fn with_outline(mut self, outline: bool) -> Self {
        self.outline = outline;
        self
    }
}

/// The rendering seam between the console and the game.
///
/// Fill and draw calls take effect immediately on the current frame's
/// target; nothing is retained between frames. Measurement ignores
/// inline format tokens; callers strip them first.
pub trait DrawSurface {
    /// Fill a rectangle with a flat colour.
    fn fill_rect(&mut self, rect: ScreenRect, colour: Colour);

    /// Fill a rectangle with a bevelled inset border.
    fn fill_rect_inset(&mut self, rect: ScreenRect, colour: Colour, flags: RectInsetFlags);

    /// Blend a translucency filter over a rectangle.
    fn filter_rect(&mut self, rect: ScreenRect, palette: FilterPalette);

    /// Draw a string at a pixel position.
    fn draw_string(&mut self, pos: ScreenCoords, text: &str, paint: TextPaint);

    /// Measure a string's width in pixels, without formatting.
    fn string_width(&self, text: &str, font: FontStyle) -> i32;

    /// Line height for a font style, in pixels.
    fn line_height(&self, font: FontStyle) -> i32;
}
